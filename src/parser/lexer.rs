//! Lexing automaton for ParsoTangue source
//!
//! The lexer is a finite-state machine that consumes one character at a time.
//! A [`LexingAutomaton`] owns the accumulation buffer and the current
//! [`State`]; each state is a plain transition function that looks at the
//! buffer and the next character and answers with a [`Transition`].
//!
//! # Transitions
//!
//! - **consume**: append the character, move to a (possibly identical) state
//! - **consume-emit**: append the character and emit a finished token
//! - **retain-emit**: emit the token accumulated so far without the character,
//!   reset to [`State::Initial`] and feed the same character again
//!
//! Retain-emit gives maximal munch with one character of lookahead: a run of
//! identifier or operator characters is only closed by the first character
//! that cannot extend it.
//!
//! # End of input
//!
//! The automaton only flushes an open token when it sees the sentinel
//! character [`SENTINEL`]. [`lex`] appends it; [`Lexer::new`] expects the
//! caller to have done so.
//!
//! The lexer never fails. Malformed constructs come out as
//! [`Literal::BadChar`], [`Literal::BadString`] or [`Token::UnknownSymbol`].

use super::symbols::*;
use super::token::{KeywordTable, Literal, Token};
use std::collections::VecDeque;
use std::iter::{Chain, Once};
use tracing::trace;

/// Automaton states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Initial,
    LetterIdentifier,
    OperatorIdentifier,
    /// A leading `0` that may still become binary, hexadecimal or decimal
    ZeroSymbol,
    BinaryLiteral,
    DecimalLiteral,
    HexadecimalLiteral,
    CharLiteralBegin,
    CharLiteralEnd,
    CharLiteralSlash,
    CharLiteralIncorrect,
    StringLiteral,
    SlashInString,
    InlineComment,
    WhiteSpace,
}

/// Outcome of feeding one character to a state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Consume(State),
    /// Replace the pending backslash with a resolved escape
    Substitute(char, State),
    ConsumeEmit(Token, State),
    RetainEmit(Token),
    /// Zero-width character, neither buffered nor emitted
    Skip,
}

/// Lexer context: accumulation buffer plus current state.
///
/// One automaton serves exactly one pass over one character stream.
pub struct LexingAutomaton {
    buffer: String,
    state: State,
    keywords: KeywordTable,
}

impl LexingAutomaton {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            state: State::Initial,
            keywords: KeywordTable::new(),
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Characters accumulated for the token currently open.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Feed one character, pushing every token it completes onto `emitted`.
    ///
    /// At most two tokens come out of one character: the token closed by a
    /// retain-emit and the one the same character completes in the initial
    /// state.
    pub fn process(&mut self, symbol: char, emitted: &mut VecDeque<Token>) {
        loop {
            match self.transition(symbol) {
                Transition::Consume(next) => {
                    self.buffer.push(symbol);
                    self.state = next;
                    return;
                }
                Transition::Substitute(resolved, next) => {
                    self.buffer.pop();
                    self.buffer.push(resolved);
                    self.state = next;
                    return;
                }
                Transition::ConsumeEmit(token, next) => {
                    self.buffer.clear();
                    self.state = next;
                    self.emit(token, emitted);
                    return;
                }
                Transition::RetainEmit(token) => {
                    self.buffer.clear();
                    self.state = State::Initial;
                    self.emit(token, emitted);
                }
                Transition::Skip => return,
            }
        }
    }

    fn emit(&self, token: Token, emitted: &mut VecDeque<Token>) {
        trace!(token = %token, "emitted token");
        emitted.push_back(token);
    }

    fn transition(&self, c: char) -> Transition {
        let buffer = self.buffer.as_str();
        match self.state {
            State::Initial => initial(c),
            State::LetterIdentifier => letter_identifier(&self.keywords, buffer, c),
            State::OperatorIdentifier => operator_identifier(buffer, c),
            State::ZeroSymbol => zero_symbol(c),
            State::BinaryLiteral => binary_literal(buffer, c),
            State::DecimalLiteral => decimal_literal(buffer, c),
            State::HexadecimalLiteral => hexadecimal_literal(buffer, c),
            State::CharLiteralBegin => char_literal_begin(c),
            State::CharLiteralEnd => char_literal_end(buffer, c),
            State::CharLiteralSlash => char_literal_slash(c),
            State::CharLiteralIncorrect => char_literal_incorrect(c),
            State::StringLiteral => string_literal(buffer, c),
            State::SlashInString => slash_in_string(c),
            State::InlineComment => inline_comment(c),
            State::WhiteSpace => white_space(c),
        }
    }
}

impl Default for LexingAutomaton {
    fn default() -> Self {
        Self::new()
    }
}

// ===== State transition functions =====

fn initial(c: char) -> Transition {
    use Transition::{Consume, ConsumeEmit, Skip};

    match c {
        _ if is_letter(c) || is_underscore(c) => Consume(State::LetterIdentifier),
        '0' => Consume(State::ZeroSymbol),
        _ if is_digit(c) => Consume(State::DecimalLiteral),
        _ if is_operator_symbol(c) => Consume(State::OperatorIdentifier),
        _ if is_whitespace(c) => Consume(State::WhiteSpace),
        '#' => Consume(State::InlineComment),
        '\'' => Consume(State::CharLiteralBegin),
        '"' => Consume(State::StringLiteral),
        '(' => ConsumeEmit(Token::LeftParen, State::Initial),
        ')' => ConsumeEmit(Token::RightParen, State::Initial),
        '{' => ConsumeEmit(Token::LeftCurl, State::Initial),
        '}' => ConsumeEmit(Token::RightCurl, State::Initial),
        ':' => ConsumeEmit(Token::Colon, State::Initial),
        ',' => ConsumeEmit(Token::Comma, State::Initial),
        _ if is_carriage_return(c) => Skip,
        _ if is_line_feed(c) => ConsumeEmit(Token::NewLine, State::Initial),
        _ if is_sentinel(c) => ConsumeEmit(Token::Eof, State::Initial),
        _ => ConsumeEmit(Token::UnknownSymbol, State::Initial),
    }
}

fn letter_identifier(keywords: &KeywordTable, buffer: &str, c: char) -> Transition {
    if is_identifier_part(c) {
        Transition::Consume(State::LetterIdentifier)
    } else {
        Transition::RetainEmit(keywords.classify(buffer))
    }
}

fn operator_identifier(buffer: &str, c: char) -> Transition {
    // The sentinel extends the run instead of closing it, so a trailing
    // operator swallows end of input and neither it nor EOF is emitted.
    if is_operator_symbol(c) || is_sentinel(c) {
        Transition::Consume(State::OperatorIdentifier)
    } else {
        Transition::RetainEmit(Token::operator(buffer))
    }
}

fn zero_symbol(c: char) -> Transition {
    if is_binary_prefix(c) {
        Transition::Consume(State::BinaryLiteral)
    } else if is_hexadecimal_prefix(c) {
        Transition::Consume(State::HexadecimalLiteral)
    } else if is_digit(c) || is_underscore(c) {
        Transition::Consume(State::DecimalLiteral)
    } else {
        Transition::RetainEmit(Token::Literal(Literal::Decimal(0)))
    }
}

fn binary_literal(buffer: &str, c: char) -> Transition {
    if is_binary_digit(c) || is_underscore(c) {
        Transition::Consume(State::BinaryLiteral)
    } else {
        Transition::RetainEmit(Token::Literal(Literal::Binary(integer_value(buffer, 2, 2))))
    }
}

fn decimal_literal(buffer: &str, c: char) -> Transition {
    if is_digit(c) || is_underscore(c) {
        Transition::Consume(State::DecimalLiteral)
    } else {
        Transition::RetainEmit(Token::Literal(Literal::Decimal(integer_value(buffer, 0, 10))))
    }
}

fn hexadecimal_literal(buffer: &str, c: char) -> Transition {
    if is_hexadecimal_digit(c) || is_underscore(c) {
        Transition::Consume(State::HexadecimalLiteral)
    } else {
        Transition::RetainEmit(Token::Literal(Literal::Hexadecimal(integer_value(
            buffer, 2, 16,
        ))))
    }
}

/// Value of an integer literal buffer.
///
/// Separators are removed before the `prefix_len` prefix characters are
/// skipped. No digits means zero; values past `u64::MAX` saturate.
fn integer_value(buffer: &str, prefix_len: usize, radix: u32) -> u64 {
    buffer
        .chars()
        .filter(|&c| !is_underscore(c))
        .skip(prefix_len)
        .filter_map(|c| c.to_digit(radix))
        .fold(0u64, |acc, digit| {
            acc.saturating_mul(u64::from(radix))
                .saturating_add(u64::from(digit))
        })
}

fn char_literal_begin(c: char) -> Transition {
    if c == '\'' {
        Transition::ConsumeEmit(Token::Literal(Literal::BadChar), State::Initial)
    } else if is_line_end(c) {
        Transition::RetainEmit(Token::Literal(Literal::BadChar))
    } else if c == '\\' {
        Transition::Consume(State::CharLiteralSlash)
    } else {
        Transition::Consume(State::CharLiteralEnd)
    }
}

fn char_literal_end(buffer: &str, c: char) -> Transition {
    if c == '\'' {
        // buffer is the opening quote followed by exactly one character
        let literal = match buffer.chars().nth(1) {
            Some(value) => Literal::Char(value),
            None => Literal::BadChar,
        };
        Transition::ConsumeEmit(Token::Literal(literal), State::Initial)
    } else if is_line_end(c) {
        Transition::RetainEmit(Token::Literal(Literal::BadChar))
    } else {
        Transition::Consume(State::CharLiteralIncorrect)
    }
}

fn char_literal_slash(c: char) -> Transition {
    if let Some(resolved) = resolve_escape(c) {
        Transition::Substitute(resolved, State::CharLiteralEnd)
    } else if is_line_end(c) {
        Transition::RetainEmit(Token::Literal(Literal::BadChar))
    } else {
        Transition::Consume(State::CharLiteralIncorrect)
    }
}

fn char_literal_incorrect(c: char) -> Transition {
    if c == '\'' {
        Transition::ConsumeEmit(Token::Literal(Literal::BadChar), State::Initial)
    } else if is_line_end(c) {
        Transition::RetainEmit(Token::Literal(Literal::BadChar))
    } else {
        Transition::Consume(State::CharLiteralIncorrect)
    }
}

fn string_literal(buffer: &str, c: char) -> Transition {
    if c == '\\' {
        Transition::Consume(State::SlashInString)
    } else if is_line_end(c) {
        Transition::RetainEmit(Token::Literal(Literal::BadString))
    } else if c == '"' {
        let value = buffer[1..].to_string();
        Transition::ConsumeEmit(Token::Literal(Literal::String(value)), State::Initial)
    } else {
        Transition::Consume(State::StringLiteral)
    }
}

fn slash_in_string(c: char) -> Transition {
    if let Some(resolved) = resolve_escape(c) {
        Transition::Substitute(resolved, State::StringLiteral)
    } else if is_line_end(c) {
        Transition::RetainEmit(Token::Literal(Literal::BadString))
    } else {
        // unknown escapes stay in the string verbatim
        Transition::Consume(State::StringLiteral)
    }
}

fn inline_comment(c: char) -> Transition {
    if is_line_end(c) {
        Transition::RetainEmit(Token::InlineComment)
    } else {
        Transition::Consume(State::InlineComment)
    }
}

fn white_space(c: char) -> Transition {
    if is_whitespace(c) {
        Transition::Consume(State::WhiteSpace)
    } else {
        Transition::RetainEmit(Token::WhiteSpace)
    }
}

// ===== Token stream =====

/// Lazy token stream over a character stream.
///
/// Pulls characters only as far as needed to produce the next token. The
/// stream is single-pass: it owns its automaton and cannot be rewound.
pub struct Lexer<I: Iterator<Item = char>> {
    chars: I,
    automaton: LexingAutomaton,
    pending: VecDeque<Token>,
}

impl<I: Iterator<Item = char>> Lexer<I> {
    /// Lex exactly the characters of `chars`.
    ///
    /// The stream must already end with [`SENTINEL`]; otherwise a token still
    /// open at the end is never flushed.
    pub fn new(chars: I) -> Self {
        Self {
            chars,
            automaton: LexingAutomaton::new(),
            pending: VecDeque::with_capacity(2),
        }
    }
}

impl<I: Iterator<Item = char>> Iterator for Lexer<I> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(token);
            }
            let symbol = self.chars.next()?;
            self.automaton.process(symbol, &mut self.pending);
        }
    }
}

/// Lex a character stream, appending the sentinel after its last character.
pub fn lex<I>(chars: I) -> Lexer<Chain<I::IntoIter, Once<char>>>
where
    I: IntoIterator<Item = char>,
{
    Lexer::new(chars.into_iter().chain(std::iter::once(SENTINEL)))
}
