//! Token model shared by the lexer and the parser
//!
//! Tokens are plain values: the lexer produces them, the parser matches on
//! them, and nothing holds a reference back into the source text.

use rustc_hash::FxHashMap;
use serde::Serialize;
use std::fmt;

/// Literal values, grouped so that the AST can own them directly.
///
/// Malformed string and char literals are still literals; rejecting them is
/// left to whatever consumes the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value")]
pub enum Literal {
    #[serde(rename = "BinaryLiteral")]
    Binary(u64),
    #[serde(rename = "DecimalLiteral")]
    Decimal(u64),
    #[serde(rename = "HexadecimalLiteral")]
    Hexadecimal(u64),
    #[serde(rename = "StringLiteral")]
    String(String),
    /// Unterminated on its line, or cut short by end of input
    #[serde(rename = "BadStringLiteral")]
    BadString,
    #[serde(rename = "CharLiteral")]
    Char(char),
    /// Empty, more than one character, or unterminated on its line
    #[serde(rename = "BadCharLiteral")]
    BadChar,
}

/// All token variants produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Letters, digits and underscores, not starting with a digit
    LetterIdentifier(String),
    /// Maximal run of `+ - * / % = > <`; validity is up to the parser
    OperatorIdentifier(String),
    Literal(Literal),

    // Keywords
    Fun,
    Return,
    If,
    Else,
    Val,
    Var,

    // Punctuation
    LeftParen,
    RightParen,
    LeftCurl,
    RightCurl,
    Colon,
    Comma,

    NewLine,
    WhiteSpace,
    /// `#` through end of line; the text itself is dropped
    InlineComment,
    UnknownSymbol,
    Eof,
}

impl Token {
    pub fn identifier(name: impl Into<String>) -> Self {
        Token::LetterIdentifier(name.into())
    }

    pub fn operator(symbols: impl Into<String>) -> Self {
        Token::OperatorIdentifier(symbols.into())
    }

    /// `val` and `var` share the declaration keyword category.
    pub fn is_declaration_keyword(&self) -> bool {
        matches!(self, Token::Val | Token::Var)
    }

    /// Tokens without grammatical meaning, dropped before parsing.
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            Token::WhiteSpace | Token::InlineComment | Token::UnknownSymbol
        )
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Binary(v) => write!(f, "0b{:b}", v),
            Literal::Decimal(v) => write!(f, "{}", v),
            Literal::Hexadecimal(v) => write!(f, "0x{:X}", v),
            Literal::String(s) => write!(f, "{:?}", s),
            Literal::BadString => write!(f, "<bad string literal>"),
            Literal::Char(c) => write!(f, "{:?}", c),
            Literal::BadChar => write!(f, "<bad char literal>"),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::LetterIdentifier(name) => write!(f, "identifier '{}'", name),
            Token::OperatorIdentifier(op) => write!(f, "operator '{}'", op),
            Token::Literal(lit) => write!(f, "literal {}", lit),
            Token::Fun => write!(f, "'fun'"),
            Token::Return => write!(f, "'return'"),
            Token::If => write!(f, "'if'"),
            Token::Else => write!(f, "'else'"),
            Token::Val => write!(f, "'val'"),
            Token::Var => write!(f, "'var'"),
            Token::LeftParen => write!(f, "'('"),
            Token::RightParen => write!(f, "')'"),
            Token::LeftCurl => write!(f, "'{{'"),
            Token::RightCurl => write!(f, "'}}'"),
            Token::Colon => write!(f, "':'"),
            Token::Comma => write!(f, "','"),
            Token::NewLine => write!(f, "newline"),
            Token::WhiteSpace => write!(f, "whitespace"),
            Token::InlineComment => write!(f, "comment"),
            Token::UnknownSymbol => write!(f, "unknown symbol"),
            Token::Eof => write!(f, "end of file"),
        }
    }
}

/// Reserved words, looked up after an identifier run has been closed.
pub struct KeywordTable {
    keywords: FxHashMap<&'static str, Token>,
}

impl KeywordTable {
    pub fn new() -> Self {
        let mut keywords = FxHashMap::default();
        keywords.insert("fun", Token::Fun);
        keywords.insert("return", Token::Return);
        keywords.insert("if", Token::If);
        keywords.insert("else", Token::Else);
        keywords.insert("val", Token::Val);
        keywords.insert("var", Token::Var);
        Self { keywords }
    }

    /// Keyword token for `word`, or a letter identifier when it is not reserved.
    pub fn classify(&self, word: &str) -> Token {
        self.keywords
            .get(word)
            .cloned()
            .unwrap_or_else(|| Token::identifier(word))
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::new()
    }
}
