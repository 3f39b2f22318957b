//! Character classes recognised by the lexing automaton
//!
//! Every predicate works on single code units. Letters and digits are ASCII
//! only; anything outside these classes falls through to
//! [`Token::UnknownSymbol`](super::token::Token::UnknownSymbol) in the initial
//! state.

/// End-of-input marker appended to the character stream.
pub const SENTINEL: char = '\0';

/// Characters that make up operator identifiers.
pub const OPERATOR_SYMBOLS: [char; 8] = ['+', '-', '*', '/', '%', '=', '>', '<'];

pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_binary_digit(c: char) -> bool {
    matches!(c, '0' | '1')
}

pub fn is_hexadecimal_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

pub fn is_binary_prefix(c: char) -> bool {
    matches!(c, 'b' | 'B')
}

pub fn is_hexadecimal_prefix(c: char) -> bool {
    matches!(c, 'x' | 'X')
}

pub fn is_underscore(c: char) -> bool {
    c == '_'
}

/// Letter, digit or underscore: the continuation class of letter identifiers.
pub fn is_identifier_part(c: char) -> bool {
    is_letter(c) || is_digit(c) || is_underscore(c)
}

pub fn is_operator_symbol(c: char) -> bool {
    OPERATOR_SYMBOLS.contains(&c)
}

/// Spaces and tabs. Line breaks are not whitespace for this language.
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t')
}

pub fn is_line_feed(c: char) -> bool {
    c == '\n'
}

pub fn is_carriage_return(c: char) -> bool {
    c == '\r'
}

pub fn is_sentinel(c: char) -> bool {
    c == SENTINEL
}

/// Line feed or sentinel: both close single-line constructs.
pub fn is_line_end(c: char) -> bool {
    is_line_feed(c) || is_sentinel(c)
}

/// Resolve the character following a backslash.
///
/// Returns `None` for sequences outside the fixed escape table.
pub fn resolve_escape(c: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        'r' => Some('\r'),
        '\\' => Some('\\'),
        't' => Some('\t'),
        'b' => Some('\u{8}'),
        '\'' => Some('\''),
        '"' => Some('"'),
        '$' => Some('$'),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_symbols() {
        for c in "+-*/%=><".chars() {
            assert!(is_operator_symbol(c), "{c:?} should be an operator symbol");
        }
        for c in "!&|^~.?".chars() {
            assert!(!is_operator_symbol(c), "{c:?} should not be an operator symbol");
        }
    }

    #[test]
    fn test_letters_are_ascii_only() {
        assert!(is_letter('a'));
        assert!(is_letter('Z'));
        assert!(!is_letter('é'));
        assert!(!is_letter('_'));
        assert!(is_identifier_part('_'));
        assert!(is_identifier_part('7'));
    }

    #[test]
    fn test_escape_table() {
        assert_eq!(resolve_escape('n'), Some('\n'));
        assert_eq!(resolve_escape('b'), Some('\u{8}'));
        assert_eq!(resolve_escape('$'), Some('$'));
        assert_eq!(resolve_escape('"'), Some('"'));
        assert_eq!(resolve_escape('0'), None);
        assert_eq!(resolve_escape('x'), None);
    }

    #[test]
    fn test_line_end() {
        assert!(is_line_end('\n'));
        assert!(is_line_end(SENTINEL));
        assert!(!is_line_end('\r'));
    }
}
