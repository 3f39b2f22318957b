//! Single-pass cursor over a token stream
//!
//! The cursor has no current token until it has been advanced once. Reading
//! it before that is a bug in the parser, not a property of the input, so it
//! panics instead of reporting a parse failure.

use super::token::Token;

pub struct TokenCursor<I: Iterator<Item = Token>> {
    tokens: I,
    current: Option<Token>,
}

impl<I: Iterator<Item = Token>> TokenCursor<I> {
    pub fn new(tokens: I) -> Self {
        Self {
            tokens,
            current: None,
        }
    }

    /// Move to the next token and return it.
    ///
    /// Returns `None` once the stream is exhausted; the current token is
    /// then left as it was.
    pub fn advance(&mut self) -> Option<&Token> {
        let next = self.tokens.next()?;
        self.current = Some(next);
        self.current.as_ref()
    }

    /// Like [`advance`](Self::advance), but steps over newline tokens.
    pub fn advance_skipping_newlines(&mut self) -> Option<&Token> {
        loop {
            let next = self.tokens.next()?;
            let is_newline = next == Token::NewLine;
            self.current = Some(next);
            if !is_newline {
                return self.current.as_ref();
            }
        }
    }

    /// The token most recently returned by an advance.
    ///
    /// # Panics
    ///
    /// Panics if the cursor has never been advanced.
    pub fn current(&self) -> &Token {
        match &self.current {
            Some(token) => token,
            None => panic!("token cursor read before the first advance"),
        }
    }

    pub fn has_current(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_updates_current() {
        let mut cursor = TokenCursor::new(vec![Token::Fun, Token::Colon].into_iter());
        assert!(!cursor.has_current());

        assert_eq!(cursor.advance(), Some(&Token::Fun));
        assert_eq!(cursor.current(), &Token::Fun);
        assert_eq!(cursor.advance(), Some(&Token::Colon));
        assert_eq!(cursor.advance(), None);
        // exhausted: current stays on the last token
        assert_eq!(cursor.current(), &Token::Colon);
    }

    #[test]
    fn test_skip_newlines() {
        let tokens = vec![Token::NewLine, Token::NewLine, Token::Val, Token::NewLine];
        let mut cursor = TokenCursor::new(tokens.into_iter());

        assert_eq!(cursor.advance_skipping_newlines(), Some(&Token::Val));
        assert_eq!(cursor.advance_skipping_newlines(), None);
        assert_eq!(cursor.current(), &Token::NewLine);
    }

    #[test]
    #[should_panic(expected = "read before the first advance")]
    fn test_read_before_advance_panics() {
        let cursor = TokenCursor::new(vec![Token::Eof].into_iter());
        cursor.current();
    }
}
