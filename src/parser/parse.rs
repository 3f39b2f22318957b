//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct, its cursor helpers, and the
//! top-level entity loop behind [`parse`].
//!
//! # Parser Architecture
//!
//! The Parser is a recursive descent engine over a [`TokenCursor`]:
//! - This module: Parser struct, helper methods, and the file-level loop
//! - `declarations`: `val`/`var` and `fun` declarations
//! - `statements`: statement blocks, `return`, `if`/`else`
//! - `expressions`: precedence climbing over binary operators
//!
//! # Failure
//!
//! Parse functions return `Option`: `None` means "did not match" and carries
//! no diagnostic. A failure anywhere inside an entity aborts that entity, and
//! the file loop treats it exactly like running out of entities. The result
//! is the longest prefix of entities that parsed.
//!
//! # Cursor convention
//!
//! Statement and entity productions leave the cursor on the first token after
//! the construct. Statement blocks leave it on their closing `}`.

use crate::parser::ast::*;
use crate::parser::cursor::TokenCursor;
use crate::parser::expressions::{PriorityTable, LOWEST_PRIORITY};
use crate::parser::token::Token;
use std::iter::Filter;
use tracing::{debug, trace};

/// Token stream with whitespace, comments and unknown symbols removed.
pub type Significant<I> = Filter<I, fn(&Token) -> bool>;

fn is_significant(token: &Token) -> bool {
    !token.is_trivia()
}

/// Recursive descent parser for ParsoTangue
pub struct Parser<I: Iterator<Item = Token>> {
    pub(crate) cursor: TokenCursor<Significant<I>>,
    pub(crate) priorities: PriorityTable,
}

impl<I: Iterator<Item = Token>> Parser<I> {
    pub fn new<T>(tokens: T) -> Self
    where
        T: IntoIterator<Item = Token, IntoIter = I>,
    {
        let significant: Significant<I> = tokens
            .into_iter()
            .filter(is_significant as fn(&Token) -> bool);
        Self {
            cursor: TokenCursor::new(significant),
            priorities: PriorityTable::new(),
        }
    }

    /// Parse the whole stream into a file node.
    ///
    /// Consumes the parser: a token stream is parsed exactly once.
    pub fn parse_file(mut self) -> FileNode {
        let mut entities = Vec::new();

        if self.advance().is_none() {
            return FileNode::new(entities);
        }

        loop {
            let entity = match self.peek_token() {
                Token::NewLine => {
                    if self.advance().is_none() {
                        break;
                    }
                    continue;
                }
                Token::Val | Token::Var => self.parse_declaration().map(TopLevelEntity::from),
                Token::Fun => self
                    .parse_function_declaration()
                    .map(TopLevelEntity::from),
                _ => break,
            };

            match entity {
                Some(entity) => {
                    trace!(index = entities.len(), "parsed top-level entity");
                    entities.push(entity);
                }
                None => {
                    debug!(
                        parsed = entities.len(),
                        "top-level entity did not parse, truncating file"
                    );
                    break;
                }
            }
        }

        FileNode::new(entities)
    }

    /// Parse a single expression from the start of the stream.
    pub fn parse_standalone_expression(mut self) -> Option<Expression> {
        self.advance()?;
        self.parse_expression(LOWEST_PRIORITY)
    }

    // ===== Helper methods =====

    pub(crate) fn advance(&mut self) -> Option<Token> {
        self.cursor.advance().cloned()
    }

    pub(crate) fn advance_skipping_newlines(&mut self) -> Option<Token> {
        self.cursor.advance_skipping_newlines().cloned()
    }

    pub(crate) fn peek(&self) -> &Token {
        self.cursor.current()
    }

    pub(crate) fn peek_token(&self) -> Token {
        self.cursor.current().clone()
    }

    pub(crate) fn check(&self, token: &Token) -> bool {
        self.peek() == token
    }

    /// Advance and require the new current token to equal `token`.
    pub(crate) fn expect_next(&mut self, token: &Token) -> Option<()> {
        (self.advance()? == *token).then_some(())
    }

    /// Advance and require a letter identifier, returning its name.
    pub(crate) fn expect_identifier_next(&mut self) -> Option<String> {
        match self.advance()? {
            Token::LetterIdentifier(name) => Some(name),
            _ => None,
        }
    }
}

/// Parse a token stream into a [`FileNode`].
///
/// Whitespace, comments and unknown symbols are dropped first. Never fails:
/// malformed input yields the entities parsed before the first bad one.
pub fn parse<T>(tokens: T) -> FileNode
where
    T: IntoIterator<Item = Token>,
{
    Parser::new(tokens).parse_file()
}

/// Parse a token stream as one expression, ignoring what follows it.
pub fn parse_expression<T>(tokens: T) -> Option<Expression>
where
    T: IntoIterator<Item = Token>,
{
    Parser::new(tokens).parse_standalone_expression()
}
