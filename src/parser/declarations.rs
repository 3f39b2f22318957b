//! Declaration parsing implementation
//!
//! This module handles the two declaration forms:
//!
//! - Value and variable declarations: `val a: Int = 1`, `var b: Int = 2`
//! - Function declarations: `fun name(a: Int, b: Char): Int { ... }`
//!
//! # Grammar
//!
//! ```text
//! decl          ::= ("val" | "var") identifier ":" type "=" expression
//! function_decl ::= "fun" identifier "(" arg_list? ")" ":" type "{" block "}"
//! arg_list      ::= typed_arg ("," typed_arg)*
//! typed_arg     ::= identifier ":" type
//! ```
//!
//! Newlines may separate `:` from the return type and the return type from
//! the opening brace. All parsing methods are implemented as `pub(crate)`
//! methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::expressions::LOWEST_PRIORITY;
use crate::parser::parse::Parser;
use crate::parser::token::Token;

impl<I: Iterator<Item = Token>> Parser<I> {
    /// Parse `val`/`var` starting at the keyword.
    ///
    /// Leaves the cursor on the token that ended the initializer.
    pub(crate) fn parse_declaration(&mut self) -> Option<Statement> {
        let constant = match self.peek() {
            Token::Val => true,
            Token::Var => false,
            _ => return None,
        };

        let name = self.expect_identifier_next()?;
        self.expect_next(&Token::Colon)?;
        let type_name = self.expect_identifier_next()?;

        match self.advance()? {
            Token::OperatorIdentifier(op) if op == "=" => {}
            _ => return None,
        }
        self.advance()?;

        let value = self.parse_expression(LOWEST_PRIORITY)?;

        Some(if constant {
            Statement::ConstantDeclaration(ConstantDeclaration {
                name,
                val_type: type_name,
                value,
            })
        } else {
            Statement::VariableDeclaration(VariableDeclaration {
                name,
                var_type: type_name,
                value,
            })
        })
    }

    /// Parse a function declaration starting at `fun`.
    pub(crate) fn parse_function_declaration(&mut self) -> Option<FunctionDeclaration> {
        let name = self.expect_identifier_next()?;
        self.expect_next(&Token::LeftParen)?;

        let arguments = self.parse_declaration_argument_list()?;

        self.expect_next(&Token::Colon)?;

        let return_type = match self.advance_skipping_newlines()? {
            Token::LetterIdentifier(name) => name,
            _ => return None,
        };

        if self.advance_skipping_newlines()? != Token::LeftCurl {
            return None;
        }

        let body = self.parse_statement_block()?;

        // Step past '}'. At the very end of the stream the cursor stays on it,
        // which the file loop reads as the end of entities.
        self.advance();

        Some(FunctionDeclaration {
            name,
            arguments,
            return_type,
            body,
        })
    }

    /// Parse typed arguments after `(`, through the closing `)`.
    fn parse_declaration_argument_list(&mut self) -> Option<DeclarationArgumentList> {
        let mut arguments = Vec::new();

        if self.advance()? == Token::RightParen {
            return Some(DeclarationArgumentList { arguments });
        }
        arguments.push(self.parse_typed_argument()?);

        loop {
            match self.advance()? {
                Token::Comma => {
                    self.advance()?;
                    arguments.push(self.parse_typed_argument()?);
                }
                Token::RightParen => return Some(DeclarationArgumentList { arguments }),
                _ => return None,
            }
        }
    }

    /// Parse `name: Type` starting at the name.
    fn parse_typed_argument(&mut self) -> Option<TypedArgument> {
        let name = match self.peek_token() {
            Token::LetterIdentifier(name) => name,
            _ => return None,
        };

        self.expect_next(&Token::Colon)?;
        let arg_type = self.expect_identifier_next()?;

        Some(TypedArgument { name, arg_type })
    }
}
