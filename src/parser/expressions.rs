//! Expression parsing implementation
//!
//! This module handles parsing of expressions using precedence climbing
//! for binary operators and recursive descent for symbols.
//!
//! # Supported Expressions
//!
//! - Literals: integers in binary, decimal and hex, characters, strings
//! - Identifiers
//! - Function calls: `name(arg, ...)` with at least one argument
//! - Parenthesized expressions
//! - Binary operators: any run of operator symbols
//!
//! # Precedence
//!
//! | Operators                    | Priority |
//! |------------------------------|----------|
//! | `*` `/` `%`                  | 4        |
//! | `+` `-`                      | 3        |
//! | `>` `<` `>=` `<=` `==` `!=`  | 2        |
//! | `=` and anything unlisted    | 1        |
//!
//! All operators are left-associative, assignment included.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::parse::Parser;
use crate::parser::token::Token;
use rustc_hash::FxHashMap;

/// Binding floor below every operator; parses a complete expression.
pub const LOWEST_PRIORITY: u8 = 0;

const DEFAULT_PRIORITY: u8 = 1;

/// Binding strength of binary operators, keyed by their spelling.
#[derive(Debug, Clone)]
pub struct PriorityTable {
    priorities: FxHashMap<&'static str, u8>,
}

impl PriorityTable {
    pub fn new() -> Self {
        let mut priorities = FxHashMap::default();
        priorities.insert("=", 1);
        for op in [">", "<", ">=", "<=", "==", "!="] {
            priorities.insert(op, 2);
        }
        priorities.insert("+", 3);
        priorities.insert("-", 3);
        priorities.insert("*", 4);
        priorities.insert("/", 4);
        priorities.insert("%", 4);
        Self { priorities }
    }

    /// Priority of `operator`; unknown operators bind like assignment.
    pub fn priority(&self, operator: &str) -> u8 {
        self.priorities
            .get(operator)
            .copied()
            .unwrap_or(DEFAULT_PRIORITY)
    }
}

impl Default for PriorityTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Tokens that may legally follow a complete expression.
fn ends_expression(token: &Token) -> bool {
    matches!(
        token,
        Token::Comma | Token::NewLine | Token::RightParen | Token::RightCurl | Token::Eof
    )
}

impl<I: Iterator<Item = Token>> Parser<I> {
    /// Parse an expression starting at the current token.
    ///
    /// Only operators binding tighter than `floor` are absorbed; the cursor is
    /// left on the first operator or terminator that was not.
    pub(crate) fn parse_expression(&mut self, floor: u8) -> Option<Expression> {
        let mut left = self.parse_symbol()?;

        loop {
            let operator = match self.peek_token() {
                Token::OperatorIdentifier(op) => op,
                token if ends_expression(&token) => return Some(left),
                _ => return None,
            };

            let priority = self.priorities.priority(&operator);
            if priority <= floor {
                return Some(left);
            }

            self.advance()?;
            let right = self.parse_expression(priority)?;
            left = Expression::binary(operator, left, right);
        }
    }

    /// Parse a literal, identifier, call, or parenthesized expression.
    ///
    /// Leaves the cursor on the token after the symbol.
    pub(crate) fn parse_symbol(&mut self) -> Option<Expression> {
        match self.peek_token() {
            Token::Literal(literal) => {
                self.advance()?;
                Some(Expression::literal(literal))
            }
            Token::LetterIdentifier(name) => match self.advance()? {
                Token::LeftParen => {
                    self.advance()?;
                    let arguments = self.parse_argument_list()?;
                    Some(Expression::FunctionCall(FunctionCall {
                        function: name,
                        arguments,
                    }))
                }
                Token::OperatorIdentifier(_) => Some(Expression::identifier(name)),
                token if ends_expression(&token) => Some(Expression::identifier(name)),
                _ => None,
            },
            Token::LeftParen => {
                self.advance()?;
                let inner = self.parse_expression(LOWEST_PRIORITY)?;
                if !self.check(&Token::RightParen) {
                    return None;
                }
                self.advance()?;
                Some(inner)
            }
            _ => None,
        }
    }

    /// Parse call arguments starting at the first one, through the closing `)`.
    fn parse_argument_list(&mut self) -> Option<ArgumentList> {
        let mut arguments = vec![self.parse_expression(LOWEST_PRIORITY)?];

        loop {
            match self.peek() {
                Token::Comma => {
                    self.advance()?;
                    arguments.push(self.parse_expression(LOWEST_PRIORITY)?);
                }
                Token::RightParen => {
                    self.advance()?;
                    return Some(ArgumentList { arguments });
                }
                _ => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::lex;
    use crate::parser::parse::parse_expression;
    use crate::parser::token::Literal;

    fn expr(source: &str) -> Option<Expression> {
        parse_expression(lex(source.chars()))
    }

    fn dec(value: u64) -> Expression {
        Expression::literal(Literal::Decimal(value))
    }

    fn id(name: &str) -> Expression {
        Expression::identifier(name)
    }

    #[test]
    fn test_priority_table() {
        let table = PriorityTable::new();
        assert_eq!(table.priority("="), 1);
        assert_eq!(table.priority("<="), 2);
        assert_eq!(table.priority("!="), 2);
        assert_eq!(table.priority("-"), 3);
        assert_eq!(table.priority("%"), 4);
        assert_eq!(table.priority("+-"), 1);
        assert_eq!(table.priority("=>"), 1);
    }

    #[test]
    fn test_precedence() {
        assert_eq!(
            expr("1 + 2 * 3"),
            Some(Expression::binary("+", dec(1), Expression::binary("*", dec(2), dec(3))))
        );
        assert_eq!(
            expr("1 * 2 + 3"),
            Some(Expression::binary("+", Expression::binary("*", dec(1), dec(2)), dec(3)))
        );
        assert_eq!(
            expr("a < b + 1"),
            Some(Expression::binary("<", id("a"), Expression::binary("+", id("b"), dec(1))))
        );
    }

    #[test]
    fn test_left_associativity() {
        assert_eq!(
            expr("a - b - c"),
            Some(Expression::binary("-", Expression::binary("-", id("a"), id("b")), id("c")))
        );
        assert_eq!(
            expr("a = b = c"),
            Some(Expression::binary("=", Expression::binary("=", id("a"), id("b")), id("c")))
        );
    }

    #[test]
    fn test_unknown_operator_binds_loosest() {
        assert_eq!(
            expr("a +- b * c"),
            Some(Expression::binary("+-", id("a"), Expression::binary("*", id("b"), id("c"))))
        );
    }

    #[test]
    fn test_parentheses() {
        assert_eq!(
            expr("(1 + 2) * 3"),
            Some(Expression::binary("*", Expression::binary("+", dec(1), dec(2)), dec(3)))
        );
        assert_eq!(expr("((a))"), Some(id("a")));
        assert_eq!(expr("(1 + 2"), None);
        assert_eq!(expr("()"), None);
    }

    #[test]
    fn test_function_calls() {
        assert_eq!(
            expr("f(a, 1 + 2, g(b))"),
            Some(Expression::call(
                "f",
                vec![
                    id("a"),
                    Expression::binary("+", dec(1), dec(2)),
                    Expression::call("g", vec![id("b")]),
                ]
            ))
        );
        assert_eq!(
            expr("f(a) * 2"),
            Some(Expression::binary("*", Expression::call("f", vec![id("a")]), dec(2)))
        );
    }

    #[test]
    fn test_call_requires_arguments() {
        assert_eq!(expr("f()"), None);
        assert_eq!(expr("f(a,)"), None);
        assert_eq!(expr("f(a b)"), None);
    }

    #[test]
    fn test_literal_kinds() {
        assert_eq!(expr("0xFF"), Some(Expression::literal(Literal::Hexadecimal(255))));
        assert_eq!(expr("0b101"), Some(Expression::literal(Literal::Binary(5))));
        assert_eq!(
            expr("\"hi\""),
            Some(Expression::literal(Literal::String("hi".to_string())))
        );
        assert_eq!(expr("'x'"), Some(Expression::literal(Literal::Char('x'))));
    }

    #[test]
    fn test_expression_must_be_terminated() {
        assert_eq!(expr("a b"), None);
        assert_eq!(expr("1 2"), None);
        assert_eq!(expr("a {"), None);
        assert_eq!(expr("a\nb"), Some(id("a")));
        assert_eq!(expr("a, b"), Some(id("a")));
    }
}
