//! Statement parsing implementation
//!
//! This module handles parsing of all statement types:
//!
//! - Declarations: `val x: Int = 42`, `var y: Int = x`
//! - Return statements: `return x + 1`
//! - Conditionals: `if (cond) { ... }` with an optional `else { ... }`
//! - Expression statements: calls, assignments, any bare expression
//! - Statement blocks: `{ ... }`, newline separated
//!
//! # Grammar
//!
//! ```text
//! block       ::= "{" (NEWLINE | statement)* "}"
//! statement   ::= decl | "return" expression | conditional | expression
//! conditional ::= "if" "(" expression ")" block ("else" block)?
//! ```
//!
//! The condition is parsed as one symbol; since a symbol starting with `(`
//! parses the whole parenthesized expression, any expression is allowed.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::expressions::LOWEST_PRIORITY;
use crate::parser::parse::Parser;
use crate::parser::token::Token;

impl<I: Iterator<Item = Token>> Parser<I> {
    /// Parse block statements starting at `{`, stopping on the closing `}`.
    pub(crate) fn parse_statement_block(&mut self) -> Option<StatementBlock> {
        let mut statements = Vec::new();
        self.advance()?;

        loop {
            match self.peek() {
                Token::RightCurl => return Some(StatementBlock::new(statements)),
                Token::NewLine => {
                    self.advance()?;
                }
                _ => statements.push(self.parse_statement()?),
            }
        }
    }

    /// Parse a statement starting at its first token
    pub(crate) fn parse_statement(&mut self) -> Option<Statement> {
        match self.peek() {
            Token::Val | Token::Var => self.parse_declaration(),
            Token::Return => self.parse_return_statement(),
            Token::If => self
                .parse_conditional_statement()
                .map(Statement::Conditional),
            _ => self
                .parse_expression(LOWEST_PRIORITY)
                .map(Statement::Expression),
        }
    }

    fn parse_return_statement(&mut self) -> Option<Statement> {
        self.advance()?;
        let value = self.parse_expression(LOWEST_PRIORITY)?;

        Some(Statement::Return(ReturnStatement { value }))
    }

    fn parse_conditional_statement(&mut self) -> Option<ConditionalStatement> {
        self.expect_next(&Token::LeftParen)?;
        let condition = self.parse_symbol()?;

        if !self.check(&Token::LeftCurl) {
            return None;
        }
        let body_true = self.parse_statement_block()?;

        if self.advance()? != Token::Else {
            return Some(ConditionalStatement::If(IfStatement {
                condition,
                body: body_true,
            }));
        }

        self.expect_next(&Token::LeftCurl)?;
        let body_false = self.parse_statement_block()?;
        self.advance()?;

        Some(ConditionalStatement::IfElse(IfElseStatement {
            condition,
            body_true,
            body_false,
        }))
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::*;
    use crate::parser::lexer::lex;
    use crate::parser::parse::parse;
    use crate::parser::token::Literal;

    fn body_of(source: &str) -> Vec<Statement> {
        let program = parse(lex(source.chars()));
        assert_eq!(program.len(), 1, "expected one entity in {:?}", program);
        match program.entities.into_iter().next() {
            Some(TopLevelEntity::FunctionDeclaration(f)) => f.body.statements,
            other => panic!("Expected function declaration, got {:?}", other),
        }
    }

    fn dec(value: u64) -> Expression {
        Expression::literal(Literal::Decimal(value))
    }

    #[test]
    fn test_return_statement() {
        let body = body_of("fun f(): Int {\n    return a * 2\n}\n");

        assert_eq!(
            body,
            vec![Statement::Return(ReturnStatement {
                value: Expression::binary("*", Expression::identifier("a"), dec(2)),
            })]
        );
    }

    #[test]
    fn test_expression_statements() {
        let body = body_of("fun f(): Void {\n    a = a + 1\n    print(a)\n}\n");

        assert_eq!(
            body,
            vec![
                Statement::Expression(Expression::binary(
                    "=",
                    Expression::identifier("a"),
                    Expression::binary("+", Expression::identifier("a"), dec(1)),
                )),
                Statement::Expression(Expression::call(
                    "print",
                    vec![Expression::identifier("a")]
                )),
            ]
        );
    }

    #[test]
    fn test_if_statement() {
        let body = body_of("fun f(a: Int): Int {\n    if (a == 0) {\n        return 1\n    }\n    return a\n}\n");

        assert_eq!(
            body,
            vec![
                Statement::Conditional(ConditionalStatement::If(IfStatement {
                    condition: Expression::binary("==", Expression::identifier("a"), dec(0)),
                    body: StatementBlock::new(vec![Statement::Return(ReturnStatement {
                        value: dec(1),
                    })]),
                })),
                Statement::Return(ReturnStatement {
                    value: Expression::identifier("a"),
                }),
            ]
        );
    }

    #[test]
    fn test_if_else_statement() {
        let body = body_of(
            "fun f(b: Int): Int {\n    if (b % 2 == 1) {\n        b = 0\n    } else {\n        return b\n    }\n    return 1\n}\n",
        );

        assert_eq!(body.len(), 2);
        match &body[0] {
            Statement::Conditional(ConditionalStatement::IfElse(stmt)) => {
                assert_eq!(
                    stmt.condition,
                    Expression::binary(
                        "==",
                        Expression::binary("%", Expression::identifier("b"), dec(2)),
                        dec(1),
                    )
                );
                assert_eq!(stmt.body_true.statements.len(), 1);
                assert_eq!(
                    stmt.body_false.statements,
                    vec![Statement::Return(ReturnStatement {
                        value: Expression::identifier("b"),
                    })]
                );
            }
            other => panic!("Expected if-else statement, got {:?}", other),
        }
    }

    #[test]
    fn test_single_line_blocks() {
        let body = body_of("fun f(): Int { if (a) { return 1 } else { return 2 } }");

        assert_eq!(body.len(), 1);
        assert!(matches!(
            &body[0],
            Statement::Conditional(ConditionalStatement::IfElse(_))
        ));
    }

    #[test]
    fn test_nested_if_closes_enclosing_block() {
        let body = body_of("fun f(): Int {\n    if (a) {\n        if (b) { return 1 }\n    }\n    return 0\n}");

        assert_eq!(body.len(), 2);
        match &body[0] {
            Statement::Conditional(ConditionalStatement::If(outer)) => {
                assert_eq!(outer.body.statements.len(), 1);
            }
            other => panic!("Expected if statement, got {:?}", other),
        }
    }

    #[test]
    fn test_declarations_in_blocks() {
        let body = body_of("fun f(): Int {\n    var a: Int = 6\n    val b: Int = a\n}\n");

        assert!(matches!(&body[0], Statement::VariableDeclaration(d) if d.name == "a"));
        assert!(matches!(&body[1], Statement::ConstantDeclaration(d) if d.name == "b"));
    }

    #[test]
    fn test_malformed_conditionals() {
        let parse_str = |s: &str| parse(lex(s.chars()));

        // missing parentheses, missing braces, else on its own line
        assert!(parse_str("fun f(): Int {\n    if a { return 1 }\n}\n").is_empty());
        assert!(parse_str("fun f(): Int {\n    if (a) return 1\n}\n").is_empty());
        assert!(parse_str("fun f(): Int {\n    if (a) { return 1 }\n    else { return 2 }\n}\n").is_empty());
        assert!(parse_str("fun f(): Int {\n    if (a) { return 1 } else return 2\n}\n").is_empty());
    }

    #[test]
    fn test_two_statements_on_one_line_fail() {
        let program = parse(lex("fun f(): Int {\n    val a: Int = 1 val b: Int = 2\n}\n".chars()));
        assert!(program.is_empty());
    }
}
