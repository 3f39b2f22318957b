// AST (Abstract Syntax Tree) definitions for ParsoTangue
//
// Every node owns its children outright; the tree is built once by the parser
// and never mutated afterwards. Nodes that can appear in a polymorphic
// position (entities, statements, expressions) serialize with a "type" field
// naming the node; helper nodes (blocks, argument lists) do not.

use super::token::Literal;
use serde::Serialize;

/// Root of the tree: the entities of one source file, in order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "type", rename = "FileNode")]
pub struct FileNode {
    pub entities: Vec<TopLevelEntity>,
}

impl FileNode {
    pub fn new(entities: Vec<TopLevelEntity>) -> Self {
        Self { entities }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TopLevelEntity {
    FunctionDeclaration(FunctionDeclaration),
    Statement(Statement),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Statement {
    VariableDeclaration(VariableDeclaration),
    ConstantDeclaration(ConstantDeclaration),
    Return(ReturnStatement),
    Conditional(ConditionalStatement),
    Expression(Expression),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ConditionalStatement {
    If(IfStatement),
    IfElse(IfElseStatement),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Expression {
    FunctionCall(FunctionCall),
    BinaryOperator(BinaryOperatorExpression),
    Literal(LiteralExpression),
    Identifier(IdentifierExpression),
}

/// `fun name(args): ReturnType { body }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "Function declaration", rename_all = "camelCase")]
pub struct FunctionDeclaration {
    pub name: String,
    pub arguments: DeclarationArgumentList,
    pub return_type: String,
    pub body: StatementBlock,
}

/// `var name: Type = value`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "Variable declaration", rename_all = "camelCase")]
pub struct VariableDeclaration {
    pub name: String,
    pub var_type: String,
    pub value: Expression,
}

/// `val name: Type = value`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "Constant declaration", rename_all = "camelCase")]
pub struct ConstantDeclaration {
    pub name: String,
    pub val_type: String,
    pub value: Expression,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "Return statement")]
pub struct ReturnStatement {
    pub value: Expression,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "If statement")]
pub struct IfStatement {
    pub condition: Expression,
    pub body: StatementBlock,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "If else statement", rename_all = "camelCase")]
pub struct IfElseStatement {
    pub condition: Expression,
    pub body_true: StatementBlock,
    pub body_false: StatementBlock,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct StatementBlock {
    pub statements: Vec<Statement>,
}

/// `name: Type` in a function signature
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypedArgument {
    pub name: String,
    #[serde(rename = "type")]
    pub arg_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DeclarationArgumentList {
    pub arguments: Vec<TypedArgument>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ArgumentList {
    pub arguments: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "Function call")]
pub struct FunctionCall {
    pub function: String,
    pub arguments: ArgumentList,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "Binary operator expression")]
pub struct BinaryOperatorExpression {
    pub operator: String,
    #[serde(rename = "leftOperand")]
    pub left: Box<Expression>,
    #[serde(rename = "rightOperand")]
    pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "Literal expression")]
pub struct LiteralExpression {
    pub literal: Literal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "Identifier expression")]
pub struct IdentifierExpression {
    pub name: String,
}

// ===== Construction helpers =====

impl Expression {
    pub fn binary(operator: impl Into<String>, left: Expression, right: Expression) -> Self {
        Expression::BinaryOperator(BinaryOperatorExpression {
            operator: operator.into(),
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn literal(literal: Literal) -> Self {
        Expression::Literal(LiteralExpression { literal })
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Expression::Identifier(IdentifierExpression { name: name.into() })
    }

    pub fn call(function: impl Into<String>, arguments: Vec<Expression>) -> Self {
        Expression::FunctionCall(FunctionCall {
            function: function.into(),
            arguments: ArgumentList { arguments },
        })
    }
}

impl StatementBlock {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }
}

impl TypedArgument {
    pub fn new(name: impl Into<String>, arg_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arg_type: arg_type.into(),
        }
    }
}

impl From<Expression> for Statement {
    fn from(expr: Expression) -> Self {
        Statement::Expression(expr)
    }
}

impl From<Statement> for TopLevelEntity {
    fn from(stmt: Statement) -> Self {
        TopLevelEntity::Statement(stmt)
    }
}

impl From<FunctionDeclaration> for TopLevelEntity {
    fn from(decl: FunctionDeclaration) -> Self {
        TopLevelEntity::FunctionDeclaration(decl)
    }
}
