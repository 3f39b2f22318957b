//! ParsoTangue source parser
//!
//! This module transforms ParsoTangue source text into an Abstract Syntax Tree (AST):
//! - [`symbols`]: Character classes and the escape table
//! - [`token`]: Token model and keyword table
//! - [`lexer`]: Tokenization (characters → tokens), a lazy state machine
//! - [`parse`]: Parsing (tokens → AST)
//! - [`ast`]: AST node definitions
//!
//! # Supported Language
//!
//! - Top level: `val`/`var` declarations and `fun` declarations
//! - Statements: declarations, `return`, `if`/`else`, bare expressions
//! - Expressions: integer/char/string literals, identifiers, calls, parentheses,
//!   binary operators spelled with `+ - * / % = > <`
//! - `#` starts a comment running to the end of the line
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with precedence climbing for binary operators.
//! No external parser generator dependencies. Both stages are single-pass
//! iterators: no token is produced before the parser asks for it.

pub mod ast;
pub mod cursor;
mod declarations;
pub mod expressions;
pub mod lexer;
pub mod parse;
mod statements;
pub mod symbols;
pub mod token;
