//! # Introduction
//!
//! ParsoTangue is the front end of a small statically typed language: it turns
//! source text into a syntax tree and writes that tree out as JSON for later
//! compiler stages.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Parser → AST → JSON
//! ```
//!
//! 1. [`parser`]: tokenises the source and builds an AST. The lexer never
//!    fails; the parser keeps the longest prefix of well-formed top-level
//!    entities and drops the rest.
//! 2. [`export`]: serializes a [`parser::ast::FileNode`] to pretty-printed JSON.
//! 3. [`driver`]: file handling around the two: read, lex, parse, export, write.
//!
//! ## Example
//!
//! ```
//! use parsotangue::parser::{lexer::lex, parse::parse};
//!
//! let program = parse(lex("fun main(): Int { val a: Int = 0 }".chars()));
//! assert_eq!(program.len(), 1);
//! ```

pub mod driver;
pub mod export;
pub mod parser;
