//! File handling around the parser
//!
//! Source files are read as raw bytes and each byte is widened to one
//! character, so non-ASCII input never fails to decode; multi-byte UTF-8
//! sequences simply lex as several unknown symbols.

use crate::export;
use crate::parser::ast::FileNode;
use crate::parser::lexer::lex;
use crate::parser::parse::parse;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("source file not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize syntax tree")]
    Export(#[from] serde_json::Error),
}

/// Parse source text already in memory.
pub fn parse_source(source: &str) -> FileNode {
    parse(lex(source.chars()))
}

/// Parse `source` and write its syntax tree to `output` as JSON.
///
/// The output file is created or truncated only once the source has been
/// read and the tree serialized.
pub fn compile_file(source: &Path, output: &Path) -> Result<FileNode, DriverError> {
    if !source.exists() {
        return Err(DriverError::SourceNotFound(source.to_path_buf()));
    }

    let bytes = fs::read(source).map_err(|e| DriverError::Read {
        path: source.to_path_buf(),
        source: e,
    })?;
    debug!(path = %source.display(), bytes = bytes.len(), "read source");

    let file = parse(lex(bytes.iter().map(|&b| b as char)));
    info!(entities = file.len(), "parsed {}", source.display());

    let json = export::to_json(&file)?;
    fs::write(output, json).map_err(|e| DriverError::Write {
        path: output.to_path_buf(),
        source: e,
    })?;
    info!(path = %output.display(), "wrote syntax tree");

    Ok(file)
}
