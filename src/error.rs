use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CorpusError {
    // Carries the raw block text so the offending sentence can be found
    #[error("inconsistent number of columns:\n{block}")]
    MalformedBlock { block: String },

    #[error("bad column type {0:?}")]
    InvalidColumnRole(String),

    #[error("column {0:?} is not declared for this corpus")]
    UnknownColumn(String),

    #[error("tokenizer command {command:?} failed: {message}")]
    TokenizerExecution { command: String, message: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}
