// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Failure to turn one fixed-width line into a record (or a record back into a line).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line is {actual} bytes, layout needs at least {expected}")]
    LineTooShort { expected: usize, actual: usize },

    #[error("field {field}: value is required but slice {slice:?} is blank")]
    Blank { field: &'static str, slice: String },

    #[error("field {field}: {slice:?} is not a valid integer")]
    InvalidInteger { field: &'static str, slice: String },

    #[error("field {field}: slice does not fall on character boundaries")]
    Malformed { field: &'static str },

    #[error("line is not valid UTF-8 (first bad byte at offset {offset})")]
    InvalidUtf8 { offset: usize },

    #[error("field {field}: {value} does not fit in {width} bytes")]
    Overflow {
        field: &'static str,
        value: String,
        width: usize,
    },
}

impl ParseError {
    /// Name of the field that failed, if the failure is tied to one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ParseError::LineTooShort { .. } | ParseError::InvalidUtf8 { .. } => None,
            ParseError::Blank { field, .. }
            | ParseError::InvalidInteger { field, .. }
            | ParseError::Malformed { field }
            | ParseError::Overflow { field, .. } => Some(field),
        }
    }
}

/// Anything that can abort a load run.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("input file {0} does not exist")]
    MissingInput(PathBuf),

    #[error("unknown field {0:?}")]
    UnknownField(String),

    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ParseError,
    },

    #[error("store error: {0}")]
    Store(#[from] duckdb::Error),

    #[error("store error: {path}: {source}")]
    StoreIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("config error: {0}")]
    Config(String),
}
