//! Loader for the fixed-width natality public-use file.
//!
//! Lines are sliced by byte offset according to [`catalog::FIELDS`], decoded
//! into [`record::Record`]s and appended to a DuckDB table (and optionally a
//! Parquet file).

pub mod catalog;
pub mod config;
pub mod error;
pub mod load;
pub mod record;
pub mod schema;
pub mod sink;

pub use catalog::{FieldDef, FieldKind, Layout};
pub use config::LoadConfig;
pub use error::{LoadError, ParseError};
pub use load::{preview, run, LoadSummary};
pub use record::{decode_line, Record, Value};
