// src/sink/mod.rs

//! Destinations for decoded records.

pub mod duck;
pub mod json;
pub mod parquet;

use crate::error::LoadError;
use crate::record::Record;

pub use self::duck::DuckSink;
pub use self::json::JsonSink;
pub use self::parquet::ParquetSink;

/// Something decoded records are appended to, in input order.
pub trait RecordSink {
    /// Append one record. Implementations may buffer.
    fn append(&mut self, record: &Record<'_>) -> Result<(), LoadError>;

    /// Flush anything buffered and release the destination.
    /// Returns the number of records written over the sink's lifetime.
    fn finish(&mut self) -> Result<u64, LoadError>;
}
