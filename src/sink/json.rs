// src/sink/json.rs

use std::io::{self, Write};

use super::RecordSink;
use crate::error::LoadError;
use crate::record::Record;

/// Writes one JSON object per record, newline separated.
pub struct JsonSink<W: Write> {
    out: W,
    rows: u64,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, rows: 0 }
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RecordSink for JsonSink<W> {
    fn append(&mut self, record: &Record<'_>) -> Result<(), LoadError> {
        serde_json::to_writer(&mut self.out, record).map_err(io::Error::from)?;
        self.out.write_all(b"\n")?;
        self.rows += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<u64, LoadError> {
        self.out.flush()?;
        Ok(self.rows)
    }
}
