// src/sink/parquet.rs

use arrow::array::{ArrayRef, Int32Builder, StringBuilder};
use arrow::datatypes::Schema as ArrowSchema;
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;
use std::fs::{self, File};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

use super::RecordSink;
use crate::catalog::{FieldKind, Layout};
use crate::error::LoadError;
use crate::record::{Record, Value};
use crate::schema::build_arrow_schema;

enum ColumnBuilder {
    Int(Int32Builder),
    Str(StringBuilder),
}

impl ColumnBuilder {
    fn push(&mut self, value: &Value) {
        match (self, value) {
            (ColumnBuilder::Str(b), Value::Character(c)) => {
                let mut buf = [0u8; 4];
                b.append_value(c.encode_utf8(&mut buf));
            }
            (ColumnBuilder::Str(b), _) => b.append_null(),
            (ColumnBuilder::Int(b), v) => b.append_option(v.as_integer()),
        }
    }

    fn finish(&mut self) -> ArrayRef {
        match self {
            ColumnBuilder::Int(b) => Arc::new(b.finish()),
            ColumnBuilder::Str(b) => Arc::new(b.finish()),
        }
    }
}

/// Snappy-compressed Parquet export of the decoded records.
pub struct ParquetSink {
    writer: Option<ArrowWriter<File>>,
    schema: Arc<ArrowSchema>,
    columns: Vec<ColumnBuilder>,
    buffered: usize,
    batch_size: usize,
    rows: u64,
}

impl ParquetSink {
    /// Create (or truncate) the file at `path`.
    pub fn create<P: AsRef<Path>>(
        path: P,
        layout: &Layout,
        batch_size: usize,
    ) -> Result<Self, LoadError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let schema = build_arrow_schema(layout);
        let file = File::create(path)?;
        let props = WriterProperties::builder()
            .set_compression(Compression::SNAPPY)
            .build();
        let writer = ArrowWriter::try_new(file, schema.clone(), Some(props))?;
        info!(path = %path.display(), columns = layout.len(), "writing parquet");

        let columns = layout
            .fields()
            .iter()
            .map(|f| match f.kind {
                FieldKind::Integer | FieldKind::NullableInteger => {
                    ColumnBuilder::Int(Int32Builder::new())
                }
                FieldKind::Character => ColumnBuilder::Str(StringBuilder::new()),
            })
            .collect();

        Ok(Self {
            writer: Some(writer),
            schema,
            columns,
            buffered: 0,
            batch_size: batch_size.max(1),
            rows: 0,
        })
    }

    fn flush(&mut self) -> Result<(), LoadError> {
        if self.buffered == 0 {
            return Ok(());
        }
        let arrays: Vec<ArrayRef> = self.columns.iter_mut().map(ColumnBuilder::finish).collect();
        let batch = RecordBatch::try_new(self.schema.clone(), arrays)?;
        if let Some(writer) = self.writer.as_mut() {
            writer.write(&batch)?;
        }
        self.rows += self.buffered as u64;
        debug!(batch = self.buffered, total = self.rows, "wrote parquet batch");
        self.buffered = 0;
        Ok(())
    }
}

impl RecordSink for ParquetSink {
    fn append(&mut self, record: &Record<'_>) -> Result<(), LoadError> {
        for (builder, value) in self.columns.iter_mut().zip(record.values()) {
            builder.push(value);
        }
        self.buffered += 1;
        if self.buffered >= self.batch_size {
            self.flush()?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<u64, LoadError> {
        self.flush()?;
        if let Some(writer) = self.writer.take() {
            writer.close()?;
        }
        Ok(self.rows)
    }
}
