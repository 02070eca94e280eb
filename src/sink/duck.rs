// src/sink/duck.rs

use duckdb::types::Value as DuckValue;
use duckdb::{Connection, ToSql};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::RecordSink;
use crate::catalog::Layout;
use crate::error::LoadError;
use crate::record::{Record, Value};
use crate::schema::create_table_sql;

/// The columnar store: one DuckDB table, filled through the appender.
pub struct DuckSink {
    conn: Connection,
    table: String,
    width: usize,
    pending: Vec<Vec<DuckValue>>,
    batch_size: usize,
    rows: u64,
}

impl DuckSink {
    /// Delete any database at `path`, open a fresh one and create `table` for `layout`.
    pub fn create<P: AsRef<Path>>(
        path: P,
        table: &str,
        layout: &Layout,
        batch_size: usize,
    ) -> Result<Self, LoadError> {
        let path = path.as_ref();
        remove_existing(path)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| store_io(parent, e))?;
        }
        let conn = Connection::open(path)?;
        info!(path = %path.display(), table, "created database");
        Self::with_connection(conn, table, layout, batch_size)
    }

    /// Same as `create`, backed by an in-memory database.
    pub fn in_memory(table: &str, layout: &Layout, batch_size: usize) -> Result<Self, LoadError> {
        Self::with_connection(Connection::open_in_memory()?, table, layout, batch_size)
    }

    fn with_connection(
        conn: Connection,
        table: &str,
        layout: &Layout,
        batch_size: usize,
    ) -> Result<Self, LoadError> {
        conn.execute_batch(&create_table_sql(table, layout))?;
        Ok(Self {
            conn,
            table: table.to_string(),
            width: layout.len(),
            pending: Vec::with_capacity(batch_size.min(100_000)),
            batch_size: batch_size.max(1),
            rows: 0,
        })
    }

    #[cfg(test)]
    pub(crate) fn connection(&self) -> &Connection {
        &self.conn
    }

    fn flush(&mut self) -> Result<(), LoadError> {
        if self.pending.is_empty() {
            return Ok(());
        }
        {
            let mut appender = self.conn.appender(&self.table)?;
            for row in &self.pending {
                let params: Vec<&dyn ToSql> = row.iter().map(|v| v as &dyn ToSql).collect();
                appender.append_row(params.as_slice())?;
            }
            appender.flush()?;
        }
        self.rows += self.pending.len() as u64;
        debug!(table = %self.table, batch = self.pending.len(), total = self.rows, "flushed");
        self.pending.clear();
        Ok(())
    }
}

impl RecordSink for DuckSink {
    fn append(&mut self, record: &Record<'_>) -> Result<(), LoadError> {
        let mut row = Vec::with_capacity(self.width);
        row.extend(record.values().iter().map(to_duck_value));
        self.pending.push(row);
        if self.pending.len() >= self.batch_size {
            self.flush()?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<u64, LoadError> {
        self.flush()?;
        Ok(self.rows)
    }
}

fn to_duck_value(value: &Value) -> DuckValue {
    match *value {
        Value::Integer(v) | Value::NullableInteger(Some(v)) => DuckValue::Int(v),
        Value::NullableInteger(None) => DuckValue::Null,
        Value::Character(c) => DuckValue::Text(c.to_string()),
    }
}

/// DuckDB keeps its write-ahead log next to the database as `<file>.wal`.
fn wal_path(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(".wal");
    PathBuf::from(name)
}

fn store_io(path: &Path, source: std::io::Error) -> LoadError {
    LoadError::StoreIo {
        path: path.to_path_buf(),
        source,
    }
}

fn remove_existing(path: &Path) -> Result<(), LoadError> {
    for p in [path.to_path_buf(), wal_path(path)] {
        if p.exists() {
            fs::remove_file(&p).map_err(|e| store_io(&p, e))?;
            info!(path = %p.display(), "removed existing store file");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::decode_line;
    use anyhow::Result;
    use tempfile::tempdir;

    fn layout() -> Layout {
        Layout::select(&["dob_yy", "dob_mm", "mage_impflg", "mar_p"]).unwrap()
    }

    fn line(year: &str, month: &str, imputed: &str, mar_p: &str) -> String {
        let mut line = " ".repeat(119);
        line.replace_range(8..12, year);
        line.replace_range(12..14, month);
        line.replace_range(72..73, imputed);
        line.replace_range(118..119, mar_p);
        line
    }

    #[test]
    fn appends_in_order_across_batches() -> Result<()> {
        let layout = layout();
        let mut sink = DuckSink::in_memory("births", &layout, 2)?;
        let lines = [
            line("2023", "01", " ", "Y"),
            line("2023", "02", "1", "N"),
            line("2022", "12", " ", "U"),
        ];
        for l in &lines {
            sink.append(&decode_line(&layout, l)?)?;
        }
        assert_eq!(sink.finish()?, 3);

        let mut stmt = sink
            .connection()
            .prepare("SELECT dob_yy, dob_mm, mage_impflg, mar_p FROM births")?;
        let rows: Vec<(i32, i32, Option<i32>, String)> = stmt
            .query_map([], |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?, r.get(3)?)))?
            .collect::<Result<_, _>>()?;
        assert_eq!(
            rows,
            vec![
                (2023, 1, None, "Y".to_string()),
                (2023, 2, Some(1), "N".to_string()),
                (2022, 12, None, "U".to_string()),
            ]
        );
        Ok(())
    }

    #[test]
    fn finish_without_rows_leaves_empty_table() -> Result<()> {
        let mut sink = DuckSink::in_memory("births", &layout(), 10)?;
        assert_eq!(sink.finish()?, 0);
        let n: i64 = sink
            .connection()
            .query_row("SELECT COUNT(*) FROM births", [], |r| r.get(0))?;
        assert_eq!(n, 0);
        Ok(())
    }

    #[test]
    fn create_replaces_existing_database() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("births.ddb");
        let layout = layout();

        {
            let mut sink = DuckSink::create(&path, "births", &layout, 10)?;
            sink.append(&decode_line(&layout, &line("2023", "01", " ", "Y"))?)?;
            sink.finish()?;
        }
        assert!(path.exists());

        let sink = DuckSink::create(&path, "births", &layout, 10)?;
        let n: i64 = sink
            .connection()
            .query_row("SELECT COUNT(*) FROM births", [], |r| r.get(0))?;
        assert_eq!(n, 0);
        Ok(())
    }

    #[test]
    fn directory_in_place_of_database_is_a_store_error() -> Result<()> {
        let dir = tempdir()?;
        let err = DuckSink::create(dir.path(), "births", &layout(), 10)
            .err()
            .expect("a directory cannot be replaced by a database");
        match err {
            LoadError::StoreIo { path, .. } => assert_eq!(path.as_path(), dir.path()),
            other => panic!("unexpected error {other:?}"),
        }
        assert!(dir.path().is_dir());
        Ok(())
    }

    #[test]
    fn wal_sits_next_to_database() {
        assert_eq!(
            wal_path(Path::new("data/births.ddb")),
            PathBuf::from("data/births.ddb.wal")
        );
    }
}
