// src/load.rs

//! The load pipeline: read line, decode, append, repeat.

use chrono::{DateTime, Utc};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::time::Instant;
use tracing::{info, instrument, warn};

use crate::catalog::Layout;
use crate::config::LoadConfig;
use crate::error::{LoadError, ParseError};
use crate::record::decode_line;
use crate::sink::{DuckSink, JsonSink, ParquetSink, RecordSink};

/// Rows shown by `preview` when no limit is configured.
pub const DEFAULT_PREVIEW_ROWS: usize = 10;

/// Counters for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    pub lines_read: u64,
    pub blank_lines: u64,
    pub rows_written: u64,
    pub skipped: u64,
    pub started: DateTime<Utc>,
    pub finished: DateTime<Utc>,
}

/// Per-run knobs for `process`.
#[derive(Debug, Clone, Copy)]
pub struct ProcessOptions {
    pub limit: Option<usize>,
    pub skip_invalid: bool,
    pub progress_every: u64,
}

impl From<&LoadConfig> for ProcessOptions {
    fn from(cfg: &LoadConfig) -> Self {
        Self {
            limit: cfg.limit,
            skip_invalid: cfg.skip_invalid,
            progress_every: cfg.progress_every,
        }
    }
}

/// Recreate the store and load the input file into it.
#[instrument(level = "info", skip(config), fields(input = %config.input.display(), database = %config.database.display()))]
pub fn run(config: &LoadConfig) -> Result<LoadSummary, LoadError> {
    config.validate()?;
    let started = Instant::now();
    let input = open_input(config)?;
    let layout = config.layout()?;

    let mut duck = DuckSink::create(&config.database, &config.table, &layout, config.batch_size)?;
    let mut parquet = config
        .parquet
        .as_ref()
        .map(|p| ParquetSink::create(p, &layout, config.batch_size))
        .transpose()?;

    let mut sinks: Vec<&mut dyn RecordSink> = vec![&mut duck];
    if let Some(p) = parquet.as_mut() {
        sinks.push(p);
    }

    let summary = process(input, &layout, config.into(), &mut sinks)?;
    info!(
        rows = summary.rows_written,
        skipped = summary.skipped,
        blank = summary.blank_lines,
        started = %summary.started.to_rfc3339(),
        finished = %summary.finished.to_rfc3339(),
        elapsed = ?started.elapsed(),
        "load complete"
    );
    Ok(summary)
}

/// Decode the first rows of the input and write them as JSON lines to `out`.
/// Nothing is written to the store.
pub fn preview<W: Write>(config: &LoadConfig, out: W) -> Result<LoadSummary, LoadError> {
    config.validate()?;
    let input = open_input(config)?;
    let layout = config.layout()?;
    let mut options = ProcessOptions::from(config);
    options.limit = Some(config.limit.unwrap_or(DEFAULT_PREVIEW_ROWS));

    let mut json = JsonSink::new(out);
    process(input, &layout, options, &mut [&mut json])
}

fn open_input(config: &LoadConfig) -> Result<BufReader<File>, LoadError> {
    if !config.input.exists() {
        return Err(LoadError::MissingInput(config.input.clone()));
    }
    let file = File::open(&config.input)?;
    if file.metadata()?.is_dir() {
        return Err(LoadError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} is a directory", config.input.display()),
        )));
    }
    Ok(BufReader::new(file))
}

/// Feed every non-blank line of `reader` through the decoder into each sink, in order.
/// Sinks are finished before returning.
pub fn process<R: BufRead>(
    mut reader: R,
    layout: &Layout,
    options: ProcessOptions,
    sinks: &mut [&mut dyn RecordSink],
) -> Result<LoadSummary, LoadError> {
    let started = Utc::now();
    let mut lines_read = 0u64;
    let mut blank_lines = 0u64;
    let mut records = 0usize;
    let mut appended = 0u64;
    let mut skipped = 0u64;

    let mut buf = Vec::new();
    let mut line_no = 0usize;
    loop {
        if options.limit.is_some_and(|n| records >= n) {
            break;
        }
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;
        lines_read += 1;
        strip_line_ending(&mut buf);

        let decoded = match std::str::from_utf8(&buf) {
            Ok(line) if line.trim().is_empty() => {
                blank_lines += 1;
                continue;
            }
            Ok(line) => decode_line(layout, line),
            Err(e) => Err(ParseError::InvalidUtf8 {
                offset: e.valid_up_to(),
            }),
        };
        records += 1;

        let record = match decoded {
            Ok(r) => r,
            Err(source) if options.skip_invalid => {
                warn!(line = line_no, error = %source, "skipping line");
                skipped += 1;
                continue;
            }
            Err(source) => return Err(LoadError::Parse { line: line_no, source }),
        };

        for sink in sinks.iter_mut() {
            sink.append(&record)?;
        }
        appended += 1;

        if options.progress_every > 0 && appended % options.progress_every == 0 {
            info!(rows = appended, "progress");
        }
    }

    let mut rows_written = 0;
    for sink in sinks.iter_mut() {
        rows_written = sink.finish()?;
    }
    if sinks.is_empty() {
        rows_written = appended;
    }

    Ok(LoadSummary {
        lines_read,
        blank_lines,
        rows_written,
        skipped,
        started,
        finished: Utc::now(),
    })
}

fn strip_line_ending(buf: &mut Vec<u8>) {
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
}
