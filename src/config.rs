// src/config.rs

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::Layout;
use crate::error::LoadError;

/// Settings for a load or preview run.
///
/// Every field has a default, so a YAML file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoadConfig {
    /// Fixed-width natality file.
    pub input: PathBuf,
    /// DuckDB file; deleted and recreated on every load.
    pub database: PathBuf,
    pub table: String,
    /// Subset of catalog fields to decode and persist. `None` means all of them.
    pub fields: Option<Vec<String>>,
    /// Stop after this many non-blank lines.
    pub limit: Option<usize>,
    /// Log and skip lines that fail to decode instead of aborting.
    pub skip_invalid: bool,
    /// Optional Parquet export written alongside the database.
    pub parquet: Option<PathBuf>,
    pub batch_size: usize,
    pub progress_every: u64,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("data/Nat2023us/Nat2023PublicUS.c20240509.r20240724.txt"),
            database: PathBuf::from("data/births.ddb"),
            table: "births".to_string(),
            fields: None,
            limit: None,
            skip_invalid: false,
            parquet: None,
            batch_size: 10_000,
            progress_every: 100_000,
        }
    }
}

impl LoadConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self, LoadError> {
        let cfg: Self =
            serde_yaml::from_str(text).map_err(|e| LoadError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| LoadError::Config(format!("reading {}: {}", path.display(), e)))?;
        Self::from_yaml_str(&text)
    }

    pub fn validate(&self) -> Result<(), LoadError> {
        if !is_identifier(&self.table) {
            return Err(LoadError::Config(format!(
                "table name {:?} is not a plain identifier",
                self.table
            )));
        }
        if self.batch_size == 0 {
            return Err(LoadError::Config("batch_size must be positive".into()));
        }
        if matches!(&self.fields, Some(f) if f.is_empty()) {
            return Err(LoadError::Config("field list is empty".into()));
        }
        Ok(())
    }

    /// The layout selected by `fields`.
    pub fn layout(&self) -> Result<Layout, LoadError> {
        match &self.fields {
            Some(names) => Layout::select(names),
            None => Ok(Layout::full()),
        }
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_load_everything() -> Result<(), LoadError> {
        let cfg = LoadConfig::default();
        cfg.validate()?;
        assert_eq!(cfg.table, "births");
        assert_eq!(cfg.limit, None);
        assert_eq!(cfg.layout()?.len(), 80);
        Ok(())
    }

    #[test]
    fn yaml_overrides_only_given_keys() -> Result<(), LoadError> {
        let cfg = LoadConfig::from_yaml_str(
            "input: Nat2022.txt\nlimit: 50\nfields: [dob_yy, dob_mm, mager]\n",
        )?;
        assert_eq!(cfg.input, PathBuf::from("Nat2022.txt"));
        assert_eq!(cfg.limit, Some(50));
        assert_eq!(cfg.database, LoadConfig::default().database);
        assert_eq!(cfg.layout()?.min_line_len(), 76);
        Ok(())
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = LoadConfig::from_yaml_str("inptu: x.txt\n").unwrap_err();
        assert!(matches!(err, LoadError::Config(_)));
    }

    #[test]
    fn table_must_be_identifier() {
        let cfg = LoadConfig {
            table: "births; DROP".into(),
            ..LoadConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(LoadError::Config(_))));
        assert!(is_identifier("births_2023"));
        assert!(!is_identifier("2023"));
    }
}
