// src/catalog/mod.rs

//! Column catalog for the fixed-width natality record.

mod fields;

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;
use std::ops::Range;

use crate::error::LoadError;

pub use fields::FIELDS;

/// How the bytes of a field are turned into a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FieldKind {
    /// Required base-10 integer.
    Integer,
    /// Base-10 integer, absent when the slice is blank.
    NullableInteger,
    /// Required single character code.
    Character,
}

impl FieldKind {
    pub fn is_nullable(self) -> bool {
        matches!(self, FieldKind::NullableInteger)
    }
}

/// One entry of the record layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDef {
    /// Descriptive name, e.g. `YearOfBirth`.
    pub name: &'static str,
    /// Store column name, e.g. `dob_yy`.
    pub column: &'static str,
    pub description: &'static str,
    /// Zero-based inclusive start offset.
    pub start: usize,
    /// Exclusive end offset.
    pub end: usize,
    pub kind: FieldKind,
}

impl FieldDef {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn width(&self) -> usize {
        self.end - self.start
    }
}

/// Name and column → index into `FIELDS`.
static INDEX: Lazy<HashMap<&'static str, usize>> = Lazy::new(|| {
    let mut map = HashMap::with_capacity(FIELDS.len() * 2);
    for (i, f) in FIELDS.iter().enumerate() {
        map.insert(f.name, i);
        map.insert(f.column, i);
    }
    map
});

/// Find a field by descriptive name (`SexOfInfant`) or column name (`sex`).
pub fn lookup(name: &str) -> Option<&'static FieldDef> {
    INDEX.get(name).map(|&i| &FIELDS[i])
}

/// `(start, end)` of the named field.
pub fn range(name: &str) -> Option<(usize, usize)> {
    lookup(name).map(|f| (f.start, f.end))
}

/// An ordered selection of catalog fields that is decoded and persisted together.
///
/// Fields always appear in catalog order, whatever order they were requested in.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    fields: Vec<&'static FieldDef>,
    min_line_len: usize,
}

impl Layout {
    /// Every field in the catalog.
    pub fn full() -> Self {
        Self::from_fields(FIELDS.iter().collect())
    }

    /// The named fields only. Names may be descriptive or column names;
    /// duplicates are ignored.
    pub fn select<S: AsRef<str>>(names: &[S]) -> Result<Self, LoadError> {
        let mut wanted = vec![false; FIELDS.len()];
        for name in names {
            let name = name.as_ref().trim();
            let idx = INDEX
                .get(name)
                .copied()
                .ok_or_else(|| LoadError::UnknownField(name.to_string()))?;
            wanted[idx] = true;
        }
        let fields = FIELDS
            .iter()
            .zip(wanted)
            .filter_map(|(f, keep)| keep.then_some(f))
            .collect();
        Ok(Self::from_fields(fields))
    }

    fn from_fields(fields: Vec<&'static FieldDef>) -> Self {
        let min_line_len = fields.iter().map(|f| f.end).max().unwrap_or(0);
        Self {
            fields,
            min_line_len,
        }
    }

    pub fn fields(&self) -> &[&'static FieldDef] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Shortest line that covers every selected field.
    pub fn min_line_len(&self) -> usize {
        self.min_line_len
    }

    /// Position of a field within this layout.
    pub fn position(&self, name: &str) -> Option<usize> {
        let target = lookup(name)?;
        self.fields.iter().position(|f| std::ptr::eq(*f, target))
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::full()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn golden_offsets() {
        let expected = [
            ("YearOfBirth", (8, 12)),
            ("MonthOfBirth", (12, 14)),
            ("MothersAgeImputed", (72, 73)),
            ("MothersSingleYearsOfAge", (74, 76)),
            ("PaternityAcknowledged", (118, 119)),
            ("FathersRaceRecode6", (152, 153)),
            ("MonthPrenatalCareBegan", (223, 225)),
            ("SexOfInfant", (474, 475)),
            ("NoCongenitalAnomaliesChecked", (560, 561)),
            ("ReportingFlagForMonthPrenatalCareBegan", (225, 226)),
            ("ReportingFlagForWIC", (251, 252)),
        ];
        for (name, want) in expected {
            assert_eq!(range(name), Some(want), "offset mismatch for {name}");
        }
    }

    #[test]
    fn published_order_is_kept() {
        assert_eq!(FIELDS.len(), 80);
        assert_eq!(FIELDS[0].column, "dob_yy");
        assert_eq!(FIELDS[46].column, "sex");
        assert_eq!(FIELDS[72].column, "no_congen");
        assert_eq!(FIELDS[73].column, "f_mpcb");
        assert_eq!(FIELDS[79].column, "f_wic");
    }

    #[test]
    fn ranges_are_well_formed() {
        for f in FIELDS {
            assert!(f.start < f.end, "{} has empty range", f.name);
        }
    }

    #[test]
    fn names_and_columns_are_unique() {
        let mut seen = HashSet::new();
        for f in FIELDS {
            assert!(seen.insert(f.name), "duplicate name {}", f.name);
            assert!(seen.insert(f.column), "duplicate column {}", f.column);
            assert_eq!(f.column, f.column.to_ascii_lowercase());
        }
    }

    #[test]
    fn reference_kinds() {
        assert_eq!(lookup("mar_p").map(|f| f.kind), Some(FieldKind::Character));
        assert_eq!(
            lookup("MothersAgeImputed").map(|f| f.kind),
            Some(FieldKind::NullableInteger)
        );
        assert_eq!(lookup("dob_yy").map(|f| f.kind), Some(FieldKind::Integer));
        assert_eq!(lookup("sex").map(|f| f.kind), Some(FieldKind::Character));
        assert!(lookup("nope").is_none());
    }

    #[test]
    fn full_layout_needs_whole_record() {
        let layout = Layout::full();
        assert_eq!(layout.len(), 80);
        assert_eq!(layout.min_line_len(), 561);
    }

    #[test]
    fn select_keeps_catalog_order() -> Result<(), LoadError> {
        let layout = Layout::select(&["mager", "YearOfBirth", "dob_mm", "dob_yy"])?;
        let cols: Vec<_> = layout.fields().iter().map(|f| f.column).collect();
        assert_eq!(cols, vec!["dob_yy", "dob_mm", "mager"]);
        assert_eq!(layout.min_line_len(), 76);
        assert_eq!(layout.position("mager"), Some(2));
        assert_eq!(layout.position("sex"), None);
        Ok(())
    }

    #[test]
    fn select_rejects_unknown_names() {
        let err = Layout::select(&["dob_yy", "dob_zz"]).unwrap_err();
        assert!(matches!(err, LoadError::UnknownField(ref n) if n == "dob_zz"));
    }
}
