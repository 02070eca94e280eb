// src/record/mod.rs

//! Decoding of fixed-width lines into typed records.

pub mod encode;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::catalog::{FieldDef, FieldKind, Layout};
use crate::error::ParseError;

/// A decoded field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum Value {
    Integer(i32),
    NullableInteger(Option<i32>),
    Character(char),
}

impl Value {
    /// Integer content of `Integer` and present `NullableInteger` values.
    pub fn as_integer(&self) -> Option<i32> {
        match *self {
            Value::Integer(v) => Some(v),
            Value::NullableInteger(v) => v,
            Value::Character(_) => None,
        }
    }

    pub fn as_char(&self) -> Option<char> {
        match *self {
            Value::Character(c) => Some(c),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Value::NullableInteger(None))
    }
}

/// One decoded line. Values are positionally aligned with the layout's fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Record<'a> {
    layout: &'a Layout,
    values: Vec<Value>,
}

impl<'a> Record<'a> {
    pub fn layout(&self) -> &'a Layout {
        self.layout
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// `(field, value)` pairs in layout order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static FieldDef, &Value)> + '_ {
        self.layout.fields().iter().copied().zip(self.values.iter())
    }

    /// Value of a field by descriptive or column name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.layout.position(name).map(|i| &self.values[i])
    }

    pub fn integer(&self, name: &str) -> Option<i32> {
        self.get(name).and_then(Value::as_integer)
    }

    pub fn character(&self, name: &str) -> Option<char> {
        self.get(name).and_then(Value::as_char)
    }
}

/// JSON-style object keyed by store column name.
impl Serialize for Record<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (field, value) in self.iter() {
            map.serialize_entry(field.column, value)?;
        }
        map.end()
    }
}

/// Decode one line against `layout`. All-or-nothing: the first failing field aborts.
pub fn decode_line<'a>(layout: &'a Layout, line: &str) -> Result<Record<'a>, ParseError> {
    if line.len() < layout.min_line_len() {
        return Err(ParseError::LineTooShort {
            expected: layout.min_line_len(),
            actual: line.len(),
        });
    }

    let values = layout
        .fields()
        .iter()
        .map(|field| {
            let slice = line
                .get(field.range())
                .ok_or(ParseError::Malformed { field: field.name })?;
            decode_field(field, slice)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Record { layout, values })
}

fn decode_field(field: &FieldDef, slice: &str) -> Result<Value, ParseError> {
    let blank = slice.trim().is_empty();
    match field.kind {
        FieldKind::Integer => {
            if blank {
                return Err(blank_error(field, slice));
            }
            parse_integer(field, slice).map(Value::Integer)
        }
        FieldKind::NullableInteger => {
            if blank {
                return Ok(Value::NullableInteger(None));
            }
            parse_integer(field, slice).map(|v| Value::NullableInteger(Some(v)))
        }
        FieldKind::Character => match slice.chars().next() {
            Some(c) if !blank => Ok(Value::Character(c)),
            _ => Err(blank_error(field, slice)),
        },
    }
}

/// Locale-independent integer: optional surrounding whitespace and leading sign.
fn parse_integer(field: &FieldDef, slice: &str) -> Result<i32, ParseError> {
    slice
        .trim()
        .parse::<i32>()
        .map_err(|_| ParseError::InvalidInteger {
            field: field.name,
            slice: slice.to_string(),
        })
}

fn blank_error(field: &FieldDef, slice: &str) -> ParseError {
    ParseError::Blank {
        field: field.name,
        slice: slice.to_string(),
    }
}
