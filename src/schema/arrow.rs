// src/schema/arrow.rs

use arrow::datatypes::{DataType, Field as ArrowField, Schema as ArrowSchema};
use std::sync::Arc;

use crate::catalog::{FieldKind, Layout};

/// Map a field kind into an Arrow DataType.
///
/// - Integer, NullableInteger → Int32
/// - Character                → Utf8
pub fn map_to_arrow_type(kind: FieldKind) -> DataType {
    match kind {
        FieldKind::Integer | FieldKind::NullableInteger => DataType::Int32,
        FieldKind::Character => DataType::Utf8,
    }
}

/// Build an ArrowSchema (inside an Arc) from the fields of a layout.
pub fn build_arrow_schema(layout: &Layout) -> Arc<ArrowSchema> {
    let fields: Vec<ArrowField> = layout
        .fields()
        .iter()
        .map(|f| ArrowField::new(f.column, map_to_arrow_type(f.kind), f.kind.is_nullable()))
        .collect();

    Arc::new(ArrowSchema::new(fields))
}
