// src/schema/ddl.rs

use crate::catalog::{FieldKind, Layout};

/// DuckDB column type for a field kind.
///
/// Character codes such as `mar_p` or `sex` are kept as one-letter `VARCHAR`
/// columns rather than integers, the same way the Parquet export stores them.
pub fn map_to_sql_type(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Integer => "INTEGER NOT NULL",
        FieldKind::NullableInteger => "INTEGER",
        FieldKind::Character => "VARCHAR NOT NULL",
    }
}

/// `CREATE TABLE` statement with one column per layout field, in layout order.
pub fn create_table_sql(table: &str, layout: &Layout) -> String {
    let cols: Vec<String> = layout
        .fields()
        .iter()
        .map(|f| format!("    \"{}\" {}", f.column, map_to_sql_type(f.kind)))
        .collect();
    format!(
        "CREATE TABLE \"{}\" (\n{}\n);",
        table.replace('"', "\"\""),
        cols.join(",\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_columns() -> anyhow::Result<()> {
        let layout = Layout::select(&[
            "dob_yy",
            "dob_mm",
            "bfacil",
            "f_bfacil",
            "mage_impflg",
            "mage_repflg",
            "mager",
        ])?;
        let sql = create_table_sql("births", &layout);
        assert_eq!(
            sql,
            "CREATE TABLE \"births\" (\n\
             \x20   \"dob_yy\" INTEGER NOT NULL,\n\
             \x20   \"dob_mm\" INTEGER NOT NULL,\n\
             \x20   \"bfacil\" INTEGER NOT NULL,\n\
             \x20   \"f_bfacil\" INTEGER NOT NULL,\n\
             \x20   \"mage_impflg\" INTEGER,\n\
             \x20   \"mage_repflg\" INTEGER,\n\
             \x20   \"mager\" INTEGER NOT NULL\n\
             );"
        );
        Ok(())
    }

    #[test]
    fn full_layout_has_every_column() {
        let sql = create_table_sql("births", &Layout::full());
        assert_eq!(sql.matches("INTEGER").count() + sql.matches("VARCHAR").count(), 80);
        assert!(sql.contains("\"sex\" VARCHAR NOT NULL"));
        assert!(sql.contains("\"imp_sex\" INTEGER,"));
    }
}
