pub mod arrow;
pub mod ddl;

pub use self::arrow::{build_arrow_schema, map_to_arrow_type};
pub use self::ddl::{create_table_sql, map_to_sql_type};
