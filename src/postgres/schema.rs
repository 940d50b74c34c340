/// Declared PostgreSQL type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Datatype {
    Text,
    Date,
    Integer,
}

impl Datatype {
    /// Type name as written in DDL.
    pub const fn sql(&self) -> &'static str {
        match self {
            Self::Text => "TEXT",
            Self::Date => "DATE",
            Self::Integer => "INTEGER",
        }
    }
    /// Type name as reported by `information_schema.columns.data_type`.
    pub const fn catalog(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Date => "date",
            Self::Integer => "integer",
        }
    }
}

/// A case-preserving column declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub kind: Datatype,
}

impl Column {
    pub const fn new(name: &'static str, kind: Datatype) -> Self {
        Self { name, kind }
    }
}

/// Wraps an identifier in double quotes so PostgreSQL keeps its exact case.
pub fn quote(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

/// Schema metadata for a PostgreSQL table.
///
/// Describes table structure and generates the statements the migration
/// issues against it. No I/O happens here; see [`crate::Session`] and
/// [`crate::Source`] for that.
pub trait Schema {
    /// Namespace the table lives in.
    fn namespace() -> &'static str;
    /// Unqualified table name.
    fn table() -> &'static str;
    /// Column declarations, in CSV order.
    fn columns() -> &'static [Column];
    /// Schema-qualified, quoted table name.
    fn name() -> String {
        format!("{}.{}", quote(Self::namespace()), quote(Self::table()))
    }
    /// `CREATE TABLE IF NOT EXISTS` DDL statement.
    fn creates() -> String {
        let columns = Self::columns()
            .iter()
            .map(|c| format!("    {} {}", quote(c.name), c.kind.sql()))
            .collect::<Vec<_>>()
            .join(",\n");
        format!("CREATE TABLE IF NOT EXISTS {} (\n{}\n);", Self::name(), columns)
    }
    /// `COPY ... FROM STDIN` command for CSV bulk loading.
    ///
    /// `HEADER MATCH` makes the server reject a header line whose names or
    /// count differ from the table's columns, compared case-exactly.
    fn copy() -> String {
        format!(
            "COPY {} FROM STDIN WITH (FORMAT csv, HEADER MATCH, DELIMITER ',')",
            Self::name()
        )
    }
    /// Row count query.
    fn counts() -> String {
        format!("SELECT COUNT(*) FROM {}", Self::name())
    }
}
