use super::*;
use crate::Error;
use crate::PgErr;
use tokio_postgres::Client;

/// Catalog and count queries used around the migration.
#[async_trait::async_trait]
pub trait Check: Send + Sync {
    /// Column names and `data_type`s of a table, in ordinal order.
    /// Empty when the table does not exist.
    async fn shape(&self, namespace: &str, table: &str) -> Result<Vec<(String, String)>, PgErr>;
    /// Number of rows currently visible in the table.
    async fn count<S: Schema>(&self) -> Result<i64, PgErr>;
}

#[async_trait::async_trait]
impl Check for Client {
    async fn shape(&self, namespace: &str, table: &str) -> Result<Vec<(String, String)>, PgErr> {
        #[rustfmt::skip]
        const SQL: &str = const_format::concatcp!(
            "SELECT   column_name, ",
                     "data_type ",
            "FROM     information_schema.columns ",
            "WHERE    table_schema = $1 ",
            "AND      table_name   = $2 ",
            "ORDER BY ordinal_position"
        );
        Ok(self
            .query(SQL, &[&namespace, &table])
            .await?
            .iter()
            .map(|row| (row.get::<_, String>(0), row.get::<_, String>(1)))
            .collect())
    }
    async fn count<S: Schema>(&self) -> Result<i64, PgErr> {
        Ok(self.query_one(&S::counts(), &[]).await?.get::<_, i64>(0))
    }
}

/// Compares a table's catalog shape with the declared columns.
///
/// Names compare case-exactly, types by their catalog spelling.
pub fn verify<S: Schema>(found: &[(String, String)]) -> Result<(), Error> {
    let expected = S::columns()
        .iter()
        .map(|c| (c.name.to_string(), c.kind.catalog().to_string()))
        .collect::<Vec<_>>();
    if expected.as_slice() == found {
        Ok(())
    } else {
        let render = |cols: &[(String, String)]| {
            cols.iter()
                .map(|(name, kind)| format!("{} {}", quote(name), kind))
                .collect::<Vec<_>>()
                .join(", ")
        };
        Err(Error::Mismatch {
            table: S::name(),
            expected: render(&expected),
            found: render(found),
        })
    }
}
