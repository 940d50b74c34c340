use super::*;
use crate::Config;
use crate::Error;
use crate::PgErr;
use tokio::task::JoinHandle;
use tokio_postgres::Client;
use tokio_postgres::NoTls;
use tokio_postgres::Transaction;

/// One live database session.
///
/// Owns the client and the spawned driver task that services it. Dropping a
/// `Session` tears the connection down; [`Session::close`] does the same but
/// also reports how the driver finished.
pub struct Session {
    client: Client,
    driver: JoinHandle<Result<(), PgErr>>,
}

impl Session {
    /// Connects using `config`.
    ///
    /// Absent or malformed configuration fails here, before any network I/O.
    pub async fn open(config: &Config) -> Result<Self, Error> {
        let pg = config.pg()?;
        log::info!("connecting to database ({})", config);
        let (client, connection) = pg.connect(NoTls).await.map_err(Error::Connection)?;
        let driver = tokio::spawn(connection);
        client
            .execute("SET client_min_messages TO WARNING", &[])
            .await
            .map_err(Error::Connection)?;
        Ok(Self { client, driver })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Creates the table unless one with that name exists, in its own
    /// committed transaction. An existing table is left untouched.
    pub async fn ensure<S: Schema>(&mut self) -> Result<(), Error> {
        let ref ddl = S::creates();
        log::debug!("{}", ddl);
        let tx = self.client.transaction().await.map_err(Error::Schema)?;
        tx.batch_execute(ddl).await.map_err(Error::Schema)?;
        tx.commit().await.map_err(Error::Schema)
    }

    /// Fails unless the table's columns match the declaration exactly.
    pub async fn verify<S: Schema>(&self) -> Result<(), Error> {
        let found = self
            .client
            .shape(S::namespace(), S::table())
            .await
            .map_err(Error::Schema)?;
        verify::<S>(&found)
    }

    /// Copies `source` into the table inside a fresh transaction.
    ///
    /// The returned [`Pending`] must be committed for the rows to persist;
    /// dropping it, or any error on the way here, rolls the copy back.
    pub async fn load<S: Schema>(&mut self, source: Source) -> Result<Pending<'_>, Error> {
        let tx = self.client.transaction().await.map_err(Error::Load)?;
        let rows = source.stream::<S>(&tx).await?;
        Ok(Pending { tx, rows })
    }

    /// Drops the client and waits for the driver task to wind down.
    /// Failures are logged, never returned.
    pub async fn close(self) {
        let Self { client, driver } = self;
        drop(client);
        match driver.await {
            Ok(Ok(())) => log::debug!("database connection closed"),
            Ok(Err(e)) => log::warn!("database connection closed with error: {}", e),
            Err(e) => log::warn!("database driver task failed: {}", e),
        }
    }
}

/// Rows copied but not yet committed.
pub struct Pending<'a> {
    tx: Transaction<'a>,
    rows: u64,
}

impl Pending<'_> {
    pub fn rows(&self) -> u64 {
        self.rows
    }

    /// Makes the copied rows durable and visible to other sessions.
    pub async fn commit(self) -> Result<u64, Error> {
        self.tx.commit().await.map_err(Error::Load)?;
        Ok(self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Kind;

    #[tokio::test]
    async fn unset_config_fails_before_connecting() {
        let config = Config::default();
        let err = Session::open(&config).await.err().unwrap();
        assert!(err.kind() == Kind::Connection);
        assert!(matches!(err, Error::Unset(crate::DB_NAME)));
    }

    #[tokio::test]
    async fn malformed_port_fails_before_connecting() {
        let config = Config {
            dbname: Some("hiring".into()),
            user: Some("loader".into()),
            password: Some("secret".into()),
            host: Some("localhost".into()),
            port: Some("not-a-port".into()),
        };
        let err = Session::open(&config).await.err().unwrap();
        assert!(matches!(err, Error::Port(_)));
    }
}
