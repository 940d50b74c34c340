use crate::Error;
use crate::DB_HOST;
use crate::DB_NAME;
use crate::DB_PASSWORD;
use crate::DB_PORT;
use crate::DB_USER;

/// Connection parameters for a single run.
///
/// Every field is read verbatim and may be absent. Nothing is checked here;
/// [`Config::pg`] is the one place that decides a missing or malformed value
/// cannot produce a session.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub dbname: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub host: Option<String>,
    pub port: Option<String>,
}

impl Config {
    /// Reads the five `DB_*` variables from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds a configuration from any variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            dbname: lookup(DB_NAME),
            user: lookup(DB_USER),
            password: lookup(DB_PASSWORD),
            host: lookup(DB_HOST),
            port: lookup(DB_PORT),
        }
    }

    /// Names of the variables that were not set, in declaration order.
    pub fn missing(&self) -> Vec<&'static str> {
        self.fields()
            .into_iter()
            .filter(|(_, value)| value.is_none())
            .map(|(var, _)| var)
            .collect()
    }

    /// Resolves into a driver configuration.
    ///
    /// Fails with a connection-kind error for the first absent variable, or
    /// when the port does not parse as a `u16`.
    pub fn pg(&self) -> Result<tokio_postgres::Config, Error> {
        if let Some(var) = self.missing().into_iter().next() {
            return Err(Error::Unset(var));
        }
        let ref port = self.port.clone().unwrap_or_default();
        let port = port
            .trim()
            .parse::<u16>()
            .map_err(|_| Error::Port(port.clone()))?;
        let mut config = tokio_postgres::Config::new();
        config
            .dbname(self.dbname.as_deref().unwrap_or_default())
            .user(self.user.as_deref().unwrap_or_default())
            .password(self.password.as_deref().unwrap_or_default())
            .host(self.host.as_deref().unwrap_or_default())
            .port(port);
        Ok(config)
    }

    fn fields(&self) -> [(&'static str, Option<&str>); 5] {
        [
            (DB_NAME, self.dbname.as_deref()),
            (DB_USER, self.user.as_deref()),
            (DB_PASSWORD, self.password.as_deref()),
            (DB_HOST, self.host.as_deref()),
            (DB_PORT, self.port.as_deref()),
        ]
    }
}

/// Renders as `user@host:port/dbname`; the password never appears.
impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let show = |v: &Option<String>| v.clone().unwrap_or_else(|| "?".to_string());
        write!(
            f,
            "{}@{}:{}/{}",
            show(&self.user),
            show(&self.host),
            show(&self.port),
            show(&self.dbname)
        )
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("dbname", &self.dbname)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}
