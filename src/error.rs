use std::path::PathBuf;

/// PostgreSQL error type alias.
pub type PgErr = tokio_postgres::Error;

/// The four ways a migration run can fail. All of them are fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Connection,
    Schema,
    File,
    Load,
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connection => write!(f, "connection"),
            Self::Schema => write!(f, "schema"),
            Self::File => write!(f, "file"),
            Self::Load => write!(f, "load"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("connection error: {0} is not set")]
    Unset(&'static str),
    #[error("connection error: port {0:?} is not a valid port number")]
    Port(String),
    #[error("connection error: {0}")]
    Connection(#[source] PgErr),
    #[error("schema error: {0}")]
    Schema(#[source] PgErr),
    #[error("schema error: {table} has columns [{found}], expected [{expected}]")]
    Mismatch {
        table: String,
        expected: String,
        found: String,
    },
    #[error("file error: {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("load error: {0}")]
    Load(#[source] PgErr),
}

impl Error {
    pub fn kind(&self) -> Kind {
        match self {
            Self::Unset(_) | Self::Port(_) | Self::Connection(_) => Kind::Connection,
            Self::Schema(_) | Self::Mismatch { .. } => Kind::Schema,
            Self::File { .. } => Kind::File,
            Self::Load(_) => Kind::Load,
        }
    }

    pub(crate) fn file(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::File { path, source }
    }
}
