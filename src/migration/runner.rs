use super::*;
use crate::Check;
use crate::Config;
use crate::Error;
use crate::Schema;
use crate::Session;
use crate::Source;
use std::path::Path;
use std::path::PathBuf;

/// What a completed run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    /// Rows the server accepted from the file.
    pub copied: u64,
    /// Rows in the table after commit, if the count could be read.
    pub total: Option<i64>,
}

/// Executes configure → connect → ensure schema → open file → load →
/// commit → close, once, in that order. The first failure ends the run.
pub struct Runner {
    config: Config,
    csv: PathBuf,
    verify: bool,
    stage: Stage,
}

impl Runner {
    pub fn new(config: Config, csv: impl Into<PathBuf>) -> Self {
        let mut runner = Self {
            config,
            csv: csv.into(),
            verify: false,
            stage: Stage::Unconfigured,
        };
        runner.advance(Stage::Configured);
        runner
    }

    /// Reads connection parameters from the process environment.
    pub fn from_env(csv: impl Into<PathBuf>) -> Self {
        Self::new(Config::from_env(), csv)
    }

    /// Also check that an existing table's columns match the declaration.
    pub fn verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn csv(&self) -> &Path {
        &self.csv
    }

    pub async fn run<S: Schema>(&mut self) -> Result<Report, Error> {
        let mut session = Session::open(&self.config).await?;
        self.advance(Stage::Connected);

        log::info!("ensuring table {}", S::name());
        session.ensure::<S>().await?;
        if self.verify {
            log::info!("verifying columns of {}", S::name());
            session.verify::<S>().await?;
        }
        self.advance(Stage::SchemaEnsured);

        let source = Source::open(&self.csv).await?;
        self.advance(Stage::FileOpen);

        let pending = session.load::<S>(source).await?;
        log::info!("copied {} rows into {}", pending.rows(), S::name());
        self.advance(Stage::Loaded);

        let copied = pending.commit().await?;
        self.advance(Stage::Committed);

        let total = match session.client().count::<S>().await {
            Ok(n) => Some(n),
            Err(e) => {
                log::warn!("could not count rows in {}: {}", S::name(), e);
                None
            }
        };
        if let Some(n) = total {
            log::info!("{} now holds {} rows", S::name(), n);
        }

        session.close().await;
        self.advance(Stage::Closed);
        Ok(Report { copied, total })
    }

    fn advance(&mut self, next: Stage) {
        debug_assert!(self.stage.next() == Some(next), "{} -> {}", self.stage, next);
        log::info!("migration {}", next);
        self.stage = next;
    }
}
