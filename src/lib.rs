//! One-shot migration of the candidates dataset into PostgreSQL.
//!
//! Provisions `public.candidates` (idempotently) and bulk-loads a CSV file
//! into it through the `COPY ... FROM STDIN` protocol.
//!
//! ## Stages
//!
//! - [`Config`] — connection parameters read from the environment
//! - [`Session`] — one live connection, closed explicitly at the end
//! - [`Schema`] — table metadata and DDL generation
//! - [`Source`] — scoped read handle on the CSV file
//! - [`Runner`] — the ordered configure → connect → ensure → load → commit → close procedure
pub mod candidates;
pub mod config;
pub mod error;
pub mod migration;
pub mod postgres;

#[cfg(feature = "cli")]
pub mod cli;

pub use candidates::*;
pub use config::*;
pub use error::*;
pub use migration::*;
pub use postgres::*;

// ============================================================================
// ENVIRONMENT
// ============================================================================
/// Database name.
#[rustfmt::skip]
pub const DB_NAME:     &str = "DB_NAME";
/// Role to authenticate as.
#[rustfmt::skip]
pub const DB_USER:     &str = "DB_USER";
/// Password for [`DB_USER`].
#[rustfmt::skip]
pub const DB_PASSWORD: &str = "DB_PASSWORD";
/// Server hostname or socket directory.
#[rustfmt::skip]
pub const DB_HOST:     &str = "DB_HOST";
/// Server port.
#[rustfmt::skip]
pub const DB_PORT:     &str = "DB_PORT";

// ============================================================================
// SOURCE
// ============================================================================
/// Where the cleaned candidates export lives, relative to the working directory.
pub const CSV_PATH: &str = "../data/fixed_candidates.csv";
/// Read size for each chunk handed to the COPY sink.
pub const CHUNK_SIZE: usize = 64 * 1024;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
