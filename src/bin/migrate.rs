//! Candidates Migration
//!
//! Creates public.candidates if missing, then bulk-loads the CSV into it.
//!
//! Options: --csv <PATH>, --verify

use anyhow::Context;
use candidate_loader::*;
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    log();
    let mut runner = cli::Args::parse().runner();
    let report = runner
        .run::<Candidates>()
        .await
        .with_context(|| format!("migration stopped at stage: {}", runner.stage()))?;
    log::info!("{:?}", report);
    println!("Migration completed.");
    Ok(())
}
