use crate::CSV_PATH;
use crate::Runner;
use clap::Parser;
use std::path::PathBuf;

/// Provision public.candidates and bulk-load it from CSV.
///
/// Connection parameters come from DB_NAME, DB_USER, DB_PASSWORD, DB_HOST
/// and DB_PORT.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// CSV file to load; must have a header row naming the table's columns.
    #[arg(long, default_value = CSV_PATH)]
    pub csv: PathBuf,
    /// Fail if an existing table's columns differ from the declared schema.
    #[arg(long)]
    pub verify: bool,
}

impl Args {
    pub fn runner(self) -> Runner {
        Runner::from_env(self.csv).verify(self.verify)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_fixed_path_without_verification() {
        let args = Args::try_parse_from(["migrate"]).unwrap();
        assert!(args.csv == PathBuf::from(CSV_PATH));
        assert!(!args.verify);
    }

    #[test]
    fn overrides() {
        let args = Args::try_parse_from(["migrate", "--csv", "x.csv", "--verify"]).unwrap();
        assert!(args.csv == PathBuf::from("x.csv"));
        assert!(args.verify);
    }

    #[test]
    fn rejects_positional() {
        assert!(Args::try_parse_from(["migrate", "x.csv"]).is_err());
    }
}
