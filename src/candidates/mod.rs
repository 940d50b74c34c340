use crate::Column;
use crate::Datatype;
use crate::Schema;

/// Namespace the candidates table is provisioned in.
#[rustfmt::skip]
pub const PUBLIC:     &str = "public";
/// Table holding one row per job application.
#[rustfmt::skip]
pub const CANDIDATES: &str = "candidates";

/// The applicant dataset: who applied, when, from where, and how they scored.
pub struct Candidates;

#[rustfmt::skip]
const COLUMNS: &[Column] = &[
    Column::new("First Name",                Datatype::Text),
    Column::new("Last Name",                 Datatype::Text),
    Column::new("Email",                     Datatype::Text),
    Column::new("Application Date",          Datatype::Date),
    Column::new("Country",                   Datatype::Text),
    Column::new("YOE",                       Datatype::Integer),
    Column::new("Seniority",                 Datatype::Text),
    Column::new("Technology",                Datatype::Text),
    Column::new("Code Challenge Score",      Datatype::Integer),
    Column::new("Technical Interview Score", Datatype::Integer),
];

impl Schema for Candidates {
    fn namespace() -> &'static str {
        PUBLIC
    }
    fn table() -> &'static str {
        CANDIDATES
    }
    fn columns() -> &'static [Column] {
        COLUMNS
    }
}
