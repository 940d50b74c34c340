mod runner;
mod stage;

pub use runner::*;
pub use stage::*;
