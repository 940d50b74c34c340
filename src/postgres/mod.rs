mod check;
mod connect;
mod schema;
mod stream;

pub use check::*;
pub use connect::*;
pub use schema::*;
pub use stream::*;
