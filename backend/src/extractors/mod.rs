mod json;
mod query;
mod session;

pub use json::*;
pub use query::*;
pub use session::*;
