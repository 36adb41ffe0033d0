pub mod de;
mod orm;
pub mod panic;
pub mod password;
pub mod rating;
pub mod scoring;
mod signal;
#[cfg(test)]
pub mod testing;

pub use orm::*;
pub use signal::*;
