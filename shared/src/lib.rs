pub mod error;
pub mod models;
pub mod validation;
pub mod poll_logic;

pub use error::{PollError, Result, ErrorResponse};
pub use models::*;
pub use validation::*;
pub use poll_logic::PollRegistry;

#[cfg(test)]
mod tests;
