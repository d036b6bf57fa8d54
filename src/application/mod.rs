pub mod broker;
pub mod error;

pub use error::{ApplicationError, Result};
