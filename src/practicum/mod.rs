pub mod client;
pub mod error;
pub mod types;

pub use client::{PracticumClient, StatusSource};
pub use error::PracticumError;
pub use types::{Homework, current_date, describe_status, validate_response};
