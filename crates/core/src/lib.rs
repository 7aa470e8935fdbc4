pub mod error;
pub mod notes;
pub mod sanitize;
pub mod types;
