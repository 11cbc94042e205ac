//! Core conversion logic, independent of the terminal front end

pub mod config;
pub mod currency;
pub mod engine;
pub mod fields;
pub mod format;
pub mod log;
pub mod rates;

// Re-export main types for cleaner imports
pub use currency::{Currency, InputSpec};
pub use engine::{Converter, FieldEdit, Variant, reduce};
pub use fields::FieldState;
pub use rates::RateTable;
