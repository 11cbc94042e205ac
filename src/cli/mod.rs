//! Terminal front end: one-shot conversion, interactive form and setup

pub mod convert;
pub mod form;
pub mod setup;
pub mod ui;
