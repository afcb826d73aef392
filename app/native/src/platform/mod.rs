//! Platform utilities.

pub mod path;
