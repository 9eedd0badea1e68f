//! Core operations.
//!
//! This module contains the business logic for recase commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod convert;

pub use check::check;
pub use convert::convert;
