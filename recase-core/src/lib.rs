//! Case conversion helpers.
//!
//! Turns delimited or mixed-case text into kebab-case, camelCase or
//! dot.case. Every function is pure; camelCase and dot.case validate their
//! input first and fail with [`Error::InvalidInput`].

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod case;
mod error;
mod validate;

// Conversions
pub use case::{Case, convert_bytes, to_camel_case, to_dot_case, to_kebab_case};
pub use error::{Error, InvalidReason, Result};
// Input rules
pub use validate::{MISSING_VALUE_SENTINEL, validate_identifier_source};
