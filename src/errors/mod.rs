//! Error types and diagnostics for the front end.
//!
//! This module defines:
//!
//! - Fatal errors with source position information, which abort compilation
//! - Warnings, which are handed to a diagnostic sink and never abort
//! - Error names and helpful suggestions for display

pub mod diagnostics;
pub mod errors;
