//! taskmatrix - Eisenhower-matrix task prioritization tuned to an energy budget
//!
//! This library classifies tasks into the four Eisenhower quadrants, orders
//! them for a given energy level or spoon count, recommends what still fits
//! the remaining budget, and turns free-form model replies into tasks.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod api;
pub mod config;
pub mod core;
#[cfg(feature = "llm")]
pub mod llm;
pub mod output;
pub mod parser;
pub mod paths;
