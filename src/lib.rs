//! commit-gates - Repository safety gates for git hooks
//!
//! This library provides two families of commit-time checks: build-safety
//! gates that keep the stylesheet pipeline intact, and issue-reference gates
//! that enforce the tracker-first mandate on commit messages.

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

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod paths;

pub use error::{GateError, Result};
