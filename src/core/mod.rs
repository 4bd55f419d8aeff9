//! Core gate logic for commit-gates
//!
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Report, Finding, Whitelist, TrackerStatus)
//! - `services/` - Policy evaluation
//! - `ports/` - Trait definitions for git access

pub mod models;
pub mod ports;
pub mod services;
