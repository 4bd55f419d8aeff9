//! Adapter implementations for port traits
//!
//! This module contains the concrete implementations that handle I/O:
//!
//! - `git/` - Staged changes and repository metadata
pub mod git;
