//! Common utilities for the Selkie selector builder.
//!
//! This crate provides shared infrastructure used by the builder and the CLI:
//! - **Warning System** - deduplicated, colored terminal output for accepted-but-unusual input

pub mod warning;
