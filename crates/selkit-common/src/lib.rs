//! Common utilities for the selkit crates.
//!
//! This crate provides shared infrastructure used by every selkit component:
//! - **Warning System** - colored terminal output for questionable input

pub mod warning;
