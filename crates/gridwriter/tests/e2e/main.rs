//! End-to-end tests for gridwriter.
//!
//! Each test drives a [`gridwriter::SheetWriter`] session through its public
//! API and inspects the resulting document. Persistence tests write to a
//! temporary directory.

mod charts;
mod common;
mod cursor;
mod handles;
mod persistence;
mod sheets;
mod tables;

// Re-export common utilities for submodules
pub use common::*;
