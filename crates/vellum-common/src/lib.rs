//! Common utilities for the Vellum document tree.
//!
//! This crate provides shared infrastructure used by the tree crates:
//! - **Warning System** - colored terminal output for recoverable misuse and
//!   malformed attribute values

pub mod warning;
