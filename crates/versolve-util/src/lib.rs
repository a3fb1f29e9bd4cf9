//! Shared utilities for versolve.
//!
//! This crate provides cross-cutting concerns used by the other versolve
//! crates: the outer error type, filesystem helpers, and Cargo-style terminal
//! status lines.

pub mod errors;
pub mod fs;
pub mod progress;
