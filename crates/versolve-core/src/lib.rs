//! Core data types for versolve.
//!
//! This crate defines the files a versolve project is made of: the
//! `versolve.toml` manifest and the package listing built from it, the JSON
//! version index, the `versolve.lock` lockfile, and the user's global
//! configuration.
//!
//! This crate is intentionally free of network I/O.

/// File name of the project manifest.
pub const MANIFEST_FILE: &str = "versolve.toml";

/// File name of the lockfile written next to the manifest.
pub const LOCKFILE_FILE: &str = "versolve.lock";

pub mod config;
pub mod index_file;
pub mod listing;
pub mod lockfile;
pub mod manifest;
