use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for versolve operations outside the resolution engine.
#[derive(Debug, Error, Diagnostic)]
pub enum VersolveError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or malformed project manifest (`versolve.toml`).
    #[error("Manifest error: {message}")]
    #[diagnostic(help("Check your versolve.toml for syntax errors"))]
    Manifest { message: String },

    /// The version index could not be located, read, or parsed.
    #[error("Index error: {message}")]
    #[diagnostic(help("Pass --index or set [index] path in versolve.toml"))]
    Index { message: String },

    /// Dependency resolution failed.
    #[error("Dependency resolution failed: {message}")]
    Resolution { message: String },

    /// Lockfile could not be read or written.
    #[error("Lockfile error: {message}")]
    Lockfile { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type VersolveResult<T> = miette::Result<T>;
