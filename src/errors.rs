//! Error Types
//!
//! This module defines the error types used throughout the auditor.
//!
//! # Overview
//!
//! The main error type [`AuditError`] covers the failure modes that are
//! *not* plain absence:
//! - Host failures while reading scene or settings files
//! - Contract violations by the caller (reusing a collector, asking the
//!   scene auditor for problem descriptors)
//!
//! Missing materials, shaders, textures or scene files are never errors;
//! they are skipped where they are encountered.
//!
//! # Usage
//!
//! All fallible public APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, AuditError>`.
//!
//! ```rust,ignore
//! use asset_audit::errors::Result;
//!
//! fn open() -> Result<()> {
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// The main error type for the auditor.
#[derive(Error, Debug)]
pub enum AuditError {
    // ========================================================================
    // Host Errors
    // ========================================================================
    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing error (scene documents, build settings).
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The host was asked to open a scene it does not know about.
    #[error("Scene not found: {0}")]
    SceneNotFound(String),

    // ========================================================================
    // Contract Violations
    // ========================================================================
    /// A stats collector was fed a second scene.
    #[error("Stats collector already collected a scene; create a new collector per scene")]
    CollectorReused,

    /// The operation is not supported by this auditor.
    #[error("Operation not supported: {0}")]
    Unsupported(&'static str),
}

/// Alias for `Result<T, AuditError>`.
pub type Result<T> = std::result::Result<T, AuditError>;
