//! Error Types
//!
//! This module defines the error types used throughout the generator.
//!
//! # Overview
//!
//! The main error type [`TexGenError`] covers all failure modes including:
//! - Invalid or ambiguous texture-kind specifications
//! - Template lookup and rendering errors
//! - Filesystem errors while writing generated artifacts
//!
//! # Usage
//!
//! All public APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, TexGenError>`.
//!
//! Configuration errors always name the offending GL texture target so a
//! failed run points straight at the table row that needs fixing.

use thiserror::Error;

/// The main error type for the generator.
#[derive(Error, Debug)]
pub enum TexGenError {
    // ========================================================================
    // Configuration Errors (invalid specification table — fatal)
    // ========================================================================
    /// A spec declared more spatial axes than any GL texture target has.
    #[error("Invalid spec for {kind}: dims must be at most 3 (got {dims})")]
    DimsOutOfRange {
        /// The GL texture target of the offending table row
        kind: String,
        /// The out-of-range axis count
        dims: u32,
    },

    /// A spec set both `array` and `buffer`, which have conflicting
    /// extent semantics (layer axis append vs. linear size replacement).
    #[error("Invalid spec for {kind}: array and buffer are mutually exclusive")]
    AmbiguousExtent {
        /// The GL texture target of the offending table row
        kind: String,
    },

    /// The class-name substitution pipeline produced something that is
    /// not a valid C++ identifier.
    #[error("Invalid spec for {kind}: derived class name {name:?} is not an identifier")]
    InvalidClassName {
        /// The GL texture target of the offending table row
        kind: String,
        /// The rejected pipeline output
        name: String,
    },

    /// Two table rows share one GL texture target.
    #[error("Duplicate spec table entry: {kind}")]
    DuplicateKind {
        /// The GL texture target appearing more than once
        kind: String,
    },

    // ========================================================================
    // Template Errors
    // ========================================================================
    /// Template lookup or rendering error (including missing context keys,
    /// which are a hard error rather than empty output).
    #[error("Template error: {0}")]
    TemplateError(#[from] minijinja::Error),

    // ========================================================================
    // I/O Errors
    // ========================================================================
    /// Failed to write a generated artifact.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Alias for `Result<T, TexGenError>`.
pub type Result<T> = std::result::Result<T, TexGenError>;
