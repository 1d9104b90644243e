//! # Error Types
//!
//! Domain-specific error types for slice-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  slice-core errors (this file)                                         │
//! │  ├── CoreError        - Catalog construction failures                  │
//! │  └── ValidationError  - Menu entry validation failures                 │
//! │                                                                         │
//! │  slice-menu errors (separate crate)                                    │
//! │  └── MenuError        - File, JSON and environment failures            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → MenuError → caller                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Configurator operations themselves never fail. Errors only surface
//! while a menu is being assembled.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised while assembling catalogs and menus.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Two catalog entries share an id.
    ///
    /// ## When This Occurs
    /// - A menu file lists the same size twice
    /// - Two ingredients were given the same slug
    #[error("Duplicate {catalog} id: '{id}'")]
    DuplicateId { catalog: String, id: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors for catalog entries and pricing rules.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g., id containing spaces).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
