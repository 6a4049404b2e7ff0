//! # Error Types
//!
//! Typed validation errors for trolley-core.
//!
//! ## Where Errors Live
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  trolley-core errors (this file)                                       │
//! │  └── ValidationError  - Input checks used by host doubles              │
//! │                                                                         │
//! │  trolley-hooks errors (separate crate)                                 │
//! │  └── HostError        - Failures the host's update mechanism reports   │
//! │                                                                         │
//! │  Note: the two hook operations themselves are TOTAL functions over     │
//! │  well-formed host input. Malformed product caps are normalized to      │
//! │  "no cap" rather than raised; fractional quantities are corrected      │
//! │  silently. ValidationError exists for the surfaces that do reject     │
//! │  input: the in-memory host and settings parsing.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, offending value)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when a caller hands a host double a value the real host
/// would never store, or when selector arguments are internally
/// inconsistent.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Value must be strictly positive.
    #[error("{field} must be positive, got {value}")]
    MustBePositive { field: String, value: f64 },

    /// Value must be finite (neither NaN nor infinite).
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Value must not be negative (zero allowed).
    #[error("{field} must not be negative, got {value}")]
    Negative { field: String, value: f64 },

    /// A range's bounds are inverted.
    #[error("{field} range is empty: min {min} exceeds max {max}")]
    EmptyRange { field: String, min: f64, max: f64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
            value: -2.5,
        };
        assert_eq!(err.to_string(), "quantity must be positive, got -2.5");

        let err = ValidationError::EmptyRange {
            field: "max_value".to_string(),
            min: 1.0,
            max: 0.0,
        };
        assert_eq!(err.to_string(), "max_value range is empty: min 1 exceeds max 0");
    }
}
