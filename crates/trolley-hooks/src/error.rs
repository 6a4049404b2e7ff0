//! # Hook-Layer Errors
//!
//! Failures that cross the host boundary. The correction policy itself is
//! total; what can fail is the host's update mechanism and the parsing of
//! the host's settings blob.

use thiserror::Error;

// =============================================================================
// Host Error
// =============================================================================

/// A failure reported by the host's cart update mechanism.
///
/// The corrector propagates these untouched with `?`; handling them is the
/// host's responsibility, not this extension's.
#[derive(Debug, Error)]
pub enum HostError {
    /// The line key no longer resolves to a cart entry.
    ///
    /// ## When This Occurs
    /// - The line was removed between the snapshot and the update
    /// - The host regenerated keys mid-request
    #[error("cart line not found: {key}")]
    LineNotFound { key: String },

    /// The host refused the quantity update.
    #[error("host rejected quantity update for {key}: {reason}")]
    UpdateRejected { key: String, reason: String },
}

// =============================================================================
// Settings Error
// =============================================================================

/// A failure parsing the host's settings blob.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The blob is not the JSON shape [`crate::Settings`] expects.
    #[error("invalid extension settings: {0}")]
    Invalid(#[from] serde_json::Error),
}

// =============================================================================
// Unit Tests
// =============================================================================
