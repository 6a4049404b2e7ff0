//! # Extension Settings
//!
//! Configuration the host hands the extension at load time.
//!
//! ## Configuration Sources (Priority Order)
//! 1. The host's settings blob (JSON, via [`Settings::from_json`])
//! 2. Defaults (this file)
//!
//! Every field has a default and unknown fields are ignored, so an older
//! settings blob keeps loading after an upgrade.

use serde::{Deserialize, Serialize};

use trolley_core::rounding::RoundingMode;

use crate::error::SettingsError;

// =============================================================================
// Settings
// =============================================================================

/// Extension configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// How fractional cart quantities are rewritten.
    /// Default: half away from zero, the host's own rounding function.
    pub rounding_mode: RoundingMode,
}

impl Settings {
    /// Parses the host's settings blob.
    ///
    /// ## Example
    /// ```rust
    /// use trolley_core::rounding::RoundingMode;
    /// use trolley_hooks::settings::Settings;
    ///
    /// let settings = Settings::from_json(r#"{"rounding_mode":"floor"}"#).unwrap();
    /// assert_eq!(settings.rounding_mode, RoundingMode::Floor);
    ///
    /// // An empty blob is the defaults
    /// let settings = Settings::from_json("{}").unwrap();
    /// assert_eq!(settings.rounding_mode, RoundingMode::HalfAwayFromZero);
    /// ```
    pub fn from_json(raw: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(raw)?)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
