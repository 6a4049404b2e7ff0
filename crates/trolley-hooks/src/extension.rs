//! # Extension Assembly
//!
//! The bundle a host loads as one unit: both hooks, configured from one
//! [`Settings`] value.
//!
//! ## Registration Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Host startup                                                           │
//! │                                                                         │
//! │  let ext = WholeUnitExtension::new(Settings::from_json(blob)?);        │
//! │                                                                         │
//! │  register on quantity-input point ──► ext.input_filter.filter_args     │
//! │  register before totals point ──────► ext.cart_corrector.before_totals │
//! │                                                                         │
//! │  No other wiring: both callbacks are stateless and request-scoped.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::corrector::CartQuantityCorrector;
use crate::filter::QuantityInputFilter;
use crate::settings::Settings;

// =============================================================================
// Whole-Unit Extension
// =============================================================================

/// Both hooks, built from one settings value.
#[derive(Debug, Clone, Copy, Default)]
pub struct WholeUnitExtension {
    /// Extension point A: render-time input arguments.
    pub input_filter: QuantityInputFilter,

    /// Extension point B: pre-totals cart correction.
    pub cart_corrector: CartQuantityCorrector,
}

impl WholeUnitExtension {
    /// Assembles the extension from parsed settings. Infallible; settings
    /// parsing errors surface at [`Settings::from_json`].
    pub fn new(settings: Settings) -> Self {
        WholeUnitExtension {
            input_filter: QuantityInputFilter::new(),
            cart_corrector: CartQuantityCorrector::new(settings.rounding_mode),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
