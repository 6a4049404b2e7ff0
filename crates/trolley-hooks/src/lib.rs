//! # trolley-hooks: Host Extension Points for Trolley
//!
//! Everything the host platform touches lives here: the collaborator
//! traits, the request context, the two hook callbacks, plugin settings,
//! and an in-memory host double.
//!
//! ## The Two Extension Points
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Hook Invocation Lifecycle                           │
//! │                                                                         │
//! │  Render time                                                            │
//! │  ───────────                                                            │
//! │  host builds default args ──► QuantityInputFilter::filter_args()       │
//! │                                      │                                  │
//! │                                      ▼                                  │
//! │             <input type="number" step=1 min=1 max=cap>                  │
//! │                                                                         │
//! │  Totals time                                                            │
//! │  ───────────                                                            │
//! │  host about to total cart ──► CartQuantityCorrector::before_totals()   │
//! │                                      │                                  │
//! │              ┌───────────────────────┼───────────────────────┐          │
//! │              ▼                       ▼                       ▼          │
//! │     plain admin page load    fractional line            whole line      │
//! │     (skip entirely)          (rewrite via host)         (no write)      │
//! │                                      │                                  │
//! │                                      ▼                                  │
//! │                     host computes subtotal / tax / total                │
//! │                     over whole quantities only                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`host`] - Injected seams to host-owned state ([`ProductView`], [`CartHost`])
//! - [`context`] - Explicit request flags driving the corrector's guard
//! - [`filter`] - Extension point A: quantity-input arguments
//! - [`corrector`] - Extension point B: pre-totals quantity correction
//! - [`settings`] - serde-backed plugin configuration
//! - [`extension`] - The loaded-as-one-unit bundle of both hooks
//! - [`memory`] - In-memory host, for tests and embedding
//! - [`error`] - Failures the host's update mechanism reports

// =============================================================================
// Module Declarations
// =============================================================================

pub mod context;
pub mod corrector;
pub mod error;
pub mod extension;
pub mod filter;
pub mod host;
pub mod memory;
pub mod settings;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use context::RequestContext;
pub use corrector::{CartQuantityCorrector, Correction, CorrectionReport};
pub use error::{HostError, SettingsError};
pub use extension::WholeUnitExtension;
pub use filter::QuantityInputFilter;
pub use host::{CartHost, CartLine, ProductView};
pub use settings::Settings;
