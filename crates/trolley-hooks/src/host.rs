//! # Host Seams
//!
//! The narrow interfaces through which Trolley reaches host-owned state.
//!
//! ## Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Who Owns What                                        │
//! │                                                                         │
//! │  Host platform                         Trolley                          │
//! │  ─────────────                         ───────                          │
//! │  product catalog  ──ProductView──►     reads the purchase cap           │
//! │  cart storage     ──CartHost─────►     reads lines, rewrites quantity   │
//! │  request lifecycle ──RequestContext──► reads two flags                  │
//! │                                                                         │
//! │  Trolley owns NOTHING here. Both data structures are created and        │
//! │  destroyed by the host; access is scoped to a single callback           │
//! │  invocation.                                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Traits instead of concrete host types so tests (and hosts themselves)
//! substitute doubles - see [`crate::memory`] for the shipped ones.

use serde::{Deserialize, Serialize};

use trolley_core::types::Quantity;

use crate::error::HostError;

// =============================================================================
// Product View
// =============================================================================

/// Read access to the one piece of product configuration Trolley needs.
pub trait ProductView {
    /// The host's identifier for this product.
    fn id(&self) -> &str;

    /// The per-product maximum purchase quantity, if one is configured.
    ///
    /// `None` is the "no limit" case. Implementations may also return a
    /// malformed value here; the policy normalizes it rather than erroring.
    fn max_purchase_quantity(&self) -> Option<Quantity>;
}

// =============================================================================
// Cart Host
// =============================================================================

/// Read/update access to the host's cart, scoped to one callback invocation.
pub trait CartHost {
    /// A snapshot of the current cart lines.
    ///
    /// Returned by value so the corrector can iterate while issuing
    /// updates through the same borrow.
    fn lines(&self) -> Vec<CartLine>;

    /// The host's update mechanism for a single line's quantity.
    ///
    /// ## Errors
    /// Fails the way the host fails - typically [`HostError::LineNotFound`]
    /// for a stale key. The corrector propagates this untouched; recovery
    /// is the host's responsibility.
    fn set_line_quantity(&mut self, key: &str, quantity: Quantity) -> Result<(), HostError>;
}

// =============================================================================
// Cart Line
// =============================================================================

/// Read snapshot of one cart entry.
///
/// ## Identity
/// Lines are identified by `key`, not `product_id`: a host cart may carry
/// several lines for one product (distinct variations, distinct add-time
/// options), and the key is what its update mechanism addresses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Host-owned unique line key.
    pub key: String,

    /// Product this line refers to.
    pub product_id: String,

    /// Quantity currently stored for the line.
    pub quantity: Quantity,
}

impl CartLine {
    /// Creates a line snapshot.
    pub fn new(key: impl Into<String>, product_id: impl Into<String>, quantity: Quantity) -> Self {
        CartLine {
            key: key.into(),
            product_id: product_id.into(),
            quantity,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
