//! # Request Context
//!
//! The two host lifecycle flags the corrector's guard depends on, carried
//! as an explicit value instead of ambient global lookups so the guard is
//! testable in isolation.
//!
//! ## The Guard
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │              When Does the Corrector Run?                               │
//! │                                                                         │
//! │  Request                       admin?  background?   corrector runs?    │
//! │  ─────────────────────────     ──────  ───────────   ───────────────    │
//! │  Storefront page / checkout      no        -              YES           │
//! │  Storefront background call      no       yes             YES           │
//! │  Admin page load                yes        no             NO            │
//! │  Admin background recalculate   yes       yes             YES           │
//! │                                                                         │
//! │  A plain admin page load must never mutate cart state as a side        │
//! │  effect of unrelated admin actions. Admin background requests that     │
//! │  legitimately recompute totals (order-edit screens recalculating       │
//! │  line items) still get the correction.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

// =============================================================================
// Request Context
// =============================================================================

/// Host request flags, captured at hook invocation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    /// The request is being handled in the host's administrative context.
    admin: bool,

    /// The request is an asynchronous background call (the host's in-page
    /// update mechanism), not a full page load.
    background: bool,
}

impl RequestContext {
    /// Builds a context from the host's raw flags.
    #[inline]
    pub const fn new(admin: bool, background: bool) -> Self {
        RequestContext { admin, background }
    }

    /// A storefront page load or checkout request.
    #[inline]
    pub const fn storefront() -> Self {
        RequestContext::new(false, false)
    }

    /// A plain administrative page load.
    #[inline]
    pub const fn admin_screen() -> Self {
        RequestContext::new(true, false)
    }

    /// An asynchronous background request inside the administrative
    /// context, e.g. an order-edit screen recalculating line items.
    #[inline]
    pub const fn admin_background() -> Self {
        RequestContext::new(true, true)
    }

    /// Whether the request runs in the administrative context.
    #[inline]
    pub const fn is_admin(&self) -> bool {
        self.admin
    }

    /// Whether the request is an asynchronous background call.
    #[inline]
    pub const fn is_background(&self) -> bool {
        self.background
    }

    /// The corrector's guard: cart correction is suppressed during a plain
    /// administrative page load, and only then.
    ///
    /// This is the one behaviorally significant conditional in the whole
    /// extension, kept in a single predicate: a host whose totals
    /// recomputation lifecycle differs from the documented one overrides
    /// this decision in one place.
    #[inline]
    pub const fn suppresses_cart_correction(&self) -> bool {
        self.admin && !self.background
    }
}

impl Default for RequestContext {
    /// Defaults to a storefront request, the common case.
    fn default() -> Self {
        RequestContext::storefront()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
