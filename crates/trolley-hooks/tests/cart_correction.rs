//! Extension point B end to end: fractional cart in, whole-unit cart out.

mod common;

use common::{cart_with_quantities, init_tracing};
use trolley_core::rounding::RoundingMode;
use trolley_core::types::Quantity;
use trolley_hooks::host::{CartHost, CartLine};
use trolley_hooks::{
    CartQuantityCorrector, HostError, RequestContext, Settings, WholeUnitExtension,
};

#[test]
fn every_line_is_whole_after_correction() {
    init_tracing();
    let (mut cart, _) = cart_with_quantities(&[2.5, 1.0, 0.25, 7.0]);
    let ext = WholeUnitExtension::new(Settings::default());

    ext.cart_corrector
        .before_totals(&mut cart, &RequestContext::storefront())
        .unwrap();

    for line in cart.lines() {
        assert!(line.quantity.is_whole(), "line {} not whole", line.key);
    }
}

#[test]
fn half_rounds_away_from_zero_by_default() {
    init_tracing();
    let (mut cart, keys) = cart_with_quantities(&[2.5]);
    let ext = WholeUnitExtension::default();

    let report = ext
        .cart_corrector
        .before_totals(&mut cart, &RequestContext::storefront())
        .unwrap();

    assert_eq!(report.len(), 1);
    assert_eq!(cart.quantity_of(&keys[0]), Some(Quantity::from_value(3.0)));
}

#[test]
fn whole_lines_see_no_update_calls() {
    init_tracing();
    let (mut cart, _) = cart_with_quantities(&[4.0, 1.0, 12.0]);
    let ext = WholeUnitExtension::default();

    let report = ext
        .cart_corrector
        .before_totals(&mut cart, &RequestContext::storefront())
        .unwrap();

    assert!(report.is_empty());
    assert_eq!(cart.write_count(), 0);
}

#[test]
fn running_twice_equals_running_once() {
    init_tracing();
    let (mut cart, _) = cart_with_quantities(&[2.5, 3.2, 6.0]);
    let ext = WholeUnitExtension::default();

    ext.cart_corrector
        .before_totals(&mut cart, &RequestContext::storefront())
        .unwrap();
    let state_after_first = cart.lines();
    let writes_after_first = cart.write_count();

    let second = ext
        .cart_corrector
        .before_totals(&mut cart, &RequestContext::storefront())
        .unwrap();

    assert!(second.is_empty());
    assert_eq!(cart.lines(), state_after_first);
    assert_eq!(cart.write_count(), writes_after_first);
}

#[test]
fn floor_and_ceiling_modes_swap_without_touching_other_lines() {
    init_tracing();

    let settings = Settings::from_json(r#"{"rounding_mode":"floor"}"#).unwrap();
    let (mut cart, keys) = cart_with_quantities(&[2.5, 4.0]);
    WholeUnitExtension::new(settings)
        .cart_corrector
        .before_totals(&mut cart, &RequestContext::storefront())
        .unwrap();
    assert_eq!(cart.quantity_of(&keys[0]), Some(Quantity::from_value(2.0)));
    assert_eq!(cart.quantity_of(&keys[1]), Some(Quantity::from_value(4.0)));

    let settings = Settings::from_json(r#"{"rounding_mode":"ceiling"}"#).unwrap();
    let (mut cart, keys) = cart_with_quantities(&[2.2, 4.0]);
    WholeUnitExtension::new(settings)
        .cart_corrector
        .before_totals(&mut cart, &RequestContext::storefront())
        .unwrap();
    assert_eq!(cart.quantity_of(&keys[0]), Some(Quantity::from_value(3.0)));
    assert_eq!(cart.quantity_of(&keys[1]), Some(Quantity::from_value(4.0)));
}

#[test]
fn plain_admin_page_load_never_mutates_the_cart() {
    init_tracing();
    let (mut cart, keys) = cart_with_quantities(&[2.5]);
    let ext = WholeUnitExtension::default();

    let report = ext
        .cart_corrector
        .before_totals(&mut cart, &RequestContext::admin_screen())
        .unwrap();

    assert!(report.is_empty());
    assert_eq!(cart.write_count(), 0);
    assert_eq!(cart.quantity_of(&keys[0]), Some(Quantity::from_value(2.5)));
}

#[test]
fn admin_background_recalculation_still_corrects() {
    init_tracing();
    let (mut cart, keys) = cart_with_quantities(&[2.5]);
    let ext = WholeUnitExtension::default();

    let report = ext
        .cart_corrector
        .before_totals(&mut cart, &RequestContext::admin_background())
        .unwrap();

    assert_eq!(report.len(), 1);
    assert_eq!(cart.quantity_of(&keys[0]), Some(Quantity::from_value(3.0)));
}

/// A host whose update mechanism always refuses, for error propagation.
struct LockedCart {
    line: CartLine,
}

impl CartHost for LockedCart {
    fn lines(&self) -> Vec<CartLine> {
        vec![self.line.clone()]
    }

    fn set_line_quantity(&mut self, key: &str, _quantity: Quantity) -> Result<(), HostError> {
        Err(HostError::UpdateRejected {
            key: key.to_string(),
            reason: "cart is locked".to_string(),
        })
    }
}

#[test]
fn host_update_failures_propagate_untouched() {
    init_tracing();
    let mut cart = LockedCart {
        line: CartLine::new("k1", "p1", Quantity::from_value(2.5)),
    };
    let corrector = CartQuantityCorrector::new(RoundingMode::HalfAwayFromZero);

    let err = corrector
        .before_totals(&mut cart, &RequestContext::storefront())
        .unwrap_err();
    assert!(matches!(err, HostError::UpdateRejected { .. }));
}
