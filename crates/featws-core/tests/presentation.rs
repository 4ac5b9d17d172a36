//! Tests for the presentation mapper.

use featws_core::presentation::{StatusIndicator, indicator_for_label};
use featws_model::RuleStatus;

#[test]
fn every_status_maps_to_a_defined_indicator() {
    assert_eq!(
        StatusIndicator::from(RuleStatus::Deferred),
        StatusIndicator::Success
    );
    assert_eq!(
        StatusIndicator::from(RuleStatus::AwaitingDeferral),
        StatusIndicator::Info
    );
    assert_eq!(
        StatusIndicator::from(RuleStatus::Draft),
        StatusIndicator::Attention
    );
}

#[test]
fn deferred_label_maps_to_the_success_color() {
    let indicator = indicator_for_label("Deferida");
    assert_eq!(indicator, StatusIndicator::Success);
    assert_eq!(indicator.hex(), "#16C559");
}

#[test]
fn unrecognized_label_gets_the_fallback_indicator() {
    let indicator = indicator_for_label("Em análise");
    assert_eq!(indicator, StatusIndicator::Unknown);
    // Defined color, never an absent one.
    assert!(!indicator.hex().is_empty());
}

#[test]
fn all_indicators_carry_a_hex_color() {
    for status in RuleStatus::all() {
        let hex = StatusIndicator::from(status).hex();
        assert!(hex.starts_with('#') && hex.len() == 7, "hex: {hex}");
    }
}
