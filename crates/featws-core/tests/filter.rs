//! Tests for the filter engine.

use chrono::{TimeZone, Utc};
use featws_core::filter;
use featws_model::{FilterCriteria, Rule, RuleId, RuleStatus};

const AUTHOR: &str = "C1313233 Rhuan Queiroz";

fn make_rule(id: &str, author: &str, status: RuleStatus) -> Rule {
    Rule {
        id: RuleId::new(id).expect("rule id"),
        title: "Alteração no Bundle".to_string(),
        date: Utc.with_ymd_and_hms(2022, 2, 2, 10, 55, 30).unwrap(),
        author: author.to_string(),
        status,
    }
}

/// The eleven-rule fixture collection from the deferral view.
fn fixture_rules() -> Vec<Rule> {
    (1..=11)
        .map(|n| make_rule(&n.to_string(), AUTHOR, RuleStatus::AwaitingDeferral))
        .collect()
}

fn ids(rules: &[Rule]) -> Vec<&str> {
    rules.iter().map(|rule| rule.id.as_str()).collect()
}

#[test]
fn empty_criteria_yield_full_collection_in_order() {
    let rules = fixture_rules();
    let out = filter::apply(&rules, &FilterCriteria::default());
    assert_eq!(out, rules);
    assert!(!filter::is_active(&FilterCriteria::default()));
}

#[test]
fn code_criterion_selects_exactly_one_rule() {
    let rules = fixture_rules();
    let criteria = FilterCriteria {
        code: "1".to_string(),
        ..FilterCriteria::default()
    };
    let out = filter::apply(&rules, &criteria);
    assert_eq!(ids(&out), vec!["1"]);
    assert!(filter::is_active(&criteria));
}

#[test]
fn author_criterion_keeps_all_matching_rules() {
    let rules = fixture_rules();
    let criteria = FilterCriteria {
        author: AUTHOR.to_string(),
        ..FilterCriteria::default()
    };
    let out = filter::apply(&rules, &criteria);
    assert_eq!(out.len(), 11);
}

#[test]
fn unmatched_code_yields_empty_with_filtering_active() {
    let rules = fixture_rules();
    let criteria = FilterCriteria {
        code: "999".to_string(),
        ..FilterCriteria::default()
    };
    let out = filter::apply(&rules, &criteria);
    assert!(out.is_empty());
    assert!(filter::is_active(&criteria));
}

#[test]
fn criteria_are_a_conjunction_over_populated_fields() {
    let rules = vec![
        make_rule("1", AUTHOR, RuleStatus::Deferred),
        make_rule("2", AUTHOR, RuleStatus::AwaitingDeferral),
        make_rule("3", "F0000001 Outra Autora", RuleStatus::Deferred),
        make_rule("4", AUTHOR, RuleStatus::Deferred),
    ];
    let criteria = FilterCriteria {
        author: AUTHOR.to_string(),
        status: "Deferida".to_string(),
        ..FilterCriteria::default()
    };
    let out = filter::apply(&rules, &criteria);
    assert_eq!(ids(&out), vec!["1", "4"]);
}

#[test]
fn output_is_an_order_preserving_subsequence() {
    let rules = vec![
        make_rule("5", AUTHOR, RuleStatus::Draft),
        make_rule("2", AUTHOR, RuleStatus::Deferred),
        make_rule("9", AUTHOR, RuleStatus::Draft),
        make_rule("1", AUTHOR, RuleStatus::Deferred),
    ];
    let criteria = FilterCriteria {
        status: "Rascunho".to_string(),
        ..FilterCriteria::default()
    };
    let out = filter::apply(&rules, &criteria);
    assert_eq!(ids(&out), vec!["5", "9"]);
    // Every rule in the output satisfies the criteria exactly once.
    for rule in &out {
        assert_eq!(rule.status, RuleStatus::Draft);
    }
}

#[test]
fn refiltering_derives_from_the_baseline_not_the_previous_result() {
    let rules = fixture_rules();
    let first = FilterCriteria {
        code: "1".to_string(),
        ..FilterCriteria::default()
    };
    let second = FilterCriteria {
        code: "2".to_string(),
        ..FilterCriteria::default()
    };
    let narrowed = filter::apply(&rules, &first);
    // Chaining the second criteria onto the first result loses the row.
    assert!(filter::apply(&narrowed, &second).is_empty());
    // Deriving from the baseline finds it.
    assert_eq!(ids(&filter::apply(&rules, &second)), vec!["2"]);
}

#[test]
fn unrecognized_status_value_matches_nothing() {
    let rules = fixture_rules();
    let criteria = FilterCriteria {
        status: "Indeferida".to_string(),
        ..FilterCriteria::default()
    };
    assert!(filter::apply(&rules, &criteria).is_empty());
}

#[test]
fn empty_field_is_no_constraint_not_empty_match() {
    let mut rule = make_rule("1", AUTHOR, RuleStatus::Deferred);
    rule.author = String::new();
    let rules = vec![rule, make_rule("2", AUTHOR, RuleStatus::Deferred)];
    let out = filter::apply(&rules, &FilterCriteria::default());
    assert_eq!(out.len(), 2);
}

#[test]
fn dropdown_options_are_unique_in_first_appearance_order() {
    let rules = vec![
        make_rule("3", "B", RuleStatus::Draft),
        make_rule("1", "A", RuleStatus::Draft),
        make_rule("3", "B", RuleStatus::Draft),
        make_rule("2", "A", RuleStatus::Draft),
    ];
    assert_eq!(filter::code_options(&rules), vec!["3", "1", "2"]);
    assert_eq!(filter::author_options(&rules), vec!["B", "A"]);
}
