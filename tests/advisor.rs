use lca_impact_calculator::lca::{SuggestionAdvisor, SuggestionPolicy, DEFAULT_CAVEAT};

#[test]
fn energy_score_uses_suggestion_bands() {
    let policy = SuggestionPolicy::default();
    let advisor = SuggestionAdvisor::new(&policy);
    assert_eq!(advisor.energy_score(0.0), 1);
    assert_eq!(advisor.energy_score(5.0), 3);
    assert_eq!(advisor.energy_score(10.0), 5);
    assert_eq!(advisor.energy_score(102.12), 10);
}

#[test]
fn below_threshold_gets_nothing() {
    let policy = SuggestionPolicy::default();
    let advisor = SuggestionAdvisor::new(&policy);
    assert!(advisor.advise("coal", 5.0).is_none());
    assert!(advisor.advise("coal", 5.0001).is_some());
}

#[test]
fn mapped_sources_use_their_alternatives() {
    let policy = SuggestionPolicy::default();
    let advisor = SuggestionAdvisor::new(&policy);
    let cases = [
        ("coal", vec!["solar", "wind", "hydropower"]),
        ("natural_gas", vec!["biogas", "solar thermal"]),
        ("grid_electricity", vec!["solar PV", "wind"]),
        ("diesel", vec!["biodiesel", "electric"]),
    ];
    for (energy, expected) in cases {
        let s = advisor.advise(energy, 30.0).expect(energy);
        assert_eq!(s.alternatives, expected, "{energy}");
        assert_eq!(s.energy_score, 9);
        assert_eq!(s.caveat, DEFAULT_CAVEAT);
    }
}

#[test]
fn unmapped_source_falls_back_to_default_list() {
    let policy = SuggestionPolicy::default();
    let advisor = SuggestionAdvisor::new(&policy);
    let s = advisor.advise("peat", 80.0).expect("suggestion");
    assert_eq!(s.alternatives, vec!["solar", "wind", "geothermal"]);
    assert_eq!(s.energy_type, "peat");
}

#[test]
fn clean_sources_are_matched_without_case() {
    let policy = SuggestionPolicy::default();
    let advisor = SuggestionAdvisor::new(&policy);
    assert!(advisor.is_clean_source("Solar"));
    assert!(advisor.is_clean_source("WIND"));
    assert!(!advisor.is_clean_source("coal"));
    assert!(advisor.advise("Renewables", 400.0).is_none());
}

#[test]
fn custom_policy_changes_threshold_and_caveat() {
    let policy = SuggestionPolicy {
        min_energy_score: 9,
        caveat: "Check local supply first.".into(),
        ..SuggestionPolicy::default()
    };
    let advisor = SuggestionAdvisor::new(&policy);
    assert!(advisor.advise("coal", 15.0).is_none());
    let s = advisor.advise("coal", 45.0).expect("suggestion");
    assert_eq!(s.caveat, "Check local supply first.");
}
