//! 점수 구간화 회귀 테스트.
use lca_impact_calculator::lca::score::{
    bucketize, check_bands, ScoreBand, ACIDIFICATION_BANDS, CO2_BANDS, ENERGY_BANDS,
    ENERGY_SUGGESTION_BANDS, WATER_BANDS,
};

#[test]
fn threshold_is_inclusive_upper_bound() {
    assert_eq!(bucketize(10.0, CO2_BANDS), 1);
    assert_eq!(bucketize(10.0001, CO2_BANDS), 3);
    assert_eq!(bucketize(25.0, CO2_BANDS), 3);
    assert_eq!(bucketize(500.0, CO2_BANDS), 9);
}

#[test]
fn values_above_last_threshold_score_ten() {
    assert_eq!(bucketize(500.01, CO2_BANDS), 10);
    assert_eq!(bucketize(200.5, WATER_BANDS), 10);
    assert_eq!(bucketize(1.5, ACIDIFICATION_BANDS), 10);
    assert_eq!(bucketize(f64::INFINITY, ENERGY_BANDS), 10);
}

#[test]
fn zero_and_negative_map_to_lowest_band() {
    for bands in [CO2_BANDS, WATER_BANDS, ENERGY_BANDS, ACIDIFICATION_BANDS] {
        assert_eq!(bucketize(0.0, bands), bands[0].score);
        assert_eq!(bucketize(-5.0, bands), bands[0].score);
    }
}

#[test]
fn nan_matches_no_band() {
    assert_eq!(bucketize(f64::NAN, CO2_BANDS), 10);
}

#[test]
fn bucketize_is_monotonic() {
    for bands in [
        CO2_BANDS,
        WATER_BANDS,
        ENERGY_BANDS,
        ACIDIFICATION_BANDS,
        ENERGY_SUGGESTION_BANDS,
    ] {
        let mut prev = 0;
        let mut v = 0.0;
        while v < 6000.0 {
            let s = bucketize(v, bands);
            assert!(s >= prev, "score dropped at {v}: {prev} -> {s}");
            assert!((1..=10).contains(&s));
            prev = s;
            v += 0.37;
        }
    }
}

#[test]
fn energy_suggestion_band_values() {
    assert_eq!(bucketize(2.0, ENERGY_SUGGESTION_BANDS), 1);
    assert_eq!(bucketize(5.0, ENERGY_SUGGESTION_BANDS), 3);
    assert_eq!(bucketize(5.01, ENERGY_SUGGESTION_BANDS), 5);
    assert_eq!(bucketize(20.0, ENERGY_SUGGESTION_BANDS), 7);
    assert_eq!(bucketize(49.03, ENERGY_SUGGESTION_BANDS), 9);
    assert_eq!(bucketize(50.5, ENERGY_SUGGESTION_BANDS), 10);
}

#[test]
fn caller_supplied_bands_are_used_as_is() {
    let bands = [ScoreBand::new(1.0, 2), ScoreBand::new(3.0, 8)];
    assert_eq!(bucketize(0.5, &bands), 2);
    assert_eq!(bucketize(2.0, &bands), 8);
    assert_eq!(bucketize(3.5, &bands), 10);
}

#[test]
fn check_bands_rejects_broken_tables() {
    assert!(check_bands(CO2_BANDS).is_ok());
    assert!(check_bands(&[]).is_err());
    assert!(check_bands(&[ScoreBand::new(5.0, 1), ScoreBand::new(5.0, 3)]).is_err());
    assert!(check_bands(&[ScoreBand::new(5.0, 1), ScoreBand::new(2.0, 3)]).is_err());
    assert!(check_bands(&[ScoreBand::new(-1.0, 1)]).is_err());
    assert!(check_bands(&[ScoreBand::new(1.0, 10)]).is_err());
    assert!(check_bands(&[ScoreBand::new(1.0, 0)]).is_err());
}
