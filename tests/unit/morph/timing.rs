use super::*;

#[test]
fn defaults_match_documented_cadence() {
    let t = MorphTiming::default();
    assert_eq!(t.retarget_interval_ms, 2000.0);
    assert_eq!(t.duration_ms, 1000.0);
    assert_eq!(t.ease, Ease::Linear);
    t.validate().unwrap();
}

#[test]
fn non_positive_or_non_finite_values_are_rejected() {
    for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let t = MorphTiming {
            duration_ms: bad,
            ..MorphTiming::default()
        };
        assert!(t.validate().is_err(), "duration {bad} accepted");

        let t = MorphTiming {
            retarget_interval_ms: bad,
            ..MorphTiming::default()
        };
        assert!(t.validate().is_err(), "interval {bad} accepted");
    }
}

#[test]
fn ease_parses_from_kebab_case() {
    let t: MorphTiming = serde_json::from_str(r#"{ "ease": "smoothstep" }"#).unwrap();
    assert_eq!(t.ease, Ease::Smoothstep);
    assert_eq!(t.duration_ms, 1000.0);
}
