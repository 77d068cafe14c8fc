//! End-to-end checks of the public API through the shared default engine

use bmad_patterns::{
    analyze, compare_patterns, default_engine, detect_patterns, get_high_confidence_patterns,
    BirthData, PatternCategory, PatternEngine,
};
use pretty_assertions::assert_eq;
use std::thread;

#[test]
fn test_master_number_day_detected() {
    let patterns = detect_patterns(&BirthData::new(1990, 8, 11)).unwrap();
    let master = patterns
        .iter()
        .find(|p| p.name == "Master Number Day")
        .expect("master number day should be detected");
    assert_eq!(master.category, PatternCategory::MasterNumber);
    assert!(master.score > 80);
}

#[test]
fn test_repeated_digit_day_detected() {
    let patterns = detect_patterns(&BirthData::new(1990, 8, 22)).unwrap();
    assert!(patterns
        .iter()
        .any(|p| p.name == "Repeated Digit Day" && p.category == PatternCategory::Repetitive));
}

#[test]
fn test_matching_day_and_month_summary() {
    let birth = BirthData::new(1990, 7, 7);
    let patterns = detect_patterns(&birth).unwrap();
    assert!(patterns
        .iter()
        .any(|p| p.name == "Matching Day and Month" && p.category == PatternCategory::Harmonic));

    let result = analyze(&birth).unwrap();
    assert!(result.summary.contains("7/7/1990"));
}

#[test]
fn test_validation_messages() {
    let err = detect_patterns(&BirthData::new(1800, 8, 15)).unwrap_err();
    assert!(err.to_string().contains("Invalid year"));

    let err = detect_patterns(&BirthData::new(1990, 2, 30)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid day: 30 exceeds days in month 2 (28 days)"
    );

    assert!(detect_patterns(&BirthData::new(2000, 2, 29)).is_ok());
    assert!(analyze(&BirthData::new(1990, 1, 1).with_time(24, 0)).is_err());
}

#[test]
fn test_high_confidence_subset() {
    let birth = BirthData::new(1990, 8, 11);
    let all = detect_patterns(&birth).unwrap();
    let high = get_high_confidence_patterns(&birth, 0.9).unwrap();

    assert!(high.len() <= all.len());
    for p in &high {
        assert!(p.confidence >= 0.9);
        assert!(all.iter().any(|q| q.name == p.name));
    }
}

#[test]
fn test_compare_self_and_disjoint() {
    let birth = BirthData::new(1990, 7, 7);
    let same = compare_patterns(&birth, &birth).unwrap();
    assert_eq!(same.compatibility_score, 100);
    assert!(same.unique_to_1.is_empty());
    assert!(same.unique_to_2.is_empty());

    let disjoint = compare_patterns(&BirthData::new(1990, 8, 11), &BirthData::new(1990, 10, 9)).unwrap();
    assert_eq!(disjoint.compatibility_score, 0);
}

#[test]
fn test_concurrent_callers_share_engine() {
    let dates = [
        BirthData::new(1990, 8, 11),
        BirthData::new(1990, 7, 7),
        BirthData::new(1993, 4, 8),
        BirthData::new(2000, 2, 29),
    ];
    let expected: Vec<Vec<u32>> = dates
        .iter()
        .map(|d| detect_patterns(d).unwrap().iter().map(|p| p.score).collect())
        .collect();

    thread::scope(|s| {
        let handles: Vec<_> = dates
            .iter()
            .map(|d| s.spawn(move || default_engine().detect_patterns(d).unwrap()))
            .collect();

        for (handle, scores) in handles.into_iter().zip(&expected) {
            let patterns = handle.join().unwrap();
            let got: Vec<u32> = patterns.iter().map(|p| p.score).collect();
            assert_eq!(&got, scores);
        }
    });
}

#[test]
fn test_engine_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PatternEngine>();
}
