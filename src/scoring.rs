// 📊 Scorer - confidence heuristic and 0-100 pattern score

use crate::birth_data::BirthData;

pub const BASE_CONFIDENCE: f64 = 0.85;
pub const MASTER_CONFIDENCE: f64 = 0.95;
pub const SEQUENTIAL_CONFIDENCE: f64 = 0.90;
pub const HARMONIC_CONFIDENCE: f64 = 0.88;

/// Confidence for a matched rule.
///
/// Keyed on substrings of the rule *name*, not its category: "Numerical
/// Balance" is HARMONIC but gets the base confidence. The birth date does
/// not currently influence the result.
pub fn calculate_confidence(_birth: &BirthData, rule_name: &str) -> f64 {
    if rule_name.contains("Master") {
        MASTER_CONFIDENCE
    } else if rule_name.contains("Sequential") {
        SEQUENTIAL_CONFIDENCE
    } else if rule_name.contains("Harmonic") {
        HARMONIC_CONFIDENCE
    } else {
        BASE_CONFIDENCE
    }
}

/// `round(weight * confidence * 100)`, clamped to 0..=100
pub fn calculate_score(weight: f64, confidence: f64) -> u32 {
    (weight * confidence * 100.0).round().clamp(0.0, 100.0) as u32
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_by_rule_name() {
        let birth = BirthData::new(1990, 8, 11);
        assert_eq!(calculate_confidence(&birth, "Master Number Day"), 0.95);
        assert_eq!(calculate_confidence(&birth, "Master Year Energy"), 0.95);
        assert_eq!(calculate_confidence(&birth, "Sequential Pattern"), 0.90);
        assert_eq!(calculate_confidence(&birth, "Prime Number Day"), 0.85);
    }

    #[test]
    fn test_confidence_ignores_category() {
        let birth = BirthData::new(1990, 5, 8);
        // HARMONIC rules whose names lack the substring stay at the base value
        assert_eq!(calculate_confidence(&birth, "Numerical Balance"), BASE_CONFIDENCE);
        assert_eq!(calculate_confidence(&birth, "Matching Day and Month"), BASE_CONFIDENCE);
        assert_eq!(calculate_confidence(&birth, "Life Path Harmony"), BASE_CONFIDENCE);
        assert_eq!(calculate_confidence(&birth, "Harmonic Test"), HARMONIC_CONFIDENCE);
    }

    #[test]
    fn test_confidence_independent_of_birth_data() {
        let a = calculate_confidence(&BirthData::new(1900, 1, 1), "Master Number Day");
        let b = calculate_confidence(&BirthData::new(2100, 12, 31), "Master Number Day");
        assert_eq!(a, b);
    }

    #[test]
    fn test_score() {
        assert_eq!(calculate_score(0.95, 0.95), 90);
        assert_eq!(calculate_score(0.80, 0.85), 68);
        assert_eq!(calculate_score(0.80, 0.95), 76);
        assert_eq!(calculate_score(1.0, 1.0), 100);
        assert_eq!(calculate_score(0.0, 0.85), 0);
    }
}
