// 🤝 Pattern Comparison - overlap between two birth dates
// Patterns are identified by rule name only

use crate::birth_data::BirthData;
use crate::detector::{BmadPattern, PatternEngine};
use crate::error::PatternResult;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternComparison {
    /// Names detected for both dates, in the first date's score order
    pub common_patterns: Vec<String>,

    #[serde(rename = "uniqueTo1")]
    pub unique_to_1: Vec<String>,

    #[serde(rename = "uniqueTo2")]
    pub unique_to_2: Vec<String>,

    /// Jaccard overlap of the two name sets, 0 - 100
    pub compatibility_score: u32,
}

impl PatternEngine {
    /// Compare the patterns of two birth dates
    pub fn compare_patterns(
        &self,
        first: &BirthData,
        second: &BirthData,
    ) -> PatternResult<PatternComparison> {
        let patterns_1 = self.detect_patterns(first)?;
        let patterns_2 = self.detect_patterns(second)?;
        Ok(compare_pattern_sets(&patterns_1, &patterns_2))
    }
}

/// Set comparison over already detected pattern lists
pub fn compare_pattern_sets(first: &[BmadPattern], second: &[BmadPattern]) -> PatternComparison {
    let names_1: HashSet<&str> = first.iter().map(|p| p.name.as_str()).collect();
    let names_2: HashSet<&str> = second.iter().map(|p| p.name.as_str()).collect();

    let common_patterns: Vec<String> = first
        .iter()
        .filter(|p| names_2.contains(p.name.as_str()))
        .map(|p| p.name.clone())
        .collect();

    let unique_to_1 = first
        .iter()
        .filter(|p| !names_2.contains(p.name.as_str()))
        .map(|p| p.name.clone())
        .collect();

    let unique_to_2 = second
        .iter()
        .filter(|p| !names_1.contains(p.name.as_str()))
        .map(|p| p.name.clone())
        .collect();

    let common = names_1.intersection(&names_2).count();
    let union = names_1.len() + names_2.len() - common;
    let compatibility_score = if union == 0 {
        0
    } else {
        (common as f64 / union as f64 * 100.0).round() as u32
    };

    PatternComparison {
        common_patterns,
        unique_to_1,
        unique_to_2,
        compatibility_score,
    }
}

// ============================================================================
// TESTS
// ============================================================================
