// 🧮 Pattern Analysis - aggregate score, dominant categories, summary text

use crate::birth_data::BirthData;
use crate::detector::{BmadPattern, PatternEngine};
use crate::error::PatternResult;
use crate::rules::PatternCategory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Score at which a single pattern is considered exceptional
pub const EXCEPTIONAL_SCORE: u32 = 80;

// ============================================================================
// ANALYSIS RESULT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternAnalysisResult {
    pub birth_data: BirthData,

    /// Score-descending
    pub patterns: Vec<BmadPattern>,

    /// Rounded mean of pattern scores, 0 when nothing was detected
    pub total_score: u32,

    pub dominant_categories: Vec<PatternCategory>,
    pub summary: String,

    /// Wall clock at analysis time; differs between otherwise equal results
    pub timestamp: DateTime<Utc>,
}

impl PatternAnalysisResult {
    /// Highest scoring pattern, if any
    pub fn top_pattern(&self) -> Option<&BmadPattern> {
        self.patterns.first()
    }

    pub fn is_exceptional(&self) -> bool {
        self.patterns.iter().any(|p| p.score >= EXCEPTIONAL_SCORE)
    }
}

// ============================================================================
// AGGREGATION
// ============================================================================

impl PatternEngine {
    /// Full analysis of a birth date
    pub fn analyze(&self, birth: &BirthData) -> PatternResult<PatternAnalysisResult> {
        let patterns = self.detect_patterns(birth)?;
        let total_score = total_score(&patterns);
        let dominant_categories =
            dominant_categories(&patterns, self.config().dominant_category_limit);
        let summary = generate_summary(birth, &patterns, total_score, &dominant_categories);

        tracing::debug!(
            birth = %birth,
            patterns = patterns.len(),
            total_score,
            "analysis complete"
        );

        Ok(PatternAnalysisResult {
            birth_data: *birth,
            patterns,
            total_score,
            dominant_categories,
            summary,
            timestamp: Utc::now(),
        })
    }
}

/// Rounded mean of the pattern scores
pub fn total_score(patterns: &[BmadPattern]) -> u32 {
    if patterns.is_empty() {
        return 0;
    }
    let sum: u32 = patterns.iter().map(|p| p.score).sum();
    (sum as f64 / patterns.len() as f64).round() as u32
}

/// Categories ranked by summed score, at most `limit` of them.
///
/// `patterns` is expected score-descending; equal sums keep the order in
/// which categories were first seen.
pub fn dominant_categories(patterns: &[BmadPattern], limit: usize) -> Vec<PatternCategory> {
    let mut totals: Vec<(PatternCategory, u32)> = Vec::new();
    for pattern in patterns {
        match totals.iter_mut().find(|(c, _)| *c == pattern.category) {
            Some((_, sum)) => *sum += pattern.score,
            None => totals.push((pattern.category, pattern.score)),
        }
    }

    totals.sort_by(|a, b| b.1.cmp(&a.1));
    totals.into_iter().take(limit).map(|(c, _)| c).collect()
}

/// Narrative summary. Always mentions the date as `m/d/yyyy`.
pub fn generate_summary(
    birth: &BirthData,
    patterns: &[BmadPattern],
    total_score: u32,
    dominant: &[PatternCategory],
) -> String {
    let Some(top) = patterns.first() else {
        return format!(
            "The birth date {} shows standard numerological patterns with no exceptional configurations.",
            birth
        );
    };

    let categories = dominant
        .iter()
        .map(|c| c.display_name())
        .collect::<Vec<_>>()
        .join(", ");

    let first_clause = top
        .interpretation
        .split('.')
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase();

    let noun = if patterns.len() == 1 { "pattern" } else { "patterns" };

    format!(
        "The birth date {} reveals {} significant {} with an overall score of {}. \
         The dominant energies are {}. The strongest pattern is {} (score: {}), \
         which points to {}.",
        birth,
        patterns.len(),
        noun,
        total_score,
        categories,
        top.name,
        top.score,
        first_clause
    )
}

// ============================================================================
// TESTS
// ============================================================================
