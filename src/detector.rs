// 🔍 Pattern Detector - evaluates the rule catalog against a birth date
// Validation errors are fatal; a failing rule is logged and skipped

use crate::birth_data::{validate, BirthData};
use crate::config::EngineConfig;
use crate::error::{PatternError, PatternResult};
use crate::rules::{catalog, PatternCategory, PatternElement, PatternRule};
use crate::scoring::{calculate_confidence, calculate_score};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use uuid::Uuid;

// ============================================================================
// DETECTED PATTERN
// ============================================================================

/// A pattern produced when one rule's condition holds for a birth date.
///
/// `id` is a display identifier, freshly generated on every detection; two
/// runs over the same date yield equal patterns with different ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BmadPattern {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub category: PatternCategory,

    /// 0 - 100
    pub score: u32,

    /// Copied from the rule (0.0 - 1.0)
    pub weight: f64,

    /// 0.0 - 1.0
    pub confidence: f64,

    pub elements: Vec<PatternElement>,
    pub interpretation: String,
}

/// Catalog entry as exposed to callers listing the available rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleSummary {
    pub name: String,
    pub category: PatternCategory,
    pub weight: f64,
    pub confidence: f64,
    pub max_score: u32,
}

// ============================================================================
// PATTERN ENGINE
// ============================================================================

/// Holds a frozen rule catalog and configuration. Every operation only reads
/// from the engine, so one instance can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct PatternEngine {
    rules: Vec<PatternRule>,
    config: EngineConfig,
}

impl PatternEngine {
    /// Engine over the built-in catalog with default configuration
    pub fn new() -> Self {
        PatternEngine::from_rules(catalog())
    }

    /// Engine over a custom rule list, evaluated in the given order
    pub fn from_rules(rules: Vec<PatternRule>) -> Self {
        PatternEngine {
            rules,
            config: EngineConfig::default(),
        }
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Describe the catalog. Confidence is computed against a neutral date,
    /// which is fine because the heuristic only looks at the rule name.
    pub fn rules(&self) -> Vec<RuleSummary> {
        let neutral = BirthData::new(2000, 1, 1);
        self.rules
            .iter()
            .map(|rule| {
                let confidence = calculate_confidence(&neutral, rule.name);
                RuleSummary {
                    name: rule.name.to_string(),
                    category: rule.category,
                    weight: rule.weight,
                    confidence,
                    max_score: calculate_score(rule.weight, confidence),
                }
            })
            .collect()
    }

    /// Detect every pattern present in `birth`, highest score first.
    ///
    /// Ties keep catalog order. Returns an empty list when nothing matches.
    pub fn detect_patterns(&self, birth: &BirthData) -> PatternResult<Vec<BmadPattern>> {
        validate(birth)?;

        let mut patterns = Vec::new();
        for rule in &self.rules {
            match evaluate_rule(rule, birth) {
                Ok(Some(pattern)) => {
                    tracing::debug!(rule = rule.name, score = pattern.score, "pattern detected");
                    patterns.push(pattern);
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(rule = rule.name, error = %e, "skipping rule that failed to evaluate");
                }
            }
        }

        // sort_by is stable
        patterns.sort_by(|a, b| b.score.cmp(&a.score));
        Ok(patterns)
    }

    /// Patterns of a single category
    pub fn get_patterns_by_category(
        &self,
        birth: &BirthData,
        category: PatternCategory,
    ) -> PatternResult<Vec<BmadPattern>> {
        Ok(self
            .detect_patterns(birth)?
            .into_iter()
            .filter(|p| p.category == category)
            .collect())
    }

    /// Patterns with `confidence >= min_confidence`; `None` uses the
    /// configured threshold (0.9 by default).
    pub fn get_high_confidence_patterns(
        &self,
        birth: &BirthData,
        min_confidence: Option<f64>,
    ) -> PatternResult<Vec<BmadPattern>> {
        let threshold = min_confidence.unwrap_or(self.config.min_confidence);
        Ok(self
            .detect_patterns(birth)?
            .into_iter()
            .filter(|p| p.confidence >= threshold)
            .collect())
    }
}

impl Default for PatternEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluate one rule with panic isolation. `Ok(None)` means no match.
fn evaluate_rule(rule: &PatternRule, birth: &BirthData) -> PatternResult<Option<BmadPattern>> {
    let outcome = catch_unwind(AssertUnwindSafe(|| {
        if !rule.matches(birth) {
            return None;
        }

        let confidence = calculate_confidence(birth, rule.name);
        Some(BmadPattern {
            id: Uuid::new_v4(),
            name: rule.name.to_string(),
            description: (rule.description)(birth),
            category: rule.category,
            score: calculate_score(rule.weight, confidence),
            weight: rule.weight,
            confidence,
            elements: (rule.elements)(birth),
            interpretation: (rule.interpretation)(birth),
        })
    }));

    outcome.map_err(|payload| PatternError::RuleEvaluation {
        rule: rule.name.to_string(),
        message: panic_message(payload.as_ref()),
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

// ============================================================================
// TESTS
// ============================================================================
