// BMAD Patterns - Core Library
// Numerological pattern detection, scoring, analysis and comparison for birth dates

pub mod birth_data;
pub mod error;
pub mod numerology;
pub mod rules;
pub mod scoring;
pub mod config;
pub mod detector;
pub mod analysis;
pub mod comparison;

#[cfg(feature = "cli")]
pub mod logging;

use once_cell::sync::Lazy;

// Re-export commonly used types
pub use birth_data::{
    BirthData, validate, days_in_month, is_leap_year,
};
pub use error::{PatternError, PatternResult};
pub use numerology::{digit_sum, is_master_number, has_repeated_digits, are_sequential};
pub use rules::{
    PatternRule, PatternCategory, PatternElement, ElementType, catalog,
};
pub use scoring::{calculate_confidence, calculate_score};
pub use config::EngineConfig;
pub use detector::{BmadPattern, PatternEngine, RuleSummary};
pub use analysis::PatternAnalysisResult;
pub use comparison::PatternComparison;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine over the built-in catalog, built on first use and shared by the
/// free functions below.
static DEFAULT_ENGINE: Lazy<PatternEngine> = Lazy::new(PatternEngine::new);

pub fn default_engine() -> &'static PatternEngine {
    &DEFAULT_ENGINE
}

pub fn detect_patterns(birth: &BirthData) -> PatternResult<Vec<BmadPattern>> {
    DEFAULT_ENGINE.detect_patterns(birth)
}

pub fn analyze(birth: &BirthData) -> PatternResult<PatternAnalysisResult> {
    DEFAULT_ENGINE.analyze(birth)
}

pub fn get_patterns_by_category(
    birth: &BirthData,
    category: PatternCategory,
) -> PatternResult<Vec<BmadPattern>> {
    DEFAULT_ENGINE.get_patterns_by_category(birth, category)
}

pub fn get_high_confidence_patterns(
    birth: &BirthData,
    min_confidence: f64,
) -> PatternResult<Vec<BmadPattern>> {
    DEFAULT_ENGINE.get_high_confidence_patterns(birth, Some(min_confidence))
}

pub fn compare_patterns(first: &BirthData, second: &BirthData) -> PatternResult<PatternComparison> {
    DEFAULT_ENGINE.compare_patterns(first, second)
}
