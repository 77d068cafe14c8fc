// 🏷️ Pattern Rules - Rules as Data
// Fixed catalog of numerological rules evaluated against a birth date

use crate::birth_data::BirthData;
use crate::numerology::{are_sequential, digit_sum, digits, has_repeated_digits, is_master_number};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// CATEGORY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PatternCategory {
    Numeric,
    Cyclic,
    Harmonic,
    Sequential,
    MasterNumber,
    Repetitive,
    Symbolic,
}

impl PatternCategory {
    pub const ALL: [PatternCategory; 7] = [
        PatternCategory::Numeric,
        PatternCategory::Cyclic,
        PatternCategory::Harmonic,
        PatternCategory::Sequential,
        PatternCategory::MasterNumber,
        PatternCategory::Repetitive,
        PatternCategory::Symbolic,
    ];

    /// Wire name, e.g. `MASTER_NUMBER`
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternCategory::Numeric => "NUMERIC",
            PatternCategory::Cyclic => "CYCLIC",
            PatternCategory::Harmonic => "HARMONIC",
            PatternCategory::Sequential => "SEQUENTIAL",
            PatternCategory::MasterNumber => "MASTER_NUMBER",
            PatternCategory::Repetitive => "REPETITIVE",
            PatternCategory::Symbolic => "SYMBOLIC",
        }
    }

    /// Title-cased name for prose: `MASTER_NUMBER` -> `Master Number`
    pub fn display_name(&self) -> String {
        self.as_str()
            .split('_')
            .map(|word| {
                let lower = word.to_lowercase();
                let mut chars = lower.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for PatternCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive; `-` and spaces are accepted in place of `_`
impl FromStr for PatternCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace(['-', ' '], "_");
        PatternCategory::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| format!("Unknown pattern category: {}", s))
    }
}

// ============================================================================
// PATTERN ELEMENT
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Day,
    Month,
    Year,
    Combined,
}

/// One birth-date field (or derived value) that contributed to a pattern
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternElement {
    #[serde(rename = "type")]
    pub element_type: ElementType,
    pub value: u32,
    pub significance: String,
}

impl PatternElement {
    pub fn new(element_type: ElementType, value: u32, significance: impl Into<String>) -> Self {
        PatternElement {
            element_type,
            value,
            significance: significance.into(),
        }
    }
}

// ============================================================================
// RULE DEFINITION
// ============================================================================

/// A pattern rule: a predicate and three text/element generators, all pure
/// functions of the birth date, plus a weight and a category tag.
#[derive(Clone, Copy)]
pub struct PatternRule {
    /// Unique key; also drives the confidence heuristic
    pub name: &'static str,
    pub category: PatternCategory,

    /// Base weight (0.0 - 1.0)
    pub weight: f64,

    pub condition: fn(&BirthData) -> bool,
    pub description: fn(&BirthData) -> String,
    pub interpretation: fn(&BirthData) -> String,
    pub elements: fn(&BirthData) -> Vec<PatternElement>,
}

impl PatternRule {
    /// Check if the rule's condition holds for the given birth date
    pub fn matches(&self, birth: &BirthData) -> bool {
        (self.condition)(birth)
    }
}

impl fmt::Debug for PatternRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternRule")
            .field("name", &self.name)
            .field("category", &self.category)
            .field("weight", &self.weight)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// CATALOG
// ============================================================================

const PRIME_DAYS: [u32; 11] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31];
const POWERS_OF_TWO: [u32; 5] = [1, 2, 4, 8, 16];
const BALANCE_SUMS: [u32; 3] = [13, 21, 34];

fn day(b: &BirthData) -> u32 {
    b.day.unsigned_abs()
}

fn month(b: &BirthData) -> u32 {
    b.month.unsigned_abs()
}

fn year(b: &BirthData) -> u32 {
    b.year.unsigned_abs()
}

fn life_path(b: &BirthData) -> u32 {
    digit_sum(year(b) + month(b) + day(b))
}

/// The built-in rule catalog, in evaluation order.
pub fn catalog() -> Vec<PatternRule> {
    vec![
        PatternRule {
            name: "Master Number Day",
            category: PatternCategory::MasterNumber,
            weight: 0.95,
            condition: |b| is_master_number(day(b)),
            description: |b| format!("Born on day {}, one of the master numbers 11, 22 and 33", day(b)),
            interpretation: |b| {
                let root: u32 = digits(day(b)).iter().sum();
                format!(
                    "A heightened capacity for intuition, inspiration and leadership. \
                     Master number {} carries the qualities of {} at a higher octave and \
                     asks for them to be used with discipline.",
                    day(b),
                    root
                )
            },
            elements: |b| {
                vec![PatternElement::new(
                    ElementType::Day,
                    day(b),
                    format!("Master number {} is never reduced", day(b)),
                )]
            },
        },
        PatternRule {
            name: "Repeated Digit Day",
            category: PatternCategory::Repetitive,
            weight: 0.75,
            condition: |b| day(b) >= 10 && has_repeated_digits(day(b)),
            description: |b| {
                let digit = digits(day(b))[0];
                format!("Day {} repeats the digit {}", day(b), digit)
            },
            interpretation: |b| {
                let digit = digits(day(b))[0];
                format!(
                    "An amplified expression of the energy of {}. \
                     Repetition doubles the emphasis of a digit, making its traits \
                     more visible in temperament and choices.",
                    digit
                )
            },
            elements: |b| {
                vec![PatternElement::new(
                    ElementType::Day,
                    day(b),
                    format!("Digit {} appears twice", digits(day(b))[0]),
                )]
            },
        },
        PatternRule {
            name: "Sequential Pattern",
            category: PatternCategory::Sequential,
            weight: 0.85,
            condition: |b| month(b).abs_diff(day(b)) == 1,
            description: |b| {
                let direction = if are_sequential(&[month(b), day(b)]) {
                    "ascending"
                } else {
                    "descending"
                };
                format!(
                    "Month {} and day {} form an {} sequence",
                    month(b),
                    day(b),
                    direction
                )
            },
            interpretation: |_| {
                "A natural sense of progression and orderly growth. \
                 Consecutive numbers describe a life that unfolds step by step, \
                 each phase building on the one before."
                    .to_string()
            },
            elements: |b| {
                vec![
                    PatternElement::new(ElementType::Month, month(b), "First step of the sequence"),
                    PatternElement::new(ElementType::Day, day(b), "Second step of the sequence"),
                    PatternElement::new(ElementType::Combined, 1, "Difference of exactly one"),
                ]
            },
        },
        PatternRule {
            name: "Matching Day and Month",
            category: PatternCategory::Harmonic,
            weight: 0.80,
            condition: |b| b.day == b.month,
            description: |b| format!("Day and month are both {}", day(b)),
            interpretation: |b| {
                format!(
                    "A strong inner alignment between intention and expression. \
                     The doubled {} gives this energy a steady, resonant presence.",
                    day(b)
                )
            },
            elements: |b| {
                vec![
                    PatternElement::new(ElementType::Day, day(b), "Mirrors the month"),
                    PatternElement::new(ElementType::Month, month(b), "Mirrors the day"),
                ]
            },
        },
        PatternRule {
            name: "Life Path Harmony",
            category: PatternCategory::Numeric,
            weight: 0.70,
            condition: |b| life_path(b) == digit_sum(day(b)),
            description: |b| {
                format!(
                    "Life path number {} matches the reduced birth day",
                    life_path(b)
                )
            },
            interpretation: |b| {
                format!(
                    "A life direction that agrees with innate talents. \
                     Life path {} and birth day energy pull the same way, \
                     so natural gifts and long-term purpose reinforce each other.",
                    life_path(b)
                )
            },
            elements: |b| {
                vec![
                    PatternElement::new(
                        ElementType::Combined,
                        life_path(b),
                        format!("Life path from {} + {} + {}", year(b), month(b), day(b)),
                    ),
                    PatternElement::new(
                        ElementType::Day,
                        day(b),
                        format!("Reduces to {}", digit_sum(day(b))),
                    ),
                ]
            },
        },
        PatternRule {
            name: "Cyclic Multiple",
            category: PatternCategory::Cyclic,
            weight: 0.65,
            condition: |b| day(b) % month(b) == 0 || month(b) % day(b) == 0,
            description: |b| {
                if day(b) % month(b) == 0 {
                    format!("Day {} is a multiple of month {}", day(b), month(b))
                } else {
                    format!("Month {} is a multiple of day {}", month(b), day(b))
                }
            },
            interpretation: |_| {
                "A rhythm of recurring cycles and returning themes. \
                 When one date number divides the other, experiences tend to come \
                 back around at a larger scale."
                    .to_string()
            },
            elements: |b| {
                let ratio = day(b).max(month(b)) / day(b).min(month(b));
                vec![
                    PatternElement::new(ElementType::Day, day(b), "Cycle member"),
                    PatternElement::new(ElementType::Month, month(b), "Cycle member"),
                    PatternElement::new(ElementType::Combined, ratio, format!("Cycle ratio {}", ratio)),
                ]
            },
        },
        PatternRule {
            name: "Prime Number Day",
            category: PatternCategory::Symbolic,
            weight: 0.60,
            condition: |b| PRIME_DAYS.contains(&day(b)),
            description: |b| format!("Born on day {}, a prime number", day(b)),
            interpretation: |_| {
                "An independent, self-contained nature. \
                 Prime numbers cannot be divided into smaller equal parts, \
                 reflecting originality and resistance to outside influence."
                    .to_string()
            },
            elements: |b| {
                vec![PatternElement::new(
                    ElementType::Day,
                    day(b),
                    "Divisible only by one and itself",
                )]
            },
        },
        PatternRule {
            name: "Power of Two",
            category: PatternCategory::Symbolic,
            weight: 0.70,
            condition: |b| POWERS_OF_TWO.contains(&day(b)) || POWERS_OF_TWO.contains(&month(b)),
            description: |b| {
                match (POWERS_OF_TWO.contains(&day(b)), POWERS_OF_TWO.contains(&month(b))) {
                    (true, true) => format!("Both day {} and month {} are powers of two", day(b), month(b)),
                    (true, false) => format!("Day {} is a power of two", day(b)),
                    _ => format!("Month {} is a power of two", month(b)),
                }
            },
            interpretation: |_| {
                "A talent for duplication, growth and building on foundations. \
                 Powers of two double at every step, pointing to steady expansion \
                 through partnership and structure."
                    .to_string()
            },
            elements: |b| {
                let mut elements = Vec::new();
                if POWERS_OF_TWO.contains(&day(b)) {
                    elements.push(PatternElement::new(ElementType::Day, day(b), "Power of two"));
                }
                if POWERS_OF_TWO.contains(&month(b)) {
                    elements.push(PatternElement::new(ElementType::Month, month(b), "Power of two"));
                }
                elements
            },
        },
        PatternRule {
            name: "Master Year Energy",
            category: PatternCategory::MasterNumber,
            weight: 0.80,
            condition: |b| is_master_number(digit_sum(year(b))),
            description: |b| {
                format!(
                    "Birth year {} reduces to master number {}",
                    year(b),
                    digit_sum(year(b))
                )
            },
            interpretation: |b| {
                format!(
                    "A generation-wide calling toward vision and service. \
                     The year vibrates as master number {}, lending its amplified \
                     energy to everyone born in {}.",
                    digit_sum(year(b)),
                    year(b)
                )
            },
            elements: |b| {
                vec![
                    PatternElement::new(ElementType::Year, year(b), "Birth year"),
                    PatternElement::new(
                        ElementType::Combined,
                        digit_sum(year(b)),
                        "Master number reached by reduction",
                    ),
                ]
            },
        },
        PatternRule {
            name: "Numerical Balance",
            category: PatternCategory::Harmonic,
            weight: 0.75,
            condition: |b| BALANCE_SUMS.contains(&(month(b) + day(b))),
            description: |b| {
                format!(
                    "Month {} and day {} sum to {}",
                    month(b),
                    day(b),
                    month(b) + day(b)
                )
            },
            interpretation: |b| {
                format!(
                    "A balance between opposing forces. \
                     The sum {} belongs to the Fibonacci series, a proportion found \
                     throughout natural growth.",
                    month(b) + day(b)
                )
            },
            elements: |b| {
                vec![
                    PatternElement::new(ElementType::Month, month(b), "Balance component"),
                    PatternElement::new(ElementType::Day, day(b), "Balance component"),
                    PatternElement::new(
                        ElementType::Combined,
                        month(b) + day(b),
                        "Fibonacci sum",
                    ),
                ]
            },
        },
    ]
}

// ============================================================================
// TESTS
// ============================================================================
