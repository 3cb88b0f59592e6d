//! Nutrition grades and the fixed tables derived from them
//!
//! A grade is the single letter a–e from the `nutrition_grade_fr` column.
//! Everything shown next to it (health score, explanation) is a constant
//! lookup, never a computation.

use serde::{Deserialize, Serialize};

/// Health score used when a grade string cannot be mapped
pub const DEFAULT_HEALTH_SCORE: u8 = 3;

/// Highest possible health score (grade A)
pub const MAX_HEALTH_SCORE: u8 = 5;

/// Nutrition grade, best (A) to worst (E)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
}

impl Grade {
    /// All grades in display order
    pub const ALL: [Grade; 5] = [Grade::A, Grade::B, Grade::C, Grade::D, Grade::E];

    /// Parse a grade letter, ignoring case and surrounding whitespace.
    ///
    /// Returns `None` for anything other than a single letter a–e.
    pub fn parse(value: &str) -> Option<Grade> {
        match value.trim().to_ascii_lowercase().as_str() {
            "a" => Some(Grade::A),
            "b" => Some(Grade::B),
            "c" => Some(Grade::C),
            "d" => Some(Grade::D),
            "e" => Some(Grade::E),
            _ => None,
        }
    }

    /// Grade for a keyboard character (`'a'`..=`'e'`, either case)
    pub fn from_char(c: char) -> Option<Grade> {
        match c.to_ascii_lowercase() {
            'a' => Some(Grade::A),
            'b' => Some(Grade::B),
            'c' => Some(Grade::C),
            'd' => Some(Grade::D),
            'e' => Some(Grade::E),
            _ => None,
        }
    }

    /// Lowercase letter as stored in the dataset
    pub fn letter(&self) -> char {
        match self {
            Grade::A => 'a',
            Grade::B => 'b',
            Grade::C => 'c',
            Grade::D => 'd',
            Grade::E => 'e',
        }
    }

    /// Uppercase letter as shown to the user
    pub fn upper(&self) -> char {
        self.letter().to_ascii_uppercase()
    }

    /// Health score, 5 (A) down to 1 (E)
    pub fn health_score(&self) -> u8 {
        match self {
            Grade::A => 5,
            Grade::B => 4,
            Grade::C => 3,
            Grade::D => 2,
            Grade::E => 1,
        }
    }

    /// Legend wording for this grade
    pub fn quality(&self) -> &'static str {
        match self {
            Grade::A => "Best nutritional quality",
            Grade::B => "Good nutritional quality",
            Grade::C => "Average nutritional quality",
            Grade::D => "Poor nutritional quality",
            Grade::E => "Lowest nutritional quality",
        }
    }

    /// Fixed assessment text for this grade
    pub fn explanation(&self) -> HealthExplanation {
        match self {
            Grade::A => HealthExplanation {
                label: "Very Healthy",
                score: 5,
                text: "This product has excellent nutritional quality. It's low in unhealthy \
                       nutrients (saturated fats, sugars, salt) and high in beneficial ones \
                       (fiber, protein). Recommended for regular consumption.",
            },
            Grade::B => HealthExplanation {
                label: "Healthy",
                score: 4,
                text: "This product has good nutritional quality. It's a healthy choice for \
                       most people with a balanced nutrient profile. Safe for regular \
                       consumption.",
            },
            Grade::C => HealthExplanation {
                label: "Moderate",
                score: 3,
                text: "This product has average nutritional quality. Consider consuming in \
                       moderation as part of a balanced diet. Not harmful but not optimal \
                       for health.",
            },
            Grade::D => HealthExplanation {
                label: "Unhealthy",
                score: 2,
                text: "This product has poor nutritional quality. It may be high in unhealthy \
                       nutrients. Consider healthier alternatives when possible and limit \
                       consumption.",
            },
            Grade::E => HealthExplanation {
                label: "Very Risky",
                score: 1,
                text: "This product has the lowest nutritional quality. It's likely high in \
                       saturated fats, sugars, or salt. Limit consumption and opt for \
                       healthier choices.",
            },
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.upper())
    }
}

impl std::str::FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Grade::parse(s).ok_or_else(|| format!("invalid nutrition grade '{}': expected a-e", s))
    }
}

/// Descriptive health assessment for a grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthExplanation {
    pub label: &'static str,
    pub score: u8,
    pub text: &'static str,
}

impl HealthExplanation {
    /// Heading line, e.g. "Very Healthy (Score 5)"
    pub fn heading(&self) -> String {
        format!("{} (Score {})", self.label, self.score)
    }

    /// Heading and text on one line
    pub fn summary(&self) -> String {
        format!("{} - {}", self.heading(), self.text)
    }
}

/// Fallback text when a grade string is not one of a–e
pub const EXPLANATION_UNAVAILABLE: &str = "Health assessment not available.";

/// Health score for a raw grade string; unknown values map to 3
pub fn health_score(grade: &str) -> u8 {
    Grade::parse(grade)
        .map(|g| g.health_score())
        .unwrap_or(DEFAULT_HEALTH_SCORE)
}

/// Explanation summary for a raw grade string
pub fn health_explanation(grade: &str) -> String {
    match Grade::parse(grade) {
        Some(g) => g.explanation().summary(),
        None => EXPLANATION_UNAVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Grade::parse("a"), Some(Grade::A));
        assert_eq!(Grade::parse("A"), Some(Grade::A));
        assert_eq!(Grade::parse(" e "), Some(Grade::E));
        assert_eq!(Grade::parse("f"), None);
        assert_eq!(Grade::parse(""), None);
        assert_eq!(Grade::parse("ab"), None);
    }

    #[test]
    fn test_quality_runs_best_to_lowest() {
        assert_eq!(Grade::A.quality(), "Best nutritional quality");
        assert_eq!(Grade::C.quality(), "Average nutritional quality");
        assert_eq!(Grade::E.quality(), "Lowest nutritional quality");
    }

    #[test]
    fn test_health_score_mapping() {
        assert_eq!(Grade::A.health_score(), 5);
        assert_eq!(Grade::B.health_score(), 4);
        assert_eq!(Grade::C.health_score(), 3);
        assert_eq!(Grade::D.health_score(), 2);
        assert_eq!(Grade::E.health_score(), 1);
    }

    #[test]
    fn test_health_score_strictly_monotonic() {
        for pair in Grade::ALL.windows(2) {
            assert!(pair[0].health_score() > pair[1].health_score());
        }
    }

    #[test]
    fn test_health_score_string_defaults_to_three() {
        assert_eq!(health_score("b"), 4);
        assert_eq!(health_score("B"), 4);
        assert_eq!(health_score("z"), DEFAULT_HEALTH_SCORE);
        assert_eq!(health_score(""), DEFAULT_HEALTH_SCORE);
    }

    #[test]
    fn test_explanation_score_matches_health_score() {
        for grade in Grade::ALL {
            assert_eq!(grade.explanation().score, grade.health_score());
        }
    }

    #[test]
    fn test_explanation_heading() {
        assert_eq!(Grade::A.explanation().heading(), "Very Healthy (Score 5)");
        assert_eq!(Grade::E.explanation().heading(), "Very Risky (Score 1)");
    }

    #[test]
    fn test_health_explanation_fallback() {
        assert_eq!(health_explanation("q"), EXPLANATION_UNAVAILABLE);

        let summary = health_explanation("C");
        assert!(summary.starts_with("Moderate (Score 3) - "));
        assert!(summary.contains("moderation"));
    }

    #[test]
    fn test_display_and_from_str() {
        assert_eq!(Grade::D.to_string(), "D");
        assert_eq!("c".parse::<Grade>(), Ok(Grade::C));
        assert!("x".parse::<Grade>().is_err());
    }

    #[test]
    fn test_from_char() {
        assert_eq!(Grade::from_char('b'), Some(Grade::B));
        assert_eq!(Grade::from_char('E'), Some(Grade::E));
        assert_eq!(Grade::from_char('x'), None);
    }

    #[test]
    fn test_grade_serializes_lowercase() {
        let json = serde_json::to_string(&Grade::A).unwrap();
        assert_eq!(json, "\"a\"");
    }
}
