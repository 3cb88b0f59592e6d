//! Badge colors for grades, health scores and nutrition scores
//!
//! Colors are kept as hex design tokens here so that both the terminal UI
//! and headless output agree on them. The TUI converts them to RGB.

use serde::Serialize;

use crate::grade::Grade;

/// Color of a result badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeColor {
    DarkGreen,
    LightGreen,
    Yellow,
    Orange,
    Red,
    /// Fallback for values outside the known domain
    Gray,
}

impl BadgeColor {
    pub fn hex(&self) -> &'static str {
        match self {
            BadgeColor::DarkGreen => "#038141",
            BadgeColor::LightGreen => "#85BB2F",
            BadgeColor::Yellow => "#FECB02",
            BadgeColor::Orange => "#EE8100",
            BadgeColor::Red => "#E63E11",
            BadgeColor::Gray => "#888888",
        }
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            BadgeColor::DarkGreen => (0x03, 0x81, 0x41),
            BadgeColor::LightGreen => (0x85, 0xBB, 0x2F),
            BadgeColor::Yellow => (0xFE, 0xCB, 0x02),
            BadgeColor::Orange => (0xEE, 0x81, 0x00),
            BadgeColor::Red => (0xE6, 0x3E, 0x11),
            BadgeColor::Gray => (0x88, 0x88, 0x88),
        }
    }
}

impl Grade {
    pub fn color(&self) -> BadgeColor {
        match self {
            Grade::A => BadgeColor::DarkGreen,
            Grade::B => BadgeColor::LightGreen,
            Grade::C => BadgeColor::Yellow,
            Grade::D => BadgeColor::Orange,
            Grade::E => BadgeColor::Red,
        }
    }
}

/// Badge color for a raw grade string (gray when not a–e)
pub fn grade_color(grade: &str) -> BadgeColor {
    Grade::parse(grade)
        .map(|g| g.color())
        .unwrap_or(BadgeColor::Gray)
}

/// Badge color for a health score (gray outside 1..=5)
pub fn score_color(health_score: u8) -> BadgeColor {
    match health_score {
        5 => BadgeColor::DarkGreen,
        4 => BadgeColor::LightGreen,
        3 => BadgeColor::Yellow,
        2 => BadgeColor::Orange,
        1 => BadgeColor::Red,
        _ => BadgeColor::Gray,
    }
}

/// Band of the dataset's nutrition score (lower is better)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NutritionBand {
    /// score < 0
    Best,
    /// 0 <= score < 3
    Good,
    /// 3 <= score < 11
    Moderate,
    /// 11 <= score < 19
    Poor,
    /// score >= 19
    Worst,
}

impl NutritionBand {
    pub fn for_score(score: f64) -> NutritionBand {
        if score < 0.0 {
            NutritionBand::Best
        } else if score < 3.0 {
            NutritionBand::Good
        } else if score < 11.0 {
            NutritionBand::Moderate
        } else if score < 19.0 {
            NutritionBand::Poor
        } else {
            NutritionBand::Worst
        }
    }

    pub fn color(&self) -> BadgeColor {
        match self {
            NutritionBand::Best => BadgeColor::DarkGreen,
            NutritionBand::Good => BadgeColor::LightGreen,
            NutritionBand::Moderate => BadgeColor::Yellow,
            NutritionBand::Poor => BadgeColor::Orange,
            NutritionBand::Worst => BadgeColor::Red,
        }
    }
}

/// How the nutrition score badge should be shown
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum NutritionScoreDisplay {
    Available {
        value: f64,
        band: NutritionBand,
        color: BadgeColor,
    },
    /// The dataset has no score for this product. Never rendered as zero.
    Unavailable,
}

impl NutritionScoreDisplay {
    pub fn is_available(&self) -> bool {
        matches!(self, NutritionScoreDisplay::Available { .. })
    }

    /// Badge text: the score rounded to whole points
    pub fn label(&self) -> String {
        match self {
            NutritionScoreDisplay::Available { value, .. } => format!("{:.0}", value),
            NutritionScoreDisplay::Unavailable => "Score not available".to_string(),
        }
    }
}

/// Band and color for an optional nutrition score
pub fn nutrition_score_color(score: Option<f64>) -> NutritionScoreDisplay {
    match score {
        Some(value) if value.is_finite() => {
            let band = NutritionBand::for_score(value);
            NutritionScoreDisplay::Available {
                value,
                band,
                color: band.color(),
            }
        }
        _ => NutritionScoreDisplay::Unavailable,
    }
}
