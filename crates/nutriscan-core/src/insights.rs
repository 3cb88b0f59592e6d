//! Nutritional insights from fixed per-100g thresholds
//!
//! Each nutrient is checked on its own and contributes at most one advisory.
//! Missing values contribute nothing. All comparisons are strict.

use serde::Serialize;

use crate::product::{Nutrient, Nutrients};

/// Tone of an advisory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    Positive,
    Warning,
    Info,
}

impl InsightKind {
    pub fn marker(&self) -> &'static str {
        match self {
            InsightKind::Positive => "✅",
            InsightKind::Warning => "⚠️",
            InsightKind::Info => "ℹ️",
        }
    }
}

/// A single advisory about one nutrient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Insight {
    pub nutrient: Nutrient,
    pub kind: InsightKind,
    pub headline: &'static str,
    pub detail: Option<&'static str>,
}

impl Insight {
    fn new(nutrient: Nutrient, kind: InsightKind, headline: &'static str) -> Self {
        Self {
            nutrient,
            kind,
            headline,
            detail: None,
        }
    }

    fn with_detail(mut self, detail: &'static str) -> Self {
        self.detail = Some(detail);
        self
    }
}

impl std::fmt::Display for Insight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.detail {
            Some(detail) => write!(f, "{} - {}", self.headline, detail),
            None => write!(f, "{}", self.headline),
        }
    }
}

/// Shown when no nutrient crosses a threshold
pub const NO_INSIGHTS: &str = "No specific insights available for this product.";

// Thresholds per 100 g
const ENERGY_LOW: f64 = 200.0;
const ENERGY_HIGH: f64 = 500.0;
const FAT_LOW: f64 = 3.0;
const FAT_HIGH: f64 = 20.0;
const SUGAR_LOW: f64 = 5.0;
const SUGAR_HIGH: f64 = 22.5;
const SALT_LOW: f64 = 0.3;
const SALT_HIGH: f64 = 1.5;
const FIBER_HIGH: f64 = 6.0;
const FIBER_LOW: f64 = 3.0;
const PROTEIN_GOOD: f64 = 10.0;

/// Evaluate all nutrient thresholds, in table order
pub fn insights(nutrients: &Nutrients) -> Vec<Insight> {
    [
        nutrients.energy.and_then(energy_insight),
        nutrients.fat.and_then(fat_insight),
        nutrients.sugars.and_then(sugar_insight),
        nutrients.salt.and_then(salt_insight),
        nutrients.fiber.and_then(fiber_insight),
        nutrients.proteins.and_then(protein_insight),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn energy_insight(energy: f64) -> Option<Insight> {
    if energy < ENERGY_LOW {
        Some(
            Insight::new(Nutrient::Energy, InsightKind::Positive, "Low in energy")
                .with_detail("suitable for weight management"),
        )
    } else if energy > ENERGY_HIGH {
        Some(
            Insight::new(Nutrient::Energy, InsightKind::Warning, "High in energy")
                .with_detail("consume in small portions"),
        )
    } else {
        None
    }
}

fn fat_insight(fat: f64) -> Option<Insight> {
    if fat < FAT_LOW {
        Some(Insight::new(
            Nutrient::Fat,
            InsightKind::Positive,
            "Low-fat product",
        ))
    } else if fat > FAT_HIGH {
        Some(Insight::new(
            Nutrient::Fat,
            InsightKind::Warning,
            "High in fat content",
        ))
    } else {
        None
    }
}

fn sugar_insight(sugar: f64) -> Option<Insight> {
    if sugar < SUGAR_LOW {
        Some(Insight::new(
            Nutrient::Sugars,
            InsightKind::Positive,
            "Low in sugar",
        ))
    } else if sugar > SUGAR_HIGH {
        Some(
            Insight::new(Nutrient::Sugars, InsightKind::Warning, "High in sugar")
                .with_detail("limit consumption"),
        )
    } else {
        None
    }
}

fn salt_insight(salt: f64) -> Option<Insight> {
    if salt < SALT_LOW {
        Some(Insight::new(
            Nutrient::Salt,
            InsightKind::Positive,
            "Low in salt",
        ))
    } else if salt > SALT_HIGH {
        Some(
            Insight::new(Nutrient::Salt, InsightKind::Warning, "High in salt")
                .with_detail("may affect blood pressure"),
        )
    } else {
        None
    }
}

fn fiber_insight(fiber: f64) -> Option<Insight> {
    if fiber > FIBER_HIGH {
        Some(
            Insight::new(Nutrient::Fiber, InsightKind::Positive, "High in fiber")
                .with_detail("good for digestion"),
        )
    } else if fiber < FIBER_LOW {
        Some(Insight::new(
            Nutrient::Fiber,
            InsightKind::Info,
            "Low in fiber",
        ))
    } else {
        None
    }
}

fn protein_insight(protein: f64) -> Option<Insight> {
    (protein > PROTEIN_GOOD).then(|| {
        Insight::new(
            Nutrient::Proteins,
            InsightKind::Positive,
            "Good source of protein",
        )
    })
}
