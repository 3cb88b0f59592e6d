//! Display fields derived from a single selected product

use serde::Serialize;

use crate::color::{score_color, BadgeColor, NutritionScoreDisplay};
use crate::grade::{Grade, HealthExplanation};
use crate::insights::{insights, Insight};
use crate::product::{NutrientRow, Product};

/// Everything the analysis panels show for one product.
///
/// Borrowing from the product keeps a report cheap to rebuild on every
/// frame; nothing here is cached.
#[derive(Debug, Clone, Serialize)]
pub struct ProductReport<'a> {
    pub label: String,
    pub name: &'a str,
    pub grade: Grade,
    pub grade_color: BadgeColor,
    pub health_score: u8,
    pub score_color: BadgeColor,
    pub nutrition_score: NutritionScoreDisplay,
    pub explanation: HealthExplanation,
    pub category: &'a str,
    pub country: &'a str,
    pub ingredients: Option<&'a str>,
    pub additives: &'a [String],
    pub nutrient_rows: Vec<NutrientRow>,
    pub insights: Vec<Insight>,
}

impl<'a> ProductReport<'a> {
    pub fn for_product(product: &'a Product) -> Self {
        let health_score = product.grade.health_score();
        Self {
            label: product.display_label(),
            name: &product.name,
            grade: product.grade,
            grade_color: product.grade.color(),
            health_score,
            score_color: score_color(health_score),
            nutrition_score: product.nutrition_score_display(),
            explanation: product.grade.explanation(),
            category: product.category_display(),
            country: product.country_display(),
            ingredients: product.ingredients.as_deref(),
            additives: &product.additives,
            nutrient_rows: product.nutrients.rows(),
            insights: insights(&product.nutrients),
        }
    }

    /// Health score badge text, e.g. "4/5"
    pub fn health_score_label(&self) -> String {
        format!("{}/{}", self.health_score, crate::grade::MAX_HEALTH_SCORE)
    }
}
