//! # nutriscan-core - Core Domain Types
//!
//! Foundation crate for NutriScan. Provides the product model, the fixed
//! grade tables, badge colors, nutritional insights, error handling and
//! logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Grades (`grade`)
//! - [`Grade`] - Nutrition grade A–E with health score and explanation
//! - [`health_score()`], [`health_explanation()`] - Lookups over raw grade strings
//!
//! ### Colors (`color`)
//! - [`BadgeColor`] - Hex design tokens for result badges
//! - [`grade_color()`], [`score_color()`], [`nutrition_score_color()`]
//!
//! ### Products (`product`)
//! - [`Product`], [`Nutrients`], [`Nutrient`], [`NutrientRow`]
//!
//! ### Insights (`insights`)
//! - [`insights()`] - Threshold advisories for a product's nutrients
//!
//! ### Reports (`report`)
//! - [`ProductReport`] - All derived display fields for one product
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with fatal classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use nutriscan_core::prelude::*;
//! ```

pub mod color;
pub mod error;
pub mod grade;
pub mod insights;
pub mod logging;
pub mod prelude;
pub mod product;
pub mod report;

// Re-export commonly used types at crate root for convenience
pub use color::{
    grade_color, nutrition_score_color, score_color, BadgeColor, NutritionBand,
    NutritionScoreDisplay,
};
pub use error::{Error, Result, ResultExt};
pub use grade::{
    health_explanation, health_score, Grade, HealthExplanation, DEFAULT_HEALTH_SCORE,
    EXPLANATION_UNAVAILABLE, MAX_HEALTH_SCORE,
};
pub use insights::{insights, Insight, InsightKind, NO_INSIGHTS};
pub use product::{split_additives, Nutrient, NutrientRow, Nutrients, Product};
pub use report::ProductReport;
