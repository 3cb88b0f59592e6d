//! Product records as retained from the dataset

use serde::Serialize;

use crate::color::{nutrition_score_color, NutritionScoreDisplay};
use crate::grade::Grade;

/// A nutrient tracked per 100 g
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    Energy,
    Fat,
    SaturatedFat,
    Sugars,
    Salt,
    Proteins,
    Fiber,
    Carbohydrates,
}

impl Nutrient {
    /// Table order of the nutritional values panel
    pub const ALL: [Nutrient; 8] = [
        Nutrient::Energy,
        Nutrient::Fat,
        Nutrient::SaturatedFat,
        Nutrient::Sugars,
        Nutrient::Salt,
        Nutrient::Proteins,
        Nutrient::Fiber,
        Nutrient::Carbohydrates,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Nutrient::Energy => "Energy",
            Nutrient::Fat => "Fat",
            Nutrient::SaturatedFat => "Saturated Fat",
            Nutrient::Sugars => "Sugars",
            Nutrient::Salt => "Salt",
            Nutrient::Proteins => "Proteins",
            Nutrient::Fiber => "Fiber",
            Nutrient::Carbohydrates => "Carbohydrates",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Nutrient::Energy => "kcal",
            _ => "g",
        }
    }
}

/// Nutrient values per 100 g; `None` means missing in the dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Nutrients {
    pub energy: Option<f64>,
    pub fat: Option<f64>,
    pub saturated_fat: Option<f64>,
    pub sugars: Option<f64>,
    pub salt: Option<f64>,
    pub proteins: Option<f64>,
    pub fiber: Option<f64>,
    pub carbohydrates: Option<f64>,
}

impl Nutrients {
    pub fn get(&self, nutrient: Nutrient) -> Option<f64> {
        match nutrient {
            Nutrient::Energy => self.energy,
            Nutrient::Fat => self.fat,
            Nutrient::SaturatedFat => self.saturated_fat,
            Nutrient::Sugars => self.sugars,
            Nutrient::Salt => self.salt,
            Nutrient::Proteins => self.proteins,
            Nutrient::Fiber => self.fiber,
            Nutrient::Carbohydrates => self.carbohydrates,
        }
    }

    /// Rows of the nutritional values table, in display order
    pub fn rows(&self) -> Vec<NutrientRow> {
        Nutrient::ALL
            .iter()
            .map(|&nutrient| NutrientRow {
                nutrient,
                value: self.get(nutrient),
            })
            .collect()
    }
}

/// One row of the nutritional values table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NutrientRow {
    pub nutrient: Nutrient,
    pub value: Option<f64>,
}

impl NutrientRow {
    /// Value with two decimals and unit, or "N/A"
    pub fn display_value(&self) -> String {
        match self.value {
            Some(v) => format!("{:.2} {}", v, self.nutrient.unit()),
            None => "N/A".to_string(),
        }
    }
}

/// A retained dataset row. The grade is always valid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub name: String,
    pub grade: Grade,
    pub category: Option<String>,
    pub country: Option<String>,
    pub ingredients: Option<String>,
    pub additives: Vec<String>,
    pub nutrients: Nutrients,
    pub nutrition_score: Option<f64>,
}

impl Product {
    /// Minimal product, mostly useful for tests and fixtures
    pub fn new(name: impl Into<String>, grade: Grade) -> Self {
        Self {
            name: name.into(),
            grade,
            category: None,
            country: None,
            ingredients: None,
            additives: Vec::new(),
            nutrients: Nutrients::default(),
            nutrition_score: None,
        }
    }

    /// Label used for selection: `"{name} (Grade: {GRADE})"`
    pub fn display_label(&self) -> String {
        format!("{} (Grade: {})", self.name, self.grade)
    }

    /// Case-insensitive substring match on the product name.
    ///
    /// `needle_lower` must already be lowercased.
    pub fn name_contains(&self, needle_lower: &str) -> bool {
        needle_lower.is_empty() || self.name.to_lowercase().contains(needle_lower)
    }

    pub fn category_display(&self) -> &str {
        self.category.as_deref().unwrap_or("Not specified")
    }

    pub fn country_display(&self) -> &str {
        self.country.as_deref().unwrap_or("Not specified")
    }

    pub fn nutrition_score_display(&self) -> NutritionScoreDisplay {
        nutrition_score_color(self.nutrition_score)
    }
}

/// Split a raw `additives_tags` cell into trimmed, non-empty tags
pub fn split_additives(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_label() {
        let product = Product::new("Whole Wheat Bread", Grade::B);
        assert_eq!(product.display_label(), "Whole Wheat Bread (Grade: B)");
    }

    #[test]
    fn test_name_contains_case_insensitive() {
        let product = Product::new("Whole Wheat Bread", Grade::A);
        assert!(product.name_contains("bread"));
        assert!(product.name_contains("wheat b"));
        assert!(product.name_contains(""));
        assert!(!product.name_contains("juice"));
    }

    #[test]
    fn test_missing_text_fields_display_not_specified() {
        let product = Product::new("Water", Grade::A);
        assert_eq!(product.category_display(), "Not specified");
        assert_eq!(product.country_display(), "Not specified");
    }

    #[test]
    fn test_nutrient_rows_in_table_order() {
        let nutrients = Nutrients {
            energy: Some(250.0),
            salt: Some(1.234),
            ..Default::default()
        };
        let rows = nutrients.rows();
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0].nutrient, Nutrient::Energy);
        assert_eq!(rows[0].display_value(), "250.00 kcal");
        assert_eq!(rows[1].display_value(), "N/A");
        assert_eq!(rows[4].nutrient, Nutrient::Salt);
        assert_eq!(rows[4].display_value(), "1.23 g");
        assert_eq!(rows[7].nutrient, Nutrient::Carbohydrates);
    }

    #[test]
    fn test_split_additives() {
        assert_eq!(
            split_additives("en:e330, en:e300,,"),
            vec!["en:e330".to_string(), "en:e300".to_string()]
        );
        assert!(split_additives("").is_empty());
    }

    #[test]
    fn test_missing_nutrition_score_display() {
        let product = Product::new("Tea", Grade::C);
        assert!(!product.nutrition_score_display().is_available());
    }
}
