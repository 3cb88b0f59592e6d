//! Product catalog loaded from the semicolon-separated dataset
//!
//! The first `skip_rows` lines are a free-text description; the header sits
//! on the line after. Rows whose `nutrition_grade_fr` is missing or not one
//! of a–e are dropped here and never reach the rest of the application.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::config::DataSettings;
use nutriscan_core::prelude::*;
use nutriscan_core::{split_additives, Grade, Nutrients, Product};

const NAME_COLUMN: &str = "product_name";
const GRADE_COLUMN: &str = "nutrition_grade_fr";

/// Immutable set of retained products, loaded once per process
#[derive(Debug, Clone)]
pub struct Catalog {
    source: PathBuf,
    products: Vec<Product>,
    dropped: usize,
}

impl Catalog {
    /// Build a catalog from already validated products
    pub fn from_products(source: impl Into<PathBuf>, products: Vec<Product>) -> Self {
        Self {
            source: source.into(),
            products,
            dropped: 0,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Rows excluded at load time for lacking a valid grade
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Number of products per grade, in A..E order
    pub fn grade_counts(&self) -> [usize; 5] {
        let mut counts = [0; 5];
        for product in &self.products {
            counts[grade_slot(product.grade)] += 1;
        }
        counts
    }
}

fn grade_slot(grade: Grade) -> usize {
    match grade {
        Grade::A => 0,
        Grade::B => 1,
        Grade::C => 2,
        Grade::D => 3,
        Grade::E => 4,
    }
}

/// One dataset row as it appears on disk. Unknown columns are ignored and
/// unparseable numbers become `None`.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "product_name", default)]
    name: Option<String>,
    #[serde(rename = "nutrition_grade_fr", default)]
    grade: Option<String>,
    #[serde(default)]
    categories: Option<String>,
    #[serde(default)]
    countries: Option<String>,
    #[serde(rename = "ingredients_text", default)]
    ingredients: Option<String>,
    #[serde(rename = "additives_tags", default)]
    additives: Option<String>,
    #[serde(
        rename = "energy_100g",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    energy: Option<f64>,
    #[serde(rename = "fat_100g", default, deserialize_with = "csv::invalid_option")]
    fat: Option<f64>,
    #[serde(
        rename = "saturated-fat_100g",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    saturated_fat: Option<f64>,
    #[serde(
        rename = "sugars_100g",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    sugars: Option<f64>,
    #[serde(rename = "salt_100g", default, deserialize_with = "csv::invalid_option")]
    salt: Option<f64>,
    #[serde(
        rename = "proteins_100g",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    proteins: Option<f64>,
    #[serde(
        rename = "fiber_100g",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    fiber: Option<f64>,
    #[serde(
        rename = "carbohydrates_100g",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    carbohydrates: Option<f64>,
    #[serde(
        rename = "nutrition-score-fr_100g",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    nutrition_score: Option<f64>,
}

impl RawRow {
    /// Convert to a product, or `None` when the grade is missing/invalid
    fn into_product(self) -> Option<Product> {
        let grade = Grade::parse(self.grade.as_deref()?)?;

        Some(Product {
            name: non_blank(self.name).unwrap_or_default(),
            grade,
            category: non_blank(self.categories),
            country: non_blank(self.countries),
            ingredients: non_blank(self.ingredients),
            additives: self
                .additives
                .as_deref()
                .map(split_additives)
                .unwrap_or_default(),
            nutrients: Nutrients {
                energy: amount(self.energy),
                fat: amount(self.fat),
                saturated_fat: amount(self.saturated_fat),
                sugars: amount(self.sugars),
                salt: amount(self.salt),
                proteins: amount(self.proteins),
                fiber: amount(self.fiber),
                carbohydrates: amount(self.carbohydrates),
            },
            nutrition_score: self.nutrition_score.filter(|s| s.is_finite()),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Nutrient amounts are non-negative; anything else counts as missing
fn amount(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v >= 0.0)
}

/// Byte offset just past the first `lines` newline characters
fn skip_lines(bytes: &[u8], lines: usize) -> usize {
    if lines == 0 {
        return 0;
    }
    bytes
        .iter()
        .enumerate()
        .filter(|(_, b)| **b == b'\n')
        .nth(lines - 1)
        .map(|(i, _)| i + 1)
        .unwrap_or(bytes.len())
}

/// Load the dataset at `path`
pub fn load_catalog(path: &Path, data: &DataSettings) -> Result<Catalog> {
    if !path.exists() {
        return Err(Error::dataset_not_found(path));
    }

    let delimiter = data.delimiter_byte()?;
    let bytes = std::fs::read(path).context("Failed to read dataset")?;
    let body = &bytes[skip_lines(&bytes, data.skip_rows)..];

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(body);

    let headers = reader
        .headers()
        .map_err(|e| Error::dataset_malformed(path, e.to_string()))?
        .clone();
    for required in [NAME_COLUMN, GRADE_COLUMN] {
        if !headers.iter().any(|h| h.trim() == required) {
            return Err(Error::dataset_malformed(
                path,
                format!("missing required column '{}'", required),
            ));
        }
    }

    let mut products = Vec::new();
    let mut dropped = 0;
    for (line, row) in reader.deserialize::<RawRow>().enumerate() {
        let row = row.map_err(|e| {
            Error::dataset_malformed(path, format!("record {}: {}", line + 1, e))
        })?;
        match row.into_product() {
            Some(product) => products.push(product),
            None => dropped += 1,
        }
    }

    info!(
        "Loaded {} products from {} ({} dropped without a valid grade)",
        products.len(),
        path.display(),
        dropped
    );

    Ok(Catalog {
        source: path.to_path_buf(),
        products,
        dropped,
    })
}
