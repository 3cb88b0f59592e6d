//! Product filtering and label-based selection
//!
//! A filter is a grade set plus a name search. Applying it to the catalog
//! yields a [`FilteredView`]: catalog indices in their original order.

use std::collections::BTreeSet;

use nutriscan_core::{Grade, Product};

/// User-supplied filters. Empty parts match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    grades: BTreeSet<Grade>,
    search: String,
}

impl ProductFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_grades(mut self, grades: impl IntoIterator<Item = Grade>) -> Self {
        self.grades = grades.into_iter().collect();
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn grades(&self) -> &BTreeSet<Grade> {
        &self.grades
    }

    pub fn is_grade_selected(&self, grade: Grade) -> bool {
        self.grades.contains(&grade)
    }

    /// Add or remove a grade from the set
    pub fn toggle_grade(&mut self, grade: Grade) {
        if !self.grades.remove(&grade) {
            self.grades.insert(grade);
        }
    }

    pub fn clear_grades(&mut self) {
        self.grades.clear();
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search.push(c);
    }

    pub fn pop_search_char(&mut self) {
        self.search.pop();
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    /// True when neither grades nor a search term are set
    pub fn is_empty(&self) -> bool {
        self.grades.is_empty() && self.search.is_empty()
    }

    fn matches(&self, product: &Product, needle_lower: &str) -> bool {
        (self.grades.is_empty() || self.grades.contains(&product.grade))
            && product.name_contains(needle_lower)
    }

    /// Indices of matching products, original order preserved
    pub fn apply(&self, products: &[Product]) -> FilteredView {
        let needle = self.search.to_lowercase();
        let indices = products
            .iter()
            .enumerate()
            .filter(|(_, product)| self.matches(product, &needle))
            .map(|(i, _)| i)
            .collect();
        FilteredView { indices }
    }
}

/// The subsequence of the catalog that passed the filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredView {
    indices: Vec<usize>,
}

impl FilteredView {
    /// View over every product
    pub fn all(len: usize) -> Self {
        Self {
            indices: (0..len).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The filters excluded every product
    pub fn is_no_match(&self) -> bool {
        self.indices.is_empty()
    }

    /// Catalog index at a view position
    pub fn catalog_index(&self, position: usize) -> Option<usize> {
        self.indices.get(position).copied()
    }

    /// Products in view order
    pub fn products<'a>(&'a self, products: &'a [Product]) -> impl Iterator<Item = &'a Product> {
        self.indices.iter().filter_map(move |&i| products.get(i))
    }

    /// Selection labels in view order
    pub fn labels(&self, products: &[Product]) -> Vec<String> {
        self.products(products).map(Product::display_label).collect()
    }

    /// View position of the first product whose label equals `label`
    pub fn position_of_label(&self, products: &[Product], label: &str) -> Option<usize> {
        self.products(products)
            .position(|product| product.display_label() == label)
    }

    /// Resolve a selection label back to its catalog index.
    ///
    /// Duplicate labels resolve to the first occurrence in the view.
    pub fn resolve_label(&self, products: &[Product], label: &str) -> Option<usize> {
        self.position_of_label(products, label)
            .and_then(|position| self.catalog_index(position))
    }
}
