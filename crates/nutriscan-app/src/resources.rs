//! Startup resources: the dataset and the model artifact
//!
//! Both are loaded exactly once, before the first frame, and are read-only
//! afterwards. A failed load is kept as a status so the UI can report it.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::catalog::{load_catalog, Catalog};
use crate::config::DataSettings;
use crate::model::{load_model, ModelArtifact};
use nutriscan_core::prelude::*;

/// Outcome of loading the dataset
#[derive(Debug, Clone)]
pub enum DatasetStatus {
    Loaded(Arc<Catalog>),
    Failed { path: PathBuf, message: String },
}

impl DatasetStatus {
    pub fn catalog(&self) -> Option<&Arc<Catalog>> {
        match self {
            DatasetStatus::Loaded(catalog) => Some(catalog),
            DatasetStatus::Failed { .. } => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, DatasetStatus::Loaded(_))
    }
}

/// Outcome of loading the model artifact
#[derive(Debug, Clone)]
pub enum ModelStatus {
    Loaded(ModelArtifact),
    Failed { path: PathBuf, message: String },
}

impl ModelStatus {
    pub fn is_loaded(&self) -> bool {
        matches!(self, ModelStatus::Loaded(_))
    }

    /// One-line status for headers and logs
    pub fn summary(&self) -> String {
        match self {
            ModelStatus::Loaded(model) => {
                format!("model loaded ({}, {})", model.format, model.size_display())
            }
            ModelStatus::Failed { message, .. } => format!("model unavailable: {}", message),
        }
    }
}

/// Everything loaded at startup
#[derive(Debug, Clone)]
pub struct Resources {
    pub dataset: DatasetStatus,
    pub model: ModelStatus,
}

impl Resources {
    /// Load both files, recording missing or malformed files as statuses.
    ///
    /// Only fatal errors, such as an unusable delimiter setting, are returned.
    pub fn load(dataset_path: &Path, model_path: &Path, data: &DataSettings) -> Result<Self> {
        let dataset = match load_catalog(dataset_path, data) {
            Ok(catalog) => DatasetStatus::Loaded(Arc::new(catalog)),
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                error!("Error loading dataset: {}", e);
                DatasetStatus::Failed {
                    path: dataset_path.to_path_buf(),
                    message: e.to_string(),
                }
            }
        };

        let model = match load_model(model_path) {
            Ok(model) => ModelStatus::Loaded(model),
            Err(e) => {
                warn!("Error loading model: {}", e);
                ModelStatus::Failed {
                    path: model_path.to_path_buf(),
                    message: e.to_string(),
                }
            }
        };

        Ok(Self { dataset, model })
    }

    /// Resources around an in-memory catalog, with no model
    pub fn from_catalog(catalog: Catalog) -> Self {
        Self {
            dataset: DatasetStatus::Loaded(Arc::new(catalog)),
            model: ModelStatus::Failed {
                path: PathBuf::from("model.pkl"),
                message: "not loaded".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_load_reports_both_failures_without_error() {
        let dir = tempdir().unwrap();
        let resources = Resources::load(
            &dir.path().join("missing.csv"),
            &dir.path().join("missing.pkl"),
            &DataSettings::default(),
        )
        .unwrap();

        assert!(!resources.dataset.is_loaded());
        assert!(resources.dataset.catalog().is_none());
        assert!(!resources.model.is_loaded());
        assert!(resources.model.summary().starts_with("model unavailable"));
    }

    #[test]
    fn test_load_dataset_without_model() {
        let dir = tempdir().unwrap();
        let csv_path = dir.path().join("products.csv");
        let mut file = std::fs::File::create(&csv_path).unwrap();
        writeln!(file, "description").unwrap();
        writeln!(file, "product_name;nutrition_grade_fr").unwrap();
        writeln!(file, "Apple;a").unwrap();
        drop(file);

        let resources = Resources::load(
            &csv_path,
            &dir.path().join("model.pkl"),
            &DataSettings::default(),
        )
        .unwrap();

        let catalog = resources.dataset.catalog().unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(!resources.model.is_loaded());
    }

    #[test]
    fn test_model_summary_when_loaded() {
        let dir = tempdir().unwrap();
        let model_path = dir.path().join("model.pkl");
        std::fs::write(&model_path, [0x80, 0x05, 0x95, 0x2E]).unwrap();

        let resources = Resources::load(
            &dir.path().join("missing.csv"),
            &model_path,
            &DataSettings::default(),
        )
        .unwrap();
        assert_eq!(
            resources.model.summary(),
            "model loaded (pickle v5, 4 B)"
        );
    }

    #[test]
    fn test_bad_delimiter_is_returned_not_recorded() {
        let dir = tempdir().unwrap();
        let csv_path = dir.path().join("products.csv");
        std::fs::write(
            &csv_path,
            "description\nproduct_name;nutrition_grade_fr\nApple;a\n",
        )
        .unwrap();
        let data = DataSettings {
            delimiter: ";;".to_string(),
            ..DataSettings::default()
        };

        let err = Resources::load(&csv_path, &dir.path().join("model.pkl"), &data).unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { .. }));
        assert!(err.is_fatal());
    }
}
