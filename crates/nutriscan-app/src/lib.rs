//! nutriscan-app - Application state and orchestration for NutriScan
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management, together with dataset and model loading, configuration, and
//! the product filter.

pub mod catalog;
pub mod config;
pub mod details_scroll;
pub mod filter;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod model;
pub mod process;
pub mod resources;
pub mod state;

// Re-export primary types
pub use catalog::{load_catalog, Catalog};
pub use details_scroll::DetailsScroll;
pub use filter::{FilteredView, ProductFilter};
pub use handler::UpdateResult;
pub use input_key::InputKey;
pub use message::{Message, Section};
pub use model::{load_model, ModelArtifact, ModelFormat};
pub use resources::{DatasetStatus, ModelStatus, Resources};
pub use state::{AppPhase, AppState, UiMode};
