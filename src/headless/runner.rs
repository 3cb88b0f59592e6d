//! Headless mode runner
//!
//! Emits the dataset and model status, then the filtered view and the
//! report for the selected product. There is no event loop: the state is
//! built once from the command line and printed.

use std::io::Write;

use nutriscan_app::message::Message;
use nutriscan_app::process::process_message;
use nutriscan_app::state::AppState;
use nutriscan_app::{DatasetStatus, ModelStatus};
use nutriscan_core::prelude::*;
use nutriscan_core::ProductReport;

use super::HeadlessEvent;

/// How a headless run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadlessOutcome {
    /// Products (or a no-match notice) were printed
    Completed,
    /// The dataset could not be loaded; the run ended with a fatal error event
    DatasetUnavailable,
}

/// Run in headless mode, writing NDJSON to stdout
pub fn run_headless(state: &mut AppState, select: Option<&str>) -> Result<HeadlessOutcome> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_events(state, select, &mut out)
}

/// Write all headless events for `state` to `out`
pub fn write_events<W: Write>(
    state: &mut AppState,
    select: Option<&str>,
    out: &mut W,
) -> Result<HeadlessOutcome> {
    info!("NutriScan starting in headless mode");

    match &state.resources.dataset {
        DatasetStatus::Loaded(catalog) => {
            HeadlessEvent::dataset_loaded(catalog.source(), catalog.len(), catalog.dropped())
                .emit_to(out)?;
        }
        DatasetStatus::Failed { path, message } => {
            HeadlessEvent::dataset_failed(path, message).emit_to(out)?;
        }
    }

    let model = &state.resources.model;
    HeadlessEvent::model(model.is_loaded(), model.summary()).emit_to(out)?;
    if let ModelStatus::Failed { path, .. } = model {
        debug!("Continuing without model {}", path.display());
    }

    if !state.resources.dataset.is_loaded() {
        HeadlessEvent::error("No dataset loaded; nothing to report".to_string(), true)
            .emit_to(out)?;
        return Ok(HeadlessOutcome::DatasetUnavailable);
    }

    if state.is_no_match() {
        HeadlessEvent::no_match().emit_to(out)?;
        return Ok(HeadlessOutcome::Completed);
    }

    if let Some(label) = select {
        let found = state
            .view()
            .position_of_label(state.products(), label)
            .is_some();
        if found {
            process_message(state, Message::SelectLabel(label.to_string()));
        } else {
            warn!("Selection label not in view: {}", label);
            HeadlessEvent::error(
                format!("No product labelled '{}' in the current view", label),
                false,
            )
            .emit_to(out)?;
        }
    }

    for product in state.view().products(state.products()) {
        HeadlessEvent::product(product.display_label(), product.grade).emit_to(out)?;
    }

    if let Some(product) = state.selected_product() {
        HeadlessEvent::report(ProductReport::for_product(product)).emit_to(out)?;
    }

    Ok(HeadlessOutcome::Completed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutriscan_app::catalog::Catalog;
    use nutriscan_app::config::Settings;
    use nutriscan_app::resources::Resources;
    use nutriscan_app::ProductFilter;
    use nutriscan_core::{Grade, Product};

    fn state(filter: ProductFilter) -> AppState {
        let catalog = Catalog::from_products(
            "products.csv",
            vec![
                Product::new("Apple", Grade::A),
                Product::new("Bread", Grade::B),
                Product::new("Cola", Grade::E),
            ],
        );
        AppState::with_filter(Settings::default(), Resources::from_catalog(catalog), filter)
    }

    fn events(
        state: &mut AppState,
        select: Option<&str>,
    ) -> (HeadlessOutcome, Vec<serde_json::Value>) {
        let mut out = Vec::new();
        let outcome = write_events(state, select, &mut out).expect("write failed");
        let text = String::from_utf8(out).expect("utf8");
        let values = text
            .lines()
            .map(|line| serde_json::from_str(line).expect("invalid JSON line"))
            .collect();
        (outcome, values)
    }

    #[test]
    fn test_event_sequence() {
        let mut state = state(ProductFilter::new());
        let (outcome, values) = events(&mut state, None);

        assert_eq!(outcome, HeadlessOutcome::Completed);
        let kinds: Vec<&str> = values.iter().filter_map(|v| v["event"].as_str()).collect();
        assert_eq!(
            kinds,
            vec!["dataset_loaded", "model", "product", "product", "product", "report"]
        );
        assert_eq!(values[5]["report"]["label"], "Apple (Grade: A)");
    }

    #[test]
    fn test_select_label() {
        let mut state = state(ProductFilter::new());
        let (_, values) = events(&mut state, Some("Cola (Grade: E)"));

        let report = values.last().expect("report event");
        assert_eq!(report["event"], "report");
        assert_eq!(report["report"]["health_score"], 1);
    }

    #[test]
    fn test_unknown_label_falls_back_to_first() {
        let mut state = state(ProductFilter::new());
        let (_, values) = events(&mut state, Some("Nope (Grade: C)"));

        let error = values.iter().find(|v| v["event"] == "error").expect("error event");
        assert_eq!(error["fatal"], false);
        let report = values.last().expect("report event");
        assert_eq!(report["report"]["label"], "Apple (Grade: A)");
    }

    #[test]
    fn test_no_match() {
        let mut state = state(ProductFilter::new().with_grades([Grade::C]));
        let (outcome, values) = events(&mut state, None);

        assert_eq!(outcome, HeadlessOutcome::Completed);
        assert_eq!(values.last().map(|v| v["event"].clone()), Some("no_match".into()));
        assert!(!values.iter().any(|v| v["event"] == "product"));
    }

    #[test]
    fn test_dataset_failure_ends_with_fatal_error() {
        let resources = Resources {
            dataset: DatasetStatus::Failed {
                path: "nutrients_csvfile.csv".into(),
                message: "Dataset not found: nutrients_csvfile.csv".to_string(),
            },
            model: ModelStatus::Failed {
                path: "model.pkl".into(),
                message: "Model artifact not found: model.pkl".to_string(),
            },
        };
        let mut state = AppState::new(Settings::default(), resources);
        let (outcome, values) = events(&mut state, Some("Apple (Grade: A)"));

        assert_eq!(outcome, HeadlessOutcome::DatasetUnavailable);
        let last = values.last().expect("error event");
        assert_eq!(last["event"], "error");
        assert_eq!(last["fatal"], true);
        assert_eq!(values.iter().filter(|v| v["event"] == "error").count(), 1);
    }
}
