//! Integration tests for headless NDJSON output

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use nutriscan::{write_events, HeadlessOutcome};
use nutriscan_app::config::load_settings;
use nutriscan_app::{AppState, ProductFilter, Resources};
use nutriscan_core::Grade;
use serde_json::Value;

const DATASET: &str = "\
US food products export
product_name;nutrition_grade_fr;categories;countries;ingredients_text;additives_tags;energy_100g;fat_100g;saturated-fat_100g;sugars_100g;salt_100g;proteins_100g;fiber_100g;carbohydrates_100g;nutrition-score-fr_100g
Whole Wheat Bread;a;Breads;US;whole wheat flour, water, yeast;en:e300;247;3.5;0.5;4;1.1;9;7;41;-2
Potato Chips;d;Snacks;US;potatoes, sunflower oil, salt;;536;35;3.1;0.3;1.5;7;4.8;53;
Ghost Row;;;US;;;;;;;;;;;
Apple;a;Fruits;;;;52;0.2;0;10.4;0;0.3;2.4;14;-3
";

/// Helper to create a base directory with a dataset and, optionally, a model
fn create_base(path: &Path, with_model: bool) {
    fs::write(path.join("nutrients_csvfile.csv"), DATASET).unwrap();
    if with_model {
        let mut artifact = vec![0x80, 0x04, 0x95];
        artifact.extend_from_slice(&[0u8; 61]);
        fs::write(path.join("model.pkl"), artifact).unwrap();
    }
}

fn load_state(base: &Path, filter: ProductFilter) -> AppState {
    let settings = load_settings(base);
    let resources = Resources::load(
        &settings.data.dataset_path(base),
        &settings.data.model_path(base),
        &settings.data,
    )
    .unwrap();
    AppState::with_filter(settings, resources, filter)
}

fn run(state: &mut AppState, select: Option<&str>) -> (HeadlessOutcome, Vec<Value>) {
    let mut out = Vec::new();
    let outcome = write_events(state, select, &mut out).unwrap();
    let values = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    (outcome, values)
}

fn kinds(values: &[Value]) -> Vec<&str> {
    values.iter().filter_map(|v| v["event"].as_str()).collect()
}

#[test]
fn test_full_run_reports_first_product() {
    let temp = TempDir::new().unwrap();
    create_base(temp.path(), true);
    let mut state = load_state(temp.path(), ProductFilter::new());

    let (outcome, values) = run(&mut state, None);

    assert_eq!(outcome, HeadlessOutcome::Completed);
    assert_eq!(
        kinds(&values),
        vec!["dataset_loaded", "model", "product", "product", "product", "report"]
    );
    assert_eq!(values[0]["count"], 3);
    assert_eq!(values[0]["dropped"], 1);
    assert_eq!(values[1]["loaded"], true);
    assert!(values[1]["status"]
        .as_str()
        .unwrap()
        .contains("pickle v4"));

    let report = &values[5]["report"];
    assert_eq!(report["label"], "Whole Wheat Bread (Grade: A)");
    assert_eq!(report["health_score"], 5);
    assert_eq!(report["category"], "Breads");
    assert_eq!(report["additives"][0], "en:e300");
    assert!(values.iter().all(|v| v["timestamp"].is_i64()));
}

#[test]
fn test_missing_model_is_a_warning() {
    let temp = TempDir::new().unwrap();
    create_base(temp.path(), false);
    let mut state = load_state(temp.path(), ProductFilter::new());

    let (outcome, values) = run(&mut state, None);

    assert_eq!(outcome, HeadlessOutcome::Completed);
    assert_eq!(values[1]["event"], "model");
    assert_eq!(values[1]["loaded"], false);
    assert_eq!(kinds(&values).last(), Some(&"report"));
}

#[test]
fn test_missing_dataset_ends_with_fatal_error() {
    let temp = TempDir::new().unwrap();
    let mut state = load_state(temp.path(), ProductFilter::new());

    let (outcome, values) = run(&mut state, None);

    assert_eq!(outcome, HeadlessOutcome::DatasetUnavailable);
    assert_eq!(kinds(&values), vec!["dataset_failed", "model", "error"]);
    assert_eq!(values[2]["fatal"], true);
    assert!(values[0]["path"]
        .as_str()
        .unwrap()
        .ends_with("nutrients_csvfile.csv"));
}

#[test]
fn test_filters_and_selection() {
    let temp = TempDir::new().unwrap();
    create_base(temp.path(), false);
    let filter = ProductFilter::new()
        .with_grades([Grade::A, Grade::D])
        .with_search("p");
    let mut state = load_state(temp.path(), filter);

    let (_, values) = run(&mut state, Some("Potato Chips (Grade: D)"));

    let products: Vec<&str> = values
        .iter()
        .filter(|v| v["event"] == "product")
        .filter_map(|v| v["label"].as_str())
        .collect();
    assert_eq!(products, vec!["Potato Chips (Grade: D)", "Apple (Grade: A)"]);

    let report = &values.last().unwrap()["report"];
    assert_eq!(report["label"], "Potato Chips (Grade: D)");
    assert_eq!(report["health_score"], 2);
    assert_eq!(report["country"], "US");
}

#[test]
fn test_unknown_selection_falls_back_to_first() {
    let temp = TempDir::new().unwrap();
    create_base(temp.path(), false);
    let mut state = load_state(temp.path(), ProductFilter::new());

    let (outcome, values) = run(&mut state, Some("Caviar (Grade: A)"));

    assert_eq!(outcome, HeadlessOutcome::Completed);
    let error = values.iter().find(|v| v["event"] == "error").unwrap();
    assert_eq!(error["fatal"], false);
    assert_eq!(
        values.last().unwrap()["report"]["label"],
        "Whole Wheat Bread (Grade: A)"
    );
}

#[test]
fn test_no_match_has_no_report() {
    let temp = TempDir::new().unwrap();
    create_base(temp.path(), false);
    let filter = ProductFilter::new().with_grades([Grade::C]);
    let mut state = load_state(temp.path(), filter);

    let (outcome, values) = run(&mut state, None);

    assert_eq!(outcome, HeadlessOutcome::Completed);
    assert_eq!(kinds(&values), vec!["dataset_loaded", "model", "no_match"]);
}
