//! NutriScan - Nutrition grade browser for the terminal
//!
//! This is the binary entry point: argument parsing and startup. The TUI
//! and the application state live in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use nutriscan::{run_headless, HeadlessOutcome};
use nutriscan_app::config::{init_config_dir, load_settings};
use nutriscan_app::resources::Resources;
use nutriscan_app::state::AppState;
use nutriscan_app::ProductFilter;
use nutriscan_core::{logging, Grade};
use tracing::{error, info};

/// NutriScan - Browse food products by nutrition grade and health score
#[derive(Parser, Debug)]
#[command(name = "nutriscan")]
#[command(about = "Browse food products by nutrition grade and health score", long_about = None)]
struct Args {
    /// Directory holding the dataset, the model and `.nutriscan/config.toml`
    #[arg(value_name = "BASE_DIR")]
    path: Option<PathBuf>,

    /// Dataset CSV, overriding the config file
    #[arg(long, value_name = "PATH")]
    dataset: Option<PathBuf>,

    /// Model artifact, overriding the config file
    #[arg(long, value_name = "PATH")]
    model: Option<PathBuf>,

    /// Initial grade filter, e.g. `--grade a,b`
    #[arg(long, value_name = "GRADES", value_delimiter = ',')]
    grade: Vec<Grade>,

    /// Initial product name search
    #[arg(long, value_name = "TEXT")]
    search: Option<String>,

    /// Print NDJSON events instead of starting the TUI
    #[arg(long)]
    headless: bool,

    /// Product label to report in headless mode, e.g. "Apple (Grade: A)"
    #[arg(long, value_name = "LABEL", requires = "headless")]
    select: Option<String>,

    /// Write a default `.nutriscan/config.toml` and exit
    #[arg(long)]
    init_config: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    logging::init()?;

    let base_path = args
        .path
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    if args.init_config {
        let config_path = init_config_dir(&base_path)?;
        eprintln!("Config file: {}", config_path.display());
        return Ok(());
    }

    let settings = load_settings(&base_path);

    let dataset_path = args
        .dataset
        .unwrap_or_else(|| settings.data.dataset_path(&base_path));
    let model_path = args
        .model
        .unwrap_or_else(|| settings.data.model_path(&base_path));
    info!(
        "Dataset: {}, model: {}",
        dataset_path.display(),
        model_path.display()
    );

    // Missing files become statuses shown in the UI; fatal errors end here
    let resources = Resources::load(&dataset_path, &model_path, &settings.data)?;
    let filter = ProductFilter::new()
        .with_grades(args.grade)
        .with_search(args.search.unwrap_or_default());
    let mut state = AppState::with_filter(settings, resources, filter);

    if args.headless {
        return match run_headless(&mut state, args.select.as_deref())? {
            HeadlessOutcome::Completed => Ok(()),
            HeadlessOutcome::DatasetUnavailable => std::process::exit(1),
        };
    }

    if let Err(e) = nutriscan_tui::run(&mut state) {
        error!("TUI exited with error: {}", e);
        eprintln!(
            "See the log for details: {}",
            logging::get_current_log_file().display()
        );
        return Err(e.into());
    }

    info!("NutriScan exiting");
    Ok(())
}
