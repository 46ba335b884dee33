use std::path::PathBuf;

use clap::Parser;

use scatterview::{run_scatterview, ScatterViewOptions};

/// Interactive CSV scatterplot viewer.
///
/// Left-click a point to recenter the view on it (click again to reset);
/// right-click a point to highlight its five nearest neighbors.
#[derive(Parser, Debug)]
#[command(name = "scatterview", version, about)]
struct Cli {
    /// CSV file to load at startup (columns: x, y, label; no header row).
    csv: Option<PathBuf>,

    /// Window title.
    #[arg(long, default_value = "Scatterview")]
    title: String,
}

fn main() -> eframe::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    run_scatterview(ScatterViewOptions {
        title: cli.title,
        csv: cli.csv,
        native_options: None,
    })
}
