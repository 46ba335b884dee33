//! Scatterview crate root: re-exports and module wiring.
//!
//! This crate provides an interactive scatterplot viewer built on egui/eframe:
//! a CSV file of `(x, y, label)` rows is rendered on a 2D plane, left-clicking
//! a point recenters the view on it, and right-clicking highlights its five
//! nearest neighbors.
//!
//! Module layout:
//! - `data`: point records, the immutable dataset, and CSV ingestion
//! - `view`: axis bounds, view state, and the interaction reducer
//! - `neighbors`: linear-scan nearest-neighbor ranking
//! - `transform`: data/pixel coordinate mapping and tick generation
//! - `style`: category shape assignment and quadrant coloring
//! - `app`: the eframe application and run helpers

pub mod data;
pub mod neighbors;
pub mod style;
pub mod transform;
pub mod view;

mod app;

// Public re-exports for a compact external API
pub use app::{run_scatterview, ScatterApp, ScatterViewOptions};
pub use data::ingest::{load_csv, spawn_load, IngestError, IngestEvent, ParseReport};
pub use data::point::{Dataset, PointRecord};
pub use neighbors::nearest_neighbors;
pub use style::CategoryStyles;
pub use transform::PlotTransform;
pub use view::{AxisBounds, ViewEvent, ViewState, K_NEIGHBORS, TICK_STEP};
