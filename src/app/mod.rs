//! The eframe application: state ownership, ingest polling, and frame
//! composition.

mod plot;
mod run;
mod ui;

use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};

use crate::data::ingest::{spawn_load, IngestEvent, ParseReport};
use crate::data::point::Dataset;
use crate::style::CategoryStyles;
use crate::view::{ViewEvent, ViewState};

pub use run::{run_scatterview, ScatterViewOptions};

/// Interactive scatterplot application.
///
/// Owns the current dataset, the view state (bounds + selections), the
/// per-dataset category styles, and the channel background loads report
/// back on.
pub struct ScatterApp {
    pub(super) dataset: Dataset,
    pub(super) view: ViewState,
    pub(super) styles: CategoryStyles,

    rx: Receiver<IngestEvent>,
    tx: Sender<IngestEvent>,
    /// Generation of the most recently requested load; events tagged with
    /// an older generation are superseded and dropped.
    generation: u64,
    /// Path of an in-flight load, if any.
    pub(super) loading: Option<PathBuf>,

    /// Display name of the loaded file.
    pub(super) source: Option<String>,
    pub(super) report: Option<ParseReport>,
    pub(super) loaded_at: Option<chrono::DateTime<chrono::Local>>,
    pub(super) load_error: Option<String>,
    /// Pointer position in data space, for the status readout.
    pub(super) cursor: Option<[f64; 2]>,
}

impl ScatterApp {
    pub fn new(initial_csv: Option<PathBuf>) -> Self {
        let (tx, rx) = channel();
        let mut app = Self {
            dataset: Dataset::default(),
            view: ViewState::default(),
            styles: CategoryStyles::default(),
            rx,
            tx,
            generation: 0,
            loading: None,
            source: None,
            report: None,
            loaded_at: None,
            load_error: None,
            cursor: None,
        };
        if let Some(path) = initial_csv {
            app.begin_load(path);
        }
        app
    }

    /// Kick off a background load of `path`, superseding any in-flight load.
    pub(super) fn begin_load(&mut self, path: PathBuf) {
        self.generation += 1;
        self.loading = Some(path.clone());
        spawn_load(path, self.generation, self.tx.clone());
    }

    /// Drain finished loads from the ingest channel.
    fn poll_ingest(&mut self) {
        while let Ok(event) = self.rx.try_recv() {
            self.handle_ingest_event(event);
        }
    }

    /// Apply one finished load, or drop it if it has been superseded.
    ///
    /// Only the current generation is accepted; a slow parse of a
    /// superseded file can never overwrite a later one, and it does not
    /// finish the load that superseded it either.
    fn handle_ingest_event(&mut self, event: IngestEvent) {
        if event.generation != self.generation {
            log::debug!(
                "dropping stale load of {:?} (generation {} < {})",
                event.source,
                event.generation,
                self.generation
            );
            return;
        }
        self.loading = None;
        match event.outcome {
            Ok((dataset, report)) => {
                self.view = ViewState::for_dataset(&dataset);
                self.styles = CategoryStyles::from_dataset(&dataset);
                self.dataset = dataset;
                self.report = Some(report);
                self.source = event
                    .source
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned());
                self.loaded_at = Some(chrono::Local::now());
                self.load_error = None;
                if report.skipped > 0 {
                    log::warn!(
                        "{:?}: {} rows skipped during parse",
                        event.source,
                        report.skipped
                    );
                }
            }
            Err(e) => {
                log::warn!("load failed: {e}");
                self.load_error = Some(e.to_string());
            }
        }
    }

    fn handle_hotkeys(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) && self.view.has_selection() {
            self.view = self.view.apply_event(&self.dataset, ViewEvent::ClearSelection);
        }
    }
}

impl eframe::App for ScatterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_ingest();
        self.handle_hotkeys(ctx);
        self.render_top_bar(ctx);
        self.render_central_plot_panel(ctx);
        self.render_legend(ctx);

        // A finished background load must show up without waiting for the
        // next input event.
        if self.loading.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::point::PointRecord;

    fn dataset(n: usize) -> Dataset {
        Dataset::new(
            (0..n)
                .map(|index| PointRecord {
                    index,
                    x: index as f64,
                    y: index as f64,
                    label: String::new(),
                })
                .collect(),
        )
    }

    fn loaded_event(generation: u64, n: usize) -> IngestEvent {
        IngestEvent {
            generation,
            source: PathBuf::from("points.csv"),
            outcome: Ok((
                dataset(n),
                ParseReport {
                    loaded: n,
                    skipped: 0,
                },
            )),
        }
    }

    #[test]
    fn current_generation_load_replaces_dataset() {
        let mut app = ScatterApp::new(None);
        app.generation = 2;
        app.loading = Some(PathBuf::from("points.csv"));
        app.handle_ingest_event(loaded_event(2, 4));
        assert_eq!(app.dataset.len(), 4);
        assert!(app.loading.is_none());
        assert_eq!(app.view, ViewState::for_dataset(&dataset(4)));
    }

    #[test]
    fn stale_generation_load_is_ignored() {
        let mut app = ScatterApp::new(None);
        app.generation = 2;
        app.handle_ingest_event(loaded_event(2, 4));
        let view_before = app.view.clone();
        app.loading = Some(PathBuf::from("newer.csv"));

        // A load started earlier but finishing now arrives over the channel.
        app.tx.send(loaded_event(1, 9)).expect("send stale event");
        app.poll_ingest();

        assert_eq!(
            app.dataset.len(),
            4,
            "a superseded load must not overwrite newer data"
        );
        assert_eq!(app.view, view_before);
        assert_eq!(
            app.loading,
            Some(PathBuf::from("newer.csv")),
            "a stale event must not finish the in-flight load"
        );
    }
}
