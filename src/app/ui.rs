//! Top bar and legend overlay.

use egui::{Align2, Color32, Rect, Sense, Stroke};
use egui_plot::MarkerShape;

use crate::style::LEGEND_COLOR;
use crate::view::ViewEvent;

use super::ScatterApp;

impl ScatterApp {
    /// Top bar: file controls plus load/cursor status readouts.
    pub(super) fn render_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let open_label = format!("{} Open CSV…", egui_phosphor::regular::FOLDER_OPEN);
                if ui
                    .button(open_label)
                    .on_hover_text("Load a CSV file of x, y, label rows (no header)")
                    .clicked()
                {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("CSV", &["csv"])
                        .pick_file()
                    {
                        self.begin_load(path);
                    }
                }
                let reset = ui.add_enabled(
                    self.view.has_selection(),
                    egui::Button::new("Reset view"),
                );
                if reset
                    .on_hover_text("Clear recenter and highlight selections (Esc)")
                    .clicked()
                {
                    self.view = self.view.apply_event(&self.dataset, ViewEvent::ClearSelection);
                }
                ui.separator();
                self.render_status(ui);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some([x, y]) = self.cursor {
                        ui.monospace(format!("x = {x:.2}  y = {y:.2}"));
                    }
                });
            });
        });
    }

    fn render_status(&self, ui: &mut egui::Ui) {
        if let Some(path) = &self.loading {
            ui.spinner();
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            ui.label(format!("Loading {name}…"));
            return;
        }
        if let Some(err) = &self.load_error {
            ui.colored_label(Color32::LIGHT_RED, err);
            return;
        }
        let Some(source) = &self.source else {
            ui.weak("No file loaded");
            return;
        };
        ui.label(format!("{source}: {} points", self.dataset.len()));
        if let Some(report) = &self.report {
            if report.skipped > 0 {
                ui.colored_label(
                    Color32::YELLOW,
                    format!("{} rows skipped", report.skipped),
                );
            }
        }
        if let Some(at) = &self.loaded_at {
            ui.weak(format!("loaded {}", at.format("%H:%M:%S")));
        }
    }

    /// Fixed legend overlay: one row per distinct label, in first-seen
    /// order, with the label's shape glyph drawn in a neutral color.
    pub(super) fn render_legend(&self, ctx: &egui::Context) {
        if self.styles.labels().is_empty() {
            return;
        }
        egui::Window::new("Legend")
            .anchor(Align2::RIGHT_TOP, [-12.0, 42.0])
            .title_bar(false)
            .resizable(false)
            .show(ctx, |ui| {
                for label in self.styles.labels() {
                    ui.horizontal(|ui| {
                        shape_glyph(ui, self.styles.shape_for(label));
                        if label.is_empty() {
                            ui.weak("(unlabeled)");
                        } else {
                            ui.label(label);
                        }
                    });
                }
            });
    }
}

/// Paint a small marker glyph matching the plot's shapes.
fn shape_glyph(ui: &mut egui::Ui, shape: MarkerShape) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), Sense::hover());
    let painter = ui.painter();
    let center = rect.center();
    let r = 5.0;
    match shape {
        MarkerShape::Square => {
            painter.rect_filled(
                Rect::from_center_size(center, egui::vec2(2.0 * r - 1.0, 2.0 * r - 1.0)),
                0.0,
                LEGEND_COLOR,
            );
        }
        MarkerShape::Up => {
            painter.add(egui::Shape::convex_polygon(
                vec![
                    center + egui::vec2(0.0, -r),
                    center + egui::vec2(r, r * 0.8),
                    center + egui::vec2(-r, r * 0.8),
                ],
                LEGEND_COLOR,
                Stroke::NONE,
            ));
        }
        _ => {
            painter.circle_filled(center, r, LEGEND_COLOR);
        }
    }
}
