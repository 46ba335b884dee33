//! Central plot panel: rendering and click interactions.
//!
//! The plot's built-in pan/zoom gestures are disabled; bounds are driven
//! entirely from the view state, so the reducer stays the single source of
//! truth for what is visible. Axes run through the center of the current
//! bounds, with tick marks at a fixed data-unit step walking outward from
//! that center.

use egui::{Align2, Color32, RichText};
use egui_plot::{HLine, Line, Plot, PlotPoint, Points, Text, VLine};

use crate::style::{quadrant_color, ANCHOR_COLOR, HIGHLIGHT_COLOR};
use crate::transform::{ticks, PlotTransform, MIN_SPAN};
use crate::view::{AxisBounds, ViewEvent, TICK_STEP};

use super::ScatterApp;

const AXIS_COLOR: Color32 = Color32::GRAY;
const POINT_RADIUS: f32 = 4.0;
const ANCHOR_RADIUS: f32 = 6.0;
/// Maximum pixel distance between a click and the nearest point for the
/// click to count as hitting that point.
const CLICK_SNAP_RADIUS: f32 = 12.0;

impl ScatterApp {
    /// Render the central plot and apply click interactions.
    pub(super) fn render_central_plot_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let plot_response = self.show_scatter_plot(ui);
            // Same bounds the plot was just drawn with, mapped onto the
            // frame the plot actually occupied.
            let transform =
                PlotTransform::new(self.view.bounds, *plot_response.transform.frame(), 0.0);
            self.handle_plot_clicks(&plot_response.response, &transform);
            self.cursor = plot_response
                .response
                .hover_pos()
                .map(|pos| transform.screen_to_data(pos));
        });
    }

    fn show_scatter_plot(&self, ui: &mut egui::Ui) -> egui_plot::PlotResponse<()> {
        // Guarded the same way the click-snapping transform guards, so the
        // drawn positions and the hit-test agree even for a single-point
        // dataset.
        let bounds = self.view.bounds.with_min_span(MIN_SPAN);
        Plot::new("scatter_plot")
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_boxed_zoom(false)
            .allow_double_click_reset(false)
            .show_axes(false)
            .show_grid(false)
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds_x(bounds.x_min..=bounds.x_max);
                plot_ui.set_plot_bounds_y(bounds.y_min..=bounds.y_max);
                draw_center_axes(plot_ui, &bounds);
                self.draw_points(plot_ui, &bounds);
            })
    }

    /// Draw all dataset points as shaped, colored markers.
    ///
    /// Unselected points take their quadrant color; highlight neighbors and
    /// the recenter anchor are drawn afterwards so they sit on top.
    fn draw_points(&self, plot_ui: &mut egui_plot::PlotUi, bounds: &AxisBounds) {
        for label in self.styles.labels() {
            let shape = self.styles.shape_for(label);
            // Few quadrant colors, so a small association list batches fine.
            let mut by_color: Vec<(Color32, Vec<[f64; 2]>)> = Vec::new();
            for p in self.dataset.points() {
                if &p.label != label
                    || self.view.is_highlighted(p.index)
                    || self.view.recenter_anchor == Some(p.index)
                {
                    continue;
                }
                let color = quadrant_color(p.x, p.y, bounds);
                match by_color.iter_mut().find(|(c, _)| *c == color) {
                    Some((_, pts)) => pts.push(p.pos()),
                    None => by_color.push((color, vec![p.pos()])),
                }
            }
            for (color, pts) in by_color {
                plot_ui.points(
                    Points::new("", pts)
                        .radius(POINT_RADIUS)
                        .shape(shape)
                        .color(color),
                );
            }
        }

        for &index in &self.view.highlighted {
            if self.view.recenter_anchor == Some(index) {
                continue;
            }
            if let Some(p) = self.dataset.get(index) {
                plot_ui.points(
                    Points::new("", vec![p.pos()])
                        .radius(POINT_RADIUS + 1.0)
                        .shape(self.styles.shape_for(&p.label))
                        .color(HIGHLIGHT_COLOR),
                );
            }
        }

        // Anchor last: recognizable even when it is also a highlight target.
        if let Some(p) = self.view.recenter_anchor.and_then(|i| self.dataset.get(i)) {
            plot_ui.points(
                Points::new("", vec![p.pos()])
                    .radius(ANCHOR_RADIUS)
                    .shape(self.styles.shape_for(&p.label))
                    .color(ANCHOR_COLOR),
            );
        }
    }

    /// Snap a click to the nearest point in pixel space and fold the
    /// matching event into the view state.
    fn handle_plot_clicks(&mut self, response: &egui::Response, transform: &PlotTransform) {
        let primary = response.clicked();
        let secondary = response.secondary_clicked();
        if !primary && !secondary {
            return;
        }
        let Some(pointer) = response.interact_pointer_pos() else {
            return;
        };

        let mut best: Option<(usize, f32)> = None;
        for p in self.dataset.points() {
            let d2 = transform.data_to_screen(p.pos()).distance_sq(pointer);
            if best.map_or(true, |(_, best_d2)| d2 < best_d2) {
                best = Some((p.index, d2));
            }
        }
        if let Some((index, d2)) = best {
            if d2.sqrt() <= CLICK_SNAP_RADIUS {
                let event = if primary {
                    ViewEvent::Recenter(index)
                } else {
                    ViewEvent::HighlightNeighbors(index)
                };
                self.view = self.view.apply_event(&self.dataset, event);
            }
        }
    }
}

/// Axes through the bounds center, with tick segments and value labels at
/// [`TICK_STEP`] intervals.
fn draw_center_axes(plot_ui: &mut egui_plot::PlotUi, bounds: &AxisBounds) {
    let (cx, cy) = bounds.center();
    plot_ui.hline(HLine::new("", cy).color(AXIS_COLOR).width(2.0));
    plot_ui.vline(VLine::new("", cx).color(AXIS_COLOR).width(2.0));

    // Tick length expressed in data units: 1% of the visible span each way,
    // the proportion the tick crossings take up on screen.
    let half_y = bounds.span_y() * 0.01;
    let half_x = bounds.span_x() * 0.01;
    for t in ticks(cx, bounds.span_x() / 2.0, TICK_STEP) {
        plot_ui.line(
            Line::new("", vec![[t, cy - half_y], [t, cy + half_y]])
                .color(AXIS_COLOR)
                .width(1.0),
        );
        if t != cx {
            plot_ui.text(
                Text::new(
                    "",
                    PlotPoint::new(t, cy - 2.0 * half_y),
                    RichText::new(format_tick(t)).size(9.0).color(AXIS_COLOR),
                )
                .anchor(Align2::CENTER_TOP),
            );
        }
    }
    for t in ticks(cy, bounds.span_y() / 2.0, TICK_STEP) {
        plot_ui.line(
            Line::new("", vec![[cx - half_x, t], [cx + half_x, t]])
                .color(AXIS_COLOR)
                .width(1.0),
        );
        if t != cy {
            plot_ui.text(
                Text::new(
                    "",
                    PlotPoint::new(cx - 2.0 * half_x, t),
                    RichText::new(format_tick(t)).size(9.0).color(AXIS_COLOR),
                )
                .anchor(Align2::RIGHT_CENTER),
            );
        }
    }
}

fn format_tick(v: f64) -> String {
    if v == v.trunc() {
        format!("{v:.0}")
    } else {
        format!("{v:.1}")
    }
}
