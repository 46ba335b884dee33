//! Coordinate transforms between data space and screen space, plus tick
//! generation.

use egui::{Pos2, Rect};

use crate::view::AxisBounds;

/// Minimum data-space span substituted before mapping, so a single-point or
/// axis-collinear dataset never divides by zero.
pub const MIN_SPAN: f64 = 1.0;

/// Linear mapping of an [`AxisBounds`] rectangle onto a pixel rectangle.
///
/// The pixel rectangle is inset by `margin` on all sides so axes and tick
/// labels have room. Data-space "up" maps to smaller pixel y.
#[derive(Debug, Clone)]
pub struct PlotTransform {
    bounds: AxisBounds,
    inner: Rect,
}

impl PlotTransform {
    pub fn new(bounds: AxisBounds, rect: Rect, margin: f32) -> Self {
        Self {
            bounds: bounds.with_min_span(MIN_SPAN),
            inner: rect.shrink(margin),
        }
    }

    /// The bounds actually mapped, after the minimum-span guard.
    pub fn bounds(&self) -> AxisBounds {
        self.bounds
    }

    /// Map a data point into screen space.
    pub fn data_to_screen(&self, p: [f64; 2]) -> Pos2 {
        let x_norm = (p[0] - self.bounds.x_min) / self.bounds.span_x();
        let y_norm = (p[1] - self.bounds.y_min) / self.bounds.span_y();
        Pos2::new(
            self.inner.left() + (x_norm * f64::from(self.inner.width())) as f32,
            self.inner.bottom() - (y_norm * f64::from(self.inner.height())) as f32,
        )
    }

    /// Map a screen position back into data space.
    pub fn screen_to_data(&self, pos: Pos2) -> [f64; 2] {
        let x_norm = f64::from(pos.x - self.inner.left()) / f64::from(self.inner.width());
        let y_norm = f64::from(self.inner.bottom() - pos.y) / f64::from(self.inner.height());
        [
            self.bounds.x_min + x_norm * self.bounds.span_x(),
            self.bounds.y_min + y_norm * self.bounds.span_y(),
        ]
    }
}

/// Most tick positions generated for one axis. Beyond this the marks would
/// be denser than pixels, and an extreme data span (say 1e9 units at a
/// 10-unit step) would otherwise stall the frame building them.
pub const MAX_TICKS: usize = 201;

/// Tick positions at a fixed step, walking outward from `center` in both
/// directions until the half-range is exceeded.
///
/// Ticks are symmetric around the center rather than around the data
/// min/max, which ties the gridlines to the recenter interaction: the
/// center tick follows the recenter anchor. Returned ascending. An axis
/// wider than [`MAX_TICKS`] steps yields no ticks at all.
pub fn ticks(center: f64, half_range: f64, step: f64) -> Vec<f64> {
    if !(step > 0.0) || !half_range.is_finite() || !center.is_finite() {
        return Vec::new();
    }
    let n = (half_range / step).floor() as i64;
    if n > (MAX_TICKS as i64 - 1) / 2 {
        return Vec::new();
    }
    (-n..=n).map(|i| center + i as f64 * step).collect()
}
