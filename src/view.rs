//! View state and the interaction reducer.
//!
//! All mutable view state lives in a single [`ViewState`] record; every
//! interaction is expressed as a [`ViewEvent`] and folded in through
//! [`ViewState::apply_event`], which returns the successor state. That keeps
//! each transition testable in isolation and leaves no ad-hoc mutation paths.

use crate::data::point::Dataset;
use crate::neighbors::nearest_neighbors;

/// Number of neighbors highlighted on a right-click.
pub const K_NEIGHBORS: usize = 5;

/// Spacing of axis tick marks, in data units.
pub const TICK_STEP: f64 = 10.0;

// ─────────────────────────────────────────────────────────────────────────────
// AxisBounds
// ─────────────────────────────────────────────────────────────────────────────

/// The data-space rectangle a transform maps onto the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl AxisBounds {
    /// Bounds used before any dataset is loaded (the canvas dimensions of
    /// the empty view).
    pub const FALLBACK: AxisBounds = AxisBounds {
        x_min: 0.0,
        x_max: 600.0,
        y_min: 0.0,
        y_max: 400.0,
    };

    pub fn span_x(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn span_y(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn center(&self) -> (f64, f64) {
        (
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    /// Bounds with the same spans, centered on `(x, y)`.
    pub fn centered_on(&self, x: f64, y: f64) -> AxisBounds {
        let hx = self.span_x() / 2.0;
        let hy = self.span_y() / 2.0;
        AxisBounds {
            x_min: x - hx,
            x_max: x + hx,
            y_min: y - hy,
            y_max: y + hy,
        }
    }

    /// Widen any axis narrower than `min_span` symmetrically around its
    /// center. Guards the transform against a zero-span (single point or
    /// axis-collinear) dataset.
    pub fn with_min_span(&self, min_span: f64) -> AxisBounds {
        let mut b = *self;
        if b.span_x() < min_span {
            let (cx, _) = b.center();
            b.x_min = cx - min_span / 2.0;
            b.x_max = cx + min_span / 2.0;
        }
        if b.span_y() < min_span {
            let (_, cy) = b.center();
            b.y_min = cy - min_span / 2.0;
            b.y_max = cy + min_span / 2.0;
        }
        b
    }
}

impl Default for AxisBounds {
    fn default() -> Self {
        AxisBounds::FALLBACK
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ViewState + events
// ─────────────────────────────────────────────────────────────────────────────

/// An interaction to fold into the view state. Points are identified by
/// their stable dataset index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    /// Left-click on a point: center the view on it, or restore the default
    /// bounds when it is already the recenter anchor.
    Recenter(usize),
    /// Right-click on a point: highlight its nearest neighbors, or clear
    /// the highlight when it is already the highlight anchor.
    HighlightNeighbors(usize),
    /// Drop both anchors and restore the default bounds.
    ClearSelection,
}

/// The complete view state for one dataset.
///
/// Invariant: `highlighted` is non-empty only while `highlight_anchor` is
/// `Some`; a new anchor replaces the set atomically.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Bounds derived from the dataset min/max; restored on deselect.
    pub default_bounds: AxisBounds,
    /// Bounds the transform actively uses.
    pub bounds: AxisBounds,
    pub recenter_anchor: Option<usize>,
    pub highlight_anchor: Option<usize>,
    pub highlighted: Vec<usize>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::with_bounds(AxisBounds::FALLBACK)
    }
}

impl ViewState {
    fn with_bounds(bounds: AxisBounds) -> Self {
        Self {
            default_bounds: bounds,
            bounds,
            recenter_anchor: None,
            highlight_anchor: None,
            highlighted: Vec::new(),
        }
    }

    /// Fresh state for a newly loaded dataset: default bounds from the data,
    /// no selection.
    pub fn for_dataset(data: &Dataset) -> Self {
        Self::with_bounds(data.default_bounds().unwrap_or(AxisBounds::FALLBACK))
    }

    /// Fold one event into the state, returning the successor state.
    pub fn apply_event(&self, data: &Dataset, event: ViewEvent) -> ViewState {
        let mut next = self.clone();
        match event {
            ViewEvent::Recenter(index) => {
                if self.recenter_anchor == Some(index) {
                    // Toggle off: back to the dataset-derived bounds.
                    next.bounds = self.default_bounds;
                    next.recenter_anchor = None;
                } else if let Some(p) = data.get(index) {
                    // The current span is preserved; only the center moves.
                    next.bounds = self.bounds.centered_on(p.x, p.y);
                    next.recenter_anchor = Some(index);
                }
            }
            ViewEvent::HighlightNeighbors(index) => {
                if self.highlight_anchor == Some(index) {
                    next.highlight_anchor = None;
                    next.highlighted.clear();
                } else if data.get(index).is_some() {
                    next.highlighted = nearest_neighbors(data, index, K_NEIGHBORS);
                    next.highlight_anchor = Some(index);
                }
            }
            ViewEvent::ClearSelection => {
                next.bounds = self.default_bounds;
                next.recenter_anchor = None;
                next.highlight_anchor = None;
                next.highlighted.clear();
            }
        }
        next
    }

    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlighted.contains(&index)
    }

    pub fn has_selection(&self) -> bool {
        self.recenter_anchor.is_some() || self.highlight_anchor.is_some()
    }
}
