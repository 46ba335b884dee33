//! Category shape assignment and quadrant-based point coloring.

use std::collections::HashMap;

use egui::Color32;
use egui_plot::MarkerShape;
use once_cell::sync::Lazy;

use crate::data::point::Dataset;
use crate::view::AxisBounds;

// Fixed marker palette used for label→shape allocation. Labels beyond the
// palette length cycle back to the start.
static SHAPE_PALETTE: Lazy<Vec<MarkerShape>> = Lazy::new(|| {
    vec![MarkerShape::Circle, MarkerShape::Square, MarkerShape::Up]
});

/// The fixed shape palette, in allocation order.
pub fn shape_palette() -> &'static [MarkerShape] {
    &SHAPE_PALETTE
}

/// Fill used for neighbors in the current highlight set.
pub const HIGHLIGHT_COLOR: Color32 = Color32::GOLD;
/// Fill used for the recenter anchor. The anchor is also drawn at a larger
/// radius so it stays recognizable when it is a highlight neighbor too.
pub const ANCHOR_COLOR: Color32 = Color32::WHITE;
/// Neutral color for legend glyphs; the legend never reuses quadrant fills.
pub const LEGEND_COLOR: Color32 = Color32::LIGHT_GRAY;

const TOP_RIGHT: Color32 = Color32::RED;
const TOP_LEFT: Color32 = Color32::BLUE;
const BOTTOM_LEFT: Color32 = Color32::GREEN;
const BOTTOM_RIGHT: Color32 = Color32::from_rgb(160, 32, 240);

/// Fill color for an unselected point, derived from which quadrant of the
/// current bounds it falls in.
///
/// The split uses `>=` against the bounds center on the upper side and `<`
/// on the lower side, so every point lands in exactly one quadrant with no
/// gap or overlap on the center lines.
pub fn quadrant_color(x: f64, y: f64, bounds: &AxisBounds) -> Color32 {
    let (cx, cy) = bounds.center();
    if y >= cy {
        if x >= cx {
            TOP_RIGHT
        } else {
            TOP_LEFT
        }
    } else if x < cx {
        BOTTOM_LEFT
    } else {
        BOTTOM_RIGHT
    }
}

/// Deterministic label→shape assignment for one dataset.
///
/// Labels are assigned shapes in first-seen dataset order, cycling through
/// the palette by modulo once it is exhausted. Rebuilt whenever the dataset
/// is replaced.
#[derive(Debug, Clone, Default)]
pub struct CategoryStyles {
    shapes: HashMap<String, MarkerShape>,
    labels: Vec<String>,
}

impl CategoryStyles {
    pub fn from_dataset(data: &Dataset) -> Self {
        let palette = shape_palette();
        let mut styles = CategoryStyles::default();
        for p in data.points() {
            if !styles.shapes.contains_key(&p.label) {
                let shape = palette[styles.labels.len() % palette.len()];
                styles.shapes.insert(p.label.clone(), shape);
                styles.labels.push(p.label.clone());
            }
        }
        styles
    }

    /// Shape for a label. Total over the dataset the map was built from;
    /// an unknown label falls back to the first palette entry.
    pub fn shape_for(&self, label: &str) -> MarkerShape {
        self.shapes
            .get(label)
            .copied()
            .unwrap_or(shape_palette()[0])
    }

    /// Distinct labels in first-seen order, for the legend.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}
