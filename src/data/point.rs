//! Point records and the immutable dataset.
//!
//! Every ingested record is assigned a stable numeric index at load time.
//! All selection and highlight state elsewhere in the crate is keyed by that
//! index rather than by coordinate equality, so duplicate coordinates never
//! make two records ambiguous.

use crate::view::AxisBounds;

/// A single scatterplot record: data-space position plus its category label.
#[derive(Debug, Clone, PartialEq)]
pub struct PointRecord {
    /// Stable index into the dataset, assigned during ingestion.
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub label: String,
}

impl PointRecord {
    /// Position as an `[x, y]` pair, the form the plot layer consumes.
    pub fn pos(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Squared Euclidean distance to another record.
    pub fn dist_sq(&self, other: &PointRecord) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Exact coordinate equality, used to exclude duplicates from
    /// neighbor ranking.
    pub fn same_coords(&self, other: &PointRecord) -> bool {
        self.x == other.x && self.y == other.y
    }
}

/// An ordered collection of points, immutable for the lifetime of one load.
///
/// A new CSV load replaces the dataset wholesale; nothing mutates it in
/// place.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    points: Vec<PointRecord>,
}

impl Dataset {
    pub fn new(points: Vec<PointRecord>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[PointRecord] {
        &self.points
    }

    pub fn get(&self, index: usize) -> Option<&PointRecord> {
        self.points.get(index)
    }

    /// Axis bounds spanning the true min/max of the data, or `None` for an
    /// empty dataset.
    pub fn default_bounds(&self) -> Option<AxisBounds> {
        let first = self.points.first()?;
        let mut b = AxisBounds {
            x_min: first.x,
            x_max: first.x,
            y_min: first.y,
            y_max: first.y,
        };
        for p in &self.points[1..] {
            b.x_min = b.x_min.min(p.x);
            b.x_max = b.x_max.max(p.x);
            b.y_min = b.y_min.min(p.y);
            b.y_max = b.y_max.max(p.y);
        }
        Some(b)
    }
}
