//! Linear-scan nearest-neighbor ranking.

use crate::data::point::Dataset;

/// Indices of the `k` points nearest to `anchor`, ascending by Euclidean
/// distance.
///
/// Every point sharing the anchor's exact coordinates is excluded, the
/// anchor itself included. The sort is stable, so distance ties keep
/// dataset order, and ties at the `k`-th slot resolve first-encountered
/// wins. Returns fewer than `k` indices when the dataset has fewer
/// eligible points.
pub fn nearest_neighbors(data: &Dataset, anchor: usize, k: usize) -> Vec<usize> {
    let Some(origin) = data.get(anchor) else {
        return Vec::new();
    };
    let mut ranked: Vec<(usize, f64)> = data
        .points()
        .iter()
        .filter(|p| !p.same_coords(origin))
        .map(|p| (p.index, p.dist_sq(origin)))
        .collect();
    // Squared distance ranks identically to Euclidean distance.
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
    ranked.truncate(k);
    ranked.into_iter().map(|(index, _)| index).collect()
}
