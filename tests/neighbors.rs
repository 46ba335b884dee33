use scatterview::{nearest_neighbors, Dataset, PointRecord};

fn dataset(points: &[(f64, f64)]) -> Dataset {
    Dataset::new(
        points
            .iter()
            .enumerate()
            .map(|(index, &(x, y))| PointRecord {
                index,
                x,
                y,
                label: String::new(),
            })
            .collect(),
    )
}

#[test]
fn returns_exactly_k_and_excludes_anchor() {
    // Anchor at the origin, seven other points at distinct distances.
    let data = dataset(&[
        (0.0, 0.0),
        (1.0, 0.0),
        (2.0, 0.0),
        (3.0, 0.0),
        (4.0, 0.0),
        (5.0, 0.0),
        (6.0, 0.0),
        (7.0, 0.0),
    ]);
    let result = nearest_neighbors(&data, 0, 5);
    assert_eq!(result, vec![1, 2, 3, 4, 5]);
    assert!(!result.contains(&0), "the anchor is never its own neighbor");
}

#[test]
fn excluded_points_are_no_closer_than_kept_ones() {
    let data = dataset(&[
        (0.0, 0.0),
        (3.0, 4.0),   // 5
        (1.0, 1.0),   // √2
        (-2.0, 0.0),  // 2
        (0.0, -6.0),  // 6
        (10.0, 0.0),  // 10
        (0.5, 0.0),   // 0.5
        (-1.0, -1.0), // √2
    ]);
    let kept = nearest_neighbors(&data, 0, 5);
    assert_eq!(kept.len(), 5);
    let origin = data.get(0).unwrap();
    let max_kept = kept
        .iter()
        .map(|&i| data.get(i).unwrap().dist_sq(origin))
        .fold(0.0_f64, f64::max);
    for p in data.points() {
        if p.index != 0 && !kept.contains(&p.index) {
            assert!(
                p.dist_sq(origin) >= max_kept,
                "excluded point {} is closer than a kept neighbor",
                p.index
            );
        }
    }
}

#[test]
fn distance_ties_keep_dataset_order() {
    // Four points on the unit circle, all at distance 1 from the anchor.
    let data = dataset(&[
        (0.0, 0.0),
        (1.0, 0.0),
        (0.0, 1.0),
        (-1.0, 0.0),
        (0.0, -1.0),
        (5.0, 5.0),
    ]);
    assert_eq!(nearest_neighbors(&data, 0, 3), vec![1, 2, 3]);
}

#[test]
fn coordinate_duplicates_of_the_anchor_are_excluded() {
    let data = dataset(&[(1.0, 1.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]);
    let result = nearest_neighbors(&data, 0, 5);
    assert_eq!(
        result,
        vec![2, 3],
        "a point sharing the anchor's coordinates is not a neighbor"
    );
}

#[test]
fn fewer_eligible_points_than_k_returns_all_of_them() {
    let data = dataset(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
    assert_eq!(nearest_neighbors(&data, 0, 5).len(), 2);
}

#[test]
fn invalid_anchor_yields_empty_result() {
    let data = dataset(&[(0.0, 0.0), (1.0, 1.0)]);
    assert!(nearest_neighbors(&data, 42, 5).is_empty());
}
