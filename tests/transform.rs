use egui::{Pos2, Rect};
use scatterview::transform::{ticks, MIN_SPAN};
use scatterview::{AxisBounds, PlotTransform};

fn bounds(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> AxisBounds {
    AxisBounds {
        x_min,
        x_max,
        y_min,
        y_max,
    }
}

fn screen(w: f32, h: f32) -> Rect {
    Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(w, h))
}

#[test]
fn data_screen_roundtrip() {
    let t = PlotTransform::new(bounds(0.0, 10.0, 0.0, 10.0), screen(600.0, 400.0), 25.0);
    let p = [3.0, 7.5];
    let back = t.screen_to_data(t.data_to_screen(p));
    assert!((back[0] - p[0]).abs() < 1e-6);
    assert!((back[1] - p[1]).abs() < 1e-6);
}

#[test]
fn y_axis_is_inverted() {
    let t = PlotTransform::new(bounds(0.0, 10.0, 0.0, 10.0), screen(600.0, 400.0), 0.0);
    let low = t.data_to_screen([5.0, 1.0]);
    let high = t.data_to_screen([5.0, 9.0]);
    assert!(
        high.y < low.y,
        "larger data y must map to smaller pixel y"
    );
}

#[test]
fn margin_insets_the_pixel_rectangle() {
    let t = PlotTransform::new(bounds(0.0, 10.0, 0.0, 10.0), screen(600.0, 400.0), 25.0);
    let bottom_left = t.data_to_screen([0.0, 0.0]);
    let top_right = t.data_to_screen([10.0, 10.0]);
    assert_eq!(bottom_left, Pos2::new(25.0, 375.0));
    assert_eq!(top_right, Pos2::new(575.0, 25.0));
}

#[test]
fn degenerate_span_is_widened_not_divided_by_zero() {
    // A single-point dataset: both spans are zero.
    let t = PlotTransform::new(bounds(5.0, 5.0, 3.0, 3.0), screen(100.0, 100.0), 0.0);
    assert_eq!(t.bounds().span_x(), MIN_SPAN);
    assert_eq!(t.bounds().span_y(), MIN_SPAN);
    let center = t.data_to_screen([5.0, 3.0]);
    assert!(center.x.is_finite() && center.y.is_finite());
    assert_eq!(center, Pos2::new(50.0, 50.0));
}

#[test]
fn ticks_walk_outward_symmetrically_from_the_center() {
    let positions = ticks(0.0, 35.0, 10.0);
    assert_eq!(
        positions,
        vec![-30.0, -20.0, -10.0, 0.0, 10.0, 20.0, 30.0]
    );
}

#[test]
fn ticks_follow_a_moved_center() {
    let positions = ticks(5.0, 25.0, 10.0);
    assert_eq!(positions, vec![-15.0, -5.0, 5.0, 15.0, 25.0]);
    assert!(
        positions.contains(&5.0),
        "the center itself always gets a tick"
    );
}

#[test]
fn ticks_never_exceed_the_half_range() {
    for &(center, half) in &[(0.0, 7.0), (12.0, 43.0), (-3.5, 100.0)] {
        for t in ticks(center, half, 10.0) {
            assert!((t - center).abs() <= half + 1e-9);
        }
    }
}

#[test]
fn oversized_ranges_yield_no_ticks() {
    use scatterview::transform::MAX_TICKS;
    assert!(
        ticks(0.0, 1e9, 10.0).is_empty(),
        "an extreme span must not generate millions of tick positions"
    );
    // The widest range still inside the cap draws every tick.
    let widest = ticks(0.0, ((MAX_TICKS - 1) / 2) as f64 * 10.0, 10.0);
    assert_eq!(widest.len(), MAX_TICKS);
}

#[test]
fn degenerate_tick_inputs_yield_no_ticks() {
    assert!(ticks(0.0, 10.0, 0.0).is_empty());
    assert!(ticks(0.0, 10.0, -1.0).is_empty());
    assert!(ticks(f64::NAN, 10.0, 10.0).is_empty());
    assert!(ticks(0.0, f64::INFINITY, 10.0).is_empty());
}
