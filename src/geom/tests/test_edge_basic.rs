use std::f64::consts::TAU;

use super::{approx_eq, rel_close};
use crate::geom::{
    BoundarySide, Point3, ShapeParameters, boundary_curve, build_grid, estimate_edge_length,
    polyline_length,
};

fn params(radius: f64, width: f64, n: usize) -> ShapeParameters {
    ShapeParameters::new(radius, width, n).expect("valid parameters")
}

#[test]
fn polyline_length_sums_segments() {
    let points = [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(3.0, 0.0, 0.0),
        Point3::new(3.0, 4.0, 0.0),
        Point3::new(3.0, 4.0, 2.0),
    ];
    assert!(approx_eq(polyline_length(&points), 9.0, 1e-12));
    assert_eq!(polyline_length(&points[..1]), 0.0);
    assert_eq!(polyline_length(&[]), 0.0);
}

#[test]
fn degenerate_polyline_has_positive_zero_length() {
    let single = [Point3::new(1.0, 2.0, 3.0)];
    assert!(polyline_length(&single).is_sign_positive());
    assert!(polyline_length(&[]).is_sign_positive());
}

#[test]
fn boundary_curves_sit_on_the_strip_edges() {
    let shape = params(1.0, 0.4, 25);
    let lower = boundary_curve(&shape, BoundarySide::Lower);
    let upper = boundary_curve(&shape, BoundarySide::Upper);

    assert_eq!(lower.side, BoundarySide::Lower);
    assert_eq!(lower.points.len(), 25);
    assert_eq!(upper.points.len(), 25);

    // u = 0: edges at radial distance R ∓ w/2.
    assert!(approx_eq(lower.points[0].x, 0.8, 1e-12));
    assert!(approx_eq(upper.points[0].x, 1.2, 1e-12));

    // u = 2π: the half twist swaps them.
    assert!(lower.points[24].distance_to(upper.points[0]) < 1e-12);
    assert!(upper.points[24].distance_to(lower.points[0]) < 1e-12);
}

#[test]
fn boundary_curves_match_grid_edge_rows() {
    let shape = params(1.3, 0.5, 16);
    let (_, coords) = build_grid(&shape);
    let lower = boundary_curve(&shape, BoundarySide::Lower);
    let upper = boundary_curve(&shape, BoundarySide::Upper);

    for j in 0..16 {
        assert!(lower.points[j].distance_to(coords.point(0, j)) < 1e-12);
        assert!(upper.points[j].distance_to(coords.point(15, j)) < 1e-12);
    }
}

#[test]
fn edge_length_is_sum_of_both_boundaries() {
    let shape = params(1.0, 0.4, 120);
    let total = estimate_edge_length(&shape);
    let lower = boundary_curve(&shape, BoundarySide::Lower).length();
    let upper = boundary_curve(&shape, BoundarySide::Upper).length();
    assert!(approx_eq(total, lower + upper, 1e-12));
    // The two halves are mirror images of each other.
    assert!(rel_close(lower, upper, 1e-9));
}

#[test]
fn reference_strip_edge_is_in_expected_range() {
    let edge = estimate_edge_length(&params(1.0, 0.4, 300));
    assert!((12.5..=12.9).contains(&edge), "edge = {edge}");
    assert!(rel_close(edge, 12.630_087_567, 1e-6), "edge = {edge}");
}

#[test]
fn minimum_resolution_gives_one_chord_per_edge() {
    // With two samples each edge is the chord from u = 0 to u = 2π, length w.
    let edge = estimate_edge_length(&params(1.0, 0.4, 2));
    assert!(edge.is_finite());
    assert!(approx_eq(edge, 0.8, 1e-12), "edge = {edge}");
}

#[test]
fn thin_strip_edge_approaches_twice_the_center_circle() {
    let radius = 2.0;
    let edge = estimate_edge_length(&params(radius, 1e-6, 2000));
    assert!(rel_close(edge, 2.0 * TAU * radius, 1e-4), "edge = {edge}");
}
