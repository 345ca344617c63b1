use std::f64::consts::{PI, TAU};

use super::approx_eq;
use crate::geom::{
    Grid2, MobiusSurface, SamplingOrientation, ShapeParameters, build_grid, build_grid_oriented,
    linspace,
};

fn params(radius: f64, width: f64, n: usize) -> ShapeParameters {
    ShapeParameters::new(radius, width, n).expect("valid parameters")
}

#[test]
fn linspace_includes_both_endpoints() {
    let values = linspace(0.0, TAU, 7);
    assert_eq!(values.len(), 7);
    assert_eq!(values[0], 0.0);
    assert_eq!(values[6], TAU);
    assert!(approx_eq(values[3], PI, 1e-12));

    assert!(linspace(0.0, 1.0, 0).is_empty());
    assert_eq!(linspace(2.0, 5.0, 1), vec![2.0]);
    assert_eq!(linspace(-0.2, 0.2, 2), vec![-0.2, 0.2]);
}

#[test]
fn grid_has_square_shape() {
    let (grid, coords) = build_grid(&params(1.0, 0.4, 12));
    assert_eq!(grid.u.shape(), (12, 12));
    assert_eq!(grid.v.shape(), (12, 12));
    assert_eq!(coords.x.shape(), (12, 12));
    assert_eq!(coords.y.shape(), (12, 12));
    assert_eq!(coords.z.shape(), (12, 12));
    assert_eq!(grid.resolution(), 12);
}

#[test]
fn grid_follows_meshgrid_convention() {
    let n = 9;
    let (grid, _) = build_grid(&params(1.0, 0.4, n));

    for i in 0..n {
        for j in 0..n {
            assert_eq!(grid.u.get(i, j), grid.u.get(0, j), "u must depend only on the column");
            assert_eq!(grid.v.get(i, j), grid.v.get(i, 0), "v must depend only on the row");
        }
    }

    assert_eq!(grid.u.get(0, 0), 0.0);
    assert_eq!(grid.u.get(0, n - 1), TAU);
    assert!(approx_eq(grid.v.get(0, 0), -0.2, 1e-15));
    assert!(approx_eq(grid.v.get(n - 1, 0), 0.2, 1e-15));
}

#[test]
fn coordinates_are_images_of_the_parametrization() {
    let shape = params(1.5, 0.6, 17);
    let (grid, coords) = build_grid(&shape);
    let surface = MobiusSurface::new(&shape);

    for i in 0..17 {
        for j in 0..17 {
            let expected = surface.point_at(grid.u.get(i, j), grid.v.get(i, j));
            assert_eq!(coords.point(i, j), expected);
        }
    }
}

#[test]
fn parametrization_matches_closed_form() {
    let surface = MobiusSurface::new(&params(2.0, 1.0, 2));

    // u = 0: the strip crosses the x axis radially.
    let p = surface.point_at(0.0, 0.5);
    assert!(approx_eq(p.x, 2.5, 1e-12));
    assert!(approx_eq(p.y, 0.0, 1e-12));
    assert!(approx_eq(p.z, 0.0, 1e-12));

    // u = π: cos(u/2) = 0, so the cross-section is vertical.
    let p = surface.point_at(PI, 0.5);
    assert!(approx_eq(p.x, -2.0, 1e-12));
    assert!(approx_eq(p.y, 0.0, 1e-12));
    assert!(approx_eq(p.z, 0.5, 1e-12));

    // u = 2π: the half twist flips the cross-section.
    let p = surface.point_at(TAU, 0.5);
    assert!(approx_eq(p.x, 1.5, 1e-12));
    assert!(approx_eq(p.z, 0.0, 1e-12));
}

#[test]
fn center_line_is_the_circle_of_radius_r() {
    let n = 33;
    let (_, coords) = build_grid(&params(3.0, 0.2, n));
    let mid = n / 2;
    for j in 0..n {
        let p = coords.point(mid, j);
        assert!(approx_eq(p.x.hypot(p.y), 3.0, 1e-12));
        assert!(approx_eq(p.z, 0.0, 1e-12));
    }
}

#[test]
fn reversed_orientation_mirrors_columns() {
    let shape = params(1.0, 0.4, 11);
    let (forward, forward_coords) = build_grid(&shape);
    let (reversed, reversed_coords) = build_grid_oriented(&shape, SamplingOrientation::Reversed);

    assert!(approx_eq(reversed.u_step, -forward.u_step, 0.0));
    assert!(approx_eq(reversed.v_step, forward.v_step, 0.0));
    for i in 0..11 {
        for j in 0..11 {
            assert!(approx_eq(reversed.u.get(i, j), forward.u.get(i, 10 - j), 1e-12));
            let a = reversed_coords.point(i, j);
            let b = forward_coords.point(i, 10 - j);
            assert!(a.distance_to(b) < 1e-12);
        }
    }
}

#[test]
fn grid2_accessors_agree() {
    let grid = Grid2::from_fn(2, 3, |i, j| (i * 10 + j) as f64);
    assert_eq!(grid.row(1), &[10.0, 11.0, 12.0]);
    assert_eq!(grid.as_slice().len(), 6);
    assert_eq!(grid.to_nested(), vec![vec![0.0, 1.0, 2.0], vec![10.0, 11.0, 12.0]]);
    assert!(approx_eq(grid.sum(), 36.0, 0.0));
}
