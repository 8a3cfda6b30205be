//! Integration tests for the catalog + session frame logic
//!
//! Drives the CPU side of the per-frame sequence end to end: selection
//! changes, clock advancement, and rotation-matrix composition against
//! the built-in catalog.

use std::f32::consts::FRAC_PI_2;

use hyperwire_core::{Catalog, CatalogError, Family, MatN, RenderSession, Selection};

const EPSILON: f32 = 1e-5;

fn session_at(family: Family, dimensions: usize) -> RenderSession {
    let catalog = Catalog::built_in().unwrap();
    RenderSession::new(catalog, Selection::new(family, dimensions)).unwrap()
}

#[test]
fn tesseract_quarter_turn_matches_schedule() {
    // The 4D hypercube's schedule is a single (1, 3) plane at 0.7 rad/s.
    // At t = π / 1.4 the composed matrix is a quarter turn in that plane.
    let mut session = session_at(Family::Hypercube, 4);
    session.advance(FRAC_PI_2 / 0.7);

    let m = session.rotation_matrix();
    assert!((m.get(1, 1)).abs() < EPSILON);
    assert!((m.get(1, 3) + 1.0).abs() < EPSILON);
    assert!((m.get(3, 1) - 1.0).abs() < EPSILON);
    assert!((m.get(3, 3)).abs() < EPSILON);
    assert!((m.get(0, 0) - 1.0).abs() < EPSILON);
    assert!((m.get(2, 2) - 1.0).abs() < EPSILON);
}

#[test]
fn five_cube_carries_two_rotation_blocks() {
    // 5D schedule: (1,3) at 0.5 and (0,4) at 0.3. After ten seconds the
    // two blocks hold angles 5.0 and 3.0, and axis 2 is untouched.
    let mut session = session_at(Family::Hypercube, 5);
    session.advance(10.0);

    let m = session.rotation_matrix();
    let a: f32 = 5.0;
    let b: f32 = 3.0;
    assert!((m.get(1, 1) - a.cos()).abs() < EPSILON);
    assert!((m.get(3, 1) - a.sin()).abs() < EPSILON);
    assert!((m.get(0, 0) - b.cos()).abs() < EPSILON);
    assert!((m.get(0, 4) + b.sin()).abs() < EPSILON);
    assert!((m.get(2, 2) - 1.0).abs() < EPSILON);
}

#[test]
fn unregistered_dimension_keeps_current_object() {
    let mut session = session_at(Family::Simplex, 4);
    let before = session.selection();

    let err = session.set_dimension(9).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::NotFound {
            family: Family::Simplex,
            dimensions: 9
        }
    ));
    assert_eq!(session.selection(), before);
    assert_eq!(session.current().name(), "4D Simplex");
}

#[test]
fn every_catalog_object_composes_an_orthogonal_matrix() {
    // Built-in schedules are disjoint, so every composed matrix must be
    // orthogonal at any timestamp.
    let catalog = Catalog::built_in().unwrap();
    for obj in catalog.iter() {
        let m = hyperwire_core::compose_rotation(
            obj.dimensions(),
            obj.schedule(),
            17.3,
            1.5,
        )
        .unwrap();
        let product = m.mul(&m.transpose());
        assert!(
            product.max_abs_diff(&MatN::identity(obj.dimensions())) < EPSILON,
            "{} is not orthogonal",
            obj.name()
        );
    }
}

#[test]
fn selection_walk_across_families_and_dimensions() {
    let mut session = session_at(Family::Hypercube, 2);

    for dims in 3..=8 {
        session.set_dimension(dims).unwrap();
        assert_eq!(session.current().dimensions(), dims);
    }
    session.cycle_family(true).unwrap();
    assert_eq!(session.current().name(), "8D Simplex");
    session.cycle_family(true).unwrap();
    assert_eq!(session.current().name(), "8D Cross-Polytope");

    // The 8D cross-polytope splits across two attribute groups.
    assert_eq!(session.current().num_attribute_groups(), 2);
    assert_eq!(session.current().stride_bytes(), 32);
}

#[test]
fn paused_session_keeps_matrix_stable() {
    let mut session = session_at(Family::CrossPolytope, 6);
    session.advance(2.0);
    session.toggle_paused();

    let before = session.rotation_matrix();
    session.advance(5.0);
    let after = session.rotation_matrix();
    assert_eq!(before.as_slice(), after.as_slice());
}
