//! Combinatorial wireframe generation for regular polytopes
//!
//! Each generator returns a flat line-list: consecutive pairs of
//! N-component points, one pair per edge, ready for upload as a vertex
//! buffer drawn with a lines primitive. Vertex count is therefore always
//! twice the edge count, and the float count is divisible by `2 * n`.
//!
//! Corner placement follows the conventions of the classic constructions:
//! hypercube corners at ±1 per axis, cross-polytope corners at ±eᵢ, and
//! the regular simplex built at unit circumradius then rescaled to edge
//! length 2 so all three families sit at comparable sizes before the
//! per-object display scale is applied.

/// Number of edges of the N-hypercube: n · 2^(n-1).
pub fn hypercube_edge_count(n: usize) -> usize {
    n * (1 << (n - 1))
}

/// Number of edges of the N-simplex: C(n+1, 2).
pub fn simplex_edge_count(n: usize) -> usize {
    (n + 1) * n / 2
}

/// Number of edges of the N-cross-polytope: 2n(n-1).
pub fn cross_polytope_edge_count(n: usize) -> usize {
    2 * n * (n - 1)
}

/// Line-list wireframe of the N-hypercube with corners at ±1.
///
/// Corner `v` (a bit pattern) has coordinate `a` equal to +1 when bit `a`
/// of `v` is set, -1 otherwise. Two corners share an edge exactly when
/// they differ in a single bit.
///
/// # Panics
/// Panics if `n < 2`.
pub fn hypercube(n: usize) -> Vec<f32> {
    assert!(n >= 2, "hypercube requires dimension >= 2");
    let corner_count: usize = 1 << n;
    let mut out = Vec::with_capacity(hypercube_edge_count(n) * 2 * n);
    for v in 0..corner_count {
        for axis in 0..n {
            let bit = 1usize << axis;
            if v & bit == 0 {
                push_corner(&mut out, v, n);
                push_corner(&mut out, v | bit, n);
            }
        }
    }
    out
}

fn push_corner(out: &mut Vec<f32>, corner: usize, n: usize) {
    for axis in 0..n {
        out.push(if corner & (1 << axis) != 0 { 1.0 } else { -1.0 });
    }
}

/// Line-list wireframe of the regular N-simplex, edge length 2.
///
/// The n+1 vertices are constructed iteratively at unit circumradius so
/// that every pair has dot product -1/n, then rescaled. A simplex is a
/// complete graph: every vertex connects to every other.
///
/// # Panics
/// Panics if `n < 2`.
pub fn simplex(n: usize) -> Vec<f32> {
    assert!(n >= 2, "simplex requires dimension >= 2");
    let verts = simplex_vertices(n);
    let mut out = Vec::with_capacity(simplex_edge_count(n) * 2 * n);
    for i in 0..verts.len() {
        for j in (i + 1)..verts.len() {
            out.extend_from_slice(&verts[i]);
            out.extend_from_slice(&verts[j]);
        }
    }
    out
}

/// The n+1 vertices of the regular N-simplex, edge length 2.
fn simplex_vertices(n: usize) -> Vec<Vec<f32>> {
    let count = n + 1;
    let mut verts = vec![vec![0.0f32; n]; count];

    // Column by column: fix vertex i's diagonal entry from |vᵢ| = 1, then
    // give every later vertex the shared coordinate that keeps
    // vᵢ · vₖ = -1/n. Later vertices all share the same prefix, so one
    // value serves them all.
    for i in 0..n {
        let mut sum_sq = 0.0;
        for j in 0..i {
            sum_sq += verts[i][j] * verts[i][j];
        }
        let diag = (1.0 - sum_sq).sqrt();
        verts[i][i] = diag;

        let mut dot = 0.0;
        for j in 0..i {
            dot += verts[i][j] * verts[i + 1][j];
        }
        let shared = (-1.0 / n as f32 - dot) / diag;
        for vert in verts.iter_mut().skip(i + 1) {
            vert[i] = shared;
        }
    }

    // Unit circumradius gives edge length sqrt(2(n+1)/n); rescale to 2.
    let factor = (2.0 * n as f32 / (n as f32 + 1.0)).sqrt();
    for vert in &mut verts {
        for c in vert.iter_mut() {
            *c *= factor;
        }
    }
    verts
}

/// Line-list wireframe of the N-cross-polytope with corners at ±eᵢ.
///
/// Corner 2a sits at +1 on axis a, corner 2a+1 at -1. Every pair of
/// corners shares an edge except a corner and its own negation.
///
/// # Panics
/// Panics if `n < 2`.
pub fn cross_polytope(n: usize) -> Vec<f32> {
    assert!(n >= 2, "cross-polytope requires dimension >= 2");
    let corner_count = 2 * n;
    let corner = |idx: usize| -> Vec<f32> {
        let mut c = vec![0.0f32; n];
        c[idx / 2] = if idx % 2 == 0 { 1.0 } else { -1.0 };
        c
    };

    let mut out = Vec::with_capacity(cross_polytope_edge_count(n) * 2 * n);
    for i in 0..corner_count {
        for j in (i + 1)..corner_count {
            // j == i+1 with even i is the antipodal pair on axis i/2.
            if j == i + 1 && i % 2 == 0 {
                continue;
            }
            out.extend(corner(i));
            out.extend(corner(j));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn edge_points(data: &[f32], n: usize) -> Vec<(&[f32], &[f32])> {
        data.chunks(2 * n).map(|seg| seg.split_at(n)).collect()
    }

    fn dist(a: &[f32], b: &[f32]) -> f32 {
        a.iter()
            .zip(b)
            .map(|(x, y)| (x - y) * (x - y))
            .sum::<f32>()
            .sqrt()
    }

    #[test]
    fn hypercube_counts() {
        // Square: 4 edges. Cube: 12. Tesseract: 32. 7-cube: 448.
        assert_eq!(hypercube(2).len(), 4 * 2 * 2);
        assert_eq!(hypercube(3).len(), 12 * 2 * 3);
        assert_eq!(hypercube(4).len(), 32 * 2 * 4);
        assert_eq!(hypercube(7).len(), 448 * 2 * 7);
    }

    #[test]
    fn hypercube_edges_differ_in_one_coordinate() {
        let n = 4;
        let data = hypercube(n);
        for (a, b) in edge_points(&data, n) {
            let differing = a.iter().zip(b).filter(|(x, y)| x != y).count();
            assert_eq!(differing, 1);
        }
    }

    #[test]
    fn hypercube_corners_are_unit_cube() {
        for c in hypercube(5) {
            assert!(c == 1.0 || c == -1.0);
        }
    }

    #[test]
    fn simplex_counts() {
        // Triangle: 3 edges. Tetrahedron: 6. 4-simplex: 10. 8-simplex: 36.
        assert_eq!(simplex(2).len(), 3 * 2 * 2);
        assert_eq!(simplex(3).len(), 6 * 2 * 3);
        assert_eq!(simplex(4).len(), 10 * 2 * 4);
        assert_eq!(simplex(8).len(), 36 * 2 * 8);
    }

    #[test]
    fn simplex_edges_all_have_length_two() {
        for n in 2..=8 {
            let data = simplex(n);
            for (a, b) in edge_points(&data, n) {
                let d = dist(a, b);
                assert!(
                    (d - 2.0).abs() < EPSILON,
                    "{}-simplex edge length {} != 2",
                    n,
                    d
                );
            }
        }
    }

    #[test]
    fn simplex_is_centered() {
        let n = 5;
        let verts = simplex_vertices(n);
        for axis in 0..n {
            let sum: f32 = verts.iter().map(|v| v[axis]).sum();
            assert!(sum.abs() < EPSILON, "axis {} centroid {}", axis, sum);
        }
    }

    #[test]
    fn cross_polytope_counts() {
        // 2D: 4 edges (a square). 3D octahedron: 12. 4D 16-cell: 24.
        assert_eq!(cross_polytope(2).len(), 4 * 2 * 2);
        assert_eq!(cross_polytope(3).len(), 12 * 2 * 3);
        assert_eq!(cross_polytope(4).len(), 24 * 2 * 4);
    }

    #[test]
    fn cross_polytope_excludes_antipodal_pairs() {
        let n = 4;
        let data = cross_polytope(n);
        for (a, b) in edge_points(&data, n) {
            let antipodal = a.iter().zip(b).all(|(x, y)| x == &-y);
            assert!(!antipodal, "antipodal edge {:?} -> {:?}", a, b);
        }
    }

    #[test]
    fn line_lists_satisfy_segment_invariant() {
        for n in 2..=8 {
            assert_eq!(hypercube(n).len() % (2 * n), 0);
            assert_eq!(simplex(n).len() % (2 * n), 0);
            assert_eq!(cross_polytope(n).len() % (2 * n), 0);
        }
    }
}
