//! Property-based tests for one round of chromatic subdivision.
//!
//! This module uses proptest to verify the structural contract of
//! `subdivide` over randomly generated valid complexes, including:
//! - Input immutability (the parent complex is bit-identical afterwards)
//! - Exact child and minted-vertex counts (13 and 9 per input triangle)
//! - Freshness and global distinctness of minted vertex ids
//! - Attribute derivation: centroid coordinates, color ownership, radius
//!   halving
//! - Carrier-dimension assignment in tagged rounds

use approx::assert_relative_eq;
use chromatic::prelude::*;
use proptest::prelude::*;

// =============================================================================
// TEST CONFIGURATION
// =============================================================================

/// Strategy for generating finite coordinates away from overflow territory
fn finite_coord() -> impl Strategy<Value = f64> {
    -100.0..100.0
}

/// Strategy for generating color names from a small palette
fn color_name() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["red", "green", "blue", "yellow", "purple"]).prop_map(str::to_owned)
}

/// Strategy for generating valid complexes: 3-9 vertices with full attribute
/// maps and 1-6 triangles over distinct vertex triples.
fn complex_strategy() -> impl Strategy<Value = Complex<f64, String>> {
    (3_usize..=9).prop_flat_map(|vertex_count| {
        let ids: Vec<u64> = (0..vertex_count as u64).collect();
        (
            prop::collection::vec(prop::sample::subsequence(ids.clone(), 3), 1..=6),
            prop::collection::vec((finite_coord(), finite_coord()), vertex_count),
            prop::collection::vec(0.01_f64..1.0, vertex_count),
            prop::collection::vec(color_name(), vertex_count),
        )
            .prop_map(move |(triples, positions, radii, colors)| {
                let vertices: VertexSet = ids.iter().copied().map(VertexId::new).collect();
                let simplexes: Vec<Simplex> = triples
                    .into_iter()
                    .map(|t| Simplex::from([t[0], t[1], t[2]]))
                    .collect();
                let coordinates: CoordinateMap<f64> = ids
                    .iter()
                    .zip(positions)
                    .map(|(&id, (x, y))| (VertexId::new(id), Point::new(x, y)))
                    .collect();
                let radius_map: RadiusMap<f64> = ids
                    .iter()
                    .zip(radii)
                    .map(|(&id, r)| (VertexId::new(id), r))
                    .collect();
                let color_map: ColorMap<String> = ids
                    .iter()
                    .zip(colors)
                    .map(|(&id, c)| (VertexId::new(id), c))
                    .collect();
                Complex::new(vertices, simplexes, color_map, coordinates, radius_map)
            })
    })
}

// =============================================================================
// IMMUTABILITY AND COUNTS
// =============================================================================

proptest! {
    /// Property: subdivide never mutates its input.
    #[test]
    fn prop_subdivide_never_mutates_input(complex in complex_strategy()) {
        let vertices_before = complex.vertices().clone();
        let simplexes_before = complex.simplexes().to_vec();
        let colors_before = complex.colors().clone();
        let coordinates_before = complex.coordinates().clone();
        let radii_before = complex.radii().clone();

        let _child = complex.subdivide().unwrap();

        prop_assert_eq!(complex.vertices(), &vertices_before);
        prop_assert_eq!(complex.simplexes(), simplexes_before.as_slice());
        prop_assert_eq!(complex.colors(), &colors_before);
        prop_assert_eq!(complex.coordinates(), &coordinates_before);
        prop_assert_eq!(complex.radii(), &radii_before);
    }

    /// Property: exactly 13 children and 9 minted vertices per input triangle.
    #[test]
    fn prop_subdivide_counts(complex in complex_strategy()) {
        let simplex_count = complex.number_of_simplexes();
        let vertex_count = complex.number_of_vertices();

        let child = complex.subdivide().unwrap();

        prop_assert_eq!(
            child.number_of_simplexes(),
            CHILDREN_PER_SIMPLEX * simplex_count,
            "every triangle is replaced by exactly 13 children"
        );
        prop_assert_eq!(
            child.number_of_vertices(),
            vertex_count + MINTED_PER_SIMPLEX * simplex_count,
            "every triangle mints exactly 9 vertices"
        );
    }

    /// Property: minted ids are strictly greater than every pre-existing id.
    #[test]
    fn prop_minted_ids_are_fresh(complex in complex_strategy()) {
        let max_before = complex.max_vertex_id().unwrap();
        let child = complex.subdivide().unwrap();

        let minted: Vec<VertexId> = child
            .vertices()
            .iter()
            .copied()
            .filter(|v| !complex.vertices().contains(v))
            .collect();
        prop_assert_eq!(
            minted.len(),
            MINTED_PER_SIMPLEX * complex.number_of_simplexes()
        );
        for id in minted {
            prop_assert!(id > max_before, "minted id {} is not fresh", id);
        }
    }

    /// Property: the output complex satisfies every structural invariant.
    #[test]
    fn prop_subdivide_output_is_valid(complex in complex_strategy()) {
        let child = complex.subdivide().unwrap();
        prop_assert!(child.is_valid().is_ok());
    }
}

// =============================================================================
// ATTRIBUTE DERIVATION
// =============================================================================

proptest! {
    /// Property: minted coordinates, colors, and radii follow the fixed
    /// derivation rules, block by block in input-simplex order.
    #[test]
    fn prop_minted_attributes_follow_derivation_rules(complex in complex_strategy()) {
        let base = complex.max_vertex_id().unwrap().get() + 1;
        let child = complex.subdivide().unwrap();

        for (index, parent) in complex.simplexes().iter().enumerate() {
            let [v1, v2, v3] = *parent.vertices();
            let start = base + (MINTED_PER_SIMPLEX * index) as u64;
            let minted: Vec<VertexId> =
                (start..start + MINTED_PER_SIMPLEX as u64).map(VertexId::new).collect();

            let p1 = complex.coordinate_of(v1).unwrap();
            let p2 = complex.coordinate_of(v2).unwrap();
            let p3 = complex.coordinate_of(v3).unwrap();

            // Mint order: e12a, e12b, e23a, e23b, e31a, e31b, c123a..c123c.
            let expected_positions = [
                two_centroid(p1, p2),
                two_centroid(p2, p1),
                two_centroid(p2, p3),
                two_centroid(p3, p2),
                two_centroid(p3, p1),
                two_centroid(p1, p3),
                three_centroid(p1, p2, p3),
                three_centroid(p2, p3, p1),
                three_centroid(p3, p1, p2),
            ];
            for (&id, expected) in minted.iter().zip(expected_positions) {
                let got = child.coordinate_of(id).unwrap();
                assert_relative_eq!(got.x(), expected.x(), epsilon = 1e-9);
                assert_relative_eq!(got.y(), expected.y(), epsilon = 1e-9);
            }

            let owners = [v1, v2, v2, v3, v3, v1, v1, v2, v3];
            for (&id, owner) in minted.iter().zip(owners) {
                prop_assert_eq!(
                    child.color_of(id),
                    complex.color_of(owner),
                    "vertex {} should inherit the color of {}",
                    id,
                    owner
                );
            }

            let r1 = complex.radius_of(v1).unwrap();
            let r2 = complex.radius_of(v2).unwrap();
            let r3 = complex.radius_of(v3).unwrap();
            let expected_radius = r1.min(r2).min(r3) / 2.0;
            for &id in &minted {
                assert_relative_eq!(child.radius_of(id).unwrap(), expected_radius);
            }
        }
    }

    /// Property: each block of 13 children draws only on its parent's three
    /// corners and its own nine minted vertices, starting with the corner
    /// triangle at `v1`.
    #[test]
    fn prop_children_stay_in_their_family(complex in complex_strategy()) {
        let base = complex.max_vertex_id().unwrap().get() + 1;
        let child = complex.subdivide().unwrap();

        for (index, parent) in complex.simplexes().iter().enumerate() {
            let [v1, v2, v3] = *parent.vertices();
            let start = base + (MINTED_PER_SIMPLEX * index) as u64;
            let family: FastHashSet<VertexId> = [v1, v2, v3]
                .into_iter()
                .chain((start..start + MINTED_PER_SIMPLEX as u64).map(VertexId::new))
                .collect();

            let block =
                &child.simplexes()[CHILDREN_PER_SIMPLEX * index..CHILDREN_PER_SIMPLEX * (index + 1)];
            for simplex in block {
                for vertex in simplex.iter() {
                    prop_assert!(
                        family.contains(&vertex),
                        "child {:?} of simplex {} uses out-of-family vertex {}",
                        simplex,
                        index,
                        vertex
                    );
                }
            }

            // The first child in shelling order is (v1, e12b, c123c).
            let e12b = VertexId::new(start + 1);
            let c123c = VertexId::new(start + 8);
            prop_assert_eq!(block[0], Simplex::new(v1, e12b, c123c));
        }
    }
}

// =============================================================================
// TAGGED ROUNDS
// =============================================================================

proptest! {
    /// Property: a tagged round tags barycentric vertices 2, edge vertices
    /// `max(1, endpoint dims)`, and leaves original tags untouched.
    #[test]
    fn prop_tagged_round_dimension_assignment(complex in complex_strategy()) {
        let base = complex.max_vertex_id().unwrap().get() + 1;
        let tags = CarrierDimensions::zeroed(&complex);
        let (child, dims) = complex.subdivide_tagged(&tags).unwrap();

        prop_assert_eq!(dims.len(), child.number_of_vertices());
        for &vertex in complex.vertices() {
            prop_assert_eq!(dims.get(vertex), Some(0), "original tags stay 0");
        }
        for index in 0..complex.number_of_simplexes() {
            let start = base + (MINTED_PER_SIMPLEX * index) as u64;
            // With all-zero parents, every edge vertex floors at dimension 1.
            for offset in 0..6 {
                prop_assert_eq!(dims.get(VertexId::new(start + offset)), Some(1));
            }
            for offset in 6..9 {
                prop_assert_eq!(
                    dims.get(VertexId::new(start + offset)),
                    Some(MAX_CARRIER_DIMENSION)
                );
            }
        }
    }

    /// Property: tagged and untagged rounds build the same complex.
    #[test]
    fn prop_tagged_round_matches_untagged(complex in complex_strategy()) {
        let tags = CarrierDimensions::zeroed(&complex);
        let (tagged, _) = complex.subdivide_tagged(&tags).unwrap();
        let untagged = complex.subdivide().unwrap();

        prop_assert_eq!(tagged.vertices(), untagged.vertices());
        prop_assert_eq!(tagged.simplexes(), untagged.simplexes());
        prop_assert_eq!(tagged.colors(), untagged.colors());
        prop_assert_eq!(tagged.coordinates(), untagged.coordinates());
        prop_assert_eq!(tagged.radii(), untagged.radii());
    }
}
