//! Property-based tests for resilience pruning and the snapshot pipeline.
//!
//! This module uses proptest to verify the pruning contract over randomly
//! generated complexes and carrier-dimension tables, including:
//! - The strict threshold `dim < 2 - r` decides survival, nothing else
//! - Simplices survive exactly when all three corners survive
//! - Attribute maps are purged alongside deleted vertices
//! - Any real resilience value is handled, from no-op through full deletion
//! - `delayed_snapshot` equals the hand-composed tag/subdivide/prune pipeline

use chromatic::prelude::*;
use proptest::prelude::*;

// =============================================================================
// TEST CONFIGURATION
// =============================================================================

/// Strategy for generating finite f64 coordinates
fn finite_coord() -> impl Strategy<Value = f64> {
    -100.0..100.0
}

/// Strategy for generating color names from a small palette
fn color_name() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["red", "green", "blue", "yellow"]).prop_map(str::to_owned)
}

/// Strategy for generating a valid complex together with a carrier-dimension
/// table covering every vertex with a dimension in `0..=2`.
fn tagged_complex() -> impl Strategy<Value = (Complex<f64, String>, CarrierDimensions)> {
    (3_usize..=8).prop_flat_map(|vertex_count| {
        let ids: Vec<u64> = (0..vertex_count as u64).collect();
        (
            prop::collection::vec(prop::sample::subsequence(ids.clone(), 3), 1..=5),
            prop::collection::vec((finite_coord(), finite_coord()), vertex_count),
            prop::collection::vec(0.01_f64..1.0, vertex_count),
            prop::collection::vec(color_name(), vertex_count),
            prop::collection::vec(0_u8..=2, vertex_count),
        )
            .prop_map(move |(triples, positions, radii, colors, dims)| {
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
                let mut tags = CarrierDimensions::default();
                for (&id, dim) in ids.iter().zip(dims) {
                    tags.insert(VertexId::new(id), dim);
                }
                let complex =
                    Complex::new(vertices, simplexes, color_map, coordinates, radius_map);
                (complex, tags)
            })
    })
}

/// The vertices the threshold rule says must be deleted.
fn expected_doomed(
    complex: &Complex<f64, String>,
    tags: &CarrierDimensions,
    resilience: f64,
) -> VertexSet {
    let threshold = f64::from(MAX_CARRIER_DIMENSION) - resilience;
    complex
        .vertices()
        .iter()
        .copied()
        .filter(|&v| f64::from(tags.get(v).unwrap_or(0)) < threshold)
        .collect()
}

// =============================================================================
// THRESHOLD SEMANTICS
// =============================================================================

proptest! {
    /// Property: exactly the vertices below the threshold are deleted.
    #[test]
    fn prop_prune_deletes_exactly_the_sub_threshold_vertices(
        (mut complex, tags) in tagged_complex(),
        resilience in -1.0_f64..3.0,
    ) {
        let doomed = expected_doomed(&complex, &tags, resilience);
        let expected_survivors: VertexSet = complex
            .vertices()
            .iter()
            .copied()
            .filter(|v| !doomed.contains(v))
            .collect();

        complex.prune_by_resilience(resilience, tags);
        prop_assert_eq!(complex.vertices(), &expected_survivors);
    }

    /// Property: a simplex survives exactly when all three corners survive,
    /// and the surviving simplexes keep their input order.
    #[test]
    fn prop_simplexes_survive_with_their_corners(
        (mut complex, tags) in tagged_complex(),
        resilience in -1.0_f64..3.0,
    ) {
        let doomed = expected_doomed(&complex, &tags, resilience);
        let expected: Vec<Simplex> = complex
            .simplexes()
            .iter()
            .copied()
            .filter(|s| s.iter().all(|v| !doomed.contains(&v)))
            .collect();

        complex.prune_by_resilience(resilience, tags);
        prop_assert_eq!(complex.simplexes(), expected.as_slice());
    }

    /// Property: pruning leaves a structurally valid complex behind.
    #[test]
    fn prop_pruned_complex_is_valid(
        (mut complex, tags) in tagged_complex(),
        resilience in -1.0_f64..3.0,
    ) {
        complex.prune_by_resilience(resilience, tags);
        prop_assert!(complex.is_valid().is_ok());
    }

    /// Property: attribute entries are purged exactly with their vertices.
    #[test]
    fn prop_attributes_purged_with_their_vertices(
        (mut complex, tags) in tagged_complex(),
        resilience in -1.0_f64..3.0,
    ) {
        complex.prune_by_resilience(resilience, tags);
        let survivors = complex.number_of_vertices();
        prop_assert_eq!(complex.colors().len(), survivors);
        prop_assert_eq!(complex.coordinates().len(), survivors);
        prop_assert_eq!(complex.radii().len(), survivors);
        for &vertex in complex.vertices() {
            prop_assert!(complex.color_of(vertex).is_some());
            prop_assert!(complex.coordinate_of(vertex).is_some());
            prop_assert!(complex.radius_of(vertex).is_some());
        }
    }
}

// =============================================================================
// RESILIENCE EXTREMES
// =============================================================================

proptest! {
    /// Property: resilience at or above the top dimension deletes nothing.
    #[test]
    fn prop_full_resilience_is_identity(
        (mut complex, tags) in tagged_complex(),
        resilience in 2.0_f64..5.0,
    ) {
        let vertices_before = complex.vertices().clone();
        let simplexes_before = complex.simplexes().to_vec();

        complex.prune_by_resilience(resilience, tags);
        prop_assert_eq!(complex.vertices(), &vertices_before);
        prop_assert_eq!(complex.simplexes(), simplexes_before.as_slice());
    }

    /// Property: negative resilience gracefully empties the complex.
    #[test]
    fn prop_negative_resilience_empties_the_complex(
        (mut complex, tags) in tagged_complex(),
        resilience in -3.0_f64..-0.01,
    ) {
        complex.prune_by_resilience(resilience, tags);
        prop_assert!(complex.is_empty());
        prop_assert!(complex.colors().is_empty());
        prop_assert!(complex.coordinates().is_empty());
        prop_assert!(complex.radii().is_empty());
    }
}

// =============================================================================
// SNAPSHOT COMPOSITION
// =============================================================================

proptest! {
    /// Property: `delayed_snapshot` is the composition of a zeroed tag, two
    /// tagged rounds, and one prune.
    #[test]
    fn prop_snapshot_equals_manual_pipeline(
        (complex, _) in tagged_complex(),
        resilience in -1.0_f64..3.0,
    ) {
        let snapshot = complex.delayed_snapshot(resilience).unwrap();

        let tags = CarrierDimensions::zeroed(&complex);
        let (once, tags) = complex.subdivide_tagged(&tags).unwrap();
        let (mut twice, tags) = once.subdivide_tagged(&tags).unwrap();
        twice.prune_by_resilience(resilience, tags);

        prop_assert_eq!(snapshot.vertices(), twice.vertices());
        prop_assert_eq!(snapshot.simplexes(), twice.simplexes());
        prop_assert_eq!(snapshot.colors(), twice.colors());
        prop_assert_eq!(snapshot.coordinates(), twice.coordinates());
        prop_assert_eq!(snapshot.radii(), twice.radii());
    }
}
