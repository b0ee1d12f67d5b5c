//! Carrier dimensions and resilience pruning.
//!
//! A tagged subdivision round records, for every vertex, the dimension of
//! the smallest face of the original triangle carrying it: 0 for original
//! corners, 1 for vertices minted interior to an edge, 2 for barycentric
//! vertices. Pruning by resilience `r` deletes every vertex whose carrier
//! dimension falls below `2 - r` along with the simplices containing one,
//! which models executions where up to `r` processes may fail.
//! [`Complex::delayed_snapshot`] packages the standard pipeline: tag
//! everything 0, subdivide twice, prune.

use serde::{Deserialize, Serialize};

use crate::core::collections::{FastHashMap, FastHashSet};
use crate::core::complex::{Complex, VertexId};
use crate::core::subdivision::SubdivisionError;
use crate::core::traits::color_value::ColorValue;
use crate::geometry::traits::coordinate::CoordinateScalar;

/// Largest carrier dimension a vertex can have in a 2-dimensional complex.
pub const MAX_CARRIER_DIMENSION: u8 = 2;

// =============================================================================
// CARRIER DIMENSIONS
// =============================================================================

/// Side-table mapping each vertex to the dimension of its carrier face.
///
/// Kept separate from [`Complex`] so untagged pipelines carry no tagging
/// state; tagged rounds thread the table alongside the complex and
/// [`Complex::subdivide_tagged`] extends it with entries for minted vertices.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierDimensions {
    dimensions: FastHashMap<VertexId, u8>,
}

impl CarrierDimensions {
    /// A table assigning dimension 0 to every vertex of `complex`, the seed
    /// for a fresh sequence of tagged rounds.
    #[must_use]
    pub fn zeroed<T, C>(complex: &Complex<T, C>) -> Self
    where
        T: CoordinateScalar,
        C: ColorValue,
    {
        Self {
            dimensions: complex.vertices().iter().map(|&vertex| (vertex, 0)).collect(),
        }
    }

    /// The carrier dimension recorded for `vertex`, if any.
    #[must_use]
    pub fn get(&self, vertex: VertexId) -> Option<u8> {
        self.dimensions.get(&vertex).copied()
    }

    /// Records `dimension` for `vertex`, returning the previous entry.
    pub fn insert(&mut self, vertex: VertexId, dimension: u8) -> Option<u8> {
        self.dimensions.insert(vertex, dimension)
    }

    /// Number of tagged vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dimensions.len()
    }

    /// `true` when no vertex is tagged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }

    /// Iterates over `(vertex, dimension)` entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, u8)> + '_ {
        self.dimensions.iter().map(|(&vertex, &dim)| (vertex, dim))
    }
}

// =============================================================================
// PRUNING
// =============================================================================

impl<T, C> Complex<T, C>
where
    T: CoordinateScalar,
    C: ColorValue,
{
    /// Deletes every vertex that cannot survive `resilience` failures.
    ///
    /// A vertex is deleted when its carrier dimension is strictly below
    /// `2.0 - resilience`; a vertex absent from `dimensions` counts as
    /// dimension 0. Every simplex containing a deleted vertex is dropped,
    /// and the deleted vertices' color, coordinate, and radius entries are
    /// purged with them. The side-table is consumed.
    ///
    /// Any finite `resilience` is meaningful: values at or above `2.0`
    /// delete nothing, values below `0.0` empty the complex.
    pub fn prune_by_resilience(&mut self, resilience: f64, dimensions: CarrierDimensions) {
        let threshold = f64::from(MAX_CARRIER_DIMENSION) - resilience;
        let doomed: FastHashSet<VertexId> = self
            .vertices
            .iter()
            .copied()
            .filter(|&vertex| {
                let dim = dimensions.get(vertex).unwrap_or(0);
                f64::from(dim) < threshold
            })
            .collect();
        if doomed.is_empty() {
            return;
        }
        self.simplexes
            .retain(|simplex| !simplex.iter().any(|vertex| doomed.contains(&vertex)));
        self.vertices.retain(|vertex| !doomed.contains(vertex));
        self.colors.retain(|vertex, _| !doomed.contains(vertex));
        self.coordinates.retain(|vertex, _| !doomed.contains(vertex));
        self.radii.retain(|vertex, _| !doomed.contains(vertex));
    }

    /// The `resilience`-pruned two-round chromatic subdivision of `self`.
    ///
    /// Seeds a zeroed [`CarrierDimensions`], runs two tagged rounds, and
    /// prunes the result in place before returning it. `self` is untouched.
    ///
    /// # Errors
    ///
    /// Whatever the underlying tagged rounds report; see
    /// [`Complex::subdivide_tagged`].
    pub fn delayed_snapshot(&self, resilience: f64) -> Result<Self, SubdivisionError> {
        let tags = CarrierDimensions::zeroed(self);
        let (once, tags) = self.subdivide_tagged(&tags)?;
        let (mut twice, tags) = once.subdivide_tagged(&tags)?;
        twice.prune_by_resilience(resilience, tags);
        Ok(twice)
    }
}

// =============================================================================
// TESTS
// =============================================================================
