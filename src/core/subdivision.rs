//! One round of standard chromatic subdivision.
//!
//! Every maximal simplex `(v1, v2, v3)` of the input complex is replaced by
//! thirteen child triangles drawn from the three original corners plus nine
//! freshly minted vertices: two per edge and three barycentric. The children
//! are emitted in a fixed shelling order given by [`SHELLING_TEMPLATE`], a
//! lookup table over vertex roles, so the output decomposition is identical
//! for every input triangle and across runs.
//!
//! Simplices are processed independently; a vertex shared by two input
//! triangles is kept as the shared corner, but each incident triangle mints
//! its own edge and barycentric copies. Fresh ids come from one monotone
//! counter per pass, seeded one past the largest existing id, so ids stay
//! globally unique within the output complex.
//!
//! The parent complex is never mutated: each pass copies the vertex set and
//! attribute maps and extends the copies. A failed pass therefore leaves no
//! partial state behind.
//!
//! # References
//!
//! Herlihy, Kozlov, Rajsbaum. *Distributed Computing Through Combinatorial
//! Topology*, chapter 3: the standard chromatic subdivision of a colored
//! simplicial complex.

use thiserror::Error;

use crate::core::collections::SmallBuffer;
use crate::core::complex::{
    AttributeKind, Complex, ComplexValidationError, Simplex, VertexId,
};
use crate::core::resilience::{CarrierDimensions, MAX_CARRIER_DIMENSION};
use crate::core::traits::color_value::ColorValue;
use crate::geometry::centroid::{three_centroid, two_centroid};
use crate::geometry::point::Point;
use crate::geometry::traits::coordinate::CoordinateScalar;

// =============================================================================
// CONSTANTS
// =============================================================================

/// Fresh vertices minted per input triangle: two per edge plus three
/// barycentric.
pub const MINTED_PER_SIMPLEX: usize = 9;

/// Child triangles emitted per input triangle.
pub const CHILDREN_PER_SIMPLEX: usize = 13;

// =============================================================================
// SHELLING TEMPLATE
// =============================================================================

/// The twelve vertex roles of one subdivided triangle.
///
/// `V1..V3` are the original corners. `E12a` and `E12b` are the two minted
/// vertices on the edge `(v1, v2)` (the letter gives the mint order on that
/// edge), likewise for the other edges. `C123a..C123c` are the barycentric
/// vertices, biased away from `v1`, `v2`, and `v3` respectively.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum CornerRole {
    V1,
    V2,
    V3,
    E12a,
    E12b,
    E23a,
    E23b,
    E31a,
    E31b,
    C123a,
    C123b,
    C123c,
}

/// The fixed decomposition of one triangle into its thirteen children, in
/// shelling order.
///
/// The table is data rather than thirteen hand-written constructor calls so
/// it can be checked in isolation: each row names three distinct roles, the
/// corners appear three times each, every edge vertex twice, every
/// barycentric vertex six times, and no row contains more than one original
/// corner.
const SHELLING_TEMPLATE: [[CornerRole; 3]; CHILDREN_PER_SIMPLEX] = {
    use CornerRole::{C123a, C123b, C123c, E12a, E12b, E23a, E23b, E31a, E31b, V1, V2, V3};
    [
        [V1, E12b, C123c],
        [V1, C123c, C123b],
        [V1, C123b, E31a],
        [E12b, C123c, E12a],
        [C123c, C123b, C123a],
        [C123b, E31a, E31b],
        [V3, E31b, C123b],
        [V3, C123b, C123a],
        [V3, C123a, E23a],
        [E23a, C123a, E23b],
        [V2, E23b, C123a],
        [V2, C123a, C123c],
        [V2, C123c, E12a],
    ]
};

// =============================================================================
// FRESH ID ALLOCATION
// =============================================================================

/// Monotone fresh-id counter for one subdivision pass.
///
/// Scoped to a single pass rather than shared process state, so passes are
/// reentrant and independently testable.
#[derive(Clone, Copy, Debug)]
struct VertexAllocator {
    next: u64,
}

impl VertexAllocator {
    /// An allocator whose first minted id is one past `max_id`, or 0 when the
    /// complex has no vertices yet.
    const fn starting_after(max_id: Option<VertexId>) -> Self {
        let next = match max_id {
            Some(id) => id.get() + 1,
            None => 0,
        };
        Self { next }
    }

    fn mint(&mut self) -> VertexId {
        let id = VertexId::new(self.next);
        self.next += 1;
        id
    }
}

/// The nine vertices minted for one parent triangle, by role.
///
/// Minted in the fixed order `e12a, e12b, e23a, e23b, e31a, e31b, c123a,
/// c123b, c123c`, which pins the numeric ids each role receives.
#[derive(Clone, Copy, Debug)]
struct MintedIds {
    e12a: VertexId,
    e12b: VertexId,
    e23a: VertexId,
    e23b: VertexId,
    e31a: VertexId,
    e31b: VertexId,
    c123a: VertexId,
    c123b: VertexId,
    c123c: VertexId,
}

impl MintedIds {
    fn mint(allocator: &mut VertexAllocator) -> Self {
        Self {
            e12a: allocator.mint(),
            e12b: allocator.mint(),
            e23a: allocator.mint(),
            e23b: allocator.mint(),
            e31a: allocator.mint(),
            e31b: allocator.mint(),
            c123a: allocator.mint(),
            c123b: allocator.mint(),
            c123c: allocator.mint(),
        }
    }

    /// Maps a template role to a concrete vertex id, given the parent's
    /// corners in order.
    const fn resolve(&self, corners: [VertexId; 3], role: CornerRole) -> VertexId {
        match role {
            CornerRole::V1 => corners[0],
            CornerRole::V2 => corners[1],
            CornerRole::V3 => corners[2],
            CornerRole::E12a => self.e12a,
            CornerRole::E12b => self.e12b,
            CornerRole::E23a => self.e23a,
            CornerRole::E23b => self.e23b,
            CornerRole::E31a => self.e31a,
            CornerRole::E31b => self.e31b,
            CornerRole::C123a => self.c123a,
            CornerRole::C123b => self.c123b,
            CornerRole::C123c => self.c123c,
        }
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors a subdivision pass can report.
///
/// A pass validates its input before minting anything and builds its output
/// aside, so on error the parent complex is untouched and no partial result
/// escapes.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum SubdivisionError {
    /// The input complex violates a structural invariant.
    #[error("invalid complex: {0}")]
    InvalidComplex(#[from] ComplexValidationError),
    /// A tagged pass found a simplex vertex without a carrier dimension.
    #[error("vertex {vertex} has no carrier dimension entry for a tagged subdivision round")]
    MissingCarrierDimension {
        /// The untagged vertex.
        vertex: VertexId,
    },
}

const fn missing(vertex: VertexId, attribute: AttributeKind) -> SubdivisionError {
    SubdivisionError::InvalidComplex(ComplexValidationError::MissingAttribute {
        vertex,
        attribute,
    })
}

// =============================================================================
// SUBDIVISION
// =============================================================================

impl<T, C> Complex<T, C>
where
    T: CoordinateScalar,
    C: ColorValue,
{
    /// Computes one round of standard chromatic subdivision.
    ///
    /// Returns a brand-new complex; `self` is never mutated. The output's
    /// simplex list contains exactly [`CHILDREN_PER_SIMPLEX`] triangles per
    /// input triangle, in input order; its vertex set is the input set plus
    /// [`MINTED_PER_SIMPLEX`] fresh ids per input triangle; colors,
    /// coordinates, and radii are copies of the input maps extended with
    /// entries for the minted vertices.
    ///
    /// # Errors
    ///
    /// [`SubdivisionError::InvalidComplex`] if the input violates a
    /// structural invariant. Validation runs before any minting, and the
    /// output is assembled aside, so a failed call changes nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chromatic::prelude::*;
    ///
    /// let complex: Complex<f64, String> = ComplexBuilder::default()
    ///     .vertices([0, 1, 2].map(VertexId::new).into_iter().collect())
    ///     .simplexes(vec![Simplex::from([0, 1, 2])])
    ///     .colors(
    ///         [(0, "red"), (1, "green"), (2, "blue")]
    ///             .map(|(id, c)| (VertexId::new(id), c.to_owned()))
    ///             .into_iter()
    ///             .collect(),
    ///     )
    ///     .coordinates(
    ///         [(0, [0.0, 0.0]), (1, [1.0, 0.0]), (2, [0.5, 0.866])]
    ///             .map(|(id, p)| (VertexId::new(id), p.into()))
    ///             .into_iter()
    ///             .collect(),
    ///     )
    ///     .radii(
    ///         [0, 1, 2]
    ///             .map(|id| (VertexId::new(id), 0.05))
    ///             .into_iter()
    ///             .collect(),
    ///     )
    ///     .build()
    ///     .unwrap();
    ///
    /// let subdivided = complex.subdivide().unwrap();
    /// assert_eq!(subdivided.number_of_vertices(), 12);
    /// assert_eq!(subdivided.number_of_simplexes(), 13);
    /// ```
    pub fn subdivide(&self) -> Result<Self, SubdivisionError> {
        self.subdivide_impl(None).map(|(complex, _)| complex)
    }

    /// Computes one tagged round of subdivision, propagating carrier
    /// dimensions.
    ///
    /// Every vertex of the input must have an entry in `dimensions`; the
    /// returned table keeps those entries and adds one per minted vertex:
    /// barycentric vertices get [`MAX_CARRIER_DIMENSION`], the two vertices
    /// on an edge get `max(1, dim(endpoint1), dim(endpoint2))`.
    ///
    /// # Errors
    ///
    /// As [`subdivide`](Complex::subdivide), plus
    /// [`SubdivisionError::MissingCarrierDimension`] when a simplex vertex
    /// has no dimension entry.
    pub fn subdivide_tagged(
        &self,
        dimensions: &CarrierDimensions,
    ) -> Result<(Self, CarrierDimensions), SubdivisionError> {
        self.subdivide_impl(Some(dimensions))
            .map(|(complex, dims)| (complex, dims.unwrap_or_default()))
    }

    fn subdivide_impl(
        &self,
        tags: Option<&CarrierDimensions>,
    ) -> Result<(Self, Option<CarrierDimensions>), SubdivisionError> {
        self.is_valid()?;

        let simplex_count = self.number_of_simplexes();
        let mut allocator = VertexAllocator::starting_after(self.max_vertex_id());

        // Copy-on-write: the parent's containers pass through by value.
        let mut vertices = self.vertices.clone();
        let mut colors = self.colors.clone();
        let mut coordinates = self.coordinates.clone();
        let mut radii = self.radii.clone();
        vertices.reserve(MINTED_PER_SIMPLEX * simplex_count);
        colors.reserve(MINTED_PER_SIMPLEX * simplex_count);
        coordinates.reserve(MINTED_PER_SIMPLEX * simplex_count);
        radii.reserve(MINTED_PER_SIMPLEX * simplex_count);
        let mut simplexes = Vec::with_capacity(CHILDREN_PER_SIMPLEX * simplex_count);
        let mut out_dims: Option<CarrierDimensions> = tags.cloned();

        let two = T::one() + T::one();

        for parent in &self.simplexes {
            let corners = *parent.vertices();
            let [v1, v2, v3] = corners;

            // Fetch every parent attribute up front so a defective simplex
            // fails before its ids are minted.
            let p1 = self
                .coordinate_of(v1)
                .ok_or_else(|| missing(v1, AttributeKind::Coordinate))?;
            let p2 = self
                .coordinate_of(v2)
                .ok_or_else(|| missing(v2, AttributeKind::Coordinate))?;
            let p3 = self
                .coordinate_of(v3)
                .ok_or_else(|| missing(v3, AttributeKind::Coordinate))?;
            let parent_colors = [
                self.color_of(v1)
                    .cloned()
                    .ok_or_else(|| missing(v1, AttributeKind::Color))?,
                self.color_of(v2)
                    .cloned()
                    .ok_or_else(|| missing(v2, AttributeKind::Color))?,
                self.color_of(v3)
                    .cloned()
                    .ok_or_else(|| missing(v3, AttributeKind::Color))?,
            ];
            let r1 = self
                .radius_of(v1)
                .ok_or_else(|| missing(v1, AttributeKind::Radius))?;
            let r2 = self
                .radius_of(v2)
                .ok_or_else(|| missing(v2, AttributeKind::Radius))?;
            let r3 = self
                .radius_of(v3)
                .ok_or_else(|| missing(v3, AttributeKind::Radius))?;
            let child_radius = r1.min(r2).min(r3) / two;

            let minted = MintedIds::mint(&mut allocator);

            // Edge vertices lean toward the second centroid argument; the
            // barycentric vertices rotate which corner they lean away from.
            // Each minted vertex inherits the color of one original corner.
            let plan: [(VertexId, Point<T>, usize); MINTED_PER_SIMPLEX] = [
                (minted.e12a, two_centroid(p1, p2), 0),
                (minted.e12b, two_centroid(p2, p1), 1),
                (minted.e23a, two_centroid(p2, p3), 1),
                (minted.e23b, two_centroid(p3, p2), 2),
                (minted.e31a, two_centroid(p3, p1), 2),
                (minted.e31b, two_centroid(p1, p3), 0),
                (minted.c123a, three_centroid(p1, p2, p3), 0),
                (minted.c123b, three_centroid(p2, p3, p1), 1),
                (minted.c123c, three_centroid(p3, p1, p2), 2),
            ];
            for (id, point, owner) in plan {
                vertices.insert(id);
                coordinates.insert(id, point);
                colors.insert(id, parent_colors[owner].clone());
                radii.insert(id, child_radius);
            }

            if let Some(dims) = out_dims.as_mut() {
                let d1 = dims
                    .get(v1)
                    .ok_or(SubdivisionError::MissingCarrierDimension { vertex: v1 })?;
                let d2 = dims
                    .get(v2)
                    .ok_or(SubdivisionError::MissingCarrierDimension { vertex: v2 })?;
                let d3 = dims
                    .get(v3)
                    .ok_or(SubdivisionError::MissingCarrierDimension { vertex: v3 })?;
                let d12 = d1.max(d2).max(1);
                let d23 = d2.max(d3).max(1);
                let d31 = d3.max(d1).max(1);
                dims.insert(minted.e12a, d12);
                dims.insert(minted.e12b, d12);
                dims.insert(minted.e23a, d23);
                dims.insert(minted.e23b, d23);
                dims.insert(minted.e31a, d31);
                dims.insert(minted.e31b, d31);
                dims.insert(minted.c123a, MAX_CARRIER_DIMENSION);
                dims.insert(minted.c123b, MAX_CARRIER_DIMENSION);
                dims.insert(minted.c123c, MAX_CARRIER_DIMENSION);
            }

            let children: SmallBuffer<Simplex, CHILDREN_PER_SIMPLEX> = SHELLING_TEMPLATE
                .iter()
                .map(|&[a, b, c]| {
                    Simplex::new(
                        minted.resolve(corners, a),
                        minted.resolve(corners, b),
                        minted.resolve(corners, c),
                    )
                })
                .collect();
            simplexes.extend(children);
        }

        Ok((
            Self::new(vertices, simplexes, colors, coordinates, radii),
            out_dims,
        ))
    }
}

// =============================================================================
// TESTS
// =============================================================================
