//! The central `Complex` entity: a 2-dimensional simplicial complex with
//! per-vertex colors, coordinates, and radii.
//!
//! A complex is created fully formed (constructor or builder), derived
//! immutably by [`subdivide`](Complex::subdivide), and mutated in place only
//! by [`prune_by_resilience`](Complex::prune_by_resilience). Construction does
//! not validate the caller's data; validation is opt-in through
//! [`is_valid`](Complex::is_valid) and
//! [`validation_report`](Complex::validation_report), and
//! [`subdivide`](Complex::subdivide) runs the same checks up front so a
//! malformed complex fails fast instead of minting a partial result.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::core::collections::{ColorMap, CoordinateMap, FastHashSet, RadiusMap, VertexSet};
use crate::core::traits::color_value::ColorValue;
use crate::geometry::point::Point;
use crate::geometry::traits::coordinate::CoordinateScalar;

// =============================================================================
// VERTEX IDENTIFIERS
// =============================================================================

/// Identifier of a vertex within one complex.
///
/// Ids are plain integers, unique within a complex and minted in strictly
/// increasing order: a subdivision pass seeds its counter at
/// `max(existing ids) + 1`, so every id minted by a pass is greater than every
/// id that existed before it.
///
/// # Examples
///
/// ```rust
/// use chromatic::core::complex::VertexId;
///
/// let v = VertexId::new(7);
/// assert_eq!(v.get(), 7);
/// assert_eq!(v.to_string(), "7");
/// assert!(VertexId::new(3) < v);
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct VertexId(u64);

impl VertexId {
    /// Creates a vertex id from its integer value.
    #[inline]
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the underlying integer value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for VertexId {
    #[inline]
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<VertexId> for u64 {
    #[inline]
    fn from(id: VertexId) -> Self {
        id.0
    }
}

// =============================================================================
// SIMPLEXES
// =============================================================================

/// A maximal simplex: a triangle given by its three vertex ids.
///
/// The algorithm is defined for 2-dimensional complexes only, so the arity is
/// fixed at three. Vertex order within a simplex is preserved as given; it
/// carries the deterministic shelling order through subdivision but has no
/// other semantics.
///
/// # Examples
///
/// ```rust
/// use chromatic::core::complex::{Simplex, VertexId};
///
/// let s = Simplex::from([0, 1, 2]);
/// assert!(s.contains(VertexId::new(1)));
/// assert!(s.has_distinct_vertices());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Simplex {
    vertices: [VertexId; 3],
}

impl Simplex {
    /// Creates a triangle from its three vertex ids, in order.
    #[inline]
    #[must_use]
    pub const fn new(v1: VertexId, v2: VertexId, v3: VertexId) -> Self {
        Self {
            vertices: [v1, v2, v3],
        }
    }

    /// Returns the vertex ids in their stored order.
    #[inline]
    #[must_use]
    pub const fn vertices(&self) -> &[VertexId; 3] {
        &self.vertices
    }

    /// Returns true if the given vertex is one of the three corners.
    #[inline]
    #[must_use]
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.vertices.contains(&vertex)
    }

    /// Returns true if the three vertex ids are pairwise distinct.
    #[must_use]
    pub fn has_distinct_vertices(&self) -> bool {
        let [a, b, c] = self.vertices;
        a != b && b != c && a != c
    }

    /// Iterates over the three vertex ids by value.
    #[inline]
    pub fn iter(&self) -> std::array::IntoIter<VertexId, 3> {
        self.vertices.into_iter()
    }
}

impl From<[VertexId; 3]> for Simplex {
    #[inline]
    fn from(vertices: [VertexId; 3]) -> Self {
        Self { vertices }
    }
}

impl From<[u64; 3]> for Simplex {
    #[inline]
    fn from([a, b, c]: [u64; 3]) -> Self {
        Self::new(VertexId::new(a), VertexId::new(b), VertexId::new(c))
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// The per-vertex attribute families a complex carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeKind {
    /// The `colors` map.
    Color,
    /// The `coordinates` map.
    Coordinate,
    /// The `radii` map.
    Radius,
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color => write!(f, "color"),
            Self::Coordinate => write!(f, "coordinate"),
            Self::Radius => write!(f, "radius"),
        }
    }
}

/// Violations of the structural invariants of a [`Complex`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ComplexValidationError {
    /// A maximal simplex does not have three pairwise distinct vertices.
    #[error("malformed simplex at index {index}: expected 3 distinct vertex ids, got {simplex:?}")]
    MalformedSimplex {
        /// Position of the simplex in the simplex list.
        index: usize,
        /// The offending simplex.
        simplex: Simplex,
    },
    /// A simplex references a vertex id missing from the vertex set.
    #[error("simplex at index {index} references vertex {vertex} not present in the vertex set")]
    UndeclaredVertex {
        /// Position of the simplex in the simplex list.
        index: usize,
        /// The missing vertex id.
        vertex: VertexId,
    },
    /// A vertex referenced by some simplex lacks an attribute entry.
    #[error("vertex {vertex} has no {attribute} entry")]
    MissingAttribute {
        /// The vertex with the missing entry.
        vertex: VertexId,
        /// Which attribute map is missing the entry.
        attribute: AttributeKind,
    },
}

// =============================================================================
// COMPLEX STRUCT DEFINITION
// =============================================================================

/// A 2-dimensional simplicial complex with colored, positioned vertices.
///
/// # Generic Parameters
///
/// * `T` - the coordinate/radius scalar (`f32`, `f64`, any [`CoordinateScalar`])
/// * `C` - the color value attached to each vertex (any [`ColorValue`])
///
/// # Construction
///
/// Either [`Complex::new`] with all five parts, or [`ComplexBuilder`] when the
/// attribute maps are filled incrementally. Neither validates; the caller
/// guarantees the invariants (every simplex vertex is declared and has color,
/// coordinate, and radius entries) or checks them with
/// [`is_valid`](Complex::is_valid) afterwards.
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
/// assert_eq!(complex.number_of_vertices(), 3);
/// assert_eq!(complex.number_of_simplexes(), 1);
/// assert!(complex.is_valid().is_ok());
/// ```
#[derive(Builder, Clone, Debug, Serialize, Deserialize)]
#[serde(bound(deserialize = ""))]
pub struct Complex<T, C>
where
    T: CoordinateScalar,
    C: ColorValue,
{
    /// The set of vertex ids.
    pub(crate) vertices: VertexSet,
    /// The maximal simplices, in deterministic shelling order.
    pub(crate) simplexes: Vec<Simplex>,
    /// Per-vertex color.
    #[builder(default)]
    pub(crate) colors: ColorMap<C>,
    /// Per-vertex 2D coordinate.
    #[builder(default)]
    pub(crate) coordinates: CoordinateMap<T>,
    /// Per-vertex visual radius.
    #[builder(default)]
    pub(crate) radii: RadiusMap<T>,
}

// =============================================================================
// CORE FUNCTIONALITY
// =============================================================================

impl<T, C> Complex<T, C>
where
    T: CoordinateScalar,
    C: ColorValue,
{
    /// Creates a complex from its five parts, without validation.
    #[must_use]
    pub const fn new(
        vertices: VertexSet,
        simplexes: Vec<Simplex>,
        colors: ColorMap<C>,
        coordinates: CoordinateMap<T>,
        radii: RadiusMap<T>,
    ) -> Self {
        Self {
            vertices,
            simplexes,
            colors,
            coordinates,
            radii,
        }
    }

    /// The vertex id set.
    #[inline]
    #[must_use]
    pub const fn vertices(&self) -> &VertexSet {
        &self.vertices
    }

    /// The maximal simplices in order.
    #[inline]
    #[must_use]
    pub fn simplexes(&self) -> &[Simplex] {
        &self.simplexes
    }

    /// The per-vertex color map.
    #[inline]
    #[must_use]
    pub const fn colors(&self) -> &ColorMap<C> {
        &self.colors
    }

    /// The per-vertex coordinate map.
    #[inline]
    #[must_use]
    pub const fn coordinates(&self) -> &CoordinateMap<T> {
        &self.coordinates
    }

    /// The per-vertex radius map.
    #[inline]
    #[must_use]
    pub const fn radii(&self) -> &RadiusMap<T> {
        &self.radii
    }

    /// Number of vertices in the complex.
    #[inline]
    #[must_use]
    pub fn number_of_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of maximal simplices in the complex.
    #[inline]
    #[must_use]
    pub fn number_of_simplexes(&self) -> usize {
        self.simplexes.len()
    }

    /// Returns true if the complex has no vertices and no simplices.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.simplexes.is_empty()
    }

    /// The largest vertex id currently in the complex, if any.
    ///
    /// Fresh ids minted by a subdivision pass start one past this value.
    #[must_use]
    pub fn max_vertex_id(&self) -> Option<VertexId> {
        self.vertices.iter().max().copied()
    }

    /// The coordinate of a vertex, if present.
    #[inline]
    #[must_use]
    pub fn coordinate_of(&self, vertex: VertexId) -> Option<Point<T>> {
        self.coordinates.get(&vertex).copied()
    }

    /// The color of a vertex, if present.
    #[inline]
    #[must_use]
    pub fn color_of(&self, vertex: VertexId) -> Option<&C> {
        self.colors.get(&vertex)
    }

    /// The radius of a vertex, if present.
    #[inline]
    #[must_use]
    pub fn radius_of(&self, vertex: VertexId) -> Option<T> {
        self.radii.get(&vertex).copied()
    }

    // =========================================================================
    // VALIDATION
    // =========================================================================

    /// Checks the structural invariants, returning the first violation.
    ///
    /// Checked per simplex, in order: three pairwise distinct vertex ids,
    /// every referenced id present in the vertex set, and a color, coordinate,
    /// and radius entry for every referenced id. Vertices that appear in no
    /// simplex are not required to carry attributes.
    ///
    /// # Errors
    ///
    /// The first [`ComplexValidationError`] found, if any.
    pub fn is_valid(&self) -> Result<(), ComplexValidationError> {
        for (index, simplex) in self.simplexes.iter().enumerate() {
            self.check_simplex(index, simplex, &mut |violation| Err(violation))?;
        }
        Ok(())
    }

    /// Collects every invariant violation instead of stopping at the first.
    ///
    /// Attribute violations are reported once per vertex even when the vertex
    /// appears in several simplices. An empty report means the complex is
    /// valid.
    #[must_use]
    pub fn validation_report(&self) -> Vec<ComplexValidationError> {
        let mut violations = Vec::new();
        let mut reported: FastHashSet<VertexId> = FastHashSet::default();
        for (index, simplex) in self.simplexes.iter().enumerate() {
            let _ = self.check_simplex(index, simplex, &mut |violation| {
                let vertex = match violation {
                    ComplexValidationError::MissingAttribute { vertex, .. }
                    | ComplexValidationError::UndeclaredVertex { vertex, .. } => Some(vertex),
                    ComplexValidationError::MalformedSimplex { .. } => None,
                };
                if vertex.is_none_or(|v| reported.insert(v)) {
                    violations.push(violation);
                }
                Ok(())
            });
        }
        violations
    }

    /// Runs the invariant checks for one simplex, feeding each violation to
    /// `sink`. The sink decides whether to stop (first-error mode) or record
    /// and continue (report mode).
    fn check_simplex(
        &self,
        index: usize,
        simplex: &Simplex,
        sink: &mut dyn FnMut(ComplexValidationError) -> Result<(), ComplexValidationError>,
    ) -> Result<(), ComplexValidationError> {
        if !simplex.has_distinct_vertices() {
            sink(ComplexValidationError::MalformedSimplex {
                index,
                simplex: *simplex,
            })?;
        }
        for vertex in simplex.iter() {
            if !self.vertices.contains(&vertex) {
                sink(ComplexValidationError::UndeclaredVertex { index, vertex })?;
            }
            if !self.colors.contains_key(&vertex) {
                sink(ComplexValidationError::MissingAttribute {
                    vertex,
                    attribute: AttributeKind::Color,
                })?;
            }
            if !self.coordinates.contains_key(&vertex) {
                sink(ComplexValidationError::MissingAttribute {
                    vertex,
                    attribute: AttributeKind::Coordinate,
                })?;
            }
            if !self.radii.contains_key(&vertex) {
                sink(ComplexValidationError::MissingAttribute {
                    vertex,
                    attribute: AttributeKind::Radius,
                })?;
            }
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
