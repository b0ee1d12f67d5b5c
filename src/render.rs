//! Read-only interfaces handed to renderers and animation drivers.
//!
//! Drawing and playback live outside this crate; what they need from a
//! complex is narrow and stable:
//!
//! - a [`Scene`], the borrowing view a renderer consumes: the maximal
//!   simplices plus whichever per-vertex attribute maps are available
//!   (colors, coordinates, radii, hatch labels), each optional so a renderer
//!   can fall back to its own defaults or layout
//! - a [`Skeleton`], the derived edge and triangle sets a renderer draws:
//!   all sorted 2- and 3-subsets of the maximal simplices, deduplicated and
//!   in sorted order so output is stable across runs
//!
//! An animation driver interpolating between two complexes needs only
//! [`Scene::simplexes`] and [`Scene::coordinates`] of each endpoint.

use crate::core::collections::{
    ColorMap, CoordinateMap, FastHashSet, LabelMap, RadiusMap, SmallBuffer,
};
use crate::core::complex::{Complex, Simplex, VertexId};
use crate::core::traits::color_value::ColorValue;
use crate::geometry::point::Point;
use crate::geometry::traits::coordinate::CoordinateScalar;

/// Node radius a renderer should fall back to when a vertex has no entry in
/// the radius map.
pub const DEFAULT_NODE_RADIUS: f64 = 0.05;

/// Node fill a renderer should fall back to when a vertex has no entry in
/// the color map.
pub const DEFAULT_NODE_COLOR: &str = "#ff7f0e";

// =============================================================================
// CANONICAL SUB-SIMPLICES
// =============================================================================

/// Canonical identifier for an (undirected) edge.
///
/// Endpoints are stored sorted, so `(a, b)` and `(b, a)` map to the same
/// edge and sets of edges deduplicate across adjacent triangles.
///
/// # Examples
///
/// ```rust
/// use chromatic::prelude::*;
///
/// let e1 = Edge::new(VertexId::new(2), VertexId::new(1));
/// let e2 = Edge::new(VertexId::new(1), VertexId::new(2));
/// assert_eq!(e1, e2);
/// assert!(e1.v0() <= e1.v1());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    v0: VertexId,
    v1: VertexId,
}

impl Edge {
    /// Creates a canonical edge; endpoints are reordered so `v0 <= v1`.
    #[must_use]
    pub fn new(a: VertexId, b: VertexId) -> Self {
        if a <= b {
            Self { v0: a, v1: b }
        } else {
            Self { v0: b, v1: a }
        }
    }

    /// The smaller endpoint.
    #[inline]
    #[must_use]
    pub const fn v0(self) -> VertexId {
        self.v0
    }

    /// The larger endpoint.
    #[inline]
    #[must_use]
    pub const fn v1(self) -> VertexId {
        self.v1
    }

    /// Both endpoints in canonical order.
    #[inline]
    #[must_use]
    pub const fn endpoints(self) -> (VertexId, VertexId) {
        (self.v0, self.v1)
    }
}

/// Canonical identifier for a filled triangle: its vertex ids in sorted
/// order, independent of the winding the simplex was emitted with.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Triangle {
    vertices: [VertexId; 3],
}

impl Triangle {
    /// Creates a canonical triangle from three vertex ids in any order.
    #[must_use]
    pub fn new(a: VertexId, b: VertexId, c: VertexId) -> Self {
        let mut vertices = [a, b, c];
        vertices.sort_unstable();
        Self { vertices }
    }

    /// The vertex ids in sorted order.
    #[inline]
    #[must_use]
    pub const fn vertices(&self) -> &[VertexId; 3] {
        &self.vertices
    }
}

impl From<&Simplex> for Triangle {
    fn from(simplex: &Simplex) -> Self {
        let [a, b, c] = *simplex.vertices();
        Self::new(a, b, c)
    }
}

/// The three canonical edges of one maximal simplex, for renderers that
/// draw per triangle rather than from a deduplicated [`Skeleton`].
#[must_use]
pub fn edges_of(simplex: &Simplex) -> SmallBuffer<Edge, 3> {
    let [a, b, c] = *simplex.vertices();
    SmallBuffer::from_buf([Edge::new(a, b), Edge::new(a, c), Edge::new(b, c)])
}

// =============================================================================
// SKELETON
// =============================================================================

/// The deduplicated node, edge, and triangle sets of a simplex list, each in
/// sorted order.
///
/// # Examples
///
/// ```rust
/// use chromatic::prelude::*;
///
/// let simplexes = [Simplex::from([0, 1, 2]), Simplex::from([1, 3, 2])];
/// let skeleton = Skeleton::from_simplexes(&simplexes);
/// assert_eq!(skeleton.nodes().len(), 4);
/// assert_eq!(skeleton.edges().len(), 5); // the shared edge appears once
/// assert_eq!(skeleton.triangles().len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Skeleton {
    nodes: Vec<VertexId>,
    edges: Vec<Edge>,
    triangles: Vec<Triangle>,
}

impl Skeleton {
    /// Derives the skeleton of a simplex list.
    #[must_use]
    pub fn from_simplexes(simplexes: &[Simplex]) -> Self {
        let mut node_set: FastHashSet<VertexId> = FastHashSet::default();
        let mut edge_set: FastHashSet<Edge> = FastHashSet::default();
        let mut triangle_set: FastHashSet<Triangle> = FastHashSet::default();
        for simplex in simplexes {
            node_set.extend(simplex.iter());
            edge_set.extend(edges_of(simplex));
            triangle_set.insert(Triangle::from(simplex));
        }

        let mut nodes: Vec<VertexId> = node_set.into_iter().collect();
        let mut edges: Vec<Edge> = edge_set.into_iter().collect();
        let mut triangles: Vec<Triangle> = triangle_set.into_iter().collect();
        nodes.sort_unstable();
        edges.sort_unstable();
        triangles.sort_unstable();
        Self {
            nodes,
            edges,
            triangles,
        }
    }

    /// Every vertex id referenced by some simplex, sorted ascending.
    #[must_use]
    pub fn nodes(&self) -> &[VertexId] {
        &self.nodes
    }

    /// Every distinct edge, sorted by canonical endpoints.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Every distinct filled triangle, sorted by canonical vertices.
    #[must_use]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }
}

// =============================================================================
// SCENE
// =============================================================================

/// Borrowing view of a complex handed to a renderer.
///
/// Only the simplex list is required. Attribute maps are optional: a
/// renderer falls back to a force-directed layout when `coordinates` is
/// absent, to [`DEFAULT_NODE_COLOR`] and [`DEFAULT_NODE_RADIUS`] when
/// `colors` or `radii` are, and draws no hatching when `labels` is.
///
/// # Examples
///
/// ```rust
/// use chromatic::prelude::*;
///
/// let simplexes = [Simplex::from([0, 1, 2])];
/// let scene: Scene<'_, f64, String> = Scene::bare(&simplexes);
/// assert!(scene.coordinates().is_none());
/// assert_eq!(scene.skeleton().nodes().len(), 3);
/// ```
#[derive(Debug)]
pub struct Scene<'a, T, C>
where
    T: CoordinateScalar,
    C: ColorValue,
{
    simplexes: &'a [Simplex],
    colors: Option<&'a ColorMap<C>>,
    coordinates: Option<&'a CoordinateMap<T>>,
    radii: Option<&'a RadiusMap<T>>,
    labels: Option<&'a LabelMap>,
}

// Manual impls: the scene only holds references, so it is `Copy` even when
// `T` and `C` are not.
impl<T, C> Clone for Scene<'_, T, C>
where
    T: CoordinateScalar,
    C: ColorValue,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, C> Copy for Scene<'_, T, C>
where
    T: CoordinateScalar,
    C: ColorValue,
{
}

impl<'a, T, C> Scene<'a, T, C>
where
    T: CoordinateScalar,
    C: ColorValue,
{
    /// A scene with simplices only; the renderer supplies layout and style.
    #[must_use]
    pub const fn bare(simplexes: &'a [Simplex]) -> Self {
        Self {
            simplexes,
            colors: None,
            coordinates: None,
            radii: None,
            labels: None,
        }
    }

    /// A scene borrowing every attribute map the complex carries.
    #[must_use]
    pub fn from_complex(complex: &'a Complex<T, C>) -> Self {
        Self {
            simplexes: complex.simplexes(),
            colors: Some(complex.colors()),
            coordinates: Some(complex.coordinates()),
            radii: Some(complex.radii()),
            labels: None,
        }
    }

    /// Attaches per-vertex hatch labels.
    #[must_use]
    pub const fn with_labels(mut self, labels: &'a LabelMap) -> Self {
        self.labels = Some(labels);
        self
    }

    /// The maximal simplices to draw, in emission order.
    #[must_use]
    pub const fn simplexes(&self) -> &'a [Simplex] {
        self.simplexes
    }

    /// The color map, when one is available.
    #[must_use]
    pub const fn colors(&self) -> Option<&'a ColorMap<C>> {
        self.colors
    }

    /// The coordinate map, when one is available.
    #[must_use]
    pub const fn coordinates(&self) -> Option<&'a CoordinateMap<T>> {
        self.coordinates
    }

    /// The radius map, when one is available.
    #[must_use]
    pub const fn radii(&self) -> Option<&'a RadiusMap<T>> {
        self.radii
    }

    /// The hatch-label map, when one is available.
    #[must_use]
    pub const fn labels(&self) -> Option<&'a LabelMap> {
        self.labels
    }

    /// The color of one vertex, if known.
    #[must_use]
    pub fn color_of(&self, vertex: VertexId) -> Option<&'a C> {
        self.colors.and_then(|map| map.get(&vertex))
    }

    /// The position of one vertex, if known.
    #[must_use]
    pub fn coordinate_of(&self, vertex: VertexId) -> Option<Point<T>> {
        self.coordinates.and_then(|map| map.get(&vertex)).copied()
    }

    /// The radius of one vertex, if known.
    #[must_use]
    pub fn radius_of(&self, vertex: VertexId) -> Option<T> {
        self.radii.and_then(|map| map.get(&vertex)).copied()
    }

    /// The hatch label of one vertex, if any.
    #[must_use]
    pub fn label_of(&self, vertex: VertexId) -> Option<&'a str> {
        self.labels
            .and_then(|map| map.get(&vertex))
            .map(String::as_str)
    }

    /// Derives the deduplicated edge and triangle sets of this scene.
    #[must_use]
    pub fn skeleton(&self) -> Skeleton {
        Skeleton::from_simplexes(self.simplexes)
    }
}

// =============================================================================
// TESTS
// =============================================================================
