//! # chromatic
//!
//! This is a library for computing the *standard chromatic subdivision* of a
//! 2-dimensional colored
//! [simplicial complex](https://en.wikipedia.org/wiki/Simplicial_complex),
//! iterated and optionally pruned by resilience, as used to build protocol
//! complexes for round-based models of distributed computing.
//!
//! # Features
//!
//! - One-round chromatic subdivision: every triangle is replaced by thirteen
//!   children in a fixed shelling order, over nine deterministically minted
//!   fresh vertices
//! - Deterministic attribute derivation: biased centroid coordinates, color
//!   inheritance from a fixed ownership map, radius halving
//! - Carrier-dimension tagging and resilience pruning, composed into
//!   [`Complex::delayed_snapshot`](core::complex::Complex::delayed_snapshot)
//! - Generic floating-point coordinate types (supports `f32`, `f64`, and
//!   other types implementing
//!   [`CoordinateScalar`](geometry::traits::coordinate::CoordinateScalar))
//! - Pluggable per-vertex color values (see
//!   [`ColorValue`](core::traits::color_value::ColorValue) for constraints)
//! - Read-only [`Scene`](render::Scene) and [`Skeleton`](render::Skeleton)
//!   views for renderers and animation drivers
//! - Serialization/Deserialization with [serde](https://serde.rs)
//!
//! # Basic Usage
//!
//! ```rust
//! use chromatic::prelude::*;
//!
//! // One triangle on vertices 0, 1, 2 with colors, positions, and radii.
//! let complex: Complex<f64, String> = ComplexBuilder::default()
//!     .vertices([0, 1, 2].map(VertexId::new).into_iter().collect())
//!     .simplexes(vec![Simplex::from([0, 1, 2])])
//!     .colors(
//!         [(0, "red"), (1, "green"), (2, "blue")]
//!             .map(|(id, c)| (VertexId::new(id), c.to_owned()))
//!             .into_iter()
//!             .collect(),
//!     )
//!     .coordinates(
//!         [(0, [0.0, 0.0]), (1, [1.0, 0.0]), (2, [0.5, 0.866])]
//!             .map(|(id, p)| (VertexId::new(id), p.into()))
//!             .into_iter()
//!             .collect(),
//!     )
//!     .radii(
//!         [0, 1, 2]
//!             .map(|id| (VertexId::new(id), 0.05))
//!             .into_iter()
//!             .collect(),
//!     )
//!     .build()
//!     .unwrap();
//!
//! // One round replaces the triangle by 13 children over 12 vertices.
//! let subdivided = complex.subdivide().unwrap();
//! assert_eq!(subdivided.number_of_vertices(), 12);
//! assert_eq!(subdivided.number_of_simplexes(), 13);
//! assert!(subdivided.is_valid().is_ok());
//!
//! // The parent is untouched and still usable.
//! assert_eq!(complex.number_of_vertices(), 3);
//! ```
//!
//! # Delayed Snapshots
//!
//! [`Complex::delayed_snapshot`](core::complex::Complex::delayed_snapshot)
//! composes the whole pipeline: tag every vertex with carrier dimension 0,
//! subdivide twice while propagating dimensions, then prune by resilience.
//! Pruning deletes each vertex whose carrier dimension is strictly below
//! `2 - resilience`, together with every simplex containing one.
//!
//! ```rust
//! use chromatic::prelude::*;
//!
//! let complex: Complex<f64, String> = ComplexBuilder::default()
//!     .vertices([0, 1, 2].map(VertexId::new).into_iter().collect())
//!     .simplexes(vec![Simplex::from([0, 1, 2])])
//!     .colors(
//!         [(0, "red"), (1, "green"), (2, "blue")]
//!             .map(|(id, c)| (VertexId::new(id), c.to_owned()))
//!             .into_iter()
//!             .collect(),
//!     )
//!     .coordinates(
//!         [(0, [0.0, 0.0]), (1, [1.0, 0.0]), (2, [0.5, 0.866])]
//!             .map(|(id, p)| (VertexId::new(id), p.into()))
//!             .into_iter()
//!             .collect(),
//!     )
//!     .radii(
//!         [0, 1, 2]
//!             .map(|id| (VertexId::new(id), 0.05))
//!             .into_iter()
//!             .collect(),
//!     )
//!     .build()
//!     .unwrap();
//!
//! // Two tagged rounds give 129 vertices / 169 triangles; pruning at
//! // resilience 1 then deletes the three original corners and their
//! // incident triangles.
//! let snapshot = complex.delayed_snapshot(1.0).unwrap();
//! assert_eq!(snapshot.number_of_vertices(), 126);
//! assert_eq!(snapshot.number_of_simplexes(), 142);
//! ```
//!
//! # Complex Invariants
//!
//! Construction is caller-trusted and does not validate; the checks are
//! opt-in through [`Complex::is_valid`](core::complex::Complex::is_valid)
//! (first violation) and
//! [`Complex::validation_report`](core::complex::Complex::validation_report)
//! (all violations):
//!
//! - **Simplex arity** – every maximal simplex names exactly three distinct
//!   vertex ids.
//! - **Declared vertices** – every vertex a simplex references is present in
//!   the vertex set.
//! - **Attribute completeness** – every referenced vertex has color,
//!   coordinate, and radius entries.
//!
//! [`Complex::subdivide`](core::complex::Complex::subdivide) runs the same
//! checks up front and fails without minting anything, so a malformed
//! complex can never produce a partially subdivided result.
//!
//! # References
//!
//! - M. Herlihy, D. Kozlov, S. Rajsbaum. *Distributed Computing Through
//!   Combinatorial Topology*. Morgan Kaufmann, 2013.
//! - M. Herlihy, N. Shavit. "The topological structure of asynchronous
//!   computability." *Journal of the ACM* 46(6), 1999.

// Forbid unsafe code throughout the entire crate
#![forbid(unsafe_code)]

#[macro_use]
extern crate derive_builder;

/// The `core` module contains the complex data structure and the subdivision,
/// tagging, and pruning algorithms that operate on it.
pub mod core {
    /// High-performance collection types shared across the crate
    pub mod collections;
    pub mod complex;
    pub mod resilience;
    pub mod subdivision;
    /// Traits constraining the per-vertex data a complex carries.
    pub mod traits {
        pub mod color_value;
        pub use color_value::*;
    }
    // Re-export the `core` modules.
    pub use complex::*;
    pub use resilience::*;
    pub use subdivision::*;
    pub use traits::*;
    // collections is not re-exported here; import specific types via the
    // prelude or use crate::core::collections::
}

/// Contains geometric types including the `Point` struct and the biased
/// centroid combinations subdivision places new vertices with.
pub mod geometry {
    pub mod centroid;
    pub mod point;
    /// Traits module containing the coordinate scalar abstraction.
    pub mod traits {
        pub mod coordinate;
        pub use coordinate::*;
    }
    pub use centroid::*;
    pub use point::*;
    pub use traits::*;
}

/// Read-only views handed to renderers and animation drivers.
pub mod render;

/// A prelude module that re-exports commonly used types.
/// This makes it easier to import the most commonly used items from the crate.
pub mod prelude {
    // Re-export from core
    pub use crate::core::{complex::*, resilience::*, subdivision::*, traits::color_value::*};

    // Re-export commonly used collection types from core::collections
    pub use crate::core::collections::{
        ColorMap, CoordinateMap, FastHashMap, FastHashSet, LabelMap, RadiusMap, SmallBuffer,
        VertexSet, fast_hash_map_with_capacity, fast_hash_set_with_capacity,
    };

    // Re-export from geometry
    pub use crate::geometry::{centroid::*, point::*, traits::coordinate::*};

    // Re-export the render-facing views
    pub use crate::render::*;
}

/// The function `is_normal` checks that structs implement `auto` traits.
/// Traits are checked at compile time, so this function is only used for
/// testing.
#[must_use]
pub const fn is_normal<T: Sized + Send + Sync + Unpin>() -> bool {
    true
}

// =============================================================================
// TESTS
// =============================================================================
