//! Collection types tuned for integer-keyed complexes.
//!
//! Every map and set in the crate is keyed by [`VertexId`], a dense integer
//! id minted by the engine itself, so the hash function never sees untrusted
//! keys and the fast non-cryptographic `FxHasher` is the right default.

use rustc_hash::{FxBuildHasher, FxHashMap, FxHashSet};
use smallvec::SmallVec;

use crate::core::complex::VertexId;
use crate::geometry::point::Point;

// =============================================================================
// CORE OPTIMIZED TYPES
// =============================================================================

/// `HashMap` with the fast non-cryptographic `FxHasher`.
///
/// # Security Warning
///
/// Not DoS-resistant; use only with trusted keys such as the crate's own
/// vertex ids.
///
/// # Examples
///
/// ```rust
/// use chromatic::core::collections::FastHashMap;
///
/// let mut map: FastHashMap<u64, usize> = FastHashMap::default();
/// map.insert(123, 456);
/// ```
pub type FastHashMap<K, V> = FxHashMap<K, V>;

/// `HashSet` counterpart of [`FastHashMap`].
pub type FastHashSet<T> = FxHashSet<T>;

/// Small-optimized Vec that stays on the stack up to `N` elements.
///
/// Used for the per-simplex scratch collections of the subdivision pass,
/// which have small compile-time-known sizes (9 minted ids, 13 child
/// triangles per input triangle).
///
/// # Examples
///
/// ```rust
/// use chromatic::core::collections::SmallBuffer;
///
/// let mut buffer: SmallBuffer<i32, 8> = SmallBuffer::new();
/// buffer.push(42);
/// assert_eq!(buffer.len(), 1);
/// ```
pub type SmallBuffer<T, const N: usize> = SmallVec<[T; N]>;

/// Creates a [`FastHashMap`] with at least the given capacity.
#[must_use]
pub fn fast_hash_map_with_capacity<K, V>(capacity: usize) -> FastHashMap<K, V> {
    FastHashMap::with_capacity_and_hasher(capacity, FxBuildHasher)
}

/// Creates a [`FastHashSet`] with at least the given capacity.
#[must_use]
pub fn fast_hash_set_with_capacity<T>(capacity: usize) -> FastHashSet<T> {
    FastHashSet::with_capacity_and_hasher(capacity, FxBuildHasher)
}

// =============================================================================
// DOMAIN TYPE ALIASES
// =============================================================================

/// The vertex id set of a complex.
pub type VertexSet = FastHashSet<VertexId>;

/// Per-vertex color attribute map.
pub type ColorMap<C> = FastHashMap<VertexId, C>;

/// Per-vertex coordinate attribute map.
pub type CoordinateMap<T> = FastHashMap<VertexId, Point<T>>;

/// Per-vertex visual radius attribute map.
pub type RadiusMap<T> = FastHashMap<VertexId, T>;

/// Per-vertex label map (hatch patterns or display labels for rendering).
pub type LabelMap = FastHashMap<VertexId, String>;
