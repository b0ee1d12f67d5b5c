//! Skewed centroid functions that place the vertices minted by one round of
//! chromatic subdivision.
//!
//! Both functions are affine combinations whose weights are derived from a
//! single skew parameter ε. The skew pushes each minted point away from the
//! "owning" corner so that the two points on an edge, and the three barycentric
//! points of a triangle, remain pairwise distinct. The weights always sum to
//! one, so every minted coordinate is a convex combination of its parents and
//! lies inside the parent edge or triangle.

use crate::geometry::point::Point;
use crate::geometry::traits::coordinate::CoordinateScalar;

/// Skew parameter ε used by the centroid combinations.
///
/// The value is 1/3, derived from scalar ops so the same definition works for
/// any [`CoordinateScalar`]. The centroid weights are computed from ε rather
/// than written out as decimals, which keeps them consistent if the skew is
/// ever tuned.
#[inline]
#[must_use]
pub fn subdivision_eps<T: CoordinateScalar>() -> T {
    let three = T::one() + T::one() + T::one();
    T::one() / three
}

/// Skewed midpoint of the segment from `x` to `y`, biased toward `y`.
///
/// Computes `x·(1−ε)/2 + y·(1+ε)/2`. The bias makes the function asymmetric:
/// `two_centroid(x, y)` and `two_centroid(y, x)` are the two distinct points
/// an edge receives during subdivision, each sitting closer to its second
/// argument. With ε = 1/3 the weights are exactly (1/3, 2/3).
///
/// # Examples
///
/// ```rust
/// use chromatic::geometry::centroid::two_centroid;
/// use chromatic::geometry::point::Point;
///
/// let a = Point::new(0.0_f64, 0.0);
/// let b = Point::new(1.0, 0.0);
/// let p = two_centroid(a, b);
/// assert!((p.x() - 2.0 / 3.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn two_centroid<T: CoordinateScalar>(x: Point<T>, y: Point<T>) -> Point<T> {
    let eps = subdivision_eps::<T>();
    let two = T::one() + T::one();
    let w_x = (T::one() - eps) / two;
    let w_y = (T::one() + eps) / two;
    Point::new(x.x() * w_x + y.x() * w_y, x.y() * w_x + y.y() * w_y)
}

/// Skewed barycenter of the triangle `(x, y, z)`, biased away from `x`.
///
/// Computes `x·(1−ε)/3 + y·(1+ε/2)/3 + z·(1+ε/2)/3`. The function is
/// symmetric in `y` and `z` but biased against `x`; rotating the arguments
/// through the three cyclic orderings of a triangle yields the three distinct
/// barycentric points of the subdivision. With ε = 1/3 the weights are exactly
/// (2/9, 7/18, 7/18).
///
/// # Examples
///
/// ```rust
/// use chromatic::geometry::centroid::three_centroid;
/// use chromatic::geometry::point::Point;
///
/// let a = Point::new(1.0_f64, 0.0);
/// let b = Point::new(0.0, 0.0);
/// let c = Point::new(0.0, 0.0);
/// let p = three_centroid(a, b, c);
/// assert!((p.x() - 2.0 / 9.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn three_centroid<T: CoordinateScalar>(x: Point<T>, y: Point<T>, z: Point<T>) -> Point<T> {
    let eps = subdivision_eps::<T>();
    let two = T::one() + T::one();
    let three = two + T::one();
    let w_x = (T::one() - eps) / three;
    let w_yz = (T::one() + eps / two) / three;
    Point::new(
        x.x() * w_x + y.x() * w_yz + z.x() * w_yz,
        x.y() * w_x + y.y() * w_yz + z.y() * w_yz,
    )
}

// =============================================================================
// TESTS
// =============================================================================
