//! Scalar trait for coordinate computations.
//!
//! This module contains the trait alias that fixes the requirements on the
//! scalar type used for coordinates and radii throughout the crate.

use num_traits::Float;
use serde::{Serialize, de::DeserializeOwned};
use std::fmt::{Debug, Display};

/// Trait alias for the scalar type used in coordinates and radii.
///
/// This alias consolidates the bounds a scalar type `T` must satisfy to be used
/// for [`Point`](crate::geometry::point::Point) coordinates and vertex radii:
/// floating-point arithmetic for the centroid combinations plus the usual
/// formatting and serde support. Both `f32` and `f64` qualify.
///
/// # Required Traits
///
/// - `Float`: floating-point arithmetic (affine combinations, `min`, halving)
/// - `Default`: default value construction
/// - `Debug` + `Display`: formatting in errors and demo output
/// - `Serialize` + `DeserializeOwned`: serialization support
///
/// # Usage
///
/// ```rust
/// use chromatic::geometry::traits::CoordinateScalar;
///
/// fn halve<T: CoordinateScalar>(value: T) -> T {
///     value / (T::one() + T::one())
/// }
///
/// assert_eq!(halve(1.0_f64), 0.5);
/// assert_eq!(halve(1.0_f32), 0.5);
/// ```
pub trait CoordinateScalar:
    Float + Default + Debug + Display + Serialize + DeserializeOwned
{
}

// Blanket implementation for all types that satisfy the bounds
impl<T> CoordinateScalar for T where
    T: Float + Default + Debug + Display + Serialize + DeserializeOwned
{
}
