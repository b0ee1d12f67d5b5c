//! Two-dimensional point type used for vertex coordinates.
//!
//! The chromatic subdivision is defined for 2-dimensional complexes, so the
//! coordinate type is a fixed-size pair rather than a d-dimensional array. The
//! storage is a private `[T; 2]` exposed through accessors, and serialization
//! uses the bare `[x, y]` tuple form so snapshots stay compact and readable.

use serde::de::{Error as DeError, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

use crate::geometry::traits::coordinate::CoordinateScalar;

/// A point in the plane.
///
/// # Examples
///
/// ```rust
/// use chromatic::geometry::point::Point;
///
/// let p = Point::new(1.0, 2.0);
/// assert_eq!(p.x(), 1.0);
/// assert_eq!(p.y(), 2.0);
/// assert_eq!(p.coords(), &[1.0, 2.0]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point<T>
where
    T: CoordinateScalar,
{
    /// The coordinates of the point.
    coords: [T; 2],
}

impl<T> Point<T>
where
    T: CoordinateScalar,
{
    /// Creates a new point from its two coordinates.
    #[inline]
    #[must_use]
    pub const fn new(x: T, y: T) -> Self {
        Self { coords: [x, y] }
    }

    /// Returns a reference to the coordinate array.
    #[inline]
    #[must_use]
    pub const fn coords(&self) -> &[T; 2] {
        &self.coords
    }

    /// Returns the first coordinate.
    #[inline]
    #[must_use]
    pub const fn x(&self) -> T {
        self.coords[0]
    }

    /// Returns the second coordinate.
    #[inline]
    #[must_use]
    pub const fn y(&self) -> T {
        self.coords[1]
    }
}

// =============================================================================
// CONVERSIONS
// =============================================================================

impl<T> From<[T; 2]> for Point<T>
where
    T: CoordinateScalar,
{
    #[inline]
    fn from(coords: [T; 2]) -> Self {
        Self { coords }
    }
}

impl<T> From<(T, T)> for Point<T>
where
    T: CoordinateScalar,
{
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self { coords: [x, y] }
    }
}

impl<T> From<Point<T>> for [T; 2]
where
    T: CoordinateScalar,
{
    /// # Example
    ///
    /// ```rust
    /// use chromatic::geometry::point::Point;
    ///
    /// let p = Point::new(1.5, -0.5);
    /// let coords: [f64; 2] = p.into();
    /// assert_eq!(coords, [1.5, -0.5]);
    /// ```
    #[inline]
    fn from(point: Point<T>) -> [T; 2] {
        point.coords
    }
}

// =============================================================================
// SERIALIZATION
// =============================================================================

// Serialize as a bare 2-tuple rather than a struct with a named field.
impl<T> Serialize for Point<T>
where
    T: CoordinateScalar,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeTuple;
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.coords[0])?;
        tuple.serialize_element(&self.coords[1])?;
        tuple.end()
    }
}

impl<'de, T> Deserialize<'de> for Point<T>
where
    T: CoordinateScalar,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PairVisitor<T>(PhantomData<T>);

        impl<'de, T> Visitor<'de> for PairVisitor<T>
        where
            T: CoordinateScalar,
        {
            type Value = Point<T>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an array of 2 coordinates")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let x: T = seq
                    .next_element()?
                    .ok_or_else(|| DeError::invalid_length(0, &self))?;
                let y: T = seq
                    .next_element()?
                    .ok_or_else(|| DeError::invalid_length(1, &self))?;
                Ok(Point::new(x, y))
            }
        }

        deserializer.deserialize_tuple(2, PairVisitor(PhantomData))
    }
}

// =============================================================================
// TESTS
// =============================================================================
