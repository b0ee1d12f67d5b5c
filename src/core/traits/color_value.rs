//! Color trait for chromatic subdivision structures.
//!
//! This module contains the trait definition for color values that can be
//! attached to the vertices of a complex.

use serde::{Serialize, de::DeserializeOwned};
use std::{fmt::Debug, hash::Hash};

/// Trait alias for values usable as vertex colors.
///
/// This trait alias captures all the requirements for a color value attached to
/// a vertex of a [`Complex`](crate::core::complex::Complex). Colors are process
/// names in the distributed-computing reading of the chromatic subdivision, and
/// plain display colors in the rendering one; the engine only ever clones and
/// compares them, so `Clone` rather than `Copy` is required and heap-backed
/// types such as `String` work fine.
///
/// # Required Traits
///
/// - `Clone`: colors are copied from parent to child vertices on subdivision
/// - `Eq` + `Hash`: for equality checks and use in hash-based collections
/// - `Debug`: for debug formatting
/// - `Serialize` + `DeserializeOwned`: for serialization support
///
/// # Usage
///
/// ```rust
/// use chromatic::core::traits::ColorValue;
///
/// fn process_color<C: ColorValue>(color: C) {
///     // C has all the necessary bounds for use as a vertex color
/// }
///
/// // Examples of types that implement ColorValue:
/// // - String and &'static str (named or hex colors)
/// // - u8, u32 (palette indices, packed RGB)
/// // - Custom enums with serde support
/// ```
pub trait ColorValue: Clone + Eq + Hash + Debug + Serialize + DeserializeOwned {}

// Blanket implementation for all types that satisfy the bounds
impl<C> ColorValue for C where C: Clone + Eq + Hash + Debug + Serialize + DeserializeOwned {}
