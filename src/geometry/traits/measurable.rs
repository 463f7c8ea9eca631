//! Measurement traits for plane shapes.
//!
//! This module provides the scalar abstraction used by every shape, along with the
//! `Measurable` capability trait that exposes area and perimeter.
//!
//! # Overview
//!
//! - **`ShapeScalar`**: Trait alias consolidating the scalar requirements (floating-point
//!   arithmetic, `π`, `Default`, `Debug`). Implemented for every type that satisfies them,
//!   which in practice means `f32` and `f64`.
//! - **`Measurable`**: Pure area/perimeter computation. Implemented by each shape payload
//!   and by the closed [`Shape`](crate::geometry::shape::Shape) enum.
//!
//! # Usage Examples
//!
//! ```rust
//! use shapebox::geometry::shape::Rectangle;
//! use shapebox::geometry::traits::measurable::Measurable;
//!
//! let rect = Rectangle::new(4.0, 8.0);
//! assert_eq!(rect.area(), 32.0);
//! assert_eq!(rect.perimeter(), 24.0);
//! ```

use num_traits::{Float, FloatConst};
use std::fmt::{Debug, Display};

/// Default tolerance for f32 floating-point comparisons.
pub const DEFAULT_TOLERANCE_F32: f32 = 1e-6;

/// Default tolerance for f64 floating-point comparisons.
pub const DEFAULT_TOLERANCE_F64: f64 = 1e-12;

/// Scalar type used for shape dimensions and measures.
///
/// This is a trait alias: any `Float + FloatConst + Default + Debug + Display` type
/// implements it automatically through the blanket impl below.
///
/// # Examples
///
/// ```
/// use shapebox::geometry::traits::measurable::ShapeScalar;
///
/// fn half<T: ShapeScalar>(x: T) -> T {
///     x / T::two()
/// }
///
/// assert_eq!(half(5.0_f64), 2.5);
/// assert_eq!(half(5.0_f32), 2.5);
/// ```
pub trait ShapeScalar: Float + FloatConst + Default + Debug + Display {
    /// Returns the constant `2` in this scalar type.
    #[inline]
    #[must_use]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Returns the constant `3` in this scalar type.
    #[inline]
    #[must_use]
    fn three() -> Self {
        Self::two() + Self::one()
    }

    /// Returns the default comparison tolerance for this scalar type.
    ///
    /// - `f32`: `1e-6`
    /// - `f64`: `1e-12`
    /// - other types: machine epsilon
    #[must_use]
    fn default_tolerance() -> Self {
        if size_of::<Self>() == size_of::<f32>() {
            Self::from(DEFAULT_TOLERANCE_F32).unwrap_or_else(Self::epsilon)
        } else if size_of::<Self>() == size_of::<f64>() {
            Self::from(DEFAULT_TOLERANCE_F64).unwrap_or_else(Self::epsilon)
        } else {
            Self::epsilon()
        }
    }
}

impl<T> ShapeScalar for T where T: Float + FloatConst + Default + Debug + Display {}

/// Area and perimeter of a plane shape.
///
/// Both methods are pure functions of the stored dimensions and never fail. Dimensions are
/// not validated, so negative or non-finite inputs flow straight through the formulas.
///
/// # Examples
///
/// ```
/// use shapebox::geometry::shape::{Circle, Shape};
/// use shapebox::geometry::traits::measurable::Measurable;
/// use approx::assert_relative_eq;
///
/// let circle: Shape = Circle::new(12.0).into();
/// assert_relative_eq!(circle.area(), 452.389_342_116_930_3, epsilon = 1e-9);
/// assert_relative_eq!(circle.perimeter(), 75.398_223_686_155_04, epsilon = 1e-9);
/// ```
pub trait Measurable<T: ShapeScalar> {
    /// Returns the area enclosed by the shape.
    fn area(&self) -> T;

    /// Returns the length of the shape's boundary.
    fn perimeter(&self) -> T;
}

// =============================================================================
// TESTS
// =============================================================================
