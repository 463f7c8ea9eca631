//! Plane shape variants.
//!
//! The closed set of shapes a [`ShapeBox`](crate::core::shape_box::ShapeBox) can hold:
//!
//! | Variant | Area | Perimeter |
//! |---|---|---|
//! | [`Circle`] `(r)` | π·r² | 2·π·r |
//! | [`Rectangle`] `(h, w)` | h·w | 2·(h+w) |
//! | [`Triangle`] `(s)` | s²/2 | 3·s |
//!
//! The triangle area is `s²/2`, not the equilateral `√3/4·s²`.
//!
//! Shapes are immutable `Copy` values. Variant identity is carried by [`ShapeKind`],
//! never by type names.

use crate::geometry::traits::measurable::{Measurable, ShapeScalar};
use std::fmt;

// =============================================================================
// SHAPE KIND
// =============================================================================

/// Discriminant for the closed set of shape variants.
///
/// # Examples
///
/// ```
/// use shapebox::geometry::shape::{Circle, Shape, ShapeKind};
///
/// let shape: Shape = Circle::new(1.0).into();
/// assert_eq!(shape.kind(), ShapeKind::Circle);
/// assert_eq!(ShapeKind::Circle.to_string(), "circle");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeKind {
    /// A circle described by its radius.
    Circle,
    /// A rectangle described by height and width.
    Rectangle,
    /// A triangle described by a single side length.
    Triangle,
}

impl ShapeKind {
    /// All variants in declaration order.
    pub const ALL: [Self; 3] = [Self::Circle, Self::Rectangle, Self::Triangle];

    /// Lowercase name of the variant.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Rectangle => "rectangle",
            Self::Triangle => "triangle",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// VARIANT PAYLOADS
// =============================================================================

/// A circle with the given radius.
///
/// # Examples
///
/// ```
/// use shapebox::geometry::shape::Circle;
/// use shapebox::geometry::traits::measurable::Measurable;
/// use approx::assert_relative_eq;
///
/// let c = Circle::new(12.0);
/// assert_relative_eq!(c.area(), std::f64::consts::PI * 144.0);
/// assert_relative_eq!(c.perimeter(), std::f64::consts::PI * 24.0);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Circle<T: ShapeScalar = f64> {
    radius: T,
}

impl<T: ShapeScalar> Circle<T> {
    /// Creates a circle. The radius is not validated.
    #[inline]
    #[must_use]
    pub const fn new(radius: T) -> Self {
        Self { radius }
    }

    /// Returns the radius.
    #[inline]
    #[must_use]
    pub const fn radius(&self) -> T {
        self.radius
    }
}

impl<T: ShapeScalar> Measurable<T> for Circle<T> {
    #[inline]
    fn area(&self) -> T {
        T::PI() * self.radius * self.radius
    }

    #[inline]
    fn perimeter(&self) -> T {
        T::two() * T::PI() * self.radius
    }
}

impl<T: ShapeScalar> fmt::Display for Circle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle(radius={})", self.radius)
    }
}

/// A rectangle with the given height and width.
///
/// # Examples
///
/// ```
/// use shapebox::geometry::shape::Rectangle;
/// use shapebox::geometry::traits::measurable::Measurable;
///
/// let r = Rectangle::new(4.0, 8.0);
/// assert_eq!(r.height(), 4.0);
/// assert_eq!(r.width(), 8.0);
/// assert_eq!(r.area(), 32.0);
/// assert_eq!(r.perimeter(), 24.0);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rectangle<T: ShapeScalar = f64> {
    height: T,
    width: T,
}

impl<T: ShapeScalar> Rectangle<T> {
    /// Creates a rectangle. Dimensions are not validated.
    #[inline]
    #[must_use]
    pub const fn new(height: T, width: T) -> Self {
        Self { height, width }
    }

    /// Returns the height.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> T {
        self.height
    }

    /// Returns the width.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> T {
        self.width
    }
}

impl<T: ShapeScalar> Measurable<T> for Rectangle<T> {
    #[inline]
    fn area(&self) -> T {
        self.height * self.width
    }

    #[inline]
    fn perimeter(&self) -> T {
        T::two() * (self.height + self.width)
    }
}

impl<T: ShapeScalar> fmt::Display for Rectangle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rectangle(height={}, width={})", self.height, self.width)
    }
}

/// A triangle described by one side length.
///
/// # Examples
///
/// ```
/// use shapebox::geometry::shape::Triangle;
/// use shapebox::geometry::traits::measurable::Measurable;
///
/// let t = Triangle::new(5.0);
/// assert_eq!(t.area(), 12.5);
/// assert_eq!(t.perimeter(), 15.0);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Triangle<T: ShapeScalar = f64> {
    side: T,
}

impl<T: ShapeScalar> Triangle<T> {
    /// Creates a triangle. The side length is not validated.
    #[inline]
    #[must_use]
    pub const fn new(side: T) -> Self {
        Self { side }
    }

    /// Returns the side length.
    #[inline]
    #[must_use]
    pub const fn side(&self) -> T {
        self.side
    }
}

impl<T: ShapeScalar> Measurable<T> for Triangle<T> {
    /// `side² / 2`.
    #[inline]
    fn area(&self) -> T {
        self.side * self.side / T::two()
    }

    #[inline]
    fn perimeter(&self) -> T {
        T::three() * self.side
    }
}

impl<T: ShapeScalar> fmt::Display for Triangle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Triangle(side={})", self.side)
    }
}

// =============================================================================
// SHAPE ENUM
// =============================================================================

/// A shape value: one of the closed set of variants.
///
/// Two shapes are equal when they are the same variant with equal dimensions.
///
/// # Examples
///
/// ```
/// use shapebox::geometry::shape::{Rectangle, Shape, ShapeKind, Triangle};
/// use shapebox::geometry::traits::measurable::Measurable;
///
/// let shapes: Vec<Shape> = vec![Rectangle::new(4.0, 8.0).into(), Triangle::new(5.0).into()];
/// let total: f64 = shapes.iter().map(|s| s.area()).sum();
/// assert_eq!(total, 44.5);
/// assert_eq!(shapes[1].kind(), ShapeKind::Triangle);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Shape<T: ShapeScalar = f64> {
    /// See [`Circle`].
    Circle(Circle<T>),
    /// See [`Rectangle`].
    Rectangle(Rectangle<T>),
    /// See [`Triangle`].
    Triangle(Triangle<T>),
}

impl<T: ShapeScalar> Shape<T> {
    /// Shorthand for `Shape::Circle(Circle::new(radius))`.
    #[inline]
    #[must_use]
    pub const fn circle(radius: T) -> Self {
        Self::Circle(Circle::new(radius))
    }

    /// Shorthand for `Shape::Rectangle(Rectangle::new(height, width))`.
    #[inline]
    #[must_use]
    pub const fn rectangle(height: T, width: T) -> Self {
        Self::Rectangle(Rectangle::new(height, width))
    }

    /// Shorthand for `Shape::Triangle(Triangle::new(side))`.
    #[inline]
    #[must_use]
    pub const fn triangle(side: T) -> Self {
        Self::Triangle(Triangle::new(side))
    }

    /// Returns the variant discriminant.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ShapeKind {
        match self {
            Self::Circle(_) => ShapeKind::Circle,
            Self::Rectangle(_) => ShapeKind::Rectangle,
            Self::Triangle(_) => ShapeKind::Triangle,
        }
    }

    /// Returns `true` if this is a [`Shape::Circle`].
    #[inline]
    #[must_use]
    pub const fn is_circle(&self) -> bool {
        matches!(self, Self::Circle(_))
    }
}

impl<T: ShapeScalar> Measurable<T> for Shape<T> {
    fn area(&self) -> T {
        match self {
            Self::Circle(c) => c.area(),
            Self::Rectangle(r) => r.area(),
            Self::Triangle(t) => t.area(),
        }
    }

    fn perimeter(&self) -> T {
        match self {
            Self::Circle(c) => c.perimeter(),
            Self::Rectangle(r) => r.perimeter(),
            Self::Triangle(t) => t.perimeter(),
        }
    }
}

impl<T: ShapeScalar> From<Circle<T>> for Shape<T> {
    fn from(circle: Circle<T>) -> Self {
        Self::Circle(circle)
    }
}

impl<T: ShapeScalar> From<Rectangle<T>> for Shape<T> {
    fn from(rectangle: Rectangle<T>) -> Self {
        Self::Rectangle(rectangle)
    }
}

impl<T: ShapeScalar> From<Triangle<T>> for Shape<T> {
    fn from(triangle: Triangle<T>) -> Self {
        Self::Triangle(triangle)
    }
}

impl<T: ShapeScalar> fmt::Display for Shape<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Circle(c) => fmt::Display::fmt(c, f),
            Self::Rectangle(r) => fmt::Display::fmt(r, f),
            Self::Triangle(t) => fmt::Display::fmt(t, f),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
