//! Bounded, order-preserving shape container.
//!
//! [`ShapeBox`] owns an ordered sequence of [`Shape`] values and a fixed capacity set at
//! construction. Every indexed operation performs an explicit bounds check and reports
//! failure as a [`ShapeBoxError`]; a failed operation leaves the container untouched.
//!
//! # Capacity
//!
//! Whether one more shape fits is decided by the box's [`CapacityPolicy`]. The default
//! [`CapacityPolicy::Lenient`] rejects an append only when `capacity < len`, so a box with
//! capacity `n` holds up to `n + 1` shapes.
//!
//! # Removal
//!
//! Removing at index `i` closes the gap by shifting every later shape one slot earlier.
//! Bulk removal ([`ShapeBox::remove_all_of`], [`ShapeBox::remove_all_circles`]) removes
//! every matching shape, including runs of adjacent matches, and keeps the relative order
//! of what remains.
//!
//! # Examples
//!
//! ```rust
//! use shapebox::prelude::*;
//!
//! let mut shape_box: ShapeBox = ShapeBox::new(4);
//! shape_box.add_shape(Rectangle::new(4.0, 8.0)).unwrap();
//! shape_box.add_shape(Circle::new(12.0)).unwrap();
//! shape_box.add_shape(Triangle::new(5.0)).unwrap();
//!
//! let extracted = shape_box.extract_by_index(0).unwrap();
//! assert_eq!(extracted, Shape::rectangle(4.0, 8.0));
//! assert_eq!(shape_box.get_by_index(0).unwrap().kind(), ShapeKind::Circle);
//!
//! shape_box.remove_all_circles().unwrap();
//! assert_eq!(shape_box.len(), 1);
//! assert_eq!(shape_box.sum_perimeter(), 15.0);
//! ```

use crate::core::capacity::CapacityPolicy;
use crate::geometry::shape::{Shape, ShapeKind};
use crate::geometry::traits::measurable::{Measurable, ShapeScalar};
use thiserror::Error;

// =============================================================================
// ERRORS
// =============================================================================

/// Errors returned by [`ShapeBox`] operations.
///
/// # Examples
///
/// ```rust
/// use shapebox::core::shape_box::{ShapeBox, ShapeBoxError};
///
/// let shape_box: ShapeBox = ShapeBox::new(2);
/// let err = shape_box.get_by_index(5).unwrap_err();
/// assert_eq!(err, ShapeBoxError::IndexOutOfBounds { index: 5, len: 0 });
/// assert_eq!(err.to_string(), "Index 5 out of range for box holding 0 shapes");
/// ```
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ShapeBoxError {
    /// The index does not refer to an occupied slot.
    #[error("Index {index} out of range for box holding {len} shapes")]
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// Number of shapes in the box at the time of the request.
        len: usize,
    },
    /// The box cannot accept another shape.
    #[error("Capacity {capacity} exceeded: box already holds {len} shapes ({policy} policy)")]
    CapacityExceeded {
        /// The configured capacity.
        capacity: isize,
        /// Number of shapes in the box at the time of the request.
        len: usize,
        /// The boundary rule that rejected the append.
        policy: CapacityPolicy,
    },
    /// A bulk removal found no shape of the requested kind.
    #[error("No {kind} found in box")]
    ShapeNotFound {
        /// The kind that was searched for.
        kind: ShapeKind,
    },
}

// =============================================================================
// SHAPE BOX
// =============================================================================

/// An ordered collection of shapes bounded by a capacity.
///
/// # Generic Parameters
///
/// * `T` - The scalar type of shape dimensions (`f64` by default)
///
/// # Construction
///
/// Use [`ShapeBox::new`] for the default policy, [`ShapeBox::with_policy`] to pick one, or
/// [`ShapeBoxBuilder`] to also seed initial shapes:
///
/// ```rust
/// use shapebox::prelude::*;
///
/// let shape_box: ShapeBox = ShapeBoxBuilder::default()
///     .capacity(2)
///     .capacity_policy(CapacityPolicy::Strict)
///     .shapes(vec![Shape::triangle(5.0)])
///     .build()
///     .unwrap();
/// assert_eq!(shape_box.len(), 1);
///
/// // Seeded shapes must fit the policy.
/// let overfull = ShapeBoxBuilder::<f64>::default()
///     .capacity(1)
///     .capacity_policy(CapacityPolicy::Strict)
///     .shapes(vec![Shape::triangle(1.0), Shape::triangle(2.0)])
///     .build();
/// assert!(overfull.is_err());
/// ```
#[derive(Builder, Clone, Debug, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct ShapeBox<T = f64>
where
    T: ShapeScalar,
{
    /// Configured capacity. Zero and negative values are accepted.
    capacity: isize,
    /// Boundary rule for appends.
    #[builder(default)]
    capacity_policy: CapacityPolicy,
    /// Shapes in insertion order.
    #[builder(default)]
    shapes: Vec<Shape<T>>,
}

impl<T> ShapeBoxBuilder<T>
where
    T: ShapeScalar,
{
    fn validate(&self) -> Result<(), String> {
        let Some(capacity) = self.capacity else {
            // Missing capacity is reported by the generated build function.
            return Ok(());
        };
        let policy = self.capacity_policy.unwrap_or_default();
        let len = self.shapes.as_ref().map_or(0, Vec::len);
        let max_len = policy.max_len(capacity);
        if len > max_len {
            return Err(format!(
                "{len} initial shapes exceed capacity {capacity} ({policy} policy allows {max_len})"
            ));
        }
        Ok(())
    }
}

impl<T> ShapeBox<T>
where
    T: ShapeScalar,
{
    /// Creates an empty box with the default [`CapacityPolicy`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shapebox::core::shape_box::ShapeBox;
    ///
    /// let shape_box: ShapeBox = ShapeBox::new(3);
    /// assert!(shape_box.is_empty());
    /// assert_eq!(shape_box.capacity(), 3);
    /// ```
    #[must_use]
    pub const fn new(capacity: isize) -> Self {
        Self::with_policy(capacity, CapacityPolicy::DEFAULT)
    }

    /// Creates an empty box with an explicit [`CapacityPolicy`].
    #[must_use]
    pub const fn with_policy(capacity: isize, capacity_policy: CapacityPolicy) -> Self {
        Self {
            capacity,
            capacity_policy,
            shapes: Vec::new(),
        }
    }

    /// Returns the configured capacity.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> isize {
        self.capacity
    }

    /// Returns the boundary rule for appends.
    #[inline]
    #[must_use]
    pub const fn capacity_policy(&self) -> CapacityPolicy {
        self.capacity_policy
    }

    /// Number of shapes currently held.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns `true` if the box holds no shapes.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Read-only view of the shapes in insertion order.
    #[inline]
    #[must_use]
    pub fn shapes(&self) -> &[Shape<T>] {
        &self.shapes
    }

    /// Iterates over the shapes in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Shape<T>> {
        self.shapes.iter()
    }

    /// Counts the shapes of the given kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shapebox::prelude::*;
    ///
    /// let mut shape_box: ShapeBox = ShapeBox::new(5);
    /// shape_box.add_shape(Circle::new(1.0)).unwrap();
    /// shape_box.add_shape(Circle::new(2.0)).unwrap();
    /// shape_box.add_shape(Triangle::new(3.0)).unwrap();
    /// assert_eq!(shape_box.count_of(ShapeKind::Circle), 2);
    /// assert_eq!(shape_box.count_of(ShapeKind::Rectangle), 0);
    /// ```
    #[must_use]
    pub fn count_of(&self, kind: ShapeKind) -> usize {
        self.shapes.iter().filter(|s| s.kind() == kind).count()
    }

    /// Appends a shape to the end of the box.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeBoxError::CapacityExceeded`] if the capacity policy rejects the append.
    /// With the default lenient policy that happens only when `capacity < len`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shapebox::prelude::*;
    ///
    /// let mut shape_box: ShapeBox = ShapeBox::new(1);
    /// assert!(shape_box.add_shape(Triangle::new(1.0)).is_ok());
    /// assert!(shape_box.add_shape(Triangle::new(2.0)).is_ok()); // len == capacity still admits
    /// assert!(matches!(
    ///     shape_box.add_shape(Triangle::new(3.0)),
    ///     Err(ShapeBoxError::CapacityExceeded { capacity: 1, len: 2, .. })
    /// ));
    /// ```
    pub fn add_shape(&mut self, shape: impl Into<Shape<T>>) -> Result<(), ShapeBoxError> {
        let shape = shape.into();
        let len = self.shapes.len();
        if !self.capacity_policy.admits(self.capacity, len) {
            tracing::debug!(
                capacity = self.capacity,
                len,
                policy = %self.capacity_policy,
                "rejected shape: capacity exceeded"
            );
            return Err(ShapeBoxError::CapacityExceeded {
                capacity: self.capacity,
                len,
                policy: self.capacity_policy,
            });
        }
        tracing::debug!(%shape, index = len, "added shape");
        self.shapes.push(shape);
        Ok(())
    }

    /// Returns the shape at `index` without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeBoxError::IndexOutOfBounds`] if `index >= len`.
    pub fn get_by_index(&self, index: usize) -> Result<Shape<T>, ShapeBoxError> {
        self.shapes
            .get(index)
            .copied()
            .ok_or_else(|| self.out_of_bounds(index))
    }

    /// Removes and returns the shape at `index`, shifting later shapes one slot earlier.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeBoxError::IndexOutOfBounds`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shapebox::prelude::*;
    ///
    /// let mut shape_box: ShapeBox = ShapeBox::new(3);
    /// shape_box.add_shape(Circle::new(1.0)).unwrap();
    /// shape_box.add_shape(Triangle::new(2.0)).unwrap();
    ///
    /// assert_eq!(shape_box.extract_by_index(0).unwrap(), Shape::circle(1.0));
    /// assert_eq!(shape_box.get_by_index(0).unwrap(), Shape::triangle(2.0));
    /// assert_eq!(shape_box.len(), 1);
    /// ```
    pub fn extract_by_index(&mut self, index: usize) -> Result<Shape<T>, ShapeBoxError> {
        self.check_index(index)?;
        let shape = self.shapes.remove(index);
        tracing::debug!(%shape, index, remaining = self.shapes.len(), "extracted shape");
        Ok(shape)
    }

    /// Overwrites the shape at `index` and returns the shape now stored there.
    ///
    /// The displaced shape is dropped; the return value is the replacement.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeBoxError::IndexOutOfBounds`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shapebox::prelude::*;
    ///
    /// let mut shape_box: ShapeBox = ShapeBox::new(3);
    /// shape_box.add_shape(Circle::new(1.0)).unwrap();
    ///
    /// let stored = shape_box.replace_by_index(0, Triangle::new(5.0)).unwrap();
    /// assert_eq!(stored, Shape::triangle(5.0));
    /// assert_eq!(shape_box.get_by_index(0).unwrap(), Shape::triangle(5.0));
    /// ```
    pub fn replace_by_index(
        &mut self,
        index: usize,
        shape: impl Into<Shape<T>>,
    ) -> Result<Shape<T>, ShapeBoxError> {
        let shape = shape.into();
        let len = self.shapes.len();
        let slot = self
            .shapes
            .get_mut(index)
            .ok_or(ShapeBoxError::IndexOutOfBounds { index, len })?;
        tracing::debug!(old = %slot, new = %shape, index, "replaced shape");
        *slot = shape;
        Ok(shape)
    }

    /// Sum of the perimeters of all shapes, in insertion order. `0` when empty.
    #[must_use]
    pub fn sum_perimeter(&self) -> T {
        self.shapes
            .iter()
            .fold(T::zero(), |acc, shape| acc + shape.perimeter())
    }

    /// Sum of the areas of all shapes, in insertion order. `0` when empty.
    #[must_use]
    pub fn sum_area(&self) -> T {
        self.shapes
            .iter()
            .fold(T::zero(), |acc, shape| acc + shape.area())
    }

    /// Removes every shape of `kind`, keeping the relative order of the rest.
    ///
    /// Returns the number of shapes removed.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeBoxError::ShapeNotFound`] if the box holds no shape of `kind`. The box
    /// is unchanged in that case.
    pub fn remove_all_of(&mut self, kind: ShapeKind) -> Result<usize, ShapeBoxError> {
        let before = self.shapes.len();
        self.shapes.retain(|shape| shape.kind() != kind);
        let removed = before - self.shapes.len();
        if removed == 0 {
            tracing::debug!(%kind, len = before, "bulk removal found nothing");
            return Err(ShapeBoxError::ShapeNotFound { kind });
        }
        tracing::debug!(%kind, removed, remaining = self.shapes.len(), "removed shapes");
        Ok(removed)
    }

    /// Removes every circle, keeping the relative order of the remaining shapes.
    ///
    /// Adjacent circles are all removed.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeBoxError::ShapeNotFound`] with kind [`ShapeKind::Circle`] if the box
    /// holds no circle.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shapebox::prelude::*;
    ///
    /// let mut shape_box: ShapeBox = ShapeBox::new(4);
    /// shape_box.add_shape(Circle::new(1.0)).unwrap();
    /// shape_box.add_shape(Circle::new(2.0)).unwrap();
    /// shape_box.add_shape(Triangle::new(3.0)).unwrap();
    ///
    /// shape_box.remove_all_circles().unwrap();
    /// assert_eq!(shape_box.shapes(), &[Shape::triangle(3.0)]);
    ///
    /// assert_eq!(
    ///     shape_box.remove_all_circles(),
    ///     Err(ShapeBoxError::ShapeNotFound { kind: ShapeKind::Circle })
    /// );
    /// ```
    pub fn remove_all_circles(&mut self) -> Result<(), ShapeBoxError> {
        self.remove_all_of(ShapeKind::Circle).map(|_| ())
    }

    fn check_index(&self, index: usize) -> Result<(), ShapeBoxError> {
        if index < self.shapes.len() {
            Ok(())
        } else {
            Err(self.out_of_bounds(index))
        }
    }

    fn out_of_bounds(&self, index: usize) -> ShapeBoxError {
        let len = self.shapes.len();
        tracing::debug!(index, len, "index out of bounds");
        ShapeBoxError::IndexOutOfBounds { index, len }
    }
}

impl<'a, T> IntoIterator for &'a ShapeBox<T>
where
    T: ShapeScalar,
{
    type Item = &'a Shape<T>;
    type IntoIter = std::slice::Iter<'a, Shape<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}

// =============================================================================
// TESTS
// =============================================================================
