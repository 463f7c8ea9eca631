//! # shapebox
//!
//! This is a library for holding plane shapes in a bounded, order-preserving container and
//! querying aggregate measures over them.
//!
//! # Features
//!
//! - A closed set of shape variants: [`Circle`](geometry::shape::Circle),
//!   [`Rectangle`](geometry::shape::Rectangle), and [`Triangle`](geometry::shape::Triangle)
//! - Generic floating-point dimensions (`f32`, `f64`, and other types implementing
//!   [`ShapeScalar`](geometry::traits::measurable::ShapeScalar))
//! - A bounded container, [`ShapeBox`](core::shape_box::ShapeBox), with indexed access,
//!   extraction, replacement, perimeter/area sums, and bulk removal by kind
//! - Configurable capacity boundary via [`CapacityPolicy`](core::capacity::CapacityPolicy)
//!
//! # Basic Usage
//!
//! ```rust
//! use shapebox::prelude::*;
//! use approx::assert_relative_eq;
//!
//! let mut shape_box: ShapeBox = ShapeBox::new(4);
//! shape_box.add_shape(Rectangle::new(4.0, 8.0)).unwrap();
//! shape_box.add_shape(Circle::new(12.0)).unwrap();
//! shape_box.add_shape(Triangle::new(5.0)).unwrap();
//!
//! assert_eq!(shape_box.len(), 3);
//! assert_relative_eq!(shape_box.sum_area(), 32.0 + 452.389_342_116_930_3 + 12.5, epsilon = 1e-9);
//!
//! // Bad indices are reported, never panicked on.
//! assert!(matches!(
//!     shape_box.get_by_index(5),
//!     Err(ShapeBoxError::IndexOutOfBounds { index: 5, len: 3 })
//! ));
//! ```
//!
//! # Container Invariants
//!
//! - **Insertion order** – shapes keep the order they were added in; extraction and bulk
//!   removal close gaps by shifting later shapes earlier.
//! - **Capacity** – an append succeeds only if the box's [`CapacityPolicy`](core::capacity::CapacityPolicy)
//!   admits it. The default lenient policy rejects only when `capacity < len`, so a box of
//!   capacity `n` can hold `n + 1` shapes.
//! - **No partial mutation** – every failed operation leaves the box unchanged.
//! - **Value semantics** – shapes are immutable `Copy` values; extracted shapes keep no link
//!   to the box.
//!
//! ## Error handling
//!
//! All fallible operations return [`ShapeBoxError`](core::shape_box::ShapeBoxError):
//!
//! | Error | Raised by |
//! |---|---|
//! | `IndexOutOfBounds` | `get_by_index`, `extract_by_index`, `replace_by_index` |
//! | `CapacityExceeded` | `add_shape` |
//! | `ShapeNotFound` | `remove_all_circles`, `remove_all_of` |
//!
//! ## Logging
//!
//! Mutations and rejected operations emit `tracing` events at `DEBUG` level. The library
//! never installs a subscriber.

#![forbid(unsafe_code)]

#[macro_use]
extern crate derive_builder;

/// The `core` module contains the bounded shape container and its capacity rules.
pub mod core {
    /// Capacity boundary rules
    pub mod capacity;
    /// Bounded, order-preserving shape container
    pub mod shape_box;

    // Re-export the `core` modules.
    pub use capacity::*;
    pub use shape_box::*;
}

/// Contains the shape variants and the measurement traits they implement.
///
/// Shapes are generic over a [`ShapeScalar`](traits::measurable::ShapeScalar) and expose
/// area and perimeter through [`Measurable`](traits::measurable::Measurable).
pub mod geometry {
    pub mod shape;
    /// Traits module containing the scalar abstraction and the `Measurable` capability.
    pub mod traits {
        pub mod measurable;
        pub use measurable::*;
    }
    pub use shape::*;
    pub use traits::*;
}

/// A prelude module that re-exports commonly used types.
/// This makes it easier to import the most commonly used items from the crate.
pub mod prelude {
    pub use crate::core::{capacity::*, shape_box::*};
    pub use crate::geometry::{shape::*, traits::measurable::*};
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
