//! Capacity boundary rules for [`ShapeBox`](crate::core::shape_box::ShapeBox).
//!
//! The historical boundary check compares the configured capacity against the current
//! length *before* appending, and rejects only when `capacity < len`. A box with capacity
//! `n` therefore accepts `n + 1` shapes. [`CapacityPolicy::Lenient`] keeps that rule and is
//! the default; [`CapacityPolicy::Strict`] enforces `len <= capacity`.

use std::fmt;

/// Rule deciding whether one more shape may be appended.
///
/// # Examples
///
/// ```
/// use shapebox::core::capacity::CapacityPolicy;
///
/// // Lenient: a full box still admits one more.
/// assert!(CapacityPolicy::Lenient.admits(2, 2));
/// assert!(!CapacityPolicy::Lenient.admits(2, 3));
///
/// // Strict: a full box rejects.
/// assert!(CapacityPolicy::Strict.admits(2, 1));
/// assert!(!CapacityPolicy::Strict.admits(2, 2));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CapacityPolicy {
    /// Reject only when `capacity < len`. Allows overfilling by exactly one.
    #[default]
    Lenient,
    /// Reject when `len >= capacity`.
    Strict,
}

impl CapacityPolicy {
    /// The policy used by [`ShapeBox::new`](crate::core::shape_box::ShapeBox::new).
    pub const DEFAULT: Self = Self::Lenient;

    /// Returns `true` if a container holding `len` shapes with the given `capacity` may
    /// accept one more.
    ///
    /// Capacity is signed and never validated: a negative capacity rejects every append.
    #[must_use]
    pub fn admits(self, capacity: isize, len: usize) -> bool {
        let Ok(len) = isize::try_from(len) else {
            return false;
        };
        match self {
            Self::Lenient => capacity >= len,
            Self::Strict => capacity > len,
        }
    }

    /// Largest number of shapes a container with `capacity` can end up holding.
    ///
    /// Returns `0` for negative capacities.
    #[must_use]
    pub fn max_len(self, capacity: isize) -> usize {
        usize::try_from(capacity).map_or(0, |capacity| match self {
            Self::Lenient => capacity.saturating_add(1),
            Self::Strict => capacity,
        })
    }
}

impl fmt::Display for CapacityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lenient => f.write_str("lenient"),
            Self::Strict => f.write_str("strict"),
        }
    }
}
