//! Integration tests for the public `ShapeBox` API.
//!
//! These tests drive the container only through the crate's public surface and pin the
//! behaviors that callers rely on:
//! - The lenient capacity boundary (one shape past capacity is admitted)
//! - Explicit bounds checks on every indexed operation
//! - Order preservation across extraction and bulk removal
//! - Removal of adjacent circles in a single pass
//! - No mutation on failure

use approx::assert_relative_eq;
use shapebox::prelude::*;
use std::f64::consts::PI;

// =============================================================================
// TEST FIXTURES
// =============================================================================

/// Rectangle(4, 8), Circle(12), Triangle(5) in a box of capacity 4.
fn demo_box() -> ShapeBox {
    let mut shape_box: ShapeBox = ShapeBox::new(4);
    shape_box.add_shape(Rectangle::new(4.0, 8.0)).unwrap();
    shape_box.add_shape(Circle::new(12.0)).unwrap();
    shape_box.add_shape(Triangle::new(5.0)).unwrap();
    shape_box
}

// =============================================================================
// CAPACITY
// =============================================================================

#[test]
fn test_capacity_two_scenario() {
    let mut shape_box: ShapeBox = ShapeBox::new(2);
    assert!(shape_box.add_shape(Rectangle::new(4.0, 8.0)).is_ok());
    assert!(shape_box.add_shape(Triangle::new(5.0)).is_ok());

    // len == capacity: still admitted under the lenient rule.
    assert!(shape_box.add_shape(Circle::new(1.0)).is_ok());

    // len > capacity: rejected.
    let err = shape_box.add_shape(Circle::new(2.0)).unwrap_err();
    assert_eq!(
        err,
        ShapeBoxError::CapacityExceeded {
            capacity: 2,
            len: 3,
            policy: CapacityPolicy::Lenient,
        }
    );
    assert_eq!(shape_box.len(), 3);
}

#[test]
fn test_strict_policy_scenario() {
    let mut shape_box: ShapeBox = ShapeBox::with_policy(2, CapacityPolicy::Strict);
    shape_box.add_shape(Rectangle::new(4.0, 8.0)).unwrap();
    shape_box.add_shape(Triangle::new(5.0)).unwrap();

    let err = shape_box.add_shape(Circle::new(1.0)).unwrap_err();
    assert!(
        err.to_string().contains("strict policy"),
        "unexpected message: {err}"
    );
}

#[test]
fn test_zero_capacity_admits_exactly_one() {
    let mut shape_box: ShapeBox = ShapeBox::new(0);
    assert!(shape_box.add_shape(Triangle::new(1.0)).is_ok());
    assert!(shape_box.add_shape(Triangle::new(1.0)).is_err());
}

// =============================================================================
// INDEXED OPERATIONS
// =============================================================================

#[test]
fn test_get_by_index_out_of_range() {
    let mut shape_box: ShapeBox = ShapeBox::new(2);
    shape_box.add_shape(Rectangle::new(4.0, 8.0)).unwrap();
    shape_box.add_shape(Triangle::new(5.0)).unwrap();

    match shape_box.get_by_index(5) {
        Err(ShapeBoxError::IndexOutOfBounds { index, len }) => {
            assert_eq!(index, 5);
            assert_eq!(len, 2);
        }
        other => panic!("Expected IndexOutOfBounds, got: {other:?}"),
    }
}

#[test]
fn test_every_indexed_operation_checks_bounds() {
    let mut shape_box = demo_box();
    let before = shape_box.clone();

    assert!(shape_box.get_by_index(3).is_err());
    assert!(shape_box.extract_by_index(3).is_err());
    assert!(shape_box.replace_by_index(3, Circle::new(1.0)).is_err());
    assert!(shape_box.extract_by_index(usize::MAX).is_err());

    assert_eq!(shape_box, before);
}

#[test]
fn test_extract_preserves_order() {
    let mut shape_box = demo_box();
    let next = shape_box.get_by_index(1).unwrap();

    let extracted = shape_box.extract_by_index(0).unwrap();
    assert_eq!(extracted, Shape::rectangle(4.0, 8.0));
    assert_eq!(shape_box.get_by_index(0).unwrap(), next);
    assert_eq!(
        shape_box.shapes(),
        &[Shape::circle(12.0), Shape::triangle(5.0)]
    );
}

#[test]
fn test_extracted_shape_is_detached() {
    let mut shape_box = demo_box();
    let extracted = shape_box.extract_by_index(1).unwrap();
    shape_box.replace_by_index(0, Triangle::new(9.0)).unwrap();

    assert_eq!(extracted, Shape::circle(12.0));
    assert_eq!(shape_box.count_of(ShapeKind::Circle), 0);
}

#[test]
fn test_replace_returns_replacement() {
    let mut shape_box = demo_box();
    let returned = shape_box.replace_by_index(2, Circle::new(3.0)).unwrap();
    assert_eq!(returned, Shape::circle(3.0));
    assert_eq!(shape_box.get_by_index(2).unwrap(), Shape::circle(3.0));
}

// =============================================================================
// AGGREGATES
// =============================================================================

#[test]
fn test_sums() {
    let shape_box = demo_box();
    assert_relative_eq!(shape_box.sum_area(), 32.0 + 144.0 * PI + 12.5, epsilon = 1e-9);
    assert_relative_eq!(shape_box.sum_perimeter(), 24.0 + 24.0 * PI + 15.0, epsilon = 1e-9);

    let expected_area: f64 = shape_box.iter().map(|s| s.area()).sum();
    assert_relative_eq!(shape_box.sum_area(), expected_area);
}

#[test]
fn test_reference_measures() {
    let circle = Circle::new(12.0);
    assert_relative_eq!(circle.area(), 452.389, epsilon = 1e-3);
    assert_relative_eq!(circle.perimeter(), 75.398, epsilon = 1e-3);

    let triangle = Triangle::new(5.0);
    assert_relative_eq!(triangle.area(), 12.5);
    assert_relative_eq!(triangle.perimeter(), 15.0);
}

// =============================================================================
// BULK REMOVAL
// =============================================================================

#[test]
fn test_remove_all_circles_adjacent() {
    let mut shape_box: ShapeBox = ShapeBox::new(5);
    shape_box.add_shape(Triangle::new(1.0)).unwrap();
    shape_box.add_shape(Circle::new(1.0)).unwrap();
    shape_box.add_shape(Circle::new(2.0)).unwrap();
    shape_box.add_shape(Circle::new(3.0)).unwrap();
    shape_box.add_shape(Rectangle::new(1.0, 2.0)).unwrap();

    shape_box.remove_all_circles().unwrap();

    assert_eq!(shape_box.count_of(ShapeKind::Circle), 0);
    assert_eq!(
        shape_box.shapes(),
        &[Shape::triangle(1.0), Shape::rectangle(1.0, 2.0)]
    );
}

#[test]
fn test_remove_all_circles_only_circles() {
    let mut shape_box: ShapeBox = ShapeBox::new(3);
    for radius in [1.0, 2.0, 3.0] {
        shape_box.add_shape(Circle::new(radius)).unwrap();
    }
    shape_box.remove_all_circles().unwrap();
    assert!(shape_box.is_empty());
    assert_relative_eq!(shape_box.sum_area(), 0.0);
}

#[test]
fn test_remove_all_circles_not_found() {
    let mut shape_box: ShapeBox = ShapeBox::new(3);
    shape_box.add_shape(Rectangle::new(4.0, 8.0)).unwrap();
    let before = shape_box.clone();

    let err = shape_box.remove_all_circles().unwrap_err();
    assert_eq!(
        err,
        ShapeBoxError::ShapeNotFound {
            kind: ShapeKind::Circle
        }
    );
    assert_eq!(err.to_string(), "No circle found in box");
    assert_eq!(shape_box, before);
}

#[test]
fn test_removed_slots_are_reusable() {
    let mut shape_box: ShapeBox = ShapeBox::with_policy(2, CapacityPolicy::Strict);
    shape_box.add_shape(Circle::new(1.0)).unwrap();
    shape_box.add_shape(Circle::new(2.0)).unwrap();
    assert!(shape_box.add_shape(Triangle::new(1.0)).is_err());

    shape_box.remove_all_circles().unwrap();
    assert!(shape_box.add_shape(Triangle::new(1.0)).is_ok());
    assert!(shape_box.add_shape(Triangle::new(2.0)).is_ok());
}
