//! Narrow-phase overlap predicates between axis-aligned rectangles and
//! circles.

use crate::num::Number;
use crate::shape::{Circle, Rectangle};

/// Checks if two axis-aligned rectangles overlap.
///
/// Closed-interval test: touching edges count as overlapping.
#[must_use]
pub fn rectangles_overlap<T: Number>(r1: Rectangle<T>, r2: Rectangle<T>) -> bool {
    let (min1, max1) = (r1.min(), r1.max());
    let (min2, max2) = (r2.min(), r2.max());

    min1.x <= max2.x && min2.x <= max1.x && min1.y <= max2.y && min2.y <= max1.y
}

/// Checks if two circles overlap.
///
/// Strict test: circles whose distance exactly equals the summed radii do
/// not overlap.
#[must_use]
pub fn circles_overlap<T: Number>(c1: Circle<T>, c2: Circle<T>) -> bool {
    c1.center
        .subtract(c2.center)
        .shorter_than(c1.radius + c2.radius)
}

/// Checks if an axis-aligned rectangle and a circle overlap.
///
/// Voronoi-region test in three tiers, none of which takes a square root:
/// reject when the center is outside the rectangle expanded by the radius,
/// accept when the center projects into one of the rectangle's axis slabs,
/// otherwise compare squared distance to the nearest corner.
#[must_use]
pub fn rectangle_circle_overlap<T: Number>(rectangle: Rectangle<T>, circle: Circle<T>) -> bool {
    let delta = circle.center.subtract(rectangle.center).abs();
    let half_extents = rectangle.size.scale(0.5).to_vector();

    // Circle center is more than its radius outside the rectangle borders.
    if delta.x > half_extents.x + circle.radius || delta.y > half_extents.y + circle.radius {
        return false;
    }

    // Circle center projects inside one of the axis-aligned slabs.
    if delta.x <= half_extents.x || delta.y <= half_extents.y {
        return true;
    }

    // Corner region: squared distance from the nearest corner.
    delta.subtract(half_extents).shorter_than(circle.radius)
}
