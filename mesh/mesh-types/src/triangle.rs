//! Triangle type for face normal calculations.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A triangle with concrete vertex positions.
///
/// Winding is **counter-clockwise (CCW) when viewed from the front**
/// (normal points toward viewer).
///
/// # Example
///
/// ```
/// use mesh_types::{Triangle, Point3};
///
/// let tri = Triangle::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// );
///
/// // Normal points in +Z direction
/// let normal = tri.normal().unwrap();
/// assert_eq!(normal.z, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Triangle {
    /// First vertex.
    pub v0: Point3<f32>,
    /// Second vertex.
    pub v1: Point3<f32>,
    /// Third vertex.
    pub v2: Point3<f32>,
}

impl Triangle {
    /// Create a new triangle from three points.
    #[inline]
    #[must_use]
    pub const fn new(v0: Point3<f32>, v1: Point3<f32>, v2: Point3<f32>) -> Self {
        Self { v0, v1, v2 }
    }

    /// Build a triangle from a flat position buffer and three vertex indices.
    ///
    /// Returns `None` if any index addresses past the end of `positions`.
    #[must_use]
    pub fn from_flat(positions: &[f32], [i0, i1, i2]: [u32; 3]) -> Option<Self> {
        let point = |i: u32| {
            let base = usize::try_from(i).ok()?.checked_mul(3)?;
            let c = positions.get(base..base + 3)?;
            Some(Point3::new(c[0], c[1], c[2]))
        };
        Some(Self::new(point(i0)?, point(i1)?, point(i2)?))
    }

    /// Compute the (unnormalized) face normal via cross product.
    ///
    /// The direction follows the right-hand rule with CCW winding.
    /// The magnitude equals twice the triangle's area.
    #[inline]
    #[must_use]
    pub fn normal_unnormalized(&self) -> Vector3<f32> {
        let e1 = self.v1 - self.v0;
        let e2 = self.v2 - self.v0;
        e1.cross(&e2)
    }

    /// Compute the unit face normal.
    ///
    /// Returns `None` for degenerate triangles: zero area, or a cross
    /// product that overflowed to a non-finite length.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{Triangle, Point3};
    ///
    /// // Degenerate triangle (collinear points)
    /// let degen = Triangle::new(
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(1.0, 0.0, 0.0),
    ///     Point3::new(2.0, 0.0, 0.0),
    /// );
    /// assert!(degen.normal().is_none());
    /// ```
    #[must_use]
    pub fn normal(&self) -> Option<Vector3<f32>> {
        let n = self.normal_unnormalized();
        let len = n.norm();
        if len > 0.0 && len.is_finite() {
            Some(n / len)
        } else {
            None
        }
    }
}
