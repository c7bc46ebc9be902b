//! Fit a mesh into a fixed-size view volume.

use mesh_types::{Aabb, MeshBounds, Point3};
use nalgebra::Matrix4;

/// Centering and uniform scale that place a mesh in view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Framing {
    /// Midpoint of the mesh bounds.
    pub center: Point3<f32>,
    /// Uniform scale applied after centering.
    pub scale: f32,
}

impl Default for Framing {
    fn default() -> Self {
        Self {
            center: Point3::origin(),
            scale: 1.0,
        }
    }
}

impl Framing {
    /// Center on the box `min..max` and scale its longest side to `fit_extent`.
    ///
    /// A flat or point-like box (zero longest side) keeps a scale of 1.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::Point3;
    /// use mesh_viewer::Framing;
    ///
    /// let f = Framing::from_bounds(Point3::new(0.0, 0.0, 0.0), Point3::new(3.0, 1.0, 1.0), 1.5);
    /// assert_eq!(f.center, Point3::new(1.5, 0.5, 0.5));
    /// assert_eq!(f.scale, 0.5);
    /// ```
    #[must_use]
    pub fn from_bounds(min: Point3<f32>, max: Point3<f32>, fit_extent: f32) -> Self {
        Self::from_aabb(&Aabb::new(min, max), fit_extent)
    }

    /// Frame a bounding box. An empty box frames at the origin with scale 1.
    #[must_use]
    pub fn from_aabb(bounds: &Aabb, fit_extent: f32) -> Self {
        if bounds.is_empty() {
            return Self::default();
        }
        let largest = bounds.max_extent();
        let scale = if largest > 0.0 && largest.is_finite() {
            fit_extent / largest
        } else {
            1.0
        };
        Self {
            center: bounds.center(),
            scale,
        }
    }

    /// Frame anything with bounds, such as a loaded mesh.
    #[must_use]
    pub fn from_mesh<M: MeshBounds>(mesh: &M, fit_extent: f32) -> Self {
        mesh.bounds_opt()
            .map_or_else(Self::default, |b| Self::from_aabb(&b, fit_extent))
    }

    /// Map a mesh-space point into view space.
    #[must_use]
    pub fn apply(&self, point: &Point3<f32>) -> Point3<f32> {
        Point3::from((point - self.center) * self.scale)
    }

    /// Model matrix: translate by `-center`, then scale.
    #[must_use]
    pub fn model_matrix(&self) -> Matrix4<f32> {
        Matrix4::new_scaling(self.scale) * Matrix4::new_translation(&(-self.center.coords))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use mesh_types::{NormalOptions, ShadedMesh};

    #[test]
    fn degenerate_bounds_keep_unit_scale() {
        let p = Point3::new(2.0, 2.0, 2.0);
        let f = Framing::from_bounds(p, p, 1.5);
        assert_eq!(f.center, p);
        assert_eq!(f.scale, 1.0);
    }

    #[test]
    fn empty_box_frames_at_origin() {
        assert_eq!(Framing::from_aabb(&Aabb::empty(), 1.5), Framing::default());
    }

    #[test]
    fn swapped_corners_frame_the_same_box() {
        let a = Framing::from_bounds(Point3::new(0.0, 0.0, 0.0), Point3::new(4.0, 2.0, 1.0), 2.0);
        let b = Framing::from_bounds(Point3::new(4.0, 2.0, 1.0), Point3::new(0.0, 0.0, 0.0), 2.0);
        assert_eq!(a, b);
        assert_eq!(a.center, Point3::new(2.0, 1.0, 0.5));
        assert_relative_eq!(a.scale, 0.5);
    }

    #[test]
    fn empty_mesh_frames_at_origin() {
        let f = Framing::from_mesh(&ShadedMesh::new(), 1.5);
        assert_eq!(f, Framing::default());
    }

    #[test]
    fn model_matrix_matches_apply() {
        let f = Framing::from_bounds(Point3::new(-1.0, 2.0, 0.0), Point3::new(3.0, 4.0, 1.0), 2.0);
        let p = Point3::new(3.0, 4.0, 1.0);
        let via_matrix = f.model_matrix().transform_point(&p);
        let direct = f.apply(&p);
        assert_relative_eq!(via_matrix, direct, epsilon = 1e-6);
        assert_relative_eq!(direct, Point3::new(1.0, 0.5, 0.25), epsilon = 1e-6);
    }

    #[test]
    fn framed_mesh_fits_extent() {
        let mut mesh = ShadedMesh::new();
        mesh.populate(
            vec![-1.0, 2.0, 0.0, 3.0, -4.0, 5.0],
            Vec::new(),
            NormalOptions::default(),
        )
        .unwrap();
        let f = Framing::from_mesh(&mesh, 1.5);
        assert_eq!(f.center, Point3::new(1.0, -1.0, 2.5));
        assert_relative_eq!(f.scale, 0.25);
    }
}
