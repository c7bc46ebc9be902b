//! Orbit camera driven by mouse drags and scrolling.

use std::f32::consts::FRAC_PI_2;

use mesh_types::{Point3, Vector3};
use nalgebra::{Isometry3, Matrix4, Perspective3};

use crate::params::ViewParams;

/// Elevation stays this far from the poles so the camera frame stays defined.
const POLE_MARGIN: f32 = 1e-3;

/// Orthonormal camera frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBasis {
    /// Camera +X.
    pub right: Vector3<f32>,
    /// Camera +Y.
    pub up: Vector3<f32>,
    /// Camera +Z, pointing from the target back toward the eye.
    pub back: Vector3<f32>,
}

/// A camera circling `target` on a sphere of `radius`.
///
/// Azimuth is measured in the XZ plane from +X, elevation up from that plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    /// Distance from the target.
    pub radius: f32,
    /// Horizontal angle in radians.
    pub azimuth: f32,
    /// Vertical angle in radians.
    pub elevation: f32,
    /// Point the camera looks at.
    pub target: Point3<f32>,
    params: ViewParams,
}

impl OrbitCamera {
    /// Camera at the initial radius looking at the origin along -X.
    #[must_use]
    pub fn new(params: ViewParams) -> Self {
        Self {
            radius: params.initial_radius.max(params.min_radius),
            azimuth: 0.0,
            elevation: 0.0,
            target: Point3::origin(),
            params,
        }
    }

    /// Apply a mouse drag of `(dx, dy)` pixels.
    ///
    /// A plain drag rotates; with `zoom` held, the vertical motion zooms.
    pub fn drag(&mut self, dx: f32, dy: f32, zoom: bool) {
        if zoom {
            self.zoom(dy);
        } else {
            self.azimuth += dx * self.params.drag_sensitivity;
            let limit = FRAC_PI_2 - POLE_MARGIN;
            self.elevation = (self.elevation + dy * self.params.drag_sensitivity).clamp(-limit, limit);
        }
    }

    /// Move toward the target by `amount` steps, never closer than the minimum radius.
    pub fn zoom(&mut self, amount: f32) {
        self.radius =
            (self.radius - amount * self.params.zoom_sensitivity).max(self.params.min_radius);
    }

    /// Eye position in world space.
    #[must_use]
    pub fn eye(&self) -> Point3<f32> {
        let (sin_a, cos_a) = self.azimuth.sin_cos();
        let (sin_e, cos_e) = self.elevation.sin_cos();
        self.target
            + Vector3::new(
                self.radius * cos_a * cos_e,
                self.radius * sin_e,
                self.radius * sin_a * cos_e,
            )
    }

    /// Camera frame with world +Y as the reference up direction.
    #[must_use]
    pub fn basis(&self) -> CameraBasis {
        let back = (self.eye() - self.target).normalize();
        let right = Vector3::y().cross(&back).normalize();
        let up = back.cross(&right);
        CameraBasis { right, up, back }
    }

    /// World-to-camera transform.
    #[must_use]
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Isometry3::look_at_rh(&self.eye(), &self.target, &self.basis().up).to_homogeneous()
    }

    /// Perspective projection for a viewport of the given aspect ratio.
    #[must_use]
    pub fn projection(&self, aspect: f32) -> Matrix4<f32> {
        Perspective3::new(
            aspect,
            self.params.fov_radians(),
            self.params.near,
            self.params.far,
        )
        .to_homogeneous()
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(ViewParams::default())
    }
}
