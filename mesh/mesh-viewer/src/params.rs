//! View parameters.

/// Settings for framing and camera control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewParams {
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Near clip distance.
    pub near: f32,
    /// Far clip distance.
    pub far: f32,
    /// Size the largest mesh dimension is scaled to.
    pub fit_extent: f32,
    /// Orbit distance when a viewer starts.
    pub initial_radius: f32,
    /// Closest the camera may zoom in.
    pub min_radius: f32,
    /// Radians of rotation per pixel dragged.
    pub drag_sensitivity: f32,
    /// Radius change per scroll step or pixel of shift-drag.
    pub zoom_sensitivity: f32,
}

impl Default for ViewParams {
    fn default() -> Self {
        Self {
            fov_degrees: 60.0,
            near: 0.1,
            far: 50.0,
            fit_extent: 1.5,
            initial_radius: 5.0,
            min_radius: 1.0,
            drag_sensitivity: 0.01,
            zoom_sensitivity: 0.1,
        }
    }
}

impl ViewParams {
    /// Vertical field of view in radians.
    #[must_use]
    pub fn fov_radians(&self) -> f32 {
        self.fov_degrees.to_radians()
    }
}
