//! Viewer state: the selected mesh, its framing and the camera.

use std::fmt;

use mesh_io::LoadOptions;
use mesh_types::{Point3, ShadedMesh};
use nalgebra::Matrix4;
use tracing::{info, warn};

use crate::catalog::MeshCatalog;
use crate::error::ViewerResult;
use crate::framing::Framing;
use crate::orbit::OrbitCamera;
use crate::params::ViewParams;

/// User input the viewer reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Mouse moved with the left button down.
    Drag {
        /// Horizontal motion in pixels.
        dx: f32,
        /// Vertical motion in pixels.
        dy: f32,
        /// Shift held: zoom instead of rotate.
        shift: bool,
    },
    /// Scroll wheel.
    Scroll {
        /// Vertical scroll steps.
        dy: f32,
    },
    /// Show the next file.
    NextMesh,
    /// Show the previous file.
    PreviousMesh,
}

/// A browsing session over a [`MeshCatalog`].
#[derive(Debug, Clone)]
pub struct ViewerSession {
    catalog: MeshCatalog,
    mesh: ShadedMesh,
    framing: Framing,
    camera: OrbitCamera,
    options: LoadOptions,
    params: ViewParams,
}

impl ViewerSession {
    /// Start a session and load the catalog's current file.
    ///
    /// # Errors
    ///
    /// Fails if the first mesh cannot be loaded.
    pub fn open(
        catalog: MeshCatalog,
        options: LoadOptions,
        params: ViewParams,
    ) -> ViewerResult<Self> {
        let mesh = catalog.load_current(&options)?;
        let framing = Framing::from_mesh(&mesh, params.fit_extent);
        info!(file = catalog.current_name(), "Opened viewer session");
        Ok(Self {
            catalog,
            mesh,
            framing,
            camera: OrbitCamera::new(params),
            options,
            params,
        })
    }

    /// Mesh on display.
    #[must_use]
    pub const fn mesh(&self) -> &ShadedMesh {
        &self.mesh
    }

    /// The catalog being browsed.
    #[must_use]
    pub const fn catalog(&self) -> &MeshCatalog {
        &self.catalog
    }

    /// Framing of the current mesh.
    #[must_use]
    pub const fn framing(&self) -> &Framing {
        &self.framing
    }

    /// Camera state.
    #[must_use]
    pub const fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    /// React to one input event.
    ///
    /// # Errors
    ///
    /// Switching files fails if the new file cannot be loaded. The previous
    /// mesh stays on display, but the catalog cursor has moved, so the next
    /// switch continues from the failed entry.
    pub fn handle(&mut self, event: InputEvent) -> ViewerResult<()> {
        match event {
            InputEvent::Drag { dx, dy, shift } => self.camera.drag(dx, dy, shift),
            InputEvent::Scroll { dy } => self.camera.zoom(dy),
            InputEvent::NextMesh => {
                self.catalog.next_mesh();
                self.reload()?;
            }
            InputEvent::PreviousMesh => {
                self.catalog.previous_mesh();
                self.reload()?;
            }
        }
        Ok(())
    }

    /// Load the catalog's current file into a fresh mesh and reframe.
    ///
    /// # Errors
    ///
    /// On failure the previously loaded mesh and framing are kept.
    pub fn reload(&mut self) -> ViewerResult<()> {
        match self.catalog.load_current(&self.options) {
            Ok(mesh) => {
                self.framing = Framing::from_mesh(&mesh, self.params.fit_extent);
                self.mesh = mesh;
                info!(file = self.catalog.current_name(), "Switched mesh");
                Ok(())
            }
            Err(e) => {
                warn!(file = self.catalog.current_name(), error = %e, "Keeping previous mesh");
                Err(e)
            }
        }
    }

    /// Combined projection * view * model matrix for the current frame.
    #[must_use]
    pub fn mvp(&self, aspect: f32) -> Matrix4<f32> {
        self.camera.projection(aspect) * self.camera.view_matrix() * self.framing.model_matrix()
    }

    /// Summary of what is on screen.
    #[must_use]
    pub fn report(&self) -> MeshReport {
        MeshReport::new(self.catalog.current_name(), &self.mesh, &self.framing, &self.camera)
    }
}

/// Printable summary of a loaded mesh and how it is viewed.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshReport {
    /// File name.
    pub name: String,
    /// Vertex count.
    pub vertices: usize,
    /// Triangle count.
    pub triangles: usize,
    /// Faces left out of normal estimation.
    pub degenerate_faces: usize,
    /// Per-axis minimum.
    pub min: Point3<f32>,
    /// Per-axis maximum.
    pub max: Point3<f32>,
    /// View framing.
    pub framing: Framing,
    /// Camera eye position.
    pub eye: Point3<f32>,
}

impl MeshReport {
    /// Collect a report.
    #[must_use]
    pub fn new(name: &str, mesh: &ShadedMesh, framing: &Framing, camera: &OrbitCamera) -> Self {
        Self {
            name: name.to_string(),
            vertices: mesh.num_vertices(),
            triangles: mesh.num_triangles(),
            degenerate_faces: mesh.degenerate_faces(),
            min: mesh.min_bounds(),
            max: mesh.max_bounds(),
            framing: *framing,
            eye: camera.eye(),
        }
    }
}

impl fmt::Display for MeshReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = |p: &Point3<f32>| format!("({:.4}, {:.4}, {:.4})", p.x, p.y, p.z);
        writeln!(f, "{}", self.name)?;
        writeln!(
            f,
            "  vertices: {}  triangles: {}  degenerate: {}",
            self.vertices, self.triangles, self.degenerate_faces
        )?;
        writeln!(f, "  bounds:   {} .. {}", p(&self.min), p(&self.max))?;
        writeln!(
            f,
            "  framing:  center {} scale {:.4}",
            p(&self.framing.center),
            self.framing.scale
        )?;
        write!(f, "  eye:      {}", p(&self.eye))
    }
}
