//! Headless PLY mesh browser.
//!
//! The logic behind an interactive mesh viewer, without a window:
//!
//! - [`MeshCatalog`] - files in a directory with next/previous cycling
//! - [`Framing`] - center and scale a mesh from its bounds
//! - [`OrbitCamera`] - drag to orbit, scroll or shift-drag to zoom
//! - [`ViewerSession`] - ties them together and reacts to [`InputEvent`]s
//!
//! Every file switch loads into a brand-new mesh; a mesh is never reloaded.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

mod catalog;
mod error;
mod framing;
mod orbit;
mod params;
mod session;

pub use catalog::MeshCatalog;
pub use error::{ViewerError, ViewerResult};
pub use framing::Framing;
pub use orbit::{CameraBasis, OrbitCamera};
pub use params::ViewParams;
pub use session::{InputEvent, MeshReport, ViewerSession};
