//! Graphics layer
//!
//! Everything GPU-facing lives here: the camera, procedural geometry,
//! scene graph, material and texture resources, and the forward renderer.

pub mod camera;
pub mod geometry;
pub mod rendering;
pub mod resources;
pub mod scene;

// Re-export main types
pub use camera::{ArcCamera, CameraUniform};
pub use rendering::RenderEngine;
pub use resources::{DirectionalLight, Lighting, Material, MaterialManager};
pub use scene::{Object, Scene, Vertex3D};
