//! # Scene Management Module
//!
//! Scene graph types for the house demo: objects built from procedural
//! geometry, a centralized material store, and the scene's light set.
//!
//! Objects carry their mesh data on the CPU and upload GPU buffers lazily,
//! so scenes can be assembled and inspected in tests without a device.

pub mod object;
pub mod scene;
pub mod vertex;

// Re-export main types
pub use object::{DrawObject, Mesh, Object};
pub use scene::Scene;
pub use vertex::Vertex3D;
