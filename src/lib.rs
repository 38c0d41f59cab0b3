// src/lib.rs
//! Gable
//!
//! A procedural house-scene demo built on wgpu and winit: parametric room
//! boxes under a gabled roof on a tiled ground plane, with a ping-pong
//! camera arc and a counter-rotating directional light pair.

pub mod app;
pub mod gfx;
pub mod house;
pub mod wgpu_utils;

// Re-export main types for convenience
pub use app::GableApp;
pub use house::HouseParams;

/// Creates a Gable application with default scene parameters
pub fn default() -> anyhow::Result<GableApp> {
    GableApp::new(HouseParams::default())
}
