//! The house demo domain
//!
//! Scene assembly parameters, the procedural scene builder, and the two
//! frame-driven animators (camera arc and rotating light pair).

pub mod animation;
pub mod builder;
pub mod params;

// Re-export main types
pub use animation::{CameraAnimator, CameraState, LightAnimator};
pub use builder::{build_house_scene, HouseLayout, HouseScene};
pub use params::HouseParams;
