pub mod arc_camera;
pub mod camera_utils;

// Re-export main types
pub use arc_camera::ArcCamera;
pub use camera_utils::CameraUniform;
