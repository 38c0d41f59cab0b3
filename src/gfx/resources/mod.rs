//! GPU resource management
//!
//! Handles textures, materials, and global uniform bind groups.

pub mod global_bindings;
pub mod material;
pub mod texture_resource;

// Re-export main types
pub use global_bindings::{update_global_ubo, DirectionalLight, GlobalBindings, GlobalUBO, Lighting};
pub use material::{Material, MaterialManager, TextureLoadError};
pub use texture_resource::TextureResource;
