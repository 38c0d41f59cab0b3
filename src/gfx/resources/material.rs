//! Material system for the house scene
//!
//! Materials are either a solid color or a tiling texture. They live in a
//! centralized [`MaterialManager`] and objects reference them by id, so GPU
//! resources are shared between objects using the same material.
//!
//! Texture loading policy: [`Material::tiled`] surfaces a typed error for
//! callers that want to fail hard, while [`Material::tiled_or_fallback`]
//! recovers locally with a neutral gray so a missing image never blocks
//! scene construction.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;
use wgpu::Device;

use crate::wgpu_utils::{
    binding_builder::{BindGroupBuilder, BindGroupLayoutBuilder, BindGroupLayoutWithDesc},
    binding_types,
    uniform_buffer::UniformBuffer,
};

use super::texture_resource::TextureResource;

/// Material ID for referencing materials
pub type MaterialId = String;

/// Neutral gray used when a texture resource cannot be loaded
pub const FALLBACK_COLOR: [f32; 4] = [0.5, 0.5, 0.5, 1.0];

/// Error raised when a tiling texture cannot be loaded
#[derive(Debug, Error)]
pub enum TextureLoadError {
    #[error("failed to read texture file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to decode texture file {path}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// What a material renders as
#[derive(Debug)]
pub enum MaterialKind {
    /// Flat color, no texture
    Solid { color: [f32; 4] },
    /// Decoded image repeated `1 / tile_scale` times across the surface's
    /// [0,1] UV range
    Tiled {
        image: image::RgbaImage,
        tile_scale: f32,
    },
}

/// GPU uniform data for materials
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialUniform {
    pub base_color: [f32; 4],
    pub tile_scale: f32,
    pub use_texture: u32,
    _padding: [f32; 2],
}

type MaterialUBO = UniformBuffer<MaterialUniform>;

/// Material bind group management
#[derive(Debug)]
pub struct MaterialBindings {
    bind_group_layout: BindGroupLayoutWithDesc,
    bind_group: Option<wgpu::BindGroup>,
}

impl MaterialBindings {
    pub fn new(device: &Device) -> Self {
        let bind_group_layout = BindGroupLayoutBuilder::new()
            .next_binding_fragment(binding_types::uniform())
            .next_binding_fragment(binding_types::texture_2d())
            .next_binding_fragment(binding_types::sampler(wgpu::SamplerBindingType::Filtering))
            .create(device, "Material Bind Group");

        MaterialBindings {
            bind_group_layout,
            bind_group: None,
        }
    }

    pub fn create_bind_group(
        &mut self,
        device: &Device,
        ubo: &MaterialUBO,
        texture: &TextureResource,
    ) {
        self.bind_group = Some(
            BindGroupBuilder::new(&self.bind_group_layout)
                .resource(ubo.binding_resource())
                .texture(&texture.view)
                .sampler(&texture.sampler)
                .create(device, "Material Bind Group"),
        );
    }

    pub fn bind_group_layouts(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout.layout
    }
}

#[derive(Debug)]
struct MaterialGpuResources {
    bindings: MaterialBindings,
    // Kept alive for the bind group's sake
    _ubo: MaterialUBO,
    _texture: TextureResource,
}

/// A named solid or tiled material with lazily created GPU resources
#[derive(Debug)]
pub struct Material {
    pub name: String,
    pub kind: MaterialKind,
    gpu_resources: Option<MaterialGpuResources>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            kind: MaterialKind::Solid {
                color: [0.8, 0.8, 0.8, 1.0],
            },
            gpu_resources: None,
        }
    }
}

impl Material {
    /// Creates a solid-color material
    pub fn solid(name: &str, color: [f32; 4]) -> Self {
        Self {
            name: name.to_string(),
            kind: MaterialKind::Solid { color },
            gpu_resources: None,
        }
    }

    /// Loads a tiling texture material from an image file
    ///
    /// The texture repeats `tiles_per_side` times across the surface's full
    /// [0,1] UV range; the stored tile scale is `1 / max(1, tiles_per_side)`.
    pub fn tiled(
        name: &str,
        path: &Path,
        tiles_per_side: u32,
    ) -> Result<Self, TextureLoadError> {
        let dynamic = image::open(path).map_err(|source| match source {
            image::ImageError::IoError(source) => TextureLoadError::Io {
                path: path.to_path_buf(),
                source,
            },
            source => TextureLoadError::Decode {
                path: path.to_path_buf(),
                source,
            },
        })?;

        Ok(Self {
            name: name.to_string(),
            kind: MaterialKind::Tiled {
                image: dynamic.into_rgba8(),
                tile_scale: Self::tile_scale(tiles_per_side),
            },
            gpu_resources: None,
        })
    }

    /// Loads a tiling texture material, falling back to neutral gray
    ///
    /// A missing or undecodable image is logged and replaced by a solid
    /// material; it never blocks scene construction.
    pub fn tiled_or_fallback(name: &str, path: &Path, tiles_per_side: u32) -> Self {
        match Self::tiled(name, path, tiles_per_side) {
            Ok(material) => material,
            Err(err) => {
                log::warn!("{}; using solid fallback for material '{}'", err, name);
                Self::solid(name, FALLBACK_COLOR)
            }
        }
    }

    /// UV viewport size for a given repeat count
    pub fn tile_scale(tiles_per_side: u32) -> f32 {
        1.0 / tiles_per_side.max(1) as f32
    }

    fn uniform_data(&self) -> MaterialUniform {
        match &self.kind {
            MaterialKind::Solid { color } => MaterialUniform {
                base_color: *color,
                tile_scale: 1.0,
                use_texture: 0,
                _padding: [0.0; 2],
            },
            MaterialKind::Tiled { tile_scale, .. } => MaterialUniform {
                base_color: [1.0, 1.0, 1.0, 1.0],
                tile_scale: *tile_scale,
                use_texture: 1,
                _padding: [0.0; 2],
            },
        }
    }

    /// Creates GPU resources for this material if not present yet
    pub fn update_gpu_resources(&mut self, device: &Device, queue: &wgpu::Queue) {
        if self.gpu_resources.is_some() {
            return;
        }

        let texture = match &self.kind {
            MaterialKind::Solid { .. } => TextureResource::create_solid_pixel(
                device,
                queue,
                [255, 255, 255, 255],
                &self.name,
            ),
            MaterialKind::Tiled { image, .. } => TextureResource::create_from_rgba_data(
                device,
                queue,
                image.as_raw(),
                image.width(),
                image.height(),
                &self.name,
                wgpu::AddressMode::Repeat,
            ),
        };

        let ubo = MaterialUBO::new_with_data(device, &self.uniform_data());
        let mut bindings = MaterialBindings::new(device);
        bindings.create_bind_group(device, &ubo, &texture);

        self.gpu_resources = Some(MaterialGpuResources {
            bindings,
            _ubo: ubo,
            _texture: texture,
        });
    }

    /// Gets the bind group for rendering
    pub fn get_bind_group(&self) -> Option<&wgpu::BindGroup> {
        self.gpu_resources
            .as_ref()
            .and_then(|gpu| gpu.bindings.bind_group.as_ref())
    }
}

/// Manages all materials in the scene
///
/// Centralized storage keyed by material id. Objects reference materials by
/// id rather than owning them, so GPU resources are created once per
/// material regardless of how many objects use it.
pub struct MaterialManager {
    materials: HashMap<MaterialId, Material>,
    default_material_id: MaterialId,
}

impl MaterialManager {
    /// Creates a new material manager with a default material
    pub fn new() -> Self {
        let mut manager = Self {
            materials: HashMap::new(),
            default_material_id: "default".to_string(),
        };

        manager
            .materials
            .insert("default".to_string(), Material::default());

        manager
    }

    pub fn add_material(&mut self, material: Material) {
        self.materials.insert(material.name.clone(), material);
    }

    pub fn get_material(&self, id: &str) -> Option<&Material> {
        self.materials.get(id)
    }

    /// Gets the default material
    pub fn get_default_material(&self) -> &Material {
        self.materials.get(&self.default_material_id).unwrap()
    }

    /// Gets material for an object with fallback to default
    pub fn get_material_for_object(&self, material_id: Option<&MaterialId>) -> &Material {
        match material_id {
            Some(id) => self
                .get_material(id)
                .unwrap_or_else(|| self.get_default_material()),
            None => self.get_default_material(),
        }
    }

    pub fn list_materials(&self) -> Vec<&MaterialId> {
        self.materials.keys().collect()
    }

    /// Creates GPU resources for all materials
    pub fn update_all_gpu_resources(&mut self, device: &Device, queue: &wgpu::Queue) {
        for material in self.materials.values_mut() {
            material.update_gpu_resources(device, queue);
        }
    }
}

impl Default for MaterialManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_scale() {
        assert_eq!(Material::tile_scale(16), 0.0625);
        assert_eq!(Material::tile_scale(4), 0.25);
        // Degenerate repeat counts clamp to one tile
        assert_eq!(Material::tile_scale(0), 1.0);
    }

    #[test]
    fn test_missing_texture_falls_back_to_solid_gray() {
        let material =
            Material::tiled_or_fallback("ground", Path::new("no/such/file.png"), 16);
        match material.kind {
            MaterialKind::Solid { color } => assert_eq!(color, FALLBACK_COLOR),
            MaterialKind::Tiled { .. } => panic!("expected solid fallback"),
        }
    }

    #[test]
    fn test_missing_texture_surfaces_typed_error() {
        let err = Material::tiled("ground", Path::new("no/such/file.png"), 16)
            .expect_err("load should fail");
        assert!(matches!(err, TextureLoadError::Io { .. }));
    }

    #[test]
    fn test_manager_resolves_unknown_id_to_default() {
        let manager = MaterialManager::new();
        let id = "nonexistent".to_string();
        let material = manager.get_material_for_object(Some(&id));
        assert_eq!(material.name, "default");
    }
}
