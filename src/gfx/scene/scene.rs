use wgpu::Device;

use crate::gfx::resources::global_bindings::Lighting;
use crate::gfx::resources::material::{Material, MaterialManager};

use super::object::Object;

/// Main scene containing objects, materials, and lights
///
/// Geometry and materials are static after assembly; only the light
/// directions (and the camera, owned by the application) change per frame.
pub struct Scene {
    pub objects: Vec<Object>,
    pub material_manager: MaterialManager,
    pub lighting: Lighting,
}

impl Scene {
    pub fn new(lighting: Lighting) -> Self {
        Self {
            objects: Vec::new(),
            material_manager: MaterialManager::new(),
            lighting,
        }
    }

    pub fn add_object(&mut self, object: Object) {
        self.objects.push(object);
    }

    /// Adds a material to the centralized material store
    pub fn add_material(&mut self, material: Material) {
        self.material_manager.add_material(material);
    }

    /// Initializes GPU resources for all objects and materials
    ///
    /// Must be called after the GPU context is available and before rendering.
    pub fn init_gpu_resources(&mut self, device: &Device, queue: &wgpu::Queue) {
        for object in self.objects.iter_mut() {
            object.init_gpu_resources(device);
        }
        self.material_manager.update_all_gpu_resources(device, queue);
    }

    /// Gets material for rendering an object
    ///
    /// Returns the material assigned to the object, or the default material
    /// if no material is assigned or the assigned material doesn't exist.
    pub fn get_material_for_object(&self, object: &Object) -> &Material {
        self.material_manager
            .get_material_for_object(object.get_material_id())
    }

    /// Gets statistics about the scene
    pub fn get_statistics(&self) -> SceneStatistics {
        let total_triangles: u32 = self
            .objects
            .iter()
            .map(|obj| obj.meshes.iter().map(|m| m.index_count / 3).sum::<u32>())
            .sum();

        let total_vertices: u32 = self
            .objects
            .iter()
            .map(|obj| obj.meshes.iter().map(|m| m.vertex_count).sum::<u32>())
            .sum();

        SceneStatistics {
            object_count: self.objects.len(),
            material_count: self.material_manager.list_materials().len(),
            total_triangles,
            total_vertices,
        }
    }
}

/// Scene statistics for debugging and logging
#[derive(Debug)]
pub struct SceneStatistics {
    pub object_count: usize,
    pub material_count: usize,
    pub total_triangles: u32,
    pub total_vertices: u32,
}
