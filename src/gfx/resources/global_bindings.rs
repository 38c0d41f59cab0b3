//! Global uniform bindings for camera and lighting data
//!
//! Manages the uniform buffer and bind group for per-frame global state
//! shared by every object in the scene: camera matrices, the ambient term,
//! and the two animated directional lights.

use cgmath::{InnerSpace, Vector3};

use crate::{
    gfx::camera::camera_utils::CameraUniform,
    wgpu_utils::{
        binding_builder::{BindGroupBuilder, BindGroupLayoutBuilder, BindGroupLayoutWithDesc},
        binding_types,
        uniform_buffer::UniformBuffer,
    },
};

/// A directional light: parallel rays along `direction`
#[derive(Copy, Clone, Debug)]
pub struct DirectionalLight {
    pub direction: Vector3<f32>,
    pub color: [f32; 3],
}

/// The scene's light set: one ambient term plus two directional lights
///
/// Colors and the ambient term are fixed at construction; only the
/// directions are rewritten each frame by the light animator.
#[derive(Copy, Clone, Debug)]
pub struct Lighting {
    pub ambient: [f32; 3],
    pub lights: [DirectionalLight; 2],
}

impl Lighting {
    /// Replaces both light directions with fresh animator output
    pub fn set_directions(&mut self, directions: [Vector3<f32>; 2]) {
        self.lights[0].direction = directions[0];
        self.lights[1].direction = directions[1];
    }
}

/// Global uniform buffer content structure
///
/// MUST match the GlobalUniform struct in the shader exactly; every member
/// is padded to 16 bytes for std140-style alignment.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GlobalUBOContent {
    view_position: [f32; 4],
    view_proj: [[f32; 4]; 4],
    ambient_color: [f32; 4],
    light_directions: [[f32; 4]; 2],
    light_colors: [[f32; 4]; 2],
}

/// Type alias for the global uniform buffer
pub type GlobalUBO = UniformBuffer<GlobalUBOContent>;

/// Updates the global uniform buffer with camera and light data
///
/// Called once per frame after the animators have produced this frame's
/// camera state and light directions. Light directions are normalized here
/// so the shader can skip it.
pub fn update_global_ubo(
    ubo: &mut GlobalUBO,
    queue: &wgpu::Queue,
    camera: CameraUniform,
    lighting: &Lighting,
) {
    let direction = |light: &DirectionalLight| -> [f32; 4] {
        let d = light.direction.normalize();
        [d.x, d.y, d.z, 0.0]
    };
    let color = |light: &DirectionalLight| -> [f32; 4] {
        [light.color[0], light.color[1], light.color[2], 1.0]
    };

    let content = GlobalUBOContent {
        view_position: camera.view_position,
        view_proj: camera.view_proj,
        ambient_color: [
            lighting.ambient[0],
            lighting.ambient[1],
            lighting.ambient[2],
            1.0,
        ],
        light_directions: [direction(&lighting.lights[0]), direction(&lighting.lights[1])],
        light_colors: [color(&lighting.lights[0]), color(&lighting.lights[1])],
    };

    ubo.update_content(queue, content);
}

/// Manages the bind group layout and bind group for global uniforms
///
/// Bound to slot 0 in the render pipeline.
pub struct GlobalBindings {
    bind_group_layout: BindGroupLayoutWithDesc,
    bind_group: Option<wgpu::BindGroup>,
}

impl GlobalBindings {
    pub fn new(device: &wgpu::Device) -> Self {
        let bind_group_layout = BindGroupLayoutBuilder::new()
            .next_binding_rendering(binding_types::uniform())
            .create(device, "Globals Bind Group");

        GlobalBindings {
            bind_group_layout,
            bind_group: None,
        }
    }

    /// Creates the bind group with the provided uniform buffer
    ///
    /// Must be called before any rendering that needs global uniforms.
    pub fn create_bind_group(&mut self, device: &wgpu::Device, ubo: &GlobalUBO) {
        self.bind_group = Some(
            BindGroupBuilder::new(&self.bind_group_layout)
                .resource(ubo.binding_resource())
                .create(device, "Globals Bind Group"),
        );
    }

    pub fn bind_group_layouts(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout.layout
    }

    pub fn bind_groups(&self) -> &wgpu::BindGroup {
        self.bind_group
            .as_ref()
            .expect("Bind group has not been created yet!")
    }
}
