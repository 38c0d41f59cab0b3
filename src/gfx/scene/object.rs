//! Scene objects and mesh data
//!
//! An [`Object`] pairs one or more meshes with a material id and a world
//! transform. Mesh data is created on the CPU and uploaded lazily once a
//! device is available, so scene assembly stays fully testable without a GPU.

use std::ops::Range;

use cgmath::{Matrix4, SquareMatrix};
use wgpu::util::DeviceExt;
use wgpu::Device;

use crate::gfx::geometry::GeometryData;
use crate::wgpu_utils::{binding_types, BindGroupBuilder, BindGroupLayoutBuilder, UniformBuffer};

use super::vertex::Vertex3D;

/// Per-object transform data uploaded to the vertex shader
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TransformUniform {
    pub model: [[f32; 4]; 4],
}

/// Indexed triangle mesh with lazily created GPU buffers
pub struct Mesh {
    vertices: Vec<Vertex3D>,
    indices: Vec<u32>,
    vertex_buffer: Option<wgpu::Buffer>,
    index_buffer: Option<wgpu::Buffer>,
    pub index_count: u32,
    pub vertex_count: u32,
}

impl Mesh {
    pub fn from_geometry(geometry: &GeometryData) -> Self {
        let (vertices, indices) = geometry.to_vertex_data();
        Self {
            vertex_count: vertices.len() as u32,
            index_count: indices.len() as u32,
            vertices,
            indices,
            vertex_buffer: None,
            index_buffer: None,
        }
    }

    /// CPU-side vertex data; stays available after GPU upload
    pub fn vertices(&self) -> &[Vertex3D] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    fn init_gpu_resources(&mut self, device: &Device) {
        if self.vertex_buffer.is_some() {
            return;
        }
        self.vertex_buffer = Some(device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Mesh Vertex Buffer"),
                contents: bytemuck::cast_slice(&self.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            },
        ));
        self.index_buffer = Some(device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Mesh Index Buffer"),
                contents: bytemuck::cast_slice(&self.indices),
                usage: wgpu::BufferUsages::INDEX,
            },
        ));
    }
}

/// GPU resources held per object once initialized
pub struct ObjectGpuResources {
    pub transform_ubo: UniformBuffer<TransformUniform>,
    pub transform_bind_group: wgpu::BindGroup,
}

pub struct Object {
    pub name: String,
    pub meshes: Vec<Mesh>,
    pub transform: Matrix4<f32>,
    pub material_id: Option<String>,
    pub visible: bool,
    pub gpu_resources: Option<ObjectGpuResources>,
}

impl Object {
    /// Create an object around a single generated geometry, identity transform
    pub fn from_geometry(name: &str, geometry: &GeometryData) -> Self {
        Self {
            name: name.to_string(),
            meshes: vec![Mesh::from_geometry(geometry)],
            transform: Matrix4::identity(),
            material_id: None,
            visible: true,
            gpu_resources: None,
        }
    }

    /// Builder pattern: assigns a material by id
    pub fn with_material(mut self, material_id: &str) -> Self {
        self.material_id = Some(material_id.to_string());
        self
    }

    pub fn get_material_id(&self) -> Option<&String> {
        self.material_id.as_ref()
    }

    /// Bind group layout for per-object transforms, shared by the pipeline
    pub fn transform_bind_group_layout(
        device: &Device,
    ) -> crate::wgpu_utils::BindGroupLayoutWithDesc {
        BindGroupLayoutBuilder::new()
            .next_binding_vertex(binding_types::uniform())
            .create(device, "Transform Bind Group")
    }

    /// Uploads mesh buffers and the transform uniform
    pub fn init_gpu_resources(&mut self, device: &Device) {
        for mesh in &mut self.meshes {
            mesh.init_gpu_resources(device);
        }

        if self.gpu_resources.is_none() {
            let transform_ubo = UniformBuffer::new_with_data(
                device,
                &TransformUniform {
                    model: self.transform.into(),
                },
            );
            let layout = Self::transform_bind_group_layout(device);
            let transform_bind_group = BindGroupBuilder::new(&layout)
                .resource(transform_ubo.binding_resource())
                .create(device, "Transform Bind Group");

            self.gpu_resources = Some(ObjectGpuResources {
                transform_ubo,
                transform_bind_group,
            });
        }
    }

    /// Syncs the current transform to the GPU
    pub fn update_transform(&mut self, queue: &wgpu::Queue) {
        if let Some(gpu) = &mut self.gpu_resources {
            gpu.transform_ubo.update_content(
                queue,
                TransformUniform {
                    model: self.transform.into(),
                },
            );
        }
    }
}

pub trait DrawObject<'a> {
    fn draw_mesh(&mut self, mesh: &'a Mesh);
    fn draw_mesh_instanced(&mut self, mesh: &'a Mesh, instances: Range<u32>);
    fn draw_object(&mut self, object: &'a Object);
}

impl<'a, 'b> DrawObject<'b> for wgpu::RenderPass<'a>
where
    'b: 'a,
{
    fn draw_mesh(&mut self, mesh: &'b Mesh) {
        self.draw_mesh_instanced(mesh, 0..1);
    }

    fn draw_mesh_instanced(&mut self, mesh: &'b Mesh, instances: Range<u32>) {
        let vertex_buffer = match &mesh.vertex_buffer {
            Some(buffer) => buffer,
            None => return, // Skip drawing if not uploaded
        };
        let index_buffer = match &mesh.index_buffer {
            Some(buffer) => buffer,
            None => return,
        };

        self.set_vertex_buffer(0, vertex_buffer.slice(..));
        self.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        self.draw_indexed(0..mesh.index_count, 0, instances);
    }

    fn draw_object(&mut self, object: &'b Object) {
        let Some(gpu) = &object.gpu_resources else {
            return;
        };
        self.set_bind_group(1, &gpu.transform_bind_group, &[]);
        for mesh in &object.meshes {
            self.draw_mesh(mesh);
        }
    }
}
