use super::camera_utils::{convert_matrix4_to_array, Camera, CameraUniform};
use cgmath::*;

#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: cgmath::Matrix4<f32> = cgmath::Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.5,
    0.0, 0.0, 0.0, 1.0,
);

/// Projection camera driven from the outside
///
/// Unlike an input-driven orbit camera this one has no controls of its own:
/// the animator computes position, look direction, and up vector each frame
/// and pushes them in via [`ArcCamera::set_view`]. The look direction need
/// not be normalized.
#[derive(Debug, Clone, Copy)]
pub struct ArcCamera {
    pub position: Point3<f32>,
    pub look: Vector3<f32>,
    pub up: Vector3<f32>,
    pub aspect: f32,
    pub fovy: Rad<f32>,
    pub znear: f32,
    pub zfar: f32,
    pub uniform: CameraUniform,
}

impl Camera for ArcCamera {
    fn build_view_projection_matrix(&self) -> Matrix4<f32> {
        let view = Matrix4::look_to_rh(self.position, self.look, self.up);
        let proj =
            OPENGL_TO_WGPU_MATRIX * perspective(self.fovy, self.aspect, self.znear, self.zfar);
        proj * view
    }
}

impl ArcCamera {
    pub fn new(
        position: Point3<f32>,
        look: Vector3<f32>,
        up: Vector3<f32>,
        fovy: Rad<f32>,
        aspect: f32,
    ) -> Self {
        let mut camera = Self {
            position,
            look,
            up,
            aspect,
            fovy,
            znear: 0.1,
            zfar: 1000.0,
            uniform: CameraUniform::default(),
        };
        camera.update_view_proj();
        camera
    }

    /// Replaces the view basis with fresh animator output
    pub fn set_view(&mut self, position: Point3<f32>, look: Vector3<f32>, up: Vector3<f32>) {
        self.position = position;
        self.look = look;
        self.up = up;
    }

    pub fn resize_projection(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    /// Recomputes the cached [`CameraUniform`] from the current view basis
    pub fn update_view_proj(&mut self) {
        self.uniform.view_position = self.position.to_homogeneous().into();
        self.uniform.view_proj = convert_matrix4_to_array(self.build_view_projection_matrix());
    }
}
