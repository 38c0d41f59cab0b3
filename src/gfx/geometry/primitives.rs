//! # Primitive Shape Generation
//!
//! Builders for the shapes the house scene is made of. Face normals are
//! always derived from the corner ordering via a cross product rather than
//! hardcoded axis constants, so the same quad helper stays correct for
//! axis-aligned walls and sloped roof pitches alike.
//!
//! Dimensions are not validated: a zero or negative extent produces a
//! degenerate mesh, not an error.

use super::GeometryData;
use cgmath::{InnerSpace, Vector3};

/// Appends a quad given its four corners in counter-clockwise order as seen
/// from outside. Triangulated as (0,1,2),(0,2,3); all four vertices share the
/// flat normal computed from the first three corners.
fn push_quad(data: &mut GeometryData, corners: [Vector3<f32>; 4], tex_coords: [[f32; 2]; 4]) {
    let normal = face_normal(corners[0], corners[1], corners[2]);
    let base = data.vertices.len() as u32;

    for (corner, uv) in corners.iter().zip(tex_coords.iter()) {
        data.vertices.push([corner.x, corner.y, corner.z]);
        data.normals.push(normal);
        data.tex_coords.push(*uv);
    }

    data.indices
        .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
}

/// Appends a triangle with a flat normal computed from its corners.
fn push_triangle(data: &mut GeometryData, corners: [Vector3<f32>; 3]) {
    let normal = face_normal(corners[0], corners[1], corners[2]);
    let base = data.vertices.len() as u32;

    for corner in corners.iter() {
        data.vertices.push([corner.x, corner.y, corner.z]);
        data.normals.push(normal);
        data.tex_coords.push([0.0, 0.0]);
    }

    data.indices.extend_from_slice(&[base, base + 1, base + 2]);
}

fn face_normal(c0: Vector3<f32>, c1: Vector3<f32>, c2: Vector3<f32>) -> [f32; 3] {
    let normal = (c1 - c0).cross(c2 - c0).normalize();
    [normal.x, normal.y, normal.z]
}

const NO_UV: [[f32; 2]; 4] = [[0.0, 0.0]; 4];

/// Generate an axis-aligned box with its minimum corner at `origin`
///
/// Each of the six faces is a separate 4-vertex group (24 vertices total) so
/// normals stay flat at the edges instead of being interpolated. Corner order
/// is chosen per face so the computed normal points outward.
pub fn generate_box(origin: Vector3<f32>, width: f32, height: f32, depth: f32) -> GeometryData {
    let mut data = GeometryData::new();

    let min = origin;
    let max = origin + Vector3::new(width, height, depth);

    // +Z face
    push_quad(
        &mut data,
        [
            Vector3::new(min.x, min.y, max.z),
            Vector3::new(max.x, min.y, max.z),
            Vector3::new(max.x, max.y, max.z),
            Vector3::new(min.x, max.y, max.z),
        ],
        NO_UV,
    );
    // -Z face
    push_quad(
        &mut data,
        [
            Vector3::new(max.x, min.y, min.z),
            Vector3::new(min.x, min.y, min.z),
            Vector3::new(min.x, max.y, min.z),
            Vector3::new(max.x, max.y, min.z),
        ],
        NO_UV,
    );
    // +X face
    push_quad(
        &mut data,
        [
            Vector3::new(max.x, min.y, max.z),
            Vector3::new(max.x, min.y, min.z),
            Vector3::new(max.x, max.y, min.z),
            Vector3::new(max.x, max.y, max.z),
        ],
        NO_UV,
    );
    // -X face
    push_quad(
        &mut data,
        [
            Vector3::new(min.x, min.y, min.z),
            Vector3::new(min.x, min.y, max.z),
            Vector3::new(min.x, max.y, max.z),
            Vector3::new(min.x, max.y, min.z),
        ],
        NO_UV,
    );
    // +Y face (top)
    push_quad(
        &mut data,
        [
            Vector3::new(min.x, max.y, max.z),
            Vector3::new(max.x, max.y, max.z),
            Vector3::new(max.x, max.y, min.z),
            Vector3::new(min.x, max.y, min.z),
        ],
        NO_UV,
    );
    // -Y face (bottom)
    push_quad(
        &mut data,
        [
            Vector3::new(min.x, min.y, min.z),
            Vector3::new(max.x, min.y, min.z),
            Vector3::new(max.x, min.y, max.z),
            Vector3::new(min.x, min.y, max.z),
        ],
        NO_UV,
    );

    data
}

/// Generate a gabled roof spanning `length` along X and `depth` along Z
///
/// Two sloped pitches rise from the eaves at `base_y` to a ridge line at
/// `z = depth / 2`, `y = ridge_y`. Pitch normals come from each pitch's own
/// edge vectors, so an asymmetric ridge needs no correction. Two triangular
/// gable-end caps at `x = 0` and `x = length` close the roof volume.
pub fn generate_gabled_roof(length: f32, depth: f32, base_y: f32, ridge_y: f32) -> GeometryData {
    let mut data = GeometryData::new();
    let ridge_z = depth / 2.0;

    // Front pitch, eave at z = 0
    push_quad(
        &mut data,
        [
            Vector3::new(0.0, base_y, 0.0),
            Vector3::new(0.0, ridge_y, ridge_z),
            Vector3::new(length, ridge_y, ridge_z),
            Vector3::new(length, base_y, 0.0),
        ],
        NO_UV,
    );
    // Back pitch, eave at z = depth
    push_quad(
        &mut data,
        [
            Vector3::new(0.0, base_y, depth),
            Vector3::new(length, base_y, depth),
            Vector3::new(length, ridge_y, ridge_z),
            Vector3::new(0.0, ridge_y, ridge_z),
        ],
        NO_UV,
    );

    // Gable-end caps
    push_triangle(
        &mut data,
        [
            Vector3::new(0.0, base_y, 0.0),
            Vector3::new(0.0, base_y, depth),
            Vector3::new(0.0, ridge_y, ridge_z),
        ],
    );
    push_triangle(
        &mut data,
        [
            Vector3::new(length, base_y, depth),
            Vector3::new(length, base_y, 0.0),
            Vector3::new(length, ridge_y, ridge_z),
        ],
    );

    data
}

/// Generate a flat ground plane with its minimum corner at `origin`
///
/// A single quad in the XZ plane with a +Y normal. Texture coordinates span
/// exactly [0,1]x[0,1] regardless of physical size; visual tiling is the
/// material's job, not the mesh's.
pub fn generate_ground_plane(origin: Vector3<f32>, width: f32, depth: f32) -> GeometryData {
    let mut data = GeometryData::new();

    push_quad(
        &mut data,
        [
            Vector3::new(origin.x, origin.y, origin.z),
            Vector3::new(origin.x, origin.y, origin.z + depth),
            Vector3::new(origin.x + width, origin.y, origin.z + depth),
            Vector3::new(origin.x + width, origin.y, origin.z),
        ],
        [[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]],
    );

    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn length(v: [f32; 3]) -> f32 {
        (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
    }

    #[test]
    fn test_box_counts() {
        let b = generate_box(Vector3::new(0.0, 0.0, 0.0), 4.0, 2.5, 3.0);
        assert_eq!(b.vertex_count(), 24); // 6 faces * 4 vertices
        assert_eq!(b.triangle_count(), 12); // 6 faces * 2 triangles
        assert_eq!(b.normals.len(), 24);
        assert_eq!(b.tex_coords.len(), 24);
    }

    #[test]
    fn test_box_normals_unit_length_and_outward() {
        let origin = Vector3::new(1.0, -2.0, 0.5);
        let (w, h, d) = (4.0, 2.5, 3.0);
        let b = generate_box(origin, w, h, d);
        let center = origin + Vector3::new(w, h, d) / 2.0;

        for face in 0..6 {
            let normal = b.normals[face * 4];
            assert_relative_eq!(length(normal), 1.0, epsilon = 1e-6);

            // All four vertices of a face share one flat normal
            for v in 1..4 {
                assert_eq!(b.normals[face * 4 + v], normal);
            }

            // Outward: normal points away from the box center
            let p = b.vertices[face * 4];
            let outward = (p[0] - center.x) * normal[0]
                + (p[1] - center.y) * normal[1]
                + (p[2] - center.z) * normal[2];
            assert!(outward > 0.0, "face {} normal points inward", face);
        }
    }

    #[test]
    fn test_box_face_normals_distinct() {
        let b = generate_box(Vector3::new(0.0, 0.0, 0.0), 1.0, 1.0, 1.0);
        for face_a in 0..6 {
            for face_b in (face_a + 1)..6 {
                assert_ne!(b.normals[face_a * 4], b.normals[face_b * 4]);
            }
        }
    }

    #[test]
    fn test_roof_pitches_mirrored() {
        let r = generate_gabled_roof(12.0, 3.0, 2.5, 4.0);
        // 2 quads + 2 caps
        assert_eq!(r.vertex_count(), 14);
        assert_eq!(r.triangle_count(), 6);

        let front = r.normals[0];
        let back = r.normals[4];
        assert_relative_eq!(length(front), 1.0, epsilon = 1e-6);
        assert_relative_eq!(length(back), 1.0, epsilon = 1e-6);

        // Both pitches face upward and mirror each other in Z
        assert!(front[1] > 0.0 && back[1] > 0.0);
        assert_relative_eq!(front[0], back[0], epsilon = 1e-6);
        assert_relative_eq!(front[1], back[1], epsilon = 1e-6);
        assert_relative_eq!(front[2], -back[2], epsilon = 1e-6);
    }

    #[test]
    fn test_roof_gable_caps_close_the_ends() {
        let r = generate_gabled_roof(12.0, 3.0, 2.5, 4.0);
        // Caps are the last two triangles, facing -X and +X
        let cap_front = r.normals[8];
        let cap_back = r.normals[11];
        assert_relative_eq!(cap_front[0], -1.0, epsilon = 1e-6);
        assert_relative_eq!(cap_back[0], 1.0, epsilon = 1e-6);

        // Ridge vertices sit at depth / 2
        let ridge = r.vertices[1];
        assert_relative_eq!(ridge[2], 1.5, epsilon = 1e-6);
        assert_relative_eq!(ridge[1], 4.0, epsilon = 1e-6);
    }

    #[test]
    fn test_asymmetric_ridge_keeps_unit_normals() {
        // Ridge below the eaves still yields unit-length computed normals
        let r = generate_gabled_roof(5.0, 2.0, 3.0, 2.0);
        for n in &r.normals {
            assert_relative_eq!(length(*n), 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_ground_plane_normal_and_uv_span() {
        let p = generate_ground_plane(Vector3::new(-30.0, -0.01, -30.0), 60.0, 60.0);
        assert_eq!(p.vertex_count(), 4);
        assert_eq!(p.triangle_count(), 2);

        for n in &p.normals {
            assert_eq!(*n, [0.0, 1.0, 0.0]);
        }

        // UVs span exactly [0,1]x[0,1] no matter the physical size
        let mut us: Vec<f32> = p.tex_coords.iter().map(|uv| uv[0]).collect();
        let mut vs: Vec<f32> = p.tex_coords.iter().map(|uv| uv[1]).collect();
        us.sort_by(|a, b| a.partial_cmp(b).unwrap());
        vs.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!((us[0], us[3]), (0.0, 1.0));
        assert_eq!((vs[0], vs[3]), (0.0, 1.0));
    }

    #[test]
    fn test_degenerate_dimensions_accepted() {
        // Zero-extent geometry builds silently; this is a demo-scene builder
        let b = generate_box(Vector3::new(0.0, 0.0, 0.0), 0.0, 2.0, 2.0);
        assert_eq!(b.vertex_count(), 24);
    }
}
