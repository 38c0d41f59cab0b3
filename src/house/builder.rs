//! Scene assembly
//!
//! Composes the procedural meshes, materials and lights into a single
//! [`Scene`] plus the derived layout constants the animators need. This is a
//! pure function of [`HouseParams`]: building twice with equal parameters
//! yields vertex-for-vertex identical meshes.

use cgmath::{Point3, Vector3};

use crate::gfx::{
    geometry::primitives::{generate_box, generate_gabled_roof, generate_ground_plane},
    resources::{DirectionalLight, Lighting, Material},
    scene::{Object, Scene},
};

use super::params::HouseParams;

/// Offsets keeping the roof off the room tops and the ground off the floor
/// plane, so coplanar faces never z-fight.
const ROOF_BASE_SINK: f32 = 0.005;
const ROOF_RIDGE_RAISE: f32 = 0.01;
const GROUND_Y: f32 = -0.01;

const AMBIENT_COLOR: [f32; 3] = [0.25, 0.25, 0.25];
const LIGHT_COLOR: [f32; 3] = [0.6, 0.6, 0.6];

/// Wall colors cycled per room; every room past the second reuses the last.
const ROOM_PALETTE: [(&str, [f32; 4]); 3] = [
    ("room_plaster", [0.85, 0.80, 0.70, 1.0]),
    ("room_brick", [0.72, 0.45, 0.35, 1.0]),
    ("room_timber", [0.55, 0.42, 0.30, 1.0]),
];

const ROOF_COLOR: [f32; 4] = [0.45, 0.20, 0.18, 1.0];

/// Constants derived once from the assembled scene's extents
///
/// Every later frame reuses these; nothing recomputes them.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HouseLayout {
    pub total_length: f32,
    pub center: Point3<f32>,
    pub camera_radius: f32,
}

/// The assembled static scene plus its derived layout
pub struct HouseScene {
    pub scene: Scene,
    pub layout: HouseLayout,
}

/// Builds the complete house scene from the given parameters
pub fn build_house_scene(params: &HouseParams) -> HouseScene {
    let total_length = params.total_length();

    let lighting = Lighting {
        ambient: AMBIENT_COLOR,
        lights: [
            DirectionalLight {
                direction: Vector3::new(0.866, -0.5, 0.0),
                color: LIGHT_COLOR,
            },
            DirectionalLight {
                direction: Vector3::new(-0.866, -0.5, 0.0),
                color: LIGHT_COLOR,
            },
        ],
    };

    let mut scene = Scene::new(lighting);

    for (name, color) in ROOM_PALETTE {
        scene.add_material(Material::solid(name, color));
    }
    scene.add_material(Material::solid("roof", ROOF_COLOR));
    scene.add_material(Material::tiled_or_fallback(
        "ground",
        &params.ground_texture_path,
        params.tiles_per_side,
    ));

    // Rooms along +X, cycling the palette (3rd entry for every index >= 2)
    for i in 0..params.room_count {
        let x = i as f32 * (params.room_width + params.gap);
        let geometry = generate_box(
            Vector3::new(x, 0.0, 0.0),
            params.room_width,
            params.room_height,
            params.room_depth,
        );
        let palette_index = (i as usize).min(ROOM_PALETTE.len() - 1);
        scene.add_object(
            Object::from_geometry(&format!("room_{}", i), &geometry)
                .with_material(ROOM_PALETTE[palette_index].0),
        );
    }

    let roof = generate_gabled_roof(
        total_length,
        params.room_depth,
        params.room_height - ROOF_BASE_SINK,
        params.room_height + params.roof_height + ROOF_RIDGE_RAISE,
    );
    scene.add_object(Object::from_geometry("roof", &roof).with_material("roof"));

    let ground_side = params.ground_multiplier * total_length.max(params.room_depth);
    let ground = generate_ground_plane(
        Vector3::new(
            total_length / 2.0 - ground_side / 2.0,
            GROUND_Y,
            params.room_depth / 2.0 - ground_side / 2.0,
        ),
        ground_side,
        ground_side,
    );
    scene.add_object(Object::from_geometry("ground", &ground).with_material("ground"));

    let layout = HouseLayout {
        total_length,
        center: Point3::new(
            total_length / 2.0,
            params.room_height / 2.0,
            params.room_depth / 2.0,
        ),
        camera_radius: total_length
            .max(params.room_depth)
            .max(params.room_height + params.roof_height)
            * params.camera_distance_scale,
    };

    let stats = scene.get_statistics();
    log::info!(
        "Built house scene: {} objects, {} triangles, camera radius {:.2}",
        stats.object_count,
        stats.total_triangles,
        layout.camera_radius
    );

    HouseScene { scene, layout }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn layout_matches_room_row() {
        let house = build_house_scene(&HouseParams::default());
        assert_relative_eq!(house.layout.total_length, 12.12, epsilon = 1e-5);
        assert_relative_eq!(house.layout.center.x, 6.06, epsilon = 1e-5);
        assert_relative_eq!(house.layout.center.y, 1.25);
        assert_relative_eq!(house.layout.center.z, 1.5);
    }

    #[test]
    fn camera_radius_scales_largest_extent() {
        let house = build_house_scene(&HouseParams::default());
        // total_length (12.12) dominates room_depth and height + roof
        assert_relative_eq!(house.layout.camera_radius, 24.24, epsilon = 1e-4);
    }

    #[test]
    fn scene_contains_rooms_roof_and_ground() {
        let house = build_house_scene(&HouseParams::default());
        let names: Vec<&str> = house
            .scene
            .objects
            .iter()
            .map(|o| o.name.as_str())
            .collect();
        assert_eq!(names, ["room_0", "room_1", "room_2", "roof", "ground"]);
    }

    #[test]
    fn rooms_past_the_second_reuse_last_palette_entry() {
        let params = HouseParams {
            room_count: 5,
            ..HouseParams::default()
        };
        let house = build_house_scene(&params);
        let material_of = |name: &str| {
            house
                .scene
                .objects
                .iter()
                .find(|o| o.name == name)
                .and_then(|o| o.get_material_id())
                .unwrap()
                .clone()
        };
        assert_eq!(material_of("room_0"), "room_plaster");
        assert_eq!(material_of("room_1"), "room_brick");
        assert_eq!(material_of("room_2"), "room_timber");
        assert_eq!(material_of("room_3"), "room_timber");
        assert_eq!(material_of("room_4"), "room_timber");
    }

    #[test]
    fn initial_light_directions_oppose_along_x() {
        let house = build_house_scene(&HouseParams::default());
        let [a, b] = house.scene.lighting.lights;
        assert_relative_eq!(a.direction.x, -b.direction.x);
        assert_relative_eq!(a.direction.y, -0.5);
        assert_relative_eq!(b.direction.y, -0.5);
    }

    #[test]
    fn building_twice_is_vertex_identical() {
        let params = HouseParams::default();
        let first = build_house_scene(&params);
        let second = build_house_scene(&params);
        assert_eq!(first.scene.objects.len(), second.scene.objects.len());
        for (a, b) in first.scene.objects.iter().zip(second.scene.objects.iter()) {
            for (ma, mb) in a.meshes.iter().zip(b.meshes.iter()) {
                assert_eq!(ma.vertices(), mb.vertices());
                assert_eq!(ma.indices(), mb.indices());
            }
        }
    }

    #[test]
    fn missing_texture_falls_back_without_failing_the_build() {
        let params = HouseParams {
            ground_texture_path: "assets/definitely_missing.png".into(),
            ..HouseParams::default()
        };
        let house = build_house_scene(&params);
        assert_eq!(house.scene.objects.len(), 5);
    }
}
