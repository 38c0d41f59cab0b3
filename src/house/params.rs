//! Configuration surface for the house scene
//!
//! Plain numeric parameters with defaults; there is no config file. Zero or
//! negative dimensions are not validated here, the builders accept them and
//! produce degenerate meshes.

use std::path::PathBuf;

/// All knobs for scene construction and animation timing
#[derive(Clone, Debug, PartialEq)]
pub struct HouseParams {
    /// Width of a single room box along X
    pub room_width: f32,
    /// Height of a room box along Y
    pub room_height: f32,
    /// Depth of a room box along Z
    pub room_depth: f32,
    /// Number of rooms placed side by side along X
    pub room_count: u32,
    /// Ridge height above the room tops
    pub roof_height: f32,
    /// Spacing between adjacent rooms
    pub gap: f32,
    /// Ground plane side length as a multiple of the house footprint
    pub ground_multiplier: f32,
    /// Texture repeats across the ground plane in each axis
    pub tiles_per_side: u32,
    /// Camera orbit radius as a multiple of the largest house extent
    pub camera_distance_scale: f32,
    /// Seconds for a full 180-degree camera sweep (one ping-pong leg)
    pub arc_duration_secs: f32,
    /// Seconds for a full 360-degree light rotation
    pub light_rotation_secs: f32,
    /// Ground texture image, loaded with a solid-gray fallback
    pub ground_texture_path: PathBuf,
}

impl Default for HouseParams {
    fn default() -> Self {
        Self {
            room_width: 4.0,
            room_height: 2.5,
            room_depth: 3.0,
            room_count: 3,
            roof_height: 1.6,
            gap: 0.06,
            ground_multiplier: 5.0,
            tiles_per_side: 16,
            camera_distance_scale: 2.0,
            arc_duration_secs: 5.0,
            light_rotation_secs: 10.0,
            ground_texture_path: PathBuf::from("assets/stone.png"),
        }
    }
}

impl HouseParams {
    /// Combined X extent of all rooms including gaps
    pub fn total_length(&self) -> f32 {
        self.room_count as f32 * self.room_width
            + self.room_count.saturating_sub(1) as f32 * self.gap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn total_length_includes_gaps() {
        let params = HouseParams::default();
        assert_relative_eq!(params.total_length(), 12.12, epsilon = 1e-5);
    }

    #[test]
    fn total_length_single_room_has_no_gap() {
        let params = HouseParams {
            room_count: 1,
            ..HouseParams::default()
        };
        assert_relative_eq!(params.total_length(), 4.0);
    }

    #[test]
    fn total_length_zero_rooms_is_zero() {
        let params = HouseParams {
            room_count: 0,
            ..HouseParams::default()
        };
        assert_relative_eq!(params.total_length(), 0.0);
    }
}
