//! Frame-driven animation state machines
//!
//! Two explicit animator objects own all mutable animation state; nothing
//! lives in globals. Each is advanced once per frame with the measured
//! elapsed time and returns an immutable snapshot for the render step.

use std::f32::consts::PI;

use cgmath::{InnerSpace, Point3, Rad, Vector3};

use super::builder::HouseLayout;

/// Threshold on |look . world_up| past which the camera basis degenerates
const UP_SINGULARITY_DOT: f32 = 0.99;

const WORLD_UP: Vector3<f32> = Vector3::new(0.0, 1.0, 0.0);
const APEX_UP: Vector3<f32> = Vector3::new(0.0, 0.0, 1.0);

/// Fixed elevation of both rotating lights: 30 degrees below the horizon
const LIGHT_SIN_ELEVATION: f32 = 0.5;

/// Camera view snapshot produced by [`CameraAnimator::advance`]
///
/// `look` is deliberately un-normalised; consumers normalise as needed.
#[derive(Copy, Clone, Debug)]
pub struct CameraState {
    pub position: Point3<f32>,
    pub look: Vector3<f32>,
    pub up: Vector3<f32>,
    pub fovy: Rad<f32>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum SweepDirection {
    Advancing,
    Retreating,
}

/// Sweeps the camera through a vertical semicircle over the house, ping-pong
///
/// Progress `p` runs 0 to 1 in `arc_duration` seconds, then back; it is
/// clamped at both ends, never overshooting before the direction flip.
pub struct CameraAnimator {
    layout: HouseLayout,
    arc_duration: f32,
    progress: f32,
    direction: SweepDirection,
}

impl CameraAnimator {
    pub fn new(layout: HouseLayout, arc_duration: f32) -> Self {
        Self {
            layout,
            arc_duration,
            progress: 0.0,
            direction: SweepDirection::Advancing,
        }
    }

    /// Steps the arc by `dt` seconds and returns the new camera view
    pub fn advance(&mut self, dt: f32) -> CameraState {
        let step = dt / self.arc_duration;
        match self.direction {
            SweepDirection::Advancing => {
                self.progress += step;
                if self.progress >= 1.0 {
                    self.progress = 1.0;
                    self.direction = SweepDirection::Retreating;
                }
            }
            SweepDirection::Retreating => {
                self.progress -= step;
                if self.progress <= 0.0 {
                    self.progress = 0.0;
                    self.direction = SweepDirection::Advancing;
                }
            }
        }
        self.current_state()
    }

    /// The view for the current progress value, without advancing
    pub fn current_state(&self) -> CameraState {
        let theta = self.progress * PI;
        let center = self.layout.center;
        let radius = self.layout.camera_radius;

        // Semicircle in the XY plane; Z depth stays at the house centre
        let position = Point3::new(
            center.x + radius * theta.cos(),
            center.y + radius * theta.sin(),
            center.z,
        );
        let look = center - position;

        let up = if look.normalize().dot(WORLD_UP).abs() > UP_SINGULARITY_DOT {
            APEX_UP
        } else {
            WORLD_UP
        };

        CameraState {
            position,
            look,
            up,
            fovy: Rad(PI / 4.0),
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }
}

/// Rotates a mirrored pair of directional lights, looping every
/// `rotation_duration` seconds
///
/// The second light runs at `pi - phi`, a reflection through the pi axis,
/// so the pair counter-rotates instead of moving in lockstep.
pub struct LightAnimator {
    rotation_duration: f32,
    progress: f32,
}

impl LightAnimator {
    pub fn new(rotation_duration: f32) -> Self {
        Self {
            rotation_duration,
            progress: 0.0,
        }
    }

    /// Steps the rotation by `dt` seconds and returns both directions
    pub fn advance(&mut self, dt: f32) -> [Vector3<f32>; 2] {
        self.progress += dt / self.rotation_duration;
        self.progress -= self.progress.floor();
        self.current_directions()
    }

    /// Directions for the current progress value, without advancing
    pub fn current_directions(&self) -> [Vector3<f32>; 2] {
        let phi = self.progress * 2.0 * PI;
        let mirrored = PI - phi;
        [Self::direction_at(phi), Self::direction_at(mirrored)]
    }

    fn direction_at(phi: f32) -> Vector3<f32> {
        let cos_elevation = (1.0 - LIGHT_SIN_ELEVATION * LIGHT_SIN_ELEVATION).sqrt();
        Vector3::new(
            cos_elevation * phi.cos(),
            -LIGHT_SIN_ELEVATION,
            cos_elevation * phi.sin(),
        )
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cgmath::{InnerSpace, Point3, Vector3};

    fn test_layout() -> HouseLayout {
        HouseLayout {
            total_length: 12.12,
            center: Point3::new(6.06, 1.25, 1.5),
            camera_radius: 24.24,
        }
    }

    #[test]
    fn camera_progress_stays_clamped() {
        let mut animator = CameraAnimator::new(test_layout(), 5.0);
        for _ in 0..1000 {
            animator.advance(0.13);
            assert!(animator.progress() >= 0.0);
            assert!(animator.progress() <= 1.0);
        }
    }

    #[test]
    fn camera_flips_exactly_at_the_ends() {
        let mut animator = CameraAnimator::new(test_layout(), 1.0);
        // One oversized step pins progress at 1, the next comes back down
        animator.advance(3.0);
        assert_relative_eq!(animator.progress(), 1.0);
        animator.advance(0.25);
        assert_relative_eq!(animator.progress(), 0.75);
        animator.advance(2.0);
        assert_relative_eq!(animator.progress(), 0.0);
        animator.advance(0.25);
        assert_relative_eq!(animator.progress(), 0.25);
    }

    #[test]
    fn camera_arc_endpoints_and_apex() {
        let layout = test_layout();
        let mut animator = CameraAnimator::new(layout, 1.0);

        // theta = 0
        let start = animator.current_state();
        assert_relative_eq!(start.position.x, layout.center.x + layout.camera_radius);
        assert_relative_eq!(start.position.y, layout.center.y, epsilon = 1e-4);
        assert_relative_eq!(start.position.z, layout.center.z);

        // theta = pi/2: directly above the centre
        animator.advance(0.5);
        let apex = animator.current_state();
        assert_relative_eq!(apex.position.x, layout.center.x, epsilon = 1e-3);
        assert_relative_eq!(apex.position.y, layout.center.y + layout.camera_radius);

        // theta = pi
        animator.advance(0.5);
        let end = animator.current_state();
        assert_relative_eq!(end.position.x, layout.center.x - layout.camera_radius);
        assert_relative_eq!(end.position.y, layout.center.y, epsilon = 1e-3);
    }

    #[test]
    fn camera_look_points_at_the_centre() {
        let layout = test_layout();
        let state = CameraAnimator::new(layout, 5.0).current_state();
        let to_center = layout.center - state.position;
        assert_relative_eq!(state.look.x, to_center.x);
        assert_relative_eq!(state.look.y, to_center.y);
        assert_relative_eq!(state.look.z, to_center.z);
    }

    #[test]
    fn up_vector_swaps_only_near_the_apex() {
        let mut animator = CameraAnimator::new(test_layout(), 1.0);
        let start = animator.current_state();
        assert_eq!(start.up, Vector3::new(0.0, 1.0, 0.0));

        animator.advance(0.5);
        let apex = animator.current_state();
        assert_eq!(apex.up, Vector3::new(0.0, 0.0, 1.0));

        animator.advance(0.5);
        let end = animator.current_state();
        assert_eq!(end.up, Vector3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn light_progress_wraps_into_unit_range() {
        let mut animator = LightAnimator::new(10.0);
        for _ in 0..500 {
            animator.advance(0.37);
            assert!(animator.progress() >= 0.0);
            assert!(animator.progress() < 1.0);
        }
    }

    #[test]
    fn lights_mirror_through_the_pi_axis() {
        let mut animator = LightAnimator::new(10.0);
        for _ in 0..100 {
            let [a, b] = animator.advance(0.173);
            // Reflection, not negation: x opposes, z matches
            assert_relative_eq!(a.x, -b.x, epsilon = 1e-5);
            assert_relative_eq!(a.z, b.z, epsilon = 1e-5);
            assert_relative_eq!(a.y, -0.5);
            assert_relative_eq!(b.y, -0.5);
        }
    }

    #[test]
    fn light_directions_are_unit_length() {
        let [a, b] = LightAnimator::new(10.0).current_directions();
        assert_relative_eq!(a.magnitude(), 1.0, epsilon = 1e-5);
        assert_relative_eq!(b.magnitude(), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn initial_light_pair_opposes_along_x() {
        let [a, b] = LightAnimator::new(10.0).current_directions();
        assert_relative_eq!(a.x, 0.866, epsilon = 1e-3);
        assert_relative_eq!(b.x, -0.866, epsilon = 1e-3);
        assert_relative_eq!(a.z, 0.0, epsilon = 1e-5);
    }
}
