use bevy::math::Vec2;

use super::constants::DRAG_DAMPING;
use super::constants::DRAG_SCALE;
use super::constants::DRAG_TRAVEL_THRESHOLD_PX;
use super::constants::TILT_EPSILON;
use super::constants::VELOCITY_EPSILON;

/// Euler orientation of the globe: `yaw` about Y, `tilt` about X.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GlobeOrientation {
    pub yaw:  f32,
    pub tilt: f32,
}

/// Inertial spin driven by pointer drags.
///
/// Velocity is radians per frame. While the pointer is held nothing is
/// applied; once released the velocity spins the globe and decays every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragRotation {
    dragging:             bool,
    last_pointer:         Vec2,
    travelled:            f32,
    velocity:             Vec2,
    damping:              f32,
    scale:                f32,
    return_to_horizontal: bool,
}

impl Default for DragRotation {
    fn default() -> Self {
        Self {
            dragging:             false,
            last_pointer:         Vec2::ZERO,
            travelled:            0.0,
            velocity:             Vec2::ZERO,
            damping:              DRAG_DAMPING,
            scale:                DRAG_SCALE,
            return_to_horizontal: false,
        }
    }
}

impl DragRotation {
    pub const fn set_tuning(&mut self, damping: f32, scale: f32) {
        self.damping = damping;
        self.scale = scale;
    }

    pub fn start(&mut self, pointer: Vec2) {
        self.dragging = true;
        self.return_to_horizontal = false;
        self.last_pointer = pointer;
        self.travelled = 0.0;
        self.velocity = Vec2::ZERO;
    }

    /// Returns the rotation this move is worth, zero when not dragging.
    pub fn drag_to(&mut self, pointer: Vec2) -> Vec2 {
        if !self.dragging {
            return Vec2::ZERO;
        }
        let delta = pointer - self.last_pointer;
        self.velocity = delta * self.scale;
        self.travelled += delta.length();
        self.last_pointer = pointer;
        self.velocity
    }

    /// Releases the drag and starts easing the tilt back to level.
    ///
    /// Returns true when the pointer actually travelled, so a plain click
    /// can be told apart from a drag.
    pub fn end(&mut self) -> bool {
        if !self.dragging {
            return false;
        }
        self.dragging = false;
        self.return_to_horizontal = true;
        self.travelled >= DRAG_TRAVEL_THRESHOLD_PX
    }

    /// Wheel input stops any spin regardless of drag state.
    pub const fn hard_stop(&mut self) { self.velocity = Vec2::ZERO; }

    /// Applies one frame of inertia to `orientation` and decays the velocity.
    pub fn step(&mut self, orientation: &mut GlobeOrientation) {
        if self.dragging {
            return;
        }

        orientation.yaw += self.velocity.x;

        if self.return_to_horizontal {
            orientation.tilt *= self.damping;
            if orientation.tilt.abs() < TILT_EPSILON {
                orientation.tilt = 0.0;
            }
        } else {
            orientation.tilt += self.velocity.y;
        }

        self.velocity *= self.damping;
        if self.velocity.x.abs() < VELOCITY_EPSILON {
            self.velocity.x = 0.0;
        }
        if self.velocity.y.abs() < VELOCITY_EPSILON {
            self.velocity.y = 0.0;
        }
    }

    pub const fn is_dragging(&self) -> bool { self.dragging }

    pub const fn velocity(&self) -> Vec2 { self.velocity }

    pub fn is_at_rest(&self) -> bool { self.velocity == Vec2::ZERO }
}
