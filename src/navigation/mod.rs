//! Camera navigation core: projection, arc paths, fly-to and drag inertia.
//!
//! Nothing in here touches the ECS. The camera plugin owns a
//! [`CameraNavigationState`] resource and feeds it input and frame time.

mod arc_path;
pub mod constants;
mod drag_rotation;
mod flight;
mod projector;
mod settle;

use bevy::math::Vec2;
use bevy::prelude::Resource;
pub use drag_rotation::DragRotation;
pub use drag_rotation::GlobeOrientation;
pub use flight::CameraPose;
pub use flight::FlightController;
pub use flight::FlightPlan;
pub use flight::FlightSettings;
pub use flight::FlightTick;
pub use projector::camera_direction;
pub use projector::marker_position;
pub use settle::MotionSettle;

/// Which system may move the camera this frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CameraOwner {
    /// Orbit control.
    #[default]
    User,
    /// A fly-to is writing the camera pose.
    FlyTo,
}

/// All navigation state for the one globe camera.
#[derive(Resource, Clone, Debug, Default)]
pub struct CameraNavigationState {
    flight:         FlightController,
    settle:         MotionSettle,
    drag:           DragRotation,
    owner:          CameraOwner,
    grabbed_marker: bool,
}

/// How a drag on the globe ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragRelease {
    /// The pointer moved far enough to count as a drag rather than a click.
    pub travelled: bool,
    /// The drag began on a marker, whose click already picked a flight.
    pub on_marker: bool,
}

impl DragRelease {
    pub const fn sends_home(self) -> bool { self.travelled && !self.on_marker }
}

impl CameraNavigationState {
    pub const fn owner(&self) -> CameraOwner { self.owner }

    pub const fn is_moving(&self) -> bool { self.settle.is_moving() }

    pub const fn drag(&self) -> &DragRotation { &self.drag }

    pub const fn flight(&self) -> &FlightController { &self.flight }

    pub const fn set_settle_delay(&mut self, delay_secs: f32) { self.settle.set_delay(delay_secs); }

    pub const fn set_drag_tuning(&mut self, damping: f32, scale: f32) {
        self.drag.set_tuning(damping, scale);
    }

    /// Hands the camera to a new flight, replacing any flight in progress.
    pub fn begin_flight(&mut self, plan: FlightPlan) {
        self.flight.start(plan);
        self.owner = CameraOwner::FlyTo;
        self.settle.notify();
    }

    /// Advances the active flight. Ownership returns to the user on the
    /// completing tick; the moving flag is left to the settle timer.
    pub fn advance_flight(&mut self, delta_secs: f32) -> Option<FlightTick> {
        let tick = self.flight.advance(delta_secs)?;
        self.settle.notify();
        if tick.completed {
            self.owner = CameraOwner::User;
        }
        Some(tick)
    }

    /// Records a camera change made outside of a flight (orbit input, zoom).
    pub const fn camera_changed(&mut self) { self.settle.notify(); }

    pub fn tick_settle(&mut self, delta_secs: f32) { self.settle.tick(delta_secs); }

    pub fn drag_start(&mut self, pointer: Vec2) { self.drag.start(pointer); }

    /// The globe follows the pointer directly. The globe is not the camera,
    /// so a flight in progress does not block it.
    pub fn drag_to(&mut self, pointer: Vec2, orientation: &mut GlobeOrientation) {
        let delta = self.drag.drag_to(pointer);
        orientation.yaw += delta.x;
        orientation.tilt += delta.y;
    }

    /// The drag about to start began on a marker.
    pub const fn grab_marker(&mut self) { self.grabbed_marker = true; }

    pub fn drag_end(&mut self) -> DragRelease {
        DragRelease {
            travelled: self.drag.end(),
            on_marker: std::mem::take(&mut self.grabbed_marker),
        }
    }

    pub const fn wheel(&mut self) { self.drag.hard_stop(); }

    /// Spin and tilt levelling keep running through a flight.
    pub fn step_inertia(&mut self, orientation: &mut GlobeOrientation) { self.drag.step(orientation); }

    /// Idle auto-rotation runs only when nobody is steering and motion has settled.
    pub const fn allows_auto_rotation(&self) -> bool {
        matches!(self.owner, CameraOwner::User) && !self.drag.is_dragging() && !self.is_moving()
    }
}

#[cfg(test)]
mod tests {
    use bevy::math::Vec3;

    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    #[test]
    fn globe_keeps_spinning_through_home_flight() {
        let mut state = CameraNavigationState::default();
        let mut orientation = GlobeOrientation::default();
        state.drag_start(Vec2::ZERO);
        state.drag_to(Vec2::new(30.0, 10.0), &mut orientation);
        assert!(state.drag_end().sends_home());

        let home = Vec3::new(0.0, 0.0, 4.0);
        state.begin_flight(FlightPlan::home(home, home, FlightSettings::default()));
        for _ in 0..60 {
            let before = orientation;
            let tick = state.advance_flight(FRAME);
            assert!(tick.is_some_and(|tick| !tick.completed));
            assert_eq!(state.owner(), CameraOwner::FlyTo);

            state.step_inertia(&mut orientation);
            assert!(orientation.yaw > before.yaw, "frozen at {}", orientation.yaw);
            assert!(orientation.tilt.abs() < before.tilt.abs());
        }
    }

    #[test]
    fn flight_hands_camera_back_on_completion() {
        let mut state = CameraNavigationState::default();
        state.begin_flight(FlightPlan::to_surface(
            Vec3::new(0.0, 0.0, 4.0),
            camera_direction(41.32667, 74.77333),
            FlightSettings::default(),
        ));
        while let Some(tick) = state.advance_flight(FRAME) {
            if tick.completed {
                break;
            }
            assert_eq!(state.owner(), CameraOwner::FlyTo);
            assert!(!state.allows_auto_rotation());
        }
        assert_eq!(state.owner(), CameraOwner::User);
        assert!(state.flight().progress().is_none());
    }

    #[test]
    fn moving_flag_outlives_flight_by_settle_delay() {
        let mut state = CameraNavigationState::default();
        state.begin_flight(FlightPlan::home(Vec3::X * 3.0, Vec3::Z * 4.0, FlightSettings::default()));
        while let Some(tick) = state.advance_flight(FRAME) {
            if tick.completed {
                break;
            }
            state.tick_settle(FRAME);
        }
        assert!(state.is_moving());
        assert!(!state.allows_auto_rotation());

        for _ in 0..29 {
            state.tick_settle(FRAME);
        }
        assert!(state.is_moving());
        for _ in 0..2 {
            state.tick_settle(FRAME);
        }
        assert!(!state.is_moving());
        assert!(state.allows_auto_rotation());
    }

    #[test]
    fn drag_follows_pointer_even_during_flight() {
        let mut state = CameraNavigationState::default();
        let mut orientation = GlobeOrientation::default();
        state.drag_start(Vec2::ZERO);
        state.drag_to(Vec2::new(20.0, 10.0), &mut orientation);
        assert!((orientation.yaw - 0.02).abs() < 1e-6);
        assert!((orientation.tilt - 0.01).abs() < 1e-6);

        state.begin_flight(FlightPlan::home(Vec3::X * 3.0, Vec3::Z * 4.0, FlightSettings::default()));
        state.drag_to(Vec2::new(40.0, 10.0), &mut orientation);
        assert!((orientation.yaw - 0.04).abs() < 1e-6);
    }

    #[test]
    fn release_of_marker_drag_stays_put() {
        let mut state = CameraNavigationState::default();
        state.grab_marker();
        state.drag_start(Vec2::ZERO);
        state.drag_to(Vec2::new(30.0, 0.0), &mut GlobeOrientation::default());
        let release = state.drag_end();
        assert!(release.travelled && release.on_marker);
        assert!(!release.sends_home());

        // the marker flag belongs to one drag only
        state.drag_start(Vec2::ZERO);
        state.drag_to(Vec2::new(30.0, 0.0), &mut GlobeOrientation::default());
        assert!(state.drag_end().sends_home());
    }

    #[test]
    fn click_does_not_send_home() {
        let mut state = CameraNavigationState::default();
        state.drag_start(Vec2::ZERO);
        state.drag_to(Vec2::new(1.0, 0.0), &mut GlobeOrientation::default());
        assert!(!state.drag_end().sends_home());
    }

    #[test]
    fn dragging_blocks_auto_rotation() {
        let mut state = CameraNavigationState::default();
        assert!(state.allows_auto_rotation());
        state.drag_start(Vec2::ZERO);
        assert!(!state.allows_auto_rotation());
    }
}
