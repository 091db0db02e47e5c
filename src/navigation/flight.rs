//! Timed camera flight along an [`ArcPath`].
//!
//! The controller is a two state machine (`Idle`, `Animating`) advanced
//! explicitly once per frame. Starting a flight while one is running replaces
//! it outright, taking the caller-supplied current camera position as the new start.

use bevy::math::Vec3;
use bevy::math::curve::Curve;
use bevy::math::curve::EaseFunction;

use super::arc_path::ArcPath;
use super::constants::ARC_FLOOR_RADIUS;
use super::constants::ARC_SEGMENTS;
use super::constants::FLY_TO_CAMERA_DISTANCE;
use super::constants::FLY_TO_DURATION_SECS;

/// Where the camera is and what it looks at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at:  Vec3,
}

/// Tunables for building a flight, usually copied out of `NavigationConfig`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlightSettings {
    pub segments:        usize,
    pub floor_radius:    f32,
    pub camera_distance: f32,
    pub duration_secs:   f32,
}

impl Default for FlightSettings {
    fn default() -> Self {
        Self {
            segments:        ARC_SEGMENTS,
            floor_radius:    ARC_FLOOR_RADIUS,
            camera_distance: FLY_TO_CAMERA_DISTANCE,
            duration_secs:   FLY_TO_DURATION_SECS,
        }
    }
}

/// A fully resolved flight, ready to hand to [`FlightController::start`].
#[derive(Clone, Debug)]
pub struct FlightPlan {
    path:     ArcPath,
    look_at:  Vec3,
    duration: f32,
    easing:   EaseFunction,
}

impl FlightPlan {
    /// Flight that parks the camera `camera_distance` out along `direction`,
    /// looking back at the surface point below it.
    ///
    /// `direction` is expected in world space on the unit sphere.
    pub fn to_surface(camera_position: Vec3, direction: Vec3, settings: FlightSettings) -> Self {
        let direction = direction.try_normalize().unwrap_or(Vec3::Z);
        let end = direction * settings.camera_distance;
        Self {
            path:     ArcPath::build(
                camera_position,
                end,
                settings.segments,
                settings.floor_radius,
            ),
            look_at:  direction,
            duration: settings.duration_secs,
            easing:   EaseFunction::CubicInOut,
        }
    }

    /// Flight back to `home`, looking at the globe centre, decelerating on arrival.
    pub fn home(camera_position: Vec3, home: Vec3, settings: FlightSettings) -> Self {
        Self {
            path:     ArcPath::build(
                camera_position,
                home,
                settings.segments,
                settings.floor_radius,
            ),
            look_at:  Vec3::ZERO,
            duration: settings.duration_secs,
            easing:   EaseFunction::CubicOut,
        }
    }

    pub const fn path(&self) -> &ArcPath { &self.path }

    pub const fn look_at(&self) -> Vec3 { self.look_at }
}

/// Result of advancing an active flight by one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlightTick {
    pub pose:      CameraPose,
    /// Eased progress in `[0, 1]`.
    pub progress:  f32,
    pub completed: bool,
}

#[derive(Clone, Debug)]
struct ActiveFlight {
    plan:     FlightPlan,
    elapsed:  f32,
    progress: f32,
}

#[derive(Clone, Debug, Default)]
enum FlightPhase {
    #[default]
    Idle,
    Animating(ActiveFlight),
}

#[derive(Clone, Debug, Default)]
pub struct FlightController {
    phase: FlightPhase,
}

impl FlightController {
    /// Replaces whatever flight is running with `plan`, progress reset to 0.
    pub fn start(&mut self, plan: FlightPlan) {
        self.phase = FlightPhase::Animating(ActiveFlight {
            plan,
            elapsed: 0.0,
            progress: 0.0,
        });
    }

    pub const fn progress(&self) -> Option<f32> {
        match &self.phase {
            FlightPhase::Animating(flight) => Some(flight.progress),
            FlightPhase::Idle => None,
        }
    }

    /// Moves the active flight forward by `delta_secs`.
    ///
    /// Returns `None` while idle. The tick that reaches the end of the path
    /// reports `completed` and leaves the controller idle.
    pub fn advance(&mut self, delta_secs: f32) -> Option<FlightTick> {
        let FlightPhase::Animating(flight) = &mut self.phase else {
            return None;
        };

        flight.elapsed += delta_secs.max(0.0);
        let linear = if flight.plan.duration > 0.0 {
            (flight.elapsed / flight.plan.duration).min(1.0)
        } else {
            1.0
        };
        let completed = linear >= 1.0;
        flight.progress = if completed {
            1.0
        } else {
            flight.plan.easing.sample_clamped(linear)
        };

        let tick = FlightTick {
            pose: CameraPose {
                position: flight.plan.path.sample(flight.progress),
                look_at:  flight.plan.look_at,
            },
            progress: flight.progress,
            completed,
        };

        if completed {
            self.phase = FlightPhase::Idle;
        }
        Some(tick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::projector::camera_direction;

    const FRAME: f32 = 1.0 / 60.0;
    const TOLERANCE: f32 = 1e-4;

    fn run_to_completion(controller: &mut FlightController) -> Vec<FlightTick> {
        let mut ticks = Vec::new();
        while let Some(tick) = controller.advance(FRAME) {
            ticks.push(tick);
            assert!(ticks.len() < 10_000, "flight never completed");
        }
        ticks
    }

    #[test]
    fn idle_controller_does_nothing() {
        let mut controller = FlightController::default();
        assert!(controller.progress().is_none());
        assert!(controller.advance(FRAME).is_none());
        assert!(controller.progress().is_none());
    }

    #[test]
    fn flight_ends_at_parked_camera_looking_at_surface() {
        let direction = camera_direction(20.93972, 78.92);
        let mut controller = FlightController::default();
        controller.start(FlightPlan::to_surface(
            Vec3::new(0.0, 0.0, 4.0),
            direction,
            FlightSettings::default(),
        ));

        let ticks = run_to_completion(&mut controller);
        let last = ticks.last().copied();
        let Some(last) = last else {
            panic!("no ticks");
        };

        assert!(last.completed);
        assert!((last.progress - 1.0).abs() < f32::EPSILON);
        assert!(last.pose.look_at.abs_diff_eq(direction, TOLERANCE));
        assert!(last.pose.position.normalize().abs_diff_eq(direction, TOLERANCE));
        assert!(controller.progress().is_none());
        // 1.5 s at 60 Hz
        assert!((89..=91).contains(&ticks.len()), "took {} frames", ticks.len());
    }

    #[test]
    fn progress_is_eased_and_monotonic() {
        let mut controller = FlightController::default();
        controller.start(FlightPlan::to_surface(
            Vec3::new(0.0, 0.0, 4.0),
            Vec3::X,
            FlightSettings::default(),
        ));

        let ticks = run_to_completion(&mut controller);
        let first = ticks[0].progress;
        let linear_first = FRAME / FLY_TO_DURATION_SECS;
        assert!(first < linear_first, "ease-in should start slower than linear");

        for pair in ticks.windows(2) {
            assert!(pair[1].progress >= pair[0].progress);
        }
    }

    #[test]
    fn degenerate_flight_still_takes_full_duration() {
        let here = Vec3::new(0.0, 0.0, 3.0);
        let mut controller = FlightController::default();
        controller.start(FlightPlan::to_surface(here, Vec3::Z, FlightSettings::default()));

        let ticks = run_to_completion(&mut controller);
        assert!(ticks.len() >= 89);
        for tick in ticks {
            assert!(tick.pose.position.abs_diff_eq(here, TOLERANCE));
        }
    }

    #[test]
    fn new_flight_preempts_and_converges_on_latest_target() {
        let settings = FlightSettings::default();
        let target_a = camera_direction(-8.7667, -63.9);
        let target_b = camera_direction(36.5556, 138.2319);

        let mut controller = FlightController::default();
        controller.start(FlightPlan::to_surface(Vec3::new(0.0, 0.0, 4.0), target_a, settings));

        let mut camera = Vec3::new(0.0, 0.0, 4.0);
        for _ in 0..30 {
            if let Some(tick) = controller.advance(FRAME) {
                camera = tick.pose.position;
            }
        }
        assert!(controller.progress().is_some());

        controller.start(FlightPlan::to_surface(camera, target_b, settings));
        let first_after = controller.advance(0.0);
        let Some(first_after) = first_after else {
            panic!("preempting flight should be active");
        };
        // picks up exactly where the interrupted flight left the camera
        assert!(first_after.pose.position.normalize().abs_diff_eq(camera.normalize(), TOLERANCE));

        let ticks = run_to_completion(&mut controller);
        for tick in &ticks {
            assert!(tick.pose.look_at.abs_diff_eq(target_b, TOLERANCE));
        }
        let Some(last) = ticks.last() else {
            panic!("no ticks");
        };
        assert!(last.pose.position.normalize().abs_diff_eq(target_b, TOLERANCE));
    }

    #[test]
    fn home_flight_looks_at_origin() {
        let home = Vec3::new(0.0, 0.0, 4.0);
        let mut controller = FlightController::default();
        controller.start(FlightPlan::home(Vec3::new(3.0, 0.0, 0.0), home, FlightSettings::default()));

        let ticks = run_to_completion(&mut controller);
        let Some(last) = ticks.last() else {
            panic!("no ticks");
        };
        assert_eq!(last.pose.look_at, Vec3::ZERO);
        assert!(last.pose.position.abs_diff_eq(home, TOLERANCE));
    }
}
