//! Bridges the navigation core's fly-to controller onto the pan-orbit camera.
//!
//! Starting a flight hands the camera to `CameraOwner::FlyTo`: orbit input and
//! smoothing are switched off, and every frame the sampled pose is written into
//! the orbit targets. The completing frame re-seats the orbit around the globe
//! centre on the same line of sight, so handing control back causes no jump.

use bevy::prelude::*;
use bevy_enhanced_input::prelude::*;
use bevy_panorbit_camera::PanOrbitCamera;

use super::GlobeCamera;
use super::NavigationConfig;
use super::PanOrbitCameraExt;
use crate::globe_input::GoHome;
use crate::navigation::CameraNavigationState;
use crate::navigation::FlightPlan;
use crate::schedule::FrameSet;

pub struct FlyToPlugin;

impl Plugin for FlyToPlugin {
    fn build(&self, app: &mut App) {
        app.add_observer(on_fly_to_surface)
            .add_observer(on_fly_home)
            .add_observer(on_go_home)
            .add_systems(Update, drive_flight.in_set(FrameSet::FlyTo));
    }
}

/// Fly the camera out over a point on the globe.
#[derive(Event, Clone, Copy, Debug)]
pub struct FlyToSurface {
    /// World-space direction from the globe centre to the surface point.
    pub direction: Vec3,
}

/// Fly the camera back to its home position.
#[derive(Event, Clone, Copy, Debug, Default)]
pub struct FlyHome;

fn on_go_home(_go_home: On<Start<GoHome>>, mut commands: Commands) { commands.trigger(FlyHome); }

fn on_fly_to_surface(
    fly_to: On<FlyToSurface>,
    config: Res<NavigationConfig>,
    mut state: ResMut<CameraNavigationState>,
    camera: Single<(&Transform, &mut PanOrbitCamera), With<GlobeCamera>>,
) {
    let (transform, mut pan_orbit) = camera.into_inner();
    let plan = FlightPlan::to_surface(
        transform.translation,
        fly_to.direction,
        config.flight_settings(),
    );
    begin_flight(&mut state, &mut pan_orbit, plan);
}

fn on_fly_home(
    _fly_home: On<FlyHome>,
    config: Res<NavigationConfig>,
    mut state: ResMut<CameraNavigationState>,
    camera: Single<(&Transform, &mut PanOrbitCamera), With<GlobeCamera>>,
) {
    let (transform, mut pan_orbit) = camera.into_inner();
    let plan = FlightPlan::home(
        transform.translation,
        config.home_position,
        config.flight_settings(),
    );
    begin_flight(&mut state, &mut pan_orbit, plan);
}

fn begin_flight(state: &mut CameraNavigationState, pan_orbit: &mut PanOrbitCamera, plan: FlightPlan) {
    if let Some(progress) = state.flight().progress() {
        debug!("fly-to preempted at {:.0}%", progress * 100.0);
    }
    info!(
        "fly-to start: {} -> {} looking at {} ({} waypoints at radius {:.2})",
        plan.path().start(),
        plan.path().end(),
        plan.look_at(),
        plan.path().waypoints().len(),
        plan.path().radius()
    );

    state.begin_flight(plan);
    debug!("camera owner now {:?}", state.owner());
    pan_orbit.enabled = false;
    pan_orbit.disable_interpolation();
}

fn drive_flight(
    time: Res<Time>,
    config: Res<NavigationConfig>,
    mut state: ResMut<CameraNavigationState>,
    mut pan_orbit: Single<&mut PanOrbitCamera, With<GlobeCamera>>,
) {
    let Some(tick) = state.advance_flight(time.delta_secs()) else {
        return;
    };

    trace!("fly-to at {:.3}", tick.progress);
    pan_orbit.aim_at_pose(tick.pose);

    if tick.completed {
        pan_orbit.settle_at(tick.pose.position, Vec3::ZERO);
        pan_orbit.enable_interpolation(&config);
        pan_orbit.enabled = true;
        info!("fly-to complete at {}", tick.pose.position);
        debug!("camera owner now {:?}", state.owner());
    }
}
