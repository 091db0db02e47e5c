use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::ecs::message::MessageReader;
use bevy::input::mouse::MouseWheel;
use bevy::light::AmbientLight;
use bevy::post_process::bloom::Bloom;
use bevy::prelude::*;
use bevy_panorbit_camera::PanOrbitCamera;
use bevy_panorbit_camera::PanOrbitCameraPlugin;

use super::NavigationConfig;
use super::PanOrbitCameraExt;
use super::constants::CAMERA_FAR;
use super::constants::CAMERA_FOV_DEGREES;
use super::constants::CAMERA_NEAR;
use super::constants::CAMERA_ZOOM_LOWER_LIMIT;
use super::constants::CAMERA_ZOOM_SENSITIVITY;
use super::constants::CAMERA_ZOOM_UPPER_LIMIT;
use crate::navigation::CameraNavigationState;
use crate::navigation::CameraOwner;
use crate::schedule::FrameSet;

pub struct CamerasPlugin;

impl Plugin for CamerasPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(PanOrbitCameraPlugin)
            .init_resource::<CameraNavigationState>()
            .add_systems(Startup, (spawn_globe_camera, spawn_lights))
            .add_systems(
                Update,
                (apply_navigation_config, update_bloom_settings, update_clear_color),
            )
            .add_systems(Update, handle_wheel.in_set(FrameSet::UserInput))
            // after the fly-to writes, so a flight's own motion counts too
            .add_systems(Update, track_camera_motion.in_set(FrameSet::Highlight));
    }
}

/// The single camera looking at the globe.
#[derive(Component, Reflect, Default)]
#[reflect(Component)]
pub struct GlobeCamera;

pub fn spawn_globe_camera(mut commands: Commands, config: Res<NavigationConfig>) {
    let home = config.home_position;

    let mut pan_orbit = PanOrbitCamera {
        focus: Vec3::ZERO,
        // orbit on the right button; the left button spins the globe itself
        button_orbit: MouseButton::Right,
        button_pan: MouseButton::Middle,
        zoom_sensitivity: CAMERA_ZOOM_SENSITIVITY,
        zoom_lower_limit: CAMERA_ZOOM_LOWER_LIMIT,
        zoom_upper_limit: Some(CAMERA_ZOOM_UPPER_LIMIT),
        ..default()
    };
    pan_orbit.enable_interpolation(&config);
    pan_orbit.settle_at(home, Vec3::ZERO);

    commands.spawn((
        GlobeCamera,
        Camera3d::default(),
        pan_orbit,
        Transform::from_translation(home).looking_at(Vec3::ZERO, Vec3::Y),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        Tonemapping::AcesFitted,
        bloom_settings(&config),
        // per-camera ambient override; the globe's night side stays readable
        AmbientLight {
            color: Color::srgb_u8(0x40, 0x40, 0x40),
            brightness: 400.0,
            ..default()
        },
    ));
}

fn spawn_lights(mut commands: Commands) {
    commands.spawn((
        DirectionalLight {
            illuminance: 6_000.0,
            ..default()
        },
        Transform::from_xyz(-2.0, 1.5, 1.5).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.spawn((
        PointLight {
            intensity: 200_000.0,
            range: 30.0,
            ..default()
        },
        Transform::from_xyz(10.0, 10.0, 10.0),
    ));
}

/// Pushes tunables into the navigation state, and into the orbit camera when
/// the user currently owns it.
fn apply_navigation_config(
    config: Res<NavigationConfig>,
    mut state: ResMut<CameraNavigationState>,
    mut pan_orbit: Single<&mut PanOrbitCamera, With<GlobeCamera>>,
) {
    if !config.is_changed() {
        return;
    }
    state.set_settle_delay(config.settle_delay_secs);
    state.set_drag_tuning(config.drag_damping, config.drag_scale);
    if state.owner() == CameraOwner::User {
        pan_orbit.enable_interpolation(&config);
    }
}

/// Any camera change, orbit input or flight, re-arms the settle timer.
fn track_camera_motion(
    time: Res<Time>,
    mut state: ResMut<CameraNavigationState>,
    moved: Query<(), (With<GlobeCamera>, Changed<Transform>)>,
) {
    state.tick_settle(time.delta_secs());
    if !moved.is_empty() {
        state.camera_changed();
    }
}

/// The wheel zooms through the orbit camera; it also kills any spin left on the globe.
fn handle_wheel(mut wheel: MessageReader<MouseWheel>, mut state: ResMut<CameraNavigationState>) {
    if wheel.read().count() > 0 {
        state.wheel();
    }
}

fn update_bloom_settings(config: Res<NavigationConfig>, mut bloom: Query<&mut Bloom, With<GlobeCamera>>) {
    if config.is_changed()
        && let Ok(mut current) = bloom.single_mut()
    {
        *current = bloom_settings(&config);
    }
}

fn bloom_settings(config: &NavigationConfig) -> Bloom {
    let mut bloom = Bloom::NATURAL;
    bloom.intensity = config.bloom_intensity;
    bloom
}

fn update_clear_color(config: Res<NavigationConfig>, mut clear_color: ResMut<ClearColor>) {
    if config.is_changed() {
        clear_color.0 = config.clear_color;
    }
}
