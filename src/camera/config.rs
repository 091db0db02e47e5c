use bevy::prelude::*;
use bevy_inspector_egui::inspector_options::std_options::NumberDisplay;
use bevy_inspector_egui::prelude::*;
use bevy_inspector_egui::quick::ResourceInspectorPlugin;

use crate::globe_input::ToggleNavigationInspector;
use crate::globe_input::ToggleStarInspector;
use crate::globe_input::toggle_active;
use crate::navigation::FlightSettings;
use crate::navigation::constants::ARC_FLOOR_RADIUS;
use crate::navigation::constants::ARC_SEGMENTS;
use crate::navigation::constants::CAMERA_HOME_POSITION;
use crate::navigation::constants::DRAG_DAMPING;
use crate::navigation::constants::DRAG_SCALE;
use crate::navigation::constants::FLY_TO_CAMERA_DISTANCE;
use crate::navigation::constants::FLY_TO_DURATION_SECS;
use crate::navigation::constants::MOTION_SETTLE_SECS;

pub struct CameraConfigPlugin;

impl Plugin for CameraConfigPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(
            ResourceInspectorPlugin::<NavigationConfig>::default()
                .run_if(toggle_active::<ToggleNavigationInspector>),
        )
        .init_resource::<NavigationConfig>()
        .add_plugins(
            ResourceInspectorPlugin::<StarConfig>::default()
                .run_if(toggle_active::<ToggleStarInspector>),
        )
        .init_resource::<StarConfig>();
    }
}

#[derive(Resource, Reflect, InspectorOptions, Debug, PartialEq, Clone, Copy)]
#[reflect(Resource, InspectorOptions)]
pub struct NavigationConfig {
    pub clear_color:            Color,
    #[inspector(min = 0.0, max = 1.0, display = NumberDisplay::Slider)]
    pub bloom_intensity:        f32,
    /// Waypoints in a fly-to arc, not counting the start.
    #[inspector(min = 1, max = 64)]
    pub arc_segments:           usize,
    /// Closest an arc may pass to the globe centre.
    #[inspector(min = 1.0, max = 6.0, display = NumberDisplay::Slider)]
    pub arc_floor_radius:       f32,
    /// Distance from the globe centre where a fly-to parks the camera.
    #[inspector(min = 1.5, max = 8.0, display = NumberDisplay::Slider)]
    pub camera_distance:        f32,
    #[inspector(min = 0.1, max = 5.0, display = NumberDisplay::Slider)]
    pub fly_duration_secs:      f32,
    /// Quiet time before the camera counts as settled.
    #[inspector(min = 0.0, max = 2.0, display = NumberDisplay::Slider)]
    pub settle_delay_secs:      f32,
    #[inspector(min = 0.9, max = 0.999, display = NumberDisplay::Slider)]
    pub drag_damping:           f32,
    #[inspector(min = 0.0001, max = 0.01, display = NumberDisplay::Slider)]
    pub drag_scale:             f32,
    pub home_position:          Vec3,
    /// Fly home whenever a drag on the globe is released.
    pub return_home_on_release: bool,
    #[inspector(min = 0.0, max = 1.0, display = NumberDisplay::Slider)]
    pub zoom_smoothness:        f32,
    #[inspector(min = 0.0, max = 1.0, display = NumberDisplay::Slider)]
    pub pan_smoothness:         f32,
    #[inspector(min = 0.0, max = 1.0, display = NumberDisplay::Slider)]
    pub orbit_smoothness:       f32,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            clear_color:            Color::BLACK,
            bloom_intensity:        0.3,
            arc_segments:           ARC_SEGMENTS,
            arc_floor_radius:       ARC_FLOOR_RADIUS,
            camera_distance:        FLY_TO_CAMERA_DISTANCE,
            fly_duration_secs:      FLY_TO_DURATION_SECS,
            settle_delay_secs:      MOTION_SETTLE_SECS,
            drag_damping:           DRAG_DAMPING,
            drag_scale:             DRAG_SCALE,
            home_position:          CAMERA_HOME_POSITION,
            return_home_on_release: true,
            zoom_smoothness:        0.10,
            pan_smoothness:         0.02,
            orbit_smoothness:       0.10,
        }
    }
}

impl NavigationConfig {
    pub fn flight_settings(&self) -> FlightSettings {
        FlightSettings {
            segments:        self.arc_segments.max(1),
            floor_radius:    self.arc_floor_radius,
            camera_distance: self.camera_distance,
            duration_secs:   self.fly_duration_secs,
        }
    }
}

/// Which backdrop to build; switching rebuilds the field.
#[derive(Reflect, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StarfieldVariant {
    /// Wide cylinder of stars spinning about the vertical axis.
    #[default]
    Simple,
    /// Shell of stars at a fixed distance band around the globe.
    RadialShell,
}

#[derive(Resource, Reflect, InspectorOptions, Debug, PartialEq, Clone, Copy)]
#[reflect(Resource, InspectorOptions)]
pub struct StarConfig {
    pub variant:              StarfieldVariant,
    #[inspector(min = 100, max = 20_000)]
    pub simple_count:         usize,
    #[inspector(min = 100.0, max = 2_000.0, display = NumberDisplay::Slider)]
    pub simple_max_distance:  f32,
    #[inspector(min = 0.1, max = 5.0, display = NumberDisplay::Slider)]
    pub simple_star_radius:   f32,
    /// Spin multiplier; 1.0 is 0.05 rad/s.
    #[inspector(min = 0.0, max = 10.0, display = NumberDisplay::Slider)]
    pub simple_velocity:      f32,
    #[inspector(min = 1_000, max = 10_000)]
    pub shell_count:          usize,
    #[inspector(min = 0.01, max = 0.5, display = NumberDisplay::Slider)]
    pub shell_star_size:      f32,
    #[inspector(min = 5.0, max = 100.0, display = NumberDisplay::Slider)]
    pub shell_min_distance:   f32,
    #[inspector(min = 10.0, max = 200.0, display = NumberDisplay::Slider)]
    pub shell_max_distance:   f32,
    /// Radians per second about the vertical axis.
    #[inspector(min = 0.0, max = 1.0, display = NumberDisplay::Slider)]
    pub shell_rotation_speed: f32,
}

impl Default for StarConfig {
    fn default() -> Self {
        Self {
            variant:              StarfieldVariant::Simple,
            simple_count:         10_000,
            simple_max_distance:  1_000.0,
            simple_star_radius:   1.2,
            simple_velocity:      1.0,
            shell_count:          5_000,
            shell_star_size:      0.08,
            shell_min_distance:   20.0,
            shell_max_distance:   50.0,
            shell_rotation_speed: 0.006,
        }
    }
}
