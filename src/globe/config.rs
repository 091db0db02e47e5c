use bevy::prelude::*;
use bevy_inspector_egui::inspector_options::std_options::NumberDisplay;
use bevy_inspector_egui::prelude::*;
use bevy_inspector_egui::quick::ResourceInspectorPlugin;

use crate::globe_input::ToggleGlobeInspector;
use crate::globe_input::toggle_active;

pub struct GlobeConfigPlugin;

impl Plugin for GlobeConfigPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(
            ResourceInspectorPlugin::<GlobeConfig>::default()
                .run_if(toggle_active::<ToggleGlobeInspector>),
        )
        .init_resource::<GlobeConfig>();
    }
}

#[derive(Resource, Reflect, InspectorOptions, Debug, PartialEq, Clone, Copy)]
#[reflect(Resource, InspectorOptions)]
pub struct GlobeConfig {
    /// Multiplied into the day texture.
    pub surface_tint:       Color,
    #[inspector(min = 0.0, max = 1.0, display = NumberDisplay::Slider)]
    pub cloud_opacity:      f32,
    pub atmosphere_color:   Color,
    #[inspector(min = 0.0, max = 1.0, display = NumberDisplay::Slider)]
    pub atmosphere_opacity: f32,
    #[inspector(min = 1.0, max = 1.5, display = NumberDisplay::Slider)]
    pub atmosphere_scale:   f32,
    /// Idle spin in radians per second.
    #[inspector(min = 0.0, max = 0.5, display = NumberDisplay::Slider)]
    pub rotation_speed:     f32,
    /// Scale the globe shrinks to while it is being dragged.
    #[inspector(min = 0.5, max = 1.0, display = NumberDisplay::Slider)]
    pub drag_squash:        f32,
    #[inspector(min = 0.5, max = 1.5, display = NumberDisplay::Slider)]
    pub atmosphere_squash:  f32,
    #[inspector(min = 0.1, max = 1.0, display = NumberDisplay::Slider)]
    pub star_squash:        f32,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            surface_tint:       Color::WHITE,
            cloud_opacity:      0.35,
            atmosphere_color:   Color::srgb_u8(0x0b, 0xbc, 0xff),
            atmosphere_opacity: 0.5,
            atmosphere_scale:   1.02,
            // 0.0003 rad per frame at 60 fps
            rotation_speed:     0.018,
            drag_squash:        0.9,
            atmosphere_squash:  0.92,
            star_squash:        0.5,
        }
    }
}
