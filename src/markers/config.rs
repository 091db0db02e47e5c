use bevy::prelude::*;
use bevy_inspector_egui::inspector_options::std_options::NumberDisplay;
use bevy_inspector_egui::prelude::*;
use bevy_inspector_egui::quick::ResourceInspectorPlugin;

use crate::globe_input::ToggleMarkerInspector;
use crate::globe_input::toggle_active;

pub struct MarkerConfigPlugin;

impl Plugin for MarkerConfigPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(
            ResourceInspectorPlugin::<MarkerConfig>::default()
                .run_if(toggle_active::<ToggleMarkerInspector>),
        )
        .init_resource::<MarkerConfig>();
    }
}

#[derive(Resource, Reflect, InspectorOptions, Debug, PartialEq, Clone, Copy)]
#[reflect(Resource, InspectorOptions)]
pub struct MarkerConfig {
    pub color:           Color,
    /// Glow of a marker nobody is pointing at.
    #[inspector(min = 0.0, max = 5.0, display = NumberDisplay::Slider)]
    pub idle_intensity:  f32,
    #[inspector(min = 0.0, max = 10.0, display = NumberDisplay::Slider)]
    pub hover_intensity: f32,
    #[inspector(min = 0.0, max = 10.0, display = NumberDisplay::Slider)]
    pub focus_intensity: f32,
    /// Time to ease between highlight levels.
    #[inspector(min = 0.0, max = 2.0, display = NumberDisplay::Slider)]
    pub highlight_secs:  f32,
    /// Extra scale per unit of highlight.
    #[inspector(min = 0.0, max = 0.5, display = NumberDisplay::Slider)]
    pub highlight_scale: f32,
    /// Emissive gain per unit of glow, so bloom picks the pillars up.
    #[inspector(min = 0.0, max = 50.0, display = NumberDisplay::Slider)]
    pub emissive_gain:   f32,
    #[inspector(min = 0.0, max = 5.0, display = NumberDisplay::Slider)]
    pub grow_secs:       f32,
    /// Pillars stand this far out from the surface, as a multiple of the radius.
    #[inspector(min = 1.0, max = 1.1, display = NumberDisplay::Slider)]
    pub surface_lift:    f32,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            color:           Color::WHITE,
            idle_intensity:  1.0,
            hover_intensity: 5.0,
            focus_intensity: 2.0,
            highlight_secs:  0.3,
            highlight_scale: 0.15,
            emissive_gain:   4.0,
            grow_secs:       2.0,
            surface_lift:    1.01,
        }
    }
}

impl MarkerConfig {
    /// Scale of a marker highlighted at `level`.
    pub fn scale_for(&self, level: f32) -> f32 { self.highlight_scale.mul_add(level, 1.0) }

    /// Emissive strength of a marker highlighted at `level`.
    pub fn glow_for(&self, level: f32) -> f32 { (self.idle_intensity + level) * self.emissive_gain }
}
