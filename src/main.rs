//! Globe Navigator - an interactive 3D globe built with Bevy 0.18
//!
//! Features:
//! - Light pillar markers for the members of BRICS, SCO, CIS, EAEU and APEC
//! - Arc-path fly-to camera animation onto a selected member
//! - Inertial drag rotation of the globe with return-to-level on release
//! - Swappable starfield backdrops
//! - Live tuning panels via `bevy-inspector-egui`
//! - Bevy Remote Protocol (BRP) support for debugging

mod asset_loader;
mod camera;
mod despawn;
mod globe;
mod globe_input;
mod markers;
mod navigation;
mod schedule;
mod traits;
mod tween;

use bevy::picking::mesh_picking::MeshPickingPlugin;
use bevy::prelude::*;
#[cfg(target_arch = "wasm32")]
use bevy::window::MonitorSelection;
#[cfg(target_arch = "wasm32")]
use bevy::window::PresentMode;
#[cfg(target_arch = "wasm32")]
use bevy::window::WindowMode;
use bevy_brp_extras::BrpExtrasPlugin;
use bevy_inspector_egui::bevy_egui::EguiPlugin;

use crate::asset_loader::AssetLoaderPlugin;
use crate::camera::CameraPlugin;
use crate::globe::GlobePlugin;
use crate::globe_input::GlobeInputPlugin;
use crate::markers::MarkersPlugin;
use crate::schedule::SchedulePlugin;
use crate::tween::TweenPlugin;

fn main() {
    let mut app = App::new();

    // Get effective port from BrpExtrasPlugin to include in window title if non-default
    let brp_plugin = BrpExtrasPlugin::default();
    let (effective_port, _) = brp_plugin.get_effective_port();
    let window_title = if effective_port == bevy_brp_extras::DEFAULT_REMOTE_PORT {
        "globe navigator".to_string()
    } else {
        format!("globe navigator - {effective_port}")
    };

    #[cfg(not(target_arch = "wasm32"))]
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: window_title,
            ..default()
        }),
        ..default()
    }));

    #[cfg(target_arch = "wasm32")]
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: window_title,
            present_mode: PresentMode::AutoNoVsync, // Reduces input lag.
            mode: WindowMode::BorderlessFullscreen(MonitorSelection::Primary),
            ..default()
        }),
        ..default()
    }));

    app.add_plugins((
        EguiPlugin::default(),
        MeshPickingPlugin,
        AssetLoaderPlugin,
        brp_plugin,
        CameraPlugin,
        GlobePlugin,
        GlobeInputPlugin,
        MarkersPlugin,
        SchedulePlugin,
        TweenPlugin,
    ))
    .run();
}
