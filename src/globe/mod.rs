//! The earth itself: surface, cloud shell, atmosphere rim, and how it turns.

mod config;
mod rotation;

use bevy::picking::Pickable;
use bevy::prelude::*;
use bevy::render::render_resource::Face;
pub use config::GlobeConfig;
use config::GlobeConfigPlugin;
use rotation::RotationPlugin;

use crate::asset_loader::AssetsState;
use crate::asset_loader::GlobeAssets;
use crate::asset_loader::usable_texture;
use crate::navigation::GlobeOrientation;
use crate::traits::TransformExt;

const CLOUD_SHELL_SCALE: f32 = 1.01;
const SPHERE_SECTORS: u32 = 64;
const SPHERE_STACKS: u32 = 64;

pub struct GlobePlugin;

impl Plugin for GlobePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(GlobeConfigPlugin)
            .add_plugins(RotationPlugin)
            .add_systems(OnEnter(AssetsState::Loaded), spawn_globe)
            .add_systems(Update, apply_globe_config);
    }
}

/// Root of the rotating earth; markers and clouds are its children.
#[derive(Component, Debug, Default)]
pub struct Globe {
    pub orientation: GlobeOrientation,
}

#[derive(Component)]
struct Clouds;

/// Rim glow around the globe. Not parented, so it squashes on its own curve.
#[derive(Component)]
pub struct Atmosphere;

#[derive(Resource)]
struct GlobeMaterials {
    surface:    Handle<StandardMaterial>,
    clouds:     Handle<StandardMaterial>,
    atmosphere: Handle<StandardMaterial>,
}

fn spawn_globe(
    mut commands: Commands,
    config: Res<GlobeConfig>,
    globe_assets: Res<GlobeAssets>,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let sphere = meshes.add(Sphere::new(1.0).mesh().uv(SPHERE_SECTORS, SPHERE_STACKS));

    let surface = materials.add(StandardMaterial {
        base_color: config.surface_tint,
        base_color_texture: usable_texture(&asset_server, &globe_assets.day_texture),
        perceptual_roughness: 0.9,
        ..default()
    });
    let cloud_texture = usable_texture(&asset_server, &globe_assets.clouds_texture);
    // without the cloud map the shell would just be a white haze
    let cloud_visibility = if cloud_texture.is_some() {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };
    let clouds = materials.add(StandardMaterial {
        base_color: Color::WHITE.with_alpha(config.cloud_opacity),
        base_color_texture: cloud_texture,
        alpha_mode: AlphaMode::Add,
        ..default()
    });
    // only the far side of the shell is drawn, leaving a halo around the limb
    let atmosphere = materials.add(StandardMaterial {
        base_color: config.atmosphere_color.with_alpha(config.atmosphere_opacity),
        alpha_mode: AlphaMode::Blend,
        cull_mode: Some(Face::Front),
        unlit: true,
        ..default()
    });

    commands
        .spawn((
            Name::new("Globe"),
            Globe::default(),
            Mesh3d(sphere.clone()),
            MeshMaterial3d(surface.clone()),
            Transform::default(),
        ))
        .with_child((
            Name::new("Clouds"),
            Clouds,
            Mesh3d(sphere.clone()),
            MeshMaterial3d(clouds.clone()),
            Transform::from_scale(Vec3::splat(CLOUD_SHELL_SCALE)),
            cloud_visibility,
            Pickable::IGNORE,
        ));

    commands.spawn((
        Name::new("Atmosphere"),
        Atmosphere,
        Mesh3d(sphere),
        MeshMaterial3d(atmosphere.clone()),
        Transform::from_trs(Vec3::ZERO, Quat::IDENTITY, Vec3::splat(config.atmosphere_scale)),
        Pickable::IGNORE,
    ));

    commands.insert_resource(GlobeMaterials {
        surface,
        clouds,
        atmosphere,
    });
}

fn apply_globe_config(
    config: Res<GlobeConfig>,
    globe_materials: Option<Res<GlobeMaterials>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut atmosphere: Query<&mut Transform, With<Atmosphere>>,
) {
    if !config.is_changed() || config.is_added() {
        return;
    }
    let Some(globe_materials) = globe_materials else {
        return;
    };

    if let Some(surface) = materials.get_mut(&globe_materials.surface) {
        surface.base_color = config.surface_tint;
    }
    if let Some(clouds) = materials.get_mut(&globe_materials.clouds) {
        clouds.base_color = Color::WHITE.with_alpha(config.cloud_opacity);
    }
    if let Some(rim) = materials.get_mut(&globe_materials.atmosphere) {
        rim.base_color = config.atmosphere_color.with_alpha(config.atmosphere_opacity);
    }
    for mut transform in &mut atmosphere {
        transform.scale = Vec3::splat(config.atmosphere_scale);
    }
}
