use bevy::asset::LoadState;
/// load the globe textures once and show a preloader until they're in
use bevy::prelude::*;

use crate::despawn::despawn;

pub struct AssetLoaderPlugin;

impl Plugin for AssetLoaderPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AssetsState>() // necessary to tell if they've finished loading
            .init_resource::<GlobeAssets>()
            .init_resource::<LoadProgress>()
            .add_systems(PreStartup, load_assets)
            .add_systems(Startup, spawn_preloader)
            .add_systems(
                Update,
                (check_asset_loading, update_preloader)
                    .chain()
                    .run_if(in_state(AssetsState::Loading)),
            )
            .add_systems(OnExit(AssetsState::Loading), despawn_preloader);
    }
}

#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum AssetsState {
    #[default]
    Loading,
    Loaded,
}

#[derive(Resource, Clone, Debug, Default)]
pub struct GlobeAssets {
    pub day_texture:    Handle<Image>,
    pub clouds_texture: Handle<Image>,
    pub star_texture:   Handle<Image>,
}

impl GlobeAssets {
    fn ids(&self) -> [AssetId<Image>; 3] {
        [
            self.day_texture.id(),
            self.clouds_texture.id(),
            self.star_texture.id(),
        ]
    }
}

/// The handle when its texture actually loaded. A missing file leaves the
/// material on its flat colour instead of never drawing.
pub fn usable_texture(asset_server: &AssetServer, handle: &Handle<Image>) -> Option<Handle<Image>> {
    asset_server.is_loaded(handle.id()).then(|| handle.clone())
}

#[derive(Component)]
struct PreloaderText;

/// Fraction of globe textures that have finished, successfully or not.
#[derive(Resource, Default, Debug)]
struct LoadProgress(f32);

pub fn load_assets(mut globe_assets: ResMut<GlobeAssets>, asset_server: Res<AssetServer>) {
    *globe_assets = GlobeAssets {
        day_texture:    asset_server.load("textures/earth_daymap.png"),
        clouds_texture: asset_server.load("textures/earth_clouds.png"),
        star_texture:   asset_server.load("textures/stars/circle.png"),
    };
}

fn spawn_preloader(mut commands: Commands) {
    commands.spawn((
        PreloaderText,
        Text::new("Loading... 0%"),
        TextFont {
            font_size: 28.0,
            ..default()
        },
        Node {
            align_self: AlignSelf::Center,
            justify_self: JustifySelf::Center,
            position_type: PositionType::Absolute,
            ..default()
        },
    ));
}

pub fn check_asset_loading(
    mut progress: ResMut<LoadProgress>,
    mut next_state: ResMut<NextState<AssetsState>>,
    asset_server: Res<AssetServer>,
    globe_assets: Res<GlobeAssets>,
) {
    let ids = globe_assets.ids();
    // a texture that failed to load must not hold the globe hostage; it renders untextured
    let finished = ids
        .iter()
        .filter(|&&id| {
            matches!(
                asset_server.get_load_state(id),
                Some(LoadState::Loaded | LoadState::Failed(_))
            )
        })
        .count();

    #[allow(clippy::cast_precision_loss, reason = "three textures")]
    let fraction = finished as f32 / ids.len() as f32;
    progress.0 = fraction;

    if finished == ids.len() {
        for &id in &ids {
            if let Some(LoadState::Failed(error)) = asset_server.get_load_state(id) {
                warn!("globe texture {id:?} failed to load: {error}");
            }
        }
        info!("All globe assets loaded!");
        next_state.set(AssetsState::Loaded);
    }
}

fn update_preloader(progress: Res<LoadProgress>, mut text: Single<&mut Text, With<PreloaderText>>) {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "progress is a fraction in [0, 1]"
    )]
    let percent = (progress.0 * 100.0).round() as u32;
    text.0 = format!("Loading... {percent}%");
}

fn despawn_preloader(mut commands: Commands, query: Query<Entity, With<PreloaderText>>) {
    for entity in &query {
        despawn(&mut commands, entity);
    }
}
