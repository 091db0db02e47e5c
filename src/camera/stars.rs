use std::f32::consts::TAU;

use bevy::prelude::*;
use rand::Rng;
use rand::RngExt;

use super::config::StarConfig;
use super::config::StarfieldVariant;
use crate::asset_loader::AssetsState;
use crate::asset_loader::GlobeAssets;
use crate::asset_loader::usable_texture;
use crate::despawn::despawn_all;
use crate::traits::TransformExt;
use crate::traits::UsizeExt;

/// Base spin of the simple field at `velocity == 1`.
const SIMPLE_SPIN_RADIANS_PER_SEC: f32 = 0.05;
/// Keeps the cylinder's axis clear so no star lands in front of the globe.
const SIMPLE_INNER_RADIUS: f32 = 10.0;
const SHELL_MIN_SCALE: f32 = 0.5;
const SHELL_MAX_SCALE: f32 = 1.0;
/// Stars share one material per brightness step instead of one each.
const BRIGHTNESS_BUCKETS: usize = 6;
const SHELL_SAMPLE_ATTEMPTS: usize = 64;

pub struct StarsPlugin;

impl Plugin for StarsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AssetsState::Loaded), spawn_starfield)
            .add_systems(
                Update,
                (respawn_on_config_change, rotate_starfield)
                    .chain()
                    .run_if(in_state(AssetsState::Loaded)),
            );
    }
}

/// Parent of every star; scaling it squashes the whole field.
#[derive(Component, Clone, Debug)]
pub struct StarfieldRoot {
    starfield: Starfield,
    angle:     f32,
}

#[derive(Component)]
struct Star;

/// Cylinder of stars around the vertical axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimpleStarfield {
    pub count:        usize,
    pub max_distance: f32,
    pub star_radius:  f32,
    pub velocity:     f32,
}

/// Stars scattered through a spherical shell around the globe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialShellStarfield {
    pub count:          usize,
    pub star_size:      f32,
    pub min_distance:   f32,
    pub max_distance:   f32,
    pub rotation_speed: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Starfield {
    Simple(SimpleStarfield),
    RadialShell(RadialShellStarfield),
}

#[derive(Clone, Copy, Debug)]
struct StarSeed {
    position:   Vec3,
    size:       f32,
    brightness: f32,
}

impl Starfield {
    pub const fn from_config(config: &StarConfig) -> Self {
        match config.variant {
            StarfieldVariant::Simple => Self::Simple(SimpleStarfield {
                count:        config.simple_count,
                max_distance: config.simple_max_distance,
                star_radius:  config.simple_star_radius,
                velocity:     config.simple_velocity,
            }),
            StarfieldVariant::RadialShell => Self::RadialShell(RadialShellStarfield {
                count:          config.shell_count,
                star_size:      config.shell_star_size,
                min_distance:   config.shell_min_distance,
                max_distance:   config.shell_max_distance,
                rotation_speed: config.shell_rotation_speed,
            }),
        }
    }

    pub const fn count(&self) -> usize {
        match self {
            Self::Simple(simple) => simple.count,
            Self::RadialShell(shell) => shell.count,
        }
    }

    /// Radians per second about Y.
    pub fn spin_rate(&self) -> f32 {
        match self {
            Self::Simple(simple) => SIMPLE_SPIN_RADIANS_PER_SEC * simple.velocity,
            Self::RadialShell(shell) => shell.rotation_speed,
        }
    }

    /// Same stars, ignoring how fast they spin.
    fn same_layout(&self, other: &Self) -> bool { self.without_spin() == other.without_spin() }

    const fn without_spin(self) -> Self {
        match self {
            Self::Simple(simple) => Self::Simple(SimpleStarfield {
                velocity: 0.0,
                ..simple
            }),
            Self::RadialShell(shell) => Self::RadialShell(RadialShellStarfield {
                rotation_speed: 0.0,
                ..shell
            }),
        }
    }

    fn seeds(&self, rng: &mut impl Rng) -> Vec<StarSeed> {
        match self {
            Self::Simple(simple) => (0..simple.count).map(|_| simple.seed(rng)).collect(),
            Self::RadialShell(shell) => (0..shell.count).map(|_| shell.seed(rng)).collect(),
        }
    }
}

impl SimpleStarfield {
    fn seed(&self, rng: &mut impl Rng) -> StarSeed {
        let max_distance = self.max_distance.max(SIMPLE_INNER_RADIUS + 1.0);
        let angle = rng.random_range(0.0..TAU);
        let distance = rng.random_range(SIMPLE_INNER_RADIUS..max_distance);
        let height = rng.random_range(-max_distance..max_distance);

        StarSeed {
            position:   Vec3::new(angle.sin() * distance, height, angle.cos() * distance),
            size:       rng.random_range(0.1..=1.0) * self.star_radius,
            brightness: 1.0,
        }
    }
}

impl RadialShellStarfield {
    fn seed(&self, rng: &mut impl Rng) -> StarSeed {
        let min = self.min_distance.min(self.max_distance);
        let max = self.max_distance.max(self.min_distance);

        // rejection sampling in the bounding cube; a very thin shell gets the
        // last candidate pushed onto it instead of looping
        let mut position = Vec3::ZERO;
        for _ in 0..SHELL_SAMPLE_ATTEMPTS {
            position = Vec3::new(
                rng.random_range(-max..=max),
                rng.random_range(-max..=max),
                rng.random_range(-max..=max),
            );
            let distance = position.length();
            if (min..=max).contains(&distance) {
                break;
            }
        }
        let distance = position.length();
        if !(min..=max).contains(&distance) {
            let direction = position.try_normalize().unwrap_or(Vec3::Y);
            position = direction * distance.clamp(min, max);
        }

        StarSeed {
            position,
            size: rng.random_range(SHELL_MIN_SCALE..=SHELL_MAX_SCALE) * self.star_size,
            brightness: rng.random_range(0.5..=1.0),
        }
    }
}

fn bucket_for(brightness: f32) -> usize {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "brightness is clamped to [0, 1]"
    )]
    let bucket = (brightness.clamp(0.0, 1.0) * (BRIGHTNESS_BUCKETS - 1).to_f32()).round() as usize;
    bucket
}

fn spawn_starfield(
    mut commands: Commands,
    config: Res<StarConfig>,
    globe_assets: Res<GlobeAssets>,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let starfield = Starfield::from_config(&config);
    build_starfield(
        &mut commands,
        starfield,
        &globe_assets,
        &asset_server,
        &mut meshes,
        &mut materials,
    );
}

/// Each star is a textured quad turned toward the origin, which is where the camera lives.
fn build_starfield(
    commands: &mut Commands,
    starfield: Starfield,
    globe_assets: &GlobeAssets,
    asset_server: &AssetServer,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    debug!("spawning {} stars: {starfield:?}", starfield.count());

    let mesh = meshes.add(Rectangle::new(1.0, 1.0));
    let bucket_materials: Vec<Handle<StandardMaterial>> = (0..BRIGHTNESS_BUCKETS)
        .map(|bucket| {
            let brightness = bucket.to_f32() / (BRIGHTNESS_BUCKETS - 1).to_f32();
            materials.add(StandardMaterial {
                base_color: Color::srgba(1.0, 1.0, 1.0, brightness),
                base_color_texture: usable_texture(asset_server, &globe_assets.star_texture),
                emissive: LinearRgba::gray(brightness * 2.0),
                unlit: true,
                alpha_mode: AlphaMode::Blend,
                double_sided: true,
                cull_mode: None,
                ..default()
            })
        })
        .collect();

    let seeds = starfield.seeds(&mut rand::rng());
    commands
        .spawn((
            StarfieldRoot {
                starfield,
                angle: 0.0,
            },
            Transform::default(),
            Visibility::default(),
        ))
        .with_children(|parent| {
            for seed in seeds {
                let rotation = Transform::from_translation(seed.position)
                    .looking_at(Vec3::ZERO, Vec3::Y)
                    .rotation;
                parent.spawn((
                    Star,
                    Mesh3d(mesh.clone()),
                    MeshMaterial3d(bucket_materials[bucket_for(seed.brightness)].clone()),
                    Transform::from_trs(seed.position, rotation, Vec3::splat(seed.size)),
                ));
            }
        });
}

fn respawn_on_config_change(
    mut commands: Commands,
    config: Res<StarConfig>,
    globe_assets: Res<GlobeAssets>,
    asset_server: Res<AssetServer>,
    mut roots: Query<&mut StarfieldRoot>,
    root_entities: Query<Entity, With<StarfieldRoot>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !config.is_changed() || config.is_added() {
        return;
    }
    let wanted = Starfield::from_config(&config);

    let Ok(mut root) = roots.single_mut() else {
        return;
    };
    if root.starfield.same_layout(&wanted) {
        // speed only; keep the stars where they are
        root.starfield = wanted;
        return;
    }

    despawn_all(&mut commands, &root_entities);
    build_starfield(
        &mut commands,
        wanted,
        &globe_assets,
        &asset_server,
        &mut meshes,
        &mut materials,
    );
}

fn rotate_starfield(time: Res<Time>, mut roots: Query<(&mut StarfieldRoot, &mut Transform)>) {
    for (mut root, mut transform) in &mut roots {
        let spin = root.starfield.spin_rate() * time.delta_secs();
        root.angle = (root.angle + spin) % TAU;
        transform.rotation = Quat::from_rotation_y(root.angle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_stars_stay_inside_the_band() {
        let shell = RadialShellStarfield {
            count:          2_000,
            star_size:      0.08,
            min_distance:   20.0,
            max_distance:   50.0,
            rotation_speed: 0.0,
        };
        let mut rng = rand::rng();
        for _ in 0..shell.count {
            let seed = shell.seed(&mut rng);
            let distance = seed.position.length();
            assert!((20.0 - 1e-3..=50.0 + 1e-3).contains(&distance), "{distance}");
            assert!((0.04..=0.08 + 1e-6).contains(&seed.size), "{}", seed.size);
            assert!((0.5..=1.0).contains(&seed.brightness));
        }
    }

    #[test]
    fn thin_shell_still_lands_on_the_shell() {
        let shell = RadialShellStarfield {
            count:          100,
            star_size:      0.1,
            min_distance:   30.0,
            max_distance:   30.0,
            rotation_speed: 0.0,
        };
        let mut rng = rand::rng();
        for _ in 0..shell.count {
            let distance = shell.seed(&mut rng).position.length();
            assert!((distance - 30.0).abs() < 1e-3, "{distance}");
        }
    }

    #[test]
    fn simple_stars_fill_the_cylinder() {
        let simple = SimpleStarfield {
            count:        2_000,
            max_distance: 1_000.0,
            star_radius:  1.2,
            velocity:     1.0,
        };
        let mut rng = rand::rng();
        for _ in 0..simple.count {
            let seed = simple.seed(&mut rng);
            let radial = seed.position.x.hypot(seed.position.z);
            assert!((SIMPLE_INNER_RADIUS - 1e-3..=1_000.0).contains(&radial), "{radial}");
            assert!(seed.position.y.abs() <= 1_000.0);
            assert!(seed.size > 0.0 && seed.size <= 1.2 + 1e-6);
        }
    }

    #[test]
    fn variant_follows_config() {
        let mut config = StarConfig::default();
        assert!(matches!(Starfield::from_config(&config), Starfield::Simple(_)));
        config.variant = StarfieldVariant::RadialShell;
        let shell = Starfield::from_config(&config);
        assert!(matches!(shell, Starfield::RadialShell(_)));
        assert_eq!(shell.count(), config.shell_count);
    }

    #[test]
    fn speed_change_keeps_layout() {
        let config = StarConfig::default();
        let before = Starfield::from_config(&config);
        let faster = Starfield::from_config(&StarConfig {
            simple_velocity: 4.0,
            ..config
        });
        assert!(before.same_layout(&faster));
        assert!((faster.spin_rate() - 0.2).abs() < 1e-6);

        let denser = Starfield::from_config(&StarConfig {
            simple_count: 500,
            ..config
        });
        assert!(!before.same_layout(&denser));
    }

    fn starfield_app(config: StarConfig) -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, AssetPlugin::default()))
            .init_asset::<Mesh>()
            .init_asset::<StandardMaterial>()
            .init_asset::<Image>()
            .init_resource::<GlobeAssets>()
            .insert_resource(config)
            .add_systems(Startup, spawn_starfield)
            .add_systems(Update, respawn_on_config_change);
        app.update();
        app
    }

    fn star_count(app: &mut App) -> usize {
        let world = app.world_mut();
        world.query_filtered::<(), With<Star>>().iter(world).count()
    }

    fn root_entities(app: &mut App) -> Vec<Entity> {
        let world = app.world_mut();
        world
            .query_filtered::<Entity, With<StarfieldRoot>>()
            .iter(world)
            .collect()
    }

    fn small_config() -> StarConfig {
        StarConfig {
            simple_count: 120,
            shell_count:  80,
            ..StarConfig::default()
        }
    }

    #[test]
    fn switching_variant_rebuilds_the_field() {
        let mut app = starfield_app(small_config());
        assert_eq!(star_count(&mut app), 120);
        let before = root_entities(&mut app);

        app.world_mut().resource_mut::<StarConfig>().variant = StarfieldVariant::RadialShell;
        app.update();

        let after = root_entities(&mut app);
        assert_eq!(after.len(), 1);
        assert_ne!(after, before);
        assert_eq!(star_count(&mut app), 80);
    }

    #[test]
    fn speed_change_keeps_the_spawned_stars() {
        let mut app = starfield_app(small_config());
        let before = root_entities(&mut app);

        app.world_mut().resource_mut::<StarConfig>().simple_velocity = 3.0;
        app.update();

        assert_eq!(root_entities(&mut app), before);
        assert_eq!(star_count(&mut app), 120);
    }

    #[test]
    fn brightness_buckets_cover_range() {
        assert_eq!(bucket_for(0.0), 0);
        assert_eq!(bucket_for(1.0), BRIGHTNESS_BUCKETS - 1);
        assert_eq!(bucket_for(2.0), BRIGHTNESS_BUCKETS - 1);
    }
}
