use bevy::math::curve::Curve;
use bevy::math::curve::EaseFunction;
use bevy::picking::events::Out;
use bevy::picking::events::Over;
use bevy::picking::events::Pointer;
use bevy::prelude::*;

use super::ActiveMarkers;
use super::Organization;
use super::SelectOrganization;
use super::config::MarkerConfig;
use crate::despawn::despawn_all;
use crate::globe::Globe;
use crate::navigation::CameraNavigationState;
use crate::navigation::marker_position;
use crate::schedule::FrameSet;
use crate::traits::TransformExt;
use crate::tween::ScaleTween;

const PILLAR_RADIUS: f32 = 0.002;
const PILLAR_LENGTH: f32 = 2.0;
const BASE_RADIUS: f32 = 0.024;
const BASE_HEIGHT: f32 = 0.015;
/// Pillars start flat and grow out of the surface.
const PILLAR_SEED_SCALE: Vec3 = Vec3::new(1.0, 0.0, 1.0);

pub struct PillarsPlugin;

impl Plugin for PillarsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, create_pillar_meshes)
            .add_observer(on_select_organization)
            .add_observer(on_pointer_over)
            .add_observer(on_pointer_out)
            .add_systems(Update, update_highlights.in_set(FrameSet::Highlight));
    }
}

/// One member's pillar and base. The entity sits on the surface, +Y along the normal.
#[derive(Component, Debug)]
pub struct Marker {
    pub index: usize,
    material:  Handle<StandardMaterial>,
}

#[derive(Component)]
struct Hovered;

/// Eased highlight level, 0 when idle.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct Highlight {
    from:    f32,
    target:  f32,
    value:   f32,
    elapsed: f32,
}

impl Highlight {
    /// Starts easing toward `target` from wherever the level is now.
    pub fn retarget(&mut self, target: f32) {
        if (target - self.target).abs() <= f32::EPSILON {
            return;
        }
        self.from = self.value;
        self.target = target;
        self.elapsed = 0.0;
    }

    pub fn advance(&mut self, delta_secs: f32, duration_secs: f32) -> f32 {
        self.elapsed += delta_secs.max(0.0);
        let progress = if duration_secs <= 0.0 {
            1.0
        } else {
            (self.elapsed / duration_secs).min(1.0)
        };
        let eased = EaseFunction::QuadraticOut.sample_clamped(progress);
        self.value = (self.target - self.from).mul_add(eased, self.from);
        self.value
    }

    pub fn is_settled(&self) -> bool { (self.value - self.target).abs() <= f32::EPSILON }
}

#[derive(Resource)]
struct PillarMeshes {
    pillar: Handle<Mesh>,
    base:   Handle<Mesh>,
}

fn create_pillar_meshes(mut commands: Commands, mut meshes: ResMut<Assets<Mesh>>) {
    commands.insert_resource(PillarMeshes {
        pillar: meshes.add(Cylinder::new(PILLAR_RADIUS, PILLAR_LENGTH)),
        base:   meshes.add(Cone {
            radius: BASE_RADIUS,
            height: BASE_HEIGHT,
        }),
    });
}

fn pillar_material(config: &MarkerConfig, level: f32) -> StandardMaterial {
    StandardMaterial {
        base_color: Color::BLACK,
        emissive: config.color.to_linear() * config.glow_for(level),
        alpha_mode: AlphaMode::Add,
        double_sided: true,
        cull_mode: None,
        ..default()
    }
}

fn on_select_organization(
    select: On<SelectOrganization>,
    mut commands: Commands,
    config: Res<MarkerConfig>,
    pillar_meshes: Res<PillarMeshes>,
    mut active: ResMut<ActiveMarkers>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    globe: Single<Entity, With<Globe>>,
    markers: Query<Entity, With<Marker>>,
) {
    let organization = select.organization;
    despawn_all(&mut commands, &markers);
    *active = ActiveMarkers {
        organization: Some(organization),
        focused:      None,
    };

    spawn_marker_set(
        &mut commands,
        *globe,
        organization,
        &config,
        &pillar_meshes,
        &mut materials,
    );
    info!(
        "showing {} with {} members",
        organization.label(),
        organization.members().len()
    );
}

fn spawn_marker_set(
    commands: &mut Commands,
    globe: Entity,
    organization: Organization,
    config: &MarkerConfig,
    pillar_meshes: &PillarMeshes,
    materials: &mut Assets<StandardMaterial>,
) {
    for (index, member) in organization.members().iter().enumerate() {
        let normal = marker_position(member.latitude, member.longitude);
        let material = materials.add(pillar_material(config, 0.0));

        let marker = commands
            .spawn((
                Name::new(member.name),
                Marker {
                    index,
                    material: material.clone(),
                },
                Highlight::default(),
                Transform::from_trs(
                    normal * config.surface_lift,
                    Quat::from_rotation_arc(Vec3::Y, normal),
                    Vec3::ONE,
                ),
                Visibility::default(),
            ))
            .with_children(|parent| {
                parent.spawn((
                    Mesh3d(pillar_meshes.pillar.clone()),
                    MeshMaterial3d(material.clone()),
                    Transform::from_scale(PILLAR_SEED_SCALE),
                    ScaleTween::new(
                        PILLAR_SEED_SCALE,
                        Vec3::ONE,
                        config.grow_secs,
                        EaseFunction::CubicOut,
                    ),
                ));
                parent.spawn((
                    Mesh3d(pillar_meshes.base.clone()),
                    MeshMaterial3d(material),
                    Transform::default(),
                ));
            })
            .id();
        commands.entity(globe).add_child(marker);
    }
}

fn on_pointer_over(
    over: On<Pointer<Over>>,
    mut commands: Commands,
    state: Res<CameraNavigationState>,
    markers: Query<(), With<Marker>>,
) {
    // no hover feedback while the globe is being spun
    if state.drag().is_dragging() || !markers.contains(over.entity) {
        return;
    }
    commands.entity(over.entity).insert(Hovered);
}

fn on_pointer_out(out: On<Pointer<Out>>, mut commands: Commands, markers: Query<(), With<Marker>>) {
    if markers.contains(out.entity) {
        commands.entity(out.entity).remove::<Hovered>();
    }
}

fn highlight_target(config: &MarkerConfig, hovered: bool, focused: bool) -> f32 {
    match (hovered, focused) {
        (true, true) => config.hover_intensity.max(config.focus_intensity),
        (true, false) => config.hover_intensity,
        (false, true) => config.focus_intensity,
        (false, false) => 0.0,
    }
}

fn update_highlights(
    time: Res<Time>,
    config: Res<MarkerConfig>,
    active: Res<ActiveMarkers>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut markers: Query<(&Marker, Has<Hovered>, &mut Highlight, &mut Transform)>,
) {
    for (marker, hovered, mut highlight, mut transform) in &mut markers {
        let focused = active.focused == Some(marker.index);
        highlight.retarget(highlight_target(&config, hovered, focused));
        if highlight.is_settled() && !config.is_changed() {
            continue;
        }

        let level = highlight.advance(time.delta_secs(), config.highlight_secs);
        transform.scale = Vec3::splat(config.scale_for(level));
        transform.translation = transform.translation.normalize_or_zero() * config.surface_lift;
        if let Some(material) = materials.get_mut(&marker.material) {
            material.emissive = config.color.to_linear() * config.glow_for(level);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_eases_to_target_and_holds() {
        let mut highlight = Highlight::default();
        highlight.retarget(5.0);
        let first = highlight.advance(0.1, 0.3);
        assert!(first > 0.0 && first < 5.0, "{first}");
        let second = highlight.advance(0.1, 0.3);
        assert!(second > first);
        assert!((highlight.advance(0.2, 0.3) - 5.0).abs() < 1e-6);
        assert!(highlight.is_settled());
    }

    #[test]
    fn retarget_mid_ease_starts_from_current_level() {
        let mut highlight = Highlight::default();
        highlight.retarget(5.0);
        let midway = highlight.advance(0.15, 0.3);
        highlight.retarget(0.0);
        let after = highlight.advance(0.0, 0.3);
        assert!((after - midway).abs() < 1e-6);
        assert!(highlight.advance(0.3, 0.3).abs() < 1e-6);
    }

    #[test]
    fn same_target_does_not_restart() {
        let mut highlight = Highlight::default();
        highlight.retarget(2.0);
        highlight.advance(0.3, 0.3);
        highlight.retarget(2.0);
        assert!(highlight.is_settled());
    }

    #[test]
    fn hover_beats_focus() {
        let config = MarkerConfig::default();
        assert!((highlight_target(&config, true, true) - 5.0).abs() < f32::EPSILON);
        assert!((highlight_target(&config, false, true) - 2.0).abs() < f32::EPSILON);
        assert!(highlight_target(&config, false, false).abs() < f32::EPSILON);
    }

    #[test]
    fn highlighted_marker_grows_and_glows() {
        let config = MarkerConfig::default();
        assert!((config.scale_for(0.0) - 1.0).abs() < f32::EPSILON);
        assert!((config.scale_for(5.0) - 1.75).abs() < 1e-6);
        assert!(config.glow_for(5.0) > config.glow_for(2.0));
    }
}
