use bevy::math::curve::EaseFunction;
use bevy::picking::events::Drag;
use bevy::picking::events::DragEnd;
use bevy::picking::events::DragStart;
use bevy::picking::events::Pointer;
use bevy::picking::pointer::PointerButton;
use bevy::prelude::*;

use super::Atmosphere;
use super::Globe;
use super::GlobeConfig;
use crate::camera::FlyHome;
use crate::camera::NavigationConfig;
use crate::camera::StarfieldRoot;
use crate::navigation::CameraNavigationState;
use crate::schedule::FrameSet;
use crate::traits::TransformExt;
use crate::tween::ScaleTween;

const SQUASH_SECS: f32 = 0.3;
const RESTORE_SECS: f32 = 0.6;

pub struct RotationPlugin;

impl Plugin for RotationPlugin {
    fn build(&self, app: &mut App) {
        app.add_observer(on_drag_start)
            .add_observer(on_drag)
            .add_observer(on_drag_end)
            .add_systems(Update, spin_globe.in_set(FrameSet::Inertia));
    }
}

/// What the drag squash applies to, and the resting scale it returns to.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Squashable {
    Globe,
    Atmosphere,
    Stars,
}

impl Squashable {
    const fn squashed(self, config: &GlobeConfig) -> f32 {
        match self {
            Self::Globe => config.drag_squash,
            Self::Atmosphere => config.atmosphere_squash,
            Self::Stars => config.star_squash,
        }
    }

    const fn resting(self, config: &GlobeConfig) -> f32 {
        match self {
            Self::Atmosphere => config.atmosphere_scale,
            Self::Globe | Self::Stars => 1.0,
        }
    }
}

type SquashQuery<'w, 's> = Query<
    'w,
    's,
    (Entity, &'static Transform, Has<Globe>, Has<Atmosphere>),
    Or<(With<Globe>, With<Atmosphere>, With<StarfieldRoot>)>,
>;

fn tween_scales(commands: &mut Commands, targets: &SquashQuery, config: &GlobeConfig, squash: bool) {
    for (entity, transform, is_globe, is_atmosphere) in targets {
        let kind = if is_globe {
            Squashable::Globe
        } else if is_atmosphere {
            Squashable::Atmosphere
        } else {
            Squashable::Stars
        };
        let tween = if squash {
            ScaleTween::new(
                transform.scale,
                Vec3::splat(kind.squashed(config)),
                SQUASH_SECS,
                EaseFunction::QuadraticInOut,
            )
        } else {
            ScaleTween::new(
                transform.scale,
                Vec3::splat(kind.resting(config)),
                RESTORE_SECS,
                EaseFunction::BackOut,
            )
        };
        commands.entity(entity).insert(tween);
    }
}

fn on_drag_start(
    drag: On<Pointer<DragStart>>,
    mut commands: Commands,
    config: Res<GlobeConfig>,
    mut state: ResMut<CameraNavigationState>,
    globes: Query<(), With<Globe>>,
    targets: SquashQuery,
) {
    if drag.button != PointerButton::Primary || !globes.contains(drag.entity) {
        return;
    }
    state.drag_start(drag.pointer_location.position);
    tween_scales(&mut commands, &targets, &config, true);
}

fn on_drag(
    drag: On<Pointer<Drag>>,
    mut state: ResMut<CameraNavigationState>,
    mut globes: Query<&mut Globe>,
) {
    if drag.button != PointerButton::Primary {
        return;
    }
    let Ok(mut globe) = globes.get_mut(drag.entity) else {
        return;
    };
    state.drag_to(drag.pointer_location.position, &mut globe.orientation);
}

fn on_drag_end(
    drag: On<Pointer<DragEnd>>,
    mut commands: Commands,
    config: Res<GlobeConfig>,
    navigation: Res<NavigationConfig>,
    mut state: ResMut<CameraNavigationState>,
    globes: Query<(), With<Globe>>,
    targets: SquashQuery,
) {
    if drag.button != PointerButton::Primary || !globes.contains(drag.entity) {
        return;
    }
    let release = state.drag_end();
    debug!(
        "globe released after a {}, spin {:?}",
        if release.travelled { "drag" } else { "click" },
        if state.drag().is_at_rest() { None } else { Some(state.drag().velocity()) }
    );
    tween_scales(&mut commands, &targets, &config, false);

    // a click, or a drag that began on a marker, keeps the camera where it is
    if release.sends_home() && navigation.return_home_on_release {
        commands.trigger(FlyHome);
    }
}

fn spin_globe(
    time: Res<Time>,
    config: Res<GlobeConfig>,
    mut state: ResMut<CameraNavigationState>,
    globe: Single<(&mut Globe, &mut Transform)>,
) {
    let (mut globe, mut transform) = globe.into_inner();
    state.step_inertia(&mut globe.orientation);
    if state.allows_auto_rotation() {
        globe.orientation.yaw += config.rotation_speed * time.delta_secs();
    }
    transform.set_globe_orientation(globe.orientation);
}
