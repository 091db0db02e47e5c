//! Duration based scale animation, the ECS counterpart of the fly-to timing.

use bevy::math::curve::Curve;
use bevy::math::curve::EaseFunction;
use bevy::prelude::*;

pub struct TweenPlugin;

impl Plugin for TweenPlugin {
    fn build(&self, app: &mut App) { app.add_systems(Update, run_scale_tweens); }
}

/// Animates `Transform::scale` and removes itself when done.
///
/// Inserting a new tween over a running one replaces it; build the new one
/// from the entity's current scale so there is no jump.
#[derive(Component, Clone, Debug)]
pub struct ScaleTween {
    from:     Vec3,
    to:       Vec3,
    elapsed:  f32,
    duration: f32,
    easing:   EaseFunction,
}

impl ScaleTween {
    pub const fn new(from: Vec3, to: Vec3, duration_secs: f32, easing: EaseFunction) -> Self {
        Self {
            from,
            to,
            elapsed: 0.0,
            duration: duration_secs,
            easing,
        }
    }

    fn linear_progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).min(1.0)
        }
    }

    pub fn sample(&self) -> Vec3 {
        let linear = self.linear_progress();
        if linear >= 1.0 {
            return self.to;
        }
        // back-out overshoots past 1, so extrapolate rather than clamp the lerp
        let eased = self.easing.sample_clamped(linear);
        self.from + (self.to - self.from) * eased
    }

    /// Advances the clock; true once the tween has reached its end value.
    pub fn advance(&mut self, delta_secs: f32) -> bool {
        self.elapsed += delta_secs.max(0.0);
        self.linear_progress() >= 1.0
    }
}

fn run_scale_tweens(
    mut commands: Commands,
    time: Res<Time>,
    mut tweens: Query<(Entity, &mut ScaleTween, &mut Transform)>,
) {
    for (entity, mut tween, mut transform) in &mut tweens {
        let finished = tween.advance(time.delta_secs());
        transform.scale = tween.sample();
        if finished {
            commands.entity(entity).remove::<ScaleTween>();
        }
    }
}
