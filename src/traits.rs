use bevy::prelude::*;

use crate::navigation::GlobeOrientation;

/// Extension trait for `Transform` to provide more concise construction methods
pub trait TransformExt {
    /// Creates a `Transform` from translation, rotation, and scale in one call
    fn from_trs(translation: Vec3, rotation: Quat, scale: Vec3) -> Self;

    /// Writes yaw/tilt as the rotation, keeping translation and scale.
    fn set_globe_orientation(&mut self, orientation: GlobeOrientation);
}

impl TransformExt for Transform {
    fn from_trs(translation: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }

    fn set_globe_orientation(&mut self, orientation: GlobeOrientation) {
        self.rotation = Quat::from_euler(EulerRot::XYZ, orientation.tilt, orientation.yaw, 0.0);
    }
}

/// Extension trait for `usize` to provide safe f32 conversion for scene-scale values
pub trait UsizeExt {
    /// Converts `usize` to `f32` for scene-scale values (safe for values < 16 million)
    fn to_f32(self) -> f32;
}

impl UsizeExt for usize {
    #[inline]
    #[allow(clippy::cast_precision_loss, reason = "star and marker counts are far below 2^24")]
    fn to_f32(self) -> f32 { self as f32 }
}
