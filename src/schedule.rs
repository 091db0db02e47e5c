use bevy::prelude::*;

use crate::asset_loader::AssetsState;

/// Per-frame ordering: input, then inertia, then fly-to sampling, then marker highlighting.
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum FrameSet {
    UserInput,
    Inertia,
    FlyTo,
    Highlight,
}

pub struct SchedulePlugin;

impl Plugin for SchedulePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                FrameSet::UserInput,
                FrameSet::Inertia,
                FrameSet::FlyTo,
                FrameSet::Highlight,
            )
                .chain()
                // nothing moves until the preloader has handed over
                .run_if(in_state(AssetsState::Loaded)),
        );
    }
}
