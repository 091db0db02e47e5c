//! Light pillar markers for the members of one organisation at a time.
//!
//! Choosing an organisation throws the current pillars away and builds a new
//! set on the globe. Focusing a member lights its pillar and flies the camera
//! out over it.

mod config;
mod organizations;
mod pillars;
mod selection;

use bevy::prelude::*;
use config::MarkerConfigPlugin;
pub use organizations::GeoPoint;
pub use organizations::Organization;
use pillars::PillarsPlugin;
use selection::SelectionPlugin;

pub struct MarkersPlugin;

impl Plugin for MarkersPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActiveMarkers>()
            .add_plugins(MarkerConfigPlugin)
            .add_plugins(PillarsPlugin)
            .add_plugins(SelectionPlugin);
    }
}

/// Which organisation is on the globe and which of its members has focus.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActiveMarkers {
    pub organization: Option<Organization>,
    pub focused:      Option<usize>,
}

impl ActiveMarkers {
    pub fn focused_member(&self) -> Option<&'static GeoPoint> {
        self.organization?.member(self.focused?)
    }
}

/// Replace the markers on the globe with the members of `organization`.
#[derive(Event, Clone, Copy, Debug)]
pub struct SelectOrganization {
    pub organization: Organization,
}

/// Focus a member of the active organisation by its index in the table.
#[derive(Event, Clone, Copy, Debug)]
pub struct FocusMember {
    pub index: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focused_member_needs_both_parts() {
        let mut active = ActiveMarkers::default();
        assert!(active.focused_member().is_none());

        active.focused = Some(2);
        assert!(active.focused_member().is_none());

        active.organization = Some(Organization::Brics);
        assert_eq!(active.focused_member().map(|m| m.name), Some("Russia"));

        active.focused = Some(40);
        assert!(active.focused_member().is_none());
    }
}
