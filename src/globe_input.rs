//! Keyboard actions. Every binding lives on one `GlobeControls` context entity,
//! spawned once the textures are in so nothing fires against a missing globe.

use std::marker::PhantomData;

use bevy::prelude::*;
use bevy_enhanced_input::prelude::*;

use crate::asset_loader::AssetsState;
use crate::markers::Organization;

pub struct GlobeInputPlugin;

impl Plugin for GlobeInputPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EnhancedInputPlugin)
            .add_input_context::<GlobeControls>()
            .add_systems(OnEnter(AssetsState::Loaded), spawn_globe_controls);

        add_toggle::<ToggleNavigationInspector>(app);
        add_toggle::<ToggleGlobeInspector>(app);
        add_toggle::<ToggleStarInspector>(app);
        add_toggle::<ToggleMarkerInspector>(app);
    }
}

#[derive(Component)]
pub struct GlobeControls;

#[derive(InputAction)]
#[action_output(bool)]
pub struct GoHome;

#[derive(InputAction)]
#[action_output(bool)]
pub struct NextMember;

#[derive(InputAction)]
#[action_output(bool)]
pub struct ShowBrics;

#[derive(InputAction)]
#[action_output(bool)]
pub struct ShowSco;

#[derive(InputAction)]
#[action_output(bool)]
pub struct ShowCis;

#[derive(InputAction)]
#[action_output(bool)]
pub struct ShowEaeu;

#[derive(InputAction)]
#[action_output(bool)]
pub struct ShowApec;

#[derive(InputAction)]
#[action_output(bool)]
pub struct ToggleNavigationInspector;

#[derive(InputAction)]
#[action_output(bool)]
pub struct ToggleGlobeInspector;

#[derive(InputAction)]
#[action_output(bool)]
pub struct ToggleStarInspector;

#[derive(InputAction)]
#[action_output(bool)]
pub struct ToggleMarkerInspector;

/// An action that puts one organisation's markers on the globe.
pub trait OrganizationAction: InputAction {
    const ORGANIZATION: Organization;
}

impl OrganizationAction for ShowBrics {
    const ORGANIZATION: Organization = Organization::Brics;
}

impl OrganizationAction for ShowSco {
    const ORGANIZATION: Organization = Organization::Sco;
}

impl OrganizationAction for ShowCis {
    const ORGANIZATION: Organization = Organization::Cis;
}

impl OrganizationAction for ShowEaeu {
    const ORGANIZATION: Organization = Organization::Eaeu;
}

impl OrganizationAction for ShowApec {
    const ORGANIZATION: Organization = Organization::Apec;
}

fn spawn_globe_controls(mut commands: Commands) {
    commands.spawn((
        Name::new("GlobeControls"),
        GlobeControls,
        actions!(GlobeControls[
            (Action::<GoHome>::new(), bindings![KeyCode::KeyH]),
            (Action::<NextMember>::new(), bindings![KeyCode::Tab]),
            (Action::<ShowBrics>::new(), bindings![KeyCode::Digit1]),
            (Action::<ShowSco>::new(), bindings![KeyCode::Digit2]),
            (Action::<ShowCis>::new(), bindings![KeyCode::Digit3]),
            (Action::<ShowEaeu>::new(), bindings![KeyCode::Digit4]),
            (Action::<ShowApec>::new(), bindings![KeyCode::Digit5]),
            (Action::<ToggleNavigationInspector>::new(), bindings![KeyCode::F1]),
            (Action::<ToggleGlobeInspector>::new(), bindings![KeyCode::F2]),
            (Action::<ToggleStarInspector>::new(), bindings![KeyCode::F3]),
            (Action::<ToggleMarkerInspector>::new(), bindings![KeyCode::F4]),
        ]),
    ));
}

/// Flips on every press of `A`.
#[derive(Resource)]
pub struct Toggle<A: InputAction> {
    active: bool,
    action: PhantomData<fn() -> A>,
}

impl<A: InputAction> Default for Toggle<A> {
    fn default() -> Self {
        Self {
            active: false,
            action: PhantomData,
        }
    }
}

impl<A: InputAction> Toggle<A> {
    pub const fn is_active(&self) -> bool { self.active }

    const fn flip(&mut self) { self.active = !self.active; }
}

fn add_toggle<A: InputAction>(app: &mut App) {
    app.init_resource::<Toggle<A>>().add_observer(flip_toggle::<A>);
}

fn flip_toggle<A: InputAction>(_pressed: On<Start<A>>, mut toggle: ResMut<Toggle<A>>) { toggle.flip(); }

/// Run condition for anything hidden until its action is pressed.
pub fn toggle_active<A: InputAction>(toggle: Option<Res<Toggle<A>>>) -> bool {
    toggle.is_some_and(|toggle| toggle.is_active())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_on_each_press() {
        let mut toggle = Toggle::<ToggleGlobeInspector>::default();
        assert!(!toggle.is_active());
        toggle.flip();
        assert!(toggle.is_active());
        toggle.flip();
        assert!(!toggle.is_active());
    }

    #[test]
    fn digit_actions_cover_every_organization() {
        let bound = [
            ShowBrics::ORGANIZATION,
            ShowSco::ORGANIZATION,
            ShowCis::ORGANIZATION,
            ShowEaeu::ORGANIZATION,
            ShowApec::ORGANIZATION,
        ];
        assert_eq!(bound, Organization::ALL);
    }
}
