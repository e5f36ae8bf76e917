use crate::section::Section;
use crate::state::{InteractionState, SceneState};

/// What the page chrome around the canvas should show this frame. Compared
/// frame to frame so the DOM is only touched on change.
#[derive(Clone, Debug, PartialEq)]
pub struct HudSnapshot {
    pub section: Section,
    pub transitioning: bool,
    pub loading_visible: bool,
    pub welcome_visible: bool,
    pub instructions_visible: bool,
    pub controlling_badge: bool,
    pub orbit_badge: Option<String>,
    pub background_music: bool,
}

impl HudSnapshot {
    pub fn capture(
        scene: &SceneState,
        interaction: &InteractionState,
        instructions_visible: bool,
    ) -> Self {
        Self {
            section: scene.current_section(),
            transitioning: scene.is_transitioning(),
            loading_visible: !scene.scene_loaded(),
            welcome_visible: scene.scene_loaded() && !scene.welcome_shown(),
            instructions_visible: instructions_visible && !interaction.user_interacting(),
            controlling_badge: interaction.is_user_controlling(),
            orbit_badge: if interaction.pointer_captured() {
                orbit_badge_text(interaction.orbit_speed_multiplier())
            } else {
                None
            },
            background_music: scene.scene_loaded() && scene.welcome_shown(),
        }
    }
}

/// "Orbit: 40%" while the multiplier is off its resting value.
pub fn orbit_badge_text(multiplier: f32) -> Option<String> {
    if (multiplier - 1.0).abs() < 1e-4 {
        None
    } else {
        Some(format!("Orbit: {:.0}%", multiplier * 100.0))
    }
}
