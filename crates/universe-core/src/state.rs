//! Shared scene and interaction stores.
//!
//! Both stores are plain structs owned by [`crate::Universe`] and handed out
//! by reference to the per-frame update and the input handlers. Mutations are
//! visible to the very next read; nothing is buffered. Any page chrome may
//! read these, but only the scene core advances the animation phase.

use crate::constants::{DRAG_SLOWDOWN_PER_PX, MIN_ORBIT_MULTIPLIER};
use crate::error::SceneError;
use crate::section::Section;
use glam::{Mat4, Vec3};

/// Stage of the scripted entrance sequence. Ordered: a phase only ever moves
/// to its direct successor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AnimationPhase {
    #[default]
    Initial,
    Walking,
    Arrived,
    Scattering,
    Idle,
}

impl AnimationPhase {
    pub fn next(self) -> Option<AnimationPhase> {
        match self {
            AnimationPhase::Initial => Some(AnimationPhase::Walking),
            AnimationPhase::Walking => Some(AnimationPhase::Arrived),
            AnimationPhase::Arrived => Some(AnimationPhase::Scattering),
            AnimationPhase::Scattering => Some(AnimationPhase::Idle),
            AnimationPhase::Idle => None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct SceneState {
    current_section: Section,
    previous_section: Section,
    scene_loaded: bool,
    welcome_shown: bool,
    animation_phase: AnimationPhase,
    is_transitioning: bool,
}

impl SceneState {
    pub fn current_section(&self) -> Section {
        self.current_section
    }

    pub fn previous_section(&self) -> Section {
        self.previous_section
    }

    pub fn scene_loaded(&self) -> bool {
        self.scene_loaded
    }

    pub fn welcome_shown(&self) -> bool {
        self.welcome_shown
    }

    pub fn animation_phase(&self) -> AnimationPhase {
        self.animation_phase
    }

    pub fn is_transitioning(&self) -> bool {
        self.is_transitioning
    }

    /// Switch section, remembering the old one for back navigation.
    /// Returns `false` (and changes nothing) when already there.
    pub fn set_section(&mut self, section: Section) -> bool {
        if section == self.current_section {
            return false;
        }
        self.previous_section = self.current_section;
        self.current_section = section;
        true
    }

    /// Where a one-level "back" should go from here.
    pub fn back_target(&self) -> Section {
        if self.previous_section == self.current_section {
            Section::Universe
        } else {
            self.previous_section
        }
    }

    /// Returns `true` only the first time.
    pub fn mark_loaded(&mut self) -> bool {
        let first = !self.scene_loaded;
        self.scene_loaded = true;
        first
    }

    pub fn set_welcome_shown(&mut self) {
        self.welcome_shown = true;
    }

    pub fn set_transitioning(&mut self, transitioning: bool) {
        self.is_transitioning = transitioning;
    }

    /// Move the entrance sequence forward to `to`.
    ///
    /// `Ok(false)` means the phase is already at or past `to`, which is how a
    /// late timer is ignored. Skipping a phase is a programming error.
    pub fn advance_phase(&mut self, to: AnimationPhase) -> Result<bool, SceneError> {
        if to <= self.animation_phase {
            return Ok(false);
        }
        if self.animation_phase.next() != Some(to) {
            return Err(SceneError::PhaseOrder {
                from: self.animation_phase,
                to,
            });
        }
        log::info!("[phase] {:?} -> {:?}", self.animation_phase, to);
        self.animation_phase = to;
        Ok(true)
    }
}

#[derive(Clone, Debug)]
pub struct InteractionState {
    is_user_controlling: bool,
    user_interacting: bool,
    orbit_speed_multiplier: f32,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            is_user_controlling: false,
            user_interacting: false,
            orbit_speed_multiplier: 1.0,
        }
    }
}

impl InteractionState {
    pub fn is_user_controlling(&self) -> bool {
        self.is_user_controlling
    }

    pub fn user_interacting(&self) -> bool {
        self.user_interacting
    }

    pub fn orbit_speed_multiplier(&self) -> f32 {
        self.orbit_speed_multiplier
    }

    /// Entities cede all pointer semantics to the camera while this holds.
    pub fn pointer_captured(&self) -> bool {
        self.is_user_controlling || self.user_interacting
    }

    pub fn set_user_controlling(&mut self, controlling: bool) {
        self.is_user_controlling = controlling;
    }

    pub fn set_user_interacting(&mut self, interacting: bool) {
        self.user_interacting = interacting;
    }

    pub fn set_orbit_speed_multiplier(&mut self, multiplier: f32) {
        assert!(multiplier.is_finite(), "orbit multiplier must be finite");
        self.orbit_speed_multiplier = multiplier.max(0.0);
    }

    /// Multiplier for a drag move of `intensity_px` pixels.
    pub fn multiplier_for_drag(intensity_px: f32) -> f32 {
        let intensity = if intensity_px.is_finite() {
            intensity_px.abs()
        } else {
            0.0
        };
        (1.0 - intensity * DRAG_SLOWDOWN_PER_PX).max(MIN_ORBIT_MULTIPLIER)
    }
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
