//! The walking character: entrance walk, arrival pose and idle float.

use crate::constants::*;
use crate::gesture::ClickTracker;
use crate::state::AnimationPhase;
use glam::Vec3;

/// Limb and body angles (radians) for the current frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CharacterPose {
    pub body_tilt: f32,
    pub left_arm: f32,
    pub right_arm: f32,
    pub left_leg: f32,
    pub right_leg: f32,
    /// Welcoming gesture held while the character has just arrived.
    pub arms_raised: bool,
}

/// The walking character. Enters from the left, stops at the centre, then
/// floats.
#[derive(Clone, Debug)]
pub struct Character {
    position: Vec3,
    walk_cycle: f32,
    pub(crate) clicks: ClickTracker,
}

impl Default for Character {
    fn default() -> Self {
        Self::new()
    }
}

impl Character {
    pub fn new() -> Self {
        Self {
            position: Vec3::new(CHARACTER_START_X, 0.0, 0.0),
            walk_cycle: 0.0,
            clicks: ClickTracker::default(),
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn walk_cycle(&self) -> f32 {
        self.walk_cycle
    }

    /// Advance one frame. Returns `true` only on the frame the walk reaches
    /// the centre.
    pub fn update(&mut self, elapsed_s: f32, dt_s: f32, phase: AnimationPhase) -> bool {
        let dt = if dt_s.is_finite() { dt_s.max(0.0) } else { 0.0 };
        self.walk_cycle += dt * WALK_CYCLE_RATE;

        match phase {
            AnimationPhase::Initial => {
                self.position.y = bob(elapsed_s);
                false
            }
            AnimationPhase::Walking => {
                let was_short = self.position.x < 0.0;
                let x = (self.position.x + dt * WALK_SPEED).min(0.0);
                self.position = Vec3::new(x, bob(elapsed_s), 0.0);
                was_short && x >= 0.0
            }
            AnimationPhase::Arrived | AnimationPhase::Idle => {
                self.position = Vec3::new(0.0, (elapsed_s * FLOAT_FREQUENCY).sin() * FLOAT_AMPLITUDE, 0.0);
                false
            }
            // Holds still while the birds leave.
            AnimationPhase::Scattering => false,
        }
    }

    pub fn pose(&self, phase: AnimationPhase) -> CharacterPose {
        let swing = (self.walk_cycle * 2.0).sin();
        match phase {
            AnimationPhase::Arrived => CharacterPose {
                body_tilt: 0.0,
                left_arm: 0.8,
                right_arm: -0.8,
                left_leg: swing * LIMB_SWING,
                right_leg: -swing * LIMB_SWING,
                arms_raised: true,
            },
            _ => CharacterPose {
                body_tilt: if phase == AnimationPhase::Walking {
                    swing * BODY_TILT
                } else {
                    0.0
                },
                left_arm: swing * LIMB_SWING,
                right_arm: -swing * LIMB_SWING,
                left_leg: swing * LIMB_SWING,
                right_leg: -swing * LIMB_SWING,
                arms_raised: false,
            },
        }
    }
}

#[inline]
fn bob(elapsed_s: f32) -> f32 {
    (elapsed_s * BOB_FREQUENCY).sin() * BOB_AMPLITUDE
}
