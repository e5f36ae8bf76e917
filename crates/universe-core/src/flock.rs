//! Birds perched on the character that scatter after the welcome.
//! Seeded from an injected RNG so tests can pin the flight paths.

use crate::constants::*;
use crate::state::AnimationPhase;
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::TAU;

// Perches on and around the character.
const PERCHES: [[f32; 3]; FLOCK_SIZE] = [
    [-0.8, 1.2, 0.3],
    [0.8, 1.2, 0.3],
    [-0.3, 1.8, 0.2],
    [0.3, 1.8, 0.2],
    [-1.5, 2.0, 0.0],
    [1.5, 2.0, 0.0],
    [-1.0, 0.5, 1.0],
    [1.0, 0.5, 1.0],
    [0.0, 3.0, -1.0],
    [-0.5, 2.5, -0.8],
    [0.5, 2.5, -0.8],
    [0.0, 1.5, 1.2],
];

#[derive(Clone, Debug)]
pub struct Bird {
    pub rest_position: Vec3,
    pub scatter_velocity: Vec3,
    pub speed: f32,
    pub phase_offset: f32,
    position: Vec3,
    wing_yaw: f32,
    wing_roll: f32,
}

impl Bird {
    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn wing_angles(&self) -> (f32, f32) {
        (self.wing_yaw, self.wing_roll)
    }
}

/// Fixed-size set of decorative birds that ride along with the character
/// and fly off once it has arrived.
#[derive(Clone, Debug)]
pub struct Flock {
    birds: Vec<Bird>,
    scatter_start_ms: Option<f64>,
}

impl Flock {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let birds = PERCHES
            .iter()
            .map(|p| {
                let rest = Vec3::from(*p);
                Bird {
                    rest_position: rest,
                    scatter_velocity: Vec3::new(
                        (rng.gen::<f32>() - 0.5) * 30.0,
                        rng.gen::<f32>() * 10.0 + 5.0,
                        (rng.gen::<f32>() - 0.5) * 30.0,
                    ),
                    speed: rng.gen::<f32>() * 3.0 + 2.0,
                    phase_offset: rng.gen::<f32>() * TAU,
                    position: rest,
                    wing_yaw: 0.0,
                    wing_roll: 0.0,
                }
            })
            .collect();
        Self {
            birds,
            scatter_start_ms: None,
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(&mut StdRng::seed_from_u64(seed))
    }

    pub fn birds(&self) -> &[Bird] {
        &self.birds
    }

    pub fn scatter_start_ms(&self) -> Option<f64> {
        self.scatter_start_ms
    }

    /// `character_x` is the character's current forward coordinate; the
    /// birds ride along with it until they scatter.
    pub fn update(&mut self, elapsed_s: f32, now_ms: f64, phase: AnimationPhase, character_x: f32) {
        if phase == AnimationPhase::Scattering {
            self.scatter_start_ms.get_or_insert(now_ms);
        } else {
            self.scatter_start_ms = None;
        }
        let scatter_s = self
            .scatter_start_ms
            .map(|t0| ((now_ms - t0) / 1000.0).max(0.0) as f32)
            .unwrap_or(0.0);

        for bird in &mut self.birds {
            let p = bird.phase_offset;
            bird.position = match phase {
                AnimationPhase::Initial | AnimationPhase::Walking | AnimationPhase::Arrived => {
                    let carry = if phase == AnimationPhase::Arrived {
                        0.0
                    } else {
                        character_x
                    };
                    Vec3::new(
                        carry + bird.rest_position.x + (elapsed_s + p).sin() * FLOCK_WANDER,
                        bird.rest_position.y + (elapsed_s * 2.0 + p).sin() * FLOCK_HOP,
                        bird.rest_position.z + (elapsed_s + p).cos() * FLOCK_WANDER,
                    )
                }
                AnimationPhase::Scattering => {
                    bird.rest_position + bird.scatter_velocity * scatter_s * bird.speed
                }
                AnimationPhase::Idle => Vec3::from(FLOCK_SENTINEL),
            };
            bird.wing_yaw = (elapsed_s * 8.0 + p).sin() * 0.3;
            bird.wing_roll = (elapsed_s * 6.0 + p).sin() * 0.2;
        }
    }

    /// Whether any bird is still inside the visible scene.
    pub fn any_visible(&self) -> bool {
        let sentinel = Vec3::from(FLOCK_SENTINEL);
        self.birds.iter().any(|b| b.position != sentinel)
    }
}
