#![allow(dead_code)]

use glam::Vec2;
use universe_core::{Cue, CuePlayer, PointerSample, Section, SectionRouter, Universe, UniverseConfig};

pub const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

#[derive(Default)]
pub struct RecordingCues {
    pub played: Vec<Cue>,
    pub fail: bool,
}

impl CuePlayer for RecordingCues {
    fn play_cue(&mut self, cue: Cue) -> anyhow::Result<()> {
        self.played.push(cue);
        if self.fail {
            anyhow::bail!("output device busy");
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingRouter {
    pub requested: Vec<Section>,
}

impl SectionRouter for RecordingRouter {
    fn request_section(&mut self, section: Section) {
        self.requested.push(section);
    }
}

pub type TestUniverse = Universe<RecordingCues, RecordingRouter>;

pub fn universe() -> TestUniverse {
    let mut u = Universe::new(
        UniverseConfig::default(),
        RecordingCues::default(),
        RecordingRouter::default(),
    );
    u.set_viewport(VIEWPORT.x, VIEWPORT.y);
    u
}

/// Step frames of `step_ms` from `*t` up to and including `until_ms`.
pub fn run_until(u: &mut TestUniverse, t: &mut f64, until_ms: f64, step_ms: f64) {
    while *t + step_ms <= until_ms {
        *t += step_ms;
        u.frame(*t, (step_ms / 1000.0) as f32);
    }
}

pub fn count(cues: &[Cue], cue: Cue) -> usize {
    cues.iter().filter(|c| **c == cue).count()
}

/// Screen pixel of a world point for the universe's current camera.
pub fn project(u: &TestUniverse, world: glam::Vec3) -> Vec2 {
    let clip = u.view_camera().view_proj() * world.extend(1.0);
    let ndc = clip.truncate() / clip.w;
    Vec2::new(
        (ndc.x + 1.0) * 0.5 * VIEWPORT.x,
        (1.0 - ndc.y) * 0.5 * VIEWPORT.y,
    )
}

pub fn sample(p: Vec2, t_ms: f64) -> PointerSample {
    PointerSample::new(p.x, p.y, t_ms)
}
