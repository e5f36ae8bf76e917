//! Scene root: owns every entity and both shared stores, runs the scheduled
//! event queue, and routes input between the camera controller and the
//! clickable entities.
//!
//! Within one frame the order is fixed: due events, camera, bodies,
//! character, flock. Input handlers run between frames and only mutate
//! state, so the next frame's spatial pass always sees them.

use crate::camera::{ray_sphere, CameraParams, OrbitCamera};
use crate::character::Character;
use crate::constants::*;
use crate::controller::{InteractionController, MoveOutcome, ReleaseOutcome};
use crate::flock::Flock;
use crate::gesture::{GestureParams, PointerSample};
use crate::hud::HudSnapshot;
use crate::instance::{self, InstanceData};
use crate::orbit::{default_bodies, BodyParams, OrbitingBody};
use crate::schedule::{Due, EventKey, SceneEvent, Scheduler};
use crate::section::Section;
use crate::state::{AnimationPhase, Camera, InteractionState, SceneState};
use glam::{Vec2, Vec3};

/// Short sound effects the scene asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cue {
    Hit,
    Success,
}

/// Fire-and-forget audio. Failures are logged by the scene and never
/// interrupt it.
pub trait CuePlayer {
    fn play_cue(&mut self, cue: Cue) -> anyhow::Result<()>;
}

/// The way out of the scene into page-level routing.
pub trait SectionRouter {
    fn request_section(&mut self, section: Section);
}

#[derive(Clone, Copy, Debug)]
pub struct PhaseTimings {
    pub walk_start_ms: f64,
    pub welcome_ms: f64,
    pub scatter_ms: f64,
    pub idle_ms: f64,
    pub click_navigate_ms: f64,
    pub transition_ms: f64,
    pub instructions_hide_ms: f64,
}

impl Default for PhaseTimings {
    fn default() -> Self {
        Self {
            walk_start_ms: WALK_START_DELAY_MS,
            welcome_ms: WELCOME_DELAY_MS,
            scatter_ms: SCATTER_DELAY_MS,
            idle_ms: IDLE_DELAY_MS,
            click_navigate_ms: CLICK_NAVIGATE_DELAY_MS,
            transition_ms: SECTION_TRANSITION_MS,
            instructions_hide_ms: INSTRUCTIONS_HIDE_DELAY_MS,
        }
    }
}

#[derive(Clone, Debug)]
pub struct UniverseConfig {
    pub timings: PhaseTimings,
    pub gestures: GestureParams,
    pub camera: CameraParams,
    pub bodies: Vec<BodyParams>,
    pub flock_seed: u64,
    pub star_seed: u64,
}

impl Default for UniverseConfig {
    fn default() -> Self {
        Self {
            timings: PhaseTimings::default(),
            gestures: GestureParams::default(),
            camera: CameraParams::default(),
            bodies: default_bodies(),
            flock_seed: 7,
            star_seed: 11,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickTarget {
    Body(usize),
    Character,
}

pub struct Universe<A: CuePlayer, R: SectionRouter> {
    scene: SceneState,
    interaction: InteractionState,
    scheduler: Scheduler,
    controller: InteractionController,
    camera: OrbitCamera,
    bodies: Vec<OrbitingBody>,
    character: Character,
    flock: Flock,
    stars: Vec<Vec3>,
    timings: PhaseTimings,
    viewport: Vec2,
    instructions_visible: bool,
    instructions_dismissed: bool,
    audio: A,
    router: R,
}

impl<A: CuePlayer, R: SectionRouter> Universe<A, R> {
    pub fn new(config: UniverseConfig, audio: A, router: R) -> Self {
        Self {
            scene: SceneState::default(),
            interaction: InteractionState::default(),
            scheduler: Scheduler::new(),
            controller: InteractionController::new(config.gestures),
            camera: OrbitCamera::new(config.camera),
            bodies: config.bodies.into_iter().map(OrbitingBody::new).collect(),
            character: Character::new(),
            flock: Flock::seeded(config.flock_seed),
            stars: instance::starfield(config.star_seed),
            timings: config.timings,
            viewport: Vec2::ZERO,
            instructions_visible: true,
            instructions_dismissed: false,
            audio,
            router,
        }
    }

    pub fn scene(&self) -> &SceneState {
        &self.scene
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn bodies(&self) -> &[OrbitingBody] {
        &self.bodies
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn flock(&self) -> &Flock {
        &self.flock
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    pub fn instructions_visible(&self) -> bool {
        self.instructions_visible
    }

    pub fn toggle_instructions(&mut self) {
        self.instructions_visible = !self.instructions_visible;
    }

    /// Canvas size in CSS pixels, the same space as pointer samples.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
    }

    pub fn view_camera(&self) -> Camera {
        self.camera.camera(self.viewport.x / self.viewport.y.max(1.0))
    }

    /// Called once setup is complete; starts the entrance sequence.
    pub fn mark_scene_loaded(&mut self, now_ms: f64) {
        if self.scene.mark_loaded() {
            log::info!("[scene] loaded at {:.0}ms", now_ms);
            self.scheduler.after(
                now_ms,
                self.timings.walk_start_ms,
                EventKey::Phase(AnimationPhase::Initial),
                SceneEvent::BeginWalking,
            );
        }
    }

    // ---------------- Frame ----------------

    pub fn frame(&mut self, now_ms: f64, dt_s: f32) {
        let elapsed_s = (now_ms / 1000.0) as f32;
        self.run_due_events(now_ms);

        self.controller
            .update_camera(&mut self.camera, &self.interaction);

        for body in &mut self.bodies {
            body.update(elapsed_s, &self.interaction);
        }

        let phase = self.scene.animation_phase();
        if self.character.update(elapsed_s, dt_s, phase) {
            self.on_arrival(now_ms);
        }

        self.flock.update(
            elapsed_s,
            now_ms,
            self.scene.animation_phase(),
            self.character.position().x,
        );
    }

    fn run_due_events(&mut self, now_ms: f64) {
        while let Some(Due { due_ms, key, event }) = self.scheduler.pop_due(now_ms) {
            let live = match key {
                EventKey::Phase(owner) => owner == self.scene.animation_phase(),
                EventKey::Gesture(_) | EventKey::Free => true,
            };
            if !live {
                log::debug!("[schedule] dropped stale {:?}", event);
                continue;
            }
            self.apply(event, due_ms);
        }
    }

    /// `due_ms` is when the event was meant to fire; anything it schedules
    /// is timed from there.
    fn apply(&mut self, event: SceneEvent, due_ms: f64) {
        match event {
            SceneEvent::BeginWalking => {
                self.advance(AnimationPhase::Walking);
            }
            SceneEvent::ShowWelcome => {
                self.scene.set_welcome_shown();
                log::info!("[phase] welcome shown");
                self.scheduler.after(
                    due_ms,
                    self.timings.scatter_ms,
                    EventKey::Phase(AnimationPhase::Arrived),
                    SceneEvent::BeginScattering,
                );
            }
            SceneEvent::BeginScattering => {
                if self.advance(AnimationPhase::Scattering) {
                    self.scheduler.after(
                        due_ms,
                        self.timings.idle_ms,
                        EventKey::Phase(AnimationPhase::Scattering),
                        SceneEvent::BeginIdle,
                    );
                }
            }
            SceneEvent::BeginIdle => {
                self.advance(AnimationPhase::Idle);
            }
            SceneEvent::Navigate(section) => self.commit_section(section),
            SceneEvent::FinishTransition(section) => {
                self.commit_section(section);
                self.scene.set_transitioning(false);
            }
            SceneEvent::ReleaseControl { gesture } => {
                self.controller
                    .release_control(gesture, &mut self.interaction);
            }
            SceneEvent::HideInstructions => self.instructions_visible = false,
        }
    }

    fn advance(&mut self, to: AnimationPhase) -> bool {
        match self.scene.advance_phase(to) {
            Ok(true) => {
                let dropped = self.scheduler.retain_phase(to);
                if dropped > 0 {
                    log::debug!("[schedule] cancelled {} event(s) on entering {:?}", dropped, to);
                }
                true
            }
            Ok(false) => false,
            Err(e) => {
                log::error!("[phase] {}", e);
                debug_assert!(false, "{}", e);
                false
            }
        }
    }

    fn on_arrival(&mut self, now_ms: f64) {
        if !self.advance(AnimationPhase::Arrived) {
            return;
        }
        self.play_cue(Cue::Success);
        self.scheduler.after(
            now_ms,
            self.timings.welcome_ms,
            EventKey::Phase(AnimationPhase::Arrived),
            SceneEvent::ShowWelcome,
        );
    }

    fn play_cue(&mut self, cue: Cue) {
        if let Err(e) = self.audio.play_cue(cue) {
            log::warn!("[audio] cue {:?} failed: {:#}", cue, e);
        }
    }

    fn commit_section(&mut self, section: Section) {
        if !self.scene.set_section(section) {
            return;
        }
        log::info!(
            "[nav] {} -> {}",
            self.scene.previous_section(),
            self.scene.current_section()
        );
        for body in &mut self.bodies {
            body.set_hovered(false);
        }
        self.cancel_presses();
        self.router.request_section(section);
    }

    // ---------------- Navigation ----------------

    /// Top-level navigation with the cross-fade window.
    pub fn navigate(&mut self, section: Section, now_ms: f64) {
        if section == self.scene.current_section() {
            return;
        }
        self.scheduler
            .cancel_matching(|e| matches!(e, SceneEvent::FinishTransition(_)));
        self.scene.set_transitioning(true);
        self.scheduler.after(
            now_ms,
            self.timings.transition_ms,
            EventKey::Free,
            SceneEvent::FinishTransition(section),
        );
    }

    pub fn go_back(&mut self, now_ms: f64) {
        let target = self.scene.back_target();
        self.navigate(target, now_ms);
    }

    // ---------------- Input ----------------

    pub fn pointer_down(&mut self, at: PointerSample) {
        if !self.controller.pointer_down(at) {
            return;
        }
        self.cancel_presses();
        if self.scene.current_section() != Section::Universe {
            return;
        }
        match self.pick(at.pos) {
            Some(PickTarget::Body(i)) => {
                self.bodies[i].clicks.press(at, &self.interaction);
            }
            Some(PickTarget::Character) => {
                self.character.clicks.press(at, &self.interaction);
            }
            None => {}
        }
    }

    pub fn pointer_move(&mut self, at: PointerSample) -> MoveOutcome {
        let outcome = self.controller.pointer_move(at, &mut self.interaction);
        match outcome {
            MoveOutcome::PassThrough => self.update_hover(at.pos),
            MoveOutcome::DragStarted => {
                for body in &mut self.bodies {
                    body.set_hovered(false);
                }
                self.cancel_presses();
                if !self.instructions_dismissed {
                    self.instructions_dismissed = true;
                    self.scheduler.after(
                        at.t_ms,
                        self.timings.instructions_hide_ms,
                        EventKey::Free,
                        SceneEvent::HideInstructions,
                    );
                }
            }
            MoveOutcome::Captured => {}
        }
        outcome
    }

    pub fn pointer_up(&mut self, at: PointerSample) -> ReleaseOutcome {
        let outcome = self.controller.pointer_up(&mut self.interaction);
        match outcome {
            ReleaseOutcome::DragEnded { gesture } => {
                self.schedule_release(gesture, at.t_ms);
                self.cancel_presses();
            }
            ReleaseOutcome::PassThrough => self.resolve_clicks(at),
            ReleaseOutcome::Ignored => self.cancel_presses(),
        }
        outcome
    }

    pub fn pointer_cancel(&mut self, now_ms: f64) -> ReleaseOutcome {
        let outcome = self.controller.pointer_cancel(&mut self.interaction);
        if let ReleaseOutcome::DragEnded { gesture } = outcome {
            self.schedule_release(gesture, now_ms);
        }
        self.cancel_presses();
        outcome
    }

    pub fn wheel(&mut self, delta_y: f32) {
        self.controller.wheel(delta_y, &mut self.camera);
    }

    fn schedule_release(&mut self, gesture: u64, now_ms: f64) {
        self.scheduler.retain_gesture(gesture);
        self.scheduler.after(
            now_ms,
            self.controller.params().control_grace_ms,
            EventKey::Gesture(gesture),
            SceneEvent::ReleaseControl { gesture },
        );
    }

    fn cancel_presses(&mut self) {
        for body in &mut self.bodies {
            body.clicks.cancel();
        }
        self.character.clicks.cancel();
    }

    fn update_hover(&mut self, pos: Vec2) {
        let hit = if self.scene.current_section() == Section::Universe
            && !self.interaction.pointer_captured()
        {
            self.pick(pos)
        } else {
            None
        };
        for (i, body) in self.bodies.iter_mut().enumerate() {
            body.set_hovered(hit == Some(PickTarget::Body(i)));
        }
    }

    fn resolve_clicks(&mut self, at: PointerSample) {
        let params = *self.controller.params();
        let target = self.pick(at.pos);
        let mut clicked = None;
        for (i, body) in self.bodies.iter_mut().enumerate() {
            if body.clicks.release(at, &self.interaction, &params)
                && target == Some(PickTarget::Body(i))
            {
                clicked = Some(body.params().target);
            }
        }
        if self.character.clicks.release(at, &self.interaction, &params)
            && target == Some(PickTarget::Character)
        {
            clicked = Some(Section::About);
        }
        if let Some(section) = clicked {
            log::info!("[click] {} at {:.0}ms", section, at.t_ms);
            self.play_cue(Cue::Hit);
            self.scheduler.after(
                at.t_ms,
                self.timings.click_navigate_ms,
                EventKey::Free,
                SceneEvent::Navigate(section),
            );
        }
    }

    /// Nearest entity under the pointer, if any.
    pub fn pick(&self, pos: Vec2) -> Option<PickTarget> {
        if self.viewport.x <= 0.0 || self.viewport.y <= 0.0 || !pos.is_finite() {
            return None;
        }
        let ray = self.camera.screen_ray(pos, self.viewport);
        let mut best: Option<(PickTarget, f32)> = None;
        let mut consider = |target: PickTarget, t: Option<f32>| {
            if let Some(t) = t {
                match best {
                    Some((_, bt)) if t >= bt => {}
                    _ => best = Some((target, t)),
                }
            }
        };
        for (i, body) in self.bodies.iter().enumerate() {
            consider(
                PickTarget::Body(i),
                ray_sphere(&ray, body.position(), body.display_radius()),
            );
        }
        let torso = self.character.position() + Vec3::new(0.0, 0.3, 0.0);
        consider(
            PickTarget::Character,
            ray_sphere(&ray, torso, CHARACTER_PICK_RADIUS),
        );
        best.map(|(target, _)| target)
    }

    // ---------------- Output ----------------

    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot::capture(&self.scene, &self.interaction, self.instructions_visible)
    }

    /// Fill `out` with this frame's sprites: stars first, then the scene
    /// sorted back-to-front.
    pub fn collect_instances(&self, out: &mut Vec<InstanceData>) {
        out.clear();
        instance::push_stars(&self.stars, out);
        let first_dynamic = out.len();

        instance::push_sun(SUN_RADIUS, out);
        for body in &self.bodies {
            instance::push_body(
                body.position(),
                body.display_radius(),
                body.display_color(),
                body.has_ring(),
                out,
            );
        }
        let phase = self.scene.animation_phase();
        instance::push_character(self.character.position(), &self.character.pose(phase), out);
        if self.flock.any_visible() {
            for bird in self.flock.birds() {
                instance::push_bird(bird.position(), bird.wing_angles().1, out);
            }
        }
        instance::sort_back_to_front(&mut out[first_dynamic..], self.camera.eye());
    }
}
