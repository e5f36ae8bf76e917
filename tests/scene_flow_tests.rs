// End-to-end tests for the entrance sequence and section navigation, driven
// through the scene root with recording audio and router fakes.

mod common;

use common::*;
use universe_core::{
    AnimationPhase, Cue, Section, Universe, UniverseConfig, FLOCK_SENTINEL,
};

fn phase(u: &TestUniverse) -> AnimationPhase {
    u.scene().animation_phase()
}

/// Runs 100ms frames until the character arrives; returns the arrival time.
fn walk_to_arrival(u: &mut TestUniverse, t: &mut f64) -> f64 {
    while *t < 20_000.0 {
        *t += 100.0;
        u.frame(*t, 0.1);
        if phase(u) == AnimationPhase::Arrived {
            return *t;
        }
    }
    panic!("character never arrived");
}

#[test]
fn entrance_sequence_runs_in_order() {
    let mut u = universe();
    let mut t = 0.0;
    u.mark_scene_loaded(t);

    run_until(&mut u, &mut t, 900.0, 100.0);
    assert_eq!(phase(&u), AnimationPhase::Initial);
    run_until(&mut u, &mut t, 1000.0, 100.0);
    assert_eq!(phase(&u), AnimationPhase::Walking);

    // 12 units at 2 units/s
    let arrived_at = walk_to_arrival(&mut u, &mut t);
    assert!(
        (6800.0..=7200.0).contains(&arrived_at),
        "arrived at {}",
        arrived_at
    );
    assert_eq!(u.character().position().x, 0.0);
    assert_eq!(count(&u.audio().played, Cue::Success), 1);
    assert!(!u.scene().welcome_shown());

    run_until(&mut u, &mut t, arrived_at + 2900.0, 100.0);
    assert!(!u.scene().welcome_shown());
    run_until(&mut u, &mut t, arrived_at + 3000.0, 100.0);
    assert!(u.scene().welcome_shown());
    assert_eq!(phase(&u), AnimationPhase::Arrived);

    run_until(&mut u, &mut t, arrived_at + 4900.0, 100.0);
    assert_eq!(phase(&u), AnimationPhase::Arrived);
    run_until(&mut u, &mut t, arrived_at + 5000.0, 100.0);
    assert_eq!(phase(&u), AnimationPhase::Scattering);

    run_until(&mut u, &mut t, arrived_at + 6000.0, 100.0);
    for bird in u.flock().birds() {
        assert!(bird.position().y > bird.rest_position.y + 5.0);
    }

    run_until(&mut u, &mut t, arrived_at + 7900.0, 100.0);
    assert_eq!(phase(&u), AnimationPhase::Scattering);
    run_until(&mut u, &mut t, arrived_at + 8000.0, 100.0);
    assert_eq!(phase(&u), AnimationPhase::Idle);

    let sentinel = glam::Vec3::from(FLOCK_SENTINEL);
    assert!(u.flock().birds().iter().all(|b| b.position() == sentinel));
    assert!(!u.flock().any_visible());
    assert_eq!(count(&u.audio().played, Cue::Success), 1);
    assert!(u.scheduler().is_empty());
}

#[test]
fn follow_up_phases_chain_from_due_times() {
    let mut u = universe();
    let mut t = 0.0;
    u.mark_scene_loaded(t);
    walk_to_arrival(&mut u, &mut t);

    // late frames must not push the next phase back
    let welcome_due = u.scheduler().next_due_ms().expect("welcome pending");
    u.frame(welcome_due + 90.0, 0.09);
    assert!(u.scene().welcome_shown());
    assert_eq!(u.scheduler().next_due_ms(), Some(welcome_due + 2000.0));

    u.frame(welcome_due + 2090.0, 0.09);
    assert_eq!(phase(&u), AnimationPhase::Scattering);
    assert_eq!(u.scheduler().next_due_ms(), Some(welcome_due + 5000.0));
}

#[test]
fn nothing_moves_on_before_the_scene_loads() {
    let mut u = universe();
    let mut t = 0.0;
    run_until(&mut u, &mut t, 5000.0, 100.0);
    assert_eq!(phase(&u), AnimationPhase::Initial);
    assert_eq!(u.character().position().x, -12.0);
    assert!(u.hud().loading_visible);
}

#[test]
fn loading_twice_schedules_the_walk_once() {
    let mut u = universe();
    u.mark_scene_loaded(0.0);
    u.mark_scene_loaded(500.0);
    assert_eq!(u.scheduler().len(), 1);
    assert_eq!(u.scheduler().next_due_ms(), Some(1000.0));
}

#[test]
fn failing_audio_does_not_stall_the_sequence() {
    let mut u = Universe::new(
        UniverseConfig::default(),
        RecordingCues {
            fail: true,
            ..Default::default()
        },
        RecordingRouter::default(),
    );
    u.set_viewport(VIEWPORT.x, VIEWPORT.y);
    let mut t = 0.0;
    u.mark_scene_loaded(t);
    let arrived_at = walk_to_arrival(&mut u, &mut t);
    run_until(&mut u, &mut t, arrived_at + 8000.0, 100.0);
    assert_eq!(phase(&u), AnimationPhase::Idle);
    assert_eq!(count(&u.audio().played, Cue::Success), 1);
}

#[test]
fn hud_follows_load_and_welcome() {
    let mut u = universe();
    assert!(u.hud().loading_visible);
    assert!(!u.hud().background_music);

    let mut t = 0.0;
    u.mark_scene_loaded(t);
    let hud = u.hud();
    assert!(!hud.loading_visible);
    assert!(hud.welcome_visible);

    let arrived_at = walk_to_arrival(&mut u, &mut t);
    run_until(&mut u, &mut t, arrived_at + 3000.0, 100.0);
    let hud = u.hud();
    assert!(!hud.welcome_visible);
    assert!(hud.background_music);
}

#[test]
fn navigation_commits_after_the_transition() {
    let mut u = universe();
    u.navigate(Section::Music, 0.0);
    assert!(u.scene().is_transitioning());
    assert_eq!(u.scene().current_section(), Section::Universe);

    u.frame(200.0, 0.016);
    assert_eq!(u.scene().current_section(), Section::Universe);

    u.frame(300.0, 0.016);
    assert_eq!(u.scene().current_section(), Section::Music);
    assert_eq!(u.scene().previous_section(), Section::Universe);
    assert!(!u.scene().is_transitioning());
    assert_eq!(u.router().requested, vec![Section::Music]);
}

#[test]
fn navigating_to_the_current_section_is_a_no_op() {
    let mut u = universe();
    u.navigate(Section::Universe, 0.0);
    assert!(!u.scene().is_transitioning());
    assert!(u.scheduler().is_empty());
    u.frame(1000.0, 0.016);
    assert!(u.router().requested.is_empty());
}

#[test]
fn a_newer_navigation_replaces_a_pending_one() {
    let mut u = universe();
    u.navigate(Section::Music, 0.0);
    u.navigate(Section::Shop, 100.0);
    u.frame(350.0, 0.016);
    assert_eq!(u.scene().current_section(), Section::Universe);
    u.frame(400.0, 0.016);
    assert_eq!(u.scene().current_section(), Section::Shop);
    assert_eq!(u.router().requested, vec![Section::Shop]);
}

#[test]
fn back_returns_to_the_previous_section() {
    let mut u = universe();
    u.navigate(Section::Music, 0.0);
    u.frame(300.0, 0.016);
    u.navigate(Section::Shop, 400.0);
    u.frame(700.0, 0.016);
    assert_eq!(u.scene().current_section(), Section::Shop);

    u.go_back(800.0);
    u.frame(1100.0, 0.016);
    assert_eq!(u.scene().current_section(), Section::Music);
    assert_eq!(
        u.router().requested,
        vec![Section::Music, Section::Shop, Section::Music]
    );
}

#[test]
fn back_from_the_universe_stays_put() {
    let mut u = universe();
    u.go_back(0.0);
    assert!(!u.scene().is_transitioning());
    u.frame(500.0, 0.016);
    assert!(u.router().requested.is_empty());
}

#[test]
fn body_positions_do_not_depend_on_frame_rate() {
    let mut fast = universe();
    let mut slow = universe();
    let (mut tf, mut ts) = (0.0, 0.0);
    run_until(&mut fast, &mut tf, 800.0, 16.0);
    run_until(&mut slow, &mut ts, 800.0, 50.0);
    assert_eq!(tf, 800.0);
    assert_eq!(ts, 800.0);
    for (a, b) in fast.bodies().iter().zip(slow.bodies()) {
        assert_eq!(a.position(), b.position());
    }
}

#[test]
fn instances_cover_stars_sun_bodies_and_character() {
    let mut u = universe();
    u.frame(16.0, 0.016);
    let mut out = Vec::new();
    u.collect_instances(&mut out);
    // stars + sun + 5 bodies + 1 ring + 7 character sprites + 12 birds
    assert_eq!(out.len(), 2000 + 1 + 5 + 1 + 7 + 12);

    let eye = u.camera().eye();
    let dists: Vec<f32> = out[2000..]
        .iter()
        .map(|i| glam::Vec3::from(i.pos).distance_squared(eye))
        .collect();
    assert!(dists.windows(2).all(|w| w[0] >= w[1]));
}
