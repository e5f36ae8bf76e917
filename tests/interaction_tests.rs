// Pointer routing through the scene root: clicks on bodies and the
// character, drags owning the camera, and the post-drag grace window.

mod common;

use common::*;
use glam::{Vec2, Vec3};
use universe_core::{Cue, MoveOutcome, PickTarget, ReleaseOutcome, Section};

// Top-left corner; nothing in the scene sits there.
const EMPTY_SKY: Vec2 = Vec2::new(4.0, 4.0);

fn body_pixel(u: &TestUniverse, i: usize) -> Vec2 {
    project(u, u.bodies()[i].position())
}

fn expected_section(u: &TestUniverse, p: Vec2) -> Section {
    match u.pick(p) {
        Some(PickTarget::Body(i)) => u.bodies()[i].params().target,
        Some(PickTarget::Character) => Section::About,
        None => panic!("nothing under {:?}", p),
    }
}

fn drag(u: &mut TestUniverse, from: Vec2, dx: f32, t0: f64) -> f64 {
    u.pointer_down(sample(from, t0));
    assert_eq!(
        u.pointer_move(sample(from + Vec2::new(dx, 0.0), t0 + 20.0)),
        MoveOutcome::DragStarted
    );
    let up = t0 + 40.0;
    assert!(matches!(
        u.pointer_up(sample(from + Vec2::new(dx, 0.0), up)),
        ReleaseOutcome::DragEnded { .. }
    ));
    up
}

#[test]
fn empty_sky_is_not_pickable() {
    let mut u = universe();
    u.frame(16.0, 0.016);
    assert_eq!(u.pick(EMPTY_SKY), None);
}

#[test]
fn clicking_a_body_plays_a_cue_then_navigates() {
    let mut u = universe();
    u.frame(16.0, 0.016);
    let p = body_pixel(&u, 0);
    let target = expected_section(&u, p);

    u.pointer_down(sample(p, 100.0));
    assert_eq!(u.pointer_up(sample(p, 180.0)), ReleaseOutcome::PassThrough);
    assert_eq!(u.audio().played, vec![Cue::Hit]);
    assert_eq!(u.scene().current_section(), Section::Universe);

    u.frame(370.0, 0.016);
    assert_eq!(u.scene().current_section(), Section::Universe);
    u.frame(380.0, 0.016);
    assert_eq!(u.scene().current_section(), target);
    assert_eq!(u.router().requested, vec![target]);
}

#[test]
fn a_slow_press_is_not_a_click() {
    let mut u = universe();
    u.frame(16.0, 0.016);
    let p = body_pixel(&u, 0);
    u.pointer_down(sample(p, 100.0));
    u.pointer_up(sample(p, 400.0));
    assert!(u.audio().played.is_empty());
    u.frame(1000.0, 0.016);
    assert!(u.router().requested.is_empty());
}

#[test]
fn releasing_over_another_spot_is_not_a_click() {
    let mut u = universe();
    u.frame(16.0, 0.016);
    let p = body_pixel(&u, 0);
    u.pointer_down(sample(p, 100.0));
    // small enough to stay below the drag threshold
    u.pointer_up(sample(EMPTY_SKY, 150.0));
    assert!(u.audio().played.is_empty());
}

#[test]
fn clicking_the_character_opens_about() {
    let mut u = universe();
    let mut t = 0.0;
    u.mark_scene_loaded(t);
    run_until(&mut u, &mut t, 9000.0, 100.0);
    assert_eq!(u.character().position().x, 0.0);

    let p = project(&u, u.character().position() + Vec3::new(0.0, 0.3, 0.0));
    assert_eq!(u.pick(p), Some(PickTarget::Character));
    u.pointer_down(sample(p, t + 10.0));
    u.pointer_up(sample(p, t + 60.0));
    assert_eq!(u.audio().played.last(), Some(&Cue::Hit));

    let until = t + 300.0;
    run_until(&mut u, &mut t, until, 100.0);
    assert_eq!(u.scene().current_section(), Section::About);
}

#[test]
fn dragging_from_a_body_never_clicks_it() {
    let mut u = universe();
    u.frame(16.0, 0.016);
    let p = body_pixel(&u, 0);
    drag(&mut u, p, 40.0, 100.0);
    assert!(u.audio().played.is_empty());
    u.frame(1000.0, 0.016);
    assert!(u.router().requested.is_empty());
}

#[test]
fn small_quick_moves_do_not_start_a_drag() {
    let mut u = universe();
    u.pointer_down(sample(EMPTY_SKY, 0.0));
    let out = u.pointer_move(sample(EMPTY_SKY + Vec2::new(10.0, 0.0), 50.0));
    assert_eq!(out, MoveOutcome::PassThrough);
    assert!(!u.interaction().is_user_controlling());
    // held a little longer, the same distance commits
    let out = u.pointer_move(sample(EMPTY_SKY + Vec2::new(10.0, 0.0), 150.0));
    assert_eq!(out, MoveOutcome::DragStarted);
    assert!(u.interaction().is_user_controlling());
    assert!(u.interaction().user_interacting());
}

#[test]
fn drag_slows_orbits_and_shows_badges() {
    let mut u = universe();
    u.pointer_down(sample(EMPTY_SKY, 0.0));
    u.pointer_move(sample(EMPTY_SKY + Vec2::new(30.0, 0.0), 20.0));
    let m = u.interaction().orbit_speed_multiplier();
    assert!((m - 0.7).abs() < 1e-4);
    let hud = u.hud();
    assert!(hud.controlling_badge);
    assert_eq!(hud.orbit_badge.as_deref(), Some("Orbit: 70%"));
    assert!(!hud.instructions_visible);

    // a violent move bottoms out at 10%
    u.pointer_move(sample(EMPTY_SKY + Vec2::new(500.0, 0.0), 40.0));
    assert!((u.interaction().orbit_speed_multiplier() - 0.1).abs() < 1e-6);
}

#[test]
fn control_is_released_after_the_grace_window() {
    let mut u = universe();
    let up = drag(&mut u, EMPTY_SKY, 30.0, 0.0);
    assert!(u.interaction().is_user_controlling());
    assert!(!u.interaction().user_interacting());

    u.frame(up + 1990.0, 0.016);
    assert!(u.interaction().is_user_controlling());
    u.frame(up + 2000.0, 0.016);
    assert!(!u.interaction().is_user_controlling());
    assert_eq!(u.interaction().orbit_speed_multiplier(), 1.0);
    assert_eq!(u.hud().orbit_badge, None);
}

#[test]
fn a_new_drag_during_grace_keeps_control() {
    let mut u = universe();
    let first_up = drag(&mut u, EMPTY_SKY, 30.0, 0.0);
    u.frame(first_up + 1000.0, 0.016);
    let second_up = drag(&mut u, EMPTY_SKY, 30.0, first_up + 1500.0);

    // first release would have been due here
    u.frame(first_up + 2500.0, 0.016);
    assert!(u.interaction().is_user_controlling());
    u.frame(second_up + 2000.0, 0.016);
    assert!(!u.interaction().is_user_controlling());
}

#[test]
fn grace_expiry_mid_drag_keeps_control() {
    let mut u = universe();
    let up = drag(&mut u, EMPTY_SKY, 30.0, 0.0);
    u.pointer_down(sample(EMPTY_SKY, up + 1000.0));
    // still holding, not yet moved: the release from the last drag lands
    u.frame(up + 2000.0, 0.016);
    assert!(!u.interaction().is_user_controlling());

    let up2 = drag(&mut u, EMPTY_SKY, 30.0, up + 3000.0);
    u.pointer_down(sample(EMPTY_SKY, up2 + 100.0));
    u.pointer_move(sample(EMPTY_SKY + Vec2::new(30.0, 0.0), up2 + 120.0));
    u.frame(up2 + 2000.0, 0.016);
    assert!(u.interaction().is_user_controlling());
}

#[test]
fn clicks_are_ignored_while_the_camera_is_controlled() {
    let mut u = universe();
    let up = drag(&mut u, EMPTY_SKY, 30.0, 0.0);
    u.frame(up + 100.0, 0.016);

    let p = body_pixel(&u, 0);
    u.pointer_down(sample(p, up + 200.0));
    u.pointer_up(sample(p, up + 250.0));
    assert!(u.audio().played.is_empty());

    let mut t = up + 250.0;
    run_until(&mut u, &mut t, up + 2500.0, 50.0);
    assert!(!u.interaction().is_user_controlling());
    let p = body_pixel(&u, 0);
    let target = expected_section(&u, p);
    u.pointer_down(sample(p, t + 10.0));
    u.pointer_up(sample(p, t + 50.0));
    assert_eq!(u.audio().played, vec![Cue::Hit]);
    u.frame(t + 300.0, 0.016);
    assert_eq!(u.scene().current_section(), target);
}

#[test]
fn momentum_decays_to_rest_after_release() {
    let mut u = universe();
    let theta0 = u.camera().theta;
    let up = drag(&mut u, EMPTY_SKY, 30.0, 0.0);
    assert!(u.controller().velocity().length() > 0.0);

    let mut t = up;
    let mut last = u.controller().velocity().length();
    for _ in 0..200 {
        t += 16.0;
        u.frame(t, 0.016);
        let v = u.controller().velocity().length();
        assert!(v <= last);
        last = v;
    }
    assert_eq!(u.controller().velocity(), Vec2::ZERO);
    assert!(u.camera().theta != theta0);
}

#[test]
fn hovering_a_body_enlarges_it() {
    let mut u = universe();
    u.frame(16.0, 0.016);
    let p = body_pixel(&u, 0);
    let Some(PickTarget::Body(i)) = u.pick(p) else {
        panic!("no body under its own centre");
    };
    u.pointer_move(sample(p, 20.0));
    let body = &u.bodies()[i];
    assert!(body.hovered());
    assert!((body.display_radius() - body.params().size * 1.1).abs() < 1e-6);
    assert_eq!(body.display_color(), [1.0, 1.0, 1.0]);

    u.pointer_move(sample(EMPTY_SKY, 30.0));
    assert!(u.bodies().iter().all(|b| !b.hovered()));
}

#[test]
fn wheel_zoom_stays_in_range() {
    let mut u = universe();
    for _ in 0..100 {
        u.wheel(-500.0);
    }
    assert_eq!(u.camera().radius, 5.0);
    for _ in 0..100 {
        u.wheel(500.0);
    }
    assert_eq!(u.camera().radius, 50.0);
}

#[test]
fn instructions_hide_a_while_after_the_first_drag() {
    let mut u = universe();
    assert!(u.instructions_visible());
    u.pointer_down(sample(EMPTY_SKY, 0.0));
    u.pointer_move(sample(EMPTY_SKY + Vec2::new(30.0, 0.0), 20.0));
    u.pointer_up(sample(EMPTY_SKY + Vec2::new(30.0, 0.0), 40.0));
    u.frame(3000.0, 0.016);
    assert!(u.instructions_visible());
    u.frame(3020.0, 0.016);
    assert!(!u.instructions_visible());

    u.toggle_instructions();
    assert!(u.instructions_visible());
}

#[test]
fn leaving_the_universe_disables_entity_clicks() {
    let mut u = universe();
    u.navigate(Section::Shop, 0.0);
    u.frame(300.0, 0.016);
    let p = body_pixel(&u, 0);
    u.pointer_down(sample(p, 400.0));
    u.pointer_up(sample(p, 450.0));
    assert!(u.audio().played.is_empty());
}

#[test]
fn a_second_press_mid_drag_does_not_strand_control() {
    let mut u = universe();
    u.pointer_down(sample(EMPTY_SKY, 0.0));
    assert_eq!(
        u.pointer_move(sample(EMPTY_SKY + Vec2::new(0.0, 30.0), 50.0)),
        MoveOutcome::DragStarted
    );
    // another finger lands while the first is still dragging
    u.pointer_down(sample(EMPTY_SKY + Vec2::new(200.0, 200.0), 60.0));
    assert!(matches!(
        u.pointer_up(sample(EMPTY_SKY + Vec2::new(0.0, 30.0), 70.0)),
        ReleaseOutcome::DragEnded { .. }
    ));
    assert!(!u.interaction().user_interacting());

    let mut t = 70.0;
    run_until(&mut u, &mut t, 10_000.0, 100.0);
    assert!(!u.interaction().is_user_controlling());
    assert!(!u.interaction().pointer_captured());
    assert_eq!(u.interaction().orbit_speed_multiplier(), 1.0);
    assert!(!u.hud().controlling_badge);
}

#[test]
fn a_small_wobble_still_clicks_a_body() {
    let mut u = universe();
    u.frame(16.0, 0.016);
    let p = body_pixel(&u, 0);
    let target = expected_section(&u, p);
    // 5px in whichever direction stays over the same entity
    let wobble = [
        (5.0, 0.0),
        (-5.0, 0.0),
        (0.0, 5.0),
        (0.0, -5.0),
        (3.0, 4.0),
        (-3.0, 4.0),
        (3.0, -4.0),
        (-3.0, -4.0),
    ]
    .into_iter()
    .map(|(x, y)| p + Vec2::new(x, y))
    .find(|w| u.pick(*w) == u.pick(p))
    .expect("some 5px neighbour shares the pick");

    u.pointer_down(sample(p, 100.0));
    assert_eq!(u.pointer_move(sample(wobble, 200.0)), MoveOutcome::PassThrough);
    u.pointer_up(sample(wobble, 350.0));
    assert_eq!(u.audio().played, vec![Cue::Hit]);
    u.frame(550.0, 0.016);
    assert_eq!(u.scene().current_section(), target);
}
