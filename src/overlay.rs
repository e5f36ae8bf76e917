use crate::constants::*;
use crate::dom;
use universe_core::{HudSnapshot, Section};
use web_sys as web;

/// Mirrors the scene's HUD snapshot into the page, touching the DOM only for
/// fields that changed since the last frame.
#[derive(Default)]
pub struct HudView {
    last: Option<HudSnapshot>,
}

impl HudView {
    pub fn apply(&mut self, document: &web::Document, next: &HudSnapshot) {
        let prev = self.last.as_ref();
        let changed = |f: fn(&HudSnapshot) -> bool| prev.map(f) != Some(f(next));

        if changed(|h| h.loading_visible) {
            dom::set_hidden(document, LOADING_OVERLAY_ID, !next.loading_visible);
        }
        if changed(|h| h.welcome_visible) {
            dom::set_hidden(document, WELCOME_OVERLAY_ID, !next.welcome_visible);
        }
        if changed(|h| h.instructions_visible) {
            dom::set_hidden(document, INSTRUCTIONS_OVERLAY_ID, !next.instructions_visible);
        }
        if changed(|h| h.controlling_badge) {
            dom::set_hidden(document, CONTROL_BADGE_ID, !next.controlling_badge);
        }
        if prev.map(|h| &h.orbit_badge) != Some(&next.orbit_badge) {
            match &next.orbit_badge {
                Some(text) => {
                    dom::set_text(document, ORBIT_BADGE_ID, text);
                    dom::set_hidden(document, ORBIT_BADGE_ID, false);
                }
                None => dom::set_hidden(document, ORBIT_BADGE_ID, true),
            }
        }
        if changed(|h| h.transitioning) {
            dom::set_class(document, CANVAS_ID, TRANSITIONING_CLASS, next.transitioning);
        }
        if prev.map(|h| h.section) != Some(next.section) {
            dom::set_hidden(document, BACK_BUTTON_ID, next.section == Section::Universe);
        }
        self.last = Some(next.clone());
    }
}
