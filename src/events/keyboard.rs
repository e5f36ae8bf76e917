use super::keymap::{command_for_key, KeyCommand};
use crate::dom;
use crate::SharedScene;
use universe_core::SessionClock;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Form fields keep their keys; Backspace in a text box must not navigate.
fn typing_into_field(ev: &web::KeyboardEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .map(|el| matches!(el.tag_name().as_str(), "INPUT" | "TEXTAREA" | "SELECT"))
        .unwrap_or(false)
}

pub fn handle_global_keydown(ev: &web::KeyboardEvent, scene: &SharedScene, clock: &SessionClock) {
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() || typing_into_field(ev) {
        return;
    }
    let Some(command) = command_for_key(&ev.key()) else {
        return;
    };
    let now = clock.now_ms();
    let mut scene = scene.borrow_mut();
    match command {
        KeyCommand::Navigate(section) => scene.navigate(section, now),
        KeyCommand::Back => scene.go_back(now),
        KeyCommand::ToggleMute => {
            let muted = scene.audio_mut().toggle_mute();
            if let Some(document) = dom::window_document() {
                super::show_mute_state(&document, muted);
            }
        }
        KeyCommand::ToggleInstructions => scene.toggle_instructions(),
    }
    log::debug!("[keys] {:?}", command);
    ev.prevent_default();
}

pub fn wire_global_keydown(scene: SharedScene, clock: SessionClock) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &scene, &clock);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
