pub mod keyboard;
pub mod keymap;
pub mod pointer;

pub use keyboard::wire_global_keydown;
pub use pointer::{wire_input_handlers, InputWiring};

use crate::constants::*;
use crate::dom;
use crate::SharedScene;
use universe_core::{Section, SessionClock};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Hook up every `[data-nav]` element plus the back and mute buttons.
pub fn wire_nav_controls(document: &web::Document, scene: SharedScene, clock: SessionClock) {
    if let Ok(nodes) = document.query_selector_all(NAV_SELECTOR) {
        for i in 0..nodes.length() {
            let Some(el) = nodes
                .item(i)
                .and_then(|n| n.dyn_into::<web::HtmlElement>().ok())
            else {
                continue;
            };
            let Some(name) = el.dataset().get(NAV_DATA_KEY) else {
                continue;
            };
            let section: Section = match name.parse() {
                Ok(s) => s,
                Err(e) => {
                    log::warn!("[nav] {}", e);
                    continue;
                }
            };
            let scene = scene.clone();
            let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
                scene.borrow_mut().navigate(section, clock.now_ms());
            }) as Box<dyn FnMut()>);
            _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    let back_scene = scene.clone();
    dom::add_click_listener(document, BACK_BUTTON_ID, move || {
        back_scene.borrow_mut().go_back(clock.now_ms());
    });

    let mute_scene = scene;
    let doc = document.clone();
    dom::add_click_listener(document, MUTE_BUTTON_ID, move || {
        let muted = mute_scene.borrow_mut().audio_mut().toggle_mute();
        show_mute_state(&doc, muted);
    });
}

pub(crate) fn show_mute_state(document: &web::Document, muted: bool) {
    dom::set_text(document, MUTE_BUTTON_ID, if muted { "Unmute" } else { "Mute" });
}
