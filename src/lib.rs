#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use universe_core::{SessionClock, Universe, UniverseConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;
mod router;

use audio::WebCues;
use constants::CANVAS_ID;
use router::DomRouter;

pub(crate) type Scene = Universe<WebCues, DomRouter>;
pub(crate) type SharedScene = Rc<RefCell<Scene>>;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn random_seed() -> u64 {
    (js_sys::Math::random() * u32::MAX as f64) as u64
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("universe-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    wire_canvas_resize(&canvas);

    let clock = SessionClock::start();
    let config = UniverseConfig {
        flock_seed: random_seed(),
        star_seed: random_seed(),
        ..UniverseConfig::default()
    };
    let scene: SharedScene = Rc::new(RefCell::new(Universe::new(
        config,
        WebCues::load(),
        DomRouter::new(document.clone()),
    )));
    let css = input::canvas_css_size(&canvas);
    scene.borrow_mut().set_viewport(css.x, css.y);

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
        clock,
    });
    events::wire_global_keydown(scene.clone(), clock);
    events::wire_nav_controls(&document, scene.clone(), clock);

    // Without WebGPU the page still navigates; only the canvas stays blank.
    let gpu = frame::init_gpu(&canvas).await;
    scene.borrow_mut().mark_scene_loaded(clock.now_ms());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        clock,
        canvas,
        document,
        gpu,
        hud: overlay::HudView::default(),
        instances: Vec::new(),
        last_ms: clock.now_ms(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
