use crate::constants::{WHEEL_LINE_PX, WHEEL_PAGE_PX};
use crate::input;
use crate::SharedScene;
use universe_core::{MoveOutcome, PointerSample, SessionClock};
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: SharedScene,
    pub clock: SessionClock,
}

impl InputWiring {
    fn sample(&self, ev: &web::MouseEvent) -> PointerSample {
        let pos = input::pointer_css_px(ev, &self.canvas);
        PointerSample::new(pos.x, pos.y, self.clock.now_ms())
    }
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_pointercancel(&w);
    wire_wheel(&w);
}

fn listen<E: FromWasmAbi + 'static>(
    target: &web::EventTarget,
    name: &str,
    handler: impl FnMut(E) + 'static,
) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w2 = w.clone();
    listen(&w.canvas, "pointerdown", move |ev: web::PointerEvent| {
        let at = w2.sample(&ev);
        w2.scene.borrow_mut().pointer_down(at);
        _ = w2.canvas.set_pointer_capture(ev.pointer_id());
    });
}

fn wire_pointermove(w: &InputWiring) {
    let w2 = w.clone();
    listen(&w.canvas, "pointermove", move |ev: web::PointerEvent| {
        let at = w2.sample(&ev);
        let outcome = w2.scene.borrow_mut().pointer_move(at);
        if outcome != MoveOutcome::PassThrough {
            ev.prevent_default();
            ev.stop_propagation();
        }
    });
}

fn wire_pointerup(w: &InputWiring) {
    let w2 = w.clone();
    listen(&w.canvas, "pointerup", move |ev: web::PointerEvent| {
        let at = w2.sample(&ev);
        w2.scene.borrow_mut().pointer_up(at);
        _ = w2.canvas.release_pointer_capture(ev.pointer_id());
    });
}

fn wire_pointercancel(w: &InputWiring) {
    for name in ["pointercancel", "lostpointercapture"] {
        let w2 = w.clone();
        listen(&w.canvas, name, move |_ev: web::PointerEvent| {
            let now = w2.clock.now_ms();
            w2.scene.borrow_mut().pointer_cancel(now);
        });
    }
}

fn wire_wheel(w: &InputWiring) {
    let w2 = w.clone();
    listen(&w.canvas, "wheel", move |ev: web::WheelEvent| {
        let dy = input::wheel_delta_px(ev.delta_y(), ev.delta_mode(), WHEEL_LINE_PX, WHEEL_PAGE_PX);
        w2.scene.borrow_mut().wheel(dy);
        ev.prevent_default();
    });
}
