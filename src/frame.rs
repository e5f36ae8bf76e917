use crate::constants::MAX_FRAME_DT_SEC;
use crate::input;
use crate::overlay::HudView;
use crate::render;
use crate::SharedScene;
use std::cell::RefCell;
use std::rc::Rc;
use universe_core::{InstanceData, SessionClock};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub scene: SharedScene,
    pub clock: SessionClock,
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub gpu: Option<render::GpuState<'a>>,
    pub hud: HudView,
    pub instances: Vec<InstanceData>,
    pub last_ms: f64,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = self.clock.now_ms();
        let dt_sec = (((now - self.last_ms) / 1000.0) as f32).clamp(0.0, MAX_FRAME_DT_SEC);
        self.last_ms = now;

        let w = self.canvas.width();
        let h = self.canvas.height();
        let css = input::canvas_css_size(&self.canvas);

        let camera = {
            let mut scene = self.scene.borrow_mut();
            scene.set_viewport(css.x, css.y);
            scene.frame(now, dt_sec);

            let hud = scene.hud();
            self.hud.apply(&self.document, &hud);
            scene.audio_mut().sync_music(hud.background_music);

            scene.collect_instances(&mut self.instances);
            scene.view_camera()
        };

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(w, h);
            match g.render(&camera, &self.instances) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    log::warn!("[render] surface lost, reconfiguring");
                    g.reconfigure();
                }
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
