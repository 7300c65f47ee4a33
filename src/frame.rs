use std::cell::RefCell;
use std::rc::Rc;

use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use field_core::FieldEngine;

use crate::render::FieldRenderer;

/// Everything one frame needs. Mutated only from the tick callback (and,
/// under reduced motion, from single-shot activation redraws).
pub struct FrameContext {
    pub engine: Rc<RefCell<FieldEngine>>,
    pub renderer: FieldRenderer,
    pub started: Instant,
}

impl FrameContext {
    /// One tick: reconcile size, decay the burst, feed uniforms, draw.
    pub fn frame(&mut self) {
        let t = self.started.elapsed().as_secs_f32();
        self.renderer.ensure_size();
        let (variant, burst) = {
            let mut engine = self.engine.borrow_mut();
            engine.tick();
            (engine.active(), engine.burst())
        };
        self.renderer.draw(t, variant, burst);
    }
}

/// Run `frame` once per display refresh for the lifetime of the page.
pub fn start_loop(ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let ctx_tick = ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
