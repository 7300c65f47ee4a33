#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Context;
use instant::Instant;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

use field_core::{FieldEngine, Variant, FIELD_FRAG_GLSL, FIELD_VERT_GLSL};

mod constants;
mod dom;
mod events;
mod frame;
mod render;
mod scheduler;

use crate::dom::PillRow;
use crate::frame::FrameContext;
use crate::render::{FieldProgram, FieldRenderer, Surface};
use crate::scheduler::AutoplaySched;

/// Outcome of the ordered initialization pipeline, checked exactly once.
enum Setup {
    Ready,
    Unavailable(String),
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("field-web starting");

    match init() {
        Ok(Setup::Ready) => {}
        Ok(Setup::Unavailable(reason)) => {
            log::warn!("[field] {reason}; keeping static background");
        }
        Err(e) => log::error!("[field] init error: {e:?}"),
    }
    Ok(())
}

fn init() -> anyhow::Result<Setup> {
    let window = web::window().context("no window")?;
    let document = window.document().context("no document")?;

    let Some(canvas_el) = document.get_element_by_id(constants::CANVAS_ID) else {
        return Ok(Setup::Unavailable(format!(
            "no #{} canvas in document",
            constants::CANVAS_ID
        )));
    };
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("#{} is not a canvas", constants::CANVAS_ID))?;

    let Some(surface) = Surface::acquire(window.clone(), canvas) else {
        return Ok(Setup::Unavailable("WebGL not available".to_string()));
    };

    let program = match FieldProgram::build(surface.gl(), FIELD_VERT_GLSL, FIELD_FRAG_GLSL) {
        Ok(program) => program,
        Err(diagnostic) => {
            log::warn!("[field] {diagnostic}");
            return Ok(Setup::Unavailable("shader program failed to build".to_string()));
        }
    };

    let pills = Rc::new(PillRow::collect(&document));
    let engine = Rc::new(RefCell::new(FieldEngine::new(Variant::Home)));

    // First activation is silent: select in the DOM, no pulse, no burst.
    events::apply_activation(&engine, &pills, pills.initial_variant(), true);

    let mut renderer = FieldRenderer::new(surface, program);
    renderer.ensure_size();

    let ctx = Rc::new(RefCell::new(FrameContext {
        engine: engine.clone(),
        renderer,
        started: Instant::now(),
    }));

    let sched = AutoplaySched::new(window.clone());
    {
        let engine = engine.clone();
        let pills = pills.clone();
        sched.install(move || events::apply_advance(&engine, &pills));
    }

    let animate = !dom::prefers_reduced_motion(&window);
    events::wire(events::Wiring {
        window,
        document,
        engine,
        pills,
        sched: sched.clone(),
        ctx: ctx.clone(),
        animate,
    });

    if animate {
        sched.start();
        frame::start_loop(ctx);
    } else {
        // Reduced motion: one static frame, no autoplay, no loop.
        ctx.borrow_mut().frame();
    }

    Ok(Setup::Ready)
}
