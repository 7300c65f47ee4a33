use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use field_core::{FieldEngine, Variant};

use crate::dom::PillRow;
use crate::frame::FrameContext;
use crate::scheduler::AutoplaySched;

/// Everything the thin DOM listeners need.
#[derive(Clone)]
pub struct Wiring {
    pub window: web::Window,
    pub document: web::Document,
    pub engine: Rc<RefCell<FieldEngine>>,
    pub pills: Rc<PillRow>,
    pub sched: Rc<AutoplaySched>,
    pub ctx: Rc<RefCell<FrameContext>>,
    /// False when the visitor prefers reduced motion; activations then draw
    /// single frames instead of a running loop.
    pub animate: bool,
}

/// Route an activation through the engine and mirror it onto the pills.
pub fn apply_activation(
    engine: &Rc<RefCell<FieldEngine>>,
    pills: &PillRow,
    requested: Option<Variant>,
    silent: bool,
) {
    let variant = engine.borrow_mut().activate(requested, silent);
    pills.apply_selection(variant);
    if !silent {
        pills.pulse_metric(variant);
    }
}

/// Autoplay step: advance to the next variant, never silent.
pub fn apply_advance(engine: &Rc<RefCell<FieldEngine>>, pills: &PillRow) {
    let variant = engine.borrow_mut().advance();
    pills.apply_selection(variant);
    pills.pulse_metric(variant);
}

pub fn wire(w: Wiring) {
    wire_pills(&w);
    wire_row(&w);
    wire_resize(&w);
    wire_visibility(&w);
}

fn wire_pills(w: &Wiring) {
    for pill in w.pills.pills() {
        // Untagged pills are decoration; tagged ones activate their variant,
        // falling back to the default when the tag names nothing known.
        if pill.tag.is_none() {
            continue;
        }
        let requested = pill.variant;
        let w = w.clone();
        let closure = Closure::wrap(Box::new(move || {
            w.sched.on_interaction();
            apply_activation(&w.engine, &w.pills, requested, false);
            if !w.animate {
                w.ctx.borrow_mut().frame();
            }
        }) as Box<dyn FnMut()>);
        for event in ["click", "mouseenter", "focus"] {
            _ = pill
                .element
                .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }
}

fn wire_row(w: &Wiring) {
    let Some(row) = w.pills.row() else { return };
    let sched = w.sched.clone();
    let closure = Closure::wrap(Box::new(move || sched.schedule_resume()) as Box<dyn FnMut()>);
    _ = row.add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
    // blur does not bubble; capture catches focus leaving any pill
    _ = row.add_event_listener_with_callback_and_bool(
        "blur",
        closure.as_ref().unchecked_ref(),
        true,
    );
    closure.forget();
}

fn wire_resize(w: &Wiring) {
    let ctx = w.ctx.clone();
    let closure = Closure::wrap(Box::new(move || {
        ctx.borrow_mut().renderer.ensure_size();
    }) as Box<dyn FnMut()>);
    _ = w
        .window
        .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_visibility(w: &Wiring) {
    let sched = w.sched.clone();
    let document = w.document.clone();
    let closure =
        Closure::wrap(Box::new(move || sched.set_hidden(document.hidden())) as Box<dyn FnMut()>);
    _ = w
        .document
        .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
    closure.forget();
}
