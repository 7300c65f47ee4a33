use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use field_core::{Autoplay, AutoplayMode, TimerAction, AUTOPLAY_INTERVAL_MS, RESUME_DELAY_MS};

/// Timer adapter around the pure autoplay mode machine.
///
/// Owns the only two timer handles. Both closures are created once at
/// install time and never dropped, so re-arming cannot free a closure that
/// is currently executing.
pub struct AutoplaySched {
    window: web::Window,
    core: RefCell<Autoplay>,
    cycle_cb: RefCell<Option<Closure<dyn FnMut()>>>,
    resume_cb: RefCell<Option<Closure<dyn FnMut()>>>,
    cycle_id: Cell<Option<i32>>,
    resume_id: Cell<Option<i32>>,
    hidden: Cell<bool>,
}

impl AutoplaySched {
    pub fn new(window: web::Window) -> Rc<Self> {
        Rc::new(Self {
            window,
            core: RefCell::new(Autoplay::new()),
            cycle_cb: RefCell::new(None),
            resume_cb: RefCell::new(None),
            cycle_id: Cell::new(None),
            resume_id: Cell::new(None),
            hidden: Cell::new(false),
        })
    }

    /// `advance` runs on every cycle tick.
    pub fn install(self: &Rc<Self>, advance: impl FnMut() + 'static) {
        *self.cycle_cb.borrow_mut() = Some(Closure::wrap(Box::new(advance) as Box<dyn FnMut()>));
        let sched = self.clone();
        *self.resume_cb.borrow_mut() =
            Some(Closure::wrap(
                Box::new(move || sched.resume_fired()) as Box<dyn FnMut()>
            ));
    }

    pub fn start(&self) {
        let action = self.core.borrow_mut().begin();
        self.apply(action);
    }

    /// Manual pill interaction: stop cycling for the rest of the session.
    pub fn on_interaction(&self) {
        let action = self.core.borrow_mut().interact();
        self.apply(action);
    }

    /// Pill-row hook: resume after a quiet period, unless the user took over.
    pub fn schedule_resume(&self) {
        let action = self.core.borrow_mut().request_resume();
        self.apply(action);
    }

    /// Visibility hook: a hidden page keeps its mode but holds no timers.
    pub fn set_hidden(&self, hidden: bool) {
        self.hidden.set(hidden);
        if hidden {
            self.cancel_cycle();
            self.cancel_resume();
            return;
        }
        match self.core.borrow().mode() {
            AutoplayMode::Running => self.arm_cycle(),
            AutoplayMode::Resuming => self.arm_resume(),
            AutoplayMode::PausedByUser => {}
        }
    }

    fn resume_fired(&self) {
        self.resume_id.set(None);
        let action = self.core.borrow_mut().resume_fired();
        self.apply(action);
    }

    fn apply(&self, action: TimerAction) {
        match action {
            TimerAction::ArmCycle => {
                self.cancel_cycle();
                self.cancel_resume();
                if !self.hidden.get() {
                    self.arm_cycle();
                }
            }
            TimerAction::ArmResume => {
                self.cancel_cycle();
                self.cancel_resume();
                if !self.hidden.get() {
                    self.arm_resume();
                }
            }
            TimerAction::Cancel => {
                self.cancel_cycle();
                self.cancel_resume();
            }
            TimerAction::Keep => {}
        }
    }

    fn arm_cycle(&self) {
        if self.cycle_id.get().is_some() {
            return;
        }
        if let Some(cb) = self.cycle_cb.borrow().as_ref() {
            if let Ok(id) = self.window.set_interval_with_callback_and_timeout_and_arguments_0(
                cb.as_ref().unchecked_ref(),
                AUTOPLAY_INTERVAL_MS,
            ) {
                self.cycle_id.set(Some(id));
            }
        }
    }

    fn arm_resume(&self) {
        if self.resume_id.get().is_some() {
            return;
        }
        if let Some(cb) = self.resume_cb.borrow().as_ref() {
            if let Ok(id) = self.window.set_timeout_with_callback_and_timeout_and_arguments_0(
                cb.as_ref().unchecked_ref(),
                RESUME_DELAY_MS,
            ) {
                self.resume_id.set(Some(id));
            }
        }
    }

    fn cancel_cycle(&self) {
        if let Some(id) = self.cycle_id.take() {
            self.window.clear_interval_with_handle(id);
        }
    }

    fn cancel_resume(&self) {
        if let Some(id) = self.resume_id.take() {
            self.window.clear_timeout_with_handle(id);
        }
    }
}
