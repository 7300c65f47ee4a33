/// Autoplay mode. `PausedByUser` is also the pre-start state; once entered
/// through a real interaction it is sticky for the rest of the session and
/// only `begin` (a page-level restart) leaves it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AutoplayMode {
    Running,
    PausedByUser,
    Resuming,
}

/// What the timer adapter must do after a transition. Arming implies
/// canceling whatever is live first, so at most one cycle interval and one
/// resume timeout ever exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerAction {
    ArmCycle,
    ArmResume,
    Cancel,
    Keep,
}

/// Three-state autoplay machine. Owns no timers, only decides.
pub struct Autoplay {
    mode: AutoplayMode,
    user_interacted: bool,
}

impl Autoplay {
    pub fn new() -> Self {
        Self {
            mode: AutoplayMode::PausedByUser,
            user_interacted: false,
        }
    }

    pub fn mode(&self) -> AutoplayMode {
        self.mode
    }

    pub fn user_interacted(&self) -> bool {
        self.user_interacted
    }

    /// Explicit start: page load, or a page-level restart.
    pub fn begin(&mut self) -> TimerAction {
        self.mode = AutoplayMode::Running;
        TimerAction::ArmCycle
    }

    /// Manual pill interaction. Autoplay defers to the user from here on.
    pub fn interact(&mut self) -> TimerAction {
        self.user_interacted = true;
        self.mode = AutoplayMode::PausedByUser;
        TimerAction::Cancel
    }

    /// Collaborator hook (pointer left the pill row, focus moved away):
    /// arm a fresh quiet-period timeout unless the user has taken over.
    pub fn request_resume(&mut self) -> TimerAction {
        if self.user_interacted {
            return TimerAction::Keep;
        }
        self.mode = AutoplayMode::Resuming;
        TimerAction::ArmResume
    }

    /// The quiet-period timeout fired.
    pub fn resume_fired(&mut self) -> TimerAction {
        if self.mode != AutoplayMode::Resuming || self.user_interacted {
            return TimerAction::Keep;
        }
        self.begin()
    }
}

impl Default for Autoplay {
    fn default() -> Self {
        Self::new()
    }
}
