// Transition-table tests for the autoplay mode machine.

use field_core::{Autoplay, AutoplayMode, TimerAction};

#[test]
fn begin_runs_and_arms_the_cycle() {
    let mut ap = Autoplay::new();
    assert_eq!(ap.begin(), TimerAction::ArmCycle);
    assert_eq!(ap.mode(), AutoplayMode::Running);
    assert!(!ap.user_interacted());
}

#[test]
fn interaction_pauses_for_the_session() {
    let mut ap = Autoplay::new();
    ap.begin();
    assert_eq!(ap.interact(), TimerAction::Cancel);
    assert_eq!(ap.mode(), AutoplayMode::PausedByUser);
    assert!(ap.user_interacted());
}

#[test]
fn no_resume_after_interaction() {
    let mut ap = Autoplay::new();
    ap.begin();
    ap.interact();
    assert_eq!(ap.request_resume(), TimerAction::Keep);
    assert_eq!(ap.mode(), AutoplayMode::PausedByUser);
    assert_eq!(ap.resume_fired(), TimerAction::Keep);
    assert_eq!(ap.mode(), AutoplayMode::PausedByUser);
}

#[test]
fn quiet_period_resumes_the_cycle() {
    let mut ap = Autoplay::new();
    ap.begin();
    assert_eq!(ap.request_resume(), TimerAction::ArmResume);
    assert_eq!(ap.mode(), AutoplayMode::Resuming);
    assert_eq!(ap.resume_fired(), TimerAction::ArmCycle);
    assert_eq!(ap.mode(), AutoplayMode::Running);
}

#[test]
fn repeated_resume_requests_rearm_the_timeout() {
    let mut ap = Autoplay::new();
    ap.begin();
    assert_eq!(ap.request_resume(), TimerAction::ArmResume);
    assert_eq!(ap.request_resume(), TimerAction::ArmResume);
    assert_eq!(ap.mode(), AutoplayMode::Resuming);
}

#[test]
fn stale_resume_fire_is_ignored_outside_resuming() {
    let mut ap = Autoplay::new();
    ap.begin();
    assert_eq!(ap.resume_fired(), TimerAction::Keep);
    assert_eq!(ap.mode(), AutoplayMode::Running);
}

#[test]
fn interaction_during_resume_wins() {
    let mut ap = Autoplay::new();
    ap.begin();
    ap.request_resume();
    assert_eq!(ap.interact(), TimerAction::Cancel);
    assert_eq!(ap.resume_fired(), TimerAction::Keep);
    assert_eq!(ap.mode(), AutoplayMode::PausedByUser);
}

#[test]
fn interactions_are_idempotent() {
    let mut ap = Autoplay::new();
    ap.begin();
    ap.interact();
    assert_eq!(ap.interact(), TimerAction::Cancel);
    assert_eq!(ap.mode(), AutoplayMode::PausedByUser);
}
