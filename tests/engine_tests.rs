// Host-side tests for the pure field engine.

use field_core::{FieldEngine, Variant, BURST_DECAY, VARIANTS};

#[test]
fn unknown_activation_falls_back_to_first_variant() {
    let mut engine = FieldEngine::new(Variant::Cart);
    let resolved = engine.activate(None, false);
    assert_eq!(resolved, Variant::Home);
    assert_eq!(engine.active(), Variant::Home);
    assert_eq!(engine.burst(), Variant::Home.burst_strength());
}

#[test]
fn silent_activation_never_touches_burst() {
    let mut engine = FieldEngine::new(Variant::Home);
    engine.activate(Some(Variant::Cart), false);
    let before = engine.burst();
    engine.activate(Some(Variant::Checkout), true);
    assert_eq!(engine.burst(), before);
    assert_eq!(engine.active(), Variant::Checkout);
}

#[test]
fn initial_silent_activation_keeps_burst_at_zero() {
    let mut engine = FieldEngine::new(Variant::Home);
    engine.activate(Some(Variant::Home), true);
    assert_eq!(engine.burst(), 0.0);
}

#[test]
fn activation_overwrites_burst_instead_of_accumulating() {
    let mut engine = FieldEngine::new(Variant::Home);
    for _ in 0..10 {
        engine.activate(Some(Variant::Home), false);
    }
    assert_eq!(engine.burst(), Variant::Home.burst_strength());

    engine.activate(Some(Variant::Checkout), false);
    assert_eq!(engine.burst(), Variant::Checkout.burst_strength());
}

#[test]
fn tick_decay_matches_configured_factor() {
    let mut engine = FieldEngine::new(Variant::Product);
    engine.activate(Some(Variant::Product), false);
    let before = engine.burst();
    engine.tick();
    assert!((engine.burst() - before * BURST_DECAY).abs() < 1e-6);
}

#[test]
fn burst_decays_monotonically_and_snaps_to_exact_zero() {
    let mut engine = FieldEngine::new(Variant::Home);
    engine.activate(Some(Variant::Home), false);
    let mut prev = engine.burst();
    let mut ticks = 0;
    while engine.burst() > 0.0 {
        engine.tick();
        assert!(engine.burst() <= prev, "burst grew at tick {ticks}");
        prev = engine.burst();
        ticks += 1;
        assert!(ticks < 1_000, "burst never reached zero");
    }
    assert_eq!(engine.burst(), 0.0);
    engine.tick();
    assert_eq!(engine.burst(), 0.0);
}

#[test]
fn advance_visits_every_variant_once_per_cycle() {
    let mut engine = FieldEngine::new(Variant::Home);
    let mut seen = vec![engine.active()];
    for _ in 0..4 {
        seen.push(engine.advance());
    }
    for v in VARIANTS {
        assert_eq!(seen.iter().filter(|s| **s == v).count(), 1, "{v:?}");
    }
    assert_eq!(engine.advance(), Variant::Home);
}

#[test]
fn advance_is_never_silent() {
    let mut engine = FieldEngine::new(Variant::Checkout);
    let v = engine.advance();
    assert_eq!(v, Variant::Home);
    assert_eq!(engine.burst(), Variant::Home.burst_strength());
}
