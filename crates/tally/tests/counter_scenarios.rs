//! End-to-end widget scenarios, driven through the headless simulator the
//! same way the real terminal program drives the widget.

use proptest::prelude::*;
use runloop::Simulator;
use tally::{CELEBRATION_TRIGGER, Control, Counter, CounterMsg, StyleState};

fn mounted(counter: Counter) -> Simulator<Counter> {
    let mut sim = Simulator::new(counter);
    sim.init();
    sim
}

#[test]
fn fifteen_increases_pin_the_default_counter() {
    let mut sim = mounted(Counter::new());
    for _ in 0..15 {
        sim.send(CounterMsg::Increase.into_message());
    }
    sim.run_until_idle();

    let counter = sim.model();
    assert_eq!(counter.count(), 15);
    assert!(!counter.control_enabled(Control::Increment));
    assert_eq!(counter.style_state(), StyleState::Boundary);
}

#[test]
fn decrease_at_default_min_stays_pinned() {
    let mut sim = mounted(Counter::new().with_count(-15));
    assert!(!sim.model().control_enabled(Control::Decrement));

    sim.send(CounterMsg::Decrease.into_message());
    sim.run_until_idle();

    let counter = sim.model();
    assert_eq!(counter.count(), -15);
    assert!(!counter.control_enabled(Control::Decrement));
}

#[test]
fn twenty_one_increases_celebrate_exactly_once() {
    // Animations off keeps the effect inert while the trigger logic and
    // one-shot accounting still run.
    let mut sim = mounted(
        Counter::new()
            .with_bounds(-15, 25)
            .with_animations(false),
    );
    for _ in 0..21 {
        sim.send(CounterMsg::Increase.into_message());
    }
    sim.run_until_idle();

    let counter = sim.model();
    assert_eq!(counter.count(), CELEBRATION_TRIGGER);
    assert_eq!(counter.celebrations(), 1);
}

#[test]
fn reset_returns_to_the_first_render_count() {
    let mut sim = mounted(Counter::new());
    for _ in 0..10 {
        sim.send(CounterMsg::Increase.into_message());
    }
    sim.run_until_idle();
    assert_eq!(sim.model().count(), 10);

    sim.send(CounterMsg::Reset.into_message());
    sim.run_until_idle();
    assert_eq!(sim.model().count(), 0);
}

#[test]
fn rendered_views_track_every_change() {
    let mut sim = mounted(Counter::new().with_count(7));
    sim.send(CounterMsg::Increase.into_message());
    sim.run_until_idle();

    let last = sim.last_view().unwrap();
    assert!(last.contains('8'));
    // One view for the first render plus one per processed message.
    assert!(sim.views().len() >= 2);
}

proptest! {
    #[test]
    fn count_never_leaves_bounds(ops in prop::collection::vec(0..3u8, 0..200)) {
        let mut sim = mounted(Counter::new().with_bounds(-5, 5));
        for op in ops {
            let msg = match op {
                0 => CounterMsg::Increase,
                1 => CounterMsg::Decrease,
                _ => CounterMsg::Reset,
            };
            sim.send(msg.into_message());
        }
        sim.run_until_idle();

        let count = sim.model().count();
        prop_assert!((-5..=5).contains(&count));
    }

    #[test]
    fn styling_is_boundary_exactly_at_the_bounds(count in -15i64..=15) {
        let mut sim = mounted(Counter::new());
        sim.model_mut().set_count(count);

        let expected = if count == -15 || count == 15 {
            StyleState::Boundary
        } else {
            StyleState::Normal
        };
        prop_assert_eq!(sim.model().style_state(), expected);
    }
}
