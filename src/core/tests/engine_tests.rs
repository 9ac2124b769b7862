use crate::core::compiler::CompiledNetwork;
use crate::core::engine::{PressStats, PulseEngine};
use crate::core::observer::PulseObserver;
use crate::core::types::{ModuleId, Pulse};
use std::cell::RefCell;
use std::rc::Rc;

const CASCADE: &str = "broadcaster -> a, b, c\n\
                       %a -> b\n\
                       %b -> c\n\
                       %c -> inv\n\
                       &inv -> a\n";

fn engine_for(input: &str) -> PulseEngine {
    PulseEngine::new(CompiledNetwork::from_text(input).unwrap())
}

#[test]
fn test_single_press_counts_for_cascade() {
    let mut engine = engine_for(CASCADE);
    let stats = engine.press_button();
    assert_eq!(stats, PressStats { low: 8, high: 4 });
}

#[test]
fn test_press_stats_repeat_with_period_two() {
    // A lone flip-flop returns to its original state after two presses, so
    // press three must reproduce press one exactly.
    let mut engine = engine_for("broadcaster -> a\n%a -> out\n");
    let first = engine.press_button();
    let second = engine.press_button();
    let third = engine.press_button();

    assert_eq!(first, PressStats { low: 2, high: 1 });
    assert_eq!(second, PressStats { low: 3, high: 0 });
    assert_eq!(third, first);
}

#[test]
fn test_undeclared_destination_is_counted_but_dropped() {
    let mut engine = engine_for("broadcaster -> nowhere\n");
    let stats = engine.press_button();
    // The button pulse plus the one aimed at the undeclared module.
    assert_eq!(stats, PressStats { low: 2, high: 0 });
}

#[test]
fn test_breadth_first_delivery_order() {
    // Conjunction chains of depth two and three; conjunctions respond to
    // every pulse, so each level stays populated.
    let input = "broadcaster -> a, x\n\
                 &a -> b\n\
                 &b -> c\n\
                 &x -> y\n\
                 &y -> z\n\
                 &z -> out\n";
    let mut engine = engine_for(input);

    let network = engine.network();
    let bc = network.broadcaster();
    let a = network.module(bc).outputs()[0].unwrap();
    let x = network.module(bc).outputs()[1].unwrap();
    let b = network.module(a).outputs()[0].unwrap();
    let c = network.module(b).outputs()[0].unwrap();
    let y = network.module(x).outputs()[0].unwrap();
    let z = network.module(y).outputs()[0].unwrap();

    let mut pulses: Vec<Pulse> = Vec::new();
    engine.press_button_with(|pulse| pulses.push(*pulse));

    let pos = |source: ModuleId, destination: ModuleId| {
        pulses
            .iter()
            .position(|p| p.source == Some(source) && p.destination == Some(destination))
            .unwrap_or_else(|| panic!("No pulse {} -> {}", source, destination))
    };

    // All depth-one deliveries precede every depth-two delivery, which in
    // turn precede every depth-three delivery.
    assert!(pos(bc, a) < pos(a, b));
    assert!(pos(bc, x) < pos(a, b));
    assert!(pos(bc, a) < pos(x, y));
    assert!(pos(bc, x) < pos(x, y));
    assert!(pos(a, b) < pos(b, c));
    assert!(pos(x, y) < pos(y, z));
    assert!(pos(a, b) < pos(y, z));
}

#[test]
fn test_identical_runs_deliver_identical_pulse_sequences() {
    let input = "broadcaster -> a, x\n\
                 &a -> b\n\
                 &b -> c\n\
                 &x -> y\n\
                 &y -> z\n\
                 &z -> out\n";

    let mut sequences: Vec<Vec<Pulse>> = Vec::new();
    for _ in 0..2 {
        let mut engine = engine_for(input);
        let mut pulses = Vec::new();
        for _ in 0..5 {
            engine.press_button_with(|pulse| pulses.push(*pulse));
        }
        sequences.push(pulses);
    }
    assert_eq!(
        sequences[0], sequences[1],
        "Identical input must replay the exact same pulse sequence"
    );
}

#[test]
fn test_sink_activation_and_reset() {
    let mut engine = engine_for("broadcaster -> a\n%a -> con\n&con -> rx\n");
    assert!(!engine.sink_activated());
    engine.press_button();
    assert!(
        engine.sink_activated(),
        "One press delivers a single low to the sink"
    );
    engine.reset_sink();
    assert!(!engine.sink_activated());
}

struct CountingObserver {
    pulses: Rc<RefCell<u64>>,
    last_press: Rc<RefCell<u64>>,
}

impl PulseObserver for CountingObserver {
    fn on_pulse(&mut self, _pulse: &Pulse) {
        *self.pulses.borrow_mut() += 1;
    }

    fn on_press_complete(&mut self, press: u64, _stats: &PressStats) {
        *self.last_press.borrow_mut() = press;
    }
}

#[test]
fn test_observer_sees_every_pulse() {
    let pulses = Rc::new(RefCell::new(0));
    let last_press = Rc::new(RefCell::new(0));

    let mut engine = engine_for(CASCADE);
    engine.add_observer(Box::new(CountingObserver {
        pulses: Rc::clone(&pulses),
        last_press: Rc::clone(&last_press),
    }));

    let stats = engine.press_button();
    assert_eq!(*pulses.borrow(), stats.low + stats.high);
    assert_eq!(*last_press.borrow(), 1);
}
