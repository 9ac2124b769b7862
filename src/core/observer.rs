use super::engine::PressStats;
use super::types::Pulse;
use log::debug;

/// Observer trait for pulse traffic.
///
/// Every callback defaults to a no-op, so implementations override only what
/// they care about. Observers are injected into the engine with
/// `PulseEngine::add_observer`; with none registered, nothing is observed.
pub trait PulseObserver {
    /// Called for every pulse placed on the queue, including pulses addressed
    /// to undeclared modules.
    fn on_pulse(&mut self, _pulse: &Pulse) {}

    /// Called after a button press has fully drained the queue.
    fn on_press_complete(&mut self, _press: u64, _stats: &PressStats) {}
}

/// Observer that logs pulse traffic through the `log` facade.
#[derive(Debug, Default)]
pub struct PulseTrace;

impl PulseObserver for PulseTrace {
    fn on_pulse(&mut self, pulse: &Pulse) {
        let source = match pulse.source {
            Some(id) => id.to_string(),
            None => "button".to_string(),
        };
        let destination = match pulse.destination {
            Some(id) => id.to_string(),
            None => "(undeclared)".to_string(),
        };
        debug!("{} -{}-> {}", source, pulse.signal, destination);
    }

    fn on_press_complete(&mut self, press: u64, stats: &PressStats) {
        debug!(
            "Press {} complete: {} low, {} high",
            press, stats.low, stats.high
        );
    }
}
