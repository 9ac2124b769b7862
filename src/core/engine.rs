use super::compiler::CompiledNetwork;
use super::observer::PulseObserver;
use super::types::{Pulse, Signal};
use log::debug;
use std::collections::VecDeque;

/// Low/high pulse totals for one or more button presses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PressStats {
    pub low: u64,
    pub high: u64,
}

impl PressStats {
    fn count(&mut self, signal: Signal) {
        match signal {
            Signal::Low => self.low += 1,
            Signal::High => self.high += 1,
        }
    }

    /// Fold another batch of counts into this one.
    pub fn merge(&mut self, other: &PressStats) {
        self.low += other.low;
        self.high += other.high;
    }

    pub fn product(&self) -> u64 {
        self.low * self.high
    }
}

/// Drives breadth-first pulse propagation through a compiled network.
///
/// One button press seeds a single low pulse into the broadcaster and drains
/// the queue to empty before returning; presses never interleave.
pub struct PulseEngine {
    network: CompiledNetwork,
    queue: VecDeque<Pulse>,
    presses: u64,
    observers: Vec<Box<dyn PulseObserver>>,
}

impl PulseEngine {
    /// Create a new engine owning the compiled network for the run's duration
    pub fn new(network: CompiledNetwork) -> Self {
        Self {
            network,
            queue: VecDeque::new(),
            presses: 0,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the engine
    pub fn add_observer(&mut self, observer: Box<dyn PulseObserver>) {
        self.observers.push(observer);
    }

    pub fn network(&self) -> &CompiledNetwork {
        &self.network
    }

    /// Number of button presses performed so far.
    pub fn presses(&self) -> u64 {
        self.presses
    }

    /// True iff the sink latch is currently active.
    pub fn sink_activated(&self) -> bool {
        self.network.module(self.network.sink()).is_complete()
    }

    /// Return the sink latch to its ready state.
    pub fn reset_sink(&mut self) {
        let sink = self.network.sink();
        self.network.modules[sink.index()].reset();
    }

    /// Press the button once and return this press's pulse counts.
    pub fn press_button(&mut self) -> PressStats {
        self.press_button_with(|_| {})
    }

    /// Press the button once, handing every pulse to `inspect` as it is
    /// queued. The synthetic button pulse and pulses addressed to undeclared
    /// modules are included; the latter are counted but never delivered.
    pub fn press_button_with<F>(&mut self, mut inspect: F) -> PressStats
    where
        F: FnMut(&Pulse),
    {
        self.presses += 1;
        debug!("=== Button press {} ===", self.presses);

        let mut stats = PressStats::default();
        let seed = Pulse::button(self.network.broadcaster());
        self.note_pulse(&seed, &mut stats, &mut inspect);
        self.queue.push_back(seed);

        while let Some(pulse) = self.queue.pop_front() {
            let destination = match pulse.destination {
                Some(id) => id,
                None => continue,
            };
            let module = &mut self.network.modules[destination.index()];
            let signal = match module.respond(&pulse) {
                Some(signal) => signal,
                None => continue,
            };
            // Fan-out goes to the queue tail: every pulse from this step is
            // enqueued before any downstream reaction runs.
            let outputs = module.outputs().to_vec();
            for target in outputs {
                let next = Pulse::new(Some(destination), target, signal);
                self.note_pulse(&next, &mut stats, &mut inspect);
                self.queue.push_back(next);
            }
        }

        for observer in &mut self.observers {
            observer.on_press_complete(self.presses, &stats);
        }
        stats
    }

    fn note_pulse<F>(&mut self, pulse: &Pulse, stats: &mut PressStats, inspect: &mut F)
    where
        F: FnMut(&Pulse),
    {
        stats.count(pulse.signal);
        inspect(pulse);
        for observer in &mut self.observers {
            observer.on_pulse(pulse);
        }
    }
}
