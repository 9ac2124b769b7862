use super::descriptor::{ModuleKind, INITIAL_INPUT_SIGNAL};
use super::types::{ModuleId, Pulse, Signal};
use std::collections::HashMap;

/// Activation latch tracked by the sink module.
///
/// One low pulse moves `Ready` to `Active`; a second low, or any high pulse,
/// moves to `Invalidated`. `Active` therefore means "exactly one low and no
/// high arrived since the last reset".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationState {
    Ready,
    Active,
    Invalidated,
}

/// Type-specific state for a compiled module.
#[derive(Debug, Clone)]
pub enum ModuleState {
    FlipFlop { on: bool },
    Conjunction { last_received: HashMap<ModuleId, Signal> },
    Broadcast,
    Sink { latch: ActivationState },
}

/// A compiled module: dense id, resolved output slots, and typed state.
///
/// A `None` output slot stands for an output name that was never declared as
/// a module of its own; pulses routed there are counted but dropped.
#[derive(Debug, Clone)]
pub struct Module {
    id: ModuleId,
    outputs: Vec<Option<ModuleId>>,
    state: ModuleState,
}

impl Module {
    pub(crate) fn new(id: ModuleId, kind: ModuleKind, outputs: Vec<Option<ModuleId>>) -> Self {
        let state = match kind {
            ModuleKind::FlipFlop => ModuleState::FlipFlop { on: false },
            ModuleKind::Conjunction => ModuleState::Conjunction {
                last_received: HashMap::new(),
            },
            ModuleKind::Broadcast => ModuleState::Broadcast,
            ModuleKind::Sink => ModuleState::Sink {
                latch: ActivationState::Ready,
            },
        };
        Self { id, outputs, state }
    }

    pub fn id(&self) -> ModuleId {
        self.id
    }

    pub fn outputs(&self) -> &[Option<ModuleId>] {
        &self.outputs
    }

    pub fn kind(&self) -> ModuleKind {
        match self.state {
            ModuleState::FlipFlop { .. } => ModuleKind::FlipFlop,
            ModuleState::Conjunction { .. } => ModuleKind::Conjunction,
            ModuleState::Broadcast => ModuleKind::Broadcast,
            ModuleState::Sink { .. } => ModuleKind::Sink,
        }
    }

    /// Register an upstream module. Conjunctions track the source with its
    /// last signal seeded low; every other module type ignores this.
    pub(crate) fn register_input(&mut self, source: ModuleId) {
        if let ModuleState::Conjunction { last_received } = &mut self.state {
            last_received.insert(source, INITIAL_INPUT_SIGNAL);
        }
    }

    /// Process one delivered pulse and return the signal to fan out, if any.
    ///
    /// This is the single dispatch point for all module transition logic.
    pub fn respond(&mut self, pulse: &Pulse) -> Option<Signal> {
        debug_assert_eq!(pulse.destination, Some(self.id));
        match &mut self.state {
            ModuleState::FlipFlop { on } => match pulse.signal {
                Signal::High => None,
                Signal::Low => {
                    *on = !*on;
                    Some(if *on { Signal::High } else { Signal::Low })
                }
            },
            ModuleState::Conjunction { last_received } => {
                let source = pulse
                    .source
                    .expect("conjunction pulse must carry a source module");
                let slot = last_received
                    .get_mut(&source)
                    .expect("conjunction received a pulse from an unregistered input");
                *slot = pulse.signal;
                let all_high = last_received.values().all(|s| *s == Signal::High);
                Some(if all_high { Signal::Low } else { Signal::High })
            }
            ModuleState::Broadcast => Some(pulse.signal),
            ModuleState::Sink { latch } => {
                *latch = match (pulse.signal, *latch) {
                    (Signal::High, _) => ActivationState::Invalidated,
                    (Signal::Low, ActivationState::Ready) => ActivationState::Active,
                    (Signal::Low, _) => ActivationState::Invalidated,
                };
                None
            }
        }
    }

    /// True iff this is a sink whose latch is currently `Active`.
    pub fn is_complete(&self) -> bool {
        matches!(
            self.state,
            ModuleState::Sink {
                latch: ActivationState::Active
            }
        )
    }

    /// Return a sink latch to `Ready`; no-op for every other module type.
    pub fn reset(&mut self) {
        if let ModuleState::Sink { latch } = &mut self.state {
            *latch = ActivationState::Ready;
        }
    }
}
