/// Dense index of a compiled module within its network.
///
/// Modules are referenced only by index after compilation; the index is valid
/// for the lifetime of the `CompiledNetwork` that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleId(pub(crate) usize);

impl ModuleId {
    /// Get the raw index
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for ModuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A pulse level on the wire.
///
/// Silence ("no pulse emitted") is not a level; it is expressed as
/// `Option<Signal>` at emission sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    Low,
    High,
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Signal::Low => write!(f, "low"),
            Signal::High => write!(f, "high"),
        }
    }
}

/// A single pulse in flight between two modules.
///
/// `source` is `None` for the synthetic button pulse. `destination` is `None`
/// when the addressed output name was never declared as a module; such pulses
/// are counted but never delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pulse {
    pub source: Option<ModuleId>,
    pub destination: Option<ModuleId>,
    pub signal: Signal,
}

impl Pulse {
    /// Create a new pulse
    pub fn new(source: Option<ModuleId>, destination: Option<ModuleId>, signal: Signal) -> Self {
        Self {
            source,
            destination,
            signal,
        }
    }

    /// The synthetic pulse injected by one button press
    pub fn button(broadcaster: ModuleId) -> Self {
        Self {
            source: None,
            destination: Some(broadcaster),
            signal: Signal::Low,
        }
    }
}
