pub mod core;

// Re-export commonly used types
pub use crate::core::compiler::CompiledNetwork;
pub use crate::core::config::MeasurementConfig;
pub use crate::core::engine::{PressStats, PulseEngine};
pub use crate::core::observer::{PulseObserver, PulseTrace};
pub use crate::core::types::{ModuleId, Pulse, Signal};
