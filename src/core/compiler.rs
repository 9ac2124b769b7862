use super::descriptor::{parse_network, ModuleDescriptor};
use super::module::Module;
use super::types::ModuleId;
use log::debug;
use std::collections::HashMap;

/// Reserved name of the entry module.
pub const BROADCASTER_NAME: &str = "broadcaster";

/// Default name of the injected sink module.
pub const DEFAULT_SINK_NAME: &str = "rx";

/// A dense, integer-indexed module graph ready for simulation.
///
/// The name→id lookup used during compilation is discarded; afterwards
/// modules reference each other only through `ModuleId` indices.
#[derive(Debug, Clone)]
pub struct CompiledNetwork {
    pub(crate) modules: Vec<Module>,
    broadcaster: ModuleId,
    sink: ModuleId,
}

impl CompiledNetwork {
    /// Compile a textual module list using the default sink name.
    pub fn from_text(input: &str) -> Result<Self, String> {
        Self::from_text_with_sink(input, DEFAULT_SINK_NAME)
    }

    /// Compile a textual module list with a caller-chosen sink name.
    pub fn from_text_with_sink(input: &str, sink_name: &str) -> Result<Self, String> {
        let descriptors = parse_network(input, sink_name)?;
        Self::compile(&descriptors)
    }

    fn compile(descriptors: &[ModuleDescriptor]) -> Result<Self, String> {
        // Assign dense ids in declaration order; the sink record is always
        // first, so the sink id is index 0.
        let mut name_map: HashMap<&str, ModuleId> = HashMap::new();
        for (idx, desc) in descriptors.iter().enumerate() {
            if name_map.insert(desc.name.as_str(), ModuleId(idx)).is_some() {
                return Err(format!(
                    "Module '{}' is declared more than once",
                    desc.name
                ));
            }
        }

        let sink = ModuleId(0);
        let broadcaster = *name_map
            .get(BROADCASTER_NAME)
            .ok_or_else(|| format!("No '{}' module declared", BROADCASTER_NAME))?;

        // Switch every module over from names to ids. An output name with no
        // declaration compiles to an empty slot.
        let mut modules: Vec<Module> = descriptors
            .iter()
            .enumerate()
            .map(|(idx, desc)| {
                let outputs = desc
                    .outputs
                    .iter()
                    .map(|name| name_map.get(name.as_str()).copied())
                    .collect();
                Module::new(ModuleId(idx), desc.kind, outputs)
            })
            .collect();

        // Tie resolved output edges back to their destinations so every
        // conjunction knows its full input set before the first pulse.
        for source in 0..modules.len() {
            let targets: Vec<ModuleId> = modules[source]
                .outputs()
                .iter()
                .flatten()
                .copied()
                .collect();
            for target in targets {
                modules[target.index()].register_input(ModuleId(source));
            }
        }

        debug!(
            "Compiled {} modules (broadcaster {}, sink {})",
            modules.len(),
            broadcaster,
            sink
        );

        Ok(Self {
            modules,
            broadcaster,
            sink,
        })
    }

    /// Id of the entry module.
    pub fn broadcaster(&self) -> ModuleId {
        self.broadcaster
    }

    /// Id of the injected sink module.
    pub fn sink(&self) -> ModuleId {
        self.sink
    }

    /// Number of compiled modules.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Borrow a module by id.
    pub fn module(&self, id: ModuleId) -> &Module {
        &self.modules[id.index()]
    }

    /// Ids of every module that lists `id` among its outputs.
    pub fn inputs_of(&self, id: ModuleId) -> Vec<ModuleId> {
        self.modules
            .iter()
            .filter(|m| m.outputs().contains(&Some(id)))
            .map(|m| m.id())
            .collect()
    }
}
