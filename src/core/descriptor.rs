use super::types::Signal;

/// The four module types the network grammar can express.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleKind {
    FlipFlop,
    Conjunction,
    Broadcast,
    Sink,
}

/// Parsed textual form of one module declaration.
///
/// Built once per input line (plus one injected sink record) and consumed by
/// compilation; never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDescriptor {
    pub name: String,
    pub kind: ModuleKind,
    pub outputs: Vec<String>,
}

impl ModuleDescriptor {
    /// The synthetic terminal record compiled into the sink module
    pub fn sink(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: ModuleKind::Sink,
            outputs: Vec::new(),
        }
    }
}

/// Seed value for every conjunction input before any pulse is processed.
pub const INITIAL_INPUT_SIGNAL: Signal = Signal::Low;

/// Parse one declaration of the form `[%|&]<name> -> <name>[, <name>]*`.
///
/// `%` declares a flip-flop, `&` a conjunction, no prefix a broadcast module.
pub fn parse_line(line: &str) -> Result<ModuleDescriptor, String> {
    let (name_part, output_part) = line
        .split_once(" -> ")
        .ok_or_else(|| format!("Module declaration '{}' is missing ' -> '", line))?;

    let (kind, name) = match name_part.strip_prefix('%') {
        Some(rest) => (ModuleKind::FlipFlop, rest),
        None => match name_part.strip_prefix('&') {
            Some(rest) => (ModuleKind::Conjunction, rest),
            None => (ModuleKind::Broadcast, name_part),
        },
    };

    if name.is_empty() {
        return Err(format!("Module declaration '{}' has an empty name", line));
    }

    let outputs: Vec<String> = output_part
        .split(", ")
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect();

    Ok(ModuleDescriptor {
        name: name.to_string(),
        kind,
        outputs,
    })
}

/// Parse a whole module list, injecting the sink record ahead of the parsed
/// declarations so the sink always compiles to index 0.
pub fn parse_network(input: &str, sink_name: &str) -> Result<Vec<ModuleDescriptor>, String> {
    let mut descriptors = vec![ModuleDescriptor::sink(sink_name)];
    for line in input.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        descriptors.push(parse_line(line)?);
    }
    Ok(descriptors)
}
