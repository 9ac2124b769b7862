use super::compiler::CompiledNetwork;
use super::config::MeasurementConfig;
use super::descriptor::ModuleKind;
use super::engine::{PressStats, PulseEngine};
use super::types::{ModuleId, Signal};
use log::debug;
use std::collections::HashMap;

/// Presses scanned before a cycle or first-low search gives up, when the
/// configuration sets no explicit limit.
const DEFAULT_SCAN_LIMIT: u64 = 1 << 16;

/// Run the configured number of button presses and return the product of the
/// total low and high pulse counts.
pub fn pulse_count_product(input: &str, config: &MeasurementConfig) -> Result<u64, String> {
    let network = CompiledNetwork::from_text_with_sink(input, &config.sink_name)?;
    let mut engine = PulseEngine::new(network);
    let mut totals = PressStats::default();
    for _ in 0..config.counting_presses {
        let stats = engine.press_button();
        totals.merge(&stats);
    }
    debug!(
        "{} presses: {} low, {} high",
        config.counting_presses, totals.low, totals.high
    );
    Ok(totals.product())
}

/// Press the button until a press leaves the sink latch active, returning the
/// press count.
///
/// The latch is reset before every press, so activation means exactly one low
/// pulse and no high pulse reached the sink within a single press. Exceeding
/// `press_limit` is an error; with no limit the search runs until the latch
/// activates.
pub fn presses_until_activation(input: &str, config: &MeasurementConfig) -> Result<u64, String> {
    let network = CompiledNetwork::from_text_with_sink(input, &config.sink_name)?;
    let mut engine = PulseEngine::new(network);
    while !engine.sink_activated() {
        if let Some(limit) = config.press_limit {
            if engine.presses() >= limit {
                return Err(format!(
                    "Sink '{}' was not activated within {} presses",
                    config.sink_name, limit
                ));
            }
        }
        engine.reset_sink();
        engine.press_button();
    }
    Ok(engine.presses())
}

/// The press count at which the sink first receives a low pulse.
///
/// When the sink hangs off a single conjunction with two or more inputs, the
/// press count decomposes: each input delivers its first high pulse to that
/// conjunction on some press, and the conjunction first goes all-high (and
/// emits low) when those cycles coincide, at the least common multiple.
/// Networks without that shape are scanned directly.
pub fn presses_until_first_low(input: &str, config: &MeasurementConfig) -> Result<u64, String> {
    let network = CompiledNetwork::from_text_with_sink(input, &config.sink_name)?;
    match decompose_feeders(&network) {
        Some((feeder, sources)) => combined_cycle_length(network, feeder, &sources, config),
        None => scan_for_first_low(network, config),
    }
}

/// Find the single conjunction feeding the sink, along with its inputs.
fn decompose_feeders(network: &CompiledNetwork) -> Option<(ModuleId, Vec<ModuleId>)> {
    let feeders = network.inputs_of(network.sink());
    let feeder = match feeders.as_slice() {
        [feeder] => *feeder,
        _ => return None,
    };
    if network.module(feeder).kind() != ModuleKind::Conjunction {
        return None;
    }
    let sources = network.inputs_of(feeder);
    if sources.len() < 2 {
        return None;
    }
    Some((feeder, sources))
}

fn combined_cycle_length(
    network: CompiledNetwork,
    feeder: ModuleId,
    sources: &[ModuleId],
    config: &MeasurementConfig,
) -> Result<u64, String> {
    let limit = config.press_limit.unwrap_or(DEFAULT_SCAN_LIMIT);
    let mut engine = PulseEngine::new(network);
    let mut first_high: HashMap<ModuleId, u64> = HashMap::new();

    while first_high.len() < sources.len() {
        if engine.presses() >= limit {
            return Err(format!(
                "Only {} of {} feeder inputs cycled within {} presses",
                first_high.len(),
                sources.len(),
                limit
            ));
        }
        let press = engine.presses() + 1;
        engine.press_button_with(|pulse| {
            if pulse.signal == Signal::High && pulse.destination == Some(feeder) {
                if let Some(source) = pulse.source {
                    first_high.entry(source).or_insert(press);
                }
            }
        });
    }

    let mut combined = 1u64;
    for (source, press) in &first_high {
        debug!("Feeder input {} first sends high on press {}", source, press);
        combined = lcm(combined, *press)?;
    }
    Ok(combined)
}

fn scan_for_first_low(
    network: CompiledNetwork,
    config: &MeasurementConfig,
) -> Result<u64, String> {
    let limit = config.press_limit.unwrap_or(DEFAULT_SCAN_LIMIT);
    let sink = network.sink();
    let mut engine = PulseEngine::new(network);
    loop {
        if engine.presses() >= limit {
            return Err(format!(
                "No low pulse reached the sink within {} presses",
                limit
            ));
        }
        let mut saw_low = false;
        engine.press_button_with(|pulse| {
            if pulse.destination == Some(sink) && pulse.signal == Signal::Low {
                saw_low = true;
            }
        });
        if saw_low {
            return Ok(engine.presses());
        }
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

fn lcm(a: u64, b: u64) -> Result<u64, String> {
    (a / gcd(a, b))
        .checked_mul(b)
        .ok_or_else(|| "Combined cycle length overflows u64".to_string())
}
