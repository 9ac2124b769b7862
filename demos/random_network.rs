use pulsenet::{CompiledNetwork, PressStats, PulseEngine};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Geometric};
use std::env;

const MODULE_COUNT: usize = 500;
const PRESSES: u64 = 10_000;

fn main() -> Result<(), String> {
    env_logger::init();

    let seed: u64 = env::args()
        .nth(1)
        .map(|s| {
            s.parse()
                .map_err(|e| format!("Invalid seed '{}': {}", s, e))
        })
        .transpose()?
        .unwrap_or(42);

    let input = generate_network(seed, MODULE_COUNT);
    let network = CompiledNetwork::from_text(&input)?;
    println!(
        "⚡ Random pulse network: {} modules, seed {}",
        network.len(),
        seed
    );

    let mut engine = PulseEngine::new(network);
    let mut totals = PressStats::default();
    for _ in 0..PRESSES {
        let stats = engine.press_button();
        totals.merge(&stats);
    }

    println!(
        "{} presses: {} low, {} high (product {})",
        PRESSES,
        totals.low,
        totals.high,
        totals.product()
    );
    Ok(())
}

/// Generate a layered, acyclic module list: every edge points forward, so a
/// press always drains.
fn generate_network(seed: u64, modules: usize) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    // Geometric fan-out: most modules drive one or two listeners, a few
    // drive many.
    let extra_fan_out = Geometric::new(0.6).expect("valid geometric parameter");

    let names: Vec<String> = (0..modules).map(|i| format!("m{}", i)).collect();
    let mut lines = vec![format!(
        "broadcaster -> {}",
        names[..4.min(modules)].join(", ")
    )];

    for i in 0..modules {
        let prefix = if rng.gen_bool(0.8) { '%' } else { '&' };
        let fan_out = 1 + extra_fan_out.sample(&mut rng).min(4) as usize;
        let outputs: Vec<String> = (0..fan_out)
            .map(|_| {
                if i + 1 < modules {
                    names[rng.gen_range(i + 1..modules)].clone()
                } else {
                    "drain".to_string()
                }
            })
            .collect();
        lines.push(format!("{}{} -> {}", prefix, names[i], outputs.join(", ")));
    }
    lines.join("\n")
}
