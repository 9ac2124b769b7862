use pulsenet::core::measurement::{presses_until_first_low, pulse_count_product};
use pulsenet::MeasurementConfig;
use std::env;
use std::fs;

fn main() -> Result<(), String> {
    env_logger::init();

    let path = env::args()
        .nth(1)
        .ok_or_else(|| "Usage: pulse_counts <input-file>".to_string())?;
    let input =
        fs::read_to_string(&path).map_err(|e| format!("Failed to read '{}': {}", path, e))?;

    let config = MeasurementConfig::default();

    let product = pulse_count_product(&input, &config)?;
    println!(
        "Pulse count product after {} presses: {}",
        config.counting_presses, product
    );

    match presses_until_first_low(&input, &config) {
        Ok(presses) => println!(
            "First low pulse reaches '{}' on press {}",
            config.sink_name, presses
        ),
        Err(e) => println!("No low pulse reached '{}': {}", config.sink_name, e),
    }

    Ok(())
}
