/*
 * Murmuration Simulation
 *
 * A flock of birds follows four local rules while predators cross a
 * wrap-around world:
 * 1. Separation: Avoid crowding neighbors
 * 2. Alignment: Steer towards the average heading of neighbors
 * 3. Cohesion: Steer towards the average position of neighbors
 * 4. Avoidance: Flee from nearby predators
 *
 * Configuration comes from defaults plus MURMURATION_* environment variables;
 * logging is controlled through RUST_LOG.
 */

use anyhow::{Context, Result};

use murmuration::{app, SimulationParams};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let params = SimulationParams::from_env().context("Invalid simulation configuration")?;

    log::info!("Murmuration simulation starting...");
    log::info!(
        "{} birds, {} predators, {} fps",
        params.num_birds,
        params.num_predators,
        params.fps
    );

    app::launch(params);

    Ok(())
}
