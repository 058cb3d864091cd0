/*
 * World Module
 *
 * The World owns the flock and the predators, seeds their placement, and
 * advances all of them once per tick.
 *
 * Per tick:
 * - predators move first
 * - the flock is cloned, and every bird steers against that clone, so no bird
 *   sees another bird's position from the current tick
 * - birds see the predators where the predator pass left them
 */

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::bird::Bird;
use crate::neighborhood::BruteForce;
use crate::params::{ConfigError, SimulationParams};
use crate::predator::Predator;
use crate::vector::Vector2D;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimState {
    Running,
    /// Terminal.
    Stopped,
}

pub struct World {
    params: SimulationParams,
    birds: Vec<Bird>,
    predators: Vec<Predator>,
    state: SimState,
    ticks: u64,
    seed: u64,
}

impl World {
    /// Populate a new world from `params`. Placement uses a ChaCha RNG seeded
    /// from `params.seed`, or from entropy when no seed is configured.
    pub fn new(params: SimulationParams) -> Result<Self, ConfigError> {
        params.validate()?;

        let seed = params.seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let birds = (0..params.num_birds)
            .map(|_| Bird::random(&mut rng, &params))
            .collect();
        let predators = (0..params.num_predators)
            .map(|_| Predator::random(&mut rng, &params))
            .collect();

        log::info!(
            "World created: {}x{}, {} birds, {} predators, seed {}",
            params.width,
            params.height,
            params.num_birds,
            params.num_predators,
            seed
        );

        Ok(Self::from_parts(params, birds, predators, seed))
    }

    /// Build a world around hand-placed agents.
    pub fn with_agents(params: SimulationParams, birds: Vec<Bird>, predators: Vec<Predator>) -> Self {
        let seed = params.seed.unwrap_or(0);
        Self::from_parts(params, birds, predators, seed)
    }

    fn from_parts(params: SimulationParams, birds: Vec<Bird>, predators: Vec<Predator>, seed: u64) -> Self {
        Self {
            params,
            birds,
            predators,
            state: SimState::Running,
            ticks: 0,
            seed,
        }
    }

    /// Advance every agent once. Does nothing once the world is stopped.
    pub fn tick(&mut self) {
        if self.state == SimState::Stopped {
            return;
        }

        for predator in &mut self.predators {
            predator.update(&self.params);
        }

        let snapshot = self.birds.clone();
        let bird_positions: Vec<Vector2D> = snapshot.iter().map(|b| b.position).collect();
        let predator_positions: Vec<Vector2D> = self.predators.iter().map(|p| p.position).collect();
        let bird_lookup = BruteForce::new(&bird_positions);
        let predator_lookup = BruteForce::new(&predator_positions);

        for bird in &mut self.birds {
            bird.update_with(&snapshot, &bird_lookup, &self.predators, &predator_lookup, &self.params);
        }

        self.ticks += 1;
        if self.ticks % 600 == 0 {
            log::debug!("tick {}: mean bird speed {:.2}", self.ticks, self.mean_bird_speed());
        }
    }

    pub fn stop(&mut self) {
        if self.state == SimState::Running {
            log::info!("Simulation stopped after {} ticks", self.ticks);
            self.state = SimState::Stopped;
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == SimState::Running
    }

    pub fn state(&self) -> SimState {
        self.state
    }

    pub fn birds(&self) -> &[Bird] {
        &self.birds
    }

    pub fn predators(&self) -> &[Predator] {
        &self.predators
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn mean_bird_speed(&self) -> f32 {
        if self.birds.is_empty() {
            return 0.0;
        }
        let total: f32 = self.birds.iter().map(|b| b.velocity.length()).sum();
        total / self.birds.len() as f32
    }
}
