/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains every
 * constant of a run: world extent, frame rate, population sizes, kinematic
 * caps, sensing radii and steering weights. Parameters are fixed once the
 * world is created. A few of them can be overridden at start-up through
 * environment variables.
 */

use thiserror::Error;

pub const ENV_SEED: &str = "MURMURATION_SEED";
pub const ENV_BIRDS: &str = "MURMURATION_BIRDS";
pub const ENV_PREDATORS: &str = "MURMURATION_PREDATORS";
pub const ENV_FPS: &str = "MURMURATION_FPS";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("environment variable {name} has invalid value {value:?}")]
    InvalidEnv { name: &'static str, value: String },

    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },

    #[error("separation radius ({separation}) must be smaller than vision radius ({vision})")]
    SeparationExceedsVision { separation: f32, vision: f32 },
}

/// Every constant of a simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParams {
    pub width: f32,
    pub height: f32,
    pub fps: f32,
    pub num_birds: usize,
    pub num_predators: usize,
    pub max_speed: f32,
    pub max_force: f32,
    /// Sensing range for alignment and cohesion.
    pub vision_radius: f32,
    /// Personal space; must stay below `vision_radius`.
    pub separation_radius: f32,
    /// Range at which a bird notices a predator.
    pub avoid_radius: f32,
    pub predator_speed: f32,
    pub separation_weight: f32,
    pub alignment_weight: f32,
    pub cohesion_weight: f32,
    pub avoid_weight: f32,
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
    pub show_debug: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            fps: 60.0,
            num_birds: 200,
            num_predators: 3,
            max_speed: 5.0,
            max_force: 0.2,
            vision_radius: 50.0,
            separation_radius: 20.0,
            avoid_radius: 100.0,
            predator_speed: 8.0,
            // Predator avoidance dominates the flocking rules
            separation_weight: 1.5,
            alignment_weight: 1.0,
            cohesion_weight: 1.0,
            avoid_weight: 5.0,
            seed: None,
            show_debug: false,
        }
    }
}

impl SimulationParams {
    // Defaults with overrides read from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Defaults with overrides taken from `lookup`, which maps an
    /// environment variable name to its value if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut params = Self::default();

        if let Some(seed) = parse_var(&lookup, ENV_SEED)? {
            params.seed = Some(seed);
        }
        if let Some(birds) = parse_var(&lookup, ENV_BIRDS)? {
            params.num_birds = birds;
        }
        if let Some(predators) = parse_var(&lookup, ENV_PREDATORS)? {
            params.num_predators = predators;
        }
        if let Some(fps) = parse_var(&lookup, ENV_FPS)? {
            params.fps = fps;
        }

        params.validate()?;
        Ok(params)
    }

    // Check the invariants the steering math relies on. Zero birds or
    // predators is allowed: the world is just empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("fps", self.fps),
            ("max_speed", self.max_speed),
            ("max_force", self.max_force),
            ("vision_radius", self.vision_radius),
            ("separation_radius", self.separation_radius),
            ("avoid_radius", self.avoid_radius),
            ("predator_speed", self.predator_speed),
        ];
        for (name, value) in positive {
            // Written so that NaN is rejected too
            if !(value > 0.0) {
                return Err(ConfigError::NotPositive { name, value });
            }
        }

        if self.separation_radius >= self.vision_radius {
            return Err(ConfigError::SeparationExceedsVision {
                separation: self.separation_radius,
                vision: self.vision_radius,
            });
        }

        Ok(())
    }
}

fn parse_var<F, T>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnv { name, value: raw }),
    }
}
