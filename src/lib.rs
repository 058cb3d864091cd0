/*
 * Murmuration Simulation - Module Definitions
 *
 * This file defines the module structure for the murmuration simulation.
 * The simulation core (vector, neighborhood, bird, predator, world) has no
 * window dependency; rendering, pacing and the nannou app sit on top of it.
 */

// Re-export key components for easier access
pub use bird::{Bird, SteeringForces};
pub use debug::DebugInfo;
pub use driver::{EventSource, FrameDriver, QuitFlag, Surface, Unpaced};
pub use neighborhood::{BruteForce, Neighborhood};
pub use pacer::{FramePacer, Pacer};
pub use params::{ConfigError, SimulationParams};
pub use predator::Predator;
pub use renderer::{Canvas, RecordingCanvas};
pub use vector::Vector2D;
pub use world::{SimState, World};

// Define modules
pub mod app;
pub mod bird;
pub mod debug;
pub mod driver;
pub mod input;
pub mod neighborhood;
pub mod pacer;
pub mod params;
pub mod predator;
pub mod renderer;
pub mod ui;
pub mod vector;
pub mod world;
