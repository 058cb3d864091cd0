/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains performance metrics
 * shown in the debug overlay:
 * - FPS (frames per second)
 * - Frame time
 * - Ticks simulated so far
 * - Mean bird speed
 */

use std::time::Duration;

use crate::world::World;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub ticks: u64,
    pub mean_speed: f32,
}

impl DebugInfo {
    // Refresh from the latest frame timing and the world
    pub fn record(&mut self, fps: f32, frame_time: Duration, world: &World) {
        self.fps = fps;
        self.frame_time = frame_time;
        self.ticks = world.ticks();
        self.mean_speed = world.mean_bird_speed();
    }

    pub fn lines(&self, world: &World) -> Vec<String> {
        vec![
            format!("FPS: {:.1}", self.fps),
            format!("Frame time: {:.2} ms", self.frame_time.as_secs_f64() * 1000.0),
            format!("Ticks: {}", self.ticks),
            format!("Birds: {}", world.birds().len()),
            format!("Predators: {}", world.predators().len()),
            format!("Mean speed: {:.2}", self.mean_speed),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::SimulationParams;

    #[test]
    fn record_tracks_world() {
        let mut world = World::new(SimulationParams {
            num_birds: 4,
            num_predators: 2,
            seed: Some(1),
            ..Default::default()
        })
        .unwrap();
        world.tick();
        world.tick();

        let mut info = DebugInfo::default();
        info.record(59.5, Duration::from_millis(16), &world);

        assert_eq!(info.ticks, 2);
        assert_eq!(info.mean_speed, world.mean_bird_speed());
        let lines = info.lines(&world);
        assert_eq!(lines[0], "FPS: 59.5");
        assert_eq!(lines[1], "Frame time: 16.00 ms");
        assert_eq!(lines[3], "Birds: 4");
        assert_eq!(lines[4], "Predators: 2");
    }
}
