/*
 * Predator Module
 *
 * Predators are oblivious straight-line movers. Their velocity is chosen once
 * at creation and never changes; they only wrap at the world edges.
 */

use rand::Rng;

use crate::params::SimulationParams;
use crate::vector::Vector2D;

#[derive(Debug, Clone, PartialEq)]
pub struct Predator {
    pub position: Vector2D,
    pub velocity: Vector2D,
}

impl Predator {
    pub fn new(position: Vector2D, velocity: Vector2D) -> Self {
        Self { position, velocity }
    }

    // Random position, random heading at the configured predator speed
    pub fn random<R: Rng + ?Sized>(rng: &mut R, params: &SimulationParams) -> Self {
        // Half-open real range, so a fresh agent is already inside the world
        let position = Vector2D::new(
            rng.gen_range(0.0..params.width),
            rng.gen_range(0.0..params.height),
        );
        let heading = Vector2D::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0));
        Self::new(position, heading.normalize() * params.predator_speed)
    }

    pub fn update(&mut self, params: &SimulationParams) {
        self.position = (self.position + self.velocity).wrapped(params.width, params.height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn random_predator_moves_at_predator_speed() {
        let p = SimulationParams::default();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..100 {
            let predator = Predator::random(&mut rng, &p);
            assert!((predator.velocity.length() - p.predator_speed).abs() < 1e-4);
            assert!(predator.position.x >= 0.0 && predator.position.x < p.width);
            assert!(predator.position.y >= 0.0 && predator.position.y < p.height);
        }
    }

    #[test]
    fn moves_in_a_straight_line_and_wraps() {
        let p = SimulationParams::default();
        let velocity = Vector2D::new(8.0, -3.0);
        let mut predator = Predator::new(Vector2D::new(796.0, 2.0), velocity);

        predator.update(&p);
        assert!((predator.position.x - 4.0).abs() < 1e-4);
        assert!((predator.position.y - 599.0).abs() < 1e-4);
        assert_eq!(predator.velocity, velocity);

        predator.update(&p);
        assert!((predator.position.x - 12.0).abs() < 1e-4);
        assert!((predator.position.y - 596.0).abs() < 1e-4);
    }
}
