/*
 * Bird Module
 *
 * This module defines the Bird struct and its steering behavior.
 * Each bird follows four rules:
 * 1. Separation: Avoid crowding neighbors
 * 2. Alignment: Steer towards the average heading of neighbors
 * 3. Cohesion: Steer towards the average position of neighbors
 * 4. Avoidance: Flee from predators within sight
 *
 * Steering reads a snapshot of the flock; the only state a bird writes is
 * its own.
 */

use rand::Rng;

use crate::neighborhood::{BruteForce, Neighborhood};
use crate::params::SimulationParams;
use crate::predator::Predator;
use crate::vector::Vector2D;

#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    pub position: Vector2D,
    pub velocity: Vector2D,
    /// Scratch accumulator, zero between ticks.
    pub acceleration: Vector2D,
}

/// The four steering contributions of one tick, before weighting.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SteeringForces {
    pub separation: Vector2D,
    pub alignment: Vector2D,
    pub cohesion: Vector2D,
    pub avoid: Vector2D,
}

impl SteeringForces {
    pub fn combined(&self, params: &SimulationParams) -> Vector2D {
        self.separation * params.separation_weight
            + self.alignment * params.alignment_weight
            + self.cohesion * params.cohesion_weight
            + self.avoid * params.avoid_weight
    }

    pub fn is_zero(&self) -> bool {
        self.separation.is_zero()
            && self.alignment.is_zero()
            && self.cohesion.is_zero()
            && self.avoid.is_zero()
    }
}

impl Bird {
    pub fn new(position: Vector2D, velocity: Vector2D) -> Self {
        Self {
            position,
            velocity,
            acceleration: Vector2D::ZERO,
        }
    }

    // Random position anywhere in the world, random heading, random speed up to max
    pub fn random<R: Rng + ?Sized>(rng: &mut R, params: &SimulationParams) -> Self {
        // Half-open real range, so a fresh agent is already inside the world
        let position = Vector2D::new(
            rng.gen_range(0.0..params.width),
            rng.gen_range(0.0..params.height),
        );
        let heading = Vector2D::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0));
        let velocity = heading.normalize() * rng.gen_range(0.0..params.max_speed);
        Self::new(position, velocity)
    }

    pub fn apply_force(&mut self, force: Vector2D) {
        self.acceleration += force;
    }

    /// Advance one tick against the given flock and predator snapshots,
    /// using a brute-force neighbor scan.
    pub fn update(&mut self, birds: &[Bird], predators: &[Predator], params: &SimulationParams) {
        let bird_positions: Vec<Vector2D> = birds.iter().map(|b| b.position).collect();
        let predator_positions: Vec<Vector2D> = predators.iter().map(|p| p.position).collect();
        self.update_with(
            birds,
            &BruteForce::new(&bird_positions),
            predators,
            &BruteForce::new(&predator_positions),
            params,
        );
    }

    /// Advance one tick with caller-supplied neighbor lookups. `bird_lookup`
    /// indexes into `birds` and `predator_lookup` into `predators`.
    pub fn update_with<N, M>(
        &mut self,
        birds: &[Bird],
        bird_lookup: &N,
        predators: &[Predator],
        predator_lookup: &M,
        params: &SimulationParams,
    ) where
        N: Neighborhood + ?Sized,
        M: Neighborhood + ?Sized,
    {
        let forces = self.steering(birds, bird_lookup, predators, predator_lookup, params);
        self.apply_force(forces.combined(params));
        self.integrate(params);
    }

    pub fn steering<N, M>(
        &self,
        birds: &[Bird],
        bird_lookup: &N,
        predators: &[Predator],
        predator_lookup: &M,
        params: &SimulationParams,
    ) -> SteeringForces
    where
        N: Neighborhood + ?Sized,
        M: Neighborhood + ?Sized,
    {
        let close = bird_lookup.within(self.position, params.separation_radius);
        let visible = bird_lookup.within(self.position, params.vision_radius);
        let threats = predator_lookup.within(self.position, params.avoid_radius);

        SteeringForces {
            separation: self.separation(birds, &close, params),
            alignment: self.alignment(birds, &visible, params),
            cohesion: self.cohesion(birds, &visible, params),
            avoid: self.avoid(predators, &threats, params),
        }
    }

    // velocity += acceleration, cap speed, move, wrap, clear acceleration
    fn integrate(&mut self, params: &SimulationParams) {
        self.velocity += self.acceleration;
        self.velocity = self.velocity.normalize() * self.velocity.length().min(params.max_speed);

        self.position = (self.position + self.velocity).wrapped(params.width, params.height);

        self.acceleration = Vector2D::ZERO;
    }

    // Calculate separation force (avoid crowding neighbors)
    pub fn separation(&self, birds: &[Bird], neighbor_indices: &[usize], params: &SimulationParams) -> Vector2D {
        if neighbor_indices.is_empty() {
            return Vector2D::ZERO;
        }

        let mut away = Vector2D::ZERO;
        for &i in neighbor_indices {
            away += self.flee_from(birds[i].position);
        }
        away = away / neighbor_indices.len() as f32;

        if away.length() > 0.0 {
            self.steer_towards(away, params)
        } else {
            Vector2D::ZERO
        }
    }

    // Calculate alignment force (steer towards average heading of neighbors)
    pub fn alignment(&self, birds: &[Bird], neighbor_indices: &[usize], params: &SimulationParams) -> Vector2D {
        if neighbor_indices.is_empty() {
            return Vector2D::ZERO;
        }

        let mut heading = Vector2D::ZERO;
        for &i in neighbor_indices {
            heading += birds[i].velocity;
        }
        heading = heading / neighbor_indices.len() as f32;

        self.steer_towards(heading, params)
    }

    // Calculate cohesion force (steer towards average position of neighbors)
    pub fn cohesion(&self, birds: &[Bird], neighbor_indices: &[usize], params: &SimulationParams) -> Vector2D {
        if neighbor_indices.is_empty() {
            return Vector2D::ZERO;
        }

        let mut centre = Vector2D::ZERO;
        for &i in neighbor_indices {
            centre += birds[i].position;
        }
        centre = centre / neighbor_indices.len() as f32;

        self.seek(centre, params)
    }

    // Calculate avoidance force (flee from every predator in range)
    pub fn avoid(&self, predators: &[Predator], threat_indices: &[usize], params: &SimulationParams) -> Vector2D {
        let mut away = Vector2D::ZERO;
        for &i in threat_indices {
            away += self.flee_from(predators[i].position);
        }

        if away.length() > 0.0 {
            self.steer_towards(away, params)
        } else {
            Vector2D::ZERO
        }
    }

    /// Steering force towards `target`, turning at most `max_force` per tick.
    pub fn seek(&self, target: Vector2D, params: &SimulationParams) -> Vector2D {
        let desired = (target - self.position).normalize() * params.max_speed;
        (desired - self.velocity).normalize() * params.max_force
    }

    // Reynolds: steering = desired - velocity, rescaled to max_force
    fn steer_towards(&self, direction: Vector2D, params: &SimulationParams) -> Vector2D {
        let steer = direction.normalize() * params.max_speed - self.velocity;
        steer.normalize() * params.max_force
    }

    // Unit vector away from `other`, weighted by 1/distance. Callers only
    // pass points at a strictly positive distance.
    fn flee_from(&self, other: Vector2D) -> Vector2D {
        let diff = self.position - other;
        diff.normalize() / diff.length()
    }
}
