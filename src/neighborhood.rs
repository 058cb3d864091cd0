/*
 * Neighborhood Module
 *
 * Neighbor lookup for the steering rules. A lookup answers a single question:
 * which entries lie within a radius of a point. Steering code only ever sees
 * the returned indices, so the brute-force scan below can be swapped for a
 * bucketed lookup without touching the steering math.
 */

use crate::vector::Vector2D;

pub trait Neighborhood {
    /// Indices of entries at distance `d` from `point` with `0 < d < radius`.
    fn within(&self, point: Vector2D, radius: f32) -> Vec<usize>;
}

/// All-pairs scan over a slice of positions.
pub struct BruteForce<'a> {
    positions: &'a [Vector2D],
}

impl<'a> BruteForce<'a> {
    pub fn new(positions: &'a [Vector2D]) -> Self {
        Self { positions }
    }
}

impl Neighborhood for BruteForce<'_> {
    fn within(&self, point: Vector2D, radius: f32) -> Vec<usize> {
        self.positions
            .iter()
            .enumerate()
            .filter_map(|(i, &other)| {
                let d = point.distance(other);
                (d > 0.0 && d < radius).then_some(i)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excludes_self_and_out_of_range() {
        let positions = [
            Vector2D::new(0.0, 0.0),
            Vector2D::new(5.0, 0.0),
            Vector2D::new(10.0, 0.0),
            Vector2D::new(0.0, 3.0),
        ];
        let lookup = BruteForce::new(&positions);
        assert_eq!(lookup.within(Vector2D::new(0.0, 0.0), 10.0), vec![1, 3]);
    }

    #[test]
    fn coincident_points_are_not_neighbors() {
        let positions = [Vector2D::new(2.0, 2.0), Vector2D::new(2.0, 2.0)];
        let lookup = BruteForce::new(&positions);
        assert!(lookup.within(Vector2D::new(2.0, 2.0), 50.0).is_empty());
    }

    #[test]
    fn empty_slice_has_no_neighbors() {
        let lookup = BruteForce::new(&[]);
        assert!(lookup.within(Vector2D::ZERO, 100.0).is_empty());
    }
}
