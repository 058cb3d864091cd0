/*
 * Vector Module
 *
 * Positions, velocities and steering forces are nannou's glam `Vec2`. The
 * wrapper only pins down the behaviour the steering code relies on:
 * normalizing the zero vector gives zero, dividing by zero is a bug, and
 * positions wrap onto a torus.
 */

use std::ops::{Add, AddAssign, Deref, Div, Mul, Neg, Sub, SubAssign};

use nannou::prelude::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2D(pub Vec2);

impl Vector2D {
    pub const ZERO: Self = Self(Vec2::ZERO);

    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    /// Unit vector in the same direction, or zero for the zero vector.
    pub fn normalize(self) -> Self {
        Self(self.0.normalize_or_zero())
    }

    pub fn distance(self, other: Self) -> f32 {
        self.0.distance(other.0)
    }

    pub fn dot(self, other: Self) -> f32 {
        self.0.dot(other.0)
    }

    pub fn is_zero(self) -> bool {
        self.0 == Vec2::ZERO
    }

    /// Wrap both axes onto a `width` x `height` torus, so the result lies in
    /// `[0, width) x [0, height)`.
    pub fn wrapped(self, width: f32, height: f32) -> Self {
        Self::new(wrap_axis(self.x, width), wrap_axis(self.y, height))
    }
}

fn wrap_axis(value: f32, extent: f32) -> f32 {
    let wrapped = value.rem_euclid(extent);
    // rem_euclid can round a tiny negative value up to `extent` itself
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}

impl Deref for Vector2D {
    type Target = Vec2;

    fn deref(&self) -> &Vec2 {
        &self.0
    }
}

impl From<Vec2> for Vector2D {
    fn from(v: Vec2) -> Self {
        Self(v)
    }
}

impl Add for Vector2D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for Vector2D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl Mul<f32> for Vector2D {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        Self(self.0 * scalar)
    }
}

impl Div<f32> for Vector2D {
    type Output = Self;

    fn div(self, scalar: f32) -> Self {
        // Every division in the steering code is guarded by a `0 < distance`
        // or `count > 0` check, so a zero here is a caller bug.
        assert!(scalar != 0.0, "Vector2D divided by zero");
        Self(self.0 / scalar)
    }
}

impl Neg for Vector2D {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl AddAssign for Vector2D {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl SubAssign for Vector2D {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    fn approx_eq(a: Vector2D, b: Vector2D) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    #[test]
    fn arithmetic() {
        let a = Vector2D::new(1.0, 2.0);
        let b = Vector2D::new(3.0, -4.0);
        assert_eq!(a + b, Vector2D::new(4.0, -2.0));
        assert_eq!(a - b, Vector2D::new(-2.0, 6.0));
        assert_eq!(a * 2.0, Vector2D::new(2.0, 4.0));
        assert_eq!(b / 2.0, Vector2D::new(1.5, -2.0));
        assert_eq!(-a, Vector2D::new(-1.0, -2.0));

        let mut c = a;
        c += b;
        c -= a;
        assert_eq!(c, b);
    }

    #[test]
    fn length_and_distance() {
        assert_eq!(Vector2D::new(3.0, 4.0).length(), 5.0);
        assert_eq!(Vector2D::new(1.0, 1.0).distance(Vector2D::new(4.0, 5.0)), 5.0);
        assert_eq!(Vector2D::ZERO.length(), 0.0);
    }

    #[test]
    fn glam_values_convert_in() {
        let v: Vector2D = Vec2::new(2.0, -1.0).into();
        assert_eq!(v, Vector2D::new(2.0, -1.0));
        assert_eq!(v.dot(Vector2D::new(1.0, 1.0)), 1.0);
    }

    #[test]
    fn normalize_produces_unit_vector() {
        let n = Vector2D::new(3.0, 4.0).normalize();
        assert!((n.length() - 1.0).abs() < EPS);
        assert!(approx_eq(n, Vector2D::new(0.6, 0.8)));
    }

    #[test]
    fn normalize_is_idempotent() {
        for v in [
            Vector2D::new(3.0, 4.0),
            Vector2D::new(-0.001, 250.0),
            Vector2D::new(1e-3, -1e-3),
            Vector2D::new(-7.5, -7.5),
        ] {
            let once = v.normalize();
            assert!(approx_eq(once.normalize(), once), "failed for {:?}", v);
        }
    }

    #[test]
    fn normalize_zero_is_zero() {
        assert_eq!(Vector2D::ZERO.normalize(), Vector2D::ZERO);
        assert!(Vector2D::new(0.0, 0.0).normalize().is_zero());
    }

    #[test]
    fn wrapped_is_toroidal() {
        let w = 800.0;
        let h = 600.0;
        assert!(approx_eq(Vector2D::new(800.5, 10.0).wrapped(w, h), Vector2D::new(0.5, 10.0)));
        assert!(approx_eq(Vector2D::new(-1.0, -1.0).wrapped(w, h), Vector2D::new(799.0, 599.0)));
        assert!(approx_eq(Vector2D::new(400.0, 1200.0).wrapped(w, h), Vector2D::new(400.0, 0.0)));

        let edge = Vector2D::new(-1e-9, 0.0).wrapped(w, h);
        assert!(edge.x >= 0.0 && edge.x < w);
    }

    #[test]
    #[should_panic(expected = "divided by zero")]
    fn division_by_zero_fails_fast() {
        let _ = Vector2D::new(1.0, 1.0) / 0.0;
    }
}
