//! Axis-aligned boxes for screen, playfield and sprite bounds
//!
//! Screen coordinates: origin at top-left, +y points down.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Square box of side `size` centered on `center`
    pub fn from_center(center: Vec2, size: f32) -> Self {
        let half = Vec2::splat(size / 2.0);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Overlap test; boxes that only share an edge do not intersect
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Clamp the center of a square box of side `size` so the box stays
    /// inside `self`. If the box is larger than `self` it is centered.
    pub fn clamp_center(&self, center: Vec2, size: f32) -> Vec2 {
        let half = size / 2.0;
        let clamp_axis = |value: f32, lo: f32, hi: f32| {
            if lo + half > hi - half {
                (lo + hi) / 2.0
            } else {
                value.clamp(lo + half, hi - half)
            }
        };
        Vec2::new(
            clamp_axis(center.x, self.min.x, self.max.x),
            clamp_axis(center.y, self.min.y, self.max.y),
        )
    }

    /// Uniform random point inside the box (edges inclusive)
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec2 {
        Vec2::new(
            rng.random_range(self.min.x..=self.max.x),
            rng.random_range(self.min.y..=self.max.y),
        )
    }
}
