//! Axis-aligned geometry for items, bins and the play area
//!
//! Screen convention: x grows right, y grows down. Items live in
//! play-area-local coordinates; pointers and bins are in host (absolute)
//! coordinates and are converted through [`PlayArea`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    /// Bottom-right corner
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_xywh(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::new(Vec2::new(x, y), Vec2::new(x + w, y + h))
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
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Geometric center
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Check if a point is inside the rectangle (edges included)
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Check if another rectangle lies entirely inside this one
    pub fn contains_rect(&self, other: &Rect) -> bool {
        self.contains_point(other.min) && self.contains_point(other.max)
    }

    /// Move the rectangle by `delta`
    pub fn translate(&self, delta: Vec2) -> Rect {
        Rect::new(self.min + delta, self.max + delta)
    }
}

/// The bounded area items fall through
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayArea {
    /// Absolute position of the top-left corner
    pub origin: Vec2,
    /// Width/height
    pub size: Vec2,
}

impl PlayArea {
    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Play area anchored at the absolute origin
    pub fn sized(width: f32, height: f32) -> Self {
        Self::new(Vec2::ZERO, Vec2::new(width, height))
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Absolute bounds
    pub fn bounds(&self) -> Rect {
        Rect::new(self.origin, self.origin + self.size)
    }

    /// Convert an absolute point into play-area-local coordinates
    #[inline]
    pub fn to_local(&self, p: Vec2) -> Vec2 {
        p - self.origin
    }

    /// Convert a play-area-local point into absolute coordinates
    #[inline]
    pub fn to_absolute(&self, p: Vec2) -> Vec2 {
        p + self.origin
    }

    /// Largest x an item of `item_width` may take
    #[inline]
    pub fn max_x(&self, item_width: f32) -> f32 {
        self.width() - item_width
    }

    /// Floor line for an item of `item_height`: reaching it is a floor loss
    #[inline]
    pub fn floor_y(&self, item_height: f32) -> f32 {
        self.height() - item_height
    }
}
