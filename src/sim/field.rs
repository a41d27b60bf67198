//! Iceberg pairs and the scrolling field that owns them
//!
//! A pair is two full-height columns with a vertical gap between them and a
//! star pickup somewhere inside the gap. Pairs enter just past the right
//! screen edge, scroll left and are pruned once fully off screen. Collision
//! uses a 1 px slit at the center of each column instead of its nominal
//! width, which makes grazing the visual edges forgiving.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// One top/bottom iceberg column pair plus its star
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IcebergPair {
    /// Left edge x and gap center y, in screen pixels
    pub pos: Vec2,
    /// Vertical opening between the two columns
    pub gap: i32,
    pub width: i32,
    /// Set once the pair has scrolled fully past the ship
    pub passed: bool,
    /// Star center y, placed inside the gap at spawn
    pub star_y: Option<f32>,
    pub star_collected: bool,
}

impl IcebergPair {
    /// Build a pair at an explicit position; the star lands uniformly inside
    /// the gap, kept `STAR_SIZE/2 + STAR_GAP_PAD` clear of both gap edges.
    /// Gaps too narrow for that clearance put the star exactly at the center.
    pub fn new(x: f32, gap_y: f32, gap: i32, rng: &mut Pcg32) -> Self {
        let margin = (STAR_SIZE / 2 + STAR_GAP_PAD) as f32;
        let top_limit = gap_y - gap as f32 / 2.0 + margin;
        let bottom_limit = gap_y + gap as f32 / 2.0 - margin;
        let star_y = if top_limit >= bottom_limit {
            gap_y
        } else {
            rng.random_range(top_limit..bottom_limit)
        };

        Self {
            pos: Vec2::new(x, gap_y),
            gap,
            width: BERG_WIDTH,
            passed: false,
            star_y: Some(star_y),
            star_collected: false,
        }
    }

    /// Spawn at the standard entry point with a random gap center
    pub fn spawn(gap: i32, rng: &mut Pcg32) -> Self {
        let gap_y = rng.random_range(GAP_CENTER_MARGIN..=SCREEN_H - GAP_CENTER_MARGIN);
        Self::new((SCREEN_W + SPAWN_X_OFFSET) as f32, gap_y as f32, gap, rng)
    }

    /// Scroll left by `speed` pixels per nominal frame
    pub fn advance(&mut self, speed: f32, dt: f32) {
        self.pos.x -= speed * dt;
    }

    pub fn is_off_screen(&self) -> bool {
        self.pos.x + (self.width as f32) < -OFFSCREEN_SLACK
    }

    /// Full-size column rects (what a renderer draws): top column down to the
    /// gap, bottom column from the gap to the screen bottom
    pub fn rects(&self) -> (Rect, Rect) {
        let x = self.pos.x as i32;
        let top_h = (self.pos.y - self.gap as f32 / 2.0) as i32;
        let bottom_y = (self.pos.y + self.gap as f32 / 2.0) as i32;
        (
            Rect::new(x, 0, self.width, top_h),
            Rect::new(x, bottom_y, self.width, SCREEN_H - bottom_y),
        )
    }

    /// Column rects narrowed to the collision slit
    pub fn collision_rects(&self) -> (Rect, Rect) {
        let (top, bottom) = self.rects();
        (slit(top), slit(bottom))
    }

    /// Bounding rect of the star, while it is still collectable
    pub fn star_rect(&self) -> Option<Rect> {
        if self.star_collected {
            return None;
        }
        let star_y = self.star_y?;
        let cx = (self.pos.x + self.width as f32 / 2.0) as i32;
        Some(Rect::from_center(cx, star_y as i32, STAR_SIZE, STAR_SIZE))
    }
}

/// Shrink a column to its center slit; degenerate widths stay as they are
fn slit(rect: Rect) -> Rect {
    let new_w = (rect.w as f32 * BERG_HITBOX_SCALE_X) as i32;
    if new_w <= 0 {
        return rect;
    }
    rect.inflate(-(rect.w - new_w), 0)
}

/// The live pairs, in spawn order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IcebergField {
    pub pairs: Vec<IcebergPair>,
}

impl IcebergField {
    pub fn clear(&mut self) {
        self.pairs.clear();
    }

    pub fn spawn(&mut self, gap: i32, rng: &mut Pcg32) {
        self.pairs.push(IcebergPair::spawn(gap, rng));
    }

    pub fn advance(&mut self, speed: f32, dt: f32) {
        for pair in &mut self.pairs {
            pair.advance(speed, dt);
        }
    }

    pub fn prune(&mut self) {
        self.pairs.retain(|pair| !pair.is_off_screen());
    }

    /// Flag pairs whose right edge has scrolled past `x`
    pub fn mark_passed(&mut self, x: i32) {
        for pair in &mut self.pairs {
            if !pair.passed && pair.pos.x + pair.width as f32 <= x as f32 {
                pair.passed = true;
            }
        }
    }

    /// Does `probe` touch any collision slit?
    pub fn hits(&self, probe: &Rect) -> bool {
        self.pairs.iter().any(|pair| {
            let (top, bottom) = pair.collision_rects();
            probe.overlaps(&top) || probe.overlaps(&bottom)
        })
    }

    /// Collect every uncollected star `probe` touches; returns how many
    pub fn collect_stars(&mut self, probe: &Rect) -> u32 {
        let mut collected = 0;
        for pair in &mut self.pairs {
            if let Some(star) = pair.star_rect() {
                if probe.overlaps(&star) {
                    pair.star_collected = true;
                    collected += 1;
                }
            }
        }
        collected
    }
}
