//! The iceberg dodger: ship motion, lives, and the session state machine
//!
//! One session is menu -> playing -> game over. Losing a life mid-run clears
//! the field and respawns the ship with a spawn holdoff; losing the last one
//! freezes the scene for the game-over card. Difficulty is recomputed from
//! the score every tick, never cached.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::difficulty::{gap_for_level, level_for_score, spawn_interval_for_level, speed_for_level};
use super::field::IcebergField;
use super::input::FrameInput;
use super::rect::Rect;
use crate::consts::*;

/// Current phase of a dodger session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TitanicPhase {
    /// Title card, waiting for any start input
    Menu,
    /// Active gameplay
    Playing,
    /// Run ended
    GameOver,
}

/// What an active game asks of the mode selector after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameSignal {
    Continue,
    ExitToSelect,
}

/// The player's ship: fixed horizontal position, player-driven vertical
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub rect: Rect,
}

impl Default for Ship {
    fn default() -> Self {
        Self {
            rect: Rect::from_center(SCREEN_W / 4, SCREEN_H / 2, SHIP_W, SHIP_H),
        }
    }
}

impl Ship {
    /// Integrate held up/down into a rounded pixel delta, then clamp to the
    /// vertical margins. Opposed inputs cancel additively.
    pub fn update(&mut self, up: bool, down: bool, dt: f32) {
        let mut dy = 0.0;
        if up {
            dy -= SHIP_SPEED * dt;
        }
        if down {
            dy += SHIP_SPEED * dt;
        }
        self.rect.y += dy.round() as i32;

        if self.rect.top() < SHIP_MARGIN {
            self.rect.set_top(SHIP_MARGIN);
        }
        if self.rect.bottom() > SCREEN_H - SHIP_MARGIN {
            self.rect.set_bottom(SCREEN_H - SHIP_MARGIN);
        }
    }

    /// Hitbox used against the iceberg slits, 20% smaller per dimension
    pub fn collision_rect(&self) -> Rect {
        let dw = (self.rect.w as f32 * SHIP_HITBOX_SHRINK) as i32;
        let dh = (self.rect.h as f32 * SHIP_HITBOX_SHRINK) as i32;
        self.rect.inflate(-dw, -dh)
    }
}

/// Complete dodger session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitanicState {
    pub phase: TitanicPhase,
    pub ship: Ship,
    pub field: IcebergField,
    pub score: u32,
    pub lives: u8,
    /// Absolute deadline for the next pair spawn
    pub next_spawn_ms: u64,
    rng: Pcg32,
}

impl TitanicState {
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            phase: TitanicPhase::Menu,
            ship: Ship::default(),
            field: IcebergField::default(),
            score: 0,
            lives: INITIAL_LIVES,
            next_spawn_ms: 0,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.reset_session(0);
        state
    }

    /// Wipe the run back to its starting values. The RNG stream carries on;
    /// the phase is left for the caller to set.
    pub fn reset_session(&mut self, now_ms: u64) {
        self.ship = Ship::default();
        self.field.clear();
        self.score = 0;
        self.lives = INITIAL_LIVES;
        self.next_spawn_ms = now_ms + RESPAWN_GRACE_MS;
    }

    /// Difficulty level the current score buys
    pub fn level(&self) -> u32 {
        level_for_score(self.score)
    }

    /// Advance one frame
    pub fn tick(&mut self, input: &FrameInput, now_ms: u64, dt: f32) -> GameSignal {
        match self.phase {
            TitanicPhase::Menu => {
                if input.confirm || input.up || input.down {
                    self.phase = TitanicPhase::Playing;
                }
                GameSignal::Continue
            }
            TitanicPhase::Playing => {
                self.tick_playing(input, now_ms, dt);
                GameSignal::Continue
            }
            TitanicPhase::GameOver => {
                if input.confirm {
                    log::info!("iceberg run restarted");
                    self.reset_session(now_ms);
                    self.phase = TitanicPhase::Playing;
                } else if input.back {
                    return GameSignal::ExitToSelect;
                }
                GameSignal::Continue
            }
        }
    }

    fn tick_playing(&mut self, input: &FrameInput, now_ms: u64, dt: f32) {
        let level = level_for_score(self.score);
        self.ship.update(input.up, input.down, dt);

        if now_ms >= self.next_spawn_ms {
            self.field.spawn(gap_for_level(level), &mut self.rng);
            self.next_spawn_ms = now_ms + spawn_interval_for_level(level);
        }

        self.field.advance(speed_for_level(level), dt);
        self.field.prune();
        self.field.mark_passed(self.ship.rect.left());

        // The screen-edge check is kept alongside the slit test even though
        // the ship clamps itself inside the margins first
        let probe = self.ship.collision_rect();
        let out_of_bounds = self.ship.rect.top() <= 0 || self.ship.rect.bottom() >= SCREEN_H;
        if self.field.hits(&probe) || out_of_bounds {
            self.lives = self.lives.saturating_sub(1);
            if self.lives == 0 {
                log::info!("iceberg run over: score {} at level {}", self.score, level);
                self.phase = TitanicPhase::GameOver;
            } else {
                log::debug!("iceberg hit, {} lives left", self.lives);
                self.ship = Ship::default();
                self.field.clear();
                self.next_spawn_ms = now_ms + RESPAWN_GRACE_MS;
            }
        }

        // Stars are only collectable while the run is still live
        if self.phase == TitanicPhase::Playing {
            let collected = self.field.collect_stars(&self.ship.rect);
            if collected > 0 {
                self.score += collected;
                log::debug!("star collected, score {}", self.score);
            }
        }
    }
}
