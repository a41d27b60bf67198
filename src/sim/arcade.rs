//! Top-level engine: mode selector, shared edge tracking, per-tick routing
//!
//! The selector owns both game machines and the one edge tracker. Levels are
//! turned into edges exactly once per tick, before routing, so holding a
//! button into a screen change cannot re-fire on the next screen. Committing
//! to a game resets its session; backing out of a game-over screen does not.

use serde::{Deserialize, Serialize};

use super::input::{EdgeTracker, TickInput};
use super::memory::MemoryState;
use super::titanic::{GameSignal, TitanicPhase, TitanicState};
use crate::highscores::HighScores;

/// Which screen owns the tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    Select,
    Titanic,
    Memory,
}

/// The whole engine: selector, both games, session leaderboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArcadeState {
    pub mode: Mode,
    pub titanic: TitanicState,
    pub memory: MemoryState,
    /// Best iceberg runs of this process
    pub scores: HighScores,
    edges: EdgeTracker,
}

impl ArcadeState {
    /// Build the engine from one run seed; each game gets its own stream
    pub fn new(seed: u64) -> Self {
        let memory_seed = seed.wrapping_mul(2654435761).wrapping_add(1);
        Self {
            mode: Mode::Select,
            titanic: TitanicState::new(seed),
            memory: MemoryState::new(memory_seed),
            scores: HighScores::new(),
            edges: EdgeTracker::default(),
        }
    }

    /// Advance the whole engine by one frame. `now_ms` is the shell's
    /// monotonic clock; `dt` is normalized so 1.0 is one nominal frame.
    pub fn tick(&mut self, input: &TickInput, now_ms: u64, dt: f32) {
        let dt = dt.max(0.0);
        let frame = self.edges.track(input);

        match self.mode {
            Mode::Select => {
                if frame.pressed_up {
                    log::info!("mode selected: icebergs");
                    self.titanic.reset_session(now_ms);
                    self.titanic.phase = TitanicPhase::Menu;
                    self.mode = Mode::Titanic;
                } else if frame.pressed_down {
                    log::info!("mode selected: memory");
                    self.memory.reset_session();
                    self.mode = Mode::Memory;
                }
            }
            Mode::Titanic => {
                let was_playing = self.titanic.phase == TitanicPhase::Playing;
                let signal = self.titanic.tick(&frame, now_ms, dt);
                if was_playing && self.titanic.phase == TitanicPhase::GameOver {
                    self.record_run(now_ms);
                }
                if signal == GameSignal::ExitToSelect {
                    self.mode = Mode::Select;
                }
            }
            Mode::Memory => {
                if self.memory.tick(&frame, now_ms) == GameSignal::ExitToSelect {
                    self.mode = Mode::Select;
                }
            }
        }
    }

    fn record_run(&mut self, now_ms: u64) {
        let score = self.titanic.score;
        match self.scores.add_run(score, self.titanic.level(), now_ms) {
            Some(1) => log::info!("new top run: {} stars", score),
            Some(rank) => log::debug!("run ranked #{} with {} stars", rank, score),
            None => {}
        }
    }
}
