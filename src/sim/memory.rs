//! The arrow recall game: watch a sequence, play it back
//!
//! One round is ready -> show -> input, ending in success (level up, short
//! pause, next round) or game over. The reveal alternates a visible phase
//! and a blank gap per arrow; playback presses are debounced against a
//! session-wide stamp, so mashing between rounds cannot double-enter.

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::input::FrameInput;
use super::titanic::GameSignal;
use crate::consts::*;

/// One step of a recall sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Arrow {
    Up,
    Down,
}

/// Current phase of a recall session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemoryPhase {
    /// About to deal a fresh sequence
    Ready,
    /// Revealing the sequence one arrow at a time
    Show,
    /// Collecting the player's playback
    Input,
    /// Round cleared, brief pause before the next deal
    Success,
    /// Playback failed
    GameOver,
}

/// Complete recall session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryState {
    pub phase: MemoryPhase,
    /// Sequence length for the current round, starts at 1
    pub level: u32,
    /// Highest fully cleared level; survives restarts and mode switches
    pub best_level: u32,
    pub sequence: Vec<Arrow>,
    /// Which sequence entry the reveal is on
    pub show_index: usize,
    /// True while the current arrow is on screen, false during the blank gap
    pub showing: bool,
    /// Stamp of the last reveal/success phase change
    pub last_change_ms: u64,
    pub inputs: Vec<Arrow>,
    /// Stamp of the last accepted press; persists across rounds
    pub last_input_ms: u64,
    /// Positions where the last failed playback differed
    pub mismatches: Vec<usize>,
    rng: Pcg32,
}

impl MemoryState {
    pub fn new(seed: u64) -> Self {
        Self {
            phase: MemoryPhase::Ready,
            level: 1,
            best_level: 0,
            sequence: Vec::new(),
            show_index: 0,
            showing: false,
            last_change_ms: 0,
            inputs: Vec::new(),
            last_input_ms: 0,
            mismatches: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Back to level 1 with everything cleared except the session best.
    /// The RNG stream carries on.
    pub fn reset_session(&mut self) {
        self.phase = MemoryPhase::Ready;
        self.level = 1;
        self.sequence.clear();
        self.show_index = 0;
        self.showing = false;
        self.last_change_ms = 0;
        self.inputs.clear();
        self.last_input_ms = 0;
        self.mismatches.clear();
    }

    /// Advance one frame
    pub fn tick(&mut self, input: &FrameInput, now_ms: u64) -> GameSignal {
        match self.phase {
            MemoryPhase::Ready => {
                self.sequence = (0..self.level)
                    .map(|_| {
                        if self.rng.random_bool(0.5) {
                            Arrow::Up
                        } else {
                            Arrow::Down
                        }
                    })
                    .collect();
                self.show_index = 0;
                self.showing = true;
                self.last_change_ms = now_ms;
                self.inputs.clear();
                self.mismatches.clear();
                self.phase = MemoryPhase::Show;
            }
            MemoryPhase::Show => {
                if self.showing {
                    if now_ms.saturating_sub(self.last_change_ms) >= MEM_SHOW_MS {
                        self.showing = false;
                        self.last_change_ms = now_ms;
                    }
                } else if now_ms.saturating_sub(self.last_change_ms) >= MEM_GAP_MS {
                    self.show_index += 1;
                    if self.show_index >= self.sequence.len() {
                        self.inputs.clear();
                        self.phase = MemoryPhase::Input;
                    } else {
                        self.showing = true;
                        self.last_change_ms = now_ms;
                    }
                }
            }
            MemoryPhase::Input => {
                // Collect presses; the round is only judged once the whole
                // sequence has been answered
                let mut step = None;
                if now_ms.saturating_sub(self.last_input_ms) >= MEM_DEBOUNCE_MS {
                    if input.pressed_up {
                        step = Some(Arrow::Up);
                    } else if input.pressed_down {
                        step = Some(Arrow::Down);
                    }
                }

                if let Some(arrow) = step {
                    self.last_input_ms = now_ms;
                    self.inputs.push(arrow);

                    if self.inputs.len() >= self.sequence.len() {
                        self.mismatches = self
                            .sequence
                            .iter()
                            .zip(&self.inputs)
                            .enumerate()
                            .filter(|(_, (want, got))| want != got)
                            .map(|(i, _)| i)
                            .collect();
                        if self.mismatches.is_empty() {
                            self.best_level = self.best_level.max(self.level);
                            log::debug!("memory round {} cleared", self.level);
                            self.level += 1;
                            self.last_change_ms = now_ms;
                            self.phase = MemoryPhase::Success;
                        } else {
                            self.best_level = self.best_level.max(self.level.saturating_sub(1));
                            log::info!(
                                "memory run over at level {}, best {}",
                                self.level,
                                self.best_level
                            );
                            self.phase = MemoryPhase::GameOver;
                        }
                    }
                }
            }
            MemoryPhase::Success => {
                if now_ms.saturating_sub(self.last_change_ms) >= MEM_SUCCESS_MS {
                    self.phase = MemoryPhase::Ready;
                }
            }
            MemoryPhase::GameOver => {
                if input.confirm {
                    log::info!("memory session restarted");
                    self.reset_session();
                } else if input.back {
                    return GameSignal::ExitToSelect;
                }
            }
        }
        GameSignal::Continue
    }
}
