//! Render snapshots: everything a drawing shell needs, nothing it owns
//!
//! Snapshots are plain data captured from the engine on demand. Geometry
//! comes out as screen rects, and the memory reveal carries a progress
//! value so shells can animate the current arrow without re-deriving any
//! timing rules.

use serde::Serialize;

use super::arcade::{ArcadeState, Mode};
use super::memory::{Arrow, MemoryPhase, MemoryState};
use super::rect::Rect;
use super::titanic::{TitanicPhase, TitanicState};
use crate::consts::*;

/// One iceberg pair as the renderer sees it
#[derive(Debug, Clone, Serialize)]
pub struct BergView {
    pub top: Rect,
    pub bottom: Rect,
    /// Present while the star is still collectable
    pub star: Option<Rect>,
    pub passed: bool,
}

/// The dodger scene
#[derive(Debug, Clone, Serialize)]
pub struct TitanicSnapshot {
    pub phase: TitanicPhase,
    pub ship: Rect,
    pub bergs: Vec<BergView>,
    pub score: u32,
    pub lives: u8,
    pub level: u32,
}

/// The arrow currently revealed
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RevealView {
    pub index: usize,
    pub arrow: Arrow,
    /// 0.0 at onset, 1.0 at the end of the visible phase
    pub progress: f32,
}

/// The recall scene
#[derive(Debug, Clone, Serialize)]
pub struct MemorySnapshot {
    pub phase: MemoryPhase,
    pub level: u32,
    pub best_level: u32,
    pub sequence: Vec<Arrow>,
    pub inputs: Vec<Arrow>,
    pub mismatches: Vec<usize>,
    /// Present only while an arrow is on screen during the reveal
    pub reveal: Option<RevealView>,
    /// Rounds fully cleared so far this session
    pub rounds_cleared: u32,
}

/// Everything a shell needs to draw one frame
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RenderSnapshot {
    Select,
    Titanic(TitanicSnapshot),
    Memory(MemorySnapshot),
}

impl RenderSnapshot {
    /// Capture the active screen for drawing
    pub fn capture(state: &ArcadeState, now_ms: u64) -> Self {
        match state.mode {
            Mode::Select => RenderSnapshot::Select,
            Mode::Titanic => RenderSnapshot::Titanic(TitanicSnapshot::capture(&state.titanic)),
            Mode::Memory => RenderSnapshot::Memory(MemorySnapshot::capture(&state.memory, now_ms)),
        }
    }
}

impl TitanicSnapshot {
    fn capture(state: &TitanicState) -> Self {
        let bergs = state
            .field
            .pairs
            .iter()
            .map(|pair| {
                let (top, bottom) = pair.rects();
                BergView {
                    top,
                    bottom,
                    star: pair.star_rect(),
                    passed: pair.passed,
                }
            })
            .collect();

        Self {
            phase: state.phase,
            ship: state.ship.rect,
            bergs,
            score: state.score,
            lives: state.lives,
            level: state.level(),
        }
    }
}

impl MemorySnapshot {
    fn capture(state: &MemoryState, now_ms: u64) -> Self {
        let reveal = if state.phase == MemoryPhase::Show && state.showing {
            state.sequence.get(state.show_index).map(|&arrow| {
                let elapsed = now_ms.saturating_sub(state.last_change_ms) as f32;
                RevealView {
                    index: state.show_index,
                    arrow,
                    progress: (elapsed / MEM_SHOW_MS as f32).clamp(0.0, 1.0),
                }
            })
        } else {
            None
        };

        Self {
            phase: state.phase,
            level: state.level,
            best_level: state.best_level,
            sequence: state.sequence.clone(),
            inputs: state.inputs.clone(),
            mismatches: state.mismatches.clone(),
            reveal,
            rounds_cleared: state.level.saturating_sub(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::input::{FrameInput, TickInput};

    #[test]
    fn test_selector_screen_snapshot() {
        let arcade = ArcadeState::new(1);
        let snap = RenderSnapshot::capture(&arcade, 0);
        assert!(matches!(snap, RenderSnapshot::Select));
    }

    #[test]
    fn test_dodger_snapshot_carries_scene_geometry() {
        let mut arcade = ArcadeState::new(1);
        let up = TickInput {
            up: true,
            ..TickInput::default()
        };
        // Commit to the dodger, start from its menu, run to the first spawn
        arcade.tick(&up, 0, 1.0);
        arcade.tick(&up, 1000, 1.0);
        arcade.tick(&TickInput::default(), 1100, 1.0);
        assert_eq!(arcade.titanic.field.pairs.len(), 1);

        let snap = RenderSnapshot::capture(&arcade, 1100);
        let scene = match snap {
            RenderSnapshot::Titanic(scene) => scene,
            other => panic!("expected the dodger scene, got {:?}", other),
        };

        assert_eq!(scene.phase, TitanicPhase::Playing);
        assert_eq!(scene.ship, arcade.titanic.ship.rect);
        assert_eq!(scene.score, 0);
        assert_eq!(scene.lives, 3);
        assert_eq!(scene.level, 1);

        let pair = &arcade.titanic.field.pairs[0];
        let (top, bottom) = pair.rects();
        assert_eq!(scene.bergs[0].top, top);
        assert_eq!(scene.bergs[0].bottom, bottom);
        assert_eq!(scene.bergs[0].star, pair.star_rect());
    }

    #[test]
    fn test_reveal_progress_tracks_the_visible_phase() {
        let mut memory = MemoryState::new(5);
        memory.tick(&FrameInput::default(), 1000);

        let snap = MemorySnapshot::capture(&memory, 1325);
        let reveal = snap.reveal.expect("an arrow is on screen");
        assert_eq!(reveal.index, 0);
        assert_eq!(reveal.arrow, memory.sequence[0]);
        assert!((reveal.progress - 0.5).abs() < 1e-3);

        // During the blank gap there is nothing to draw
        memory.tick(&FrameInput::default(), 1650);
        let snap = MemorySnapshot::capture(&memory, 1700);
        assert!(snap.reveal.is_none());
        assert_eq!(snap.phase, MemoryPhase::Show);
    }

    #[test]
    fn test_snapshots_serialize_with_a_mode_tag() {
        let arcade = ArcadeState::new(1);
        let value = serde_json::to_value(RenderSnapshot::capture(&arcade, 0)).unwrap();
        assert_eq!(value["mode"], "select");

        let mut arcade = ArcadeState::new(1);
        arcade.tick(
            &TickInput {
                down: true,
                ..TickInput::default()
            },
            0,
            1.0,
        );
        let value = serde_json::to_value(RenderSnapshot::capture(&arcade, 0)).unwrap();
        assert_eq!(value["mode"], "memory");
        assert_eq!(value["level"], 1);
    }
}
