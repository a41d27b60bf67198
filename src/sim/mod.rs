//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, driven by the caller's clock
//! - Seeded RNG only
//! - Stable iteration order (pairs in spawn order)
//! - No rendering or platform dependencies

pub mod arcade;
pub mod difficulty;
pub mod field;
pub mod input;
pub mod memory;
pub mod rect;
pub mod snapshot;
pub mod titanic;

pub use arcade::{ArcadeState, Mode};
pub use difficulty::{gap_for_level, level_for_score, spawn_interval_for_level, speed_for_level};
pub use field::{IcebergField, IcebergPair};
pub use input::{EdgeTracker, FrameInput, InputSource, NoDevice, TickInput};
pub use memory::{Arrow, MemoryPhase, MemoryState};
pub use rect::Rect;
pub use snapshot::{BergView, MemorySnapshot, RenderSnapshot, RevealView, TitanicSnapshot};
pub use titanic::{GameSignal, Ship, TitanicPhase, TitanicState};
