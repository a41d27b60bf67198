//! Shared input layer: raw per-tick levels and rising-edge derivation
//!
//! Shells poll whatever they have (keyboard, a two-button serial pad) and
//! hand the engine one OR-combined reading per tick. Edges are derived once
//! per tick in one place, so every consumer sees the same pressed events.
//! Debouncing is not done here; the memory game applies its own window on
//! top of these edges.

use serde::{Deserialize, Serialize};

/// Raw input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Up held this tick
    pub up: bool,
    /// Down held this tick
    pub down: bool,
    /// Start/restart command (space, enter or R on a keyboard)
    pub confirm: bool,
    /// Abandon to the mode selector (M on a keyboard)
    pub back: bool,
}

/// A per-tick (up, down) level source: keyboard snapshot, serial pad, or an
/// OR-combination. Sources never fail; absence reads as all-released.
pub trait InputSource {
    fn poll(&mut self) -> (bool, bool);
}

/// The degraded source standing in for an absent device
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDevice;

impl InputSource for NoDevice {
    fn poll(&mut self) -> (bool, bool) {
        (false, false)
    }
}

/// One-frame memory turning held levels into rising edges
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct EdgeTracker {
    prev_up: bool,
    prev_down: bool,
}

/// Levels plus the edges derived from them, handed to the game machines
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub up: bool,
    pub down: bool,
    /// Up went from released to held this tick
    pub pressed_up: bool,
    /// Down went from released to held this tick
    pub pressed_down: bool,
    pub confirm: bool,
    pub back: bool,
}

impl EdgeTracker {
    /// Derive this tick's pressed events and remember the levels for the next
    pub fn track(&mut self, input: &TickInput) -> FrameInput {
        let frame = FrameInput {
            up: input.up,
            down: input.down,
            pressed_up: input.up && !self.prev_up,
            pressed_down: input.down && !self.prev_down,
            confirm: input.confirm,
            back: input.back,
        };
        self.prev_up = input.up;
        self.prev_down = input.down;
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn levels(up: bool, down: bool) -> TickInput {
        TickInput {
            up,
            down,
            ..TickInput::default()
        }
    }

    #[test]
    fn test_edge_fires_once_while_held() {
        let mut edges = EdgeTracker::default();
        let first = edges.track(&levels(true, false));
        assert!(first.pressed_up);
        // Held across the next two ticks: level stays, edge does not
        for _ in 0..2 {
            let next = edges.track(&levels(true, false));
            assert!(next.up);
            assert!(!next.pressed_up);
        }
    }

    #[test]
    fn test_release_rearms_edge() {
        let mut edges = EdgeTracker::default();
        assert!(edges.track(&levels(false, true)).pressed_down);
        assert!(!edges.track(&levels(false, true)).pressed_down);
        assert!(!edges.track(&levels(false, false)).pressed_down);
        assert!(edges.track(&levels(false, true)).pressed_down);
    }

    #[test]
    fn test_axes_tracked_independently() {
        let mut edges = EdgeTracker::default();
        edges.track(&levels(true, false));
        // Up still held, down newly pressed
        let frame = edges.track(&levels(true, true));
        assert!(!frame.pressed_up);
        assert!(frame.pressed_down);
    }

    #[test]
    fn test_commands_pass_through() {
        let mut edges = EdgeTracker::default();
        let frame = edges.track(&TickInput {
            confirm: true,
            back: true,
            ..TickInput::default()
        });
        assert!(frame.confirm);
        assert!(frame.back);
    }

    #[test]
    fn test_no_device_reads_released() {
        assert_eq!(NoDevice.poll(), (false, false));
    }
}
