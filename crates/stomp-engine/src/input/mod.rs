//! Per-frame input snapshot.
//!
//! The host polls its controller/keyboard backend and hands the simulation
//! one [`Pad`] per frame. Held buttons are level-triggered; the `*_pressed`
//! fields are one-shot edges that are true only on the frame the button
//! went down. [`PadTracker`] derives those edges for hosts whose input
//! layer only reports held state.

/// Digital input state for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pad {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub jump: bool,
    pub jump_pressed: bool,
    pub run: bool,
    pub run_pressed: bool,
    pub boost: bool,
    pub boost_pressed: bool,
    pub start: bool,
    pub select: bool,
}

/// Derives one-shot press edges from successive held-state snapshots.
#[derive(Debug, Default)]
pub struct PadTracker {
    prev_jump: bool,
    prev_run: bool,
    prev_boost: bool,
}

impl PadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill in the `*_pressed` edges of a held-state snapshot.
    pub fn snapshot(&mut self, mut held: Pad) -> Pad {
        held.jump_pressed = held.jump && !self.prev_jump;
        held.run_pressed = held.run && !self.prev_run;
        held.boost_pressed = held.boost && !self.prev_boost;
        self.prev_jump = held.jump;
        self.prev_run = held.run;
        self.prev_boost = held.boost;
        held
    }
}
