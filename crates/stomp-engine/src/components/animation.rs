//! Frame-cursor animation state.
//!
//! The simulation runs at a fixed frame rate, so clips are timed in whole
//! simulation frames rather than seconds. The clip id is authoritative
//! state even when no frame data is registered: a headless host can drive
//! the selector and read [`AnimationState::current`] without ever loading
//! sprite sheets.

use std::collections::HashMap;

/// A named frame sequence. Frames are (col, row) cells in a sprite atlas.
#[derive(Debug, Clone)]
pub struct ClipDef {
    pub frames: Vec<(u32, u32)>,
    /// Simulation frames each cell is held for.
    pub hold: u32,
    /// Whether to loop when reaching the end.
    pub looping: bool,
}

impl ClipDef {
    /// Consecutive atlas columns in one row.
    pub fn strip(row: u32, start_col: u32, frame_count: u32, hold: u32) -> Self {
        Self {
            frames: (0..frame_count).map(|i| (start_col + i, row)).collect(),
            hold: hold.max(1),
            looping: true,
        }
    }

    pub fn from_frames(frames: Vec<(u32, u32)>, hold: u32, looping: bool) -> Self {
        Self {
            frames,
            hold: hold.max(1),
            looping,
        }
    }
}

/// Current clip and frame cursor for one entity.
#[derive(Debug, Clone, Default)]
pub struct AnimationState {
    clips: HashMap<String, ClipDef>,
    /// Id of the active clip. Selecting a different id resets the cursor.
    pub current: String,
    pub frame_index: usize,
    frame_timer: u32,
}

impl AnimationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register frame data for a clip id. Optional for headless use.
    pub fn add(&mut self, name: impl Into<String>, def: ClipDef) {
        self.clips.insert(name.into(), def);
    }

    /// Switch to a clip and rewind its cursor to the first frame.
    pub fn play(&mut self, name: &str) {
        self.current = name.to_string();
        self.rewind();
    }

    /// Switch clips only when the id changes, so an unchanged selection
    /// keeps its cursor running.
    pub fn play_if_different(&mut self, name: &str) {
        if self.current != name {
            self.play(name);
        }
    }

    /// Reset the cursor to the first frame without changing clips.
    pub fn rewind(&mut self) {
        self.frame_index = 0;
        self.frame_timer = 0;
    }

    /// Advance the cursor by one simulation frame.
    pub fn tick(&mut self) {
        let Some(def) = self.clips.get(&self.current) else {
            return;
        };
        if def.frames.is_empty() {
            return;
        }
        self.frame_timer += 1;
        if self.frame_timer < def.hold {
            return;
        }
        self.frame_timer = 0;
        if self.frame_index + 1 < def.frames.len() {
            self.frame_index += 1;
        } else if def.looping {
            self.frame_index = 0;
        }
    }

    /// Atlas cell of the current frame, if frame data is registered.
    pub fn current_cell(&self) -> Option<(u32, u32)> {
        self.clips
            .get(&self.current)
            .and_then(|def| def.frames.get(self.frame_index).copied())
    }
}
