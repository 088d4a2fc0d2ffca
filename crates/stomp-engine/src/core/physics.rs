//! Axis-separated collision resolution against the tile grid.
//!
//! Movement is resolved one axis at a time: advance by the full velocity,
//! and if the body's AABB now overlaps a solid tile, revert and walk back
//! toward the obstruction in fixed quarter-unit increments until flush.
//! Discrete per-frame resolution, not a continuous sweep.

use glam::Vec2;

use crate::core::grid::CollisionGrid;

/// Downward acceleration applied per frame to every falling entity.
pub const GRAVITY: f32 = 0.35;

/// Pushout increment in logical units.
pub const PUSHOUT_STEP: f32 = 0.25;

/// Shared kinematic state embedded in every moving entity.
///
/// Positions are top-left-origin logical pixels; `size` is the AABB extent.
#[derive(Debug, Clone, Copy)]
pub struct Body {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    /// Set by [`step`]: the body ended the frame standing on solid ground.
    pub grounded: bool,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            vel: Vec2::ZERO,
            grounded: false,
        }
    }

    /// Bottom-right corner of the AABB.
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    /// AABB overlap test against another body.
    pub fn overlaps(&self, other: &Body) -> bool {
        aabb_overlap(self.pos, self.size, other.pos, other.size)
    }
}

/// Strict AABB overlap between two rectangles.
pub fn aabb_overlap(pos_a: Vec2, size_a: Vec2, pos_b: Vec2, size_b: Vec2) -> bool {
    pos_a.x < pos_b.x + size_b.x
        && pos_a.x + size_a.x > pos_b.x
        && pos_a.y < pos_b.y + size_b.y
        && pos_a.y + size_a.y > pos_b.y
}

/// Interpenetration depth per axis for two overlapping rectangles.
///
/// Both components are positive when the rectangles overlap; the smaller
/// one picks the resolution axis for static obstacles.
pub fn overlap_depths(pos_a: Vec2, size_a: Vec2, pos_b: Vec2, size_b: Vec2) -> Vec2 {
    Vec2::new(
        (pos_a.x + size_a.x).min(pos_b.x + size_b.x) - pos_a.x.max(pos_b.x),
        (pos_a.y + size_a.y).min(pos_b.y + size_b.y) - pos_a.y.max(pos_b.y),
    )
}

/// Whether the body's AABB overlaps any solid tile.
///
/// The footprint spans every tile the box touches; the -1 on the far edge
/// keeps a box flush against a tile boundary out of the next tile over.
pub fn overlaps_grid(body: &Body, grid: &CollisionGrid, tile: f32) -> bool {
    let x0 = (body.pos.x / tile).floor() as i32;
    let y0 = (body.pos.y / tile).floor() as i32;
    let x1 = ((body.pos.x + body.size.x - 1.0) / tile).floor() as i32;
    let y1 = ((body.pos.y + body.size.y - 1.0) / tile).floor() as i32;
    for ty in y0..=y1 {
        for tx in x0..=x1 {
            if grid.solid(tx, ty) {
                return true;
            }
        }
    }
    false
}

/// Whether the tile row directly beneath the body's feet is solid.
pub fn touching_ground(body: &Body, grid: &CollisionGrid, tile: f32) -> bool {
    let feet = ((body.pos.y + body.size.y) / tile).floor() as i32;
    let x0 = (body.pos.x / tile).floor() as i32;
    let x1 = ((body.pos.x + body.size.x - 1.0) / tile).floor() as i32;
    (x0..=x1).any(|tx| grid.solid(tx, feet))
}

/// Advance one axis by its velocity and push out of any solid tile.
///
/// On collision the full displacement is reverted, then the body steps
/// toward the obstruction in `PUSHOUT_STEP` increments until it would
/// overlap, backs off one increment, and zeroes that axis' velocity.
/// The loop is capped so a body that starts the frame already embedded
/// cannot spin forever; it backs off one increment and stops instead.
fn resolve_axis(body: &mut Body, grid: &CollisionGrid, tile: f32, axis: usize) {
    let v = body.vel[axis];
    if v == 0.0 {
        return;
    }
    body.pos[axis] += v;
    if !overlaps_grid(body, grid, tile) {
        return;
    }
    body.pos[axis] -= v;

    let inc = v.signum() * PUSHOUT_STEP;
    let max_steps = (v.abs() / PUSHOUT_STEP).ceil() as u32 + 1;
    for _ in 0..max_steps {
        if overlaps_grid(body, grid, tile) {
            break;
        }
        body.pos[axis] += inc;
    }
    body.pos[axis] -= inc;
    body.vel[axis] = 0.0;
}

/// Resolve one frame of movement against the grid, horizontal axis first.
///
/// `grounded` is computed in two steps: `was_falling` is sampled before
/// vertical resolution, so a body moving upward never reports grounded
/// even if it ends the frame flush against a floor tile.
pub fn step(body: &mut Body, grid: &CollisionGrid, tile: f32) {
    resolve_axis(body, grid, tile, 0);
    let was_falling = body.vel.y > 0.0;
    resolve_axis(body, grid, tile, 1);
    body.grounded = was_falling && touching_ground(body, grid, tile);
}
