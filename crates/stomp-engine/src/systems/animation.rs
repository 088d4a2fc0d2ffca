//! Animation selection — a deterministic mapping from physical state to
//! a clip id and mirror flag.
//!
//! Selection uses the facing carried over from the previous frame, so a
//! body still travelling against its facing reads as a skid; facing is
//! then refreshed from the velocity sign for the next frame.

use crate::components::player::{Player, PlayerSize};

/// Velocity magnitudes below this are treated as standing still, so
/// residual sub-pixel velocity cannot flicker the walk pose.
pub const MOVE_EPSILON: f32 = 0.05;

/// Pick the clip id for the player's current physical state.
/// First match wins: dead, duck, airborne, skid, walk, idle.
pub fn select(player: &Player) -> &'static str {
    let vx = player.body.vel.x;
    let moving = vx.abs() > MOVE_EPSILON;
    let airborne = !player.body.grounded;

    if player.dead {
        return pose(player.size, Pose::Jump);
    }
    if player.ducking && player.size == PlayerSize::Big && player.body.grounded {
        // No dedicated duck clip; idle stands in.
        return pose(player.size, Pose::Idle);
    }
    if airborne {
        return pose(player.size, Pose::Jump);
    }

    let turning = moving
        && ((player.facing > 0 && vx < -MOVE_EPSILON) || (player.facing < 0 && vx > MOVE_EPSILON));
    if turning {
        pose(player.size, Pose::Skid)
    } else if moving {
        pose(player.size, Pose::Walk)
    } else {
        pose(player.size, Pose::Idle)
    }
}

/// Run the full per-frame animation pass: select a clip, refresh facing
/// and the mirror flag, and advance the frame cursor. A dead player pins
/// the pose to its first frame.
pub fn apply(player: &mut Player) {
    let id = select(player);

    let vx = player.body.vel.x;
    if vx > MOVE_EPSILON {
        player.facing = 1;
    } else if vx < -MOVE_EPSILON {
        player.facing = -1;
    }
    player.mirror = player.facing < 0;

    player.anim.play_if_different(id);
    if player.dead {
        player.anim.rewind();
    } else {
        player.anim.tick();
    }
}

enum Pose {
    Idle,
    Walk,
    Jump,
    Skid,
}

fn pose(size: PlayerSize, pose: Pose) -> &'static str {
    match (size, pose) {
        (PlayerSize::Small, Pose::Idle) => "small_idle",
        (PlayerSize::Small, Pose::Walk) => "small_walk",
        (PlayerSize::Small, Pose::Jump) => "small_jump",
        (PlayerSize::Small, Pose::Skid) => "small_skid",
        (PlayerSize::Big, Pose::Idle) => "big_idle",
        (PlayerSize::Big, Pose::Walk) => "big_walk",
        (PlayerSize::Big, Pose::Jump) => "big_jump",
        (PlayerSize::Big, Pose::Skid) => "big_skid",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn grounded_player() -> Player {
        let mut p = Player::new(Vec2::new(16.0, 40.0), Vec2::new(8.0, 14.0));
        p.body.grounded = true;
        p
    }

    #[test]
    fn idle_when_still() {
        let p = grounded_player();
        assert_eq!(select(&p), "small_idle");
    }

    #[test]
    fn walks_above_epsilon_only() {
        let mut p = grounded_player();
        p.body.vel.x = 0.04;
        assert_eq!(select(&p), "small_idle");
        p.body.vel.x = 0.06;
        assert_eq!(select(&p), "small_walk");
    }

    #[test]
    fn airborne_beats_walk() {
        let mut p = grounded_player();
        p.body.grounded = false;
        p.body.vel.x = 2.0;
        assert_eq!(select(&p), "small_jump");
    }

    #[test]
    fn dead_beats_everything() {
        let mut p = grounded_player();
        p.dead = true;
        p.body.grounded = false;
        assert_eq!(select(&p), "small_jump");

        // And the cursor stays pinned to the first frame.
        apply(&mut p);
        apply(&mut p);
        assert_eq!(p.anim.frame_index, 0);
    }

    #[test]
    fn skid_is_symmetric() {
        let mut p = grounded_player();
        p.facing = -1;
        p.body.vel.x = 2.0;
        assert_eq!(select(&p), "small_skid");

        p.facing = 1;
        p.body.vel.x = -2.0;
        assert_eq!(select(&p), "small_skid");
    }

    #[test]
    fn ducking_big_player_shows_idle() {
        let mut p = grounded_player();
        p.grow();
        p.body.grounded = true;
        p.ducking = true;
        p.body.vel.x = 2.0;
        assert_eq!(select(&p), "big_idle");
    }

    #[test]
    fn big_prefix_applies() {
        let mut p = grounded_player();
        p.grow();
        p.body.grounded = true;
        p.body.vel.x = 1.0;
        assert_eq!(select(&p), "big_walk");
    }

    #[test]
    fn apply_updates_facing_and_mirror() {
        let mut p = grounded_player();
        p.body.vel.x = -2.0;
        apply(&mut p);
        assert_eq!(p.facing, -1);
        assert!(p.mirror);
        assert_eq!(p.anim.current, "small_skid");

        // Next frame the facing agrees with the motion: plain walk.
        apply(&mut p);
        assert_eq!(p.anim.current, "small_walk");
    }

    #[test]
    fn changing_selection_resets_cursor() {
        let mut p = grounded_player();
        p.anim
            .add("small_walk", crate::components::animation::ClipDef::strip(0, 0, 4, 1));
        p.body.vel.x = 2.0;
        apply(&mut p);
        apply(&mut p);
        assert!(p.anim.frame_index > 0);

        p.body.vel.x = 0.0;
        apply(&mut p);
        assert_eq!(p.anim.current, "small_idle");
        assert_eq!(p.anim.frame_index, 0);
    }
}
