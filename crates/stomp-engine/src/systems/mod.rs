pub mod animation;
pub mod interaction;
pub mod kinematics;
