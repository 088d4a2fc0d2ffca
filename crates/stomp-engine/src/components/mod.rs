pub mod animation;
pub mod block;
pub mod collectible;
pub mod enemy;
pub mod platform;
pub mod player;
pub mod portal;
