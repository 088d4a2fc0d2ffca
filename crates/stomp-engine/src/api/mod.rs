pub mod events;
pub mod sim;
