// Domain layer: navigation math and player value types.

pub mod errors;
pub mod navigation;
pub mod player;

pub use errors::PlayerError;
pub use player::{Player, PlayerView, Position, Velocity};
