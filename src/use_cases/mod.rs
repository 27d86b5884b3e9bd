// Use cases layer: player state ownership and the travel driver.

pub mod player_state;
pub mod travel;

pub use player_state::PlayerState;
pub use travel::travel_task;
