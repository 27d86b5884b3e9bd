// Thread-safe owner of the single player aggregate.

use crate::domain::navigation::destination;
use crate::domain::{Player, PlayerError, PlayerView, Velocity};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Serializes every read and write of the player behind one lock.
///
/// Position and velocity are guarded together so the navigator never sees a torn
/// update. The lock is only held for field copies and the navigation math.
#[derive(Debug)]
pub struct PlayerState {
    player: Mutex<Player>,
}

impl PlayerState {
    pub fn new(player: Player) -> Self {
        Self {
            player: Mutex::new(player),
        }
    }

    /// Moves the player along its current great circle for `hours` of travel.
    /// Altitude is left unchanged.
    pub fn advance(&self, hours: f64) {
        let mut player = self.lock();
        let Player {
            position, velocity, ..
        } = &mut *player;
        let (lat, lon) = destination(
            position.lat,
            position.lon,
            velocity.bearing,
            velocity.kph,
            hours,
        );
        position.lat = lat;
        position.lon = lon;
    }

    /// Replaces the velocity. Bearing range is not enforced here; callers at the
    /// boundary normalize it.
    pub fn set_velocity(&self, bearing: f64, kph: f64) -> Result<Velocity, PlayerError> {
        if !bearing.is_finite() || !kph.is_finite() || kph < 0.0 {
            return Err(PlayerError::InvalidVelocity { bearing, kph });
        }

        let velocity = Velocity { bearing, kph };
        self.lock().velocity = velocity;
        Ok(velocity)
    }

    pub fn snapshot(&self) -> PlayerView {
        PlayerView::from(&*self.lock())
    }

    // Validation always runs before mutation, so a poisoned guard still holds
    // consistent data.
    fn lock(&self) -> MutexGuard<'_, Player> {
        self.player.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
