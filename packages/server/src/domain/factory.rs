//! Domain factories for generating session identity and spawn state.

use rand::Rng;

use super::value_object::{Color, Position, SessionId};

/// Half-extent of the square spawn region: x and z land within
/// `[-SPAWN_HALF_EXTENT, SPAWN_HALF_EXTENT]`.
pub const SPAWN_HALF_EXTENT: f64 = 8.0;

/// Spawn height above the floor plane.
pub const SPAWN_HEIGHT: f64 = 0.5;

/// Factory for generating SessionId instances.
///
/// Encapsulates the generation concern, separated from the validation
/// logic in SessionId.
pub struct SessionIdFactory;

impl SessionIdFactory {
    /// Generate a new SessionId backed by a random UUID v4.
    pub fn generate() -> SessionId {
        SessionId::from_uuid(uuid::Uuid::new_v4())
    }
}

/// Factory for the random state a session starts with.
///
/// Randomness is uniform but not cryptographic, and no uniqueness is
/// enforced across simultaneous sessions.
pub struct SpawnFactory;

impl SpawnFactory {
    /// Random spawn point within the square region, at fixed height.
    pub fn spawn_position() -> Position {
        let mut rng = rand::rng();
        let x = rng.random_range(-SPAWN_HALF_EXTENT..=SPAWN_HALF_EXTENT);
        let z = rng.random_range(-SPAWN_HALF_EXTENT..=SPAWN_HALF_EXTENT);
        Position::new(x, SPAWN_HEIGHT, z)
    }

    /// Uniformly random 24-bit RGB color.
    pub fn random_color() -> Color {
        let mut rng = rand::rng();
        Color::from_rgb(rng.random::<u8>(), rng.random::<u8>(), rng.random::<u8>())
    }
}
