//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::ValueObjectError;

/// Session identifier value object.
///
/// Opaque unique identifier for one live connection, generated at connect
/// time and never reused. Backed by a UUID v4 string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    /// Create a new SessionId from an existing string.
    ///
    /// # Arguments
    ///
    /// * `id` - The session identifier string
    ///
    /// # Returns
    ///
    /// A Result containing the SessionId or an error if validation fails
    pub fn new(id: String) -> Result<Self, ValueObjectError> {
        if id.is_empty() {
            return Err(ValueObjectError::SessionIdEmpty);
        }
        if uuid::Uuid::parse_str(&id).is_err() {
            return Err(ValueObjectError::SessionIdInvalidFormat(id));
        }
        Ok(Self(id))
    }

    /// Create a SessionId from a UUID (infallible).
    pub fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid.to_string())
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 3D position value object.
///
/// Three numeric components; `y` is conventionally the height above the
/// floor plane. Construction via `parse` rejects non-finite components so
/// the registry never holds NaN coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    x: f64,
    y: f64,
    z: f64,
}

impl Position {
    /// Create a new Position.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Parse the `<x>,<y>,<z>` wire form of a position update.
    ///
    /// # Returns
    ///
    /// A Result containing the Position, or an error when the payload does
    /// not split into exactly three finite decimal numbers
    pub fn parse(components: &str) -> Result<Self, ValueObjectError> {
        let parts: Vec<&str> = components.split(',').collect();
        if parts.len() != 3 {
            return Err(ValueObjectError::PositionInvalidFormat(
                components.to_string(),
            ));
        }

        let mut values = [0.0f64; 3];
        for (value, part) in values.iter_mut().zip(&parts) {
            *value = part
                .trim()
                .parse::<f64>()
                .map_err(|_| ValueObjectError::PositionInvalidFormat(components.to_string()))?;
            if !value.is_finite() {
                return Err(ValueObjectError::PositionNotFinite(components.to_string()));
            }
        }

        Ok(Self::new(values[0], values[1], values[2]))
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    /// Components as `[x, y, z]`, the order used on the wire.
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// 24-bit RGB color value object.
///
/// Assigned once at connect time and immutable for the session's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(u32);

impl Color {
    /// Create a new Color from a packed 24-bit value.
    ///
    /// # Returns
    ///
    /// A Result containing the Color or an error if the value exceeds 24 bits
    pub fn new(value: u32) -> Result<Self, ValueObjectError> {
        if value > 0xFF_FFFF {
            return Err(ValueObjectError::ColorOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Create a Color from RGB channels (infallible).
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self((u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b))
    }

    /// Get the packed 24-bit value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}
