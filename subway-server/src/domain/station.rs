//! Station types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a display name is empty or blank.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field} must not be blank")]
pub struct InvalidName {
    field: &'static str,
}

impl InvalidName {
    /// Returns the name of the rejected field.
    pub fn field(&self) -> &'static str {
        self.field
    }
}

/// Trims `value` and rejects it if nothing is left.
pub(crate) fn require_name(field: &'static str, value: &str) -> Result<String, InvalidName> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(InvalidName { field });
    }
    Ok(trimmed.to_string())
}

/// Opaque station identity.
///
/// # Examples
///
/// ```
/// use subway_server::domain::StationId;
///
/// let id = StationId(7);
/// assert_eq!(id.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(pub u64);

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StationId {
    fn from(value: u64) -> Self {
        StationId(value)
    }
}

/// A station: identity plus display name.
///
/// Stations are immutable once created. The name is guaranteed non-blank.
///
/// ```
/// use subway_server::domain::{Station, StationId};
///
/// let gangnam = Station::new(StationId(1), "Gangnam").unwrap();
/// assert_eq!(gangnam.name(), "Gangnam");
///
/// assert!(Station::new(StationId(2), "   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Station {
    id: StationId,
    name: String,
}

impl Station {
    pub fn new(id: StationId, name: &str) -> Result<Self, InvalidName> {
        Ok(Self {
            id,
            name: require_name("station name", name)?,
        })
    }

    pub fn id(&self) -> StationId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
