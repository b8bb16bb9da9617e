//! Player identity and persistent record types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Base production rate of a level-1 solar plant.
pub const SOLAR_BASE_PRODUCTION: f64 = 700.0;

/// Base production rate of a level-1 wind turbine.
pub const WIND_BASE_PRODUCTION: f64 = 2100.0;

/// Unique identifier for a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

impl PlayerId {
    /// Create a new player ID
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player:{}", self.0)
    }
}

impl From<u64> for PlayerId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A production structure owned by a player
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Building {
    /// Upgrade level, starts at 1
    pub level: u32,
    /// Number of units built
    pub count: u32,
    /// Output rate per unit
    pub production: f64,
}

impl Building {
    /// Create a building at the given level, count, and production rate
    pub fn new(level: u32, count: u32, production: f64) -> Self {
        Self {
            level,
            count,
            production,
        }
    }
}

/// The fixed set of production structures on a player record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Buildings {
    pub solar: Building,
    pub wind: Building,
}

impl Default for Buildings {
    fn default() -> Self {
        Self {
            solar: Building::new(1, 0, SOLAR_BASE_PRODUCTION),
            wind: Building::new(1, 0, WIND_BASE_PRODUCTION),
        }
    }
}

/// Persistent state for one player
///
/// Created lazily with defaults the first time an id is seen; mutated only
/// by the save operation; never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    /// Unique identifier, immutable after creation
    pub id: PlayerId,
    /// Optional label shown on the leaderboard
    pub display_name: Option<String>,
    /// Energy balance
    pub energy: f64,
    /// Gamma balance
    pub gamma: f64,
    /// TON balance
    pub ton: f64,
    /// Production structures
    pub buildings: Buildings,
    /// Stamped on every successful save; `None` until the first save
    pub last_collected_at: Option<DateTime<Utc>>,
}

impl PlayerRecord {
    /// Create a fresh record with zero balances and default buildings
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            display_name: None,
            energy: 0.0,
            gamma: 0.0,
            ton: 0.0,
            buildings: Buildings::default(),
            last_collected_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id() {
        let id = PlayerId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "player:42");
    }

    #[test]
    fn test_fresh_record_defaults() {
        let record = PlayerRecord::new(PlayerId::new(7));
        assert_eq!(record.energy, 0.0);
        assert_eq!(record.gamma, 0.0);
        assert_eq!(record.ton, 0.0);
        assert_eq!(record.display_name, None);
        assert_eq!(record.last_collected_at, None);
        assert_eq!(record.buildings.solar, Building::new(1, 0, 700.0));
        assert_eq!(record.buildings.wind, Building::new(1, 0, 2100.0));
    }

    #[test]
    fn test_record_json_field_names() {
        let record = PlayerRecord::new(PlayerId::new(1));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], 1);
        assert!(json["lastCollectedAt"].is_null());
        assert_eq!(json["buildings"]["solar"]["production"], 700.0);
    }
}
