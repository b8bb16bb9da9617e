//! Database models for persistent storage.

use crate::error::{Error, Result};
use empire_core::{PlayerId, PlayerRecord};
use native_db::*;
use native_model::{native_model, Model};
use serde::{Deserialize, Serialize};

/// Stored player record in the database.
///
/// The full record is serialized into `data`; `display_name` and `energy`
/// are kept as plain columns so the leaderboard query can project without
/// decoding every record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[native_model(id = 1, version = 1)]
#[native_db]
pub struct StoredPlayer {
    /// Primary key - player ID.
    #[primary_key]
    pub id: u64,
    /// Optional display label.
    pub display_name: Option<String>,
    /// Energy balance, the leaderboard ranking key.
    pub energy: f64,
    /// Serialized full record.
    pub data: Vec<u8>,
}

impl StoredPlayer {
    /// Create from a PlayerRecord.
    pub fn from_record(record: &PlayerRecord) -> Self {
        let data = bincode::serialize(record).unwrap_or_default();
        Self {
            id: record.id.raw(),
            display_name: record.display_name.clone(),
            energy: record.energy,
            data,
        }
    }

    /// Convert back to a PlayerRecord.
    pub fn to_record(&self) -> Result<PlayerRecord> {
        bincode::deserialize(&self.data)
            .map_err(|e| Error::Corrupt(format!("{}: {}", PlayerId::new(self.id), e)))
    }
}
