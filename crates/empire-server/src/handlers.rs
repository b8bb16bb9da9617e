//! Request handlers
//!
//! Each handler is a pure transformation of the resolved record plus the
//! request payload into a stored record and/or response body. The store
//! handle is passed in explicitly; handlers keep no state of their own.

use crate::error::Result;
use chrono::{DateTime, Utc};
use empire_core::{Buildings, LeaderboardEntry, PlayerId, SaveData, LEADERBOARD_SIZE};
use empire_db::Store;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/save`.
///
/// `userId` may instead arrive as a query parameter; the router resolves
/// that before calling the handler.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRequest {
    #[serde(default)]
    pub user_id: Option<u64>,
    #[serde(flatten)]
    pub data: SaveData,
}

/// Body of a successful save.
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub success: bool,
}

/// Body of `GET /api/data`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadResponse {
    pub energy: f64,
    pub gamma: f64,
    pub ton: f64,
    pub buildings: Buildings,
    pub last_collected_at: Option<DateTime<Utc>>,
}

/// Overwrite the supplied fields on the resolved record and stamp the
/// save time.
pub fn save(store: &Store, user_id: PlayerId, data: &SaveData) -> Result<SaveResponse> {
    let mut record = store.find_or_create(user_id)?;
    data.apply_to(&mut record);
    record.last_collected_at = Some(Utc::now());
    store.save_player(&record)?;
    Ok(SaveResponse { success: true })
}

/// Return the resolved record's balances, buildings, and last save time.
pub fn load(store: &Store, user_id: PlayerId) -> Result<LoadResponse> {
    let record = store.find_or_create(user_id)?;
    Ok(LoadResponse {
        energy: record.energy,
        gamma: record.gamma,
        ton: record.ton,
        buildings: record.buildings,
        last_collected_at: record.last_collected_at,
    })
}

/// Return the top players ranked by energy.
pub fn leaderboard(store: &Store) -> Result<Vec<LeaderboardEntry>> {
    Ok(store.top_by_energy(LEADERBOARD_SIZE)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_creates_then_overwrites() {
        let store = Store::in_memory().unwrap();

        let data = SaveData {
            energy: Some(100.0),
            ..Default::default()
        };
        let response = save(&store, PlayerId::new(42), &data).unwrap();
        assert!(response.success);

        let record = store.load_player(PlayerId::new(42)).unwrap().unwrap();
        assert_eq!(record.energy, 100.0);
        assert_eq!(record.gamma, 0.0);
        assert_eq!(record.ton, 0.0);
        assert_eq!(record.buildings, Buildings::default());
        assert!(record.last_collected_at.is_some());
    }

    #[test]
    fn test_save_stamps_time_even_for_empty_payload() {
        let store = Store::in_memory().unwrap();

        save(&store, PlayerId::new(1), &SaveData::default()).unwrap();
        let first = store
            .load_player(PlayerId::new(1))
            .unwrap()
            .unwrap()
            .last_collected_at
            .unwrap();

        save(&store, PlayerId::new(1), &SaveData::default()).unwrap();
        let second = store
            .load_player(PlayerId::new(1))
            .unwrap()
            .unwrap()
            .last_collected_at
            .unwrap();

        assert!(second >= first);
    }

    #[test]
    fn test_save_zero_balance_is_stored() {
        let store = Store::in_memory().unwrap();

        let data = SaveData {
            energy: Some(100.0),
            ..Default::default()
        };
        save(&store, PlayerId::new(3), &data).unwrap();

        let data = SaveData {
            energy: Some(0.0),
            ..Default::default()
        };
        save(&store, PlayerId::new(3), &data).unwrap();

        let record = store.load_player(PlayerId::new(3)).unwrap().unwrap();
        assert_eq!(record.energy, 0.0);
    }

    #[test]
    fn test_load_lazily_creates_defaults() {
        let store = Store::in_memory().unwrap();

        let response = load(&store, PlayerId::new(9)).unwrap();
        assert_eq!(response.energy, 0.0);
        assert_eq!(response.buildings.solar.production, 700.0);
        assert_eq!(response.buildings.wind.production, 2100.0);
        assert_eq!(response.last_collected_at, None);

        assert_eq!(store.player_count().unwrap(), 1);
    }

    #[test]
    fn test_leaderboard_caps_at_ten() {
        let store = Store::in_memory().unwrap();
        for id in 0..12 {
            let data = SaveData {
                energy: Some(id as f64),
                ..Default::default()
            };
            save(&store, PlayerId::new(id), &data).unwrap();
        }

        let top = leaderboard(&store).unwrap();
        assert_eq!(top.len(), 10);
        assert_eq!(top[0].energy, 11.0);
    }
}
