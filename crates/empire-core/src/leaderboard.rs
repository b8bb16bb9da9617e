//! Leaderboard projection

use crate::{PlayerId, PlayerRecord};
use serde::{Deserialize, Serialize};

/// Maximum number of entries returned by the leaderboard
pub const LEADERBOARD_SIZE: usize = 10;

/// One row of the energy leaderboard
///
/// Projects only the fields the ranking needs; balances other than energy
/// never leave the store through this path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub user_id: PlayerId,
    pub display_name: Option<String>,
    pub energy: f64,
}

impl From<&PlayerRecord> for LeaderboardEntry {
    fn from(record: &PlayerRecord) -> Self {
        Self {
            user_id: record.id,
            display_name: record.display_name.clone(),
            energy: record.energy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection() {
        let mut record = PlayerRecord::new(PlayerId::new(9));
        record.display_name = Some("ada".to_string());
        record.energy = 420.0;
        record.gamma = 7.0;

        let entry = LeaderboardEntry::from(&record);
        assert_eq!(entry.user_id, PlayerId::new(9));
        assert_eq!(entry.display_name.as_deref(), Some("ada"));
        assert_eq!(entry.energy, 420.0);

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["userId"], 9);
        assert_eq!(json["displayName"], "ada");
        assert!(json.get("gamma").is_none());
    }
}
