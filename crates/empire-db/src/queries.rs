//! Common query patterns for the database.

use crate::error::{Error, Result};
use crate::models::StoredPlayer;
use crate::store::Store;
use empire_core::{LeaderboardEntry, PlayerId};

impl Store {
    /// Get the top `limit` players ranked by energy, highest first.
    ///
    /// Ties keep primary-key scan order (stable sort). Projects straight
    /// from the stored columns without decoding record bytes.
    pub fn top_by_energy(&self, limit: usize) -> Result<Vec<LeaderboardEntry>> {
        let r = self.db.r_transaction()?;
        let scan = r.scan().primary::<StoredPlayer>()?;
        let iter = scan.all()?;
        let players: std::result::Result<Vec<StoredPlayer>, _> = iter.collect();
        let mut players = players.map_err(|e| Error::Database(e.to_string()))?;

        players.sort_by(|a, b| {
            b.energy
                .partial_cmp(&a.energy)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        Ok(players
            .into_iter()
            .take(limit)
            .map(|p| LeaderboardEntry {
                user_id: PlayerId::new(p.id),
                display_name: p.display_name,
                energy: p.energy,
            })
            .collect())
    }
}
