//! Database store wrapper.

use crate::error::{Error, Result};
use crate::models::StoredPlayer;
use empire_core::{PlayerId, PlayerRecord};
use native_db::*;
use std::path::Path;
use std::sync::LazyLock;

// Static models for the database
static MODELS: LazyLock<Models> = LazyLock::new(|| {
    let mut models = Models::new();
    models.define::<StoredPlayer>().unwrap();
    models
});

/// Database store for persistent player records.
///
/// Constructed once at startup and shared by the request handlers; all
/// methods take `&self`.
pub struct Store {
    pub(crate) db: Database<'static>,
}

impl Store {
    /// Open or create a database at the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let db = Builder::new()
            .create(&MODELS, path.as_ref())
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(Self { db })
    }

    /// Create an in-memory database.
    pub fn in_memory() -> Result<Self> {
        let db = Builder::new()
            .create_in_memory(&MODELS)
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(Self { db })
    }

    /// Load the record for `id`, creating and persisting a default one if
    /// none exists.
    ///
    /// Lookup and creation happen inside one read-write transaction, so
    /// concurrent first-requests for the same unseen id cannot both create.
    pub fn find_or_create(&self, id: PlayerId) -> Result<PlayerRecord> {
        let rw = self.db.rw_transaction()?;
        let stored: Option<StoredPlayer> = rw.get().primary(id.raw())?;
        let record = match stored {
            Some(stored) => stored.to_record()?,
            None => {
                let record = PlayerRecord::new(id);
                rw.insert(StoredPlayer::from_record(&record))?;
                record
            }
        };
        rw.commit()?;
        Ok(record)
    }

    /// Save a player record, overwriting any stored version.
    pub fn save_player(&self, record: &PlayerRecord) -> Result<()> {
        let rw = self.db.rw_transaction()?;
        rw.upsert(StoredPlayer::from_record(record))?;
        rw.commit()?;
        Ok(())
    }

    /// Load a player record by ID.
    pub fn load_player(&self, id: PlayerId) -> Result<Option<PlayerRecord>> {
        let r = self.db.r_transaction()?;
        let stored: Option<StoredPlayer> = r.get().primary(id.raw())?;
        stored.map(|s| s.to_record()).transpose()
    }

    /// Number of stored records.
    pub fn player_count(&self) -> Result<usize> {
        let r = self.db.r_transaction()?;
        let scan = r.scan().primary::<StoredPlayer>()?;
        let iter = scan.all()?;
        Ok(iter.count())
    }
}

impl From<native_db::db_type::Error> for Error {
    fn from(err: native_db::db_type::Error) -> Self {
        Error::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use empire_core::SaveData;

    #[test]
    fn test_find_or_create_defaults() {
        let store = Store::in_memory().unwrap();

        let record = store.find_or_create(PlayerId::new(42)).unwrap();
        assert_eq!(record.id, PlayerId::new(42));
        assert_eq!(record.buildings.solar.production, 700.0);
        assert_eq!(record.buildings.wind.production, 2100.0);
        assert_eq!(record.buildings.solar.level, 1);
        assert_eq!(record.buildings.wind.count, 0);

        // The default record is persisted, not just returned
        let loaded = store.load_player(PlayerId::new(42)).unwrap();
        assert_eq!(loaded, Some(record));
        assert_eq!(store.player_count().unwrap(), 1);
    }

    #[test]
    fn test_find_or_create_is_idempotent() {
        let store = Store::in_memory().unwrap();

        let mut record = store.find_or_create(PlayerId::new(1)).unwrap();
        record.energy = 250.0;
        store.save_player(&record).unwrap();

        // Second resolution returns the saved state, not a fresh default
        let again = store.find_or_create(PlayerId::new(1)).unwrap();
        assert_eq!(again.energy, 250.0);
        assert_eq!(store.player_count().unwrap(), 1);
    }

    #[test]
    fn test_save_and_load() {
        let store = Store::in_memory().unwrap();

        let mut record = store.find_or_create(PlayerId::new(7)).unwrap();
        let data = SaveData {
            energy: Some(100.0),
            ton: Some(1.5),
            ..Default::default()
        };
        data.apply_to(&mut record);
        record.last_collected_at = Some(Utc::now());
        store.save_player(&record).unwrap();

        let loaded = store.load_player(PlayerId::new(7)).unwrap().unwrap();
        assert_eq!(loaded.energy, 100.0);
        assert_eq!(loaded.gamma, 0.0);
        assert_eq!(loaded.ton, 1.5);
        assert!(loaded.last_collected_at.is_some());
    }

    #[test]
    fn test_load_missing_player() {
        let store = Store::in_memory().unwrap();
        assert_eq!(store.load_player(PlayerId::new(99)).unwrap(), None);
    }
}
