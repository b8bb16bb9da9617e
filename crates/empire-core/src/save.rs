//! Partial updates applied by the save operation

use crate::{Buildings, PlayerRecord};
use serde::{Deserialize, Serialize};

/// Fields a client may overwrite in a single save
///
/// Presence is explicit: `None` leaves the stored value untouched, while
/// `Some(0.0)` writes a legitimate zero. `buildings` replaces the whole
/// building set, there is no per-building merge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveData {
    #[serde(default)]
    pub energy: Option<f64>,
    #[serde(default)]
    pub gamma: Option<f64>,
    #[serde(default)]
    pub ton: Option<f64>,
    #[serde(default)]
    pub buildings: Option<Buildings>,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl SaveData {
    /// Overwrite the supplied fields on `record`, leaving the rest alone
    pub fn apply_to(&self, record: &mut PlayerRecord) {
        if let Some(energy) = self.energy {
            record.energy = energy;
        }
        if let Some(gamma) = self.gamma {
            record.gamma = gamma;
        }
        if let Some(ton) = self.ton {
            record.ton = ton;
        }
        if let Some(ref buildings) = self.buildings {
            record.buildings = buildings.clone();
        }
        if let Some(ref name) = self.display_name {
            record.display_name = Some(name.clone());
        }
    }
}
