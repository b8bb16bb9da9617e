//! Empire Core - shared domain model for the Energy Empire backend
//!
//! This crate provides the types shared by the storage layer and the HTTP
//! server:
//! - Player identity (`PlayerId`)
//! - The persistent player record (`PlayerRecord`, `Building`, `Buildings`)
//! - Partial-update semantics for saves (`SaveData`)
//! - The leaderboard projection (`LeaderboardEntry`)
//!
//! Pure data, no I/O: persistence lives in `empire-db`, transport in
//! `empire-server`.

mod leaderboard;
mod player;
mod save;

pub use leaderboard::{LeaderboardEntry, LEADERBOARD_SIZE};
pub use player::{
    Building, Buildings, PlayerId, PlayerRecord, SOLAR_BASE_PRODUCTION, WIND_BASE_PRODUCTION,
};
pub use save::SaveData;
