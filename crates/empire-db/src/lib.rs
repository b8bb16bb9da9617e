//! Empire DB - player record storage using native_db
//!
//! Provides persistent storage for:
//! - Player records (balances, buildings, last-save stamp)
//! - The energy leaderboard query

mod error;
mod models;
mod queries;
mod store;

pub use error::{Error, Result};
pub use store::Store;
