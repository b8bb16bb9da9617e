//! Empire Server - HTTP surface for the Energy Empire backend
//!
//! JSON request/response bodies over three routes:
//! - `POST /api/save` - overwrite supplied balances/buildings, stamp the save time
//! - `GET /api/data` - load the resolved record
//! - `GET /api/leaderboard` - top 10 players by energy
//!
//! Every id-bearing request resolves its player record first, creating a
//! default one for an unseen id. The store handle is injected into the
//! router as an explicit dependency, there is no process-global state.

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod router;

pub use config::Config;
pub use error::{ApiError, Result};
