//! Sports, match records and their storage.

mod model;
mod seed;
mod sport;
mod store;

pub use model::{Match, MatchId, MatchStatus, NewMatch};
pub use seed::{refund_policy_for, seed_matches};
pub use sport::{Sport, SportDef};
pub use store::{MatchRepository, MatchStore, StoreError};
