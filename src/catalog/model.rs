//! Match records and the capacity threshold policy.

use serde::{Deserialize, Serialize};

use super::sport::Sport;

/// Identifier assigned by the store.
pub type MatchId = u32;

/// Capacity state driving how a match is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    /// Enough players, still accepting.
    Open,
    /// Only a few places left.
    NearFull,
    /// Not enough players yet.
    LowInterest,
}

impl MatchStatus {
    /// Threshold policy used for newly created matches.
    ///
    /// A fully booked match is shown with the regular `Open` screen.
    pub fn from_free_slots(free: u32) -> Self {
        match free {
            0 => MatchStatus::Open,
            1..=2 => MatchStatus::NearFull,
            _ => MatchStatus::LowInterest,
        }
    }
}

/// One organised game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub sport: Sport,
    pub title: String,
    pub location: String,
    /// Human-friendly date, e.g. "сегодня".
    pub date_human: String,
    /// Human-friendly time, may be empty.
    pub time_human: String,
    pub maps_url: String,
    pub players_current: u32,
    pub players_total: u32,
    /// Deposit in tenge.
    pub deposit: u32,
    pub level: String,
    /// Telegram username without "@", or a numeric id.
    pub organizer: String,
    pub rules: String,
    pub refund_policy: String,
    pub status: MatchStatus,
}

impl Match {
    pub fn free_slots(&self) -> u32 {
        self.players_total.saturating_sub(self.players_current)
    }

    pub fn is_full(&self) -> bool {
        self.players_current >= self.players_total
    }
}

/// A match that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMatch {
    pub sport: Sport,
    pub title: String,
    pub location: String,
    pub date_human: String,
    pub time_human: String,
    pub maps_url: String,
    pub players_current: u32,
    pub players_total: u32,
    pub deposit: u32,
    pub level: String,
    pub organizer: String,
    pub rules: String,
    pub refund_policy: String,
    pub status: MatchStatus,
}

impl NewMatch {
    pub(crate) fn with_id(self, id: MatchId) -> Match {
        Match {
            id,
            sport: self.sport,
            title: self.title,
            location: self.location,
            date_human: self.date_human,
            time_human: self.time_human,
            maps_url: self.maps_url,
            players_current: self.players_current.min(self.players_total),
            players_total: self.players_total,
            deposit: self.deposit,
            level: self.level,
            organizer: self.organizer,
            rules: self.rules,
            refund_policy: self.refund_policy,
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_policy() {
        assert_eq!(MatchStatus::from_free_slots(0), MatchStatus::Open);
        assert_eq!(MatchStatus::from_free_slots(1), MatchStatus::NearFull);
        assert_eq!(MatchStatus::from_free_slots(2), MatchStatus::NearFull);
        assert_eq!(MatchStatus::from_free_slots(3), MatchStatus::LowInterest);
        assert_eq!(MatchStatus::from_free_slots(9), MatchStatus::LowInterest);
    }
}
