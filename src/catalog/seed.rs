//! Sample matches loaded at process start.

use super::model::{Match, MatchStatus};
use super::sport::Sport;

const ORGANIZER: &str = "ttttokzhn";
const REFUND_24H: &str = "Возврат депозита при отмене за 24+ ч";
const REFUND_NONE: &str = "Без депозита — просто приходи";

/// Seed matches with explicit statuses (they may differ from the threshold policy).
pub fn seed_matches() -> Vec<Match> {
    vec![
        Match {
            id: 1,
            sport: Sport::Football,
            title: "Футбол 5×5".into(),
            location: "Астана Арена".into(),
            date_human: "сегодня".into(),
            time_human: "19:00".into(),
            maps_url: "https://maps.app.goo.gl/7Tv5Yv8CpmNSdanY8".into(),
            players_current: 8,
            players_total: 10,
            deposit: 200,
            level: "любители".into(),
            organizer: ORGANIZER.into(),
            rules: "5×5, 2 тайма по 25 минут".into(),
            refund_policy: REFUND_24H.into(),
            status: MatchStatus::Open,
        },
        Match {
            id: 2,
            sport: Sport::Football,
            title: "Футбол 5×5".into(),
            location: "Алау".into(),
            date_human: "завтра".into(),
            time_human: "18:30".into(),
            maps_url: "https://maps.app.goo.gl/CLXuEm5uT9CMvkcS8".into(),
            players_current: 8,
            players_total: 10,
            deposit: 200,
            level: "любители".into(),
            organizer: ORGANIZER.into(),
            rules: "5×5, 2 тайма по 20 минут".into(),
            refund_policy: REFUND_24H.into(),
            status: MatchStatus::NearFull,
        },
        Match {
            id: 3,
            sport: Sport::Basketball,
            title: "Баскетбол 3×3".into(),
            location: "Центральный Спортзал".into(),
            date_human: "послезавтра".into(),
            time_human: "20:00".into(),
            maps_url: "https://maps.app.goo.gl/sSsgJsmRwwF3Ujga8".into(),
            players_current: 2,
            players_total: 6,
            deposit: 0,
            level: "новички/любители".into(),
            organizer: ORGANIZER.into(),
            rules: "3×3, до 21 очка".into(),
            refund_policy: REFUND_NONE.into(),
            status: MatchStatus::LowInterest,
        },
        Match {
            id: 4,
            sport: Sport::Volleyball,
            title: "Волейбол 6×6".into(),
            location: "City Arena".into(),
            date_human: "в субботу".into(),
            time_human: "17:00".into(),
            maps_url: "https://maps.google.com/?q=City+Arena".into(),
            players_current: 10,
            players_total: 12,
            deposit: 150,
            level: "любители".into(),
            organizer: ORGANIZER.into(),
            rules: "6×6, 3 партии до 25 очков".into(),
            refund_policy: REFUND_24H.into(),
            status: MatchStatus::NearFull,
        },
    ]
}

/// Refund policy text for a wizard-created match.
pub fn refund_policy_for(deposit: u32) -> &'static str {
    if deposit > 0 {
        REFUND_24H
    } else {
        REFUND_NONE
    }
}
