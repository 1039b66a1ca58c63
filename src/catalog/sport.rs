//! Sport registry: the single source of truth for sport codes and labels.
//!
//! Codec fields, wizard label matching, keyboards and text all go through
//! this table so a sport is never spelled twice.

use serde::{Deserialize, Serialize};

/// Closed set of sports a match can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sport {
    Football,
    Basketball,
    Volleyball,
    Other,
}

/// A single registry row.
#[derive(Debug, Clone, Copy)]
pub struct SportDef {
    pub sport: Sport,
    /// Internal code used in callback tokens (e.g. "football").
    pub code: &'static str,
    /// Emoji shown in lists and headers.
    pub emoji: &'static str,
    /// Human-readable name without the emoji.
    pub name: &'static str,
}

const REGISTRY: [SportDef; 4] = [
    SportDef {
        sport: Sport::Football,
        code: "football",
        emoji: "⚽",
        name: "Футбол",
    },
    SportDef {
        sport: Sport::Basketball,
        code: "basketball",
        emoji: "🏀",
        name: "Баскетбол",
    },
    SportDef {
        sport: Sport::Volleyball,
        code: "volleyball",
        emoji: "🏐",
        name: "Волейбол",
    },
    SportDef {
        sport: Sport::Other,
        code: "other",
        emoji: "🎯",
        name: "Другое",
    },
];

impl Sport {
    /// All sports in menu order.
    pub const ALL: [Sport; 4] = [
        Sport::Football,
        Sport::Basketball,
        Sport::Volleyball,
        Sport::Other,
    ];

    fn def(self) -> &'static SportDef {
        // REGISTRY is indexed in declaration order.
        &REGISTRY[self as usize]
    }

    pub fn code(self) -> &'static str {
        self.def().code
    }

    pub fn emoji(self) -> &'static str {
        self.def().emoji
    }

    /// Button label, e.g. "⚽ Футбол".
    pub fn label(self) -> String {
        let def = self.def();
        format!("{} {}", def.emoji, def.name)
    }

    pub fn from_code(code: &str) -> Option<Sport> {
        REGISTRY.iter().find(|d| d.code == code).map(|d| d.sport)
    }

    /// Match a keyboard label typed back by the user.
    pub fn from_label(text: &str) -> Option<Sport> {
        let text = text.trim();
        Sport::ALL.into_iter().find(|s| s.label() == text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_order_matches_enum() {
        for sport in Sport::ALL {
            assert_eq!(sport.def().sport, sport);
        }
    }

    #[test]
    fn code_lookup_round_trips() {
        for sport in Sport::ALL {
            assert_eq!(Sport::from_code(sport.code()), Some(sport));
        }
        assert_eq!(Sport::from_code("curling"), None);
    }

    #[test]
    fn label_lookup_ignores_surrounding_whitespace() {
        assert_eq!(
            Sport::from_label("  🏀 Баскетбол "),
            Some(Sport::Basketball)
        );
        assert_eq!(Sport::from_label("Баскетбол"), None);
    }
}
