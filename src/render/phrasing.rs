//! Free-slot wording, pluggable per locale.

use serde::{Deserialize, Serialize};

/// Three-branch wording for the number of free places.
pub trait SlotPhrasing: Send + Sync {
    /// No places left.
    fn none(&self) -> String;
    /// Exactly one place left.
    fn one(&self) -> String;
    /// Two or more places left.
    fn many(&self, count: u32) -> String;
}

/// Pick the branch for `free` places.
pub fn free_slots_text(phrasing: &dyn SlotPhrasing, free: u32) -> String {
    match free {
        0 => phrasing.none(),
        1 => phrasing.one(),
        n => phrasing.many(n),
    }
}

pub struct RussianSlots;

impl SlotPhrasing for RussianSlots {
    fn none(&self) -> String {
        "мест нет".to_string()
    }

    fn one(&self) -> String {
        "осталось 1 место".to_string()
    }

    fn many(&self, count: u32) -> String {
        let noun = match (count % 10, count % 100) {
            (1, n) if n != 11 => "место",
            (2..=4, n) if !(12..=14).contains(&n) => "места",
            _ => "мест",
        };
        format!("осталось {count} {noun}")
    }
}

pub struct EnglishSlots;

impl SlotPhrasing for EnglishSlots {
    fn none(&self) -> String {
        "no slots".to_string()
    }

    fn one(&self) -> String {
        "1 slot remaining".to_string()
    }

    fn many(&self, count: u32) -> String {
        format!("{count} slots remaining")
    }
}

/// Locale selector for slot wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ru,
    En,
}

impl Locale {
    pub fn slot_phrasing(self) -> Box<dyn SlotPhrasing> {
        match self {
            Locale::Ru => Box::new(RussianSlots),
            Locale::En => Box::new(EnglishSlots),
        }
    }
}
