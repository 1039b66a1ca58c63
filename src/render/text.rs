//! Message text templates.

use crate::catalog::{Match, MatchStatus, Sport};
use crate::wizard::{CompletedDraft, ValidationError, WizardStep};

use super::Renderer;

/// Markers for list positions 1..=9; later positions use [`GENERIC_MARKER`].
const INDEX_MARKERS: [&str; 9] = ["1️⃣", "2️⃣", "3️⃣", "4️⃣", "5️⃣", "6️⃣", "7️⃣", "8️⃣", "9️⃣"];
const GENERIC_MARKER: &str = "•";

/// Canned reactions users can type (group chat emulation).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    Going,
    Thinking,
    NotGoing,
}

impl Reaction {
    pub fn from_text(text: &str) -> Option<Self> {
        match text.trim() {
            "👍 Пойду" => Some(Reaction::Going),
            "🤔 Думаю" => Some(Reaction::Thinking),
            "👎 Не смогу" => Some(Reaction::NotGoing),
            _ => None,
        }
    }
}

/// Escape text for Telegram HTML parse mode.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl Renderer {
    /// Button label for a match in a list, e.g. "1️⃣ ⚽ Футбол Футбол 5×5 (осталось 2 места)".
    pub fn list_item(&self, m: &Match, index: usize) -> String {
        let marker = index
            .checked_sub(1)
            .and_then(|i| INDEX_MARKERS.get(i))
            .copied()
            .unwrap_or(GENERIC_MARKER);
        format!(
            "{marker} {} {} ({})",
            m.sport.label(),
            m.title,
            self.free_slots(m.free_slots())
        )
    }

    pub fn matches_intro(&self, sport: Sport) -> String {
        format!("Отлично! Вот ближайшие матчи по {}", sport.emoji())
    }

    pub fn no_matches(&self, sport: Sport) -> String {
        format!(
            "{}\n\nПока нет доступных матчей по этому виду спорта. \
             Скоро здесь появятся новые игры!",
            self.matches_intro(sport)
        )
    }

    /// Details screen text; the body depends on the match status.
    pub fn match_details(&self, m: &Match) -> String {
        let date = escape_html(&m.date_human);
        let time = escape_html(&m.time_human);

        let when = if m.time_human.is_empty() {
            format!("🕖 {date}\n")
        } else {
            format!("🕖 {date}, {time}\n")
        };
        let header = format!(
            "{} {} — {}\n{when}📍 Локация: <a href=\"{}\">Открыть в Google Maps</a>\n\n",
            m.sport.emoji(),
            escape_html(&m.title),
            escape_html(&m.location),
            escape_html(&m.maps_url),
        );
        let meta = format!(
            "Уровень: {}\nОрганизатор: @{}\n🔸 Правила: {}\n🔸 {}\n",
            escape_html(&m.level),
            escape_html(&m.organizer),
            escape_html(&m.rules),
            escape_html(&m.refund_policy),
        );

        let body = match m.status {
            MatchStatus::Open => format!(
                "👥 {} из {} мест занято\n💸 Депозит: {} ₸ (возвращается при явке)\n\n",
                m.players_current, m.players_total, m.deposit
            ),
            MatchStatus::NearFull => {
                let starts = if m.time_human.is_empty() {
                    format!("🔥 Игра уже {date}")
                } else {
                    format!("🔥 Игра уже {date} в {time}")
                };
                format!(
                    "🕑 {}!\n👥 {}/{} подтверждено\n{starts}\n\n",
                    capitalize(&self.free_slots(m.free_slots())),
                    m.players_current,
                    m.players_total
                )
            }
            MatchStatus::LowInterest => format!(
                "Пока в команде мало игроков, но скоро соберём остальных 💪\n\
                 Сейчас в списке: {} человек(а).\n\
                 Хочешь уведомление, когда будет 6+ игроков?\n\n",
                m.players_current
            ),
        };

        format!("{header}{body}{meta}")
    }

    pub fn booking_prompt(&self, m: &Match) -> String {
        format!(
            "💳 Забронировать место за {} ₸\n\
             1) Оплати через Kaspi Pay по ссылке ниже.\n\
             2) Затем нажми «Я оплатил через Kaspi».\n\n\
             Ссылка для оплаты: <a href=\"{}\">Kaspi Pay</a>\n\n\
             Деньги возвращаются при явке или при отмене за 24 часа.",
            m.deposit,
            escape_html(&self.payment_url)
        )
    }

    pub fn booked(&self, m: &Match) -> String {
        let when = if m.time_human.is_empty() {
            escape_html(&m.date_human)
        } else {
            format!(
                "{} {}",
                escape_html(&m.date_human),
                escape_html(&m.time_human)
            )
        };
        format!(
            "🎉 Место забронировано!\n📍 Игра: {}, {when}\n\
             🔔 Мы напомним тебе за 2 часа до начала.",
            escape_html(&m.location)
        )
    }

    pub fn participation_confirmed(&self) -> &'static str {
        "Отлично! Мы записали тебя в список игроков.\nНе забудь прийти вовремя — хорошей игры! ⚽"
    }

    pub fn contact_organizer(&self, m: &Match) -> String {
        format!(
            "Написать организатору: @{}\nСкоро здесь появится удобная кнопка для быстрого чата.",
            escape_html(&m.organizer)
        )
    }

    pub fn welcome(&self, referrer: Option<&str>) -> String {
        let mut text = String::from(
            "👋 Привет! Это OynaIQ Bot — здесь ты можешь найти игроков для ⚽🏀🏐 игр. \
             Что хочешь сделать?",
        );
        if let Some(name) = referrer {
            text.push_str(&format!(
                "\n\nТы пришёл по приглашению пользователя @{}. \
                 В будущем здесь можно будет начислять бонусы за приглашения.",
                escape_html(name)
            ));
        }
        text
    }

    pub fn find_team_prompt(&self) -> &'static str {
        "Выбери игру, которая тебе интересна 👇"
    }

    pub fn how_it_works(&self) -> &'static str {
        "Как работает OynaIQ.bot:\n\n\
         1️⃣ Выбираешь вид спорта и находишь ближайшие матчи.\n\
         2️⃣ Смотришь детали: время, локацию, уровень, депозит.\n\
         3️⃣ Подтверждаешь участие или бронируешь место.\n\
         4️⃣ Приходишь на игру — мы напомним за 2 часа до начала.\n\n\
         Сейчас данные тестовые, но логика уже как в реальном сервисе 🙂"
    }

    pub fn referral(&self, user: &str) -> String {
        format!(
            "Пригласи друга → получите бонус (в будущем здесь будут реальные бонусы).\n\n\
             Твоя реферальная ссылка:\nt.me/{}?start=ref_{}",
            self.bot_username,
            escape_html(user)
        )
    }

    pub fn feedback(&self) -> &'static str {
        "🏁 Игра прошла 🔥\n\
         Команда уже планирует следующую встречу...\n\
         Скоро здесь появится опрос про качество площадки и уровень соперников."
    }

    pub fn reaction(&self, reaction: Reaction) -> &'static str {
        match reaction {
            Reaction::Going => "Отлично! Добавим тебя в условный список участников 👍",
            Reaction::Thinking => "Окей, подумай ещё немного. Места быстро разбирают 😉",
            Reaction::NotGoing => {
                "Жаль, что не получится в этот раз. Надеюсь, присоединишься к следующей игре!"
            }
        }
    }

    /// Question asked when the wizard enters `step`.
    pub fn step_prompt(&self, step: WizardStep) -> &'static str {
        match step {
            WizardStep::SelectSport => "Давай создадим новую игру ⚡\n\nСначала выбери вид спорта:",
            WizardStep::EnterTitle => "Как назовём матч? Например: «Футбол 5×5»",
            WizardStep::EnterLocation => "Где играем? Напиши название площадки или адрес.",
            WizardStep::EnterSchedule => {
                "Когда играем?\nНапример: «сегодня, 19:00» или «завтра в 18:30»."
            }
            WizardStep::EnterDeposit => {
                "Какой будет депозит за игру? Напиши сумму в тенге, например: 200.\n\
                 Если депозита нет — напиши 0."
            }
        }
    }

    /// Re-prompt after rejected input.
    pub fn validation_message(&self, error: &ValidationError) -> &'static str {
        match error {
            ValidationError::UnknownSport => {
                "Пожалуйста, выбери один из вариантов на клавиатуре 🙂"
            }
            ValidationError::EmptyTitle => "Название не может быть пустым. Попробуй ещё раз.",
            ValidationError::EmptyLocation => {
                "Локация не может быть пустой. Введи, пожалуйста, адрес."
            }
            ValidationError::EmptySchedule => "Пожалуйста, укажи дату и время игры.",
            ValidationError::InvalidDeposit => {
                "Нужно указать неотрицательное число. Попробуй ещё раз 🙂"
            }
        }
    }

    pub fn creation_failed(&self) -> &'static str {
        "Не получилось сохранить игру 😔 Попробуй создать её ещё раз чуть позже."
    }

    pub fn wizard_summary(&self, draft: &CompletedDraft) -> String {
        format!(
            "Игра создана ✅\n\n\
             Вид спорта: {}\n\
             Название: {}\n\
             Локация: {}\n\
             Когда: {}\n\
             Депозит: {} ₸\n\n\
             Мы добавили игру в общий список — другие игроки теперь могут её найти \
             в разделе «Найти команду».",
            draft.sport.label(),
            escape_html(&draft.title),
            escape_html(&draft.location),
            escape_html(&draft.schedule),
            draft.deposit
        )
    }
}
