use oynaiq::callback::{BookingAction, CallbackIntent};
use oynaiq::catalog::{seed_matches, Match, MatchStatus, Sport};
use oynaiq::render::{
    details_actions, ButtonTarget, EnglishSlots, Markup, Renderer, RussianSlots,
};

fn english() -> Renderer {
    Renderer::new(Box::new(EnglishSlots), "https://pay.example/x", "playqbot")
}

fn russian() -> Renderer {
    Renderer::new(Box::new(RussianSlots), "https://pay.example/x", "playqbot")
}

fn football(current: u32, total: u32) -> Match {
    let mut m = seed_matches().remove(0);
    m.players_current = current;
    m.players_total = total;
    m
}

#[test]
fn list_item_plural_singular_and_full() {
    let r = english();
    assert_eq!(
        r.list_item(&football(8, 10), 1),
        "1️⃣ ⚽ Футбол Футбол 5×5 (2 slots remaining)"
    );
    assert_eq!(
        r.list_item(&football(9, 10), 2),
        "2️⃣ ⚽ Футбол Футбол 5×5 (1 slot remaining)"
    );
    assert_eq!(
        r.list_item(&football(10, 10), 3),
        "3️⃣ ⚽ Футбол Футбол 5×5 (no slots)"
    );
}

#[test]
fn list_item_marker_past_nine_is_generic() {
    let r = russian();
    assert!(r.list_item(&football(8, 10), 9).starts_with("9️⃣ "));
    assert!(r.list_item(&football(8, 10), 10).starts_with("• "));
    assert!(r.list_item(&football(8, 10), 0).starts_with("• "));
}

#[test]
fn russian_slot_wording() {
    let r = russian();
    assert_eq!(r.free_slots(0), "мест нет");
    assert_eq!(r.free_slots(1), "осталось 1 место");
    assert_eq!(r.free_slots(2), "осталось 2 места");
    assert_eq!(r.free_slots(5), "осталось 5 мест");
}

#[test]
fn details_text_depends_on_status() {
    let r = russian();
    let seeds = seed_matches();

    let open = r.match_details(&seeds[0]);
    assert!(open.contains("👥 8 из 10 мест занято"));
    assert!(open.contains("💸 Депозит: 200 ₸"));

    let near_full = r.match_details(&seeds[1]);
    assert!(near_full.contains("🕑 Осталось 2 места!"));
    assert!(near_full.contains("👥 8/10 подтверждено"));
    assert!(near_full.contains("🔥 Игра уже завтра в 18:30"));

    let low = r.match_details(&seeds[2]);
    assert!(low.contains("Сейчас в списке: 2 человек(а)."));

    for text in [&open, &near_full, &low] {
        assert!(text.contains("Организатор: @ttttokzhn"));
        assert!(text.contains("Открыть в Google Maps"));
    }
}

#[test]
fn details_escape_user_text() {
    let mut m = football(1, 10);
    m.title = "<b>Матч</b> & co".to_string();
    let text = russian().match_details(&m);
    assert!(text.contains("&lt;b&gt;Матч&lt;/b&gt; &amp; co"));
    assert!(!text.contains("<b>Матч"));
}

#[test]
fn action_sets_per_status() {
    assert_eq!(
        details_actions(MatchStatus::Open),
        &[
            BookingAction::Confirm,
            BookingAction::Deposit,
            BookingAction::Contact,
            BookingAction::BackToList
        ]
    );
    assert_eq!(
        details_actions(MatchStatus::NearFull),
        &[
            BookingAction::Confirm,
            BookingAction::Deposit,
            BookingAction::Waitlist
        ]
    );
    assert_eq!(
        details_actions(MatchStatus::LowInterest),
        &[
            BookingAction::Notify,
            BookingAction::Contact,
            BookingAction::BackToList
        ]
    );
}

#[test]
fn details_keyboard_tokens_decode_to_the_match() {
    let r = russian();
    for m in seed_matches() {
        let markup = r.match_details_keyboard(&m);
        let buttons = markup.inline_buttons();
        assert_eq!(buttons.len(), details_actions(m.status).len());
        for button in buttons {
            let token = button.token().expect("callback button");
            match CallbackIntent::decode(token) {
                Ok(CallbackIntent::Booking { match_id, .. }) => assert_eq!(match_id, m.id),
                other => panic!("unexpected {other:?} for {token}"),
            }
        }
    }
}

#[test]
fn open_deposit_label_shows_amount() {
    let r = russian();
    let markup = r.match_details_keyboard(&seed_matches()[0]);
    let buttons = markup.inline_buttons();
    let labels: Vec<&str> = buttons.iter().map(|b| b.label.as_str()).collect();
    assert!(labels.contains(&"💳 Забронировать место (депозит 200 ₸)"));
}

#[test]
fn matches_list_ends_with_create_button() {
    let r = russian();
    let matches: Vec<Match> = seed_matches()
        .into_iter()
        .filter(|m| m.sport == Sport::Football)
        .collect();
    let markup = r.matches_list(Sport::Football, &matches);
    let buttons = markup.inline_buttons();

    assert_eq!(buttons.len(), 3);
    assert_eq!(buttons[0].token(), Some("match:1"));
    assert_eq!(buttons[1].token(), Some("match:2"));
    assert_eq!(buttons[2].label, "➕ Создать свой матч");
    assert_eq!(buttons[2].token(), Some("create_match:football"));
}

#[test]
fn booking_keyboard_links_payment_page() {
    let r = russian();
    let markup = r.booking_keyboard(&seed_matches()[0]);
    let buttons = markup.inline_buttons();
    assert_eq!(
        buttons[0].target,
        ButtonTarget::Url("https://pay.example/x".to_string())
    );
    assert_eq!(buttons[1].token(), Some("payment:1:pay"));
    assert_eq!(buttons[2].token(), Some("payment:1:cancel"));
}

#[test]
fn main_menu_is_reply_keyboard() {
    match russian().main_menu() {
        Markup::Reply { rows, .. } => {
            assert_eq!(rows.len(), 3);
            assert_eq!(rows[0][0], "🧑‍🤝‍🧑 Найти команду");
        }
        other => panic!("expected reply keyboard, got {other:?}"),
    }
}

#[test]
fn referral_link_uses_bot_username() {
    let text = russian().referral("aruzhan");
    assert!(text.contains("t.me/playqbot?start=ref_aruzhan"));
}
