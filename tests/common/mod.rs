//! Shared test helpers: a seeded router and shortcuts for driving it.

#![allow(dead_code, unused_imports)]

use std::path::PathBuf;
use std::sync::Arc;

use oynaiq::catalog::{seed_matches, MatchStore};
use oynaiq::config::Config;
use oynaiq::render::{InlineButton, Markup, Outbound, Screen};
use oynaiq::router::{InboundEvent, Router, Sender};
use oynaiq::session::SessionId;
use tempfile::TempDir;

pub const USER: i64 = 42;

pub fn sender(user_id: i64) -> Sender {
    Sender {
        user_id,
        username: Some(format!("user{user_id}")),
    }
}

/// Router over the seed matches with default settings.
pub fn seeded_router() -> (Router, MatchStore) {
    let store = MatchStore::new(seed_matches());
    let router = Router::from_config(&Config::default(), Arc::new(store.clone()));
    (router, store)
}

pub fn say(router: &Router, user_id: i64, text: &str) -> Vec<Outbound> {
    let event = InboundEvent::text(SessionId(user_id), sender(user_id), text);
    router.handle(&event)
}

pub fn press(router: &Router, user_id: i64, token: &str) -> Vec<Outbound> {
    router.handle(&InboundEvent::callback(
        SessionId(user_id),
        sender(user_id),
        token,
    ))
}

/// Screen carried by a send, reply or edit.
pub fn screen(outbound: &Outbound) -> &Screen {
    match outbound {
        Outbound::Send(screen) | Outbound::Reply(screen) | Outbound::Edit(screen) => screen,
        Outbound::Ack(_) => panic!("expected a screen, got {outbound:?}"),
    }
}

pub fn inline_buttons(outbound: &Outbound) -> Vec<InlineButton> {
    screen(outbound)
        .markup
        .as_ref()
        .map(|m| m.inline_buttons().into_iter().cloned().collect())
        .unwrap_or_default()
}

pub fn tokens(outbound: &Outbound) -> Vec<String> {
    inline_buttons(outbound)
        .iter()
        .filter_map(|b| b.token().map(str::to_string))
        .collect()
}

/// Write `content` to a config.toml in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}
