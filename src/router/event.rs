//! Inbound events handed over by a transport.

use crate::session::SessionId;

/// Who sent the event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sender {
    pub user_id: i64,
    /// Username without "@", when the user has one.
    pub username: Option<String>,
}

impl Sender {
    /// Username, or the numeric id when there is none.
    pub fn handle(&self) -> String {
        self.username
            .clone()
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| self.user_id.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundKind {
    /// Plain text message.
    Text(String),
    /// Inline button press carrying an encoded callback token.
    Callback(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundEvent {
    pub session: SessionId,
    pub sender: Sender,
    pub kind: InboundKind,
}

impl InboundEvent {
    pub fn text(session: SessionId, sender: Sender, text: impl Into<String>) -> Self {
        Self {
            session,
            sender,
            kind: InboundKind::Text(text.into()),
        }
    }

    pub fn callback(session: SessionId, sender: Sender, token: impl Into<String>) -> Self {
        Self {
            session,
            sender,
            kind: InboundKind::Callback(token.into()),
        }
    }
}
