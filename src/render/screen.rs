//! Transport-neutral render instructions.

/// What pressing an inline button does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonTarget {
    /// Sends an encoded callback token back to the bot.
    Callback(String),
    /// Opens a link in the client.
    Url(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineButton {
    pub label: String,
    pub target: ButtonTarget,
}

impl InlineButton {
    pub fn callback(label: impl Into<String>, token: String) -> Self {
        Self {
            label: label.into(),
            target: ButtonTarget::Callback(token),
        }
    }

    pub fn url(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: ButtonTarget::Url(url.into()),
        }
    }

    /// Callback token, if this is a callback button.
    pub fn token(&self) -> Option<&str> {
        match &self.target {
            ButtonTarget::Callback(token) => Some(token),
            ButtonTarget::Url(_) => None,
        }
    }
}

/// Button layout attached to a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Markup {
    /// Buttons under the message, one inner vec per row.
    Inline(Vec<Vec<InlineButton>>),
    /// Persistent keyboard replacing the client's text input.
    Reply {
        rows: Vec<Vec<String>>,
        placeholder: Option<String>,
    },
    /// Hide a previously shown reply keyboard.
    RemoveReply,
}

impl Markup {
    /// All inline buttons in row order; empty for non-inline markup.
    pub fn inline_buttons(&self) -> Vec<&InlineButton> {
        match self {
            Markup::Inline(rows) => rows.iter().flatten().collect(),
            _ => Vec::new(),
        }
    }
}

/// Message body plus optional buttons. Text is HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub text: String,
    pub markup: Option<Markup>,
}

impl Screen {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markup: None,
        }
    }

    pub fn with_markup(text: impl Into<String>, markup: Markup) -> Self {
        Self {
            text: text.into(),
            markup: Some(markup),
        }
    }
}

/// Acknowledgment of a button press.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Ack {
    pub text: Option<String>,
    /// Modal alert instead of a transient toast.
    pub alert: bool,
}

impl Ack {
    pub fn silent() -> Self {
        Self::default()
    }

    pub fn toast(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            alert: false,
        }
    }

    pub fn alert(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            alert: true,
        }
    }
}

/// One instruction for the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outbound {
    /// New message in the chat.
    Send(Screen),
    /// New message quoting the user's message.
    Reply(Screen),
    /// Replace the message the pressed button belongs to.
    Edit(Screen),
    /// Answer the button press.
    Ack(Ack),
}
