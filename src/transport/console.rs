//! Line-based local front-end for trying the bot without Telegram.
//!
//! Every stdin line is a text message, except `cb <token>` which presses
//! the button carrying that token.

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::dispatch::DispatchClient;
use crate::render::{ButtonTarget, Markup, Outbound, Screen};
use crate::router::{InboundEvent, Sender};
use crate::session::SessionId;

use super::TransportError;

const CALLBACK_PREFIX: &str = "cb ";

pub struct ConsoleTransport {
    dispatch: DispatchClient,
    sender: Sender,
}

impl ConsoleTransport {
    pub fn new(dispatch: DispatchClient, sender: Sender) -> Self {
        Self { dispatch, sender }
    }

    /// Read stdin until EOF.
    pub async fn run(self) -> Result<(), TransportError> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdout = tokio::io::stdout();
        let session = SessionId(self.sender.user_id);

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            let event = match line.strip_prefix(CALLBACK_PREFIX) {
                Some(token) => InboundEvent::callback(session, self.sender.clone(), token.trim()),
                None => InboundEvent::text(session, self.sender.clone(), line),
            };

            for outbound in self.dispatch.handle(event).await? {
                stdout
                    .write_all(format_outbound(&outbound).as_bytes())
                    .await?;
            }
            stdout.flush().await?;
        }

        tracing::info!("Console input closed");
        Ok(())
    }
}

/// Plain-text rendering of one instruction, buttons listed with their tokens.
pub fn format_outbound(outbound: &Outbound) -> String {
    match outbound {
        Outbound::Send(screen) => format_screen("send", screen),
        Outbound::Reply(screen) => format_screen("reply", screen),
        Outbound::Edit(screen) => format_screen("edit", screen),
        Outbound::Ack(ack) => match &ack.text {
            Some(text) if ack.alert => format!("[ack alert] {text}\n"),
            Some(text) => format!("[ack] {text}\n"),
            None => "[ack]\n".to_string(),
        },
    }
}

fn format_screen(kind: &str, screen: &Screen) -> String {
    let mut out = format!("[{kind}]\n{}\n", screen.text);
    match &screen.markup {
        Some(Markup::Inline(rows)) => {
            for button in rows.iter().flatten() {
                match &button.target {
                    ButtonTarget::Callback(token) => {
                        out.push_str(&format!("  [{}] cb {}\n", button.label, token))
                    }
                    ButtonTarget::Url(url) => {
                        out.push_str(&format!("  [{}] {}\n", button.label, url))
                    }
                }
            }
        }
        Some(Markup::Reply { rows, .. }) => {
            for label in rows.iter().flatten() {
                out.push_str(&format!("  ({label})\n"));
            }
        }
        Some(Markup::RemoveReply) | None => {}
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Ack, InlineButton};

    #[test]
    fn buttons_show_their_tokens() {
        let rows = vec![vec![InlineButton::callback("Первый", "match:1".into())]];
        let screen = Screen::with_markup("Матчи", Markup::Inline(rows));
        let text = format_outbound(&Outbound::Edit(screen));
        assert!(text.starts_with("[edit]\nМатчи\n"));
        assert!(text.contains("[Первый] cb match:1"));
    }

    #[test]
    fn ack_variants() {
        assert_eq!(format_outbound(&Outbound::Ack(Ack::silent())), "[ack]\n");
        assert_eq!(
            format_outbound(&Outbound::Ack(Ack::alert("Оплата отменена."))),
            "[ack alert] Оплата отменена.\n"
        );
    }
}
