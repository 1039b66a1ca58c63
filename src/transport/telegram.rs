//! Telegram Bot API front-end over long polling.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::task::JoinHandle;

use crate::config::TelegramConfig;
use crate::dispatch::DispatchClient;
use crate::render::{Ack, ButtonTarget, Markup, Outbound, Screen};
use crate::router::{InboundEvent, Sender};
use crate::session::SessionId;

use super::TransportError;

const RETRY_DELAY: Duration = Duration::from_secs(3);

#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    result: Option<T>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Update {
    update_id: i64,
    #[serde(default)]
    message: Option<Message>,
    #[serde(default)]
    callback_query: Option<CallbackQuery>,
}

#[derive(Debug, Deserialize)]
struct Message {
    message_id: i64,
    chat: Chat,
    #[serde(default)]
    from: Option<User>,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Chat {
    id: i64,
}

#[derive(Debug, Deserialize)]
struct User {
    id: i64,
    #[serde(default)]
    username: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CallbackQuery {
    id: String,
    from: User,
    #[serde(default)]
    message: Option<Message>,
    #[serde(default)]
    data: Option<String>,
}

impl From<User> for Sender {
    fn from(user: User) -> Self {
        Sender {
            user_id: user.id,
            username: user.username,
        }
    }
}

/// Where the render instructions of one update go.
struct Delivery {
    chat_id: i64,
    /// Message that triggered the update; edited in place or replied to.
    /// Callback queries on old inline messages may come without one.
    message_id: Option<i64>,
    callback_query_id: Option<String>,
}

/// Runs background deliveries so that each chat sees its replies in
/// submission order while different chats proceed independently.
#[derive(Default)]
struct DeliveryChain {
    tails: HashMap<i64, JoinHandle<()>>,
}

impl DeliveryChain {
    /// Start `delivery` once the previous delivery to `chat_id` is done.
    fn spawn<F>(&mut self, chat_id: i64, delivery: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.tails.retain(|_, tail| !tail.is_finished());
        let previous = self.tails.remove(&chat_id);
        let tail = tokio::spawn(async move {
            if let Some(previous) = previous {
                let _ = previous.await;
            }
            delivery.await;
        });
        self.tails.insert(chat_id, tail);
    }
}

pub struct TelegramTransport {
    client: Client,
    endpoint: String,
    poll_timeout: u32,
    dispatch: DispatchClient,
}

impl TelegramTransport {
    pub fn new(
        config: &TelegramConfig,
        token: &str,
        dispatch: DispatchClient,
    ) -> Result<Self, TransportError> {
        let timeout = Duration::from_secs(u64::from(config.poll_timeout_seconds) + 10);
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: format!("{}/bot{}", config.api_base.trim_end_matches('/'), token),
            poll_timeout: config.poll_timeout_seconds,
            dispatch,
        })
    }

    /// Poll for updates forever. Poll failures are logged and retried.
    pub async fn run(self) -> Result<(), TransportError> {
        let this = Arc::new(self);
        let mut chain = DeliveryChain::default();
        let mut offset: i64 = 0;
        tracing::info!("Telegram polling started");

        loop {
            let updates: Vec<Update> = match this
                .call(
                    "getUpdates",
                    &json!({
                        "offset": offset,
                        "timeout": this.poll_timeout,
                        "allowed_updates": ["message", "callback_query"],
                    }),
                )
                .await
            {
                Ok(updates) => updates,
                Err(error) => {
                    tracing::warn!(%error, "getUpdates failed, retrying");
                    tokio::time::sleep(RETRY_DELAY).await;
                    continue;
                }
            };

            for update in updates {
                offset = offset.max(update.update_id + 1);
                let Some((event, delivery)) = inbound(update) else {
                    continue;
                };

                // Submit in arrival order; delivery runs in the background.
                let pending = this.dispatch.submit(event).await?;
                let transport = Arc::clone(&this);
                chain.spawn(delivery.chat_id, async move {
                    let outbound = match pending.await {
                        Ok(outbound) => outbound,
                        Err(_) => {
                            tracing::warn!(chat_id = delivery.chat_id, "Event dropped");
                            dropped_outbound(&delivery)
                        }
                    };
                    transport.deliver(&delivery, outbound).await;
                });
            }
        }
    }

    async fn deliver(&self, delivery: &Delivery, outbound: Vec<Outbound>) {
        for item in outbound {
            let result = match item {
                Outbound::Send(screen) => self.send_message(delivery.chat_id, &screen, None).await,
                Outbound::Reply(screen) => {
                    self.send_message(delivery.chat_id, &screen, delivery.message_id)
                        .await
                }
                Outbound::Edit(screen) => match delivery.message_id {
                    Some(message_id) => {
                        self.edit_message(delivery.chat_id, message_id, &screen)
                            .await
                    }
                    None => self.send_message(delivery.chat_id, &screen, None).await,
                },
                Outbound::Ack(ack) => match &delivery.callback_query_id {
                    Some(id) => self.answer_callback(id, &ack).await,
                    None => Ok(()),
                },
            };
            if let Err(error) = result {
                tracing::warn!(chat_id = delivery.chat_id, %error, "Delivery failed");
            }
        }
    }

    async fn send_message(
        &self,
        chat_id: i64,
        screen: &Screen,
        reply_to: Option<i64>,
    ) -> Result<(), TransportError> {
        let mut body = json!({
            "chat_id": chat_id,
            "text": screen.text,
            "parse_mode": "HTML",
            "disable_web_page_preview": true,
        });
        if let Some(markup) = &screen.markup {
            body["reply_markup"] = markup_json(markup);
        }
        if let Some(message_id) = reply_to {
            body["reply_parameters"] = json!({ "message_id": message_id });
        }
        self.call::<Value>("sendMessage", &body).await?;
        Ok(())
    }

    /// Edit the triggering message; only inline markup survives an edit.
    async fn edit_message(
        &self,
        chat_id: i64,
        message_id: i64,
        screen: &Screen,
    ) -> Result<(), TransportError> {
        let mut body = json!({
            "chat_id": chat_id,
            "message_id": message_id,
            "text": screen.text,
            "parse_mode": "HTML",
            "disable_web_page_preview": true,
        });
        if let Some(markup @ Markup::Inline(_)) = &screen.markup {
            body["reply_markup"] = markup_json(markup);
        }
        self.call::<Value>("editMessageText", &body).await?;
        Ok(())
    }

    async fn answer_callback(
        &self,
        callback_query_id: &str,
        ack: &Ack,
    ) -> Result<(), TransportError> {
        let mut body = json!({ "callback_query_id": callback_query_id });
        if let Some(text) = &ack.text {
            body["text"] = json!(text);
            body["show_alert"] = json!(ack.alert);
        }
        self.call::<Value>("answerCallbackQuery", &body).await?;
        Ok(())
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: &'static str,
        body: &Value,
    ) -> Result<T, TransportError> {
        let url = format!("{}/{}", self.endpoint, method);
        let response: ApiResponse<T> = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await?
            .json()
            .await?;

        match response {
            ApiResponse {
                ok: true,
                result: Some(result),
                ..
            } => Ok(result),
            ApiResponse { description, .. } => Err(TransportError::Api {
                method,
                description: description.unwrap_or_else(|| "no description".to_string()),
            }),
        }
    }
}

/// Turn an update into an inbound event. Sessions are keyed by user.
///
/// Every callback query becomes an event so that it gets answered. A query
/// without data routes an empty token, which the router acks silently.
fn inbound(update: Update) -> Option<(InboundEvent, Delivery)> {
    if let Some(query) = update.callback_query {
        let sender = Sender::from(query.from);
        let delivery = Delivery {
            chat_id: query.message.as_ref().map_or(sender.user_id, |m| m.chat.id),
            message_id: query.message.as_ref().map(|m| m.message_id),
            callback_query_id: Some(query.id),
        };
        let token = query.data.unwrap_or_default();
        let event = InboundEvent::callback(SessionId(sender.user_id), sender, token);
        return Some((event, delivery));
    }

    let message = update.message?;
    let text = message.text?;
    let sender = Sender::from(message.from?);
    let delivery = Delivery {
        chat_id: message.chat.id,
        message_id: Some(message.message_id),
        callback_query_id: None,
    };
    let event = InboundEvent::text(SessionId(sender.user_id), sender, text);
    Some((event, delivery))
}

/// What still goes out for an event the dispatcher dropped: a pressed
/// button is released, anything else stays silent.
fn dropped_outbound(delivery: &Delivery) -> Vec<Outbound> {
    match delivery.callback_query_id {
        Some(_) => vec![Outbound::Ack(Ack::silent())],
        None => Vec::new(),
    }
}

/// Bot API `reply_markup` object for a button layout.
pub fn markup_json(markup: &Markup) -> Value {
    match markup {
        Markup::Inline(rows) => {
            let rows: Vec<Vec<Value>> = rows
                .iter()
                .map(|row| {
                    row.iter()
                        .map(|button| match &button.target {
                            ButtonTarget::Callback(token) => {
                                json!({ "text": button.label, "callback_data": token })
                            }
                            ButtonTarget::Url(url) => json!({ "text": button.label, "url": url }),
                        })
                        .collect()
                })
                .collect();
            json!({ "inline_keyboard": rows })
        }
        Markup::Reply { rows, placeholder } => {
            let rows: Vec<Vec<Value>> = rows
                .iter()
                .map(|row| row.iter().map(|label| json!({ "text": label })).collect())
                .collect();
            let mut keyboard = json!({ "keyboard": rows, "resize_keyboard": true });
            if let Some(placeholder) = placeholder {
                keyboard["input_field_placeholder"] = json!(placeholder);
            }
            keyboard
        }
        Markup::RemoveReply => json!({ "remove_keyboard": true }),
    }
}
