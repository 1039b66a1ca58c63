//! Callback payloads exchanged with the chat client.

mod codec;
mod intent;

pub use codec::{DecodeError, MAX_TOKEN_LEN};
pub use intent::{BookingAction, CallbackIntent, PaymentAction};
