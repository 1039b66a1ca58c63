//! Token format for callback payloads.
//!
//! A token is `prefix(:field)*`. Every field is either a decimal id or a
//! code from a closed set, so no escaping is needed and the longest token
//! (`booking:4294967295:back_list`) stays well below [`MAX_TOKEN_LEN`].

use thiserror::Error;

use super::intent::{BookingAction, CallbackIntent, PaymentAction};
use crate::catalog::{MatchId, Sport};

/// Telegram limit for `callback_data`, in bytes.
pub const MAX_TOKEN_LEN: usize = 64;

const SEPARATOR: char = ':';

const PREFIX_SPORT: &str = "sport";
const PREFIX_MATCH: &str = "match";
const PREFIX_BOOKING: &str = "booking";
const PREFIX_PAYMENT: &str = "payment";
const PREFIX_CREATE: &str = "create_match";

/// Why a token could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Token is {len} bytes, limit is 64")]
    TooLong { len: usize },

    #[error("Unknown token prefix '{0}'")]
    UnknownPrefix(String),

    #[error("'{prefix}' expects {expected} field(s), got {found}")]
    WrongArity {
        prefix: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Invalid {field} '{value}' in '{prefix}' token")]
    InvalidField {
        prefix: &'static str,
        field: &'static str,
        value: String,
    },
}

impl CallbackIntent {
    /// Serialize into a callback token.
    pub fn encode(&self) -> String {
        match self {
            CallbackIntent::SelectSport(sport) => join(PREFIX_SPORT, &[sport.code()]),
            CallbackIntent::SelectMatch(id) => join(PREFIX_MATCH, &[&id.to_string()]),
            CallbackIntent::Booking { match_id, action } => {
                join(PREFIX_BOOKING, &[&match_id.to_string(), action.code()])
            }
            CallbackIntent::Payment { match_id, action } => {
                join(PREFIX_PAYMENT, &[&match_id.to_string(), action.code()])
            }
            CallbackIntent::CreateFromList(sport) => join(PREFIX_CREATE, &[sport.code()]),
        }
    }

    /// Parse a callback token. Anything unexpected is an error, never a guess.
    pub fn decode(token: &str) -> Result<Self, DecodeError> {
        if token.len() > MAX_TOKEN_LEN {
            return Err(DecodeError::TooLong { len: token.len() });
        }

        let mut parts = token.split(SEPARATOR);
        let prefix = parts.next().unwrap_or_default();
        let fields: Vec<&str> = parts.collect();

        match prefix {
            PREFIX_SPORT => {
                let [code] = arity::<1>(PREFIX_SPORT, &fields)?;
                Ok(CallbackIntent::SelectSport(sport(PREFIX_SPORT, code)?))
            }
            PREFIX_MATCH => {
                let [id] = arity::<1>(PREFIX_MATCH, &fields)?;
                Ok(CallbackIntent::SelectMatch(match_id(PREFIX_MATCH, id)?))
            }
            PREFIX_BOOKING => {
                let [id, action] = arity::<2>(PREFIX_BOOKING, &fields)?;
                let action =
                    BookingAction::from_code(action).ok_or_else(|| DecodeError::InvalidField {
                        prefix: PREFIX_BOOKING,
                        field: "action",
                        value: action.to_string(),
                    })?;
                Ok(CallbackIntent::Booking {
                    match_id: match_id(PREFIX_BOOKING, id)?,
                    action,
                })
            }
            PREFIX_PAYMENT => {
                let [id, action] = arity::<2>(PREFIX_PAYMENT, &fields)?;
                let action =
                    PaymentAction::from_code(action).ok_or_else(|| DecodeError::InvalidField {
                        prefix: PREFIX_PAYMENT,
                        field: "action",
                        value: action.to_string(),
                    })?;
                Ok(CallbackIntent::Payment {
                    match_id: match_id(PREFIX_PAYMENT, id)?,
                    action,
                })
            }
            PREFIX_CREATE => {
                let [code] = arity::<1>(PREFIX_CREATE, &fields)?;
                Ok(CallbackIntent::CreateFromList(sport(PREFIX_CREATE, code)?))
            }
            other => Err(DecodeError::UnknownPrefix(other.to_string())),
        }
    }
}

fn join(prefix: &str, fields: &[&str]) -> String {
    let mut token = String::from(prefix);
    for field in fields {
        token.push(SEPARATOR);
        token.push_str(field);
    }
    token
}

fn arity<'a, const N: usize>(
    prefix: &'static str,
    fields: &[&'a str],
) -> Result<[&'a str; N], DecodeError> {
    <[&str; N]>::try_from(fields).map_err(|_| DecodeError::WrongArity {
        prefix,
        expected: N,
        found: fields.len(),
    })
}

/// Decimal id in the exact form `encode` writes: digits only, no sign,
/// no leading zeros.
fn match_id(prefix: &'static str, value: &str) -> Result<MatchId, DecodeError> {
    let invalid = || DecodeError::InvalidField {
        prefix,
        field: "match id",
        value: value.to_string(),
    };
    let canonical = !value.is_empty()
        && value.bytes().all(|b| b.is_ascii_digit())
        && (value == "0" || !value.starts_with('0'));
    if !canonical {
        return Err(invalid());
    }
    value.parse().map_err(|_| invalid())
}

fn sport(prefix: &'static str, value: &str) -> Result<Sport, DecodeError> {
    Sport::from_code(value).ok_or_else(|| DecodeError::InvalidField {
        prefix,
        field: "sport",
        value: value.to_string(),
    })
}
