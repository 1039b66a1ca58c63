//! Navigation core of the OynaIQ sports-match bot: browse matches by
//! sport, book a place, and create new matches through a short wizard.

pub mod callback;
pub mod catalog;
pub mod config;
pub mod dispatch;
pub mod logging;
pub mod mvi;
pub mod render;
pub mod router;
pub mod session;
pub mod transport;
pub mod wizard;
