//! Event queue between transports and the router.
//!
//! Transports talk to a [`DispatchClient`]; a single [`Dispatcher`] task
//! fans events out to one worker per session, so one user's events are
//! handled in arrival order while different users proceed concurrently.

mod client;
mod server;
mod types;

pub use client::DispatchClient;
pub use server::Dispatcher;
pub use types::{DispatchCommand, DispatchError};

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::router::Router;

const DISPATCH_BUFFER: usize = 64;

pub struct DispatchLayer;

impl DispatchLayer {
    pub fn new(router: Arc<Router>) -> (DispatchClient, Dispatcher) {
        let (sender, receiver) = mpsc::channel(DISPATCH_BUFFER);
        (
            DispatchClient::new(sender),
            Dispatcher::new(receiver, router),
        )
    }
}
