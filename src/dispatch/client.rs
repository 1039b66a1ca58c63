use tokio::sync::{mpsc, oneshot};

use crate::render::Outbound;
use crate::router::InboundEvent;

use super::types::{DispatchCommand, DispatchError};

#[derive(Clone)]
pub struct DispatchClient {
    sender: mpsc::Sender<DispatchCommand>,
}

impl DispatchClient {
    pub fn new(sender: mpsc::Sender<DispatchCommand>) -> Self {
        Self { sender }
    }

    /// Queue an event and wait for the render instructions it produced.
    pub async fn handle(&self, event: InboundEvent) -> Result<Vec<Outbound>, DispatchError> {
        let pending = self.submit(event).await?;
        pending.await.map_err(|_| DispatchError::Dropped)
    }

    /// Queue an event without waiting for it to be handled.
    ///
    /// Events submitted one after another are handled in that order within
    /// a session.
    pub async fn submit(
        &self,
        event: InboundEvent,
    ) -> Result<oneshot::Receiver<Vec<Outbound>>, DispatchError> {
        let (respond_to, receiver) = oneshot::channel();
        self.sender
            .send(DispatchCommand::Handle { event, respond_to })
            .await
            .map_err(|_| DispatchError::Disconnected)?;
        Ok(receiver)
    }
}
