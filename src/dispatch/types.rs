use tokio::sync::oneshot;

use crate::render::Outbound;
use crate::router::InboundEvent;

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("dispatcher is not running")]
    Disconnected,
    #[error("event was dropped before it was handled")]
    Dropped,
}

pub enum DispatchCommand {
    Handle {
        event: InboundEvent,
        respond_to: oneshot::Sender<Vec<Outbound>>,
    },
}
