use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};

use crate::render::Outbound;
use crate::router::{InboundEvent, Router};
use crate::session::SessionId;

use super::types::DispatchCommand;

const WORKER_BUFFER: usize = 16;
const WORKER_IDLE: Duration = Duration::from_secs(300);

struct Job {
    event: InboundEvent,
    respond_to: oneshot::Sender<Vec<Outbound>>,
}

pub struct Dispatcher {
    receiver: mpsc::Receiver<DispatchCommand>,
    router: Arc<Router>,
}

impl Dispatcher {
    pub fn new(receiver: mpsc::Receiver<DispatchCommand>, router: Arc<Router>) -> Self {
        Self { receiver, router }
    }

    /// Run until every client is dropped.
    pub async fn run(mut self) {
        let mut workers: HashMap<SessionId, mpsc::Sender<Job>> = HashMap::new();

        while let Some(command) = self.receiver.recv().await {
            match command {
                DispatchCommand::Handle { event, respond_to } => {
                    let session = event.session;
                    let mut job = Job { event, respond_to };

                    // A worker may have retired between lookups; respawn and retry once.
                    for _ in 0..2 {
                        let worker = workers
                            .entry(session)
                            .or_insert_with(|| spawn_worker(session, Arc::clone(&self.router)));
                        let sent = worker.send(job).await;
                        match sent {
                            Ok(()) => break,
                            Err(mpsc::error::SendError(returned)) => {
                                workers.remove(&session);
                                job = returned;
                            }
                        }
                    }
                }
            }
            workers.retain(|_, worker| !worker.is_closed());
        }

        tracing::debug!(workers = workers.len(), "Dispatcher stopped");
    }
}

fn spawn_worker(session: SessionId, router: Arc<Router>) -> mpsc::Sender<Job> {
    let (sender, mut receiver) = mpsc::channel::<Job>(WORKER_BUFFER);
    tracing::trace!(%session, "Session worker started");

    tokio::spawn(async move {
        while let Ok(Some(job)) = tokio::time::timeout(WORKER_IDLE, receiver.recv()).await {
            serve(&router, session, job);
        }
        drain(&mut receiver, &router, session);
        tracing::trace!(%session, "Session worker retired");
    });

    sender
}

fn serve(router: &Router, session: SessionId, job: Job) {
    let outbound = router.handle(&job.event);
    if job.respond_to.send(outbound).is_err() {
        tracing::trace!(%session, "Dispatch: response dropped (receiver gone)");
    }
}

/// Close a retiring worker's queue and answer whatever is still in it.
///
/// Jobs sent after the close come back to the dispatcher, which respawns
/// the worker.
fn drain(receiver: &mut mpsc::Receiver<Job>, router: &Router, session: SessionId) {
    receiver.close();
    while let Ok(job) = receiver.try_recv() {
        serve(router, session, job);
    }
}
