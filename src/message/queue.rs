use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

use super::{MessageError, MessageSender};

// =============================================================================
// 1. THE MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, MessageError>>;

#[derive(Debug)]
pub enum MessageRequest {
    Enqueue {
        payload: String,
        respond_to: Response<()>,
    },
    DrainAndPrint {
        respond_to: Response<usize>,
    },
    Len {
        respond_to: Response<usize>,
    },
}

// =============================================================================
// 2. THE ACTOR SERVER
// =============================================================================

/// Owns the FIFO queue of pending messages. Stops once every client is dropped.
pub struct MessageQueueActor {
    receiver: mpsc::Receiver<MessageRequest>,
    queue: VecDeque<String>,
    capacity: usize,
}

impl MessageQueueActor {
    pub fn new(buffer_size: usize, capacity: usize) -> (Self, MessageQueueClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            queue: VecDeque::new(),
            capacity,
        };
        (actor, MessageQueueClient::new(sender))
    }

    pub async fn run(mut self) {
        info!(capacity = self.capacity, "Message queue starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                MessageRequest::Enqueue { payload, respond_to } => {
                    let _ = respond_to.send(self.handle_enqueue(payload));
                }
                MessageRequest::DrainAndPrint { respond_to } => {
                    let _ = respond_to.send(Ok(self.handle_drain_and_print()));
                }
                MessageRequest::Len { respond_to } => {
                    let _ = respond_to.send(Ok(self.queue.len()));
                }
            }
        }
        info!(pending = self.queue.len(), "Message queue stopped");
    }

    fn handle_enqueue(&mut self, payload: String) -> Result<(), MessageError> {
        if self.queue.len() >= self.capacity {
            warn!(capacity = self.capacity, "Message queue full, rejecting message");
            return Err(MessageError::QueueFull { capacity: self.capacity });
        }
        debug!(payload = %payload, "Message enqueued");
        self.queue.push_back(payload);
        Ok(())
    }

    fn handle_drain_and_print(&mut self) -> usize {
        if self.queue.is_empty() {
            info!("No queued messages");
            return 0;
        }
        let drained = self.queue.len();
        for (position, message) in self.queue.drain(..).enumerate() {
            info!(position, payload = %message, "Queued message");
        }
        drained
    }
}

// =============================================================================
// 3. THE CLIENT
// =============================================================================

/// Cloneable handle to a running [`MessageQueueActor`].
#[derive(Clone)]
pub struct MessageQueueClient {
    sender: mpsc::Sender<MessageRequest>,
}

impl MessageQueueClient {
    pub(crate) fn new(sender: mpsc::Sender<MessageRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(Response<T>) -> MessageRequest,
    ) -> Result<T, MessageError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| MessageError::ActorClosed)?;
        response.await.map_err(|_| MessageError::ActorDropped)?
    }

    #[instrument(skip(self))]
    pub async fn enqueue(&self, payload: String) -> Result<(), MessageError> {
        debug!("Sending request");
        self.request(|respond_to| MessageRequest::Enqueue { payload, respond_to })
            .await
    }

    /// Drains the queue, returning how many messages were printed.
    #[instrument(skip(self))]
    pub async fn drain_and_print(&self) -> Result<usize, MessageError> {
        debug!("Sending request");
        self.request(|respond_to| MessageRequest::DrainAndPrint { respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn len(&self) -> Result<usize, MessageError> {
        debug!("Sending request");
        self.request(|respond_to| MessageRequest::Len { respond_to }).await
    }
}

#[async_trait]
impl MessageSender for MessageQueueClient {
    async fn add(&self, payload: String) -> Result<(), MessageError> {
        self.enqueue(payload).await
    }

    async fn print_all_queue_messages(&self) -> Result<(), MessageError> {
        self.drain_and_print().await.map(|_| ())
    }
}
