//! # Mock Framework
//!
//! Utilities for testing the user service in isolation.
//!
//! Use [`create_mock_client`] to get a message queue client and a receiver.
//! Then use [`expect_enqueue`] or [`expect_drain`] to assert what the service sent.
//! [`CountingSender`] records calls without an actor, for concurrent tests.
//! [`capture_logs`] records tracing output so tests can assert on log lines.

use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::mpsc;
use tracing::subscriber::DefaultGuard;

use crate::message::{MessageError, MessageQueueClient, MessageRequest, MessageSender, Response};

/// Creates a mock client and a receiver for asserting requests.
///
/// No `MessageQueueActor` is running behind the client: the test plays the
/// actor by reading from `receiver` and answering through the responders,
/// which makes success, failure and ordering deterministic.
pub fn create_mock_client(buffer_size: usize) -> (MessageQueueClient, mpsc::Receiver<MessageRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (MessageQueueClient::new(sender), receiver)
}

/// Helper to verify that the next message is an Enqueue request
pub async fn expect_enqueue(receiver: &mut mpsc::Receiver<MessageRequest>) -> Option<(String, Response<()>)> {
    match receiver.recv().await {
        Some(MessageRequest::Enqueue { payload, respond_to }) => Some((payload, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a DrainAndPrint request
pub async fn expect_drain(receiver: &mut mpsc::Receiver<MessageRequest>) -> Option<Response<usize>> {
    match receiver.recv().await {
        Some(MessageRequest::DrainAndPrint { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Message sender that only records what it was asked to do.
#[derive(Default)]
pub struct CountingSender {
    added: Mutex<Vec<String>>,
    drains: AtomicUsize,
}

impl CountingSender {
    pub fn added(&self) -> Vec<String> {
        self.added.lock().unwrap().clone()
    }

    pub fn drain_count(&self) -> usize {
        self.drains.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MessageSender for CountingSender {
    async fn add(&self, payload: String) -> Result<(), MessageError> {
        self.added.lock().unwrap().push(payload);
        Ok(())
    }

    async fn print_all_queue_messages(&self) -> Result<(), MessageError> {
        self.drains.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Shared buffer that collects formatted log output.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Installs a thread-local subscriber writing INFO and above into a buffer.
///
/// Only valid for single-threaded tests; keep the guard alive for the whole test.
pub fn capture_logs() -> (CapturedLogs, DefaultGuard) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (logs, guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client(10);

        let enqueue_task = tokio::spawn(async move {
            client.enqueue("hello".to_string()).await
        });

        let (payload, responder) = expect_enqueue(&mut receiver).await.expect("Expected Enqueue request");
        assert_eq!(payload, "hello");
        responder.send(Err(MessageError::QueueFull { capacity: 0 })).unwrap();

        let result = enqueue_task.await.unwrap();
        assert_eq!(result, Err(MessageError::QueueFull { capacity: 0 }));
    }

    #[test]
    fn test_capture_logs() {
        let (logs, _guard) = capture_logs();
        tracing::info!(answer = 42, "captured");
        tracing::debug!("filtered out");

        let output = logs.contents();
        assert!(output.contains("captured"));
        assert!(output.contains("answer=42"));
        assert!(!output.contains("filtered out"));
    }
}
