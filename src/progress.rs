//! Per-request progress fan-out for streaming clients.
//!
//! Each request id maps to a broadcast channel. Every channel is dropped from
//! the map a fixed grace period after it was created, whether or not an
//! analysis ever used it; once the map entry and the analysis handle are
//! gone, subscribers see the stream end.

use serde::Serialize;
use std::collections::HashMap;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tokio::sync::{broadcast, Mutex};
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::Stream;
use tracing::debug;

use crate::engine::AnalysisStage;

const CHANNEL_CAPACITY: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageEvent {
    pub stage: &'static str,
    pub message: &'static str,
    pub timestamp_ms: u128,
}

impl StageEvent {
    pub fn from_stage(stage: AnalysisStage) -> Self {
        Self::new(stage.label(), stage.message())
    }

    pub fn connected() -> Self {
        Self::new("connected", "Streaming analysis progress")
    }

    /// The final event a subscriber receives.
    pub fn is_terminal(&self) -> bool {
        self.stage == AnalysisStage::Done.label()
    }

    fn new(stage: &'static str, message: &'static str) -> Self {
        Self {
            stage,
            message,
            timestamp_ms: now_ms(),
        }
    }
}

#[derive(Clone)]
pub struct ProgressHub {
    channels: Arc<Mutex<HashMap<String, broadcast::Sender<StageEvent>>>>,
    grace: Duration,
}

impl ProgressHub {
    pub fn new(grace: Duration) -> Self {
        Self {
            channels: Arc::new(Mutex::new(HashMap::new())),
            grace,
        }
    }

    /// Sender for `request_id`, creating the channel and scheduling its
    /// release on first use.
    pub async fn sender(&self, request_id: &str) -> broadcast::Sender<StageEvent> {
        let mut channels = self.channels.lock().await;
        if let Some(sender) = channels.get(request_id) {
            return sender.clone();
        }

        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        channels.insert(request_id.to_string(), sender.clone());
        self.release_after_grace(request_id.to_string());
        sender
    }

    /// Subscribes to `request_id` and announces the connection. The stream
    /// yields up to and including the `done` event.
    pub async fn subscribe(&self, request_id: &str) -> StageStream {
        let sender = self.sender(request_id).await;
        let receiver = sender.subscribe();
        let _ = sender.send(StageEvent::connected());
        StageStream {
            inner: BroadcastStream::new(receiver),
            finished: false,
        }
    }

    pub async fn open_channels(&self) -> usize {
        self.channels.lock().await.len()
    }

    fn release_after_grace(&self, request_id: String) {
        let channels = self.channels.clone();
        let grace = self.grace;
        tokio::spawn(async move {
            tokio::time::sleep(grace).await;
            if channels.lock().await.remove(&request_id).is_some() {
                debug!(request_id = %request_id, "released progress channel");
            }
        });
    }
}

pub struct StageStream {
    inner: BroadcastStream<StageEvent>,
    finished: bool,
}

impl Stream for StageStream {
    type Item = StageEvent;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        if self.finished {
            return Poll::Ready(None);
        }
        loop {
            match Pin::new(&mut self.inner).poll_next(cx) {
                Poll::Ready(Some(Ok(event))) => {
                    self.finished = event.is_terminal();
                    return Poll::Ready(Some(event));
                }
                // lagged receiver: skip what was missed
                Poll::Ready(Some(Err(_))) => continue,
                Poll::Ready(None) => return Poll::Ready(None),
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}

fn now_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_millis())
        .unwrap_or(0)
}
