use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::item::StreamItem;
use super::observer::Observer;
use crate::domain::Record;
use crate::io::{ReadStats, SourceError, SourceReader};

/// Observer that forwards every callback onto the shared channel
struct ChannelSink {
    tx: mpsc::UnboundedSender<StreamItem>,
}

impl ChannelSink {
    fn send(&self, item: StreamItem) {
        if self.tx.send(item).is_err() {
            debug!("Consumer dropped the stream, discarding item");
        }
    }
}

impl Observer<Record> for ChannelSink {
    fn on_next(&mut self, item: Record) {
        self.send(item.into());
    }

    fn on_error(&mut self, error: SourceError) {
        self.send(StreamItem::Error(error));
    }

    fn on_complete(&mut self) {
        self.send(StreamItem::Terminator);
    }
}

/// Fans several source readers into one item stream
///
/// Each source runs on its own blocking task and writes into a shared
/// unbounded channel, so producers never wait on the consumer.
///
/// # Example
/// ```rust,ignore
/// let mut items = SourceMultiplexer::new()
///     .add_source(SourceReader::navaids("nav.dat.gz"))
///     .add_source(SourceReader::airports("apt.dat.gz"))
///     .spawn();
///
/// while let Some(item) = items.next().await {
///     match item { /* ... */ }
/// }
/// ```
#[derive(Debug, Default)]
pub struct SourceMultiplexer {
    sources: Vec<SourceReader>,
}

impl SourceMultiplexer {
    /// Create an empty multiplexer
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a source to read (fluent interface)
    pub fn add_source(mut self, source: SourceReader) -> Self {
        self.sources.push(source);
        self
    }

    /// Number of sources added so far
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Start one reader task per source and return the merged stream
    ///
    /// The stream expects one terminal item per source added here. Must be
    /// called from within a tokio runtime.
    pub fn spawn(self) -> MultiplexedStream {
        let (tx, rx) = mpsc::unbounded_channel();
        let expected = self.sources.len();

        let handles = self
            .sources
            .into_iter()
            .map(|source| {
                let mut sink = ChannelSink { tx: tx.clone() };
                tokio::task::spawn_blocking(move || {
                    debug!(
                        path = %source.path().display(),
                        format = source.format().name(),
                        "Starting source reader"
                    );
                    source.read(&mut sink)
                })
            })
            .collect();

        MultiplexedStream {
            rx,
            expected,
            terminated: 0,
            handles,
        }
    }
}

/// Single-consumer view over all multiplexed sources
///
/// Yields records from every source in arrival order, including each
/// source's terminal item, and ends once one terminal item per source has
/// been yielded. Records of one source keep their file order; sources
/// interleave arbitrarily.
pub struct MultiplexedStream {
    rx: mpsc::UnboundedReceiver<StreamItem>,
    expected: usize,
    terminated: usize,
    handles: Vec<JoinHandle<ReadStats>>,
}

impl MultiplexedStream {
    /// Number of sources this stream waits for
    pub fn expected_sources(&self) -> usize {
        self.expected
    }

    /// Terminal items observed so far
    pub fn terminated_sources(&self) -> usize {
        self.terminated
    }

    /// Wait for all reader tasks and collect their statistics, in source order
    ///
    /// A reader task that panicked is reported as failed.
    pub async fn join(self) -> Vec<ReadStats> {
        let mut stats = Vec::with_capacity(self.handles.len());
        for handle in self.handles {
            stats.push(handle.await.unwrap_or(ReadStats {
                failed: true,
                ..ReadStats::default()
            }));
        }
        stats
    }
}

impl Stream for MultiplexedStream {
    type Item = StreamItem;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        if self.terminated >= self.expected {
            return Poll::Ready(None);
        }

        match self.rx.poll_recv(cx) {
            Poll::Ready(Some(item)) => {
                if item.is_terminal() {
                    self.terminated += 1;
                }
                Poll::Ready(Some(item))
            }
            Poll::Ready(None) => {
                // Every sender is gone; a reader task died without its terminal item
                warn!(
                    expected = self.expected,
                    terminated = self.terminated,
                    "Source channel closed early"
                );
                self.terminated = self.expected;
                Poll::Ready(None)
            }
            Poll::Pending => Poll::Pending,
        }
    }
}
