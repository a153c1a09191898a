//! Async bridge: a blocking tokio task feeding a `Stream`.
//!
//! Feature-gated behind `#[cfg(feature = "async")]`.

use std::fmt;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};

use futures::Stream;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::bridge::config::BridgeConfig;
use crate::bridge::error::BridgeError;
use crate::bridge::thread::produce;
use crate::seq::Seq;

/// Consumer side of an async bridge.
///
/// The source sequence is drained on tokio's blocking pool and received as
/// a [`Stream`]. tokio channels hold at least one value, so a capacity of 0
/// behaves like 1 here.
///
/// Dropping the stream raises the stop flag and closes the channel; the
/// blocking task exits after its current pull. [`BridgeStream::close`] does
/// the same and also waits for the task.
///
/// # Example
///
/// ```rust
/// use futures::StreamExt;
/// use pullseq::prelude::*;
/// use pullseq::bridge::BridgeStream;
///
/// # tokio_test::block_on(async {
/// let source = from_iter(vec!["aa", "aaa", "aaaaaaa", "a"]);
/// let stream = BridgeStream::spawn(source, BridgeConfig::default()).unwrap();
///
/// let received: Vec<_> = stream.collect().await;
/// assert_eq!(received, vec!["aa", "aaa", "aaaaaaa", "a"]);
/// # });
/// ```
pub struct BridgeStream<T> {
    rx: mpsc::Receiver<T>,
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl<T> BridgeStream<T>
where
    T: Send + 'static,
{
    /// Start a blocking task draining `seq`.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::InvalidCapacity`] for a capacity above one and
    /// [`BridgeError::NoRuntime`] outside of a tokio runtime.
    pub fn spawn<S>(seq: S, config: BridgeConfig) -> Result<Self, BridgeError>
    where
        S: Seq<Item = T> + Send + 'static,
    {
        config.validate()?;
        let runtime =
            tokio::runtime::Handle::try_current().map_err(|_| BridgeError::NoRuntime)?;
        let (tx, rx) = mpsc::channel(config.capacity().max(1));
        let stop = Arc::new(AtomicBool::new(false));
        let producer_stop = Arc::clone(&stop);

        let handle = runtime.spawn_blocking(move || {
            let sent = produce(seq, |item| tx.blocking_send(item).is_ok(), &producer_stop);

            #[cfg(feature = "tracing")]
            tracing::debug!(sent, "async bridge producer finished");
            #[cfg(not(feature = "tracing"))]
            let _ = sent;
        });

        Ok(BridgeStream {
            rx,
            stop,
            handle: Some(handle),
        })
    }
}

impl<T> BridgeStream<T> {
    /// Stop the producer and wait for its task to finish.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::ProducerPanicked`] if the producer panicked.
    pub async fn close(mut self) -> Result<(), BridgeError> {
        self.stop.store(true, Ordering::Release);
        self.rx.close();
        // Unblock a pending handoff.
        while self.rx.try_recv().is_ok() {}

        match self.handle.take() {
            Some(handle) => handle.await.map_err(|err| {
                #[cfg(feature = "tracing")]
                tracing::warn!("async bridge producer failed: {}", err);
                #[cfg(not(feature = "tracing"))]
                eprintln!("async bridge producer failed: {}", err);
                BridgeError::ProducerPanicked
            }),
            None => Ok(()),
        }
    }
}

impl<T> Stream for BridgeStream<T> {
    type Item = T;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<T>> {
        self.rx.poll_recv(cx)
    }
}

impl<T> Drop for BridgeStream<T> {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Release);
        self.rx.close();
    }
}

impl<T> fmt::Debug for BridgeStream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BridgeStream")
            .field("stopped", &self.stop.load(Ordering::Acquire))
            .field("producer_running", &self.handle.is_some())
            .finish()
    }
}
