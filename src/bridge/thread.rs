//! Thread-backed bridge: a producer thread feeding a bounded channel.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::bridge::config::BridgeConfig;
use crate::bridge::error::BridgeError;
use crate::seq::{Co, Seq, SeqExt};

/// Lifecycle of a bridge as seen by its consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeState {
    /// The producer may still hand over values.
    Streaming,
    /// The consumer observed the end of the stream.
    Closed,
    /// The consumer stopped before the end of the stream.
    Abandoned,
}

/// Drain `seq` into `send` until the source ends, `send` fails, or `stop` is
/// raised. Returns how many values were handed over.
pub(crate) fn produce<S, F>(seq: S, mut send: F, stop: &AtomicBool) -> usize
where
    S: Seq,
    F: FnMut(S::Item) -> bool,
{
    let mut source = seq.pull();
    let mut sent = 0;
    while !stop.load(Ordering::Acquire) {
        let Some(item) = source.next() else {
            break;
        };
        if !send(item) {
            break;
        }
        sent += 1;
    }
    source.release();
    sent
}

/// Consumer side of a thread-backed bridge.
///
/// Created by [`Bridge::spawn`] or [`SeqExt::bridge`]. A producer thread
/// pulls from the source sequence and hands each value over a channel of
/// capacity 0 or 1, so it never runs more than one value ahead of the
/// consumer.
///
/// `Bridge` is itself a [`Seq`] and can be fed into further combinators on
/// the consumer side. It can also be iterated directly.
///
/// # Shutdown
///
/// Dropping the bridge, or calling [`Bridge::close`], raises the stop flag,
/// drops the receiving end (which fails a handoff the producer is blocked
/// in) and joins the producer thread. The producer releases its source and
/// exits after at most the pull it is currently running.
///
/// # Async consumers
///
/// [`Bridge::recv`] blocks the calling thread, and so does pulling a `Bridge`
/// (or a pipeline built on one) through [`Puller`](crate::seq::Puller) as a
/// `Stream`. Inside a tokio runtime that stalls a worker thread; use
/// `BridgeStream` (feature `async`) there instead.
///
/// # Example
///
/// ```rust
/// use pullseq::prelude::*;
///
/// # fn main() -> Result<(), BridgeError> {
/// let naturals = from_fn(|co| async move {
///     let mut n = 0u64;
///     while co.yield_(n).await {
///         n += 1;
///     }
/// });
///
/// let mut bridge = naturals.bridge()?;
/// assert_eq!(bridge.recv(), Some(0));
/// assert_eq!(bridge.recv(), Some(1));
/// // The producer is stopped and joined here.
/// bridge.close()?;
/// # Ok(())
/// # }
/// ```
pub struct Bridge<T> {
    rx: Option<Receiver<T>>,
    stop_flag: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
    state: BridgeState,
    panicked: bool,
}

impl<T> Bridge<T>
where
    T: Send + 'static,
{
    /// Start a producer thread draining `seq`.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::InvalidCapacity`] for a capacity above one and
    /// [`BridgeError::Spawn`] when the thread cannot be started.
    pub fn spawn<S>(seq: S, config: BridgeConfig) -> Result<Self, BridgeError>
    where
        S: Seq<Item = T> + Send + 'static,
    {
        config.validate()?;
        let (tx, rx) = mpsc::sync_channel(config.capacity());
        let stop_flag = Arc::new(AtomicBool::new(false));
        let producer_stop = Arc::clone(&stop_flag);

        let handle = thread::Builder::new()
            .name(config.thread_name().to_string())
            .spawn(move || {
                #[cfg(feature = "tracing")]
                tracing::debug!("bridge producer started");

                let sent = produce(seq, |item| tx.send(item).is_ok(), &producer_stop);

                #[cfg(feature = "tracing")]
                tracing::debug!(
                    sent,
                    stopped = producer_stop.load(Ordering::Acquire),
                    "bridge producer finished"
                );
                #[cfg(not(feature = "tracing"))]
                let _ = sent;
            })
            .map_err(BridgeError::Spawn)?;

        Ok(Bridge {
            rx: Some(rx),
            stop_flag,
            handle: Some(handle),
            state: BridgeState::Streaming,
            panicked: false,
        })
    }
}

impl<T> Bridge<T> {
    /// Receive the next value, blocking until the producer hands one over.
    ///
    /// Returns `None` once the stream is closed or the bridge was abandoned.
    pub fn recv(&mut self) -> Option<T> {
        let rx = self.rx.as_ref()?;
        match rx.recv() {
            Ok(item) => Some(item),
            Err(_) => {
                self.rx = None;
                self.state = BridgeState::Closed;
                let _ = self.join();
                None
            }
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> BridgeState {
        self.state
    }

    /// Stop the producer and wait for it to exit.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::ProducerPanicked`] if the producer thread
    /// panicked.
    pub fn close(mut self) -> Result<(), BridgeError> {
        self.stop()
    }

    /// Signal the producer to stop and join it, keeping the bridge around
    /// for inspection.
    ///
    /// Idempotent; every later [`Bridge::recv`] returns `None`.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::ProducerPanicked`] if the producer thread
    /// panicked.
    pub fn stop(&mut self) -> Result<(), BridgeError> {
        if self.rx.take().is_some() {
            self.stop_flag.store(true, Ordering::Release);
            if self.state == BridgeState::Streaming {
                self.state = BridgeState::Abandoned;

                #[cfg(feature = "tracing")]
                tracing::debug!("bridge abandoned by consumer");
            }
        }
        self.join()
    }

    fn join(&mut self) -> Result<(), BridgeError> {
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                self.panicked = true;

                #[cfg(feature = "tracing")]
                tracing::warn!("bridge producer panicked");
                #[cfg(not(feature = "tracing"))]
                eprintln!("bridge producer panicked");
            }
        }
        if self.panicked {
            Err(BridgeError::ProducerPanicked)
        } else {
            Ok(())
        }
    }
}

impl<T> Drop for Bridge<T> {
    fn drop(&mut self) {
        let _ = self.stop();
    }
}

// Blocking receive; async consumers go through `BridgeStream`.
impl<T> Seq for Bridge<T> {
    type Item = T;

    async fn drive(mut self, co: Co<T>) {
        while let Some(item) = self.recv() {
            if !co.yield_(item).await {
                return;
            }
        }
    }
}

impl<T> IntoIterator for Bridge<T> {
    type Item = T;
    type IntoIter = BridgeIter<T>;

    fn into_iter(self) -> BridgeIter<T> {
        BridgeIter { bridge: self }
    }
}

/// Blocking iterator over a [`Bridge`].
#[derive(Debug)]
pub struct BridgeIter<T> {
    bridge: Bridge<T>,
}

impl<T> BridgeIter<T> {
    /// Current lifecycle state of the underlying bridge.
    pub fn state(&self) -> BridgeState {
        self.bridge.state()
    }
}

impl<T> Iterator for BridgeIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.bridge.recv()
    }
}

impl<T> fmt::Debug for Bridge<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bridge")
            .field("state", &self.state)
            .field("producer_running", &self.handle.is_some())
            .finish()
    }
}
