//! Bridge configuration.

use crate::bridge::error::BridgeError;

/// Default name of bridge producer threads.
pub const DEFAULT_THREAD_NAME: &str = "pullseq-bridge";

/// Configuration for a [`Bridge`](crate::bridge::Bridge).
///
/// # Example
///
/// ```rust
/// use pullseq::BridgeConfig;
///
/// let config = BridgeConfig::new()
///     .with_capacity(1)
///     .with_thread_name("word-producer");
///
/// assert_eq!(config.capacity(), 1);
/// assert_eq!(config.thread_name(), "word-producer");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    capacity: usize,
    thread_name: String,
}

impl BridgeConfig {
    /// Rendezvous channel, default thread name.
    pub fn new() -> Self {
        BridgeConfig {
            capacity: 0,
            thread_name: DEFAULT_THREAD_NAME.to_string(),
        }
    }

    /// Set how many values may wait in the channel.
    ///
    /// `0` makes every handoff a rendezvous; `1` lets the producer run one
    /// value ahead of the consumer. Larger values are rejected by
    /// [`BridgeConfig::validate`].
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the name of the producer thread.
    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = name.into();
        self
    }

    /// Channel capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Producer thread name.
    pub fn thread_name(&self) -> &str {
        &self.thread_name
    }

    /// Check that the configuration can be used to start a bridge.
    pub fn validate(&self) -> Result<(), BridgeError> {
        if self.capacity > 1 {
            return Err(BridgeError::InvalidCapacity {
                capacity: self.capacity,
            });
        }
        Ok(())
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self::new()
    }
}
