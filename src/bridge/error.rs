//! Error types for bridge operations.

use std::fmt;
use std::io;

/// Error returned when a bridge cannot be started or did not shut down
/// cleanly.
///
/// # Examples
///
/// ```rust
/// use pullseq::{BridgeConfig, BridgeError};
///
/// let err = BridgeConfig::new().with_capacity(4).validate().unwrap_err();
/// assert!(matches!(err, BridgeError::InvalidCapacity { capacity: 4 }));
/// assert_eq!(err.to_string(), "bridge capacity must be 0 or 1, got 4");
/// ```
#[derive(Debug)]
pub enum BridgeError {
    /// The configured channel capacity is larger than one element.
    InvalidCapacity {
        /// The rejected capacity.
        capacity: usize,
    },
    /// The producer could not be started.
    Spawn(io::Error),
    /// The producer panicked while draining its source.
    ProducerPanicked,
    /// An async bridge was started outside of a tokio runtime.
    #[cfg(feature = "async")]
    NoRuntime,
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeError::InvalidCapacity { capacity } => {
                write!(f, "bridge capacity must be 0 or 1, got {}", capacity)
            }
            BridgeError::Spawn(err) => write!(f, "failed to start bridge producer: {}", err),
            BridgeError::ProducerPanicked => write!(f, "bridge producer panicked"),
            #[cfg(feature = "async")]
            BridgeError::NoRuntime => write!(f, "async bridge requires a tokio runtime"),
        }
    }
}

impl std::error::Error for BridgeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BridgeError::Spawn(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn invalid_capacity_display() {
        let err = BridgeError::InvalidCapacity { capacity: 2 };
        assert_eq!(err.to_string(), "bridge capacity must be 0 or 1, got 2");
        assert!(err.source().is_none());
    }

    #[test]
    fn spawn_error_exposes_source() {
        let err = BridgeError::Spawn(io::Error::other("no threads"));
        assert_eq!(
            err.to_string(),
            "failed to start bridge producer: no threads"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn producer_panicked_display() {
        assert_eq!(
            BridgeError::ProducerPanicked.to_string(),
            "bridge producer panicked"
        );
    }
}
