//! Tests for the thread-backed bridge.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::assert_released_once;
use crate::bridge::{Bridge, BridgeConfig, BridgeError, BridgeState};
use crate::seq::{from_fn, from_iter, SeqExt};
use crate::testing::ReleaseProbe;

fn naturals(counter: Arc<AtomicUsize>) -> impl crate::seq::Seq<Item = usize> + Send + 'static {
    from_fn(move |co| async move {
        let mut n = 0;
        loop {
            counter.fetch_add(1, Ordering::SeqCst);
            if !co.yield_(n).await {
                return;
            }
            n += 1;
        }
    })
}

#[test]
fn full_read_preserves_order() {
    let words = vec!["aa", "aaa", "aaaaaaa", "a"];
    let bridge = from_iter(words.clone()).filter(|_| true).bridge().unwrap();
    assert_eq!(bridge.to_vec(), words);
}

#[test]
fn full_read_closes_stream() {
    let probe = ReleaseProbe::new();
    let mut bridge = probe.source(vec![1, 2, 3]).bridge().unwrap();

    assert_eq!(bridge.state(), BridgeState::Streaming);
    assert_eq!(bridge.recv(), Some(1));
    assert_eq!(bridge.recv(), Some(2));
    assert_eq!(bridge.recv(), Some(3));
    assert_eq!(bridge.recv(), None);
    assert_eq!(bridge.recv(), None);
    assert_eq!(bridge.state(), BridgeState::Closed);

    // The producer has been joined by now.
    assert_released_once!(probe);
    assert!(bridge.close().is_ok());
}

#[test]
fn single_slot_capacity_preserves_order() {
    let config = BridgeConfig::new().with_capacity(1);
    let bridge = from_iter(0..50).bridge_with(config).unwrap();
    let received: Vec<_> = bridge.into_iter().collect();
    assert_eq!(received, (0..50).collect::<Vec<_>>());
}

#[test]
fn early_stop_terminates_infinite_producer() {
    let produced = Arc::new(AtomicUsize::new(0));
    let mut bridge = naturals(Arc::clone(&produced)).bridge().unwrap();

    assert_eq!(bridge.recv(), Some(0));
    assert_eq!(bridge.recv(), Some(1));
    assert_eq!(bridge.recv(), Some(2));
    assert!(bridge.close().is_ok());

    // Rendezvous handoff: at most one value beyond what was received.
    let total = produced.load(Ordering::SeqCst);
    assert!(total <= 4, "producer ran ahead: {}", total);

    // Joined: nothing keeps producing.
    std::thread::sleep(Duration::from_millis(20));
    assert_eq!(produced.load(Ordering::SeqCst), total);
}

#[test]
fn dropping_bridge_releases_source_once() {
    let probe = ReleaseProbe::new();
    let mut bridge = probe.source(0..1_000).bridge().unwrap();
    assert_eq!(bridge.recv(), Some(0));
    assert_eq!(bridge.state(), BridgeState::Streaming);
    drop(bridge);

    assert_released_once!(probe);
    assert!(probe.pulled() <= 2);
}

#[test]
fn close_without_reading_is_abandoned() {
    let probe = ReleaseProbe::new();
    let bridge = probe.source(vec!["never"; 10]).bridge().unwrap();
    assert!(bridge.close().is_ok());
    assert_released_once!(probe);
}

#[test]
fn abandoned_state_is_reported() {
    let mut iter = from_iter(0..10).bridge().unwrap().into_iter();
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.state(), BridgeState::Streaming);

    let mut bridge = from_iter(0..3).bridge().unwrap();
    assert_eq!(bridge.recv(), Some(0));
    bridge.stop().unwrap();
    assert_eq!(bridge.state(), BridgeState::Abandoned);
    assert_eq!(bridge.recv(), None);
}

#[test]
fn bridge_composes_with_combinators_on_consumer_side() {
    let bridged = from_iter(["forty-two", "42", "7"]).bridge().unwrap();
    let parsed = bridged
        .map_with_error(|s| s.parse::<i32>())
        .with_index(1)
        .to_vec();

    assert_eq!(parsed.len(), 3);
    assert!(parsed[0].1.is_err());
    assert_eq!(parsed[1], (2, Ok(42)));
    assert_eq!(parsed[2], (3, Ok(7)));
}

#[test]
fn early_stop_through_consumer_combinators() {
    let produced = Arc::new(AtomicUsize::new(0));
    let taken: Vec<_> = naturals(Arc::clone(&produced))
        .bridge()
        .unwrap()
        .with_index(0)
        .pull()
        .take(3)
        .collect();

    assert_eq!(taken, vec![(0, 0), (1, 1), (2, 2)]);
    let total = produced.load(Ordering::SeqCst);
    std::thread::sleep(Duration::from_millis(20));
    assert_eq!(produced.load(Ordering::SeqCst), total);
}

#[test]
fn bridge_drained_inside_consumer_closure() {
    let nested = from_iter(vec![1, 2])
        .map(|n| from_iter(vec![n, n * 10]).bridge().unwrap().to_vec())
        .to_vec();
    assert_eq!(nested, vec![vec![1, 10], vec![2, 20]]);
}

#[test]
fn producer_thread_uses_configured_name() {
    let name = Arc::new(std::sync::Mutex::new(None));
    let seen = Arc::clone(&name);
    let seq = from_fn(move |co| async move {
        *seen.lock().unwrap() = std::thread::current().name().map(str::to_string);
        co.yield_(()).await;
    });

    let config = BridgeConfig::new().with_thread_name("bridge-under-test");
    assert_eq!(seq.bridge_with(config).unwrap().to_vec(), vec![()]);
    assert_eq!(
        name.lock().unwrap().as_deref(),
        Some("bridge-under-test")
    );
}

#[test]
fn invalid_capacity_is_rejected() {
    let result = from_iter(vec![1]).bridge_with(BridgeConfig::new().with_capacity(3));
    assert!(matches!(
        result,
        Err(BridgeError::InvalidCapacity { capacity: 3 })
    ));
}

#[test]
fn producer_panic_ends_stream_and_is_reported() {
    let seq = from_fn(|co| async move {
        co.yield_(1).await;
        co.yield_(2).await;
        panic!("source failed");
    });

    let mut bridge = Bridge::spawn(seq, BridgeConfig::default()).unwrap();
    assert_eq!(bridge.recv(), Some(1));
    assert_eq!(bridge.recv(), Some(2));
    assert_eq!(bridge.recv(), None);
    assert!(matches!(bridge.close(), Err(BridgeError::ProducerPanicked)));
}

#[cfg(feature = "async")]
mod stream_tests {
    use futures::StreamExt;

    use super::*;
    use crate::bridge::BridgeStream;

    #[tokio::test]
    async fn stream_preserves_order() {
        let stream =
            BridgeStream::spawn(from_iter(vec!["aa", "aaa", "aaaaaaa", "a"]), BridgeConfig::new())
                .unwrap();
        let received: Vec<_> = stream.collect().await;
        assert_eq!(received, vec!["aa", "aaa", "aaaaaaa", "a"]);
    }

    #[tokio::test]
    async fn stream_close_stops_infinite_producer() {
        let produced = Arc::new(AtomicUsize::new(0));
        let mut stream =
            BridgeStream::spawn(naturals(Arc::clone(&produced)), BridgeConfig::new()).unwrap();

        assert_eq!(stream.next().await, Some(0));
        assert_eq!(stream.next().await, Some(1));
        assert!(stream.close().await.is_ok());

        let total = produced.load(Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(produced.load(Ordering::SeqCst), total);
    }

    #[test]
    fn stream_requires_runtime() {
        let result = BridgeStream::spawn(from_iter(vec![1]), BridgeConfig::new());
        assert!(matches!(result, Err(BridgeError::NoRuntime)));
    }
}

#[cfg(feature = "tracing")]
mod tracing_tests {
    use tracing::Level;
    use tracing_test::traced_test;

    use super::*;

    #[test]
    fn bridge_runs_under_fmt_subscriber() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::TRACE)
            .with_test_writer()
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let probe = ReleaseProbe::new();
            let mut bridge = probe.source(0..100).bridge().unwrap();
            assert_eq!(bridge.recv(), Some(0));
            assert!(bridge.close().is_ok());
            assert_released_once!(probe);
        });
    }

    #[test]
    #[traced_test]
    fn abandoning_a_bridge_is_logged() {
        let mut bridge = from_iter(0..10).bridge().unwrap();
        assert_eq!(bridge.recv(), Some(0));
        bridge.close().unwrap();
        assert!(logs_contain("bridge abandoned by consumer"));
    }
}
