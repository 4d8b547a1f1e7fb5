#![cfg(test)]
use pinger_common::target::Target;
use pinger_core::handshake_probe;
use pinger_core::prober::{TcpProber, run_probe};
use std::time::{Duration, Instant};

use crate::utils::{closed_target, open_target};

const TIMEOUT: Duration = Duration::from_millis(1500);
const SLACK: Duration = Duration::from_millis(750);

#[tokio::test]
async fn probe_open_loopback_listener() {
    let (_listener, target) = open_target();

    let start = Instant::now();
    let reachable = handshake_probe(&target, TIMEOUT).await;

    assert!(reachable, "listening port reported unreachable");
    assert!(start.elapsed() < TIMEOUT, "took {:?}", start.elapsed());
}

#[tokio::test]
async fn probe_closed_loopback_port() {
    let target = closed_target();

    let start = Instant::now();
    let reachable = handshake_probe(&target, TIMEOUT).await;

    assert!(!reachable, "closed port reported reachable");
    assert!(start.elapsed() <= TIMEOUT + SLACK, "took {:?}", start.elapsed());
}

#[tokio::test]
#[ignore]
async fn probe_non_routable_address_respects_timeout() {
    let target = Target::new("10.255.255.1", 80);
    let timeout = Duration::from_millis(300);

    let start = Instant::now();
    let reachable = handshake_probe(&target, timeout).await;

    assert!(!reachable);
    assert!(start.elapsed() <= timeout + SLACK, "took {:?}", start.elapsed());
}

#[tokio::test]
async fn probe_unresolvable_host() {
    let target = Target::new("does-not-exist.invalid", 80);
    let start = Instant::now();

    assert!(!handshake_probe(&target, TIMEOUT).await);
    assert!(start.elapsed() <= TIMEOUT + SLACK, "took {:?}", start.elapsed());
}

#[tokio::test]
async fn concurrent_probes_keep_their_own_results() {
    let (_listener, open) = open_target();
    let closed = closed_target();
    let prober = TcpProber::new(TIMEOUT);

    let (a, b, c) = tokio::join!(
        run_probe(&prober, open.clone()),
        run_probe(&prober, closed.clone()),
        run_probe(&prober, open.clone()),
    );

    assert_eq!(a.target, open);
    assert!(a.reachable);
    assert_eq!(b.target, closed);
    assert!(!b.reachable);
    assert!(c.reachable);
}
