//! The probing **abstraction** the session depends on.
//!
//! [`Session`](crate::session::Session) only knows about [`Prober`]; the real
//! [`TcpProber`] is swapped for a fake in tests.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use pinger_common::config::DEFAULT_PROBE_TIMEOUT;
use pinger_common::target::Target;
use tracing::debug;

use crate::network::tcp;

/// Outcome of a single probe, tied to the target it ran against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub target: Target,
    pub reachable: bool,
    pub elapsed: Duration,
}

/// Answers "does `target` accept a TCP connection right now?".
///
/// Implementations hold no per-call state, so any number of probes may run
/// concurrently against the same prober.
#[async_trait]
pub trait Prober: Send + Sync {
    async fn probe(&self, target: &Target) -> bool;
}

#[derive(Debug, Clone, Copy)]
pub struct TcpProber {
    timeout: Duration,
}

impl TcpProber {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for TcpProber {
    fn default() -> Self {
        Self::new(DEFAULT_PROBE_TIMEOUT)
    }
}

#[async_trait]
impl Prober for TcpProber {
    async fn probe(&self, target: &Target) -> bool {
        tcp::handshake_probe(target, self.timeout).await
    }
}

/// Runs one probe against an owned snapshot of the target.
pub async fn run_probe(prober: &dyn Prober, target: Target) -> ProbeResult {
    let start: Instant = Instant::now();
    let reachable: bool = prober.probe(&target).await;
    let elapsed: Duration = start.elapsed();

    debug!(%target, reachable, elapsed_ms = elapsed.as_millis() as u64, "probe finished");

    ProbeResult {
        target,
        reachable,
        elapsed,
    }
}
