use std::future::Future;
use std::io;
use std::time::Duration;

use pinger_common::target::Target;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::debug;

/// Opens and immediately closes a TCP connection to `target`.
///
/// Name resolution and the handshake together are bounded by `probe_timeout`.
/// Every failure (refused, unresolvable, unreachable, timed out) reads as
/// `false`; the cause only shows up in the debug log.
pub async fn handshake_probe(target: &Target, probe_timeout: Duration) -> bool {
    let addr = (target.host.as_str(), target.port);
    bounded_connect(target, probe_timeout, TcpStream::connect(addr)).await
}

/// Awaits `connect` for at most `probe_timeout` and collapses the outcome.
async fn bounded_connect<F, S>(target: &Target, probe_timeout: Duration, connect: F) -> bool
where
    F: Future<Output = io::Result<S>>,
{
    match timeout(probe_timeout, connect).await {
        Ok(Ok(stream)) => {
            drop(stream);
            true
        }
        Ok(Err(e)) => {
            debug!(%target, error = %e, "connection failed");
            false
        }
        Err(_elapsed) => {
            debug!(%target, timeout_ms = probe_timeout.as_millis() as u64, "connection timed out");
            false
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
