//! # Pinger Core
//!
//! Reachability probing and target bookkeeping.
//!
//! * **[`network`]**: the raw TCP handshake probe.
//! * **[`prober`]**: the probing abstraction the session depends on.
//! * **[`settings`]**: storage adapters for the current target.
//! * **[`session`]**: the owned state object front ends drive.
//! * **[`indicator`]**: the outcome indicator that falls back to neutral.

pub mod indicator;
pub mod network;
pub mod prober;
pub mod session;
pub mod settings;

pub use network::tcp::handshake_probe;
pub use prober::{ProbeResult, Prober, TcpProber};
pub use session::Session;
