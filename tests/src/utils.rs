use std::net::TcpListener;

use pinger_common::target::Target;

/// A loopback port that is listening for as long as the listener lives.
pub fn open_target() -> (TcpListener, Target) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback listener");
    let port = listener.local_addr().expect("listener address").port();
    (listener, Target::new("127.0.0.1", port))
}

/// A loopback port with nothing behind it.
pub fn closed_target() -> Target {
    let (listener, target) = open_target();
    drop(listener);
    target
}
