//! Status macros for user-facing notification lines.
//!
//! Both are plain `tracing` events under dedicated targets so the terminal
//! formatter can render them apart from ordinary log output.

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: "pinger::success", $($arg)*)
    };
}

#[macro_export]
macro_rules! failure {
    ($($arg:tt)*) => {
        $crate::__tracing::warn!(target: "pinger::failure", $($arg)*)
    };
}
