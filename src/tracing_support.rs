//! Tracing support for graph mutation and traversal events.
//!
//! This module provides tracing functionality when the `tracing` feature is enabled,
//! and provides no-op implementations when it's disabled.

#[cfg(feature = "tracing")]
mod enabled {
    use std::sync::Once;

    /// Installs a formatting subscriber that writes through the test harness.
    /// Safe to call any number of times; only the first call has an effect,
    /// and an already-installed global subscriber is left alone.
    pub fn init_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_test_writer()
                .with_max_level(tracing::Level::TRACE)
                .try_init();
        });
    }

    // Re-export tracing macros for convenience
    pub(crate) use tracing::{debug, trace, trace_span};
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    pub fn init_tracing() {
        // No-op when tracing is disabled
    }

    macro_rules! debug {
        ($($arg:tt)*) => {{}};
    }

    macro_rules! trace {
        ($($arg:tt)*) => {{}};
    }

    // Provide a no-op replacement for trace_span
    macro_rules! trace_span {
        ($name:expr) => {{ $crate::tracing_support::NoOpSpan }};
        ($name:expr, $($fields:tt)*) => {{ $crate::tracing_support::NoOpSpan }};
    }

    pub(crate) use {debug, trace, trace_span};

    pub struct NoOpSpan;

    impl NoOpSpan {
        pub fn entered(self) -> NoOpSpanGuard {
            NoOpSpanGuard
        }
    }

    pub struct NoOpSpanGuard;
}

// Re-export the appropriate implementation
#[cfg(feature = "tracing")]
pub use enabled::*;

#[cfg(not(feature = "tracing"))]
pub use disabled::*;
