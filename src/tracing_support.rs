//! Tracing support for the graph algorithms.
//!
//! With the `tracing` feature enabled this re-exports the `tracing` macros
//! used throughout the crate; without it, the same macros expand to no-ops.

#[cfg(feature = "tracing")]
mod enabled {
    use std::sync::Once;

    /// Installs a formatting subscriber that writes through the test
    /// harness. Safe to call repeatedly; only the first call has an effect.
    pub fn init_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_max_level(tracing::Level::DEBUG)
                .with_test_writer()
                .try_init();
        });
    }

    pub(crate) use tracing::{debug, info_span};
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    pub fn init_tracing() {
        // No-op when tracing is disabled
    }

    macro_rules! info_span {
        ($name:expr) => {{ $crate::tracing_support::NoOpSpan }};
        ($name:expr, $($fields:tt)*) => {{ $crate::tracing_support::NoOpSpan }};
    }

    macro_rules! debug {
        ($($arg:tt)*) => {{}};
    }

    pub(crate) use {debug, info_span};

    pub struct NoOpSpan;

    impl NoOpSpan {
        pub fn entered(self) -> NoOpSpanGuard {
            NoOpSpanGuard
        }
    }

    pub struct NoOpSpanGuard;
}

#[cfg(feature = "tracing")]
pub use enabled::*;

#[cfg(not(feature = "tracing"))]
pub use disabled::*;
