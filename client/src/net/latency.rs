//! Simulated network latency for the mock auth and script backends.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no real backend. Calls that would cross the network instead wait
//! on a `Latency` before resolving, and the dependency is injected so tests
//! can settle immediately.
//!
//! TRADE-OFFS
//! ==========
//! `TimerLatency` only sleeps in `hydrate` builds. Server and native test
//! builds settle immediately, which keeps SSR deterministic.

#[cfg(test)]
#[path = "latency_test.rs"]
mod latency_test;

use std::time::Duration;

use async_trait::async_trait;

/// Delay applied to sign-in and sign-up calls.
pub const AUTH_LATENCY: Duration = Duration::from_millis(1000);

/// Delay applied to script generation.
pub const SCRIPT_LATENCY: Duration = Duration::from_millis(1500);

/// Something a simulated call waits on before it resolves.
///
/// Futures are `?Send` because everything runs on the browser event loop.
#[async_trait(?Send)]
pub trait Latency: Send + Sync {
    /// Suspend until the simulated round-trip completes.
    async fn settle(&self);
}

/// Resolves without suspending.
#[derive(Clone, Copy, Debug, Default)]
pub struct Immediate;

#[async_trait(?Send)]
impl Latency for Immediate {
    async fn settle(&self) {}
}

/// Fixed browser-timer delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerLatency {
    delay: Duration,
}

impl TimerLatency {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait(?Send)]
impl Latency for TimerLatency {
    async fn settle(&self) {
        #[cfg(feature = "hydrate")]
        {
            gloo_timers::future::sleep(self.delay).await;
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = self.delay;
        }
    }
}
