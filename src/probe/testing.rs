//! Scripted [`Fetcher`] for unit tests.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use crate::probe::fetcher::{FetchError, Fetcher};

/// Replays per-URL scripted responses, then falls back to a default.
pub struct ScriptedFetcher {
    scripts: Mutex<HashMap<String, VecDeque<Result<u16, FetchError>>>>,
    fallback: Result<u16, FetchError>,
    latency: Duration,
    panics_on: Option<String>,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl ScriptedFetcher {
    pub fn new(fallback: Result<u16, FetchError>) -> Self {
        Self {
            scripts: Mutex::new(HashMap::new()),
            fallback,
            latency: Duration::ZERO,
            panics_on: None,
            calls: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            peak_in_flight: AtomicUsize::new(0),
        }
    }

    /// Every request takes `latency` on the tokio clock.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Requests for `url` panic instead of answering.
    pub fn panic_on(mut self, url: &str) -> Self {
        self.panics_on = Some(url.to_string());
        self
    }

    pub fn script(self, url: &str, responses: Vec<Result<u16, FetchError>>) -> Self {
        self.scripts
            .lock()
            .unwrap()
            .insert(url.to_string(), responses.into());
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }
}

pub fn refused() -> Result<u16, FetchError> {
    Err(FetchError::Connect("connection refused".into()))
}

impl Fetcher for ScriptedFetcher {
    async fn fetch_status(&self, url: &str) -> Result<u16, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.panics_on.as_deref() == Some(url) {
            panic!("scripted panic for {url}");
        }
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now, Ordering::SeqCst);

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let next = self
            .scripts
            .lock()
            .unwrap()
            .get_mut(url)
            .and_then(VecDeque::pop_front);

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        next.unwrap_or_else(|| self.fallback.clone())
    }
}
