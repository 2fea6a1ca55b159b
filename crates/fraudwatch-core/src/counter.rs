//! Public submission counter.
//!
//! The count is best effort: a failed fetch shows zero. The "last updated"
//! stamp ticks on its own clock and never triggers a store query.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at};
use tracing::{debug, warn};

use fraudwatch_store::ReportStore;

use crate::format::{format_count, format_timestamp};

pub const DEFAULT_GOAL: u64 = 50;
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(60);

/// `min(100, round(count / goal * 100))`. A zero goal counts as reached.
pub fn progress_percent(count: u64, goal: u64) -> u8 {
    if goal == 0 {
        return 100;
    }
    let percent = (count as f64 / goal as f64 * 100.0).round();
    percent.min(100.0) as u8
}

/// Shared "last updated" stamp.
#[derive(Clone)]
pub struct CounterClock {
    last_updated: Arc<RwLock<DateTime<Utc>>>,
}

impl Default for CounterClock {
    fn default() -> Self {
        Self::new()
    }
}

impl CounterClock {
    pub fn new() -> Self {
        Self {
            last_updated: Arc::new(RwLock::new(Utc::now())),
        }
    }

    pub async fn last_updated(&self) -> DateTime<Utc> {
        *self.last_updated.read().await
    }

    pub async fn stamp(&self) {
        self.stamp_at(Utc::now()).await;
    }

    pub async fn stamp_at(&self, at: DateTime<Utc>) {
        *self.last_updated.write().await = at;
    }

    /// Re-stamp every `every`, starting one period from now.
    pub async fn run(self, every: Duration) {
        let mut ticker = interval_at(Instant::now() + every, every);

        loop {
            ticker.tick().await;
            self.stamp().await;
            debug!("Counter clock ticked");
        }
    }

    pub fn spawn_ticker(&self, every: Duration) -> JoinHandle<()> {
        tokio::spawn(self.clone().run(every))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CounterSnapshot {
    pub loading: bool,
    pub total_reports: u64,
    pub total_reports_display: String,
    pub goal: u64,
    pub progress_percent: u8,
    pub last_updated: DateTime<Utc>,
    pub last_updated_display: String,
}

pub struct Counter {
    goal: u64,
    clock: CounterClock,
    total: Option<u64>,
}

impl Counter {
    pub fn new(goal: u64, clock: CounterClock) -> Self {
        Self {
            goal,
            clock,
            total: None,
        }
    }

    /// Fetch the count once. Failures are logged and shown as zero.
    pub async fn initialize<S: ReportStore>(&mut self, store: &S) -> u64 {
        let total = match store.count().await {
            Ok(count) => {
                self.clock.stamp().await;
                count
            }
            Err(e) => {
                warn!("Report count unavailable, showing zero: {}", e);
                0
            }
        };
        self.total = Some(total);
        total
    }

    pub fn is_loading(&self) -> bool {
        self.total.is_none()
    }

    pub fn total(&self) -> u64 {
        self.total.unwrap_or(0)
    }

    pub fn progress_percent(&self) -> u8 {
        progress_percent(self.total(), self.goal)
    }

    pub async fn snapshot(&self) -> CounterSnapshot {
        let last_updated = self.clock.last_updated().await;
        CounterSnapshot {
            loading: self.is_loading(),
            total_reports: self.total(),
            total_reports_display: format_count(self.total()),
            goal: self.goal,
            progress_percent: self.progress_percent(),
            last_updated,
            last_updated_display: format_timestamp(last_updated),
        }
    }
}
