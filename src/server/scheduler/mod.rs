//! Scheduler keeping the movie cache in sync with SWAPI.
//!
//! The scheduler starts in [`SchedulerState::Bootstrapping`], running refresh cycles back to
//! back until one succeeds so the API has data as soon as possible. It then switches to
//! [`SchedulerState::Steady`] where a cron job refreshes the catalog every 3 hours and failures
//! are only logged. It runs on its own task and shares nothing with request handlers except the
//! cache.

pub mod config;


use std::{future::Future, sync::Arc, time::Duration};

use tokio::task::JoinHandle;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    data::cache::MovieCache,
    error::{refresh::RefreshError, Error},
    service::refresh::{CatalogRefreshService, RefreshReport},
};

use self::config::refresh as refresh_config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// No cycle has succeeded yet, cycles are retried immediately
    Bootstrapping,
    /// Cycles run on the cron schedule
    Steady,
}

pub struct RefreshScheduler {
    cache: Arc<dyn MovieCache>,
    catalog: swapi::Client,
    cron: String,
    cycle_timeout: Duration,
    state: SchedulerState,
}

impl RefreshScheduler {
    /// Creates a new instance of [`RefreshScheduler`] using the default schedule and timeout
    pub fn new(cache: Arc<dyn MovieCache>, catalog: swapi::Client) -> Self {
        Self {
            cache,
            catalog,
            cron: refresh_config::CRON_EXPRESSION.to_string(),
            cycle_timeout: refresh_config::CYCLE_TIMEOUT,
            state: SchedulerState::Bootstrapping,
        }
    }

    /// Override the steady state cron expression
    pub fn with_cron(mut self, cron: &str) -> Self {
        self.cron = cron.to_string();
        self
    }

    pub fn with_cycle_timeout(mut self, cycle_timeout: Duration) -> Self {
        self.cycle_timeout = cycle_timeout;
        self
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    /// Run the scheduler on its own task.
    ///
    /// Errors registering the steady state job are logged, the task then ends.
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(async move {
            if let Err(e) = self.start().await {
                tracing::error!("Catalog refresh scheduler stopped: {}", e);
            }
        })
    }

    /// Bootstrap the cache, then register and start the steady state job.
    ///
    /// # Returns
    /// - `Ok(JobScheduler)`: handle of the running cron scheduler
    /// - `Err(Error::SchedulerError(_))`: invalid cron expression or scheduler failure
    pub async fn start(mut self) -> Result<JobScheduler, Error> {
        self.bootstrap().await;

        let sched = JobScheduler::new().await?;
        self.schedule_refresh(&sched).await?;
        sched.start().await?;

        Ok(sched)
    }

    /// Run refresh cycles until one succeeds.
    ///
    /// # Returns
    /// The report of the successful cycle and the number of attempts it took
    pub async fn bootstrap(&mut self) -> (RefreshReport, u64) {
        self.state = SchedulerState::Bootstrapping;

        let cache = Arc::clone(&self.cache);
        let catalog = self.catalog.clone();
        let cycle_timeout = self.cycle_timeout;

        let (report, attempts) = retry_until_success(|| {
            run_cycle(catalog.clone(), Arc::clone(&cache), cycle_timeout)
        })
        .await;

        tracing::info!(
            attempts,
            movies = report.movies,
            characters = report.characters,
            "Initial catalog refresh complete"
        );

        self.state = SchedulerState::Steady;

        (report, attempts)
    }

    async fn schedule_refresh(&self, sched: &JobScheduler) -> Result<(), Error> {
        let cache = Arc::clone(&self.cache);
        let catalog = self.catalog.clone();
        let cycle_timeout = self.cycle_timeout;

        sched
            .add(Job::new_async(self.cron.as_str(), move |_, _| {
                let cache = Arc::clone(&cache);
                let catalog = catalog.clone();

                Box::pin(async move {
                    run_scheduled_cycle(catalog, cache, cycle_timeout).await;
                })
            })?)
            .await?;

        Ok(())
    }
}

/// Run one refresh cycle bounded by `cycle_timeout`
pub async fn run_cycle(
    catalog: swapi::Client,
    cache: Arc<dyn MovieCache>,
    cycle_timeout: Duration,
) -> Result<RefreshReport, Error> {
    let refresh_service = CatalogRefreshService::new(&catalog, cache.as_ref());

    match tokio::time::timeout(cycle_timeout, refresh_service.refresh()).await {
        Ok(result) => result,
        Err(_) => Err(RefreshError::Timeout(cycle_timeout).into()),
    }
}

/// Body of the steady state job: run one cycle and log its outcome.
///
/// A failed cycle leaves the cache as it was, the next scheduled run tries again.
pub async fn run_scheduled_cycle(
    catalog: swapi::Client,
    cache: Arc<dyn MovieCache>,
    cycle_timeout: Duration,
) -> Option<RefreshReport> {
    match run_cycle(catalog, cache, cycle_timeout).await {
        Ok(report) => {
            tracing::info!(
                movies = report.movies,
                characters = report.characters,
                failed_batches = report.failed_batches,
                failed_writes = report.failed_writes,
                incomplete_movies = report.incomplete_movies,
                "Refreshed catalog"
            );
            Some(report)
        }
        Err(e) => {
            tracing::error!("Error refreshing catalog: {}", e);
            None
        }
    }
}

/// Call `cycle` until it succeeds, logging each failure, without delay or attempt limit.
pub async fn retry_until_success<F, Fut, T>(mut cycle: F) -> (T, u64)
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, Error>>,
{
    let mut attempts = 0;

    loop {
        attempts += 1;

        match cycle().await {
            Ok(value) => return (value, attempts),
            Err(e) => {
                tracing::error!(attempt = attempts, "Catalog refresh failed: {}", e);
                // Let other tasks run between immediate retries
                tokio::task::yield_now().await;
            }
        }
    }
}
