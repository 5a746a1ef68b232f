use std::time::Duration;

pub mod refresh {
    use super::*;

    /// Cron expression for the steady state catalog refresh
    /// Runs every 3 hours at the top of the hour (00:00, 03:00, 06:00, etc.)
    pub const CRON_EXPRESSION: &str = "0 0 */3 * * *";

    /// Upper bound on a single refresh cycle, in-flight requests are dropped once exceeded
    pub const CYCLE_TIMEOUT: Duration = Duration::from_secs(60);
}
