use std::error::Error;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::{self, MissedTickBehavior};
use tracing::{error, info};

pub type TaskResult = Result<(), Box<dyn Error + Send + Sync>>;

/// Runner for periodic housekeeping tasks with error handling and logging
pub struct PeriodicTaskRunner<T> {
    task: Arc<T>,
    interval: Duration,
    task_name: String,
}

impl<T> PeriodicTaskRunner<T>
where
    T: Send + Sync + 'static,
{
    pub fn new(task: Arc<T>, interval: Duration, task_name: impl Into<String>) -> Self {
        Self {
            task,
            interval,
            task_name: task_name.into(),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Run the task forever. The first run happens one interval after start;
    /// a failed run is logged and does not stop the loop.
    pub async fn run<F, Fut>(&self, task_fn: F)
    where
        F: Fn(Arc<T>) -> Fut,
        Fut: Future<Output = TaskResult>,
    {
        info!(
            "Starting periodic task: {} with interval: {:?}",
            self.task_name, self.interval
        );

        let start = time::Instant::now() + self.interval;
        let mut interval_timer = time::interval_at(start, self.interval);
        interval_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            interval_timer.tick().await;

            if let Err(e) = task_fn(Arc::clone(&self.task)).await {
                error!("Periodic task {} failed: {}", self.task_name, e);
            }
        }
    }

    /// Run the task once
    pub async fn run_once<F, Fut>(&self, task_fn: F) -> TaskResult
    where
        F: Fn(Arc<T>) -> Fut,
        Fut: Future<Output = TaskResult>,
    {
        task_fn(Arc::clone(&self.task)).await
    }
}
