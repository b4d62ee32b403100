pub mod file_reaper;
pub mod scheduler;

pub use file_reaper::{FileReaper, ReapOutcome};
pub use scheduler::PeriodicTaskRunner;
