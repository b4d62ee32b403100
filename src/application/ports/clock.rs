use chrono::NaiveDateTime;
#[cfg(test)]
use mockall::automock;

/// Wall-clock source for file-name timestamps and the default `year`
#[cfg_attr(test, automock)]
pub trait Clock: Send + Sync {
    /// Local time, second resolution is all callers rely on
    fn now(&self) -> NaiveDateTime;
}
