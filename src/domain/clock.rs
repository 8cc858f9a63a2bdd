use chrono::{DateTime, Utc};

/// Source of the current UTC instant.
///
/// The service reads the clock through this trait so tests can pin "now"
/// instead of racing the wall clock.
pub trait Clock: std::fmt::Debug + Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock backed by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
