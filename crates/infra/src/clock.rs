// crates/infra/src/clock.rs
use chrono::{DateTime, Utc};
use textutils_ports::clock::Clock;

/// Wall clock backed by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
