use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use crate::clock::{Clock, FixedClock};

/// 2026-01-05 09:00:00 UTC, an arbitrary Monday shared by the test suites.
pub fn test_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 5, 9, 0, 0).unwrap()
}

pub fn fixed_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock(test_instant()))
}
