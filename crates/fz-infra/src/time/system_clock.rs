use chrono::{FixedOffset, Local, Utc};
use fz_core::ports::ClockPort;

pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    fn local_offset(&self) -> FixedOffset {
        *Local::now().offset()
    }
}
