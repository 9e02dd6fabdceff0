use chrono::FixedOffset;

pub trait ClockPort: Send + Sync {
    fn now_ms(&self) -> i64;

    /// Offset of the user's local time zone at `now_ms`.
    fn local_offset(&self) -> FixedOffset;
}
