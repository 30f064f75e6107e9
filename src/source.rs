use {
    crate::epoch::Epoch,
    chrono::{DateTime, Utc},
    parking_lot::RwLock,
};

/// Provides the current timestamp.
pub trait TimestampSource {
    /// Returns the current UTC timestamp.
    fn current_timestamp(&self) -> DateTime<Utc>;
}

/// Implementation of the `TimestampSource` trait using the system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct UtcTimestamp;

impl TimestampSource for UtcTimestamp {
    fn current_timestamp(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Implementation of the `TimestampSource` trait using a manual timestamp.
///
/// Useful for testing purposes.
#[derive(Debug)]
pub struct ManualTimestamp {
    timestamp: RwLock<DateTime<Utc>>,
}

/// Starts at 2000-01-01 00:00:00 UTC, so a fresh source encodes to all zeros.
impl Default for ManualTimestamp {
    fn default() -> Self {
        Self::new(Epoch::POSTGRES.to_datetime().unwrap_or_default())
    }
}

impl TimestampSource for ManualTimestamp {
    fn current_timestamp(&self) -> DateTime<Utc> {
        let r = self.timestamp.read();
        *r
    }
}

impl ManualTimestamp {
    /// Creates a new `ManualTimestamp` with the specified timestamp.
    pub fn new(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp: RwLock::new(timestamp),
        }
    }

    /// Sets the current timestamp.
    pub fn set_current_timestamp(&self, timestamp: DateTime<Utc>) {
        let mut w = self.timestamp.write();
        *w = timestamp;
    }
}
