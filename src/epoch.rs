use chrono::{DateTime, Utc};

/// Pre-calculated PostgreSQL epoch.
///
/// 2000-01-01 00:00:00 UTC in microseconds since Unix epoch
pub const EPOCH: i64 = 946_684_800_000_000;

/// Reference instant that encoded offsets are measured from.
///
/// Defaults to [`EPOCH`]. Stored as microseconds since the Unix epoch, so the
/// value is `Copy` and cannot be changed once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Epoch(i64);

impl Default for Epoch {
    fn default() -> Self {
        Self::POSTGRES
    }
}

impl std::fmt::Display for Epoch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_datetime() {
            Some(dt) => write!(f, "{dt}"),
            None => write!(f, "{}us", self.0),
        }
    }
}

impl From<DateTime<Utc>> for Epoch {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt.timestamp_micros())
    }
}

impl Epoch {
    /// 2000-01-01 00:00:00 UTC.
    pub const POSTGRES: Epoch = Epoch(EPOCH);

    /// Creates a new `Epoch` from the given microseconds since the Unix epoch.
    pub const fn from_unix_micros(us: i64) -> Self {
        Self(us)
    }

    /// Returns the epoch in microseconds since the Unix epoch.
    pub const fn unix_micros(&self) -> i64 {
        self.0
    }

    /// Returns the epoch in nanoseconds since the Unix epoch.
    pub(crate) fn unix_nanos(&self) -> i128 {
        self.0 as i128 * 1_000
    }

    /// Returns the epoch as a UTC timestamp.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_micros(self.0)
    }
}
