// Pre-calculated Unix timestamp (in seconds) for 2000-01-01 00:00:00 UTC.
// Encoded offsets are measured from this instant.
pub const EPOCH_SECS: i64 = 946_684_800;

// Last Unix second whose offset from the epoch still fits into i64 microseconds.
pub const LAST_FITTING_SECS: i64 = EPOCH_SECS + i64::MAX / 1_000_000;

pub fn decode(buf: [u8; 8]) -> i64 {
    i64::from_be_bytes(buf)
}
