use {
    crate::{
        epoch::Epoch,
        error::{EpochError, EpochResult},
        parse::parse_timestamp,
        source::TimestampSource,
    },
    chrono::{DateTime, Utc},
};

/// Size of an encoded timestamp in bytes.
pub const ENCODED_LEN: usize = 8;

/// Encoded timestamp: big-endian two's-complement microseconds since epoch.
pub type EncodedBuffer = [u8; ENCODED_LEN];

/// What to do when an offset does not fit into 64 bits of microseconds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverflowPolicy {
    /// Keep the low 64 bits, as two's-complement arithmetic would.
    Wrap,
    /// Clamp to `i64::MIN` / `i64::MAX`.
    ///
    /// PostgreSQL reads these as `-infinity` / `infinity`.
    Saturate,
    /// Fail with [`EpochError::Overflow`].
    #[default]
    Error,
}

impl OverflowPolicy {
    /// Narrows an exact microsecond offset to 64 bits.
    pub fn apply(self, micros: i128) -> EpochResult<i64> {
        match self {
            OverflowPolicy::Wrap => Ok(micros as i64),
            OverflowPolicy::Saturate => {
                Ok(micros.clamp(i64::MIN as i128, i64::MAX as i128) as i64)
            }
            OverflowPolicy::Error => {
                i64::try_from(micros).map_err(|_| EpochError::Overflow(micros))
            }
        }
    }
}

/// Encodes timestamps as 8-byte big-endian microsecond offsets from an epoch.
///
/// The default encoder measures from 2000-01-01 00:00:00 UTC (the PostgreSQL
/// binary `timestamp` layout) and rejects offsets that overflow 64 bits.
///
/// Every [`DateTime<Utc>`] fits into the 64-bit range, so overflow can only
/// be hit through [`encode_unix()`](Self::encode_unix()) with instants
/// beyond what `chrono` can represent.
///
/// ```
/// use pg_epoch::EpochEncoder;
///
/// let enc = EpochEncoder::default();
/// let buf = enc.encode_str("2000-01-01 00:00:01").unwrap();
/// assert_eq!(buf, [0, 0, 0, 0, 0, 0x0f, 0x42, 0x40]);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EpochEncoder {
    epoch: Epoch,
    policy: OverflowPolicy,
}

impl EpochEncoder {
    /// Creates a new encoder for the given epoch and overflow policy.
    pub fn new(epoch: Epoch, policy: OverflowPolicy) -> Self {
        Self { epoch, policy }
    }

    /// Creates a PostgreSQL epoch encoder with the given overflow policy.
    pub fn with_policy(policy: OverflowPolicy) -> Self {
        Self::new(Epoch::POSTGRES, policy)
    }

    /// Instant that offsets are measured from.
    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    /// Overflow handling applied when narrowing offsets to 64 bits.
    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    /// Microseconds elapsed from the epoch to `ts`.
    pub fn offset_micros(&self, ts: &DateTime<Utc>) -> EpochResult<i64> {
        self.unix_offset_micros(ts.timestamp(), ts.timestamp_subsec_nanos())
    }

    /// Microseconds elapsed from the epoch to the given Unix instant.
    ///
    /// Sub-microsecond remainders are truncated toward zero.
    pub fn unix_offset_micros(&self, secs: i64, nanos: u32) -> EpochResult<i64> {
        let diff = secs as i128 * 1_000_000_000 + nanos as i128 - self.epoch.unix_nanos();
        let micros = diff / 1_000;
        let offset = self.policy.apply(micros)?;
        if offset as i128 != micros {
            tracing::trace!(exact = %micros, offset, policy = ?self.policy, "offset overflowed");
        }
        Ok(offset)
    }

    /// Encodes a timestamp.
    pub fn encode(&self, ts: &DateTime<Utc>) -> EpochResult<EncodedBuffer> {
        self.offset_micros(ts).map(encode_offset)
    }

    /// Encodes a Unix instant given as whole seconds plus nanoseconds.
    pub fn encode_unix(&self, secs: i64, nanos: u32) -> EpochResult<EncodedBuffer> {
        self.unix_offset_micros(secs, nanos).map(encode_offset)
    }

    /// Parses `YYYY-MM-DD HH:MM:SS` text as UTC and encodes it.
    pub fn encode_str(&self, input: &str) -> EpochResult<EncodedBuffer> {
        let ts = parse_timestamp(input)?;
        self.encode(&ts)
    }

    /// Encodes the current timestamp of the given source.
    pub fn encode_now<S: TimestampSource>(&self, source: &S) -> EpochResult<EncodedBuffer> {
        self.encode(&source.current_timestamp())
    }

    /// Decodes a buffer back into a UTC timestamp.
    pub fn decode(&self, buf: &[u8]) -> EpochResult<DateTime<Utc>> {
        let offset = decode_offset(buf)?;
        i64::try_from(self.epoch.unix_micros() as i128 + offset as i128)
            .ok()
            .and_then(DateTime::from_timestamp_micros)
            .ok_or(EpochError::OutOfRange(offset))
    }
}

/// Writes a microsecond offset most significant byte first.
pub fn encode_offset(offset: i64) -> EncodedBuffer {
    offset.to_be_bytes()
}

/// Reads a microsecond offset from exactly [`ENCODED_LEN`] bytes.
pub fn decode_offset(buf: &[u8]) -> EpochResult<i64> {
    let bytes: EncodedBuffer = buf
        .try_into()
        .map_err(|_| EpochError::InvalidLength(buf.len()))?;
    Ok(i64::from_be_bytes(bytes))
}
