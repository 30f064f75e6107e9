//! Binary timestamps measured in microseconds since 2000-01-01 00:00:00 UTC.
//!
//! An instant is stored as a signed 64-bit integer of microseconds elapsed
//! since the epoch, written big-endian into exactly 8 bytes. This is the
//! layout PostgreSQL uses for binary `timestamp` values. Instants before the
//! epoch encode as negative offsets.
//!
//! Offsets that do not fit into 64 bits are handled by an explicit
//! [`OverflowPolicy`]: wrap, saturate, or fail.
//!
//! ```
//! use pg_epoch::{EpochEncoder, decode_offset};
//!
//! let enc = EpochEncoder::default();
//! let buf = enc.encode_str("2004-10-19 10:23:54").unwrap();
//! assert_eq!(decode_offset(&buf).unwrap(), 151_496_634_000_000);
//!
//! // Malformed input never reaches the encoder.
//! assert!(enc.encode_str("not-a-date").is_err());
//! ```

pub mod epoch;
pub mod error;

mod encoder;
mod parse;
mod source;

pub use {
    encoder::{
        ENCODED_LEN,
        EncodedBuffer,
        EpochEncoder,
        OverflowPolicy,
        decode_offset,
        encode_offset,
    },
    epoch::{EPOCH, Epoch},
    error::{EpochError, EpochResult, ParseFailure},
    parse::{TIMESTAMP_FORMAT, parse_timestamp},
    source::{ManualTimestamp, TimestampSource, UtcTimestamp},
};
