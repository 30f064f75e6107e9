/// Epoch encoding error type.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum EpochError {
    /// Input text does not match the `YYYY-MM-DD HH:MM:SS` layout.
    #[error("Cannot parse timestamp {input:?}: {reason}")]
    Parse {
        input: String,
        #[source]
        reason: ParseFailure,
    },

    /// Offset from the epoch does not fit into 64 bits of microseconds.
    #[error("Offset exceeds 64-bit microsecond range: {0}")]
    Overflow(i128),

    /// Encoded buffer has the wrong size.
    #[error("Invalid buffer length: {0} != 8")]
    InvalidLength(usize),

    /// Decoded offset cannot be represented as a UTC timestamp.
    #[error("Out of range offset: {0} microseconds")]
    OutOfRange(i64),
}

/// Why timestamp text was rejected.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseFailure {
    /// Text is not shaped as `YYYY-MM-DD HH:MM:SS`.
    #[error("Expected layout YYYY-MM-DD HH:MM:SS")]
    Layout,

    /// Seconds field is 60.
    #[error("Leap seconds are not supported")]
    LeapSecond,

    /// Fields are well shaped but do not form a valid date or time.
    #[error(transparent)]
    Calendar(#[from] chrono::ParseError),
}

/// Epoch encoding result type.
pub type EpochResult<T> = Result<T, EpochError>;
