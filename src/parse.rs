use {
    crate::error::{EpochError, EpochResult, ParseFailure},
    chrono::{DateTime, NaiveDateTime, Timelike, Utc},
};

/// Layout accepted by [`parse_timestamp()`].
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Byte shape of [`TIMESTAMP_FORMAT`]; `d` stands for an ASCII digit.
const LAYOUT: &[u8; 19] = b"dddd-dd-dd dd:dd:dd";

/// Parses `YYYY-MM-DD HH:MM:SS` text into a UTC timestamp.
///
/// Every field must be zero-padded to its full width, separated by exactly
/// the characters shown, with nothing before or after. The text carries no
/// zone information and is always read as UTC.
pub fn parse_timestamp(input: &str) -> EpochResult<DateTime<Utc>> {
    parse_naive(input)
        .map(|naive| naive.and_utc())
        .map_err(|reason| EpochError::Parse {
            input: input.to_owned(),
            reason,
        })
}

fn parse_naive(input: &str) -> Result<NaiveDateTime, ParseFailure> {
    if !matches_layout(input.as_bytes()) {
        return Err(ParseFailure::Layout);
    }

    // chrono folds a `:60` second into nanoseconds past one second.
    let naive = NaiveDateTime::parse_from_str(input, TIMESTAMP_FORMAT)?;
    if naive.nanosecond() >= 1_000_000_000 {
        return Err(ParseFailure::LeapSecond);
    }
    Ok(naive)
}

fn matches_layout(bytes: &[u8]) -> bool {
    bytes.len() == LAYOUT.len()
        && bytes.iter().zip(LAYOUT).all(|(&b, &l)| match l {
            b'd' => b.is_ascii_digit(),
            _ => b == l,
        })
}

#[cfg(test)]
mod tests {
    use {super::*, chrono::TimeZone};

    fn failure(input: &str) -> ParseFailure {
        match parse_timestamp(input) {
            Err(EpochError::Parse { input: got, reason }) => {
                assert_eq!(got, input);
                reason
            }
            other => panic!("{input:?} parsed unexpectedly: {other:?}"),
        }
    }

    #[test]
    fn parses_exact_layout() {
        let ts = parse_timestamp("2004-10-19 10:23:54").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2004, 10, 19, 10, 23, 54).unwrap());

        let ts = parse_timestamp("0001-01-01 00:00:00").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(1, 1, 1, 0, 0, 0).unwrap());

        let ts = parse_timestamp("2004-02-29 23:59:59").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2004, 2, 29, 23, 59, 59).unwrap());
    }

    #[test]
    fn rejects_other_layouts() {
        for input in [
            "not-a-date",
            "",
            "2004-10-19",
            "2004-10-19T10:23:54",
            "2004-10-19 10:23:54Z",
            "19/10/2004 10:23:54",
            "2004-1-9 1:2:3",
            "2004-10-19  10:23:54",
            " 2004-10-19 10:23:54",
            "2004-10-19 10:23:54 ",
            "+2004-10-19 10:23:54",
            "-004-10-19 10:23:54",
            "02004-10-19 10:23:54",
            "2004-10-19\t10:23:54",
            "２004-10-19 10:23:54",
        ] {
            assert_eq!(failure(input), ParseFailure::Layout, "{input:?}");
        }
    }

    #[test]
    fn rejects_invalid_calendar_values() {
        for input in [
            "2004-13-19 10:23:54",
            "2004-00-19 10:23:54",
            "2003-02-29 10:23:54",
            "2004-10-32 10:23:54",
            "2004-10-19 24:00:00",
            "2004-10-19 10:60:00",
            "2004-10-19 10:23:61",
        ] {
            assert!(
                matches!(failure(input), ParseFailure::Calendar(_)),
                "{input:?}"
            );
        }
    }

    #[test]
    fn rejects_leap_second() {
        assert_eq!(failure("2004-10-19 10:23:60"), ParseFailure::LeapSecond);
        assert_eq!(failure("2016-12-31 23:59:60"), ParseFailure::LeapSecond);
    }
}
