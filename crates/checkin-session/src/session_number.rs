//! # Session Number Codec
//!
//! A session number is a human-readable composite identifier with the
//! fixed structure `{roomNumber}-{YYYYMMDD}-{sequence}`, distinct from the
//! session's opaque primary identifier. It encodes the room, the check-in
//! calendar day, and a zero-padded 3-digit sequence.
//!
//! ## Usage
//!
//! ```
//! use checkin_session::{generate_session_number, parse_session_number};
//! use chrono::{TimeZone, Utc};
//!
//! let number = generate_session_number("101", Utc.with_ymd_and_hms(2025, 1, 15, 15, 0, 0).unwrap());
//! assert_eq!(number, "101-20250115-001");
//!
//! let parsed = parse_session_number(&number).unwrap();
//! assert_eq!(parsed.room_number, "101");
//! assert_eq!((parsed.year, parsed.month, parsed.day), (2025, 1, 15));
//! assert_eq!(parsed.sequence, 1);
//! ```

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::SessionNumberError;

/// The components of a parsed session number.
///
/// The date fields are raw decoded integers, deliberately not validated
/// against the calendar (a month of 13 parses fine). Callers needing
/// strict validation use [`ParsedSessionNumber::check_in_date`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSessionNumber {
    pub room_number: String,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub sequence: u32,
}

impl ParsedSessionNumber {
    /// The check-in day as a calendar date, or `None` if the raw
    /// components do not form a valid date.
    pub fn check_in_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

/// Format a session number for a room and check-in instant.
///
/// The sequence is always rendered as the fixed literal `001`; the backend
/// is responsible for disambiguating multiple same-day sessions for one
/// room. Treat the result as a display hint, not a uniqueness guarantee.
pub fn generate_session_number(room_number: &str, check_in_date: DateTime<Utc>) -> String {
    format!("{}-{}-001", room_number, check_in_date.format("%Y%m%d"))
}

/// Parse a session number back into its three components.
///
/// Fails with [`SessionNumberError::InvalidFormat`] unless the input has
/// exactly three hyphen-separated segments, and with the more specific
/// variants when the date segment is not exactly eight digits or the
/// sequence is not numeric.
pub fn parse_session_number(
    session_number: &str,
) -> Result<ParsedSessionNumber, SessionNumberError> {
    let segments: Vec<&str> = session_number.split('-').collect();
    let [room_number, date, sequence] = segments.as_slice() else {
        return Err(SessionNumberError::InvalidFormat);
    };

    if date.len() != 8 || !date.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SessionNumberError::InvalidDateSegment((*date).to_string()));
    }

    // All-digit slices, so these parses only guard integer overflow.
    let invalid_date = || SessionNumberError::InvalidDateSegment((*date).to_string());
    let year: i32 = date[0..4].parse().map_err(|_| invalid_date())?;
    let month: u32 = date[4..6].parse().map_err(|_| invalid_date())?;
    let day: u32 = date[6..8].parse().map_err(|_| invalid_date())?;

    let sequence: u32 = sequence
        .parse()
        .map_err(|_| SessionNumberError::InvalidSequence((*sequence).to_string()))?;

    Ok(ParsedSessionNumber {
        room_number: (*room_number).to_string(),
        year,
        month,
        day,
        sequence,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_generate_format() {
        let check_in = Utc.with_ymd_and_hms(2025, 1, 5, 23, 59, 59).unwrap();
        assert_eq!(generate_session_number("101", check_in), "101-20250105-001");
    }

    #[test]
    fn test_round_trip_recovers_room_and_day() {
        let check_in = Utc.with_ymd_and_hms(2025, 3, 31, 14, 30, 0).unwrap();
        let parsed = parse_session_number(&generate_session_number("312", check_in)).unwrap();

        assert_eq!(parsed.room_number, "312");
        assert_eq!(parsed.check_in_date(), Some(check_in.date_naive()));
        assert_eq!(parsed.sequence, 1);
    }

    #[test]
    fn test_too_few_segments_rejected() {
        assert_eq!(
            parse_session_number("101-20250101"),
            Err(SessionNumberError::InvalidFormat)
        );
    }

    #[test]
    fn test_too_many_segments_rejected() {
        assert_eq!(
            parse_session_number("101-20250101-001-extra"),
            Err(SessionNumberError::InvalidFormat)
        );
    }

    #[test]
    fn test_date_segment_must_be_eight_digits() {
        assert!(matches!(
            parse_session_number("101-2025011-001"),
            Err(SessionNumberError::InvalidDateSegment(_))
        ));
        assert!(matches!(
            parse_session_number("101-2025O115-001"),
            Err(SessionNumberError::InvalidDateSegment(_))
        ));
    }

    #[test]
    fn test_sequence_must_be_numeric() {
        assert!(matches!(
            parse_session_number("101-20250115-abc"),
            Err(SessionNumberError::InvalidSequence(_))
        ));
    }

    #[test]
    fn test_month_thirteen_parses_but_is_not_a_date() {
        let parsed = parse_session_number("101-20251301-002").unwrap();
        assert_eq!(parsed.month, 13);
        assert_eq!(parsed.sequence, 2);
        assert!(parsed.check_in_date().is_none());
    }

    #[test]
    fn test_zero_padded_sequence_parses() {
        let parsed = parse_session_number("101-20250115-007").unwrap();
        assert_eq!(parsed.sequence, 7);
    }
}
