use chrono::NaiveDate;

/// Earliest date the input accepts. The supported window is
/// `[epoch_floor(), today]`, both ends inclusive.
pub fn epoch_floor() -> NaiveDate {
    NaiveDate::from_ymd_opt(1000, 1, 1).expect("fixed calendar date")
}

/// Why a submitted date string was rejected. At most one of these is
/// shown to the user at a time; the `Display` text is the inline
/// message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Nothing was typed before submitting.
    #[error("Please select a date to explore")]
    EmptyInput,

    /// The text doesn't parse as a calendar date.
    #[error("That doesn't look like a calendar date (use YYYY-MM-DD)")]
    InvalidFormat,

    /// Parsed fine, but falls outside the supported window.
    #[error("Try a date from our known cosmic timeline (1000 AD - Today)")]
    OutOfRange,
}

/// Checks a user-supplied date string against the supported window.
///
/// `today` is the inclusive upper bound; callers pass the local
/// calendar date at submit time.
pub fn validate(input: &str, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidFormat)?;

    if date < epoch_floor() || date > today {
        return Err(ValidationError::OutOfRange);
    }

    Ok(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(validate("", today()), Err(ValidationError::EmptyInput));
        assert_eq!(validate("   ", today()), Err(ValidationError::EmptyInput));
    }

    #[test]
    fn garbage_is_rejected_as_invalid_format() {
        assert_eq!(
            validate("not-a-date", today()),
            Err(ValidationError::InvalidFormat)
        );
        assert_eq!(
            validate("2020-13-01", today()),
            Err(ValidationError::InvalidFormat)
        );
        assert_eq!(
            validate("2020-02-30", today()),
            Err(ValidationError::InvalidFormat)
        );
    }

    #[test]
    fn dates_before_the_floor_are_rejected() {
        assert_eq!(
            validate("0999-12-31", today()),
            Err(ValidationError::OutOfRange)
        );
    }

    #[test]
    fn future_dates_are_rejected() {
        assert_eq!(
            validate("2025-06-02", today()),
            Err(ValidationError::OutOfRange)
        );
    }

    #[test]
    fn window_ends_are_inclusive() {
        assert_eq!(
            validate("1000-01-01", today()),
            Ok(epoch_floor())
        );
        assert_eq!(validate("2025-06-01", today()), Ok(today()));
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        assert!(validate(" 2020-03-10 ", today()).is_ok());
    }
}
