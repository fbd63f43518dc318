use chrono::{Duration, NaiveDate, ParseError, Utc};

/// CLI-facing date format.
pub const DATE_FORMAT_ARGS: &str = "%Y-%m-%d";
/// Date format the vendor API expects in query parameters.
pub const DATE_FORMAT_VENDOR: &str = "%d/%m/%Y";

/// Date window for one fetch run.
///
/// No ordering between `start` and `end` is enforced; an inverted range is
/// passed through as-is and the vendor decides whether that yields an empty
/// result or an error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Parse optional `YYYY-MM-DD` CLI args, defaulting to yesterday
    /// through today (UTC).
    pub fn resolve(start: Option<&str>, end: Option<&str>) -> Result<Self, ParseError> {
        let start = match start {
            Some(s) => NaiveDate::parse_from_str(s, DATE_FORMAT_ARGS)?,
            None => (Utc::now() - Duration::days(1)).date_naive(),
        };
        let end = match end {
            Some(s) => NaiveDate::parse_from_str(s, DATE_FORMAT_ARGS)?,
            None => Utc::now().date_naive(),
        };
        Ok(DateRange { start, end })
    }

    pub fn start_vendor(&self) -> String {
        self.start.format(DATE_FORMAT_VENDOR).to_string()
    }

    pub fn end_vendor(&self) -> String {
        self.end.format(DATE_FORMAT_VENDOR).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_explicit_dates_into_vendor_format() {
        let range = DateRange::resolve(Some("2022-06-01"), Some("2022-06-02")).unwrap();
        assert_eq!(range.start_vendor(), "01/06/2022");
        assert_eq!(range.end_vendor(), "02/06/2022");
    }

    #[test]
    fn defaults_to_yesterday_through_today() {
        // Bracket the call so a run straddling UTC midnight can't flake
        let before = Utc::now().date_naive();
        let range = DateRange::resolve(None, None).unwrap();
        let after = Utc::now().date_naive();
        assert_eq!(range.end - range.start, Duration::days(1));
        assert!(range.end == before || range.end == after);
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(DateRange::resolve(Some("06/01/2022"), None).is_err());
        assert!(DateRange::resolve(None, Some("2022-13-01")).is_err());
        assert!(DateRange::resolve(Some("yesterday"), None).is_err());
    }

    #[test]
    fn inverted_range_is_passed_through() {
        let range = DateRange::resolve(Some("2022-06-02"), Some("2022-06-01")).unwrap();
        assert!(range.start > range.end);
    }
}
