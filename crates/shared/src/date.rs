use time::{Date, OffsetDateTime, format_description::well_known::Rfc3339, macros::format_description};

pub fn now() -> u64 {
    OffsetDateTime::now_utc().unix_timestamp().max(0) as u64
}

/// Parses a week start given either as an RFC 3339 timestamp or as a bare
/// `YYYY-MM-DD` date (midnight UTC).
pub fn parse_start_date(value: &str) -> crate::Result<u64> {
    let value = value.trim();

    if let Ok(datetime) = OffsetDateTime::parse(value, &Rfc3339) {
        return Ok(datetime.unix_timestamp().try_into()?);
    }

    match Date::parse(value, format_description!("[year]-[month]-[day]")) {
        Ok(date) => Ok(date.midnight().assume_utc().unix_timestamp().try_into()?),
        Err(_) => crate::bail!("Invalid start date: {value}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rfc3339() {
        let ts = parse_start_date("2025-01-06T09:30:00Z").unwrap();
        assert_eq!(ts, 1_736_155_800);
    }

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let ts = parse_start_date("2025-01-06T10:30:00+01:00").unwrap();
        assert_eq!(ts, 1_736_155_800);
    }

    #[test]
    fn test_parse_bare_date() {
        let ts = parse_start_date("2025-01-06").unwrap();
        assert_eq!(ts, 1_736_121_600);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_start_date("next monday").unwrap_err();
        assert_eq!(err.to_string(), "Invalid start date: next monday");
    }

    #[test]
    fn test_now_is_recent() {
        assert!(now() > 1_700_000_000);
    }
}
