//! Shared utility functions for coop-server

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};

use crate::error::{AppError, AppResult};

pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    use argon2::password_hash::SaltString;
    use argon2::password_hash::rand_core::OsRng;
    use argon2::{Argon2, PasswordHasher};
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

pub fn verify_password(password: &str, hash: &str) -> bool {
    use argon2::{Argon2, PasswordHash, PasswordVerifier};
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// First instant of the given month.
pub fn first_of_month(year: i32, month: u32) -> AppResult<DateTime<Utc>> {
    let date = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::validation("Invalid year or month"))?;
    Ok(Utc.from_utc_datetime(&date.and_time(chrono::NaiveTime::MIN)))
}

/// Half-open month window `[first-of-month, first-of-next-month)`.
pub fn month_window(year: i32, month: u32) -> AppResult<(DateTime<Utc>, DateTime<Utc>)> {
    let start = first_of_month(year, month)?;
    let end = if month == 12 {
        first_of_month(year + 1, 1)?
    } else {
        first_of_month(year, month + 1)?
    };
    Ok((start, end))
}

/// Closed window over the whole current month:
/// `[day-1 00:00:00, last-day 23:59:59.999999]`.
pub fn current_month_full_span(now: DateTime<Utc>) -> AppResult<(DateTime<Utc>, DateTime<Utc>)> {
    let (start, next) = month_window(now.year(), now.month())?;
    Ok((start, next - Duration::microseconds(1)))
}

/// Closed month-to-date window: `[day-1 00:00:00, today 23:59:59.999999]`.
pub fn current_month_to_date_span(now: DateTime<Utc>) -> AppResult<(DateTime<Utc>, DateTime<Utc>)> {
    let start = first_of_month(now.year(), now.month())?;
    let next_midnight =
        Utc.from_utc_datetime(&now.date_naive().and_time(chrono::NaiveTime::MIN)) + Duration::days(1);
    Ok((start, next_midnight - Duration::microseconds(1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_round_trip() {
        let hash = hash_password("s3cret").unwrap();
        assert!(verify_password("s3cret", &hash));
        assert!(!verify_password("wrong", &hash));
    }

    #[test]
    fn verify_rejects_garbage_hash() {
        assert!(!verify_password("anything", "not-a-phc-string"));
    }

    #[test]
    fn month_window_is_half_open() {
        let (start, end) = month_window(2025, 5).unwrap();
        assert_eq!(start.to_rfc3339(), "2025-05-01T00:00:00+00:00");
        assert_eq!(end.to_rfc3339(), "2025-06-01T00:00:00+00:00");
    }

    #[test]
    fn month_window_wraps_december() {
        let (start, end) = month_window(2024, 12).unwrap();
        assert_eq!(start.year(), 2024);
        assert_eq!(end.year(), 2025);
        assert_eq!(end.month(), 1);
    }

    #[test]
    fn month_window_rejects_bad_month() {
        assert!(month_window(2025, 13).is_err());
        assert!(month_window(2025, 0).is_err());
    }

    #[test]
    fn full_span_covers_last_microsecond() {
        let now = Utc.with_ymd_and_hms(2025, 2, 10, 12, 30, 0).unwrap();
        let (start, end) = current_month_full_span(now).unwrap();
        assert_eq!(start.to_rfc3339(), "2025-02-01T00:00:00+00:00");
        assert_eq!(end.to_rfc3339(), "2025-02-28T23:59:59.999999+00:00");
    }

    #[test]
    fn to_date_span_ends_today() {
        let now = Utc.with_ymd_and_hms(2025, 5, 14, 8, 0, 0).unwrap();
        let (start, end) = current_month_to_date_span(now).unwrap();
        assert_eq!(start.to_rfc3339(), "2025-05-01T00:00:00+00:00");
        assert_eq!(end.to_rfc3339(), "2025-05-14T23:59:59.999999+00:00");
    }
}
