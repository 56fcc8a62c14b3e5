use crate::calendar::{civil_from_iso_week, civil_from_ordinal, days_in_month};
use crate::{TimeError, TimeResult};

const MAX_ISO8601_LENGTH: usize = 48;

/// Broken-down ISO-8601 date/time, still in the local time of its offset.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDateTime {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: f64,
    /// Offset from UTC in minutes (`+01:00` is `60`). Zero when absent.
    pub offset_minutes: i32,
}

/// Parses an extended ISO-8601 date or date-time.
///
/// Accepted forms:
///
/// ```text
/// YYYY-MM-DD                     20231230
/// YYYY-MM                        (day 1)
/// YYYY-DDD                       2023364      (ordinal day)
/// YYYY-Www-D                     2023W526     (ISO week and weekday)
/// ±YYYYYY-MM-DD                  (signed, 4 to 6 year digits)
/// <date>Thh[:mm[:ss]]            <date>Thh[mm[ss]]
/// <time>Z | <time>±hh[:mm] | <time>±hhmm
/// ```
///
/// The last time field may carry a `.fff` or `,fff` fraction, so `T15.5`
/// is 15:30. A space may replace `T`. Missing time fields default to zero
/// and a missing offset means UTC.
pub fn parse_iso8601(s: &str) -> TimeResult<ParsedDateTime> {
    let s = s.trim();

    if s.is_empty() {
        return Err(TimeError::format("empty input"));
    }
    if s.len() > MAX_ISO8601_LENGTH {
        return Err(TimeError::format("input too long"));
    }
    if !s.is_ascii() {
        return Err(TimeError::format(format!("non-ASCII characters in '{}'", s)));
    }

    let (date_part, time_part) = match s.find(['T', ' ']) {
        Some(pos) => (&s[..pos], Some(&s[pos + 1..])),
        None => (s, None),
    };

    let (year, month, day) = parse_date(date_part)?;

    let (hour, minute, second, offset_minutes) = match time_part {
        Some(rest) => {
            let (clock, offset_minutes) = split_offset(rest)?;
            let (hour, minute, second) = parse_time(clock)?;
            (hour, minute, second, offset_minutes)
        }
        None => (0, 0, 0.0, 0),
    };

    Ok(ParsedDateTime {
        year,
        month,
        day,
        hour,
        minute,
        second,
        offset_minutes,
    })
}

/// Date fields after the year, before validation.
enum DateFields<'a> {
    Calendar(&'a str, &'a str),
    YearMonth(&'a str),
    Ordinal(&'a str),
    Week(&'a str, &'a str),
}

fn parse_date(date: &str) -> TimeResult<(i32, u8, u8)> {
    let invalid = || {
        TimeError::format(format!(
            "invalid date '{}', expected YYYY-MM-DD, YYYY-MM, YYYY-DDD or YYYY-Www-D",
            date
        ))
    };

    let (sign, unsigned) = match date.as_bytes().first() {
        Some(b'+') => (1, &date[1..]),
        Some(b'-') => (-1, &date[1..]),
        _ => (0, date),
    };

    let (year_str, fields) = if unsigned.contains('-') {
        let components: Vec<&str> = unsigned.split('-').collect();
        match components.as_slice() {
            [y, w, d] if w.starts_with('W') => {
                let week: &str = *w;
                (*y, DateFields::Week(&week[1..], *d))
            }
            [y, m, d] => (*y, DateFields::Calendar(*m, *d)),
            [y, ddd] if ddd.len() == 3 => (*y, DateFields::Ordinal(*ddd)),
            [y, m] => (*y, DateFields::YearMonth(*m)),
            _ => return Err(invalid()),
        }
    } else if sign == 0 && unsigned.len() > 4 {
        let (y, rest) = unsigned.split_at(4);
        match rest.len() {
            4 if rest.starts_with('W') => (y, DateFields::Week(&rest[1..3], &rest[3..])),
            4 => (y, DateFields::Calendar(&rest[..2], &rest[2..])),
            3 => (y, DateFields::Ordinal(rest)),
            _ => return Err(invalid()),
        }
    } else {
        return Err(invalid());
    };

    let year_digits = year_str.len();
    let year_ok = if sign == 0 {
        year_digits == 4
    } else {
        (4..=6).contains(&year_digits)
    };
    if !year_ok {
        return Err(TimeError::format(format!("invalid year '{}'", year_str)));
    }

    let magnitude = digits(year_str, "year")? as i32;
    let year = if sign < 0 { -magnitude } else { magnitude };

    match fields {
        DateFields::Calendar(month_str, day_str) => {
            let month = checked_month(month_str)?;
            let day = fixed_field(day_str, "day")?;
            if day == 0 || day > days_in_month(year as i64, month) {
                return Err(TimeError::format(format!(
                    "day out of range: {:04}-{:02}-{:02}",
                    year, month, day
                )));
            }
            Ok((year, month, day))
        }
        DateFields::YearMonth(month_str) => Ok((year, checked_month(month_str)?, 1)),
        DateFields::Ordinal(ordinal_str) => {
            let ordinal = digits(ordinal_str, "day of year")? as u16;
            let (_, month, day) = civil_from_ordinal(year as i64, ordinal).ok_or_else(|| {
                TimeError::format(format!("day of year out of range: {}", ordinal_str))
            })?;
            Ok((year, month, day))
        }
        DateFields::Week(week_str, weekday_str) => {
            let week = fixed_field(week_str, "week")?;
            if weekday_str.len() != 1 {
                return Err(TimeError::format(format!("invalid weekday '{}'", weekday_str)));
            }
            let weekday = digits(weekday_str, "weekday")? as u8;
            // Week 1 can start in December and week 52/53 end in January
            let (civil_year, month, day) = civil_from_iso_week(year as i64, week, weekday)
                .ok_or_else(|| {
                    TimeError::format(format!("week date out of range: {}", date))
                })?;
            Ok((civil_year as i32, month, day))
        }
    }
}

fn checked_month(month_str: &str) -> TimeResult<u8> {
    let month = fixed_field(month_str, "month")?;
    if !(1..=12).contains(&month) {
        return Err(TimeError::format(format!("month out of range: {}", month)));
    }
    Ok(month)
}

fn split_offset(rest: &str) -> TimeResult<(&str, i32)> {
    if let Some(clock) = rest.strip_suffix('Z') {
        return Ok((clock, 0));
    }

    let Some(pos) = rest.rfind(['+', '-']) else {
        return Ok((rest, 0));
    };

    let sign = if rest.as_bytes()[pos] == b'-' { -1 } else { 1 };
    let offset = &rest[pos + 1..];
    let (hours_str, minutes_str) = match offset.len() {
        2 => (offset, "00"),
        4 => (&offset[..2], &offset[2..]),
        5 if offset.as_bytes()[2] == b':' => (&offset[..2], &offset[3..]),
        _ => {
            return Err(TimeError::format(format!(
                "invalid UTC offset '{}'",
                &rest[pos..]
            )))
        }
    };

    let hours = fixed_field(hours_str, "offset hour")?;
    let minutes = fixed_field(minutes_str, "offset minute")?;
    if hours > 23 || minutes > 59 {
        return Err(TimeError::format(format!(
            "UTC offset out of range: '{}'",
            &rest[pos..]
        )));
    }

    Ok((&rest[..pos], sign * (hours as i32 * 60 + minutes as i32)))
}

fn parse_time(clock: &str) -> TimeResult<(u8, u8, f64)> {
    let (hour_str, minute_str, second_str) = if clock.contains(':') {
        let components: Vec<&str> = clock.split(':').collect();
        match components.as_slice() {
            [h, m] => (*h, Some(*m), None),
            [h, m, s] => (*h, Some(*m), Some(*s)),
            _ => {
                return Err(TimeError::format(format!(
                    "invalid time '{}', expected hh:mm[:ss]",
                    clock
                )))
            }
        }
    } else {
        let integer_len = clock.find(['.', ',']).unwrap_or(clock.len());
        match integer_len {
            2 => (clock, None, None),
            4 => (&clock[..2], Some(&clock[2..]), None),
            6 => (&clock[..2], Some(&clock[2..4]), Some(&clock[4..])),
            _ => {
                return Err(TimeError::format(format!(
                    "invalid time '{}', expected hh[mm[ss]]",
                    clock
                )))
            }
        }
    };

    // Only the last field given may carry a fraction.
    let fraction_not_last =
        || TimeError::format(format!("fraction must be on the last field in '{}'", clock));

    let (hour, hour_fraction) = fractional_field(hour_str, "hour")?;
    let (minute, minute_fraction) = match minute_str {
        Some(_) if hour_fraction.is_some() => return Err(fraction_not_last()),
        Some(m) => fractional_field(m, "minute")?,
        None => (0, None),
    };
    let second = match second_str {
        Some(_) if minute_fraction.is_some() => return Err(fraction_not_last()),
        Some(s) => {
            let (whole, fraction) = fractional_field(s, "second")?;
            whole as f64 + fraction.unwrap_or(0.0)
        }
        None => 0.0,
    };

    if hour > 23 {
        return Err(TimeError::format(format!("hour out of range: {}", hour)));
    }

    let (minute, second) = match (hour_fraction, minute_fraction) {
        (Some(fraction), _) => {
            let seconds = fraction * 3600.0;
            let whole_minutes = (seconds / 60.0).floor();
            (whole_minutes as u8, seconds - whole_minutes * 60.0)
        }
        (None, Some(fraction)) => (minute, fraction * 60.0),
        (None, None) => (minute, second),
    };

    if minute > 59 {
        return Err(TimeError::format(format!("minute out of range: {}", minute)));
    }
    if second >= 60.0 {
        return Err(TimeError::format(format!("second out of range: {}", second)));
    }

    Ok((hour, minute, second))
}

/// A two-digit field with an optional `.fff` or `,fff` fraction.
fn fractional_field(s: &str, what: &str) -> TimeResult<(u8, Option<f64>)> {
    let Some(pos) = s.find(['.', ',']) else {
        return Ok((fixed_field(s, what)?, None));
    };
    let whole = fixed_field(&s[..pos], what)?;
    let fraction = &s[pos + 1..];
    if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimeError::format(format!("invalid {} '{}'", what, s)));
    }
    let fraction = format!("0.{}", fraction)
        .parse::<f64>()
        .map_err(|_| TimeError::format(format!("invalid {} '{}'", what, s)))?;
    Ok((whole, Some(fraction)))
}

/// A two-digit numeric field.
fn fixed_field(s: &str, what: &str) -> TimeResult<u8> {
    if s.len() != 2 {
        return Err(TimeError::format(format!("invalid {} '{}'", what, s)));
    }
    Ok(digits(s, what)? as u8)
}

fn digits(s: &str, what: &str) -> TimeResult<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimeError::format(format!("invalid {} '{}'", what, s)));
    }
    Ok(s.bytes().fold(0u32, |acc, b| acc * 10 + (b - b'0') as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extended_with_offset() {
        let dt = parse_iso8601("2023-12-30T15:55+00:00").unwrap();
        assert_eq!(dt.year, 2023);
        assert_eq!(dt.month, 12);
        assert_eq!(dt.day, 30);
        assert_eq!(dt.hour, 15);
        assert_eq!(dt.minute, 55);
        assert_eq!(dt.second, 0.0);
        assert_eq!(dt.offset_minutes, 0);
    }

    #[test]
    fn test_signed_expanded_year() {
        let dt = parse_iso8601("-001999-12-21T23:55+00:00").unwrap();
        assert_eq!(dt.year, -1999);
        assert_eq!((dt.month, dt.day, dt.hour, dt.minute), (12, 21, 23, 55));

        let dt = parse_iso8601("+2094-12-31T23:59").unwrap();
        assert_eq!(dt.year, 2094);
    }

    #[test]
    fn test_date_only_defaults_to_midnight() {
        let dt = parse_iso8601("2000-01-01").unwrap();
        assert_eq!((dt.hour, dt.minute, dt.second), (0, 0, 0.0));
        assert_eq!(dt.offset_minutes, 0);
    }

    #[test]
    fn test_basic_format() {
        let dt = parse_iso8601("20231230T1555Z").unwrap();
        assert_eq!((dt.year, dt.month, dt.day, dt.hour, dt.minute), (2023, 12, 30, 15, 55));

        let dt = parse_iso8601("20231230T155530.25-0800").unwrap();
        assert_eq!(dt.second, 30.25);
        assert_eq!(dt.offset_minutes, -480);
    }

    #[test]
    fn test_reduced_precision_time() {
        let dt = parse_iso8601("2023-12-30T15").unwrap();
        assert_eq!((dt.hour, dt.minute), (15, 0));
        let dt = parse_iso8601("2023-12-30T15+05").unwrap();
        assert_eq!(dt.offset_minutes, 300);
    }

    #[test]
    fn test_fractional_seconds_and_separators() {
        let dt = parse_iso8601("2000-01-01T12:00:00.123Z").unwrap();
        assert!((dt.second - 0.123).abs() < 1e-12);
        let dt = parse_iso8601("2000-01-01 12:00:07,5").unwrap();
        assert!((dt.second - 7.5).abs() < 1e-12);
    }

    #[test]
    fn test_offsets() {
        assert_eq!(parse_iso8601("2000-01-01T12:00-08:00").unwrap().offset_minutes, -480);
        assert_eq!(parse_iso8601("2000-01-01T12:00+0530").unwrap().offset_minutes, 330);
        assert!(parse_iso8601("2000-01-01T12:00+24:00").is_err());
        assert!(parse_iso8601("2000-01-01T12:00+05:60").is_err());
        assert!(parse_iso8601("2000-01-01T12:00+5").is_err());
    }

    #[test]
    fn test_ordinal_and_week_dates() {
        let dt = parse_iso8601("2023-364T15:55Z").unwrap();
        assert_eq!((dt.year, dt.month, dt.day, dt.hour, dt.minute), (2023, 12, 30, 15, 55));
        assert_eq!(parse_iso8601("2023364T1555Z").unwrap(), dt);

        let dt = parse_iso8601("2023-W52-6T15:55Z").unwrap();
        assert_eq!((dt.year, dt.month, dt.day), (2023, 12, 30));
        assert_eq!(parse_iso8601("2023W526T1555Z").unwrap(), dt);

        let dt = parse_iso8601("2020-W01-1").unwrap();
        assert_eq!((dt.year, dt.month, dt.day), (2019, 12, 30));
        let dt = parse_iso8601("-001999-060").unwrap();
        assert_eq!((dt.year, dt.month, dt.day), (-1999, 3, 1));

        assert!(parse_iso8601("2023-366").is_err());
        assert!(parse_iso8601("2023-W53-1").is_err());
        assert!(parse_iso8601("2023-W10-0").is_err());
    }

    #[test]
    fn test_year_month_defaults_to_first_day() {
        let dt = parse_iso8601("2023-12").unwrap();
        assert_eq!((dt.year, dt.month, dt.day, dt.hour), (2023, 12, 1, 0));
        assert!(parse_iso8601("2023-13").is_err());
    }

    #[test]
    fn test_fraction_on_last_time_field() {
        let dt = parse_iso8601("2023-12-30T15:55.5Z").unwrap();
        assert_eq!((dt.hour, dt.minute, dt.second), (15, 55, 30.0));

        let dt = parse_iso8601("2023-12-30T15.25").unwrap();
        assert_eq!((dt.hour, dt.minute, dt.second), (15, 15, 0.0));

        let dt = parse_iso8601("20231230T1555,5-0800").unwrap();
        assert_eq!((dt.minute, dt.second, dt.offset_minutes), (55, 30.0, -480));
    }

    #[test]
    fn test_whitespace_handling() {
        let dt = parse_iso8601("  2000-01-01T12:00:00  ").unwrap();
        assert_eq!(dt.year, 2000);
        assert_eq!(dt.hour, 12);
    }

    #[test]
    fn test_rejects_garbage() {
        for input in [
            "",
            "not-a-date",
            "12:00:00",
            "2000-1-1T1:1:1",
            "200-01-01",
            "20000-01-01",
            "+0000002-01-01",
            "2000-01-01T",
            "2000-01-01T12:00:00:00",
            "2000-01-01T12:0",
            "2000-01-01T12:00:ab",
            "2000-01-01T12:00:00.",
            "2000-01-01Z",
            "2000-01-01T12:00:00.5.5",
            "2000-01-01T12.5:00",
            "2000-01-01T12:30.5:00",
            "2000-W1-1",
            "2000-W01-12",
            "2000-1",
            "2000-0001",
            "２０００-01-01",
        ] {
            assert!(
                matches!(parse_iso8601(input), Err(TimeError::InvalidTimeFormat(_))),
                "'{}' should be rejected",
                input
            );
        }
    }

    #[test]
    fn test_invalid_ranges() {
        assert!(parse_iso8601("2000-13-01T12:00:00").is_err());
        assert!(parse_iso8601("2000-00-01T12:00:00").is_err());
        assert!(parse_iso8601("2000-01-32T12:00:00").is_err());
        assert!(parse_iso8601("2023-02-29T12:00:00").is_err());
        assert!(parse_iso8601("2000-01-01T24:00:00").is_err());
        assert!(parse_iso8601("2000-01-01T12:60:00").is_err());
        assert!(parse_iso8601("2000-01-01T12:00:60").is_err());
        assert!(parse_iso8601("2024-02-29T12:00:00").is_ok());
        assert!(parse_iso8601("2000-12-31T23:59:59.999").is_ok());
    }

    #[test]
    fn test_input_too_long() {
        let long_input = "2000-01-01T12:00:00.".repeat(10);
        assert_eq!(
            parse_iso8601(&long_input),
            Err(TimeError::InvalidTimeFormat("input too long".to_string()))
        );
    }
}
