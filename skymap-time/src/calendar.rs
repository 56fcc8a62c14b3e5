//! Proleptic Gregorian calendar arithmetic.
//!
//! Day counts are relative to 1970-01-01 and valid for negative (astronomical)
//! years, so 1 BC is year 0 and 2001 BC is year -2000.

pub fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_month(year: i64, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Days since 1970-01-01 for a civil date.
pub fn days_from_civil(year: i64, month: u8, day: u8) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (month as i64 + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Inverse of [`days_from_civil`].
pub fn civil_from_days(days: i64) -> (i64, u8, u8) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
    let year = yoe + era * 400 + if month <= 2 { 1 } else { 0 };
    (year, month, day)
}

pub fn days_in_year(year: i64) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// ISO weekday (1 = Monday, 7 = Sunday) of a day count from [`days_from_civil`].
pub fn iso_weekday(days: i64) -> u8 {
    // 1970-01-01 was a Thursday
    ((days + 3).rem_euclid(7) + 1) as u8
}

/// Civil date of the `ordinal`-th day of `year` (1-based).
pub fn civil_from_ordinal(year: i64, ordinal: u16) -> Option<(i64, u8, u8)> {
    if ordinal == 0 || ordinal > days_in_year(year) {
        return None;
    }
    Some(civil_from_days(days_from_civil(year, 1, 1) + ordinal as i64 - 1))
}

/// Day count of the Monday starting ISO week 1, the week holding January 4th.
fn first_iso_monday(year: i64) -> i64 {
    let jan4 = days_from_civil(year, 1, 4);
    jan4 - (iso_weekday(jan4) as i64 - 1)
}

pub fn iso_weeks_in_year(year: i64) -> u8 {
    ((first_iso_monday(year + 1) - first_iso_monday(year)) / 7) as u8
}

/// Civil date of an ISO week date. The result can fall in the neighbouring
/// calendar year.
pub fn civil_from_iso_week(year: i64, week: u8, weekday: u8) -> Option<(i64, u8, u8)> {
    if week == 0 || week > iso_weeks_in_year(year) || !(1..=7).contains(&weekday) {
        return None;
    }
    let days = first_iso_monday(year) + (week as i64 - 1) * 7 + weekday as i64 - 1;
    Some(civil_from_days(days))
}
