//! Calendar ↔ Julian Day conversion (Meeus, chapter 7).

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

/// Julian Day of the J2000.0 epoch.
pub const J2000: f64 = 2_451_545.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Julian Day for a Gregorian calendar date with fractional day.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day_frac + b - 1524.5
}

/// Julian Day (UT) for a local date and clock time at a fixed UTC offset in hours.
pub fn local_to_jd(date: NaiveDate, time: NaiveTime, utc_offset_hours: f64) -> f64 {
    let day_frac = date.day() as f64
        + time.hour() as f64 / 24.0
        + time.minute() as f64 / 1440.0
        + time.second() as f64 / 86_400.0;
    calendar_to_jd(date.year(), date.month(), day_frac) - utc_offset_hours / 24.0
}

/// Julian centuries since J2000.0.
pub fn centuries_since_j2000(jd: f64) -> f64 {
    (jd - J2000) / DAYS_PER_CENTURY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_epoch() {
        let jd = calendar_to_jd(2000, 1, 1.5);
        assert!((jd - J2000).abs() < 1e-9);
    }

    #[test]
    fn meeus_example_7a() {
        // 1957 October 4.81 => JD 2436116.31
        let jd = calendar_to_jd(1957, 10, 4.81);
        assert!((jd - 2_436_116.31).abs() < 1e-6);
    }

    #[test]
    fn local_offset_shifts_backwards() {
        let d = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let t = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        // 09:00 at UTC-3 is 12:00 UT
        let jd = local_to_jd(d, t, -3.0);
        assert!((jd - J2000).abs() < 1e-9);
    }
}
