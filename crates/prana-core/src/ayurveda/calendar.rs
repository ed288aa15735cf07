//! Calendar buckets: month → season, clock hour → period.

use super::{HourPeriod, Season};
use crate::config::Hemisphere;
use chrono::{Datelike, Timelike};

/// Northern-hemisphere season for a date.
pub fn get_season_from_date<D: Datelike>(date: &D) -> Season {
    season_for_month(date.month())
}

/// Season for a date in the given hemisphere. The south is six months ahead.
pub fn get_season_for_hemisphere<D: Datelike>(date: &D, hemisphere: Hemisphere) -> Season {
    match hemisphere {
        Hemisphere::North => season_for_month(date.month()),
        Hemisphere::South => season_for_month((date.month() + 5) % 12 + 1),
    }
}

fn season_for_month(month: u32) -> Season {
    match month {
        3..=5 => Season::Spring,
        6..=8 => Season::Summer,
        9..=11 => Season::Autumn,
        _ => Season::Winter,
    }
}

pub fn get_hour_period_from_date<T: Timelike>(time: &T) -> HourPeriod {
    match time.hour() {
        5..=10 => HourPeriod::Morning,
        11..=14 => HourPeriod::Midday,
        15..=17 => HourPeriod::Afternoon,
        18..=21 => HourPeriod::Evening,
        _ => HourPeriod::Night,
    }
}
