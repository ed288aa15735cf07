//! Pythagorean name numerology.
//!
//! Letters map to 1..=9 cyclically (a=1 .. i=9, j=1 ..). The sum is reduced by
//! repeated digit sum until it lands in 1..=9, or stops early on the master
//! numbers 11 and 22.

use crate::intent::strip_diacritics;
use serde::Serialize;

/// Numbers that are never reduced further.
pub const MASTER_NUMBERS: [u32; 2] = [11, 22];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Numerology {
    /// Raw letter-value sum before reduction.
    pub letter_sum: u32,
    pub ruling_number: u8,
    pub is_master: bool,
    pub traits: &'static [&'static str],
}

/// Letter value, or `None` for anything outside `a..=z`.
pub fn letter_value(c: char) -> Option<u32> {
    let c = c.to_ascii_lowercase();
    c.is_ascii_lowercase().then(|| (c as u32 - 'a' as u32) % 9 + 1)
}

/// Repeated digit sum, stopping at 1..=9, 11 or 22.
pub fn reduce(mut n: u32) -> u32 {
    while n > 9 && !MASTER_NUMBERS.contains(&n) {
        n = digit_sum(n);
    }
    n
}

fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Numerology of a full name. `None` when the name carries no letters.
pub fn numerology_for_name(name: &str) -> Option<Numerology> {
    let letter_sum: u32 = strip_diacritics(name).chars().filter_map(letter_value).sum();
    if letter_sum == 0 {
        return None;
    }
    let ruling = reduce(letter_sum);
    let ruling_number = u8::try_from(ruling).ok()?;
    Some(Numerology {
        letter_sum,
        ruling_number,
        is_master: MASTER_NUMBERS.contains(&ruling),
        traits: traits_for(ruling_number),
    })
}

/// Keyword traits per ruling number.
pub fn traits_for(n: u8) -> &'static [&'static str] {
    match n {
        1 => &["initiative", "independence", "courage"],
        2 => &["cooperation", "sensitivity", "diplomacy"],
        3 => &["expression", "creativity", "sociability"],
        4 => &["structure", "discipline", "reliability"],
        5 => &["freedom", "curiosity", "adaptability"],
        6 => &["care", "responsibility", "harmony"],
        7 => &["introspection", "analysis", "solitude"],
        8 => &["ambition", "authority", "material mastery"],
        9 => &["compassion", "completion", "generosity"],
        11 => &["intuition", "inspiration", "nervous intensity"],
        22 => &["vision", "large-scale building", "pressure of potential"],
        _ => &[],
    }
}
