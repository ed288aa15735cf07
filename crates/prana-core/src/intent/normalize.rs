//! Text normalization: lowercase → abbreviation expansion → diacritic stripping →
//! noise-word removal → whitespace collapse.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Chat shorthand (Portuguese and English) and its expansion.
const ABBREVIATIONS: &[(&str, &str)] = &[
    ("vc", "você"),
    ("vcs", "vocês"),
    ("pq", "porque"),
    ("tb", "também"),
    ("tbm", "também"),
    ("q", "que"),
    ("n", "não"),
    ("nao", "não"),
    ("hj", "hoje"),
    ("mt", "muito"),
    ("mto", "muito"),
    ("mta", "muita"),
    ("td", "tudo"),
    ("tds", "todos"),
    ("cmg", "comigo"),
    ("ctg", "contigo"),
    ("ngm", "ninguém"),
    ("msm", "mesmo"),
    ("agr", "agora"),
    ("blz", "beleza"),
    ("vdd", "verdade"),
    ("dps", "depois"),
    ("qdo", "quando"),
    ("qnd", "quando"),
    ("sla", "sei lá"),
    ("tô", "estou"),
    ("tá", "está"),
    ("pra", "para"),
    ("pro", "para o"),
    ("u", "you"),
    ("ur", "your"),
    ("idk", "i don't know"),
    ("rn", "right now"),
    ("bc", "because"),
];

/// Fillers removed after diacritics are gone.
const NOISE_WORDS: &[&str] = &[
    "tipo", "ne", "sabe", "entao", "ai", "po", "mano", "hein", "kkk", "kkkk", "kkkkk", "rs",
    "rsrs", "haha", "hahaha", "lol", "like", "basically", "literally", "ah",
    "eh", "uh", "um", "hmm",
];

/// Compiled abbreviation rules, longest key first so "tbm" wins over "tb".
static ABBREVIATION_RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    let mut entries: Vec<&(&str, &str)> = ABBREVIATIONS.iter().collect();
    entries.sort_by(|a, b| b.0.chars().count().cmp(&a.0.chars().count()));
    entries
        .into_iter()
        .filter_map(|(key, expansion)| {
            match Regex::new(&format!(r"\b{}\b", regex::escape(key))) {
                Ok(re) => Some((re, *expansion)),
                Err(e) => {
                    tracing::warn!(target: "prana::intent", key = *key, error = %e, "skipping abbreviation rule");
                    None
                }
            }
        })
        .collect()
});

/// Remove combining marks after canonical decomposition ("ção" → "cao").
pub fn strip_diacritics(s: &str) -> String {
    s.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Expand chat shorthand on word boundaries.
pub fn expand_abbreviations(s: &str) -> String {
    ABBREVIATION_RULES
        .iter()
        .fold(s.to_string(), |acc, (re, expansion)| {
            re.replace_all(&acc, *expansion).into_owned()
        })
}

/// Full normalization pipeline. Returns an empty string for blank input.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let expanded = expand_abbreviations(&lowered);
    let stripped = strip_diacritics(&expanded);
    stripped
        .split_whitespace()
        .filter(|word| {
            let bare = word.trim_matches(|c: char| !c.is_alphanumeric());
            !NOISE_WORDS.contains(&bare)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Punctuation-free, space-padded form used for phrase matching.
pub(crate) fn scan_form(s: &str) -> String {
    let spaced: String = s
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    let mut out = String::with_capacity(spaced.len() + 2);
    out.push(' ');
    out.push_str(&spaced.split_whitespace().collect::<Vec<_>>().join(" "));
    out.push(' ');
    out
}

/// Whole-phrase match against a scan form.
pub(crate) fn has_phrase(scan: &str, phrase: &str) -> bool {
    let needle = scan_form(phrase);
    !needle.trim().is_empty() && scan.contains(&needle)
}

/// Word-start (stem) match against a scan form: "ansios" matches "ansiosa".
pub(crate) fn has_stem(scan: &str, stem: &str) -> bool {
    let needle = scan_form(stem);
    let needle = needle.trim_end();
    !needle.trim().is_empty() && scan.contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_accents() {
        assert_eq!(strip_diacritics("São Paulo, coração"), "Sao Paulo, coracao");
    }

    #[test]
    fn expands_longest_abbreviation_first() {
        assert_eq!(expand_abbreviations("tbm acho"), "também acho");
        assert_eq!(expand_abbreviations("vc q sabe"), "você que sabe");
        // no expansion inside words
        assert_eq!(expand_abbreviations("quando"), "quando");
    }

    #[test]
    fn full_pipeline() {
        assert_eq!(
            normalize("  Tipo, VC   n sabe o q é ANSIEDADE  kkk "),
            "voce nao o que e ansiedade"
        );
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn phrase_and_stem_matching() {
        let scan = scan_form("estou ansiosa, com medo de perder");
        assert!(has_phrase(&scan, "medo de perder"));
        assert!(!has_phrase(&scan, "medo de per"));
        assert!(has_stem(&scan, "ansios"));
        assert!(!has_stem(&scan, "siosa"));
        assert!(!has_phrase(&scan, ""));
    }
}
