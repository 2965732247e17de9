//! Edit-distance string similarity on a 0-100 scale

use strsim::normalized_levenshtein;

/// Whole-string similarity: 100 for identical strings, 0 for nothing in common.
pub fn ratio(a: &str, b: &str) -> f64 {
    normalized_levenshtein(a, b) * 100.0
}

/// Best similarity between the shorter string and any equally long window of
/// the longer one.
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let (short, long) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };

    let short_len = short.chars().count();
    if short_len == 0 {
        return if long.is_empty() { 100.0 } else { 0.0 };
    }

    let long_chars: Vec<char> = long.chars().collect();
    if short_len == long_chars.len() {
        return ratio(short, long);
    }

    let mut best: f64 = 0.0;
    for window in long_chars.windows(short_len) {
        let candidate: String = window.iter().collect();
        best = best.max(ratio(short, &candidate));
        if best >= 100.0 {
            break;
        }
    }
    best
}
