use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Canonical form for case and diacritic insensitive comparison
///
/// Lowercases, trims and strips combining marks, so "Canción" and "cancion"
/// compare equal. Idempotent.
pub fn normalize(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Whether a guess matches the target word
pub fn is_correct(guess: &str, target: &str) -> bool {
    normalize(guess) == normalize(target)
}
