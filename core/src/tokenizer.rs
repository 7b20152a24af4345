use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Remove diacritical marks using NFKD decomposition. Case is preserved.
pub fn strip_diacritics(text: &str) -> String {
    text.nfkd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Index key for a raw author name as scraped from a page.
pub fn normalize_author(raw: &str) -> String {
    strip_diacritics(raw)
}

/// Queries are lowercased before the diacritics are stripped.
pub fn normalize_query(term: &str) -> String {
    strip_diacritics(&term.to_lowercase())
}

/// Split a normalized name into lowercase whitespace-delimited tokens.
pub fn tokenize(normalized: &str) -> Vec<String> {
    normalized
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
