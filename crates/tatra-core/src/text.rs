// crates/tatra-core/src/text.rs

//! String helpers shared by the filter engine and the presentation helpers.

/// Case-insensitive substring test.
///
/// Uses full Unicode lowercasing (`Kościeliska` vs `KOŚCIELISKA`) but no
/// diacritic folding: `koscieliska` does not match `Kościeliska`.
pub fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Convert a string into a folded key: ASCII transliteration + lowercase.
///
/// ```rust
/// use tatra_core::text::fold_key;
///
/// assert_eq!(fold_key("Kościeliska"), "koscieliska");
/// assert_eq!(fold_key("Łomnica"), "lomnica");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// URL-safe slug: transliterated, lowercased, runs of non-alphanumerics
/// collapsed into a single `-`, no leading or trailing dash.
///
/// ```rust
/// use tatra_core::text::slugify;
///
/// assert_eq!(slugify("Dolina Kościeliska"), "dolina-koscieliska");
/// assert_eq!(slugify("  Świnica (2301 m) "), "swinica-2301-m");
/// ```
pub fn slugify(s: &str) -> String {
    let folded = fold_key(s);
    let mut out = String::with_capacity(folded.len());
    let mut pending_dash = false;
    for ch in folded.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(ch);
        } else {
            pending_dash = true;
        }
    }
    out
}

/// Remove anything between `<` and `>`.
pub fn strip_html(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

/// Truncate to `max_chars` characters, trimming and appending `...`.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars).collect();
    format!("{}...", head.trim())
}

/// Plain-text excerpt of HTML content.
pub fn extract_excerpt(content: &str, max_chars: usize) -> String {
    truncate_text(&strip_html(content), max_chars)
}

/// Reading time in whole minutes, rounded up.
pub fn reading_time_minutes(content: &str, words_per_minute: usize) -> usize {
    let words = strip_html(content).split_whitespace().count();
    if words_per_minute == 0 {
        return 0;
    }
    words.div_ceil(words_per_minute)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_ci_lowercases_unicode() {
        assert!(contains_ci("Dolina KOŚCIELISKA", "kościeliska"));
        assert!(!contains_ci("Dolina Kościeliska", "koscieliska"));
    }

    #[test]
    fn strip_html_removes_tags() {
        assert_eq!(strip_html("<p>Morskie <b>Oko</b></p>"), "Morskie Oko");
    }

    #[test]
    fn truncate_text_is_char_based() {
        assert_eq!(truncate_text("Łatwy szlak", 5), "Łatwy...");
        assert_eq!(truncate_text("krótki", 10), "krótki");
        assert_eq!(truncate_text("ab cd", 3), "ab...");
    }

    #[test]
    fn excerpt_strips_then_truncates() {
        assert_eq!(
            extract_excerpt("<p>Szlak <em>nad</em> Morskie Oko</p>", 10),
            "Szlak nad..."
        );
        assert_eq!(extract_excerpt("<p>Krótko</p>", 160), "Krótko");
    }

    #[test]
    fn reading_time_rounds_up() {
        let text = "słowo ".repeat(201);
        assert_eq!(reading_time_minutes(&text, 200), 2);
        assert_eq!(reading_time_minutes("", 200), 0);
    }

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("Morskie Oko -- Rysy"), "morskie-oko-rysy");
        assert_eq!(slugify("!!!"), "");
    }
}
