//! Step validity filter.

const BARE_LABELS: &[&str] = &["feature", "scenario", "given", "when", "then", "and", "but"];

/// Returns true if `text` may become a step.
pub fn is_valid_step(text: &str, min_len: usize) -> bool {
    let text = text.trim();
    if text.chars().count() < min_len {
        return false;
    }
    if !text.chars().any(char::is_alphabetic) {
        return false;
    }

    let label = text.trim_end_matches([':', '.']).to_lowercase();
    if BARE_LABELS.contains(&label.as_str()) {
        return false;
    }

    !(text.contains('/') && text.contains('.'))
}

/// Keeps only valid fragments, preserving order.
pub fn retain_valid(fragments: Vec<String>, min_len: usize) -> Vec<String> {
    fragments
        .into_iter()
        .filter(|f| is_valid_step(f, min_len))
        .collect()
}
