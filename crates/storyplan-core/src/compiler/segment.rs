//! Line segmentation and noise filtering.

use super::tables::{DOCUMENT_EXTENSIONS, STRUCTURAL_HEADERS};

/// Splits raw text into trimmed candidate prose lines, dropping noise.
pub fn segment(text: &str, min_len: usize) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !is_noise(line, min_len))
        .map(ToString::to_string)
        .collect()
}

/// Returns true for lines that are not prose to convert.
pub fn is_noise(line: &str, min_len: usize) -> bool {
    if line.chars().count() < min_len {
        return true;
    }
    if line.starts_with("//") || line.starts_with('#') {
        return true;
    }

    let lower = line.to_lowercase();
    if STRUCTURAL_HEADERS.iter().any(|h| lower.starts_with(h)) {
        return true;
    }

    looks_like_path(&lower)
}

/// A `/` together with a known document extension.
pub fn looks_like_path(lower: &str) -> bool {
    lower.contains('/') && DOCUMENT_EXTENSIONS.iter().any(|ext| lower.contains(ext))
}

