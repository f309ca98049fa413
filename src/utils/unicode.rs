//! Byte-offset cursor movement over UTF-8 text. Callers keep cursors on
//! char boundaries; these helpers never return an offset inside a code
//! point.

pub fn prev_char_boundary(s: &str, cursor: usize) -> usize {
    s[..cursor]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

pub fn next_char_boundary(s: &str, cursor: usize) -> usize {
    s[cursor..]
        .chars()
        .next()
        .map(|c| cursor + c.len_utf8())
        .unwrap_or(s.len())
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Start of the word before the cursor (skipping any separators in between).
pub fn prev_word_boundary(s: &str, cursor: usize) -> usize {
    let word_end = s[..cursor].trim_end_matches(|c: char| !is_word_char(c)).len();
    s[..word_end].trim_end_matches(is_word_char).len()
}

/// Start of the word after the cursor (end of text if there is none).
pub fn next_word_boundary(s: &str, cursor: usize) -> usize {
    let rest = s[cursor..].trim_start_matches(is_word_char);
    let rest = rest.trim_start_matches(|c: char| !is_word_char(c));
    s.len() - rest.len()
}
