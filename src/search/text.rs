//! Case-insensitive substring scanning over original-case text.
//!
//! The query engine matches against a pre-lowered blob, but highlighting and
//! excerpt extraction need match positions inside the *original* text. Unicode
//! lowercasing may change a string's byte length, so positions found in a
//! lowered copy cannot be mapped back safely; these helpers instead fold one
//! character at a time while walking the original.

/// Byte length of a case-insensitive match of `needle_lower` at the start of
/// `text`, or `None` if `text` does not begin with one.
///
/// Matches always end on a character boundary of `text`: a needle that would
/// stop inside a multi-character case folding is rejected.
fn fold_prefix_len(text: &str, needle_lower: &str) -> Option<usize> {
    let mut wanted = needle_lower.chars();
    let mut next = wanted.next();
    let mut len = 0;
    for ch in text.chars() {
        if next.is_none() {
            break;
        }
        for folded in ch.to_lowercase() {
            match next {
                Some(expected) if expected == folded => next = wanted.next(),
                _ => return None,
            }
        }
        len += ch.len_utf8();
    }
    if next.is_none() {
        Some(len)
    } else {
        None
    }
}

/// First match of `needle_lower` in `text` at or after byte offset `from`,
/// as a byte range.
fn find_folded(text: &str, needle_lower: &str, from: usize) -> Option<(usize, usize)> {
    text[from..].char_indices().find_map(|(offset, _)| {
        let start = from + offset;
        fold_prefix_len(&text[start..], needle_lower).map(|len| (start, start + len))
    })
}

/// First case-insensitive occurrence of `keyword` in `text`, as a byte range.
pub fn find_ci(text: &str, keyword: &str) -> Option<(usize, usize)> {
    let needle = keyword.to_lowercase();
    if needle.is_empty() {
        return None;
    }
    find_folded(text, &needle, 0)
}

/// All non-overlapping case-insensitive occurrences of `keyword` in `text`,
/// left to right.
pub fn occurrences_ci(text: &str, keyword: &str) -> Vec<(usize, usize)> {
    let needle = keyword.to_lowercase();
    let mut hits = Vec::new();
    if needle.is_empty() {
        return hits;
    }
    let mut from = 0;
    while let Some((start, end)) = find_folded(text, &needle, from) {
        hits.push((start, end));
        from = end;
    }
    hits
}
