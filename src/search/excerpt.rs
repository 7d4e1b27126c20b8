use crate::search::text::find_ci;

/// Default excerpt window, in characters.
pub const DEFAULT_EXCERPT_CHARS: usize = 150;

/// Characters of context kept before the first keyword occurrence.
const CONTEXT_BEFORE: usize = 50;

const ELLIPSIS: &str = "...";

/// Cut a window of `length` characters out of `content`, centered just after
/// the first case-insensitive occurrence of `keyword`.
///
/// The window starts 50 characters before the occurrence (clamped to the
/// beginning) and ends `length` characters later (clamped to the end). An
/// ellipsis marks each side that was cut. A keyword that never occurs in
/// `content` anchors the window at position 0, so the result is deterministic
/// either way. Offsets are character-based; multi-byte text cannot split.
pub fn excerpt(content: &str, keyword: &str, length: usize) -> String {
    let total = content.chars().count();
    let match_char = match find_ci(content, keyword) {
        Some((byte_start, _)) => content[..byte_start].chars().count(),
        None => 0,
    };

    let start = match_char.saturating_sub(CONTEXT_BEFORE);
    let end = (start + length).min(total);

    let window: String = content.chars().skip(start).take(end - start).collect();
    let mut out = String::new();
    if start > 0 {
        out.push_str(ELLIPSIS);
    }
    out.push_str(&window);
    if end < total {
        out.push_str(ELLIPSIS);
    }
    out
}
