use crate::search::text::occurrences_ci;

/// A run of rendered text: either untouched or a keyword hit to emphasize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    Match(String),
}

/// Split `text` into plain and matching segments, one `Match` per
/// non-overlapping case-insensitive occurrence of `keyword`, original casing
/// preserved.
///
/// Segments carry raw text only; the renderer decides how a `Match` is
/// emphasized and is responsible for escaping. Matching is literal substring
/// comparison, so a keyword full of pattern metacharacters is still just text.
pub fn highlight(text: &str, keyword: &str) -> Vec<Segment> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return vec![Segment::Plain(text.to_string())];
    }

    let mut segments = Vec::new();
    let mut cursor = 0;
    for (start, end) in occurrences_ci(text, keyword) {
        if start > cursor {
            segments.push(Segment::Plain(text[cursor..start].to_string()));
        }
        segments.push(Segment::Match(text[start..end].to_string()));
        cursor = end;
    }
    if cursor < text.len() || segments.is_empty() {
        segments.push(Segment::Plain(text[cursor..].to_string()));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_occurrence_preserving_case() {
        let segments = highlight("JavaScript Guide", "script");
        assert_eq!(
            segments,
            vec![
                Segment::Plain("Java".to_string()),
                Segment::Match("Script".to_string()),
                Segment::Plain(" Guide".to_string()),
            ]
        );
    }

    #[test]
    fn test_every_occurrence_is_marked() {
        let segments = highlight("rust Rust RUST", "rust");
        let matches: Vec<&str> = segments
            .iter()
            .filter_map(|s| match s {
                Segment::Match(t) => Some(t.as_str()),
                Segment::Plain(_) => None,
            })
            .collect();
        assert_eq!(matches, vec!["rust", "Rust", "RUST"]);
    }

    #[test]
    fn test_no_occurrence_yields_single_plain_segment() {
        assert_eq!(
            highlight("nothing here", "absent"),
            vec![Segment::Plain("nothing here".to_string())]
        );
    }

    #[test]
    fn test_blank_keyword_leaves_text_untouched() {
        assert_eq!(
            highlight("some text", "  "),
            vec![Segment::Plain("some text".to_string())]
        );
    }

    #[test]
    fn test_segments_reassemble_to_original_text() {
        let text = "The quick brown fox jumps over the lazy dog";
        let rebuilt: String = highlight(text, "o")
            .into_iter()
            .map(|s| match s {
                Segment::Plain(t) | Segment::Match(t) => t,
            })
            .collect();
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn test_match_at_both_ends() {
        let segments = highlight("abcab", "ab");
        assert_eq!(
            segments,
            vec![
                Segment::Match("ab".to_string()),
                Segment::Plain("c".to_string()),
                Segment::Match("ab".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_text_yields_one_empty_plain_segment() {
        assert_eq!(
            highlight("", "kw"),
            vec![Segment::Plain(String::new())]
        );
    }
}
