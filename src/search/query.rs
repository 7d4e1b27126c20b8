use crate::search::index::IndexedPost;

/// Run a keyword query over the session index.
///
/// A post matches when its blob contains the trimmed, lowercased keyword as a
/// contiguous substring. This is plain `str::contains`, so pattern
/// metacharacters in the keyword have no meaning and can never panic. An empty
/// or whitespace-only keyword clears: it matches nothing rather than
/// everything.
///
/// Matches come back as a stable partition: posts whose *title* contains the
/// keyword first, everything else after, each tier in original index order.
/// Pure; identical calls yield identical results.
pub fn search<'a>(index: &'a [IndexedPost], keyword: &str) -> Vec<&'a IndexedPost> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return Vec::new();
    }
    let needle = keyword.to_lowercase();

    let (title_hits, body_hits): (Vec<&IndexedPost>, Vec<&IndexedPost>) = index
        .iter()
        .filter(|indexed| indexed.search_text.contains(&needle))
        .partition(|indexed| indexed.post.title.to_lowercase().contains(&needle));

    title_hits.into_iter().chain(body_hits).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::post::Post;
    use crate::search::index::build_index;

    fn index() -> Vec<IndexedPost> {
        let posts = vec![
            Post {
                title: "Intro to Rust".to_string(),
                content: "Getting started with the language".to_string(),
                tags: vec!["Rust".to_string()],
                ..Post::default()
            },
            Post {
                title: "Blog Maintenance Notes".to_string(),
                content: "Why I migrated this blog to Rust tooling".to_string(),
                ..Post::default()
            },
            Post {
                title: "Rust Error Handling".to_string(),
                content: "Result, Option and the question mark operator".to_string(),
                ..Post::default()
            },
            Post {
                title: "Cooking at Home".to_string(),
                content: "Nothing technical here".to_string(),
                ..Post::default()
            },
        ];
        build_index(posts)
    }

    #[test]
    fn test_empty_and_whitespace_keywords_return_nothing() {
        let index = index();
        assert!(search(&index, "").is_empty());
        assert!(search(&index, "   \t ").is_empty());
    }

    #[test]
    fn test_substring_match_is_case_insensitive() {
        let index = index();
        let hits = search(&index, "RUST");
        assert_eq!(hits.len(), 3);
        for hit in &hits {
            assert!(hit.search_text.contains("rust"));
        }
    }

    #[test]
    fn test_title_tier_sorts_before_body_tier_stably() {
        let index = index();
        let titles: Vec<&str> = search(&index, "rust")
            .iter()
            .map(|hit| hit.post.title.as_str())
            .collect();
        // Title matches keep index order, then the content-only match.
        assert_eq!(
            titles,
            vec!["Intro to Rust", "Rust Error Handling", "Blog Maintenance Notes"]
        );
    }

    #[test]
    fn test_each_matching_post_appears_exactly_once() {
        let index = index();
        let hits = search(&index, "rust");
        let mut titles: Vec<&str> = hits.iter().map(|hit| hit.post.title.as_str()).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), hits.len());
    }

    #[test]
    fn test_keyword_is_trimmed_before_matching() {
        let index = index();
        assert_eq!(search(&index, "  rust  ").len(), 3);
    }

    #[test]
    fn test_no_match_returns_empty() {
        let index = index();
        assert!(search(&index, "golang").is_empty());
    }

    #[test]
    fn test_search_is_idempotent() {
        let index = index();
        let first = search(&index, "rust");
        let second = search(&index, "rust");
        assert_eq!(first, second);
    }

    #[test]
    fn test_metacharacters_are_literal() {
        let posts = vec![Post {
            title: "Why C++ (still) matters".to_string(),
            ..Post::default()
        }];
        let index = build_index(posts);
        assert_eq!(search(&index, "c++").len(), 1);
        assert_eq!(search(&index, "(still)").len(), 1);
        assert!(search(&index, ".*").is_empty());
    }

    #[test]
    fn test_tag_and_category_text_is_searchable() {
        let posts = vec![Post {
            title: "Untitled".to_string(),
            tags: vec!["Deployment".to_string()],
            categories: vec!["Infrastructure".to_string()],
            ..Post::default()
        }];
        let index = build_index(posts);
        assert_eq!(search(&index, "deployment").len(), 1);
        assert_eq!(search(&index, "infrastructure").len(), 1);
    }
}
