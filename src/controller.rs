//! Bridges user input to the query engine and the metrics collaborator.

use crate::metrics::SearchMetrics;
use crate::models::post::Post;
use crate::search::index::IndexedPost;
use crate::search::query;

/// Run one search over the session index.
///
/// A blank keyword is the clear signal: it produces no results and is not
/// reported to the metrics collaborator. Anything else is queried after
/// trimming and reported with its result count.
pub fn execute_search(
    index: &[IndexedPost],
    raw_keyword: &str,
    metrics: &dyn SearchMetrics,
) -> Vec<Post> {
    let keyword = raw_keyword.trim();
    if keyword.is_empty() {
        return Vec::new();
    }

    let hits = query::search(index, keyword);
    metrics.record_search(keyword, hits.len());
    hits.into_iter().map(|hit| hit.post.clone()).collect()
}
