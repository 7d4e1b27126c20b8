use leptos::prelude::*;

use crate::models::post::Post;
use crate::search::excerpt::{excerpt, DEFAULT_EXCERPT_CHARS};
use crate::search::highlight::{highlight, Segment};

/// Render the outcome of the last executed search.
///
/// `submitted` is `None` until a search ran (and again after a clear); the
/// container then stays empty instead of showing a zero-result notice.
#[component]
pub fn SearchResults(
    results: ReadSignal<Vec<Post>>,
    submitted: ReadSignal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="search-results">
            {move || {
                let keyword = submitted.get()?;
                let posts = results.get();
                if posts.is_empty() {
                    Some(
                        view! {
                            <p class="no-results">"No posts matching \"" {keyword} "\""</p>
                        }
                        .into_any(),
                    )
                } else {
                    let count = posts.len();
                    Some(
                        view! {
                            <div class="search-results-header">
                                <p>
                                    {format!(
                                        "Found {count} matching post{}",
                                        if count == 1 { "" } else { "s" }
                                    )}
                                </p>
                            </div>
                            {posts
                                .into_iter()
                                .map(|post| result_entry(post, keyword.clone()))
                                .collect_view()}
                        }
                        .into_any(),
                    )
                }
            }}
        </div>
    }
}

/// One result entry: linked highlighted title, date and categories, a
/// highlighted excerpt and the tag chips. Date, categories and tags are never
/// highlighted.
fn result_entry(post: Post, keyword: String) -> impl IntoView {
    let title = highlighted(&post.title, &keyword);
    let snippet = highlighted(
        &excerpt(&post.content, &keyword, DEFAULT_EXCERPT_CHARS),
        &keyword,
    );
    let categories = post.categories.join(", ");

    view! {
        <div class="search-result-item">
            <h3>
                <a href=post.url>{title}</a>
            </h3>
            <p class="search-meta">
                <span class="date">{post.date}</span>
                <span class="category">{categories}</span>
            </p>
            <p class="search-excerpt">{snippet}</p>
            <div class="search-tags">
                {post
                    .tags
                    .into_iter()
                    .map(|tag| view! { <span class="tag">{tag}</span> })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Wrap every keyword occurrence in `<mark>`. Plain segments become text
/// nodes, so markup-significant characters in post fields or the keyword are
/// escaped by construction rather than interpreted.
fn highlighted(text: &str, keyword: &str) -> Vec<AnyView> {
    highlight(text, keyword)
        .into_iter()
        .map(|segment| match segment {
            Segment::Plain(text) => text.into_any(),
            Segment::Match(text) => view! { <mark>{text}</mark> }.into_any(),
        })
        .collect()
}
