use crate::models::post::Post;

/// A post plus its denormalized search blob, immutable once built.
///
/// The position inside the built sequence doubles as the post's identity for
/// the page session; the index is rebuilt wholesale on reload, never patched.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedPost {
    pub post: Post,
    /// Lowercased concatenation of title, content, tags and categories.
    pub search_text: String,
}

/// Build the session index. Pure; output order equals input order.
pub fn build_index(posts: Vec<Post>) -> Vec<IndexedPost> {
    posts
        .into_iter()
        .map(|post| {
            let search_text = search_text(&post);
            IndexedPost { post, search_text }
        })
        .collect()
}

/// The searchable blob: title, content, space-joined tags and space-joined
/// categories, in that fixed order, lowercased as a whole.
fn search_text(post: &Post) -> String {
    format!(
        "{} {} {} {}",
        post.title,
        post.content,
        post.tags.join(" "),
        post.categories.join(" ")
    )
    .to_lowercase()
}
