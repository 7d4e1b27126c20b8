use thiserror::Error;

/// Widget-wide error types.
///
/// Every variant is recovered inside the widget: feed failures fall back to
/// the built-in sample posts, and host-page problems degrade to a logged
/// no-op. None of these ever reaches the embedding page as an error state.
#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("Feed error: {0}")]
    Feed(String),

    #[error("Feed parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Host page error: {0}")]
    Host(String),
}
