/// Fire-and-forget collaborator that counts executed searches.
///
/// The collector is external to the search pipeline: it is told about every
/// executed search but can never influence one, so the contract is infallible
/// and synchronous.
#[cfg_attr(test, mockall::automock)]
pub trait SearchMetrics {
    /// Record one executed search and how many posts it matched.
    fn record_search(&self, keyword: &str, result_count: usize);
}

/// Default collector; emits a diagnostic event and nothing else.
pub struct LogMetrics;

impl SearchMetrics for LogMetrics {
    fn record_search(&self, keyword: &str, result_count: usize) {
        tracing::info!(keyword, result_count, "search executed");
    }
}
