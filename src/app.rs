use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::results::SearchResults;
use crate::components::search_box::SearchBox;
use crate::controller;
use crate::feed::loader::{self, HttpFeedFetcher};
use crate::metrics::LogMetrics;
use crate::models::post::Post;
use crate::search::index::build_index;

/// Host-page element the widget mounts into.
const HOST_ELEMENT_ID: &str = "blog-search";

/// Widget settings, read from the host element's data attributes.
#[derive(Debug, Clone)]
pub struct WidgetOptions {
    pub feed_url: String,
    pub debounce_ms: u32,
    pub submit_button: bool,
    pub clear_button: bool,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self {
            feed_url: "/search.json".to_string(),
            debounce_ms: 300,
            submit_button: true,
            clear_button: true,
        }
    }
}

impl WidgetOptions {
    /// Read options from `data-*` attributes, keeping the default for
    /// anything absent or unparsable.
    fn from_host(host: &web_sys::Element) -> Self {
        let mut options = Self::default();
        if let Some(url) = host.get_attribute("data-feed-url") {
            options.feed_url = url;
        }
        if let Some(ms) = host
            .get_attribute("data-debounce-ms")
            .and_then(|value| value.parse().ok())
        {
            options.debounce_ms = ms;
        }
        if let Some(flag) = host
            .get_attribute("data-submit-button")
            .and_then(|value| value.parse().ok())
        {
            options.submit_button = flag;
        }
        if let Some(flag) = host
            .get_attribute("data-clear-button")
            .and_then(|value| value.parse().ok())
        {
            options.clear_button = flag;
        }
        options
    }
}

/// Mount the search widget into the host page, or no-op with a diagnostic
/// when the page has no host element.
pub fn mount() {
    let Some(host) = document().get_element_by_id(HOST_ELEMENT_ID) else {
        tracing::debug!("No #{HOST_ELEMENT_ID} element on this page; search widget not mounted");
        return;
    };
    let options = WidgetOptions::from_host(&host);
    let Ok(host) = host.dyn_into::<web_sys::HtmlElement>() else {
        return;
    };
    leptos::mount::mount_to(host, move || view! { <SearchWidget options/> }).forget();
}

/// Root component: owns the session index and the search state.
///
/// The feed is fetched once at mount; index build, query and render are all
/// synchronous from there on.
#[component]
pub fn SearchWidget(options: WidgetOptions) -> impl IntoView {
    let (results, set_results) = signal(Vec::<Post>::new());
    let (submitted, set_submitted) = signal(None::<String>);

    let feed_url = options.feed_url.clone();
    let index = LocalResource::new(move || {
        let url = feed_url.clone();
        async move {
            let load = loader::load_feed(&HttpFeedFetcher, &url).await;
            build_index(load.posts)
        }
    });

    let run_search = move |raw: String| {
        let Some(index) = index.get() else {
            tracing::debug!("search requested before the feed finished loading; ignoring");
            return;
        };
        let keyword = raw.trim().to_string();
        if keyword.is_empty() {
            set_results.set(Vec::new());
            set_submitted.set(None);
            return;
        }
        set_results.set(controller::execute_search(
            index.as_slice(),
            &keyword,
            &LogMetrics,
        ));
        set_submitted.set(Some(keyword));
    };

    view! {
        <div class="blog-search">
            <SearchBox
                on_search=run_search
                debounce_ms=options.debounce_ms
                submit_button=options.submit_button
                clear_button=options.clear_button
            />
            <SearchResults results=results submitted=submitted/>
        </div>
    }
}
