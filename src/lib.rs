#[cfg(feature = "csr")]
pub mod app;
pub mod comments;
pub mod controller;
pub mod error;
pub mod metrics;
pub mod models {
    pub mod post;
}
pub mod feed {
    pub mod fixtures;
    pub mod loader;
}
pub mod search {
    pub mod excerpt;
    pub mod highlight;
    pub mod index;
    pub mod query;
    pub mod text;
}
pub mod input {
    pub mod debounce;
}
#[cfg(feature = "csr")]
pub mod components {
    pub mod results;
    pub mod search_box;
}

/// Browser entry point: installs the panic hook and mounts the search widget
/// into the host page (a no-op when the page has no host element).
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    app::mount();
}

/// Host-page entry for the comment widget: `sitesearch.mountComments(config)`.
///
/// Accepts a partial configuration object (or nothing at all) and fills the
/// rest from the defaults, including the current page path as the thread id.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(js_name = mountComments)]
pub fn mount_comments(config: wasm_bindgen::JsValue) {
    let config = if config.is_undefined() || config.is_null() {
        comments::CommentConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config).unwrap_or_else(|err| {
            tracing::debug!("Unusable comment configuration ({err}); using defaults");
            comments::CommentConfig::default()
        })
    };
    comments::mount_comments(&config.for_current_page());
}
