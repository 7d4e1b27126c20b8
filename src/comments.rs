use serde::{Deserialize, Serialize};

/// Static configuration for the Gitalk comment widget.
///
/// The comment system is an external collaborator: this module only supplies
/// correct field values and hands them over at mount time. Field names follow
/// the widget's camelCase convention on the wire; partial configurations fill
/// in from the defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommentConfig {
    /// GitHub OAuth application credentials. The widget spells this one
    /// `clientID`, not camelCase.
    #[serde(rename = "clientID")]
    pub client_id: String,
    pub client_secret: String,
    /// Repository whose issues store the comment threads.
    pub repo: String,
    pub owner: String,
    pub admin: Vec<String>,
    /// Unique identifier of the commented page, conventionally its path.
    pub id: String,
    pub distraction_free_mode: bool,
    pub language: String,
    pub per_page: u32,
    pub pager_direction: String,
    pub create_issue_manually: bool,
    pub theme: String,
    pub enable_hot_key: bool,
    /// CORS proxy for the OAuth token exchange.
    pub proxy: String,
}

impl Default for CommentConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            repo: "blog-comments".to_string(),
            owner: String::new(),
            admin: Vec::new(),
            id: String::new(),
            distraction_free_mode: false,
            language: "en".to_string(),
            per_page: 10,
            pager_direction: "last".to_string(),
            create_issue_manually: false,
            theme: "github-light".to_string(),
            enable_hot_key: true,
            proxy: "https://cors-anywhere.azm.workers.dev/https://github.com/login/oauth/access_token"
                .to_string(),
        }
    }
}

impl CommentConfig {
    /// Fill in the page identifier from the current location, following the
    /// one-thread-per-path convention. An explicitly configured id wins.
    #[cfg(feature = "csr")]
    pub fn for_current_page(mut self) -> Self {
        if self.id.is_empty() {
            if let Ok(path) = leptos::prelude::window().location().pathname() {
                self.id = path;
            }
        }
        self
    }
}

/// Container element the comment widget renders into.
#[cfg(feature = "csr")]
const COMMENTS_CONTAINER_ID: &str = "gitalk-container";

/// Hand the configuration to the page-global `Gitalk` constructor and render
/// into the comments container.
///
/// A page without the library or the container simply gets no comments; the
/// search widget is unaffected either way.
#[cfg(feature = "csr")]
pub fn mount_comments(config: &CommentConfig) {
    if let Err(err) = try_mount(config) {
        tracing::debug!("Comment widget not mounted: {err}");
    }
}

#[cfg(feature = "csr")]
fn try_mount(config: &CommentConfig) -> Result<(), crate::error::WidgetError> {
    use crate::error::WidgetError;
    use wasm_bindgen::{JsCast, JsValue};

    let window = leptos::prelude::window();
    let has_container = window
        .document()
        .and_then(|document| document.get_element_by_id(COMMENTS_CONTAINER_ID))
        .is_some();
    if !has_container {
        return Err(WidgetError::Host(format!(
            "missing #{COMMENTS_CONTAINER_ID} element"
        )));
    }

    let constructor = js_sys::Reflect::get(&window, &JsValue::from_str("Gitalk"))
        .map_err(|_| WidgetError::Host("Gitalk global unavailable".to_string()))?;
    if constructor.is_undefined() {
        return Err(WidgetError::Host(
            "Gitalk library not present on this page".to_string(),
        ));
    }
    let constructor: js_sys::Function = constructor
        .dyn_into()
        .map_err(|_| WidgetError::Host("Gitalk global is not a constructor".to_string()))?;

    let js_config = serde_wasm_bindgen::to_value(config)
        .map_err(|err| WidgetError::Host(err.to_string()))?;
    let instance = js_sys::Reflect::construct(&constructor, &js_sys::Array::of1(&js_config))
        .map_err(|_| WidgetError::Host("Gitalk constructor failed".to_string()))?;

    let render = js_sys::Reflect::get(&instance, &JsValue::from_str("render"))
        .map_err(|_| WidgetError::Host("Gitalk.render unavailable".to_string()))?;
    let render: js_sys::Function = render
        .dyn_into()
        .map_err(|_| WidgetError::Host("Gitalk.render is not callable".to_string()))?;
    render
        .call1(&instance, &JsValue::from_str(COMMENTS_CONTAINER_ID))
        .map_err(|_| WidgetError::Host("Gitalk.render failed".to_string()))?;

    Ok(())
}
