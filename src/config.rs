//! API Configuration
//!
//! Base URL of the REST backend. Compile-time default from `API_BASE_URL`,
//! overridable at runtime with `<meta name="api-base-url" content="...">`.

use wasm_bindgen::JsCast;

const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const BASE_URL_META: &str = "meta[name=\"api-base-url\"]";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Build config from the host page, falling back to the compile-time default
    pub fn load() -> Self {
        match meta_base_url() {
            Some(url) => Self::new(&url),
            None => Self::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join an absolute path (`/produtos`) onto the base URL
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(option_env!("API_BASE_URL").unwrap_or(DEFAULT_BASE_URL))
    }
}

fn meta_base_url() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.query_selector(BASE_URL_META).ok()??;
    let meta = element.dyn_into::<web_sys::HtmlMetaElement>().ok()?;
    let content = meta.content();
    if content.trim().is_empty() {
        None
    } else {
        Some(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ApiConfig::new("https://api.example.com/v1/");
        assert_eq!(config.base_url(), "https://api.example.com/v1");
    }

    #[test]
    fn test_url_join() {
        let config = ApiConfig::new("https://api.example.com");
        assert_eq!(config.url("/produtos"), "https://api.example.com/produtos");
        assert_eq!(config.url("produtos/3"), "https://api.example.com/produtos/3");
    }
}
