//! REST Bindings
//!
//! Frontend bindings to the restaurant backend, organized by resource.

mod category;
mod product;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, Response};

use crate::error::ApiError;

// Re-export all public items
pub use category::*;
pub use product::*;

/// Characters escaped inside a single URL path segment
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Method {
    Get,
    Post,
    Put,
}

impl Method {
    fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
        }
    }
}

pub(crate) fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

/// Issue a request and return the parsed JSON body (`null` when empty).
///
/// Multipart bodies are passed as `FormData`; the browser sets the
/// `Content-Type` header with its boundary.
pub(crate) async fn send(method: Method, url: &str, body: Option<&FormData>) -> Result<JsValue, ApiError> {
    let init = RequestInit::new();
    init.set_method(method.as_str());
    if let Some(form) = body {
        init.set_body(form.as_ref());
    }

    let request = Request::new_with_str_and_init(url, &init).map_err(ApiError::from_js)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(ApiError::from_js)?;

    let window = web_sys::window().ok_or(ApiError::NoWindow)?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(ApiError::from_js)?
        .dyn_into()
        .map_err(ApiError::from_js)?;

    if !response.ok() {
        return Err(ApiError::Status {
            method: method.as_str(),
            url: url.to_string(),
            status: response.status(),
        });
    }

    let text = JsFuture::from(response.text().map_err(ApiError::from_js)?)
        .await
        .map_err(ApiError::from_js)?
        .as_string()
        .unwrap_or_default();
    if text.trim().is_empty() {
        return Ok(JsValue::NULL);
    }
    js_sys::JSON::parse(&text).map_err(|e| ApiError::Decode(format!("{:?}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_segment() {
        assert_eq!(encode_segment("12345678000190"), "12345678000190");
        assert_eq!(encode_segment("12.345.678/0001-90"), "12.345.678%2F0001-90");
        assert_eq!(encode_segment("a b"), "a%20b");
    }
}
