//! Error Types
//!
//! Failures surfaced by the REST bindings and the tenant lookup.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// REST call failure
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("browser window unavailable")]
    NoWindow,

    #[error("request failed: {0}")]
    Js(String),

    #[error("{method} {url} returned HTTP {status}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
    },

    #[error("could not decode response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn from_js(value: JsValue) -> Self {
        Self::Js(format!("{:?}", value))
    }
}

impl From<serde_wasm_bindgen::Error> for ApiError {
    fn from(e: serde_wasm_bindgen::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

/// Tenant identity could not be read from local storage
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TenantError {
    #[error("local storage unavailable")]
    StorageUnavailable,

    #[error("no \"user\" entry in local storage")]
    Missing,

    #[error("malformed \"user\" entry: {0}")]
    Malformed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = ApiError::Status {
            method: "PUT",
            url: "http://localhost:8080/produtos/7".to_string(),
            status: 500,
        };
        assert_eq!(err.to_string(), "PUT http://localhost:8080/produtos/7 returned HTTP 500");
    }

    #[test]
    fn test_tenant_error_message() {
        assert_eq!(TenantError::Missing.to_string(), "no \"user\" entry in local storage");
    }
}
