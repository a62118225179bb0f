//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::ApiConfig;
use crate::tenant::Tenant;

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Backend location
    config: StoredValue<ApiConfig>,
    /// Restaurant the console is scoped to
    tenant: StoredValue<Tenant>,
}

impl AppContext {
    pub fn new(config: ApiConfig, tenant: Tenant) -> Self {
        Self {
            config: StoredValue::new(config),
            tenant: StoredValue::new(tenant),
        }
    }

    pub fn config(&self) -> ApiConfig {
        self.config.get_value()
    }

    pub fn tenant(&self) -> Tenant {
        self.tenant.get_value()
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
