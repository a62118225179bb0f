//! Restaurant Console App
//!
//! Root component: resolves config and tenant, then mounts the products page.

use leptos::prelude::*;
use leptos_query_cache::provide_query_client;

use crate::components::ProductsPage;
use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::tenant;

#[component]
pub fn App() -> impl IntoView {
    provide_query_client();
    let config = ApiConfig::load();

    match tenant::load_tenant() {
        Ok(tenant) => {
            web_sys::console::log_1(
                &format!("[APP] Tenant {} via {}", tenant.cnpj(), config.base_url()).into(),
            );
            provide_context(AppContext::new(config, tenant));
            view! {
                <main class="console-layout">
                    <ProductsPage />
                </main>
            }
            .into_any()
        }
        Err(e) => {
            web_sys::console::error_1(&format!("[APP] Cannot resolve tenant: {}", e).into());
            view! { <div class="error-view">"Error loading products"</div> }.into_any()
        }
    }
}
