//! Category Queries

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::Category;
use crate::tenant::Tenant;
use super::{encode_segment, send, Method};

/// Cache key of the product list (categories with their products)
pub const PRODUCTS_QUERY_KEY: &str = "products";

/// Tenant-scoped categories endpoint
pub fn categories_url(config: &ApiConfig, tenant: &Tenant) -> String {
    config.url(&format!("/restaurantCnpj/{}/categorias", encode_segment(tenant.cnpj())))
}

pub async fn list_categories(config: &ApiConfig, tenant: &Tenant) -> Result<Vec<Category>, ApiError> {
    let result = send(Method::Get, &categories_url(config, tenant), None).await?;
    Ok(serde_wasm_bindgen::from_value(result)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_url_is_tenant_scoped() {
        let config = ApiConfig::new("https://api.example.com");
        let tenant = Tenant::parse(Some(r#"{"restaurantCnpj":"12345678000190"}"#)).unwrap();
        assert_eq!(
            categories_url(&config, &tenant),
            "https://api.example.com/restaurantCnpj/12345678000190/categorias"
        );
    }
}
