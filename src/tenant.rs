//! Tenant Identity
//!
//! The restaurant (cnpj) the console is scoped to, read from local storage.

use serde::Deserialize;

use crate::error::TenantError;
use crate::models::string_or_number;

/// Local storage key holding the logged-in user record
pub const USER_STORAGE_KEY: &str = "user";

/// Logged-in restaurant
#[derive(Debug, Clone, PartialEq)]
pub struct Tenant {
    cnpj: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredUser {
    #[serde(deserialize_with = "string_or_number")]
    restaurant_cnpj: String,
}

impl Tenant {
    pub fn new(cnpj: impl Into<String>) -> Self {
        Self { cnpj: cnpj.into() }
    }

    pub fn cnpj(&self) -> &str {
        &self.cnpj
    }

    /// Parse the raw `"user"` storage value
    pub fn parse(raw: Option<&str>) -> Result<Self, TenantError> {
        let raw = raw.ok_or(TenantError::Missing)?;
        let user: StoredUser =
            serde_json::from_str(raw).map_err(|e| TenantError::Malformed(e.to_string()))?;
        Ok(Self::new(user.restaurant_cnpj))
    }
}

/// Read the tenant from `window.localStorage`
pub fn load_tenant() -> Result<Tenant, TenantError> {
    let storage = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(TenantError::StorageUnavailable)?;
    let raw = storage
        .get_item(USER_STORAGE_KEY)
        .map_err(|_| TenantError::StorageUnavailable)?;
    Tenant::parse(raw.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_record() {
        let raw = r#"{"name":"Cantina","restaurantCnpj":"12345678000190"}"#;
        let tenant = Tenant::parse(Some(raw)).unwrap();
        assert_eq!(tenant.cnpj(), "12345678000190");
    }

    #[test]
    fn test_parse_numeric_cnpj() {
        let tenant = Tenant::parse(Some(r#"{"restaurantCnpj":12345678000190}"#)).unwrap();
        assert_eq!(tenant.cnpj(), "12345678000190");
    }

    #[test]
    fn test_parse_missing() {
        assert_eq!(Tenant::parse(None), Err(TenantError::Missing));
    }

    #[test]
    fn test_parse_malformed() {
        assert!(matches!(Tenant::parse(Some("")), Err(TenantError::Malformed(_))));
        assert!(matches!(Tenant::parse(Some(r#"{"name":"x"}"#)), Err(TenantError::Malformed(_))));
    }
}
