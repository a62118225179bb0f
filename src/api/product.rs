//! Product Mutations
//!
//! Create/update go out as multipart forms so an image can ride along.

use web_sys::FormData;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{Product, ProductFormValues, ProductSubmission};
use crate::price;
use crate::tenant::Tenant;
use super::{encode_segment, send, Method};

const PRODUCTS_PATH: &str = "/produtos";

/// Multipart field carrying the image
pub const FILE_FIELD: &str = "file";

pub fn create_product_url(config: &ApiConfig) -> String {
    config.url(PRODUCTS_PATH)
}

pub fn update_product_url(config: &ApiConfig, id: &str) -> String {
    config.url(&format!("{}/{}", PRODUCTS_PATH, encode_segment(id)))
}

/// Text fields of a create/update request
pub struct ProductPayload<'a> {
    pub values: &'a ProductFormValues,
    pub tenant: &'a Tenant,
}

impl ProductPayload<'_> {
    /// Fields in the order they are appended to the form
    pub fn fields(&self) -> [(&'static str, String); 5] {
        [
            ("nome", self.values.nome.clone()),
            ("descricao", self.values.descricao.clone()),
            ("preco", price::normalize(&self.values.preco)),
            ("categoriaId", self.values.categoria_id.clone()),
            ("restaurantCnpj", self.tenant.cnpj().to_string()),
        ]
    }

    pub fn to_form_data(&self, imagem: Option<&web_sys::File>) -> Result<FormData, ApiError> {
        let form = FormData::new().map_err(ApiError::from_js)?;
        for (name, value) in self.fields() {
            form.append_with_str(name, &value).map_err(ApiError::from_js)?;
        }
        if let Some(file) = imagem {
            form.append_with_blob_and_filename(FILE_FIELD, file, &file.name())
                .map_err(ApiError::from_js)?;
        }
        Ok(form)
    }
}

fn submission_form(tenant: &Tenant, submission: &ProductSubmission) -> Result<FormData, ApiError> {
    ProductPayload { values: &submission.values, tenant }.to_form_data(submission.imagem.as_ref())
}

pub async fn create_product(
    config: &ApiConfig,
    tenant: &Tenant,
    submission: &ProductSubmission,
) -> Result<Option<Product>, ApiError> {
    let form = submission_form(tenant, submission)?;
    let result = send(Method::Post, &create_product_url(config), Some(&form)).await?;
    Ok(serde_wasm_bindgen::from_value(result)?)
}

pub async fn update_product(
    config: &ApiConfig,
    tenant: &Tenant,
    id: &str,
    submission: &ProductSubmission,
) -> Result<Option<Product>, ApiError> {
    let form = submission_form(tenant, submission)?;
    let result = send(Method::Put, &update_product_url(config, id), Some(&form)).await?;
    Ok(serde_wasm_bindgen::from_value(result)?)
}
