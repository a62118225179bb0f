//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Deserializer, Serialize};

use crate::price;

/// JSON scalar the backend may send for ids, cnpj and prices
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Int(i64),
    Float(f64),
    Text(String),
}

/// Accept a string or a number, keeping it as text
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Int(n) => n.to_string(),
        Scalar::Float(n) => n.to_string(),
        Scalar::Text(s) => s,
    })
}

/// Accept a number or a decimal string (`"10.50"` or `"10,50"`)
fn decimal<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Scalar::deserialize(deserializer)? {
        Scalar::Int(n) => Ok(n as f64),
        Scalar::Float(n) => Ok(n),
        Scalar::Text(s) => price::parse(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid decimal: {:?}", s))),
    }
}

/// Product data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub nome: String,
    #[serde(default)]
    pub descricao: String,
    #[serde(deserialize_with = "decimal")]
    pub preco: f64,
    #[serde(default, deserialize_with = "string_or_number")]
    pub categoria_id: String,
    #[serde(default)]
    pub imagem_url: Option<String>,
}

impl Product {
    /// Identity of a rendered card; changes when any shown field changes
    pub fn row_key(&self) -> (String, String, String, u64, Option<String>) {
        (
            self.id.clone(),
            self.nome.clone(),
            self.descricao.clone(),
            self.preco.to_bits(),
            self.imagem_url.clone(),
        )
    }
}

/// Category data structure (matches backend), carrying its products
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub nome: String,
    #[serde(default)]
    pub produtos: Vec<Product>,
}

/// Product form fields as typed by the user
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFormValues {
    pub nome: String,
    pub descricao: String,
    /// Locale string, comma as decimal separator
    pub preco: String,
    pub categoria_id: String,
}

impl ProductFormValues {
    /// Pre-populate the form from an existing product
    pub fn from_product(product: &Product) -> Self {
        Self {
            nome: product.nome.clone(),
            descricao: product.descricao.clone(),
            preco: price::to_input(product.preco),
            categoria_id: product.categoria_id.clone(),
        }
    }
}

/// Validated form values plus the optional image picked in the form
#[derive(Debug, Clone)]
pub struct ProductSubmission {
    pub values: ProductFormValues,
    pub imagem: Option<web_sys::File>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_category_with_products() {
        let json = r#"[{
            "id": "c1",
            "nome": "Bebidas",
            "produtos": [{
                "id": "p1",
                "nome": "Suco",
                "descricao": "Laranja",
                "preco": 8.5,
                "categoriaId": "c1",
                "imagemUrl": "https://cdn.example.com/suco.png"
            }]
        }, {"id": "c2", "nome": "Sobremesas"}]"#;

        let categories: Vec<Category> = serde_json::from_str(json).unwrap();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].produtos[0].categoria_id, "c1");
        assert_eq!(categories[0].produtos[0].imagem_url.as_deref(), Some("https://cdn.example.com/suco.png"));
        assert!(categories[1].produtos.is_empty());
    }

    #[test]
    fn test_form_values_from_product() {
        let product = Product {
            id: "p1".to_string(),
            nome: "Pizza".to_string(),
            descricao: "Margherita".to_string(),
            preco: 10.5,
            categoria_id: "c1".to_string(),
            imagem_url: None,
        };
        let values = ProductFormValues::from_product(&product);
        assert_eq!(values.nome, "Pizza");
        assert_eq!(values.descricao, "Margherita");
        assert_eq!(values.preco, "10,50");
        assert_eq!(values.categoria_id, "c1");
    }

    #[test]
    fn test_decode_lenient_scalars() {
        let json = r#"[{
            "id": 3,
            "nome": "Massas",
            "produtos": [{"id": 11, "nome": "Lasanha", "preco": "10,50", "categoriaId": 3},
                         {"id": "12", "nome": "Nhoque", "preco": 32}]
        }]"#;

        let categories: Vec<Category> = serde_json::from_str(json).unwrap();
        let produtos = &categories[0].produtos;
        assert_eq!(categories[0].id, "3");
        assert_eq!(produtos[0].id, "11");
        assert_eq!(produtos[0].preco, 10.5);
        assert_eq!(produtos[0].categoria_id, "3");
        assert_eq!(produtos[1].preco, 32.0);
        assert_eq!(produtos[1].categoria_id, "");
    }

    #[test]
    fn test_decode_rejects_bad_price() {
        let json = r#"{"id": "p1", "nome": "Suco", "preco": "caro"}"#;
        assert!(serde_json::from_str::<Product>(json).is_err());
    }

    #[test]
    fn test_row_key_changes_with_price() {
        let mut product = Product {
            id: "p1".to_string(),
            nome: "Suco".to_string(),
            descricao: String::new(),
            preco: 8.0,
            categoria_id: "c1".to_string(),
            imagem_url: None,
        };
        let before = product.row_key();
        product.preco = 9.0;
        assert_ne!(before, product.row_key());
    }
}
