//! Product Form Validation

use crate::models::ProductFormValues;
use crate::price;

/// Form field identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Nome,
    Preco,
    Categoria,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

impl ProductFormValues {
    /// Check the fields the backend requires. `descricao` may be empty.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.nome.trim().is_empty() {
            errors.push(FieldError { field: Field::Nome, message: "Informe o nome do produto" });
        }

        match price::parse(&self.preco) {
            Some(value) if value > 0.0 => {}
            _ => errors.push(FieldError { field: Field::Preco, message: "Informe um preço válido" }),
        }

        if self.categoria_id.is_empty() {
            errors.push(FieldError { field: Field::Categoria, message: "Selecione uma categoria" });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Message for a field, if it failed validation
pub fn message_for(errors: &[FieldError], field: Field) -> Option<&'static str> {
    errors.iter().find(|e| e.field == field).map(|e| e.message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ProductFormValues {
        ProductFormValues {
            nome: "Pizza".to_string(),
            descricao: String::new(),
            preco: "10,50".to_string(),
            categoria_id: "c1".to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_blank_fields_rejected() {
        let values = ProductFormValues {
            nome: "   ".to_string(),
            preco: "0".to_string(),
            ..Default::default()
        };
        let errors = values.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(message_for(&errors, Field::Nome), Some("Informe o nome do produto"));
        assert_eq!(message_for(&errors, Field::Preco), Some("Informe um preço válido"));
        assert_eq!(message_for(&errors, Field::Categoria), Some("Selecione uma categoria"));
    }

    #[test]
    fn test_bad_price_only() {
        let values = ProductFormValues { preco: "dez".to_string(), ..valid() };
        let errors = values.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, Field::Preco);
    }
}
