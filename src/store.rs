//! Products Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use leptos_query_cache::QueryClient;
use reactive_stores::Store;

use crate::api::PRODUCTS_QUERY_KEY;
use crate::models::Product;

/// Product dialog state
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DialogState {
    #[default]
    Closed,
    /// Open with an empty form
    Creating,
    /// Open, pre-populated with the product being edited
    Editing(Product),
}

/// What a submit from the dialog should do
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitTarget {
    Create,
    Update(String),
}

impl DialogState {
    pub fn is_open(&self) -> bool {
        !matches!(self, DialogState::Closed)
    }

    /// The editing reference, set only while open for edit
    pub fn editing(&self) -> Option<&Product> {
        match self {
            DialogState::Editing(product) => Some(product),
            _ => None,
        }
    }

    pub fn open_for_create(&mut self) {
        *self = DialogState::Creating;
    }

    pub fn open_for_edit(&mut self, product: Product) {
        *self = DialogState::Editing(product);
    }

    /// Close the dialog, dropping any editing reference
    pub fn close(&mut self) {
        *self = DialogState::Closed;
    }

    /// Update when editing, create otherwise; nothing while closed
    pub fn submit_target(&self) -> Option<SubmitTarget> {
        match self {
            DialogState::Closed => None,
            DialogState::Creating => Some(SubmitTarget::Create),
            DialogState::Editing(product) => Some(SubmitTarget::Update(product.id.clone())),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DialogState::Editing(_) => "Editar Produto",
            _ => "Adicionar Novo Produto",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DialogState::Editing(_) => "Edite os detalhes do produto selecionado.",
            _ => "Preencha os detalhes para adicionar um novo produto.",
        }
    }
}

/// Products page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ProductsPageState {
    pub dialog: DialogState,
}

/// Type alias for the store
pub type PageStore = Store<ProductsPageState>;

// ========================
// Store Helper Functions
// ========================

/// Tracked read of the dialog state
pub fn store_dialog(store: &PageStore) -> DialogState {
    store.dialog().get()
}

pub fn store_dialog_untracked(store: &PageStore) -> DialogState {
    store.dialog().get_untracked()
}

pub fn store_open_for_create(store: &PageStore) {
    store.dialog().write().open_for_create();
}

pub fn store_open_for_edit(store: &PageStore, product: Product) {
    store.dialog().write().open_for_edit(product);
}

pub fn store_close_dialog(store: &PageStore) {
    store.dialog().write().close();
}

/// After a successful create/update: refetch the list and close the dialog
pub fn store_product_saved(store: &PageStore, client: &QueryClient) {
    client.invalidate(PRODUCTS_QUERY_KEY);
    store_close_dialog(store);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            nome: "Pizza".to_string(),
            descricao: String::new(),
            preco: 30.0,
            categoria_id: "c1".to_string(),
            imagem_url: None,
        }
    }

    #[test]
    fn test_starts_closed() {
        let state = DialogState::default();
        assert!(!state.is_open());
        assert_eq!(state.submit_target(), None);
    }

    #[test]
    fn test_add_opens_empty() {
        let mut state = DialogState::Editing(product("p1"));
        state.open_for_create();
        assert!(state.is_open());
        assert_eq!(state.editing(), None);
        assert_eq!(state.submit_target(), Some(SubmitTarget::Create));
        assert_eq!(state.title(), "Adicionar Novo Produto");
    }

    #[test]
    fn test_edit_opens_with_product() {
        let mut state = DialogState::Closed;
        state.open_for_edit(product("p7"));
        assert!(state.is_open());
        assert_eq!(state.editing().map(|p| p.id.as_str()), Some("p7"));
        assert_eq!(state.submit_target(), Some(SubmitTarget::Update("p7".to_string())));
        assert_eq!(state.title(), "Editar Produto");
        assert_eq!(state.description(), "Edite os detalhes do produto selecionado.");
    }

    #[test]
    fn test_close_clears_editing_reference() {
        let mut state = DialogState::Closed;
        state.open_for_edit(product("p7"));
        state.close();
        assert!(!state.is_open());
        assert_eq!(state.editing(), None);
    }

    #[test]
    fn test_create_saved_closes_and_invalidates() {
        let owner = Owner::new();
        owner.set();

        let store = Store::new(ProductsPageState::default());
        let client = QueryClient::new();
        store_open_for_create(&store);

        store_product_saved(&store, &client);

        assert_eq!(store_dialog_untracked(&store), DialogState::Closed);
        assert_eq!(client.version_untracked(PRODUCTS_QUERY_KEY), 1);
    }

    #[test]
    fn test_update_saved_clears_editing_and_invalidates() {
        let owner = Owner::new();
        owner.set();

        let store = Store::new(ProductsPageState::default());
        let client = QueryClient::new();
        store_open_for_edit(&store, product("p7"));
        assert_eq!(
            store_dialog_untracked(&store).submit_target(),
            Some(SubmitTarget::Update("p7".to_string()))
        );

        store_product_saved(&store, &client);

        let state = store_dialog_untracked(&store);
        assert!(!state.is_open());
        assert_eq!(state.editing(), None);
        assert_eq!(client.version_untracked("products"), 1);
    }
}
