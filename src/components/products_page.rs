//! Products Page
//!
//! Product grid plus the create/edit dialog.

use leptos::prelude::*;
use leptos_query_cache::{use_query, use_query_client, Mutation};
use reactive_stores::Store;

use crate::api::{self, PRODUCTS_QUERY_KEY};
use crate::context::use_app_context;
use crate::error::ApiError;
use crate::models::{Product, ProductSubmission};
use crate::store::{
    store_close_dialog, store_dialog, store_dialog_untracked, store_open_for_create,
    store_open_for_edit, store_product_saved, ProductsPageState, SubmitTarget,
};
use super::{Dialog, ProductForm, ProductsGrid};

#[component]
pub fn ProductsPage() -> impl IntoView {
    let ctx = use_app_context();
    let client = use_query_client();
    let store = Store::new(ProductsPageState::default());

    // Categories (with their products) for the current tenant
    let categories = use_query(PRODUCTS_QUERY_KEY, move || {
        let config = ctx.config();
        let tenant = ctx.tenant();
        async move {
            api::list_categories(&config, &tenant).await.map_err(|e| {
                web_sys::console::error_1(&format!("[ProductsPage] Error loading categories: {}", e).into());
                e.to_string()
            })
        }
    });
    let items = Signal::derive(move || categories.data.get().unwrap_or_default());
    let loading = Signal::derive(move || categories.loading.get());

    let create_mutation = Mutation::new();
    let update_mutation = Mutation::new();
    let pending = Signal::derive(move || create_mutation.is_pending() || update_mutation.is_pending());

    let handle_add = move |_: web_sys::MouseEvent| store_open_for_create(&store);
    let handle_edit = move |product: Product| store_open_for_edit(&store, product);
    let handle_close = move |_: ()| store_close_dialog(&store);

    // Deletion has no backend counterpart yet
    let handle_delete = move |product: Product| {
        web_sys::console::log_1(&format!("[ProductsPage] Exclusão indisponível: {}", product.id).into());
    };

    let handle_submit = move |submission: ProductSubmission| {
        let Some(target) = store_dialog_untracked(&store).submit_target() else {
            return;
        };
        let config = ctx.config();
        let tenant = ctx.tenant();

        match target {
            SubmitTarget::Create => create_mutation.mutate(
                async move { api::create_product(&config, &tenant, &submission).await },
                move |_| store_product_saved(&store, &client),
                |e: ApiError| {
                    web_sys::console::error_1(&format!("[ProductsPage] Erro ao adicionar produto: {}", e).into());
                },
            ),
            SubmitTarget::Update(id) => update_mutation.mutate(
                async move { api::update_product(&config, &tenant, &id, &submission).await },
                move |_| store_product_saved(&store, &client),
                |e: ApiError| {
                    web_sys::console::error_1(&format!("[ProductsPage] Erro ao atualizar produto: {}", e).into());
                },
            ),
        }
    };

    let dialog_open = Signal::derive(move || store_dialog(&store).is_open());
    let dialog_title = Signal::derive(move || store_dialog(&store).title().to_string());
    let dialog_description = Signal::derive(move || store_dialog(&store).description().to_string());

    view! {
        {move || if categories.failed.get() {
            view! { <div class="error-view">"Error loading products"</div> }.into_any()
        } else {
            view! {
                <div class="products-page">
                    <div class="page-header">
                        <h1 class="page-title">"Produtos"</h1>
                        <button type="button" class="primary-btn" on:click=handle_add>
                            "Adicionar Produto"
                        </button>
                    </div>

                    <ProductsGrid
                        loading=loading
                        items=items
                        on_edit_product=handle_edit
                        on_delete_product=handle_delete
                    />

                    <Dialog
                        open=dialog_open
                        on_close=handle_close
                        title=dialog_title
                        description=dialog_description
                    >
                        // Rebuilt on every open so the form starts from the edited product
                        {move || {
                            let editing = store_dialog(&store).editing().cloned();
                            view! {
                                <ProductForm
                                    categories=items
                                    product=editing
                                    on_submit=handle_submit
                                    pending=pending
                                />
                            }
                        }}
                    </Dialog>
                </div>
            }.into_any()
        }}
    }
}
