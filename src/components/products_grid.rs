//! Products Grid Component
//!
//! Products grouped by category.

use leptos::prelude::*;

use crate::models::{Category, Product};
use super::ProductCard;

#[component]
pub fn ProductsGrid(
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] items: Signal<Vec<Category>>,
    #[prop(into)] on_edit_product: Callback<Product>,
    #[prop(into)] on_delete_product: Callback<Product>,
) -> impl IntoView {
    let is_empty = move || items.with(|categories| categories.iter().all(|c| c.produtos.is_empty()));

    // Products of one category, read from the latest fetch
    let products_of = move |category_id: &str| {
        items.with(|categories| {
            categories
                .iter()
                .find(|c| c.id == category_id)
                .map(|c| c.produtos.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="products-grid-container">
            <Show when=move || loading.get() && is_empty()>
                <div class="loading">"Carregando produtos..."</div>
            </Show>
            <Show when=move || !loading.get() && is_empty()>
                <div class="empty-state">"Nenhum produto cadastrado."</div>
            </Show>

            <For
                each=move || items.get().into_iter().filter(|c| !c.produtos.is_empty())
                key=|category| (category.id.clone(), category.nome.clone())
                children=move |category| {
                    let category_id = category.id.clone();
                    view! {
                        <section class="category-section">
                            <h2 class="category-title">{category.nome}</h2>
                            <div class="product-grid">
                                <For
                                    each=move || products_of(&category_id)
                                    key=Product::row_key
                                    children=move |product| view! {
                                        <ProductCard
                                            product=product
                                            on_edit=on_edit_product
                                            on_delete=on_delete_product
                                        />
                                    }
                                />
                            </div>
                        </section>
                    }
                }
            />
        </div>
    }
}
