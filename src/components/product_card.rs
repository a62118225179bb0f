//! Product Card Component

use leptos::prelude::*;

use crate::models::Product;
use crate::price;
use super::DeleteConfirmButton;

#[component]
pub fn ProductCard(
    product: Product,
    #[prop(into)] on_edit: Callback<Product>,
    #[prop(into)] on_delete: Callback<Product>,
) -> impl IntoView {
    let for_edit = product.clone();
    let for_delete = product.clone();
    let price_label = price::format_brl(product.preco);

    view! {
        <div class="product-card">
            {match product.imagem_url.clone() {
                Some(url) => view! { <img class="product-image" src=url alt=product.nome.clone() /> }.into_any(),
                None => view! { <div class="product-image placeholder">"🍽️"</div> }.into_any(),
            }}
            <div class="product-body">
                <div class="product-name" title=product.nome.clone()>{product.nome.clone()}</div>
                <p class="product-description">{product.descricao.clone()}</p>
                <span class="product-price">{price_label}</span>
            </div>
            <div class="product-actions">
                <button
                    type="button"
                    class="edit-btn"
                    on:click=move |_| on_edit.run(for_edit.clone())
                >
                    "Editar"
                </button>
                <DeleteConfirmButton
                    button_class="delete-btn"
                    on_confirm=move |_: ()| on_delete.run(for_delete.clone())
                />
            </div>
        </div>
    }
}
