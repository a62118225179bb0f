//! Product Form Component
//!
//! Create/edit form with category selector and optional image upload.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::{Category, Product, ProductFormValues, ProductSubmission};
use crate::validation::{message_for, Field, FieldError};
use super::CategorySelect;

/// Product form, pre-populated when `product` is set
#[component]
pub fn ProductForm(
    #[prop(into)] categories: Signal<Vec<Category>>,
    product: Option<Product>,
    #[prop(into)] on_submit: Callback<ProductSubmission>,
    #[prop(into)] pending: Signal<bool>,
) -> impl IntoView {
    let initial = product
        .as_ref()
        .map(ProductFormValues::from_product)
        .unwrap_or_default();
    let current_image = product.and_then(|p| p.imagem_url);

    let (nome, set_nome) = signal(initial.nome);
    let (descricao, set_descricao) = signal(initial.descricao);
    let (preco, set_preco) = signal(initial.preco);
    let (categoria_id, set_categoria_id) = signal(initial.categoria_id);
    // web_sys::File is !Send
    let imagem = RwSignal::new_local(None::<web_sys::File>);
    let (errors, set_errors) = signal(Vec::<FieldError>::new());

    let error_for = move |field: Field| {
        move || errors.with(|errs| message_for(errs, field)).map(|msg| view! {
            <span class="field-error">{msg}</span>
        })
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let values = ProductFormValues {
            nome: nome.get_untracked(),
            descricao: descricao.get_untracked(),
            preco: preco.get_untracked(),
            categoria_id: categoria_id.get_untracked(),
        };
        match values.validate() {
            Ok(()) => {
                set_errors.set(Vec::new());
                on_submit.run(ProductSubmission {
                    values,
                    imagem: imagem.get_untracked(),
                });
            }
            Err(errs) => set_errors.set(errs),
        }
    };

    let pick_image = move |ev: web_sys::Event| {
        let file = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        imagem.set(file);
    };

    view! {
        <form class="product-form" on:submit=submit>
            <div class="form-field">
                <label class="form-label">"Nome"</label>
                <input
                    type="text"
                    class="form-input"
                    prop:value=move || nome.get()
                    on:input=move |ev| set_nome.set(event_target_value(&ev))
                />
                {error_for(Field::Nome)}
            </div>

            <div class="form-field">
                <label class="form-label">"Descrição"</label>
                <textarea
                    class="form-input"
                    rows="3"
                    prop:value=move || descricao.get()
                    on:input=move |ev| set_descricao.set(event_target_value(&ev))
                ></textarea>
            </div>

            <div class="form-row">
                <div class="form-field">
                    <label class="form-label">"Preço (R$)"</label>
                    <input
                        type="text"
                        inputmode="decimal"
                        class="form-input"
                        placeholder="0,00"
                        prop:value=move || preco.get()
                        on:input=move |ev| set_preco.set(event_target_value(&ev))
                    />
                    {error_for(Field::Preco)}
                </div>

                <div class="form-field">
                    <label class="form-label">"Categoria"</label>
                    <CategorySelect
                        categories=categories
                        value=categoria_id
                        set_value=set_categoria_id
                    />
                    {error_for(Field::Categoria)}
                </div>
            </div>

            <div class="form-field">
                <label class="form-label">"Imagem"</label>
                {current_image.map(|url| view! {
                    <img class="form-image-preview" src=url alt="Imagem atual" />
                })}
                <input type="file" accept="image/*" class="form-file" on:change=pick_image />
                {move || imagem.with(|file| file.as_ref().map(|f| f.name())).map(|name| view! {
                    <span class="form-file-name">{name}</span>
                })}
            </div>

            <div class="form-actions">
                <button type="submit" class="primary-btn">
                    {move || if pending.get() { "Salvando..." } else { "Salvar" }}
                </button>
            </div>
        </form>
    }
}
