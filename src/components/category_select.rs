//! Category Selector Component

use leptos::prelude::*;

use crate::models::Category;

/// Category `<select>` for the product form
#[component]
pub fn CategorySelect(
    #[prop(into)] categories: Signal<Vec<Category>>,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <select
            class="category-select"
            prop:value=move || value.get()
            on:change=move |ev| set_value.set(event_target_value(&ev))
        >
            <option value="" disabled=true selected=move || value.get().is_empty()>
                "Selecione uma categoria"
            </option>
            {move || categories.get().into_iter().map(|category| {
                let id = category.id.clone();
                let is_selected = move || value.get() == id;
                view! {
                    <option value=category.id selected=is_selected>
                        {category.nome}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
