//! Dialog Component
//!
//! Modal overlay with a header; closes on × or a click outside the content.

use leptos::prelude::*;

#[component]
pub fn Dialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] description: Signal<String>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="dialog-overlay" on:click=move |_| on_close.run(())>
                <div
                    class="dialog-content"
                    role="dialog"
                    aria-modal="true"
                    on:click=|ev| ev.stop_propagation()
                >
                    <div class="dialog-header">
                        <h2 class="dialog-title">{move || title.get()}</h2>
                        <p class="dialog-description">{move || description.get()}</p>
                        <button type="button" class="close-btn" on:click=move |_| on_close.run(())>"×"</button>
                    </div>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
