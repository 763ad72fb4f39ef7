//! Editable List
//!
//! Features/interactions list with add and remove controls while edit mode
//! is on. Entry edits go to the draft via callbacks; the list itself owns
//! only its input buffer.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

#[component]
pub fn EditableList(
    heading: &'static str,
    #[prop(into)] entries: Signal<Vec<String>>,
    is_editing: ReadSignal<bool>,
    #[prop(into)] on_add: Callback<String>,
    #[prop(into)] on_remove: Callback<usize>,
) -> impl IntoView {
    let (input, set_input) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = input.get();
        if text.is_empty() {
            return;
        }
        on_add.run(text);
        set_input.set(String::new());
    };

    view! {
        <div class="editable-list">
            <h2 class="editable-list-header">{heading}</h2>
            <ul class="editable-list-entries">
                {move || {
                    let editing = is_editing.get();
                    entries.get().into_iter().enumerate().map(|(index, entry)| view! {
                        <li class="list-entry">
                            <span>{entry}</span>
                            {editing.then(|| view! {
                                <button
                                    class="remove-entry"
                                    on:click=move |_| on_remove.run(index)
                                >
                                    "×"
                                </button>
                            })}
                        </li>
                    }).collect_view()
                }}
            </ul>
            {move || is_editing.get().then(|| view! {
                <form class="add-entry-form" on:submit=submit>
                    <input
                        type="text"
                        placeholder=format!("Add to {}...", heading.to_lowercase())
                        prop:value=move || input.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let field = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_input.set(field.value());
                        }
                    />
                    <button type="submit">"Add"</button>
                </form>
            })}
        </div>
    }
}
