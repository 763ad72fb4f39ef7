//! Fullscreen Menu
//!
//! Replaces the whole shell on small screens while open; every link closes
//! the menu before navigating.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

const MENU_LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/tutorial", "Tutorial"),
    ("/form", "New Plan"),
    ("/history", "History"),
    ("/saved", "Favorites"),
];

#[component]
pub fn Menu(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let navigate = StoredValue::new(use_navigate());

    view! {
        <div class="menu">
            <button class="menu-close" on:click=move |_| on_close.run(())>"×"</button>
            <nav class="menu-links">
                {MENU_LINKS.iter().map(|(path, label)| {
                    view! {
                        <button
                            class="menu-link"
                            on:click=move |_| {
                                on_close.run(());
                                navigate.with_value(|nav| nav(path, Default::default()));
                            }
                        >
                            {*label}
                        </button>
                    }
                }).collect_view()}
            </nav>
        </div>
    }
}
