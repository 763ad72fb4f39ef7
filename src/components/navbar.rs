//! Top Navigation
//!
//! Inline links on wide screens, a hamburger that opens the fullscreen menu
//! below the breakpoint.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Navbar(
    small_screen: ReadSignal<bool>,
    #[prop(into)] on_menu: Callback<()>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !small_screen.get()
            fallback=move || view! {
                <button class="hamburger" on:click=move |_| on_menu.run(())>"☰"</button>
            }
        >
            <nav class="nav-links">
                <A href="/">"Home"</A>
                <A href="/tutorial">"Tutorial"</A>
                <A href="/form">"New Plan"</A>
                <A href="/history">"History"</A>
                <A href="/saved">"Favorites"</A>
            </nav>
        </Show>
    }
}
