//! Loading Indicator

use leptos::prelude::*;

#[component]
pub fn Loader() -> impl IntoView {
    view! {
        <div class="loader">
            <div class="loader-spinner"></div>
            <p class="loader-text">"Generating..."</p>
        </div>
    }
}

/// Small inline spinner for per-widget loading states
#[component]
pub fn Spinner() -> impl IntoView {
    view! { <div class="loader-spinner small"></div> }
}
