//! Catch-All Page

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Empty() -> impl IntoView {
    view! {
        <section class="empty-page">
            <h1>"404"</h1>
            <p>"There's nothing at this address."</p>
            <A href="/" attr:class="home-cta">"Back home"</A>
        </section>
    }
}
