//! Landing Page

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Home(small_screen: ReadSignal<bool>) -> impl IntoView {
    view! {
        <section class=move || if small_screen.get() { "home-page small" } else { "home-page" }>
            <h1 class="home-headline">"Plan your next project in seconds"</h1>
            <p class="home-tagline">
                "Tell us what you want to build and we'll generate a full project plan: \
                 a timeline, a feature list, a color palette and a logo to match."
            </p>
            <div class="home-actions">
                <A href="/form" attr:class="home-cta">"Generate a Plan"</A>
                <A href="/tutorial" attr:class="home-secondary">"How it works"</A>
            </div>
        </section>
    }
}
