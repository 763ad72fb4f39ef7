//! Tutorial Page
//!
//! Static walkthrough with an embedded demo clip.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::data::TUTORIAL_VIDEO;

const STEPS: &[(&str, &str)] = &[
    (
        "Answer four questions",
        "Pick a project type, choose your technologies, set a time frame and a team size.",
    ),
    (
        "Get a generated plan",
        "We build a summary, a week-by-week timeline, feature and interaction lists, a color palette and a logo.",
    ),
    (
        "Make it yours",
        "Edit the title and lists in place, regenerate the palette or the logo, and favorite the plans you want to keep.",
    ),
];

#[component]
pub fn Tutorial() -> impl IntoView {
    view! {
        <section class="tutorial-page">
            <h1>"How it works"</h1>
            <ol class="tutorial-steps">
                {STEPS.iter().map(|(title, body)| view! {
                    <li class="tutorial-step">
                        <h2>{*title}</h2>
                        <p>{*body}</p>
                    </li>
                }).collect_view()}
            </ol>
            <div class="tutorial-video">
                <iframe src=TUTORIAL_VIDEO allowfullscreen=true title="Project planner walkthrough"></iframe>
            </div>
            <A href="/form" attr:class="home-cta">"Try it now"</A>
        </section>
    }
}
