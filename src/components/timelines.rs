//! Steps Timeline

use leptos::prelude::*;

/// Ordered timeline of the plan's steps
#[component]
pub fn Timelines(steps: Vec<String>) -> impl IntoView {
    view! {
        <div class="timelines">
            <h2 class="timelines-header">"Timeline"</h2>
            <ol class="timeline-steps">
                {steps.into_iter().map(|step| view! {
                    <li class="timeline-step">{step}</li>
                }).collect_view()}
            </ol>
        </div>
    }
}
