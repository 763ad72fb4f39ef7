//! List Views
//!
//! History and favorites pages over the cached project collection.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::models::Project;

#[component]
pub fn ProjectList(
    #[prop(into)] projects: Signal<Vec<Project>>,
    saved_page: bool,
) -> impl IntoView {
    let base = if saved_page { "/saved" } else { "/history" };
    let heading = if saved_page { "Favorite Plans" } else { "Plan History" };
    let empty_line = if saved_page {
        "No favorites yet - save a plan and it will show up here."
    } else {
        "No plans yet - generate one from the form page!"
    };

    view! {
        <section class="project-list">
            <h1>{heading}</h1>
            <Show
                when=move || !projects.get().is_empty()
                fallback=move || view! { <p class="empty-list">{empty_line}</p> }
            >
                <ul class="project-cards">
                    <For
                        each=move || projects.get()
                        key=|project| project.id.clone()
                        children=move |project| {
                            let href = format!("{base}/{}", project.id);
                            view! {
                                <li class="project-card">
                                    <A href=href>
                                        <h2>{project.attributes.name.clone()}</h2>
                                        <p class="card-technologies">{project.attributes.technologies.clone()}</p>
                                        <p class="card-time">{project.attributes.time.clone()}</p>
                                    </A>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </section>
    }
}
