//! Single-Project View
//!
//! Resolves `/history/:id` and `/saved/:id` against the cached collection
//! first, falling back to a GET by identifier on a cache miss (deep link or
//! refresh).

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params;
use leptos_router::params::Params;

use crate::api::ApiClient;
use crate::components::{Loader, Results, ResultsKind};
use crate::context::AppContext;
use crate::error::ApiError;
use crate::helpers;
use crate::models::Project;

/// Only a missing record gets the not-found note; every other failure goes
/// through the shared error banner.
fn missing_record(error: &ApiError) -> bool {
    matches!(error, ApiError::Status(404))
}

#[derive(Params, PartialEq, Clone, Debug)]
struct ProjectParams {
    id: Option<String>,
}

#[component]
pub fn SingleProject(
    all_projects: ReadSignal<Vec<Project>>,
    saved_page: bool,
) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let api = StoredValue::new(expect_context::<ApiClient>());
    let params = use_params::<ProjectParams>();
    let (fetched, set_fetched) = signal::<Option<Project>>(None);
    let (not_found, set_not_found) = signal(false);

    let project_id = move || params.get().ok().and_then(|p| p.id).unwrap_or_default();

    let resolved = Memo::new(move |_| {
        let id = project_id();
        all_projects
            .get()
            .into_iter()
            .find(|project| project.id == id)
            .or_else(|| fetched.get())
    });

    Effect::new(move |_| {
        let id = project_id();
        if id.is_empty() || resolved.get().is_some() {
            return;
        }
        log::debug!("[PROJECT] Cache miss for {id}, fetching");
        let api = api.get_value();
        spawn_local(async move {
            match api.get_project(&id).await {
                Ok(project) => set_fetched.set(Some(project)),
                Err(error) if missing_record(&error) => set_not_found.set(true),
                Err(error) => ctx.report(error),
            }
        });
    });

    let kind = if saved_page { ResultsKind::Saved } else { ResultsKind::History };

    // Keyed on the id so a refetched copy of the same project does not tear
    // down the mounted view and its edit buffers
    let resolved_key = Memo::new(move |_| resolved.with(|r| helpers::result_key(r.as_ref())));

    view! {
        {move || match resolved_key.get() {
            Some(_) => resolved
                .get_untracked()
                .map(|project| view! {
                    <Results
                        project=project
                        kind=kind
                        on_update=Callback::new(move |updated: Project| set_fetched.set(Some(updated)))
                    />
                })
                .into_any(),
            None if not_found.get() => view! {
                <p class="not-found">"We couldn't find that plan."</p>
            }.into_any(),
            None => view! { <Loader /> }.into_any(),
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_a_missing_status_gets_the_not_found_note() {
        assert!(missing_record(&ApiError::Status(404)));
        assert!(!missing_record(&ApiError::Status(500)));
        assert!(!missing_record(&ApiError::Transport("connection refused".into())));
        assert!(!missing_record(&ApiError::Decode("bad body".into())));
    }
}
