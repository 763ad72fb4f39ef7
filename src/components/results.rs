//! Results View
//!
//! Renders one generated plan and keeps its editable copy in sync with the
//! remote record: palette repair on mount, a single commit path for the edit
//! buffers, saved-flag toggling through `SaveSync`, logo generation and
//! deletion.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use wasm_bindgen::JsCast;

use crate::api::ApiClient;
use crate::components::{EditableList, Loader, Spinner, Timelines};
use crate::context::AppContext;
use crate::data::{self, FONTS, LOGO_URLS};
use crate::draft::ProjectDraft;
use crate::helpers::{random_hex_seed, random_index};
use crate::models::{FormData, Project};
use crate::sync::{Completion, Request, SaveSync};

/// Which page hosts the results view; decides the action buttons shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsKind {
    /// `/results`, straight from the form
    Fresh,
    /// `/history/:id`
    History,
    /// `/saved/:id`
    Saved,
}

#[component]
pub fn Results(
    project: Project,
    kind: ResultsKind,
    #[prop(optional_no_strip)] form_data: Option<FormData>,
    #[prop(optional, into)] on_update: Option<Callback<Project>>,
) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let api = StoredValue::new(expect_context::<ApiClient>());
    let navigate = StoredValue::new(use_navigate());
    let form_data = StoredValue::new(form_data);

    let record = RwSignal::new(project.clone());
    let draft = RwSignal::new(ProjectDraft::from_project(&project));
    let dirty = RwSignal::new(false);
    let save_sync = RwSignal::new(SaveSync::new());
    let (is_editing, set_is_editing) = signal(false);
    let (creating, set_creating) = signal(false);
    let (save_loading, set_save_loading) = signal(false);
    let (palette_loading, set_palette_loading) = signal(false);

    let propagate = move |updated: Project| {
        record.set(updated.clone());
        if let Some(callback) = on_update {
            callback.run(updated);
        }
    };

    // Merge the buffers onto the cached record and PUT the result. The only
    // path by which edits reach the wire.
    let commit = move || {
        let api = api.get_value();
        async move {
            let merged = draft.with_untracked(|d| d.apply_to(&record.get_untracked()));
            log::debug!("[RESULTS] Committing draft for project {}", merged.id);
            match api.replace_project(&merged).await {
                Ok(()) => {
                    dirty.set(false);
                    propagate(merged);
                }
                Err(error) => ctx.report(error),
            }
        }
    };

    // Palette repair: an entry without '#' is the API's "palette still
    // pending" placeholder. Fetch a real scheme once on mount and persist the
    // merged record exactly once.
    if draft.with_untracked(|d| d.needs_palette_repair()) {
        let api = api.get_value();
        set_palette_loading.set(true);
        spawn_local(async move {
            match api.fetch_palette(&random_hex_seed()).await {
                Ok(palette) => {
                    draft.update(|d| d.palette = palette);
                    dirty.set(true);
                    commit().await;
                }
                Err(error) => ctx.report(error),
            }
            set_palette_loading.set(false);
        });
    }

    // Leaving edit mode flushes the buffers as one merged record
    let handle_edit_click = move |_| {
        if is_editing.get() {
            spawn_local(commit());
        }
        set_is_editing.update(|editing| *editing = !*editing);
    };

    // Replaces the draft palette only; persisted on the next commit
    let regenerate_colors = move |_| {
        let api = api.get_value();
        set_palette_loading.set(true);
        spawn_local(async move {
            match api.fetch_palette(&random_hex_seed()).await {
                Ok(palette) => {
                    draft.update(|d| d.palette = palette);
                    dirty.set(true);
                }
                Err(error) => ctx.report(error),
            }
            set_palette_loading.set(false);
        });
    };

    // Random pick from the static tables, then exactly one upsert carrying
    // the picked pair. Works outside edit mode too.
    let generate_logo = move |_| {
        let url = LOGO_URLS[random_index(LOGO_URLS.len())].to_string();
        let font = FONTS[random_index(FONTS.len())].to_string();
        draft.update(|d| {
            d.logo_url = url.clone();
            d.logo_font = font.clone();
        });
        let api = api.get_value();
        spawn_local(async move {
            let mut attributes = record.get_untracked().attributes;
            attributes.logo_url = url;
            attributes.logo_font = font;
            let id = record.get_untracked().id;
            match api.put_logo(&id, &attributes).await {
                Ok(()) => record.update(|p| p.attributes = attributes),
                Err(error) => ctx.report(error),
            }
        });
    };

    // Saved-flag PATCH chain: at most one in flight, latest intent wins,
    // responses for superseded requests are dropped.
    let handle_save = move |_| {
        let persisted = record.with_untracked(|p| p.attributes.saved);
        let want = save_sync.with_untracked(|s| s.next_flag(persisted));
        let Some(Request::Send { seq, saved }) = save_sync.try_update(|s| s.request(want)) else {
            return;
        };
        let api = api.get_value();
        set_save_loading.set(true);
        spawn_local(async move {
            let (mut seq, mut saved) = (seq, saved);
            loop {
                let id = record.get_untracked().id;
                match api.patch_saved(&id, saved).await {
                    Ok(updated) => {
                        match save_sync.try_update(|s| s.complete(seq)) {
                            Some(Completion::Resend { seq: next, saved: next_saved }) => {
                                seq = next;
                                saved = next_saved;
                            }
                            Some(Completion::Settled { .. }) => {
                                propagate(updated);
                                ctx.refetch_projects();
                                break;
                            }
                            _ => break,
                        }
                    }
                    Err(error) => {
                        save_sync.update(|s| s.abort(seq));
                        ctx.report(error);
                        break;
                    }
                }
            }
            set_save_loading.set(false);
        });
    };

    // Optimistic: navigate out immediately, let the DELETE settle behind
    let handle_delete = move |_| {
        let api = api.get_value();
        let id = record.get_untracked().id;
        spawn_local(async move {
            match api.delete_project(&id).await {
                Ok(()) => ctx.refetch_projects(),
                Err(error) => ctx.report(error),
            }
        });
        navigate.with_value(|nav| nav("/history", Default::default()));
    };

    // Re-posts the retained form data; the parent swaps in the new result
    let create_another = move |_| {
        let Some(form) = form_data.get_value() else {
            return;
        };
        let api = api.get_value();
        set_creating.set(true);
        spawn_local(async move {
            match api.create_project(&form).await {
                Ok(new_project) => {
                    if let Some(callback) = on_update {
                        callback.run(new_project);
                    }
                }
                Err(error) => ctx.report(error),
            }
            set_creating.set(false);
        });
    };

    let videos = move || {
        let technologies = record.with(|p| p.attributes.technologies.clone());
        technologies
            .split(", ")
            .map(|tech| {
                let src = data::video_for(tech);
                view! {
                    <div class="individual-video">
                        <iframe src=src allowfullscreen=true title="Embedded demo video"></iframe>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <Show when=move || !creating.get() fallback=|| view! { <Loader /> }>
            <section class="results-page">
                <h1 class="project-title">
                    "Your Project: "
                    {move || if is_editing.get() {
                        view! {
                            <input
                                class="proj-title-input"
                                type="text"
                                prop:value=move || draft.with(|d| d.title.clone())
                                on:input=move |ev| {
                                    let target = ev.target().unwrap();
                                    let field = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                    let value = field.value();
                                    draft.update(|d| d.title = value);
                                    dirty.set(true);
                                }
                            />
                        }.into_any()
                    } else {
                        view! {
                            <span class="project-title-name">{draft.with(|d| d.title.clone())}</span>
                        }.into_any()
                    }}
                </h1>

                <div class="summary-collab-container">
                    <div class="collab-buttons">
                        <div class="collab">
                            <h2>"Collaborators: " {move || record.with(|p| p.attributes.collaborators)}</h2>
                        </div>
                        {move || if save_loading.get() {
                            view! { <div class="save-create-div"><Spinner /></div> }.into_any()
                        } else {
                            view! {
                                <button class="save-create-button saving-button" on:click=handle_save>
                                    {move || if record.with(|p| p.attributes.saved) {
                                        "Unfavorite Plan"
                                    } else {
                                        "Favorite Plan"
                                    }}
                                </button>
                            }.into_any()
                        }}
                        <button class="save-create-button" on:click=handle_edit_click>
                            {move || if is_editing.get() { "Save Changes" } else { "Edit Plan" }}
                        </button>
                        {move || (is_editing.get() && dirty.get()).then(|| view! {
                            <span class="dirty-marker">"unsaved changes"</span>
                        })}
                        {matches!(kind, ResultsKind::Fresh).then(|| view! {
                            <button class="save-create-button" on:click=create_another>
                                "Create Another"
                            </button>
                        })}
                        {matches!(kind, ResultsKind::Saved).then(|| view! {
                            <A href="/saved" attr:class="save-create-button save-create-link">
                                "Return to Favorites"
                            </A>
                        })}
                        {matches!(kind, ResultsKind::History).then(|| view! {
                            <button class="save-create-button" on:click=handle_delete>
                                "Delete From History"
                            </button>
                        })}
                        {matches!(kind, ResultsKind::History).then(|| view! {
                            <A href="/history" attr:class="save-create-button save-create-link">
                                "Return to History"
                            </A>
                        })}
                    </div>
                    <div class="summary">
                        <h2 class="summary-header">"Summary"</h2>
                        <p class="summary-text">{move || record.with(|p| p.attributes.description.clone())}</p>
                    </div>
                </div>

                <Timelines steps=record.with_untracked(|p| p.attributes.steps.clone()) />

                <div class="design-features-container">
                    <div class="design">
                        <div class="palette-header">
                            <h2>"Color Palette"</h2>
                            {move || is_editing.get().then(|| view! {
                                <button class="regenerate-button" on:click=regenerate_colors>"↻"</button>
                            })}
                        </div>
                        <div class="palette-container">
                            {move || if palette_loading.get() {
                                view! { <Spinner /> }.into_any()
                            } else {
                                draft.with(|d| d.palette.clone()).into_iter().map(|color| view! {
                                    <div class="color" style:background-color=color.clone()>
                                        <p class="hex-code">{color.clone()}</p>
                                    </div>
                                }).collect_view().into_any()
                            }}
                        </div>
                    </div>
                    <EditableList
                        heading="Features"
                        entries=Signal::derive(move || draft.with(|d| d.features.clone()))
                        is_editing=is_editing
                        on_add=Callback::new(move |entry: String| {
                            draft.update(|d| d.features.push(entry));
                            dirty.set(true);
                        })
                        on_remove=Callback::new(move |index: usize| {
                            draft.update(|d| { d.features.remove(index); });
                            dirty.set(true);
                        })
                    />
                </div>

                <div class="custom-logo-container">
                    <div class="custom-logo-box">
                        <div class="palette-header">
                            <h2>"Logo"</h2>
                            {move || (is_editing.get() && draft.with(|d| !d.logo_url.is_empty())).then(|| view! {
                                <button class="regenerate-button" on:click=generate_logo>"↻"</button>
                            })}
                        </div>
                        {move || {
                            let url = draft.with(|d| d.logo_url.clone());
                            let font = draft.with(|d| d.logo_font.clone());
                            if url.is_empty() {
                                view! {
                                    <div class="logo-text-box">
                                        <p class="logo-text">"Want a custom generated logo?"</p>
                                        <button class="logo-button" on:click=generate_logo>
                                            "Generate logo"
                                        </button>
                                    </div>
                                }.into_any()
                            } else {
                                view! {
                                    <div class="project-logo">
                                        <img class="logo-image" src=url alt="generated logo for project" />
                                        <p class="logo-name" style:font-family=font>
                                            {move || record.with(|p| p.attributes.name.clone())}
                                        </p>
                                    </div>
                                }.into_any()
                            }
                        }}
                    </div>
                    <EditableList
                        heading="Interactions"
                        entries=Signal::derive(move || draft.with(|d| d.interactions.clone()))
                        is_editing=is_editing
                        on_add=Callback::new(move |entry: String| {
                            draft.update(|d| d.interactions.push(entry));
                            dirty.set(true);
                        })
                        on_remove=Callback::new(move |index: usize| {
                            draft.update(|d| { d.interactions.remove(index); });
                            dirty.set(true);
                        })
                    />
                </div>

                <div class="demo-carousel">{videos}</div>
            </section>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProjectAttributes;

    fn sample_project() -> Project {
        Project {
            id: "11".into(),
            attributes: ProjectAttributes {
                name: "Recipe Box".into(),
                description: "Stores recipes".into(),
                technologies: "React, Express".into(),
                collaborators: 2,
                time: "3 weeks".into(),
                saved: false,
                steps: vec!["Plan".into()],
                features: vec!["Search".into()],
                interactions: vec!["Click".into()],
                colors: vec!["#aabbcc".into()],
                logo_url: String::new(),
                logo_font: String::new(),
                user_id: 1,
            },
        }
    }

    // The routes hand over whatever the form flow retained, which is absent
    // on a revisit; the prop must take the option as-is.
    #[test]
    fn props_take_retained_form_data_or_none() {
        let form = FormData {
            project_type: "frontend".into(),
            technologies: "React".into(),
            time: "2 weeks".into(),
            collaborators: 1,
        };
        let with_form = ResultsProps::builder()
            .project(sample_project())
            .kind(ResultsKind::Fresh)
            .form_data(Some(form.clone()))
            .build();
        assert_eq!(with_form.form_data, Some(form));

        let without = ResultsProps::builder()
            .project(sample_project())
            .kind(ResultsKind::History)
            .form_data(None)
            .build();
        assert_eq!(without.form_data, None);
    }
}
