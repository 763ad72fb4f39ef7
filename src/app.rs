//! Project Planner App
//!
//! Root shell: owns the project cache, the current result and retained form
//! data, and the responsive/menu state; wires the routes.

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dom::helpers::window_event_listener;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::hooks::use_location;
use leptos_router::path;

use crate::api::ApiClient;
use crate::components::{
    Empty, FormPage, Home, Menu, Navbar, ProjectList, Results, ResultsKind, SingleProject,
    Tutorial,
};
use crate::context::AppContext;
use crate::error::ApiError;
use crate::helpers;
use crate::models::{FormData, Project};

/// Width in px below which the hamburger menu replaces the inline nav links
const SMALL_SCREEN_WIDTH: f64 = 1170.0;

#[component]
pub fn App() -> impl IntoView {
    // State
    let (menu_open, set_menu_open) = signal(false);
    let (small_screen, set_small_screen) = signal(false);
    let (all_projects, set_all_projects) = signal(Vec::<Project>::new());
    let (current_result, set_current_result) = signal::<Option<Project>>(None);
    let (form_data, set_form_data) = signal::<Option<FormData>>(None);
    let (refetch_trigger, set_refetch_trigger) = signal(0u32);
    let (app_error, set_app_error) = signal::<Option<ApiError>>(None);

    // Saved subset, refiltered whenever the full list changes
    let saved_projects = Memo::new(move |_| {
        all_projects
            .get()
            .into_iter()
            .filter(|project| project.attributes.saved)
            .collect::<Vec<_>>()
    });

    // Provide context to all children
    provide_context(AppContext::new(
        (refetch_trigger, set_refetch_trigger),
        (app_error, set_app_error),
    ));
    provide_context(ApiClient::new());

    let ctx = expect_context::<AppContext>();
    let api = StoredValue::new(expect_context::<ApiClient>());

    // Fetch the full collection on mount and whenever the trigger flips.
    // Always a full refetch; mutations only signal, they never patch the cache.
    Effect::new(move |_| {
        let trigger = refetch_trigger.get();
        ctx.clear_error();
        let api = api.get_value();
        spawn_local(async move {
            log::debug!("[APP] Fetching all projects, trigger={trigger}");
            match api.list_projects().await {
                Ok(projects) => {
                    log::debug!("[APP] Loaded {} projects", projects.len());
                    set_all_projects.set(projects);
                }
                Err(error) => ctx.report(error),
            }
        });
    });

    // Responsive breakpoint, kept current by the window resize listener
    let update_breakpoint = move || {
        let width = window()
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(0.0);
        set_small_screen.set(width < SMALL_SCREEN_WIDTH);
    };
    update_breakpoint();
    let _resize_handle = window_event_listener(ev::resize, move |_| update_breakpoint());

    view! {
        <Router>
            <AppShell
                menu_open=menu_open
                set_menu_open=set_menu_open
                small_screen=small_screen
                all_projects=all_projects
                saved_projects=saved_projects
                current_result=current_result
                set_current_result=set_current_result
                form_data=form_data
                set_form_data=set_form_data
            />
        </Router>
    }
}

/// Everything that needs the router: navigation chrome, the error banner and
/// the route table
#[component]
fn AppShell(
    menu_open: ReadSignal<bool>,
    set_menu_open: WriteSignal<bool>,
    small_screen: ReadSignal<bool>,
    all_projects: ReadSignal<Vec<Project>>,
    saved_projects: Memo<Vec<Project>>,
    current_result: ReadSignal<Option<Project>>,
    set_current_result: WriteSignal<Option<Project>>,
    form_data: ReadSignal<Option<FormData>>,
    set_form_data: WriteSignal<Option<FormData>>,
) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let pathname = use_location().pathname;

    // Banner resets on every navigation, resolved or not
    Effect::new(move |_| {
        let _ = pathname.get();
        ctx.clear_error();
    });

    // Ombre body background on the landing and form pages while the shell is
    // visible on a small screen
    Effect::new(move |_| {
        let path = pathname.get();
        let ombre = (path == "/" || path == "/form") && !menu_open.get() && small_screen.get();
        if let Some(body) = document().body() {
            if ombre {
                let _ = body.class_list().add_1("ombre");
            } else {
                let _ = body.class_list().remove_1("ombre");
            }
        }
    });

    let open_or_close_menu = move || set_menu_open.update(|open| *open = !*open);

    view! {
        <div class="app">
            <Show
                when=move || !menu_open.get()
                fallback=move || view! {
                    <Menu on_close=Callback::new(move |_| open_or_close_menu()) />
                }
            >
                <header class="app-header">
                    <A href="/" attr:class="app-logo">"Project Planner"</A>
                    <Navbar
                        small_screen=small_screen
                        on_menu=Callback::new(move |_| open_or_close_menu())
                    />
                </header>
                <main class=move || {
                    if pathname.get() == "/form" { "form-height" } else { "" }
                }>
                    {move || ctx.app_error.get().map(|_| view! {
                        <p class="app-error">"An error occured, please try again later!"</p>
                    })}
                    <Routes fallback=|| view! { <Empty /> }>
                        <Route path=path!("/") view=move || view! {
                            <Home small_screen=small_screen />
                        } />
                        <Route path=path!("/tutorial") view=Tutorial />
                        <Route path=path!("/form") view=move || view! {
                            <FormPage
                                set_current_result=set_current_result
                                set_form_data=set_form_data
                            />
                        } />
                        <Route path=path!("/results") view=move || {
                            // Keyed on the id so a cache refresh of the same
                            // project leaves the mounted view (and its edit
                            // buffers) alone
                            let result_key = Memo::new(move |_| {
                                current_result.with(|r| helpers::result_key(r.as_ref()))
                            });
                            view! {
                                {move || match result_key.get() {
                                    Some(_) => current_result
                                        .get_untracked()
                                        .map(|project| view! {
                                            <Results
                                                project=project
                                                kind=ResultsKind::Fresh
                                                form_data=form_data.get_untracked()
                                                on_update=Callback::new(move |updated: Project| {
                                                    set_current_result.set(Some(updated))
                                                })
                                            />
                                        })
                                        .into_any(),
                                    None => view! {
                                        <div class="no-results">"no results here"</div>
                                    }.into_any(),
                                }}
                            }
                        } />
                        <Route path=path!("/history") view=move || view! {
                            <ProjectList projects=all_projects saved_page=false />
                        } />
                        <Route path=path!("/history/:id") view=move || view! {
                            <SingleProject all_projects=all_projects saved_page=false />
                        } />
                        <Route path=path!("/saved") view=move || view! {
                            <ProjectList projects=saved_projects saved_page=true />
                        } />
                        <Route path=path!("/saved/:id") view=move || view! {
                            <SingleProject all_projects=all_projects saved_page=true />
                        } />
                    </Routes>
                </main>
            </Show>
        </div>
    }
}
