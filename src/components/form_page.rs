//! Plan Request Wizard
//!
//! Four steps: project type, technologies, time frame, team size. Each step
//! validates before advancing; the final step POSTs the assembled form and
//! hands the generated plan to the root shell.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use wasm_bindgen::JsCast;

use crate::api::ApiClient;
use crate::components::Loader;
use crate::context::AppContext;
use crate::data::{stacks_for, TIME_UNITS};
use crate::models::{FormData, Project};

const LAST_STEP: u8 = 4;

const QUESTIONS: &[&str] = &[
    "What kind of project do you want to build?",
    "Which technologies should it use?",
    "How much time do you have?",
    "How many people are on the team?",
];

const PROJECT_TYPES: &[&str] = &["frontend", "backend", "fullstack"];

/// Answers collected across the four steps
#[derive(Debug, Clone, PartialEq)]
struct WizardState {
    project_type: String,
    technologies: Vec<String>,
    time_amount: u32,
    time_unit: String,
    collaborators: u32,
}

impl Default for WizardState {
    fn default() -> Self {
        Self {
            project_type: String::new(),
            technologies: Vec::new(),
            time_amount: 0,
            time_unit: "weeks".to_string(),
            collaborators: 1,
        }
    }
}

fn step_error(step: u8, state: &WizardState) -> Option<&'static str> {
    match step {
        1 if state.project_type.is_empty() => Some("Pick a project type to continue."),
        2 if state.technologies.is_empty() => Some("Choose at least one technology."),
        3 if state.time_amount == 0 => Some("Give your project a time frame."),
        4 if state.collaborators == 0 || state.collaborators > 10 => {
            Some("Team size must be between 1 and 10.")
        }
        _ => None,
    }
}

/// Joins the answers into the wire shape: comma-separated technologies,
/// `"<amount> <unit>"` time frame
fn assemble(state: &WizardState) -> FormData {
    FormData {
        project_type: state.project_type.clone(),
        technologies: state.technologies.join(", "),
        time: format!("{} {}", state.time_amount, state.time_unit),
        collaborators: state.collaborators,
    }
}

#[component]
pub fn FormPage(
    set_current_result: WriteSignal<Option<Project>>,
    set_form_data: WriteSignal<Option<FormData>>,
) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let api = StoredValue::new(expect_context::<ApiClient>());
    let navigate = StoredValue::new(use_navigate());

    let state = RwSignal::new(WizardState::default());
    let (step, set_step) = signal(1u8);
    let (step_message, set_step_message) = signal::<Option<&'static str>>(None);
    let (submitting, set_submitting) = signal(false);

    let submit = move || {
        let form = state.with_untracked(assemble);
        let api = api.get_value();
        set_submitting.set(true);
        spawn_local(async move {
            match api.create_project(&form).await {
                Ok(project) => {
                    set_form_data.set(Some(form));
                    set_current_result.set(Some(project));
                    navigate.with_value(|nav| nav("/results", Default::default()));
                }
                Err(error) => ctx.report(error),
            }
            set_submitting.set(false);
        });
    };

    let advance = move |_| {
        let current = step.get();
        if let Some(message) = state.with(|s| step_error(current, s)) {
            set_step_message.set(Some(message));
            return;
        }
        set_step_message.set(None);
        if current < LAST_STEP {
            set_step.set(current + 1);
        } else {
            submit();
        }
    };

    let back = move |_| {
        set_step_message.set(None);
        set_step.update(|s| *s = (*s - 1).max(1));
    };

    let type_step = move || {
        PROJECT_TYPES
            .iter()
            .map(|&option| {
                let selected = move || state.with(|s| s.project_type == option);
                view! {
                    <button
                        class=move || if selected() { "option-button active" } else { "option-button" }
                        on:click=move |_| state.update(|s| {
                            // switching type invalidates the stack picks
                            if s.project_type != option {
                                s.technologies.clear();
                            }
                            s.project_type = option.to_string();
                        })
                    >
                        {option}
                    </button>
                }
            })
            .collect_view()
    };

    let tech_step = move || {
        let options = state.with(|s| stacks_for(&s.project_type));
        options
            .iter()
            .map(|&option| {
                let picked = move || state.with(|s| s.technologies.iter().any(|t| t == option));
                view! {
                    <button
                        class=move || if picked() { "option-button active" } else { "option-button" }
                        on:click=move |_| state.update(|s| {
                            if let Some(at) = s.technologies.iter().position(|t| t == option) {
                                s.technologies.remove(at);
                            } else {
                                s.technologies.push(option.to_string());
                            }
                        })
                    >
                        {option}
                    </button>
                }
            })
            .collect_view()
    };

    let time_step = move || {
        view! {
            <div class="time-inputs">
                <input
                    type="number"
                    min="1"
                    prop:value=move || state.with(|s| s.time_amount.to_string())
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let field = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        let amount = field.value().parse().unwrap_or(0);
                        state.update(|s| s.time_amount = amount);
                    }
                />
                <select
                    prop:value=move || state.with(|s| s.time_unit.clone())
                    on:change=move |ev| {
                        let target = ev.target().unwrap();
                        let field = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                        let unit = field.value();
                        state.update(|s| s.time_unit = unit);
                    }
                >
                    {TIME_UNITS.iter().map(|&unit| view! {
                        <option value=unit>{unit}</option>
                    }).collect_view()}
                </select>
            </div>
        }
    };

    let collab_step = move || {
        view! {
            <input
                type="number"
                min="1"
                max="10"
                prop:value=move || state.with(|s| s.collaborators.to_string())
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let field = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    let count = field.value().parse().unwrap_or(0);
                    state.update(|s| s.collaborators = count);
                }
            />
        }
    };

    view! {
        <Show when=move || !submitting.get() fallback=|| view! { <Loader /> }>
            <section class="form-page">
                <p class="form-progress">{move || format!("Step {} of {LAST_STEP}", step.get())}</p>
                <h1 class="form-question">
                    {move || QUESTIONS[(step.get() as usize - 1).min(QUESTIONS.len() - 1)]}
                </h1>
                <div class="form-options">
                    {move || match step.get() {
                        1 => type_step().into_any(),
                        2 => tech_step().into_any(),
                        3 => time_step().into_any(),
                        _ => collab_step().into_any(),
                    }}
                </div>
                {move || step_message.get().map(|message| view! {
                    <p class="form-step-error">{message}</p>
                })}
                <div class="form-nav">
                    {move || (step.get() > 1).then(|| view! {
                        <button class="form-nav-button" on:click=back>"Back"</button>
                    })}
                    <button class="form-nav-button next" on:click=advance>
                        {move || if step.get() == LAST_STEP { "Generate Plan" } else { "Next" }}
                    </button>
                </div>
            </section>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> WizardState {
        WizardState {
            project_type: "frontend".to_string(),
            technologies: vec!["React".to_string(), "TypeScript".to_string()],
            time_amount: 3,
            time_unit: "weeks".to_string(),
            collaborators: 4,
        }
    }

    #[test]
    fn each_step_rejects_missing_answers() {
        let empty = WizardState {
            collaborators: 0,
            ..WizardState::default()
        };
        for step in 1..=4 {
            assert!(step_error(step, &empty).is_some(), "step {step} should fail");
            assert!(step_error(step, &filled()).is_none(), "step {step} should pass");
        }
    }

    #[test]
    fn team_size_is_capped_at_ten() {
        let mut state = filled();
        state.collaborators = 11;
        assert!(step_error(4, &state).is_some());
        state.collaborators = 10;
        assert!(step_error(4, &state).is_none());
    }

    #[test]
    fn assemble_joins_lists_at_the_wire_edge() {
        let form = assemble(&filled());
        assert_eq!(form.project_type, "frontend");
        assert_eq!(form.technologies, "React, TypeScript");
        assert_eq!(form.time, "3 weeks");
        assert_eq!(form.collaborators, 4);
    }
}
