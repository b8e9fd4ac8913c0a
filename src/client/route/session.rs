use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            Markdown, Page,
        },
        constant::SITE_NAME,
        model::error::ApiError,
        router::Route,
    },
    model::{brainstorm_session::BrainstormSessionSummaryDto, idea::IdeaDto},
};

#[cfg(feature = "web")]
use crate::client::api::{create_idea, get_ideas_for_session, get_session};

#[component]
pub fn SessionDetail(id: i32) -> Element {
    let mut session = use_signal(|| None::<Result<BrainstormSessionSummaryDto, ApiError>>);
    let mut ideas = use_signal(|| None::<Result<Vec<IdeaDto>, ApiError>>);
    let refetch_trigger = use_signal(|| 0u32);

    // Both resources re-run whenever an idea is added
    #[cfg(feature = "web")]
    let session_future = use_resource(move || async move {
        let _ = refetch_trigger();
        get_session(id).await
    });

    #[cfg(feature = "web")]
    let ideas_future = use_resource(move || async move {
        let _ = refetch_trigger();
        get_ideas_for_session(id).await
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = session_future.read_unchecked().as_ref() {
            if let Err(err) = result {
                tracing::error!("Failed to fetch session {}: {}", id, err);
            }
            session.set(Some(result.clone()));
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = ideas_future.read_unchecked().as_ref() {
            if let Err(err) = result {
                tracing::error!("Failed to fetch ideas for session {}: {}", id, err);
            }
            ideas.set(Some(result.clone()));
        }
    });

    rsx! {
        match (session(), ideas()) {
            (Some(Ok(summary)), Some(Ok(idea_list))) => rsx! {
                Title { "{summary.name} | {SITE_NAME}" }
                Page {
                    class: "flex flex-col items-center w-full h-full",
                    div {
                        class: "w-full max-w-4xl flex flex-col gap-6",
                        Link {
                            to: Route::Home {},
                            class: "btn btn-ghost self-start",
                            "← Back to Sessions"
                        }
                        SessionSummary { summary }
                        IdeaList { ideas: idea_list }
                        AddIdeaForm { session_id: id, refetch_trigger }
                    }
                }
            },
            (Some(Err(err)), _) | (_, Some(Err(err))) => rsx! {
                Title { "Error | {SITE_NAME}" }
                ErrorPage { status: err.status, message: err.message }
            },
            _ => rsx! {
                LoadingPage {}
            },
        }
    }
}

#[component]
fn SessionSummary(summary: BrainstormSessionSummaryDto) -> Element {
    let started = summary.date_created.format("%Y-%m-%d %H:%M UTC").to_string();

    rsx!(
        div {
            class: "flex flex-col gap-1",
            h1 {
                class: "text-3xl font-bold",
                "{summary.name}"
            }
            p {
                class: "opacity-70",
                "Started {started} · {summary.idea_count} idea(s)"
            }
        }
    )
}

#[component]
fn IdeaList(ideas: Vec<IdeaDto>) -> Element {
    rsx!(
        div {
            class: "flex flex-col gap-4",
            if ideas.is_empty() {
                p {
                    class: "opacity-70",
                    "No ideas yet. Add the first one below."
                }
            }
            for idea in ideas {
                div {
                    key: "{idea.id}",
                    class: "card bg-base-200",
                    div {
                        class: "card-body",
                        h3 {
                            class: "card-title",
                            "{idea.name}"
                        }
                        Markdown { content: idea.description.clone() }
                        p {
                            class: "text-sm opacity-60",
                            {idea.date_created.format("%Y-%m-%d %H:%M UTC").to_string()}
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn AddIdeaForm(session_id: i32, mut refetch_trigger: Signal<u32>) -> Element {
    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut submit_data = use_signal(|| (String::new(), String::new()));
    let mut should_submit = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    // Handle form submission with use_resource
    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        if should_submit() {
            let (name, description) = submit_data();
            Some(create_idea(session_id, name, description).await)
        } else {
            None
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = future.read_unchecked().as_ref() {
            match result {
                Ok(_) => {
                    name.set(String::new());
                    description.set(String::new());
                    error.set(None);
                    refetch_trigger.set(refetch_trigger() + 1);
                    should_submit.set(false);
                }
                Err(err) => {
                    tracing::error!("Failed to add idea: {}", err);
                    error.set(Some(err.message.clone()));
                    should_submit.set(false);
                }
            }
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        if name().trim().is_empty() {
            error.set(Some("Idea name is required".to_string()));
            return;
        }

        error.set(None);
        submit_data.set((name(), description()));
        should_submit.set(true);
    };

    let is_submitting = should_submit();

    rsx!(
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                h2 {
                    class: "card-title",
                    "Add an Idea"
                }
                form {
                    class: "flex flex-col gap-4",
                    onsubmit: on_submit,
                    input {
                        r#type: "text",
                        class: "input input-bordered w-full",
                        placeholder: "e.g., Use dark mode",
                        value: "{name}",
                        oninput: move |evt| name.set(evt.value()),
                        disabled: is_submitting,
                        required: true,
                    }
                    textarea {
                        class: "textarea textarea-bordered w-full",
                        placeholder: "Description (Markdown supported)",
                        value: "{description}",
                        oninput: move |evt| description.set(evt.value()),
                        disabled: is_submitting,
                    }
                    if let Some(message) = error() {
                        div {
                            class: "alert alert-error",
                            "{message}"
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary self-end",
                        disabled: is_submitting,
                        if is_submitting {
                            span { class: "loading loading-spinner loading-sm" }
                        }
                        "Add Idea"
                    }
                }
            }
        }
    )
}
