use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            Page,
        },
        constant::SITE_NAME,
        model::error::ApiError,
        router::Route,
    },
    model::brainstorm_session::BrainstormSessionSummaryDto,
};

#[cfg(feature = "web")]
use crate::client::api::get_sessions;

#[component]
pub fn Home() -> Element {
    let mut sessions = use_signal(|| None::<Result<Vec<BrainstormSessionSummaryDto>, ApiError>>);

    #[cfg(feature = "web")]
    let future = use_resource(|| async move { get_sessions().await });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            if let Err(err) = result {
                tracing::error!("Failed to fetch sessions: {}", err);
            }
            sessions.set(Some(result.clone()));
        }
    });

    rsx! {
        Title { "{SITE_NAME}" }
        match sessions() {
            Some(Ok(list)) => rsx! {
                Page {
                    class: "flex flex-col items-center w-full h-full",
                    div {
                        class: "w-full max-w-4xl flex flex-col gap-6",
                        SessionTable { sessions: list }
                        CreateSessionForm {}
                    }
                }
            },
            Some(Err(err)) => rsx! {
                ErrorPage { status: err.status, message: err.message }
            },
            None => rsx! {
                LoadingPage {}
            },
        }
    }
}

#[component]
fn SessionTable(sessions: Vec<BrainstormSessionSummaryDto>) -> Element {
    rsx!(
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                h2 {
                    class: "card-title",
                    "Sessions"
                }
                if sessions.is_empty() {
                    p {
                        class: "opacity-70",
                        "No sessions yet. Start one below."
                    }
                } else {
                    table {
                        class: "table",
                        thead {
                            tr {
                                th { "Date" }
                                th { "Name" }
                                th { "Ideas" }
                            }
                        }
                        tbody {
                            for session in sessions {
                                tr {
                                    key: "{session.id}",
                                    td {
                                        {session.date_created.format("%Y-%m-%d %H:%M UTC").to_string()}
                                    }
                                    td {
                                        Link {
                                            to: Route::SessionDetail { id: session.id },
                                            class: "link link-primary",
                                            "{session.name}"
                                        }
                                    }
                                    td { "{session.idea_count}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}

/// Plain HTML form; the server answers with a redirect back to this page.
#[component]
fn CreateSessionForm() -> Element {
    rsx!(
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                h2 {
                    class: "card-title",
                    "New Session"
                }
                form {
                    class: "flex gap-2",
                    method: "post",
                    action: "/api/sessions",
                    input {
                        r#type: "text",
                        class: "input input-bordered w-full",
                        name: "sessionName",
                        placeholder: "e.g., Sprint Retro",
                        required: true,
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        "Create"
                    }
                }
            }
        }
    )
}
