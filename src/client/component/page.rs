use dioxus::prelude::*;

use crate::client::router::Route;

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = class.unwrap_or_default();

    rsx!(
        div {
            class: "min-h-screen pt-24 p-4 {class}",
            {children}
        }
    )
}

#[component]
pub fn LoadingPage() -> Element {
    rsx!(
        Page {
            class: "flex items-center justify-center w-full h-full",
            span {
                class: "loading loading-spinner loading-lg"
            }
        }
    )
}

#[component]
pub fn ErrorPage(status: u64, message: String) -> Element {
    rsx!(
        Page {
            class: "flex items-center justify-center w-full h-full",
            div {
                class: "flex flex-col items-center gap-4",
                h1 {
                    class: "text-4xl font-bold",
                    "{status}"
                }
                p {
                    "{message}"
                }
                Link {
                    to: Route::Home {},
                    class: "btn btn-primary",
                    "Back to sessions"
                }
            }
        }
    )
}
