use dioxus::prelude::*;

use crate::client::component::Layout;
use crate::client::route::{Home, NotFound, SessionDetail};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},

    #[route("/session/:id")]
    SessionDetail { id: i32 },
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
