use dioxus::prelude::*;

use crate::{
    components::Layout,
    pages::{AuthPage, HomePage, LibraryPage, SchedulePage},
};

#[component]
pub fn AppRouter() -> Element {
    rsx! {
        Router::<Routes> {}
    }
}

/// Served routes. `/upload` belongs to the separate upload flow and falls
/// through to `NotFound` here.
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Routes {
    #[route("/")]
    HomePage {},
    #[route("/library")]
    LibraryPage {},
    #[route("/schedule")]
    SchedulePage {},
    #[route("/auth")]
    AuthPage {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = route.join("/");
    rsx! {
        Layout {
            div { class: "text-center py-16",
                h1 { class: "text-3xl font-bold mb-4", "Page introuvable" }
                p { class: "text-base-content/60", "/{path}" }
            }
        }
    }
}
