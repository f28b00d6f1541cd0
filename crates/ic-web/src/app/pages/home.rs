use dioxus::prelude::*;

use crate::{app::auth::hooks::use_auth, components::Layout, routes::Routes};

/// Landing page; also where sign-out lands.
#[component]
pub fn HomePage() -> Element {
    let auth = use_auth();
    let state = auth.read();

    rsx! {
        Layout {
            div { class: "hero min-h-[60vh]",
                div { class: "hero-content text-center",
                    div { class: "max-w-xl",
                        h1 { class: "text-5xl font-bold text-primary", "IFRI Collection" }
                        p { class: "py-6 text-base-content/70",
                            "Examens, documents et emplois du temps de l'IFRI, réunis au même endroit."
                        }
                        if state.loading {
                            span { class: "loading loading-spinner loading-lg" }
                        } else if state.user.is_some() {
                            div { class: "flex justify-center gap-4",
                                Link { to: Routes::LibraryPage {}, class: "btn btn-primary", "Bibliothèque" }
                                Link { to: Routes::SchedulePage {}, class: "btn btn-accent", "Emploi du temps" }
                            }
                        } else {
                            Link { to: Routes::AuthPage {}, class: "btn btn-primary", "Se connecter" }
                        }
                    }
                }
            }
        }
    }
}
