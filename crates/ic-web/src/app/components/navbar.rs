use dioxus::prelude::*;
use ic_core::{NavTarget, active_target};

use crate::{
    app::auth::hooks::use_sign_out,
    components::icons::{CalendarIcon, FileTextIcon, LogOutIcon, UploadIcon},
    routes::Routes,
};

/// Button styling for a navigation link; each target has its own accent.
fn link_class(target: NavTarget, active: bool) -> &'static str {
    match (target, active) {
        (_, false) => "btn btn-ghost gap-2",
        (NavTarget::Library, true) => "btn btn-primary gap-2",
        (NavTarget::Upload, true) => "btn btn-secondary gap-2",
        (NavTarget::Schedule, true) => "btn btn-accent gap-2",
    }
}

#[component]
pub fn NavBar() -> Element {
    let route = use_route::<Routes>();
    let active = active_target(&route.to_string());
    let on_sign_out = use_sign_out();

    let links: Vec<(NavTarget, &'static str)> =
        NavTarget::ALL.into_iter().map(|target| (target, link_class(target, active == Some(target)))).collect();

    rsx! {
        nav { class: "navbar sticky top-0 z-50 bg-base-100/95 backdrop-blur border-b border-base-300",
            div { class: "flex-1",
                Link { to: Routes::HomePage {}, class: "btn btn-ghost text-xl font-bold text-primary", "IFRI Collection" }
            }
            div { class: "flex-none flex items-center gap-2",
                for (target, class) in links {
                    Link { key: "{target.label()}", to: target.route().path(), class: "{class}",
                        match target {
                            NavTarget::Library => rsx! { FileTextIcon {} },
                            NavTarget::Upload => rsx! { UploadIcon {} },
                            NavTarget::Schedule => rsx! { CalendarIcon {} },
                        }
                        "{target.label()}"
                    }
                }
                // Signing out without a session is refused and changes nothing
                button {
                    class: "btn btn-ghost btn-square",
                    title: "Se déconnecter",
                    onclick: move |_| on_sign_out.call(()),
                    LogOutIcon {}
                }
            }
        }
    }
}
