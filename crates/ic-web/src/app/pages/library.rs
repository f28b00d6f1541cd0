use dioxus::prelude::*;
use ic_core::{FetchOutcome, LibraryController, LibraryState, LibraryView, SessionState};
use ic_types::Semester;

use crate::{
    app::{auth::hooks::use_auth, services::use_services},
    components::{DocumentCard, Layout, RequireAuth},
};

#[component]
pub fn LibraryPage() -> Element {
    rsx! {
        RequireAuth {
            Layout { LibraryContent {} }
        }
    }
}

#[component]
fn LibraryContent() -> Element {
    let services = use_services();
    let mut auth = use_auth();
    let mut library = use_signal(LibraryState::default);
    let mut selected = use_signal(Semester::default);
    let controller = use_hook(|| LibraryController::new(services.store.clone()));

    // One query per selection; reruns when the tab or the session changes
    let fetcher = controller.clone();
    use_effect(move || {
        let semester = selected();
        let Some(ticket) = fetcher.request(&mut library.write(), &auth.read(), semester) else {
            return;
        };
        let fetcher = fetcher.clone();
        spawn(async move {
            let result = fetcher.load(&ticket).await;
            if fetcher.complete(&mut library.write(), ticket, result) == FetchOutcome::SessionLost {
                auth.set(SessionState::signed_out());
            }
        });
    });

    // Tab badges come from one aggregate query per mount
    use_effect(move || {
        if !auth.read().can_fetch() {
            return;
        }
        let controller = controller.clone();
        spawn(async move {
            let counts = controller.counts().await;
            library.write().set_counts(counts);
        });
    });

    let active = selected();
    let state = library.read();
    let tabs: Vec<(Semester, usize, &'static str)> = state
        .tab_counts()
        .into_iter()
        .map(|(semester, count)| {
            let class = if semester == active { "tab tab-active font-semibold" } else { "tab" };
            (semester, count, class)
        })
        .collect();

    let body = match state.view() {
        LibraryView::Loading => rsx! {
            div { class: "text-center py-8 text-base-content/60", "Chargement des documents..." }
        },
        LibraryView::Empty => rsx! {
            div { class: "text-center py-8 text-base-content/60", "Aucun document pour ce semestre" }
        },
        LibraryView::Documents(documents) => rsx! {
            div { class: "grid gap-4 md:grid-cols-2 lg:grid-cols-3",
                for doc in documents.iter().cloned() {
                    DocumentCard { key: "{doc.id}", doc }
                }
            }
        },
    };

    rsx! {
        div { class: "mb-8",
            h1 { class: "text-4xl font-bold mb-2 text-primary", "Bibliothèque de Documents" }
            p { class: "text-base-content/60",
                "Accédez à tous les examens et documents académiques organisés par semestre"
            }
        }

        div { role: "tablist", class: "tabs tabs-boxed grid grid-cols-6 w-full mb-8",
            for (semester, count, class) in tabs {
                button {
                    key: "{semester.id()}",
                    role: "tab",
                    class: "{class} h-auto py-2",
                    title: "{semester.label()}",
                    onclick: move |_| selected.set(semester),
                    div { class: "flex flex-col items-center gap-1",
                        span { "{semester.short_label()}" }
                        span { class: "badge badge-secondary badge-sm", "{count}" }
                    }
                }
            }
        }

        div { class: "space-y-4", {body} }
    }
}
