use dioxus::prelude::*;
use ic_core::{FetchOutcome, ScheduleController, ScheduleState, SessionState};
use ic_types::StudyYear;

use crate::{
    app::{auth::hooks::use_auth, services::use_services},
    components::{Layout, RequireAuth, ScheduleDay},
};

#[component]
pub fn SchedulePage() -> Element {
    rsx! {
        RequireAuth {
            Layout { ScheduleContent {} }
        }
    }
}

#[component]
fn ScheduleContent() -> Element {
    let services = use_services();
    let mut auth = use_auth();
    let mut schedule = use_signal(ScheduleState::default);
    let mut selected = use_signal(StudyYear::default);
    let controller = use_hook(|| ScheduleController::new(services.store.clone()));

    // No loading placeholder here: the grid keeps the previous year until the reply lands
    use_effect(move || {
        let year = selected();
        let Some(ticket) = controller.request(&mut schedule.write(), &auth.read(), year) else {
            return;
        };
        let controller = controller.clone();
        spawn(async move {
            let result = controller.load(&ticket).await;
            if controller.complete(&mut schedule.write(), ticket, result) == FetchOutcome::SessionLost {
                auth.set(SessionState::signed_out());
            }
        });
    });

    let active = selected();
    let tabs: Vec<(StudyYear, &'static str)> = StudyYear::all()
        .map(|year| (year, if year == active { "tab tab-active font-semibold" } else { "tab" }))
        .collect();
    let days = schedule.read().days();

    rsx! {
        div { class: "mb-8",
            h1 { class: "text-4xl font-bold mb-2 text-accent", "Emploi du Temps" }
            p { class: "text-base-content/60", "Consultez les horaires de cours pour chaque année" }
        }

        div { role: "tablist", class: "tabs tabs-boxed grid grid-cols-3 w-full max-w-md mb-8",
            for (year, class) in tabs {
                button {
                    key: "{year.id()}",
                    role: "tab",
                    class: "{class}",
                    onclick: move |_| selected.set(year),
                    "{year.label()}"
                }
            }
        }

        div { class: "grid gap-4",
            for day in days {
                ScheduleDay { key: "{day.day}", day }
            }
        }
    }
}
