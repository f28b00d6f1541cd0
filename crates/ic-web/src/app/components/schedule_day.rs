use dioxus::prelude::*;
use ic_core::DaySchedule;
use ic_types::ScheduleEntry;

use crate::components::icons::{ClockIcon, MapPinIcon};

/// Card for one weekday of the selected year.
#[component]
pub fn ScheduleDay(day: DaySchedule) -> Element {
    rsx! {
        div { class: "card bg-base-100 shadow-sm border-l-4 border-accent",
            div { class: "card-body",
                h2 { class: "card-title text-xl", "{day.day}" }
                if day.is_empty() {
                    p { class: "text-sm text-base-content/60 text-center py-4", "Aucun cours ce jour" }
                } else {
                    div { class: "space-y-3",
                        for entry in day.entries {
                            ScheduleRow { key: "{entry.id}", entry }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ScheduleRow(entry: ScheduleEntry) -> Element {
    let time_range = entry.time_range();

    rsx! {
        div { class: "flex flex-col md:flex-row md:items-center justify-between p-4 rounded-lg bg-base-200/50 hover:bg-base-200 transition-all",
            div { class: "space-y-1 flex-1",
                h3 { class: "font-semibold", "{entry.subject}" }
                p { class: "text-sm text-base-content/60", "{entry.professor}" }
            }
            div { class: "flex gap-4 mt-2 md:mt-0",
                span { class: "badge badge-outline gap-1",
                    ClockIcon {}
                    "{time_range}"
                }
                span { class: "badge badge-secondary gap-1",
                    MapPinIcon {}
                    "{entry.room}"
                }
            }
        }
    }
}
