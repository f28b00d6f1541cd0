use dioxus::prelude::*;
use ic_types::Document;

use crate::components::icons::{DownloadIcon, FileTextIcon};

/// One library document: type badge, title, date, optional description and
/// a download link that opens the file in a new tab.
#[component]
pub fn DocumentCard(doc: Document) -> Element {
    let badge_class = if doc.document_type.is_exam() { "badge badge-primary" } else { "badge badge-secondary" };
    let badge = doc.document_type.badge_label();
    let date = doc.display_date();
    let description = doc.description().map(str::to_string);

    rsx! {
        div { class: "card bg-base-100 shadow-md border-l-4 border-primary transition-all duration-300 hover:shadow-lg hover:-translate-y-1",
            div { class: "card-body",
                div { class: "flex items-start justify-between",
                    FileTextIcon { class: "h-8 w-8 text-primary mb-2" }
                    span { class: "{badge_class}", "{badge}" }
                }
                h2 { class: "card-title text-lg", "{doc.title}" }
                p { class: "text-sm text-base-content/60", "{date}" }
                if let Some(description) = description {
                    p { class: "text-sm text-base-content/70 mt-2", "{description}" }
                }
                div { class: "card-actions mt-4",
                    a {
                        class: "btn btn-primary w-full gap-2",
                        href: "{doc.file_url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        DownloadIcon {}
                        "Télécharger"
                    }
                }
            }
        }
    }
}
