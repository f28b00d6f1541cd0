//! Stroke icons (24x24 viewbox) used by the navigation bar and cards.

use dioxus::prelude::*;

#[component]
fn StrokeIcon(class: String, paths: Vec<&'static str>) -> Element {
    rsx! {
        svg {
            class: "{class}",
            fill: "none",
            view_box: "0 0 24 24",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            for d in paths {
                path { d: "{d}" }
            }
        }
    }
}

#[component]
pub fn FileTextIcon(#[props(default = "h-4 w-4".to_string())] class: String) -> Element {
    rsx! {
        StrokeIcon {
            class,
            paths: vec![
                "M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z",
                "M14 2v6h6",
                "M16 13H8",
                "M16 17H8",
                "M10 9H8",
            ],
        }
    }
}

#[component]
pub fn UploadIcon(#[props(default = "h-4 w-4".to_string())] class: String) -> Element {
    rsx! {
        StrokeIcon {
            class,
            paths: vec!["M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4", "M17 8l-5-5-5 5", "M12 3v12"],
        }
    }
}

#[component]
pub fn CalendarIcon(#[props(default = "h-4 w-4".to_string())] class: String) -> Element {
    rsx! {
        StrokeIcon {
            class,
            paths: vec![
                "M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "M16 2v4",
                "M8 2v4",
                "M3 10h18",
            ],
        }
    }
}

#[component]
pub fn LogOutIcon(#[props(default = "h-4 w-4".to_string())] class: String) -> Element {
    rsx! {
        StrokeIcon {
            class,
            paths: vec!["M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4", "M16 17l5-5-5-5", "M21 12H9"],
        }
    }
}

#[component]
pub fn DownloadIcon(#[props(default = "h-4 w-4".to_string())] class: String) -> Element {
    rsx! {
        StrokeIcon {
            class,
            paths: vec!["M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4", "M7 10l5 5 5-5", "M12 15V3"],
        }
    }
}

#[component]
pub fn ClockIcon(#[props(default = "h-3 w-3".to_string())] class: String) -> Element {
    rsx! {
        StrokeIcon {
            class,
            paths: vec!["M12 2a10 10 0 1 0 0 20 10 10 0 1 0 0-20z", "M12 6v6l4 2"],
        }
    }
}

#[component]
pub fn MapPinIcon(#[props(default = "h-3 w-3".to_string())] class: String) -> Element {
    rsx! {
        StrokeIcon {
            class,
            paths: vec![
                "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0z",
                "M12 7a3 3 0 1 0 0 6 3 3 0 1 0 0-6z",
            ],
        }
    }
}
