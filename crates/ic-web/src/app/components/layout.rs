use dioxus::prelude::*;

use crate::components::NavBar;

#[component]
pub fn Layout(children: Element) -> Element {
    rsx! {
        div {
            class: "ic-layout min-h-screen flex flex-col bg-base-100",
            header {
                NavBar {}
            }
            main {
                class: "ic-main container mx-auto flex-grow px-4 py-8", {
                    children
                }
            }
        }
    }
}
