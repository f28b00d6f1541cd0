use dioxus::prelude::*;
use ic_types::PortalConfig;

use crate::{
    app::{
        auth::context::use_auth_provider,
        routes::AppRouter,
        services::PortalServices,
    },
    components::{Toast, ToastMessage},
};

// Styles are pulled from the CDN builds instead of a local tailwind pass
const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";
const DAISYUI_CSS: &str = "https://cdn.jsdelivr.net/npm/daisyui@4.12.10/dist/full.min.css";

/// Connection settings baked in at build time.
pub fn portal_config() -> PortalConfig {
    PortalConfig::from_overrides(option_env!("IC_BACKEND_URL"), option_env!("IC_BACKEND_ANON_KEY"))
}

/// Root shell: connects to the backend and wraps the router in the global providers.
#[component]
pub fn app_root() -> Element {
    let services = use_hook(|| {
        PortalServices::connect(&portal_config()).map_err(|e| {
            tracing::error!(error = %e, "backend configuration rejected");
            e.to_string()
        })
    });

    rsx! {
        document::Title { "IFRI Collection" }
        document::Stylesheet { href: "{DAISYUI_CSS}" }
        document::Script { src: "{TAILWIND_CDN}" }
        match services {
            Ok(services) => rsx! { Portal { services } },
            Err(message) => rsx! {
                div { class: "hero min-h-screen bg-base-200",
                    div { class: "hero-content text-center",
                        div {
                            h1 { class: "text-3xl font-bold", "Configuration invalide" }
                            p { class: "py-6 text-base-content/70", "{message}" }
                        }
                    }
                }
            },
        }
    }
}

#[component]
fn Portal(services: PortalServices) -> Element {
    use_context_provider(|| services.clone());
    use_auth_provider(services.auth.clone());
    let toast = use_signal(|| None::<ToastMessage>);
    use_context_provider(|| toast);

    rsx! {
        AppRouter {}
        Toast { message: toast }
    }
}
