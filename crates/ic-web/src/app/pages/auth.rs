use dioxus::prelude::*;
use ic_core::{AuthProvider, PortalError, Route, SessionState};
use ic_types::SignInRequest;

use crate::{
    app::{auth::hooks::use_auth, services::use_services},
    components::{Layout, ToastMessage, use_toast},
};

/// Message shown under the form for a failed sign-in. Rejected credentials
/// get a fixed message; anything else goes to the toast instead.
fn credential_error(err: &PortalError) -> Option<&'static str> {
    match err.status() {
        Some(400 | 401 | 422) => Some("Email ou mot de passe incorrect"),
        _ => None,
    }
}

#[component]
pub fn AuthPage() -> Element {
    let services = use_services();
    let auth = use_auth();
    let navigator = use_navigator();
    let mut toast = use_toast();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);

    // Redirect away from sign-in if already authenticated
    use_effect(move || {
        let state = auth.read();
        if !state.loading && state.user.is_some() {
            navigator.push(Route::Library.path());
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.stop_propagation();
        evt.prevent_default();

        if submitting() {
            return;
        }

        error_message.set(None);

        let email_val = email().trim().to_string();
        let password_val = password();

        if email_val.is_empty() {
            error_message.set(Some("L'email est requis".to_string()));
            return;
        }

        if password_val.is_empty() {
            error_message.set(Some("Le mot de passe est requis".to_string()));
            return;
        }

        submitting.set(true);

        let mut auth = auth;
        let provider = services.auth.clone();

        spawn(async move {
            let request = SignInRequest {
                email: email_val,
                password: password_val,
            };

            match provider.sign_in_with_password(&request).await {
                Ok(user) => {
                    auth.set(SessionState::signed_in(user));
                    navigator.push(Route::Library.path());
                }
                Err(err) => {
                    tracing::warn!(error = %err, "sign-in failed");
                    match credential_error(&err) {
                        Some(message) => error_message.set(Some(message.to_string())),
                        None => toast.set(Some(ToastMessage::error(format!("Connexion impossible : {}", err)))),
                    }
                }
            }

            submitting.set(false);
        });
    };

    rsx! {
        Layout {
            div { class: "flex items-center justify-center min-h-[calc(100vh-16rem)]",
                div { class: "card w-96 bg-base-100 shadow-xl",
                    div { class: "card-body",
                        h2 { class: "card-title justify-center mb-4", "Connexion à IFRI Collection" }

                        form { onsubmit: on_submit,
                            class: "flex flex-col gap-4",
                            div { class: "form-control w-full flex flex-col gap-2",
                                label { class: "label",
                                    span { class: "label-text", "Email" }
                                }
                                input {
                                    r#type: "email",
                                    placeholder: "prenom.nom@ifri.bj",
                                    class: "input input-bordered w-full",
                                    value: "{email}",
                                    oninput: move |evt| email.set(evt.value()),
                                    autocomplete: "email",
                                }
                            }

                            div { class: "form-control w-full flex flex-col gap-2",
                                label { class: "label",
                                    span { class: "label-text", "Mot de passe" }
                                }
                                input {
                                    r#type: "password",
                                    class: "input input-bordered w-full",
                                    value: "{password}",
                                    oninput: move |evt| password.set(evt.value()),
                                    autocomplete: "current-password",
                                }
                            }

                            if let Some(error) = error_message() {
                                div { class: "alert alert-error mt-4",
                                    span { "{error}" }
                                }
                            }

                            div { class: "card-actions justify-end mt-6",
                                button {
                                    r#type: "submit",
                                    class: "btn btn-primary w-full",
                                    disabled: submitting(),
                                    if submitting() {
                                        span { class: "loading loading-spinner" }
                                        span { "Connexion" }
                                    } else {
                                        span { "Se connecter" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_credentials_get_inline_message() {
        let rejected = PortalError::Http {
            status: 400,
            body: "{\"error\":\"invalid_grant\"}".to_string(),
        };
        assert_eq!(credential_error(&rejected), Some("Email ou mot de passe incorrect"));

        let outage = PortalError::Http {
            status: 503,
            body: String::new(),
        };
        assert_eq!(credential_error(&outage), None);
        assert_eq!(credential_error(&PortalError::NotSignedIn), None);
    }
}
