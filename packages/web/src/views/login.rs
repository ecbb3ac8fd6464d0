//! Login page view.

use dioxus::prelude::*;
use session::landing_route;
use ui::{route_path, sign_in, use_api, use_auth, use_notifier, use_session};

/// Username/password sign-in. A stored session skips the form entirely and
/// lands on the role's home screen.
#[component]
pub fn Login() -> Element {
    let client = use_api();
    let auth = use_auth();
    let session = use_session();
    let nav = use_navigator();
    let mut notifier = use_notifier();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    use_effect(move || {
        if let Some(user) = auth.read().user.as_ref() {
            nav.replace(route_path(landing_route(user.role)));
        }
    });

    let submit_client = client.clone();
    let submit_session = session.clone();
    let on_submit = move |_| {
        if submitting() {
            return;
        }
        let username_value = username().trim().to_string();
        let password_value = password();
        if username_value.is_empty() || password_value.is_empty() {
            notifier.warning("Enter a username and a password.");
            return;
        }

        submitting.set(true);
        let client = submit_client.clone();
        let session = submit_session.clone();
        spawn(async move {
            match client.login(&username_value, &password_value).await {
                Ok(response) => {
                    let token = response.token.clone();
                    let user = response.into_user();
                    let landing = landing_route(user.role);
                    sign_in(auth, &session, user, token.as_deref());
                    nav.replace(route_path(landing));
                }
                Err(err) => notifier.destructive(err.user_message()),
            }
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "login-page",
            div { class: "login-card",
                h1 { "Expo Admin" }
                p { class: "login-subtitle", "Sign in to manage exhibitions" }

                div { class: "form-field",
                    label { "Username" }
                    input {
                        r#type: "text",
                        placeholder: "username",
                        value: username(),
                        oninput: move |evt| username.set(evt.value()),
                    }
                }
                div { class: "form-field",
                    label { "Password" }
                    input {
                        r#type: "password",
                        placeholder: "password",
                        value: password(),
                        oninput: move |evt| password.set(evt.value()),
                    }
                }

                button {
                    class: "btn btn-primary btn-block",
                    disabled: submitting(),
                    onclick: on_submit,
                    if submitting() { "Signing in..." } else { "Sign in" }
                }
            }
        }
    }
}
