//! Console accounts screen.
//!
//! Creating an account requires a password; editing never touches it, the
//! update payload simply omits the field.

use api::models::UserPayload;
use dioxus::prelude::*;
use session::{Role, RouteKey};
use ui::{use_api, use_auth, use_notifier, AdminLayout, ConfirmDialog, ModalOverlay, RouteGuard};

#[component]
pub fn Users() -> Element {
    rsx! {
        RouteGuard { route: RouteKey::Users,
            AdminLayout {
                UsersScreen {}
            }
        }
    }
}

#[component]
fn UsersScreen() -> Element {
    let client = use_api();
    let auth = use_auth();
    let mut notifier = use_notifier();

    let mut users = use_signal(Vec::<UserPayload>::new);
    let mut refresh = use_signal(|| 0u32);
    let mut show_form = use_signal(|| false);
    let mut editing_id = use_signal(|| Option::<i64>::None);
    let mut delete_candidate = use_signal(|| Option::<i64>::None);
    let mut submitting = use_signal(|| false);
    let mut deleting = use_signal(|| false);

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(|| Role::User);

    let _list = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            let _tick = refresh();
            async move {
                match client.users().await {
                    Ok(list) => users.set(list),
                    Err(err) => notifier.destructive(err.user_message()),
                }
            }
        }
    });

    let mut open_create = move || {
        editing_id.set(None);
        username.set(String::new());
        password.set(String::new());
        role.set(Role::User);
        show_form.set(true);
    };

    let mut open_edit = move |user: UserPayload| {
        editing_id.set(user.id);
        username.set(user.username);
        password.set(String::new());
        role.set(user.role);
        show_form.set(true);
    };

    let submit_client = client.clone();
    let on_submit = move |_| {
        if submitting() {
            return;
        }
        let username_value = username().trim().to_string();
        if username_value.is_empty() {
            notifier.warning("Username is required.");
            return;
        }
        let creating = editing_id().is_none();
        let password_value = password();
        if creating && password_value.is_empty() {
            notifier.warning("A password is required for a new account.");
            return;
        }

        let user = UserPayload {
            id: editing_id(),
            username: username_value,
            password: creating.then_some(password_value),
            role: role(),
        };

        submitting.set(true);
        let client = submit_client.clone();
        spawn(async move {
            let result = match editing_id() {
                Some(id) => client.update_user(id, &user).await,
                None => client.create_user(&user).await,
            };
            match result {
                Ok(()) => {
                    notifier.success(if editing_id().is_some() {
                        "User updated"
                    } else {
                        "User created"
                    });
                    show_form.set(false);
                    *refresh.write() += 1;
                }
                Err(err) => notifier.destructive(err.user_message()),
            }
            submitting.set(false);
        });
    };

    let delete_client = client.clone();
    let on_confirm_delete = move |_| {
        let Some(id) = delete_candidate() else {
            return;
        };
        if deleting() {
            return;
        }
        deleting.set(true);
        let client = delete_client.clone();
        spawn(async move {
            match client.delete_user(id).await {
                Ok(()) => {
                    notifier.success("User deleted");
                    *refresh.write() += 1;
                }
                Err(err) => notifier.destructive(err.user_message()),
            }
            deleting.set(false);
            delete_candidate.set(None);
        });
    };

    // Deleting the account you are signed in with is blocked client-side.
    let own_id = auth().user.as_ref().and_then(|user| user.id);

    rsx! {
        div { class: "screen-header",
            h1 { "Users" }
            button {
                class: "btn btn-primary",
                onclick: move |_| open_create(),
                "Add User"
            }
        }

        table { class: "data-table",
            thead {
                tr {
                    th { "Username" }
                    th { "Role" }
                    th { "" }
                }
            }
            tbody {
                for user in users() {
                    tr { key: "{user.id.unwrap_or_default()}",
                        td { "{user.username}" }
                        td {
                            span { class: "badge", "{user.role}" }
                        }
                        td { class: "row-actions",
                            button {
                                class: "btn btn-secondary",
                                onclick: {
                                    let user = user.clone();
                                    move |_| open_edit(user.clone())
                                },
                                "Edit"
                            }
                            if user.id != own_id || user.id.is_none() {
                                button {
                                    class: "btn btn-destructive",
                                    onclick: move |_| delete_candidate.set(user.id),
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }
        }

        if show_form() {
            ModalOverlay {
                on_close: move |_| show_form.set(false),
                div { class: "modal-form",
                    h2 { if editing_id().is_some() { "Edit User" } else { "New User" } }
                    div { class: "form-field",
                        label { "Username" }
                        input {
                            r#type: "text",
                            value: username(),
                            oninput: move |evt| username.set(evt.value()),
                        }
                    }
                    if editing_id().is_none() {
                        div { class: "form-field",
                            label { "Password" }
                            input {
                                r#type: "password",
                                value: password(),
                                oninput: move |evt| password.set(evt.value()),
                            }
                        }
                    }
                    div { class: "form-field",
                        label { "Role" }
                        select {
                            value: role().as_str(),
                            onchange: move |evt| {
                                if let Some(parsed) = Role::parse(&evt.value()) {
                                    role.set(parsed);
                                }
                            },
                            option { value: "USER", "USER" }
                            option { value: "ADMIN", "ADMIN" }
                        }
                    }
                    div { class: "form-actions",
                        button {
                            class: "btn btn-secondary",
                            onclick: move |_| show_form.set(false),
                            "Cancel"
                        }
                        button {
                            class: "btn btn-primary",
                            disabled: submitting(),
                            onclick: on_submit,
                            if submitting() { "Saving..." } else { "Save" }
                        }
                    }
                }
            }
        }

        if delete_candidate().is_some() {
            ConfirmDialog {
                title: "Delete user",
                message: "Are you sure you want to delete this account? The operator will lose access immediately.",
                busy: deleting(),
                on_confirm: on_confirm_delete,
                on_cancel: move |_| delete_candidate.set(None),
            }
        }
    }
}
