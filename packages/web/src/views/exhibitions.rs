//! Exhibitions screen: list, create, edit, delete.
//!
//! Readable by both roles; the mutating controls only render for admins.

use api::models::Exhibition;
use dioxus::prelude::*;
use session::RouteKey;
use ui::{
    use_api, use_auth, use_notifier, AdminLayout, ConfirmDialog, ModalOverlay, RouteGuard,
};

#[component]
pub fn Exhibitions() -> Element {
    rsx! {
        RouteGuard { route: RouteKey::Exhibitions,
            AdminLayout {
                ExhibitionsScreen {}
            }
        }
    }
}

#[component]
fn ExhibitionsScreen() -> Element {
    let client = use_api();
    let auth = use_auth();
    let mut notifier = use_notifier();

    let mut exhibitions = use_signal(Vec::<Exhibition>::new);
    let mut refresh = use_signal(|| 0u32);
    let mut show_form = use_signal(|| false);
    let mut editing_id = use_signal(|| Option::<i64>::None);
    let mut delete_candidate = use_signal(|| Option::<i64>::None);
    let mut submitting = use_signal(|| false);
    let mut deleting = use_signal(|| false);

    let mut name = use_signal(String::new);
    let mut location = use_signal(String::new);
    let mut start_date = use_signal(String::new);
    let mut end_date = use_signal(String::new);
    let mut timing = use_signal(String::new);
    let mut active = use_signal(|| true);

    let _list = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            let _tick = refresh();
            async move {
                match client.exhibitions().await {
                    Ok(list) => exhibitions.set(list),
                    Err(err) => notifier.destructive(err.user_message()),
                }
            }
        }
    });

    let mut open_create = move || {
        editing_id.set(None);
        name.set(String::new());
        location.set(String::new());
        start_date.set(String::new());
        end_date.set(String::new());
        timing.set(String::new());
        active.set(true);
        show_form.set(true);
    };

    let mut open_edit = move |exhibition: Exhibition| {
        editing_id.set(exhibition.id);
        name.set(exhibition.name);
        location.set(exhibition.location);
        start_date.set(exhibition.start_date);
        end_date.set(exhibition.end_date);
        timing.set(exhibition.timing.unwrap_or_default());
        active.set(exhibition.active);
        show_form.set(true);
    };

    let submit_client = client.clone();
    let on_submit = move |_| {
        if submitting() {
            return;
        }
        let name_value = name().trim().to_string();
        let location_value = location().trim().to_string();
        let start_value = start_date();
        let end_value = end_date();
        if name_value.is_empty()
            || location_value.is_empty()
            || start_value.is_empty()
            || end_value.is_empty()
        {
            notifier.warning("Name, location and both dates are required.");
            return;
        }

        let timing_value = timing().trim().to_string();
        let exhibition = Exhibition {
            id: editing_id(),
            name: name_value,
            location: location_value,
            start_date: start_value,
            end_date: end_value,
            timing: (!timing_value.is_empty()).then_some(timing_value),
            active: active(),
        };

        submitting.set(true);
        let client = submit_client.clone();
        spawn(async move {
            let result = match editing_id() {
                Some(id) => client.update_exhibition(id, &exhibition).await,
                None => client.create_exhibition(&exhibition).await,
            };
            match result {
                Ok(()) => {
                    notifier.success(if editing_id().is_some() {
                        "Exhibition updated"
                    } else {
                        "Exhibition created"
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
            match client.delete_exhibition(id).await {
                Ok(()) => {
                    notifier.success("Exhibition deleted");
                    *refresh.write() += 1;
                }
                Err(err) => notifier.destructive(err.user_message()),
            }
            deleting.set(false);
            delete_candidate.set(None);
        });
    };

    let is_admin = auth().is_admin();

    rsx! {
        div { class: "screen-header",
            h1 { "Exhibitions" }
            if is_admin {
                button {
                    class: "btn btn-primary",
                    onclick: move |_| open_create(),
                    "Add Exhibition"
                }
            }
        }

        table { class: "data-table",
            thead {
                tr {
                    th { "Name" }
                    th { "Location" }
                    th { "Dates" }
                    th { "Timing" }
                    th { "Status" }
                    if is_admin { th { "" } }
                }
            }
            tbody {
                for exhibition in exhibitions() {
                    tr { key: "{exhibition.id.unwrap_or_default()}",
                        td { "{exhibition.name}" }
                        td { "{exhibition.location}" }
                        td { "{exhibition.start_date} to {exhibition.end_date}" }
                        td { {exhibition.timing.clone().unwrap_or_default()} }
                        td {
                            if exhibition.active {
                                span { class: "badge badge-active", "Active" }
                            } else {
                                span { class: "badge badge-inactive", "Inactive" }
                            }
                        }
                        if is_admin {
                            td { class: "row-actions",
                                button {
                                    class: "btn btn-secondary",
                                    onclick: {
                                        let exhibition = exhibition.clone();
                                        move |_| open_edit(exhibition.clone())
                                    },
                                    "Edit"
                                }
                                button {
                                    class: "btn btn-destructive",
                                    onclick: move |_| delete_candidate.set(exhibition.id),
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
                    h2 { if editing_id().is_some() { "Edit Exhibition" } else { "New Exhibition" } }
                    div { class: "form-field",
                        label { "Name" }
                        input {
                            r#type: "text",
                            value: name(),
                            oninput: move |evt| name.set(evt.value()),
                        }
                    }
                    div { class: "form-field",
                        label { "Location" }
                        input {
                            r#type: "text",
                            value: location(),
                            oninput: move |evt| location.set(evt.value()),
                        }
                    }
                    div { class: "form-row",
                        div { class: "form-field",
                            label { "Start date" }
                            input {
                                r#type: "date",
                                value: start_date(),
                                oninput: move |evt| start_date.set(evt.value()),
                            }
                        }
                        div { class: "form-field",
                            label { "End date" }
                            input {
                                r#type: "date",
                                value: end_date(),
                                oninput: move |evt| end_date.set(evt.value()),
                            }
                        }
                    }
                    div { class: "form-field",
                        label { "Timing" }
                        input {
                            r#type: "text",
                            placeholder: "10:00 - 18:00",
                            value: timing(),
                            oninput: move |evt| timing.set(evt.value()),
                        }
                    }
                    label { class: "form-checkbox",
                        input {
                            r#type: "checkbox",
                            checked: active(),
                            onchange: move |evt| active.set(evt.checked()),
                        }
                        "Active"
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
                title: "Delete exhibition",
                message: "Are you sure you want to delete this exhibition? This action cannot be undone.",
                busy: deleting(),
                on_confirm: on_confirm_delete,
                on_cancel: move |_| delete_candidate.set(None),
            }
        }
    }
}
