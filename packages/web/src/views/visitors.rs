//! Registered visitors screen.
//!
//! Visitors are created here or through the public form, never edited.
//! Delete only removes the row from the current view; the backend keeps the
//! record and a refetch brings it back.

use api::models::{Exhibition, Product, Visitor};
use dioxus::prelude::*;
use session::RouteKey;
use ui::{use_api, use_notifier, AdminLayout, ConfirmDialog, ModalOverlay, RouteGuard};

#[component]
pub fn Visitors() -> Element {
    rsx! {
        RouteGuard { route: RouteKey::Visitors,
            AdminLayout {
                VisitorsScreen {}
            }
        }
    }
}

#[component]
fn VisitorsScreen() -> Element {
    let client = use_api();
    let mut notifier = use_notifier();

    let mut visitors = use_signal(Vec::<Visitor>::new);
    let mut exhibitions = use_signal(Vec::<Exhibition>::new);
    let mut products = use_signal(Vec::<Product>::new);
    let mut refresh = use_signal(|| 0u32);
    let mut exhibition_filter = use_signal(|| Option::<i64>::None);
    let mut show_form = use_signal(|| false);
    let mut remove_candidate = use_signal(|| Option::<i64>::None);
    let mut submitting = use_signal(|| false);

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut company_name = use_signal(String::new);
    let mut exhibition_id = use_signal(|| Option::<i64>::None);
    let mut product_ids = use_signal(Vec::<i64>::new);

    let _list = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            let _tick = refresh();
            let filter = exhibition_filter();
            async move {
                let result = match filter {
                    Some(id) => client.visitors_by_exhibition(id).await,
                    None => client.all_visitors().await,
                };
                match result {
                    Ok(list) => visitors.set(list),
                    Err(err) => notifier.destructive(err.user_message()),
                }
            }
        }
    });

    // Selects in the filter and the add form need the catalogs once.
    let _catalogs = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                match client.exhibitions().await {
                    Ok(list) => exhibitions.set(list),
                    Err(err) => notifier.destructive(err.user_message()),
                }
                match client.products().await {
                    Ok(list) => products.set(list),
                    Err(err) => notifier.destructive(err.user_message()),
                }
            }
        }
    });

    let mut open_create = move || {
        name.set(String::new());
        email.set(String::new());
        phone.set(String::new());
        company_name.set(String::new());
        exhibition_id.set(exhibition_filter());
        product_ids.set(Vec::new());
        show_form.set(true);
    };

    let submit_client = client.clone();
    let on_submit = move |_| {
        if submitting() {
            return;
        }
        let name_value = name().trim().to_string();
        let email_value = email().trim().to_string();
        let phone_value = phone().trim().to_string();
        let company_value = company_name().trim().to_string();
        let Some(exhibition_value) = exhibition_id() else {
            notifier.warning("Pick the exhibition this visitor attended.");
            return;
        };
        if name_value.is_empty()
            || email_value.is_empty()
            || phone_value.is_empty()
            || company_value.is_empty()
        {
            notifier.warning("Name, email, phone and company are required.");
            return;
        }

        let visitor = Visitor {
            name: name_value,
            email: email_value,
            phone: phone_value,
            company_name: company_value,
            exhibition_id: exhibition_value,
            product_ids: product_ids(),
            consent: true,
            ..Default::default()
        };

        submitting.set(true);
        let client = submit_client.clone();
        spawn(async move {
            match client.create_visitor(&visitor).await {
                Ok(response) => {
                    notifier.success("Visitor registered");
                    if !response.email_sent {
                        let detail = response
                            .email_error
                            .unwrap_or_else(|| "Confirmation email was not sent.".to_string());
                        notifier.warning(detail);
                    }
                    show_form.set(false);
                    *refresh.write() += 1;
                }
                Err(err) => notifier.destructive(err.user_message()),
            }
            submitting.set(false);
        });
    };

    let on_confirm_remove = move |_| {
        let Some(id) = remove_candidate() else {
            return;
        };
        visitors.write().retain(|visitor| visitor.id != Some(id));
        remove_candidate.set(None);
        notifier.success("Visitor removed from the list");
    };

    rsx! {
        div { class: "screen-header",
            h1 { "Visitors" }
            div { class: "screen-header-actions",
                select {
                    onchange: move |evt| {
                        exhibition_filter.set(evt.value().parse::<i64>().ok());
                    },
                    option { value: "", "All exhibitions" }
                    for exhibition in exhibitions() {
                        option {
                            value: "{exhibition.id.unwrap_or_default()}",
                            "{exhibition.name}"
                        }
                    }
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| open_create(),
                    "Add Visitor"
                }
            }
        }

        table { class: "data-table",
            thead {
                tr {
                    th { "Name" }
                    th { "Email" }
                    th { "Phone" }
                    th { "Company" }
                    th { "Exhibition" }
                    th { "Interested in" }
                    th { "" }
                }
            }
            tbody {
                for visitor in visitors() {
                    tr { key: "{visitor.id.unwrap_or_default()}",
                        td { "{visitor.name}" }
                        td { "{visitor.email}" }
                        td { "{visitor.phone}" }
                        td { "{visitor.company_name}" }
                        td {
                            {visitor.exhibition.as_ref().map(|e| e.name.clone()).unwrap_or_default()}
                        }
                        td {
                            {
                                visitor
                                    .visitor_products
                                    .iter()
                                    .map(|vp| vp.product.name.as_str())
                                    .collect::<Vec<_>>()
                                    .join(", ")
                            }
                        }
                        td { class: "row-actions",
                            button {
                                class: "btn btn-destructive",
                                onclick: move |_| remove_candidate.set(visitor.id),
                                "Remove"
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
                    h2 { "Add Visitor" }
                    div { class: "form-field",
                        label { "Name" }
                        input {
                            r#type: "text",
                            value: name(),
                            oninput: move |evt| name.set(evt.value()),
                        }
                    }
                    div { class: "form-field",
                        label { "Email" }
                        input {
                            r#type: "email",
                            value: email(),
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }
                    div { class: "form-field",
                        label { "Phone" }
                        input {
                            r#type: "tel",
                            value: phone(),
                            oninput: move |evt| phone.set(evt.value()),
                        }
                    }
                    div { class: "form-field",
                        label { "Company" }
                        input {
                            r#type: "text",
                            value: company_name(),
                            oninput: move |evt| company_name.set(evt.value()),
                        }
                    }
                    div { class: "form-field",
                        label { "Exhibition" }
                        select {
                            onchange: move |evt| {
                                exhibition_id.set(evt.value().parse::<i64>().ok());
                            },
                            option { value: "", "Select an exhibition" }
                            for exhibition in exhibitions() {
                                option {
                                    value: "{exhibition.id.unwrap_or_default()}",
                                    selected: exhibition.id == exhibition_id(),
                                    "{exhibition.name}"
                                }
                            }
                        }
                    }
                    div { class: "form-field",
                        label { "Products of interest" }
                        div { class: "checkbox-grid",
                            for product in products() {
                                label { class: "form-checkbox",
                                    input {
                                        r#type: "checkbox",
                                        checked: product
                                            .id
                                            .is_some_and(|id| product_ids().contains(&id)),
                                        onchange: move |_| {
                                            let Some(id) = product.id else { return };
                                            let mut selected = product_ids.write();
                                            if selected.contains(&id) {
                                                selected.retain(|existing| *existing != id);
                                            } else {
                                                selected.push(id);
                                            }
                                        },
                                    }
                                    "{product.name}"
                                }
                            }
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

        if remove_candidate().is_some() {
            ConfirmDialog {
                title: "Remove visitor",
                message: "This only hides the visitor from the current list. The registration stays on the server.",
                confirm_label: "Remove",
                on_confirm: on_confirm_remove,
                on_cancel: move |_| remove_candidate.set(None),
            }
        }
    }
}
