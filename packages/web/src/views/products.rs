//! Products screen: catalog CRUD with brochure upload.
//!
//! The brochure is read into memory when picked and travels with the save
//! request as a multipart part. Existing attachments get preview and
//! download links; a product without one shows an inert placeholder.

use api::models::{AttachmentUpload, Product, ProductPayload};
use dioxus::prelude::*;
use session::RouteKey;
use ui::{use_api, use_notifier, AdminLayout, ConfirmDialog, ModalOverlay, RouteGuard};

#[component]
pub fn Products() -> Element {
    rsx! {
        RouteGuard { route: RouteKey::Products,
            AdminLayout {
                ProductsScreen {}
            }
        }
    }
}

#[component]
fn ProductsScreen() -> Element {
    let client = use_api();
    let mut notifier = use_notifier();

    let mut products = use_signal(Vec::<Product>::new);
    let mut refresh = use_signal(|| 0u32);
    let mut show_form = use_signal(|| false);
    let mut editing_id = use_signal(|| Option::<i64>::None);
    let mut delete_candidate = use_signal(|| Option::<i64>::None);
    let mut submitting = use_signal(|| false);
    let mut deleting = use_signal(|| false);

    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut attachment = use_signal(|| Option::<AttachmentUpload>::None);

    let _list = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            let _tick = refresh();
            async move {
                match client.products().await {
                    Ok(list) => products.set(list),
                    Err(err) => notifier.destructive(err.user_message()),
                }
            }
        }
    });

    let mut open_create = move || {
        editing_id.set(None);
        name.set(String::new());
        description.set(String::new());
        attachment.set(None);
        show_form.set(true);
    };

    let mut open_edit = move |product: Product| {
        editing_id.set(product.id);
        name.set(product.name);
        description.set(product.description);
        attachment.set(None);
        show_form.set(true);
    };

    let on_file_picked = move |evt: Event<FormData>| {
        let Some(file_engine) = evt.files() else {
            return;
        };
        spawn(async move {
            let Some(file_name) = file_engine.files().first().cloned() else {
                attachment.set(None);
                return;
            };
            match file_engine.read_file(&file_name).await {
                Some(bytes) => attachment.set(Some(AttachmentUpload { file_name, bytes })),
                None => {
                    notifier.destructive("Could not read the selected file.");
                    attachment.set(None);
                }
            }
        });
    };

    let submit_client = client.clone();
    let on_submit = move |_| {
        if submitting() {
            return;
        }
        let name_value = name().trim().to_string();
        if name_value.is_empty() {
            notifier.warning("Product name is required.");
            return;
        }

        let payload = ProductPayload {
            name: name_value,
            description: description().trim().to_string(),
        };
        let upload = attachment();

        submitting.set(true);
        let client = submit_client.clone();
        spawn(async move {
            let result = match editing_id() {
                Some(id) => client.update_product(id, &payload, upload).await,
                None => client.create_product(&payload, upload).await,
            };
            match result {
                Ok(()) => {
                    notifier.success(if editing_id().is_some() {
                        "Product updated"
                    } else {
                        "Product created"
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
            match client.delete_product(id).await {
                Ok(()) => {
                    notifier.success("Product deleted");
                    *refresh.write() += 1;
                }
                Err(err) => notifier.destructive(err.user_message()),
            }
            deleting.set(false);
            delete_candidate.set(None);
        });
    };

    rsx! {
        div { class: "screen-header",
            h1 { "Products" }
            button {
                class: "btn btn-primary",
                onclick: move |_| open_create(),
                "Add Product"
            }
        }

        table { class: "data-table",
            thead {
                tr {
                    th { "Name" }
                    th { "Description" }
                    th { "Brochure" }
                    th { "" }
                }
            }
            tbody {
                for product in products() {
                    tr { key: "{product.id.unwrap_or_default()}",
                        td { "{product.name}" }
                        td { "{product.description}" }
                        td {
                            if let Some(file) = product.attachment.clone() {
                                a {
                                    class: "attachment-link",
                                    href: client.product_preview_url(&file),
                                    target: "_blank",
                                    "Preview"
                                }
                                a {
                                    class: "attachment-link",
                                    href: client.product_download_url(&file),
                                    "Download"
                                }
                            } else {
                                span { class: "attachment-none", "None" }
                            }
                        }
                        td { class: "row-actions",
                            button {
                                class: "btn btn-secondary",
                                onclick: {
                                    let product = product.clone();
                                    move |_| open_edit(product.clone())
                                },
                                "Edit"
                            }
                            button {
                                class: "btn btn-destructive",
                                onclick: move |_| delete_candidate.set(product.id),
                                "Delete"
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
                    h2 { if editing_id().is_some() { "Edit Product" } else { "New Product" } }
                    div { class: "form-field",
                        label { "Name" }
                        input {
                            r#type: "text",
                            value: name(),
                            oninput: move |evt| name.set(evt.value()),
                        }
                    }
                    div { class: "form-field",
                        label { "Description" }
                        textarea {
                            value: description(),
                            oninput: move |evt| description.set(evt.value()),
                        }
                    }
                    div { class: "form-field",
                        label { "Brochure" }
                        input {
                            r#type: "file",
                            accept: ".pdf,.png,.jpg,.jpeg",
                            onchange: on_file_picked,
                        }
                        if let Some(upload) = attachment() {
                            span { class: "file-chosen", "{upload.file_name}" }
                        } else if editing_id().is_some() {
                            span { class: "file-hint", "Leave empty to keep the current file" }
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
                title: "Delete product",
                message: "Are you sure you want to delete this product? Registered visitor interests will keep referencing it.",
                busy: deleting(),
                on_confirm: on_confirm_delete,
                on_cancel: move |_| delete_candidate.set(None),
            }
        }
    }
}
