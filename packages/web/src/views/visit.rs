//! Public visitor registration form.
//!
//! Reached by scanning a QR code printed on exhibition signage, so it renders
//! without any session or admin chrome. The form posts a visitor record tied
//! to the exhibition id carried in the path.

use api::models::{Exhibition, Product, Visitor};
use dioxus::prelude::*;
use ui::{use_api, use_notifier};

const COMPANY_TYPES: &[&str] = &[
    "Manufacturer",
    "Distributor",
    "System Integrator",
    "Consultant",
    "End User",
];

const INDUSTRIES: &[&str] = &[
    "Automotive",
    "Pharmaceuticals",
    "Food & Beverage",
    "Textiles",
    "Electronics",
    "Chemicals",
    "Logistics",
];

const COMPANY_SIZES: &[&str] = &["1-10", "11-50", "51-200", "201-1000", "1000+"];

const INTEREST_AREAS: &[&str] = &[
    "Automation",
    "Quality Control",
    "Energy Efficiency",
    "Digital Monitoring",
    "Maintenance Services",
];

const SOLUTIONS: &[&str] = &[
    "New installation",
    "Upgrade of existing line",
    "Spare parts",
    "Annual maintenance contract",
];

const TIMELINES: &[&str] = &[
    "Immediately",
    "Within 3 months",
    "3-6 months",
    "6-12 months",
    "Just exploring",
];

const BUDGETS: &[&str] = &[
    "Under 1 Lakh",
    "1-5 Lakh",
    "5-25 Lakh",
    "25 Lakh - 1 Crore",
    "Above 1 Crore",
    "Not decided",
];

const FOLLOW_UP_MODES: &[&str] = &["Phone call", "Email", "WhatsApp", "In-person meeting"];

const CONTACT_TIMES: &[&str] = &["Morning", "Afternoon", "Evening"];

#[derive(Clone, Copy, PartialEq)]
enum Phase {
    Loading,
    Ready,
    Failed,
}

#[component]
pub fn Visit(exhibition_id: i64) -> Element {
    let client = use_api();
    let mut notifier = use_notifier();

    let mut phase = use_signal(|| Phase::Loading);
    let mut exhibition = use_signal(|| Option::<Exhibition>::None);
    let mut products = use_signal(Vec::<Product>::new);

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut company_name = use_signal(String::new);
    let mut designation = use_signal(String::new);
    let mut city_state = use_signal(String::new);
    let mut company_type = use_signal(Vec::<String>::new);
    let mut company_type_other = use_signal(String::new);
    let mut industry = use_signal(Vec::<String>::new);
    let mut industry_other = use_signal(String::new);
    let mut company_size = use_signal(Vec::<String>::new);
    let mut interest_areas = use_signal(Vec::<String>::new);
    let mut solutions = use_signal(Vec::<String>::new);
    let mut solutions_other = use_signal(String::new);
    let mut timeline = use_signal(Vec::<String>::new);
    let mut budget = use_signal(Vec::<String>::new);
    let mut follow_up_mode = use_signal(Vec::<String>::new);
    let mut best_time_to_contact = use_signal(Vec::<String>::new);
    let mut additional_notes = use_signal(String::new);
    let mut consent = use_signal(|| false);
    let mut product_ids = use_signal(Vec::<i64>::new);

    let mut invalid = use_signal(Vec::<&'static str>::new);
    let mut submitting = use_signal(|| false);
    let mut show_success = use_signal(|| false);

    // Both catalogs are needed before the form makes sense; either failing
    // leaves the page in a terminal error state.
    let _load = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                let (exhibition_result, products_result) = futures::join!(
                    client.public_exhibition(exhibition_id),
                    client.public_products(),
                );
                match (exhibition_result, products_result) {
                    (Ok(found), Ok(catalog)) => {
                        exhibition.set(Some(found));
                        products.set(catalog);
                        phase.set(Phase::Ready);
                    }
                    _ => phase.set(Phase::Failed),
                }
            }
        }
    });

    let mut reset_form = move || {
        name.set(String::new());
        email.set(String::new());
        phone.set(String::new());
        company_name.set(String::new());
        designation.set(String::new());
        city_state.set(String::new());
        company_type.set(Vec::new());
        company_type_other.set(String::new());
        industry.set(Vec::new());
        industry_other.set(String::new());
        company_size.set(Vec::new());
        interest_areas.set(Vec::new());
        solutions.set(Vec::new());
        solutions_other.set(String::new());
        timeline.set(Vec::new());
        budget.set(Vec::new());
        follow_up_mode.set(Vec::new());
        best_time_to_contact.set(Vec::new());
        additional_notes.set(String::new());
        consent.set(false);
        product_ids.set(Vec::new());
        invalid.set(Vec::new());
    };

    let submit_client = client.clone();
    let on_submit = move |_| {
        if submitting() {
            return;
        }
        let name_value = name().trim().to_string();
        let email_value = email().trim().to_string();
        let phone_value = phone().trim().to_string();

        let mut missing = Vec::new();
        if name_value.is_empty() {
            missing.push("name");
        }
        if email_value.is_empty() {
            missing.push("email");
        }
        if phone_value.is_empty() {
            missing.push("phone");
        }
        if !consent() {
            missing.push("consent");
        }
        invalid.set(missing.clone());
        if !missing.is_empty() {
            notifier.warning("Please fill in your name, email and phone, and accept the consent.");
            return;
        }

        let optional = |value: String| {
            let trimmed = value.trim().to_string();
            (!trimmed.is_empty()).then_some(trimmed)
        };

        let visitor = Visitor {
            name: name_value,
            email: email_value,
            phone: phone_value,
            company_name: company_name().trim().to_string(),
            designation: optional(designation()),
            city_state: optional(city_state()),
            company_type: company_type(),
            company_type_other: optional(company_type_other()),
            industry: industry(),
            industry_other: optional(industry_other()),
            company_size: company_size(),
            interest_areas: interest_areas(),
            solutions: solutions(),
            solutions_other: optional(solutions_other()),
            timeline: timeline(),
            budget: budget(),
            follow_up_mode: follow_up_mode(),
            best_time_to_contact: best_time_to_contact(),
            additional_notes: optional(additional_notes()),
            consent: true,
            exhibition_id,
            product_ids: product_ids(),
            ..Default::default()
        };

        submitting.set(true);
        let client = submit_client.clone();
        spawn(async move {
            match client.create_visitor(&visitor).await {
                Ok(response) => {
                    if !response.email_sent {
                        let detail = response
                            .email_error
                            .unwrap_or_else(|| "Confirmation email was not sent.".to_string());
                        notifier.warning(detail);
                    }
                    reset_form();
                    show_success.set(true);
                    hide_banner_later(show_success);
                }
                Err(err) => notifier.destructive(err.user_message()),
            }
            submitting.set(false);
        });
    };

    let field_class = move |field: &'static str| {
        if invalid().contains(&field) {
            "form-field field-invalid"
        } else {
            "form-field"
        }
    };

    match phase() {
        Phase::Loading => rsx! {
            div { class: "visit-page",
                div { class: "visit-card",
                    p { class: "visit-status", "Loading exhibition details..." }
                }
            }
        },
        Phase::Failed => rsx! {
            div { class: "visit-page",
                div { class: "visit-card",
                    h1 { "Registration unavailable" }
                    p { class: "visit-status",
                        "We could not load this exhibition. Please check the link or try again later."
                    }
                }
            }
        },
        Phase::Ready => rsx! {
            div { class: "visit-page",
                div { class: "visit-card",
                    header { class: "visit-header",
                        h1 {
                            {
                                exhibition()
                                    .map(|e| e.name)
                                    .unwrap_or_else(|| "Visitor registration".to_string())
                            }
                        }
                        if let Some(current) = exhibition() {
                            p { class: "visit-subtitle", "{current.location}" }
                        }
                    }

                    if show_success() {
                        div { class: "visit-success",
                            "Thank you for registering. We look forward to meeting you!"
                        }
                    }

                    section { class: "visit-section",
                        h2 { "Your details" }
                        div { class: field_class("name"),
                            label { "Name *" }
                            input {
                                r#type: "text",
                                value: name(),
                                oninput: move |evt| name.set(evt.value()),
                            }
                        }
                        div { class: "form-row",
                            div { class: field_class("email"),
                                label { "Email *" }
                                input {
                                    r#type: "email",
                                    value: email(),
                                    oninput: move |evt| email.set(evt.value()),
                                }
                            }
                            div { class: field_class("phone"),
                                label { "Phone *" }
                                input {
                                    r#type: "tel",
                                    value: phone(),
                                    oninput: move |evt| phone.set(evt.value()),
                                }
                            }
                        }
                        div { class: "form-row",
                            div { class: "form-field",
                                label { "Company" }
                                input {
                                    r#type: "text",
                                    value: company_name(),
                                    oninput: move |evt| company_name.set(evt.value()),
                                }
                            }
                            div { class: "form-field",
                                label { "Designation" }
                                input {
                                    r#type: "text",
                                    value: designation(),
                                    oninput: move |evt| designation.set(evt.value()),
                                }
                            }
                        }
                        div { class: "form-field",
                            label { "City / State" }
                            input {
                                r#type: "text",
                                value: city_state(),
                                oninput: move |evt| city_state.set(evt.value()),
                            }
                        }
                    }

                    section { class: "visit-section",
                        h2 { "About your company" }
                        CheckboxGroup {
                            label: "Company type",
                            options: COMPANY_TYPES,
                            selected: company_type,
                        }
                        div { class: "form-field",
                            label { "Company type (other)" }
                            input {
                                r#type: "text",
                                value: company_type_other(),
                                oninput: move |evt| company_type_other.set(evt.value()),
                            }
                        }
                        CheckboxGroup {
                            label: "Industry",
                            options: INDUSTRIES,
                            selected: industry,
                        }
                        div { class: "form-field",
                            label { "Industry (other)" }
                            input {
                                r#type: "text",
                                value: industry_other(),
                                oninput: move |evt| industry_other.set(evt.value()),
                            }
                        }
                        CheckboxGroup {
                            label: "Company size",
                            options: COMPANY_SIZES,
                            selected: company_size,
                        }
                    }

                    section { class: "visit-section",
                        h2 { "What are you looking for?" }
                        CheckboxGroup {
                            label: "Areas of interest",
                            options: INTEREST_AREAS,
                            selected: interest_areas,
                        }
                        CheckboxGroup {
                            label: "Solutions",
                            options: SOLUTIONS,
                            selected: solutions,
                        }
                        div { class: "form-field",
                            label { "Solutions (other)" }
                            input {
                                r#type: "text",
                                value: solutions_other(),
                                oninput: move |evt| solutions_other.set(evt.value()),
                            }
                        }
                        div { class: "form-field",
                            label { "Products you would like to see" }
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
                    }

                    section { class: "visit-section",
                        h2 { "Purchase plans" }
                        CheckboxGroup {
                            label: "Timeline",
                            options: TIMELINES,
                            selected: timeline,
                        }
                        CheckboxGroup {
                            label: "Budget",
                            options: BUDGETS,
                            selected: budget,
                        }
                    }

                    section { class: "visit-section",
                        h2 { "Follow up" }
                        CheckboxGroup {
                            label: "Preferred mode",
                            options: FOLLOW_UP_MODES,
                            selected: follow_up_mode,
                        }
                        CheckboxGroup {
                            label: "Best time to contact",
                            options: CONTACT_TIMES,
                            selected: best_time_to_contact,
                        }
                        div { class: "form-field",
                            label { "Anything else we should know?" }
                            textarea {
                                value: additional_notes(),
                                oninput: move |evt| additional_notes.set(evt.value()),
                            }
                        }
                    }

                    div { class: field_class("consent"),
                        label { class: "form-checkbox",
                            input {
                                r#type: "checkbox",
                                checked: consent(),
                                onchange: move |evt| consent.set(evt.checked()),
                            }
                            "I agree to be contacted about my areas of interest. *"
                        }
                    }

                    button {
                        class: "btn btn-primary btn-block",
                        disabled: submitting(),
                        onclick: on_submit,
                        if submitting() { "Submitting..." } else { "Register" }
                    }
                }
            }
        },
    }
}

/// One multi-select section of the form. Answers accumulate in `selected`
/// in the order the visitor ticked them.
#[component]
fn CheckboxGroup(
    label: &'static str,
    options: &'static [&'static str],
    selected: Signal<Vec<String>>,
) -> Element {
    let mut selected = selected;
    rsx! {
        div { class: "form-field",
            label { "{label}" }
            div { class: "checkbox-grid",
                for option in options {
                    label { class: "form-checkbox",
                        input {
                            r#type: "checkbox",
                            checked: selected().iter().any(|value| value == option),
                            onchange: move |_| {
                                let mut current = selected.write();
                                if let Some(pos) = current.iter().position(|value| value == option) {
                                    current.remove(pos);
                                } else {
                                    current.push(option.to_string());
                                }
                            },
                        }
                        "{option}"
                    }
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn hide_banner_later(mut banner: Signal<bool>) {
    spawn(async move {
        gloo_timers::future::sleep(std::time::Duration::from_secs(3)).await;
        banner.set(false);
    });
}

// Without a browser event loop the banner stays until the next submit.
#[cfg(not(target_arch = "wasm32"))]
fn hide_banner_later(_banner: Signal<bool>) {}
