//! Staff records screen.

use api::models::Employee;
use dioxus::prelude::*;
use session::RouteKey;
use ui::{use_api, use_notifier, AdminLayout, ConfirmDialog, ModalOverlay, RouteGuard};

#[component]
pub fn Employees() -> Element {
    rsx! {
        RouteGuard { route: RouteKey::Employees,
            AdminLayout {
                EmployeesScreen {}
            }
        }
    }
}

#[component]
fn EmployeesScreen() -> Element {
    let client = use_api();
    let mut notifier = use_notifier();

    let mut employees = use_signal(Vec::<Employee>::new);
    let mut refresh = use_signal(|| 0u32);
    let mut show_form = use_signal(|| false);
    let mut editing_id = use_signal(|| Option::<i64>::None);
    let mut delete_candidate = use_signal(|| Option::<i64>::None);
    let mut submitting = use_signal(|| false);
    let mut deleting = use_signal(|| false);

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut department = use_signal(String::new);
    let mut salary = use_signal(String::new);

    let _list = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            let _tick = refresh();
            async move {
                match client.employees().await {
                    Ok(list) => employees.set(list),
                    Err(err) => notifier.destructive(err.user_message()),
                }
            }
        }
    });

    let mut open_create = move || {
        editing_id.set(None);
        name.set(String::new());
        email.set(String::new());
        department.set(String::new());
        salary.set(String::new());
        show_form.set(true);
    };

    let mut open_edit = move |employee: Employee| {
        editing_id.set(employee.id);
        name.set(employee.name);
        email.set(employee.email);
        department.set(employee.department);
        salary.set(
            employee
                .salary
                .map(|value| value.to_string())
                .unwrap_or_default(),
        );
        show_form.set(true);
    };

    let submit_client = client.clone();
    let on_submit = move |_| {
        if submitting() {
            return;
        }
        let name_value = name().trim().to_string();
        let email_value = email().trim().to_string();
        let department_value = department().trim().to_string();
        if name_value.is_empty() || email_value.is_empty() || department_value.is_empty() {
            notifier.warning("Name, email and department are required.");
            return;
        }
        let salary_value = salary().trim().to_string();
        let parsed_salary = if salary_value.is_empty() {
            None
        } else {
            match salary_value.parse::<f64>() {
                Ok(value) => Some(value),
                Err(_) => {
                    notifier.warning("Salary must be a number.");
                    return;
                }
            }
        };

        let employee = Employee {
            id: editing_id(),
            name: name_value,
            email: email_value,
            department: department_value,
            salary: parsed_salary,
        };

        submitting.set(true);
        let client = submit_client.clone();
        spawn(async move {
            let result = match editing_id() {
                Some(id) => client.update_employee(id, &employee).await,
                None => client.create_employee(&employee).await,
            };
            match result {
                Ok(()) => {
                    notifier.success(if editing_id().is_some() {
                        "Employee updated"
                    } else {
                        "Employee created"
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
            match client.delete_employee(id).await {
                Ok(()) => {
                    notifier.success("Employee deleted");
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
            h1 { "Employees" }
            button {
                class: "btn btn-primary",
                onclick: move |_| open_create(),
                "Add Employee"
            }
        }

        table { class: "data-table",
            thead {
                tr {
                    th { "Name" }
                    th { "Email" }
                    th { "Department" }
                    th { "Salary" }
                    th { "" }
                }
            }
            tbody {
                for employee in employees() {
                    tr { key: "{employee.id.unwrap_or_default()}",
                        td { "{employee.name}" }
                        td { "{employee.email}" }
                        td { "{employee.department}" }
                        td {
                            {employee.salary.map(|value| format!("{value:.2}")).unwrap_or_default()}
                        }
                        td { class: "row-actions",
                            button {
                                class: "btn btn-secondary",
                                onclick: {
                                    let employee = employee.clone();
                                    move |_| open_edit(employee.clone())
                                },
                                "Edit"
                            }
                            button {
                                class: "btn btn-destructive",
                                onclick: move |_| delete_candidate.set(employee.id),
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
                    h2 { if editing_id().is_some() { "Edit Employee" } else { "New Employee" } }
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
                        label { "Department" }
                        input {
                            r#type: "text",
                            value: department(),
                            oninput: move |evt| department.set(evt.value()),
                        }
                    }
                    div { class: "form-field",
                        label { "Salary" }
                        input {
                            r#type: "number",
                            value: salary(),
                            oninput: move |evt| salary.set(evt.value()),
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
                title: "Delete employee",
                message: "Are you sure you want to delete this employee? This action cannot be undone.",
                busy: deleting(),
                on_confirm: on_confirm_delete,
                on_cancel: move |_| delete_candidate.set(None),
            }
        }
    }
}
