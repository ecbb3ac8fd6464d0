//! Read-only dashboard rendering server-computed aggregates.

use api::models::Dashboard as DashboardData;
use dioxus::prelude::*;
use session::RouteKey;
use ui::{use_api, use_notifier, AdminLayout, RouteGuard};

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        RouteGuard { route: RouteKey::Dashboard,
            AdminLayout {
                DashboardScreen {}
            }
        }
    }
}

#[component]
fn DashboardScreen() -> Element {
    let client = use_api();
    let mut notifier = use_notifier();
    let mut dashboard = use_signal(DashboardData::default);

    let _load = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                match client.dashboard().await {
                    Ok(data) => dashboard.set(data),
                    Err(err) => notifier.destructive(err.user_message()),
                }
            }
        }
    });

    let data = dashboard();
    let top_product = data
        .analytics
        .top_products
        .first()
        .map(|entry| entry.name.clone())
        .unwrap_or_else(|| "-".to_string());

    rsx! {
        div { class: "screen-header",
            h1 { "Dashboard" }
        }

        div { class: "stat-grid",
            div { class: "stat-card",
                span { class: "stat-label", "Total visitors" }
                span { class: "stat-value", "{data.total_visitors}" }
            }
            div { class: "stat-card",
                span { class: "stat-label", "Visitors today" }
                span { class: "stat-value", "{data.today_visitors}" }
            }
            div { class: "stat-card",
                span { class: "stat-label", "Product interests" }
                span { class: "stat-value", "{data.total_product_interests}" }
            }
            div { class: "stat-card",
                span { class: "stat-label", "Top product" }
                span { class: "stat-value", "{top_product}" }
            }
        }

        div { class: "dashboard-panels",
            section { class: "panel",
                h2 { "Visitors per day" }
                table { class: "data-table",
                    thead {
                        tr {
                            th { "Date" }
                            th { "Visitors" }
                        }
                    }
                    tbody {
                        for entry in data.analytics.visitors_per_day.clone() {
                            tr { key: "{entry.date}",
                                td { "{entry.date}" }
                                td { "{entry.count}" }
                            }
                        }
                    }
                }
            }

            section { class: "panel",
                h2 { "Top products" }
                table { class: "data-table",
                    thead {
                        tr {
                            th { "Product" }
                            th { "Interested visitors" }
                        }
                    }
                    tbody {
                        for entry in data.analytics.top_products.clone() {
                            tr { key: "{entry.name}",
                                td { "{entry.name}" }
                                td { "{entry.count}" }
                            }
                        }
                    }
                }
            }
        }

        section { class: "panel",
            h2 { "Recent registrations" }
            table { class: "data-table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Email" }
                        th { "Phone" }
                        th { "Registered" }
                    }
                }
                tbody {
                    for visitor in data.recent_visitors.clone() {
                        tr { key: "{visitor.id}",
                            td { "{visitor.name}" }
                            td { "{visitor.email}" }
                            td { "{visitor.phone}" }
                            td { {visitor.created_at.clone().unwrap_or_default()} }
                        }
                    }
                }
            }
        }
    }
}
