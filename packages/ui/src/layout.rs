//! Shared admin chrome: sidebar navigation, topbar, content slot.
//!
//! Navigation entries reuse the route authorization table, so a link only
//! shows up when the signed-in role could actually enter the screen.

use dioxus::prelude::*;
use session::RouteKey;

use crate::auth::{sign_out, use_auth, use_session};
use crate::guard::route_path;

const NAV_ITEMS: [(RouteKey, &str); 6] = [
    (RouteKey::Dashboard, "Dashboard"),
    (RouteKey::Exhibitions, "Exhibitions"),
    (RouteKey::Products, "Products"),
    (RouteKey::Users, "Users"),
    (RouteKey::Employees, "Employees"),
    (RouteKey::Visitors, "Visitors"),
];

#[component]
pub fn AdminLayout(children: Element) -> Element {
    let auth = use_auth();
    let session = use_session();
    let nav = use_navigator();

    let state = auth();
    let role = state.user.as_ref().map(|user| user.role);
    let username = state
        .user
        .as_ref()
        .map(|user| user.username.clone())
        .unwrap_or_default();

    let visible_items: Vec<(RouteKey, &str)> = NAV_ITEMS
        .iter()
        .copied()
        .filter(|(key, _)| match (key.allowed_roles(), role) {
            (None, _) => true,
            (Some(allowed), Some(role)) => allowed.contains(&role),
            (Some(_), None) => false,
        })
        .collect();

    rsx! {
        div { class: "admin-shell",
            aside { class: "sidebar",
                div { class: "sidebar-brand", "Expo Admin" }
                nav { class: "sidebar-nav",
                    for (key, label) in visible_items {
                        Link {
                            class: "sidebar-link",
                            to: route_path(key),
                            "{label}"
                        }
                    }
                }
            }
            div { class: "admin-main",
                header { class: "topbar",
                    span { class: "topbar-user", "{username}" }
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| {
                            sign_out(auth, &session);
                            nav.push(route_path(RouteKey::Login));
                        },
                        "Logout"
                    }
                }
                main { class: "admin-content",
                    {children}
                }
            }
        }
    }
}
