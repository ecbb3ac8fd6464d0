use std::sync::Arc;

use dioxus::prelude::*;

use api::{ApiClient, ApiConfig};
use session::{validate_route_table, GlobalLoader, SessionStore, StorageBackend};
use ui::{AuthProvider, GlobalLoadingOverlay, NotificationsProvider, Toaster};
use views::{
    Dashboard, Employees, Exhibitions, Login, Products, Users, Visit, Visitors,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/exhibitions")]
    Exhibitions {},
    #[route("/products")]
    Products {},
    #[route("/users")]
    Users {},
    #[route("/employees")]
    Employees {},
    #[route("/visitors")]
    Visitors {},
    // Stable path: printed QR codes embed it.
    #[route("/visit/:exhibition_id")]
    Visit { exhibition_id: i64 },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    validate_route_table().expect("route authorization table is invalid");
    dioxus::launch(App);
}

fn make_backend() -> Arc<dyn StorageBackend> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Arc::new(session::LocalStorageBackend::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        Arc::new(session::MemoryBackend::new())
    }
}

/// Hard navigation to the login page, used when a 401 invalidates the
/// session from deep inside a request.
fn force_login_redirect() {
    tracing::info!("session invalidated, returning to login");
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }
}

#[component]
fn App() -> Element {
    let session_store = use_hook(|| SessionStore::new(make_backend()));
    let loader = use_hook(GlobalLoader::new);
    let client = {
        let session_store = session_store.clone();
        let loader = loader.clone();
        use_hook(move || {
            ApiClient::new(ApiConfig::default(), session_store, loader)
                .with_unauthorized_handler(force_login_redirect)
        })
    };

    use_context_provider(|| session_store);
    use_context_provider(|| loader);
    use_context_provider(|| client);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            NotificationsProvider {
                Router::<Route> {}
                Toaster {}
                GlobalLoadingOverlay {}
            }
        }
    }
}

/// Redirect `/` to the signed-in role's landing page, or to login.
#[component]
fn Root() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();

    use_effect(move || {
        match auth.read().user.as_ref() {
            Some(user) => {
                nav.replace(ui::route_path(session::landing_route(user.role)));
            }
            None => {
                nav.replace(Route::Login {});
            }
        }
    });
    rsx! {}
}
