use leptos::*;
use leptos_router::*;

use crate::router::{use_navigator, Route, ROUTES};
use crate::store::use_store;

/// Layout component with navbar and content outlet
#[component]
pub fn Layout() -> impl IntoView {
    let pathname = use_location().pathname;
    let navigator = use_navigator();

    // Keep the navigator on the active route so lazy views load on first visit
    create_effect(move |_| {
        navigator.navigate(&pathname.get());
    });

    view! {
        <div class="layout">
            <Navbar />
            <main class="main-content">
                <Outlet />
            </main>
        </div>
    }
}

/// Navbar with one tab per role view and the connection indicator
#[component]
fn Navbar() -> impl IntoView {
    let pathname = use_location().pathname;

    let is_active = move |route: Route| Route::resolve(&pathname.get()) == route;

    view! {
        <nav class="navbar">
            <div class="navbar-content">
                <h1 class="navbar-title">"Air-Con Controller"</h1>
                <div class="navbar-tabs">
                    {ROUTES
                        .iter()
                        .map(|(path, route)| {
                            let route = *route;
                            view! {
                                <A
                                    href=*path
                                    class=move || if is_active(route) { "tab active" } else { "tab" }
                                >
                                    {route.title()}
                                </A>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="navbar-actions">
                    <ConnectionIndicator />
                </div>
            </div>
        </nav>
    }
}

/// Shows whether the backend answered the last check
#[component]
fn ConnectionIndicator() -> impl IntoView {
    let store = use_store();

    let connected = move || store.with(|p| p.is_server_connected);
    let label = move || {
        store.with(|p| {
            if p.server_address.is_empty() {
                "No server".to_string()
            } else if p.is_server_connected {
                format!("Connected: {}", p.server_address)
            } else {
                format!("Offline: {}", p.server_address)
            }
        })
    };

    view! {
        <span class="connection">
            <span
                class=move || if connected() { "status-dot on" } else { "status-dot off" }
                aria-hidden="true"
            ></span>
            <span class="status-text">{label}</span>
        </span>
    }
}
