use leptos::*;
use leptos_router::*;

use crate::api::{provide_server_link, watch_connection};
use crate::components::{About, Initpage, Layout, Manager, NotFound, Reception, Room, Server};
use crate::config::AppConfig;
use crate::router::{provide_navigator, Route as AppRoute};
use crate::store::provide_store_context;

/// Main application component with routing
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Shared state and collaborators, provided once at the root
    let store = provide_store_context();
    let link = provide_server_link(store);
    provide_navigator();
    watch_connection(link, config.connection_check_interval_ms);
    provide_context(config);

    view! {
        <Router>
            <Routes>
                <Route path="/" view=Layout>
                    <Route path=AppRoute::Initpage.segment() view=Initpage />
                    <Route path=AppRoute::Room.segment() view=Room />
                    <Route path=AppRoute::Reception.segment() view=Reception />
                    <Route path=AppRoute::Manager.segment() view=Manager />
                    <Route path=AppRoute::Server.segment() view=Server />
                    <Route path=AppRoute::About.segment() view=About />
                    <Route path=AppRoute::NotFound.segment() view=NotFound />
                </Route>
            </Routes>
        </Router>
    }
}
