use leptos::*;
use leptos_router::*;

use crate::api::use_server_link;
use crate::config::AppConfig;
use crate::router::{Route, ROUTES};
use crate::store::{use_store, StoreCommand};

/// Entry page: configure the backend address and pick a role
#[component]
pub fn Initpage() -> impl IntoView {
    let store = use_store();
    let link = use_server_link();
    let config = use_context::<AppConfig>().unwrap_or_default();

    // Prefer the address already in the store, then the configured one
    let initial = store.with_untracked(|s| s.snapshot().server_address.clone());
    let initial = if initial.is_empty() {
        config.api_url.unwrap_or_default()
    } else {
        initial
    };
    let (address, set_address) = create_signal(initial);
    let (error, set_error) = create_signal(None::<String>);

    let check = create_action(move |_: &()| async move { link.check_connection().await });

    let connect = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match store.dispatch(StoreCommand::SetServerAddress(address.get_untracked())) {
            Ok(()) => {
                set_error.set(None);
                check.dispatch(());
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    let check_error = move || {
        check
            .value()
            .get()
            .and_then(|result| result.err())
            .map(|e| e.to_string())
    };

    view! {
        <div class="initpage">
            <h2>"Connect to the central unit"</h2>
            <form class="connect-form" on:submit=connect>
                <label for="server-address">"Server address"</label>
                <input
                    id="server-address"
                    type="text"
                    placeholder="http://192.168.1.10:8000"
                    prop:value=address
                    on:input=move |ev| set_address.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || check.pending().get()>
                    {move || if check.pending().get() { "Connecting..." } else { "Connect" }}
                </button>
            </form>

            {move || error.get().or_else(check_error).map(|message| view! {
                <div class="error-banner">{message}</div>
            })}

            <Show when=move || store.with(|p| p.is_server_connected)>
                <div class="role-select">
                    <h3>"Choose a role"</h3>
                    {ROUTES
                        .iter()
                        .filter(|(_, route)| !matches!(route, Route::Initpage | Route::About))
                        .map(|(path, route)| view! {
                            <A href=*path class="role-button">{route.title()}</A>
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
