use leptos::*;

use crate::api::{use_server_link, SyncError};
use crate::store::use_store;

/// Master power operations on the central unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PowerCommand {
    PowerOn,
    SendParameters,
    StartUp,
    ShutDown,
}

/// Server view: power the central unit on, send it the stored parameters,
/// start serving and shut it down
#[component]
pub fn Server() -> impl IntoView {
    let store = use_store();
    let link = use_server_link();

    let run = create_action(move |command: &PowerCommand| {
        let command = *command;
        async move {
            let result: Result<(), SyncError> = match command {
                PowerCommand::PowerOn => link.power_on().await,
                PowerCommand::SendParameters => link.resend_parameters().await,
                PowerCommand::StartUp => link.start_up().await,
                PowerCommand::ShutDown => link.shut_down().await,
            };
            result
        }
    });

    let powered = move || store.with(|p| p.power_state);
    let pending = run.pending();

    let last_sync = move || {
        store
            .last_sync
            .get()
            .map(|ts| ts.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "never".to_string())
    };

    view! {
        <div class="server-page">
            <h2>"Central unit"</h2>
            <div class="card">
                <div class="setting-item">
                    <span class="setting-label">"Power"</span>
                    <span class="setting-value setting-badge">
                        {move || if powered() { "On" } else { "Off" }}
                    </span>
                </div>
                <div class="setting-item">
                    <span class="setting-label">"Last contact"</span>
                    <span class="setting-value">{last_sync}</span>
                </div>
            </div>

            <div class="power-controls">
                <button
                    on:click=move |_| run.dispatch(PowerCommand::PowerOn)
                    disabled=move || pending.get() || powered()
                >
                    "Power on"
                </button>
                <button
                    on:click=move |_| run.dispatch(PowerCommand::SendParameters)
                    disabled=move || pending.get() || !powered()
                >
                    "Send parameters"
                </button>
                <button
                    on:click=move |_| run.dispatch(PowerCommand::StartUp)
                    disabled=move || pending.get() || !powered()
                >
                    "Start"
                </button>
                <button
                    on:click=move |_| run.dispatch(PowerCommand::ShutDown)
                    disabled=move || pending.get() || !powered()
                >
                    "Shut down"
                </button>
            </div>

            {move || run.value().get().and_then(|result| result.err()).map(|e| view! {
                <div class="error-banner">{e.to_string()}</div>
            })}
        </div>
    }
}
