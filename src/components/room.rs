use leptos::*;

use crate::api::{use_server_link, SyncError};
use crate::models::{FanSpeed, RoomCommand};
use crate::store::{use_store, StoreCommand};

use super::format_value;

/// Room view: a room's unit checks in, runs and reports its fee
#[component]
pub fn Room() -> impl IntoView {
    let store = use_store();
    let link = use_server_link();

    let (room_id, set_room_id) = create_signal(String::new());
    let (reading, set_reading) = create_signal(String::new());
    let (target, set_target) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);

    let request = create_action(move |(room, command): &(String, RoomCommand)| {
        let room = room.clone();
        let command = *command;
        async move { link.room(&room, command).await.map(|_| command) }
    });
    let fee = create_action(move |room: &String| {
        let room = room.clone();
        async move { link.room_fee(&room).await }
    });

    let send = move |command: RoomCommand| {
        set_error.set(None);
        request.dispatch((room_id.get_untracked(), command));
    };

    let report = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let result = parse_temperature(&reading.get_untracked()).and_then(|value| {
            store
                .dispatch(StoreCommand::SetCurrentTemperature(value))
                .map_err(|e| e.to_string())
        });
        set_error.set(result.err());
    };

    let power_on = move |_| match store.with_untracked(|s| s.snapshot().current_temperature) {
        Some(current_temperature) => send(RoomCommand::PowerOn { current_temperature }),
        None => set_error.set(Some(SyncError::Incomplete("current temperature").to_string())),
    };

    let change_temperature = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match parse_temperature(&target.get_untracked()) {
            Ok(value) => send(RoomCommand::ChangeTemperature(value)),
            Err(message) => set_error.set(Some(message)),
        }
    };

    let status = move || match request.value().get() {
        Some(Ok(command)) => view! {
            <div class="info-box">{command.name()}" accepted"</div>
        }
        .into_view(),
        Some(Err(e)) => view! { <div class="error-banner">{e.to_string()}</div> }.into_view(),
        None => ().into_view(),
    };

    let fee_text = move || match fee.value().get() {
        Some(Ok(total)) => format_value(total),
        Some(Err(e)) => e.to_string(),
        None => "N/A".to_string(),
    };

    let busy = move || request.pending().get() || fee.pending().get();

    view! {
        <div class="room-page">
            <h2>"Room"</h2>
            <div class="card">
                <label class="setting-item">
                    <span class="setting-label">"Room id"</span>
                    <input
                        type="text"
                        placeholder="309c"
                        prop:value=room_id
                        on:input=move |ev| set_room_id.set(event_target_value(&ev))
                    />
                </label>
                <div class="setting-item">
                    <span class="setting-label">"Central unit"</span>
                    <span class="setting-value">
                        {move || if store.with(|p| p.power_state) { "On" } else { "Off" }}
                    </span>
                </div>
                <div class="setting-item">
                    <span class="setting-label">"Mode"</span>
                    <span class="setting-value setting-badge">
                        {move || store.with(|p| p.mode.map(|m| m.as_str()).unwrap_or("N/A"))}
                    </span>
                </div>
                <div class="setting-item">
                    <span class="setting-label">"Current temperature"</span>
                    <span class="setting-value">
                        {move || store.with(|p| {
                            p.current_temperature
                                .map(|t| format!("{}°C", format_value(t)))
                                .unwrap_or_else(|| "N/A".to_string())
                        })}
                    </span>
                </div>
                <div class="setting-item">
                    <span class="setting-label">"Allowed range"</span>
                    <span class="setting-value">
                        {move || store.with(|p| {
                            p.temperature_range
                                .map(|r| format!("{}°C - {}°C", format_value(r.min), format_value(r.max)))
                                .unwrap_or_else(|| "N/A".to_string())
                        })}
                    </span>
                </div>
                <div class="setting-item">
                    <span class="setting-label">"Fee so far"</span>
                    <span class="setting-value">{fee_text}</span>
                </div>
            </div>

            <div class="room-controls">
                <button on:click=move |_| send(RoomCommand::CheckIn) disabled=busy>"Check in"</button>
                <button on:click=power_on disabled=busy>"Power on"</button>
                <button on:click=move |_| send(RoomCommand::PowerOff) disabled=busy>"Power off"</button>
                <button
                    on:click=move |_| {
                        set_error.set(None);
                        fee.dispatch(room_id.get_untracked());
                    }
                    disabled=busy
                >
                    "Refresh fee"
                </button>
                <button on:click=move |_| send(RoomCommand::CheckOut) disabled=busy>"Check out"</button>
            </div>

            <form class="report-form" on:submit=report>
                <label for="room-temperature">"Room temperature (°C)"</label>
                <input
                    id="room-temperature"
                    type="number"
                    step="0.1"
                    prop:value=reading
                    on:input=move |ev| set_reading.set(event_target_value(&ev))
                />
                <button type="submit">"Report"</button>
            </form>

            <form class="target-form" on:submit=change_temperature>
                <label for="target-temperature">"Target temperature (°C)"</label>
                <input
                    id="target-temperature"
                    type="number"
                    step="0.5"
                    prop:value=target
                    on:input=move |ev| set_target.set(event_target_value(&ev))
                />
                <button type="submit" disabled=busy>"Set"</button>
            </form>

            <label class="setting-item">
                <span class="setting-label">"Fan speed"</span>
                <select on:change=move |ev| {
                    let speed = event_target_value(&ev)
                        .parse()
                        .ok()
                        .and_then(FanSpeed::from_i32);
                    if let Some(speed) = speed {
                        send(RoomCommand::ChangeSpeed(speed));
                    }
                }>
                    {FanSpeed::ALL
                        .iter()
                        .map(|speed| {
                            let speed = *speed;
                            view! {
                                <option
                                    value=speed.as_i32().to_string()
                                    selected=move || store.with(|p| p.default_fan_speed == Some(speed))
                                >
                                    {move || store.with(|p| match p.fee_schedule {
                                        Some(fees) => format!(
                                            "{} ({} / min)",
                                            speed.as_str(),
                                            format_value(fees.rate_for(speed))
                                        ),
                                        None => speed.as_str().to_string(),
                                    })}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>

            {move || error.get().map(|message| view! {
                <div class="error-banner">{message}</div>
            })}
            {status}
        </div>
    }
}

fn parse_temperature(raw: &str) -> Result<f64, String> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| "Temperature must be a number".to_string())
}
