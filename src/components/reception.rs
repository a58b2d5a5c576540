use chrono::{NaiveDate, NaiveDateTime, Utc};
use leptos::*;

use crate::api::{use_server_link, SyncError};
use crate::models::{DetailRecord, FanSpeed, Invoice, ReportKind, RoomReport};
use crate::store::use_store;

use super::format_value;

/// Reception view: fee tiers, invoices, detail records and usage reports by room
#[component]
pub fn Reception() -> impl IntoView {
    let store = use_store();
    let link = use_server_link();

    let (room_id, set_room_id) = create_signal(String::new());
    let (kind, set_kind) = create_signal(ReportKind::default());
    let (date, set_date) = create_signal(Utc::now().date_naive().format("%Y-%m-%d").to_string());

    let invoice = create_action(move |room: &String| {
        let room = room.clone();
        async move { link.invoice(&room).await }
    });
    let records = create_action(move |room: &String| {
        let room = room.clone();
        async move { link.detail_records(&room).await }
    });
    let report = create_action(move |(room, kind, date): &(String, ReportKind, String)| {
        let (room, kind, date) = (room.clone(), *kind, date.clone());
        async move {
            let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
                .map_err(|_| SyncError::Incomplete("report date"))?;
            link.report(&room, kind, date).await
        }
    });

    let busy = move || invoice.pending().get() || records.pending().get() || report.pending().get();

    view! {
        <div class="reception-page">
            <h2>"Reception"</h2>
            {move || match store.with(|p| p.fee_schedule) {
                Some(fees) => view! {
                    <div class="card">
                        <h3>"Fee schedule"</h3>
                        {FanSpeed::ALL
                            .iter()
                            .map(|speed| view! {
                                <div class="setting-item">
                                    <span class="setting-label">{speed.as_str()}</span>
                                    <span class="setting-value">
                                        {format_value(fees.rate_for(*speed))}" / min"
                                    </span>
                                </div>
                            })
                            .collect_view()}
                    </div>
                }.into_view(),
                None => view! {
                    <div class="no-data">"Fees are not configured yet"</div>
                }.into_view(),
            }}

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
                <div class="reception-controls">
                    <button
                        on:click=move |_| invoice.dispatch(room_id.get_untracked())
                        disabled=busy
                    >
                        "Invoice"
                    </button>
                    <button
                        on:click=move |_| records.dispatch(room_id.get_untracked())
                        disabled=busy
                    >
                        "Detail records"
                    </button>
                </div>
                <div class="report-controls">
                    <select on:change=move |ev| {
                        if let Some(k) = ReportKind::from_query(&event_target_value(&ev)) {
                            set_kind.set(k);
                        }
                    }>
                        {ReportKind::ALL
                            .iter()
                            .map(|k| {
                                let k = *k;
                                view! {
                                    <option value=k.as_query() selected=move || kind.get() == k>
                                        {k.as_str()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                    <input
                        type="date"
                        prop:value=date
                        on:input=move |ev| set_date.set(event_target_value(&ev))
                    />
                    <button
                        on:click=move |_| report.dispatch((
                            room_id.get_untracked(),
                            kind.get_untracked(),
                            date.get_untracked(),
                        ))
                        disabled=busy
                    >
                        "Report"
                    </button>
                </div>
            </div>

            {move || invoice.value().get().map(|result| match result {
                Ok(invoice) => view! { <InvoiceCard invoice=invoice /> }.into_view(),
                Err(e) => view! { <div class="error-banner">{e.to_string()}</div> }.into_view(),
            })}
            {move || records.value().get().map(|result| match result {
                Ok(records) => view! { <DetailTable records=records /> }.into_view(),
                Err(e) => view! { <div class="error-banner">{e.to_string()}</div> }.into_view(),
            })}
            {move || report.value().get().map(|result| match result {
                Ok(report) => view! { <ReportCard report=report /> }.into_view(),
                Err(e) => view! { <div class="error-banner">{e.to_string()}</div> }.into_view(),
            })}
        </div>
    }
}

#[component]
fn InvoiceCard(invoice: Invoice) -> impl IntoView {
    view! {
        <div class="card invoice">
            <h3>"Invoice for room "{invoice.room_id}</h3>
            <div class="setting-item">
                <span class="setting-label">"Checked in"</span>
                <span class="setting-value">{time_text(invoice.check_in_time)}</span>
            </div>
            <div class="setting-item">
                <span class="setting-label">"Checked out"</span>
                <span class="setting-value">{time_text(invoice.check_out_time)}</span>
            </div>
            <div class="setting-item">
                <span class="setting-label">"Total"</span>
                <span class="setting-value">{format!("{:.2}", invoice.fee)}</span>
            </div>
        </div>
    }
}

#[component]
fn DetailTable(records: Vec<DetailRecord>) -> impl IntoView {
    if records.is_empty() {
        return view! { <div class="no-data">"No detail records"</div> }.into_view();
    }

    view! {
        <table class="detail-records">
            <thead>
                <tr>
                    <th>"Start"</th>
                    <th>"End"</th>
                    <th>"Speed"</th>
                    <th>"Rate"</th>
                    <th>"Fee"</th>
                </tr>
            </thead>
            <tbody>
                {records
                    .into_iter()
                    .map(|r| view! {
                        <tr>
                            <td>{time_text(r.start_time)}</td>
                            <td>{time_text(r.end_time)}</td>
                            <td>{FanSpeed::from_i32(r.speed).map(|s| s.as_str()).unwrap_or("Unknown")}</td>
                            <td>{format_value(r.fee_rate)}</td>
                            <td>{format!("{:.2}", r.fee)}</td>
                        </tr>
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
    .into_view()
}

#[component]
fn ReportCard(report: RoomReport) -> impl IntoView {
    let rows = [
        ("Power on/off", report.on_off_times.to_string()),
        ("Service time", format_value(report.service_time)),
        ("Fee", format!("{:.2}", report.fee)),
        ("Dispatches", report.dispatch_time.to_string()),
        ("Detail records", report.rdr_number.to_string()),
        ("Temperature changes", report.change_temp_times.to_string()),
        ("Speed changes", report.change_speed_times.to_string()),
    ];

    view! {
        <div class="card report">
            <h3>"Report for room "{report.room_id}</h3>
            {rows
                .into_iter()
                .map(|(label, value)| view! {
                    <div class="setting-item">
                        <span class="setting-label">{label}</span>
                        <span class="setting-value">{value}</span>
                    </div>
                })
                .collect_view()}
        </div>
    }
}

fn time_text(time: Option<NaiveDateTime>) -> String {
    time.map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn times_drop_seconds_and_missing_shows_dash() {
        let time = NaiveDate::from_ymd_opt(2026, 10, 1)
            .and_then(|d| d.and_hms_opt(8, 30, 15));
        assert_eq!(time_text(time), "2026-10-01 08:30");
        assert_eq!(time_text(None), "-");
    }
}
