// Integration tests for the air-con controller client
// These exercise the store, router and backend envelope handling through the
// public API without a browser.

use aircon_web_leptos::api::client::{decode_envelope, envelope_result};
use aircon_web_leptos::api::controller::init_param_query;
use aircon_web_leptos::api::slave::{fee_from, room_query};
use aircon_web_leptos::api::ApiError;
use aircon_web_leptos::claim_start;
use aircon_web_leptos::models::{
    DetailRecord, FanSpeed, FeeSchedule, Invoice, Mode, OperatingParameters, ParameterSet,
    RoomCommand, TemperatureRange,
};
use aircon_web_leptos::router::{Navigator, Route, ROUTES};
use aircon_web_leptos::store::{ParameterStore, StoreCommand, StoreError};

fn manager_set() -> ParameterSet {
    ParameterSet {
        temperature_range: TemperatureRange { min: 18.0, max: 25.0 },
        fee_schedule: FeeSchedule { low: 1.0, medium: 2.0, high: 3.0 },
        default_temperature: 22.0,
        default_fan_speed: FanSpeed::Medium,
        mode: Mode::Cooling,
    }
}

#[test]
fn test_initial_snapshot_matches_defaults() {
    let store = ParameterStore::new();
    let params = store.snapshot();

    assert!(!params.power_state);
    assert!(!params.is_server_connected);
    assert_eq!(params.server_address, "");
    assert_eq!(params, &OperatingParameters::default());
}

#[test]
fn test_routes_table_resolves_each_view() {
    let table = [
        ("/", Route::Initpage),
        ("/room", Route::Room),
        ("/reception", Route::Reception),
        ("/manager", Route::Manager),
        ("/server", Route::Server),
        ("/about", Route::About),
    ];

    assert_eq!(ROUTES.len(), table.len());
    for (path, route) in table {
        let matches: Vec<_> = ROUTES.iter().filter(|(p, _)| *p == path).collect();
        assert_eq!(matches.len(), 1, "{path} must appear exactly once");
        assert_eq!(Route::resolve(path), route);
    }
    assert_eq!(Route::resolve("/billing"), Route::NotFound);
}

#[test]
fn test_about_loads_once_across_navigation() {
    let navigator = Navigator::new();

    for path in ["/", "/about", "/manager", "/about", "/missing", "/about"] {
        // Mounting the About view is what reads its content
        if navigator.navigate(path) == Route::About {
            assert!(!navigator.about().views.is_empty());
        }
    }

    assert_eq!(navigator.about_loads(), 1);
    assert_eq!(navigator.current(), Route::About);
}

#[test]
fn test_manager_flow_produces_backend_query() {
    let mut store = ParameterStore::new();
    store
        .dispatch(StoreCommand::SetServerAddress("http://10.0.0.5:8000/".into()))
        .unwrap();
    store
        .dispatch(StoreCommand::ApplyParameters(manager_set()))
        .unwrap();

    let set = store.parameter_set().unwrap();
    let query = init_param_query(&set);

    assert_eq!(store.snapshot().server_address, "http://10.0.0.5:8000");
    assert!(query.contains(&("mode", "0".to_string())));
    assert!(query.contains(&("default_speed", "1".to_string())));
    assert!(query.contains(&("highest_temper", "25".to_string())));
}

#[test]
fn test_rejected_updates_keep_previous_values() {
    let mut store = ParameterStore::new();
    store
        .dispatch(StoreCommand::ApplyParameters(manager_set()))
        .unwrap();
    let before = store.snapshot().clone();

    let result = store.dispatch(StoreCommand::SetFeeSchedule { low: 3.0, medium: 2.0, high: 1.0 });
    assert_eq!(result, Err(StoreError::UnorderedFees));

    let result = store.dispatch(StoreCommand::SetDefaultTemperature(12.0));
    assert!(matches!(result, Err(StoreError::OutsideRange { .. })));

    assert_eq!(store.snapshot(), &before);
}

#[test]
fn test_backend_error_message_is_surfaced() {
    let body = r#""{\"message\": \"parameters not set\"}""#;
    let envelope = decode_envelope(body).unwrap();

    let result: Result<Option<serde_json::Value>, ApiError> = envelope_result(envelope);
    assert_eq!(result, Err(ApiError::Rejected("parameters not set".into())));
}

#[test]
fn test_billing_replies_decode_into_models() {
    let body = r#"{"message": "OK", "result": {"room_id": "310c",
        "check_in_time": "2026-10-18 09:00:00", "check_out_time": "2026-10-19 11:15:30",
        "fee": 42.75}}"#;
    let invoice: Invoice = envelope_result(decode_envelope(body).unwrap())
        .unwrap()
        .expect("invoice result");
    assert_eq!(invoice.room_id, "310c");
    assert_eq!(invoice.fee, 42.75);
    assert!(invoice.check_out_time > invoice.check_in_time);

    let body = concat!(
        r#""{\"message\": \"OK\", \"result\": [{\"room_id\": \"310c\", "#,
        r#"\"start_time\": \"2026-10-18 09:00:00\", \"end_time\": \"2026-10-18 09:30:00\", "#,
        r#"\"speed\": 2, \"fee_rate\": 1.5, \"fee\": 45.0}]}""#,
    );
    let records: Vec<DetailRecord> = envelope_result(decode_envelope(body).unwrap())
        .unwrap()
        .unwrap_or_default();
    assert_eq!(records.len(), 1);
    assert_eq!(FanSpeed::from_i32(records[0].speed), Some(FanSpeed::High));
}

#[test]
fn test_room_requests_carry_room_id() {
    let query = room_query("312c", RoomCommand::PowerOn { current_temperature: 28.0 });
    assert_eq!(query[0], ("room_id", "312c".to_string()));
    assert_eq!(query[1], ("current_temper", "28".to_string()));
    assert_eq!(RoomCommand::RequestFee.name(), "request_fee");

    let body = r#""{\"message\": \"OK\", \"result\": 6.5}""#;
    let result = envelope_result(decode_envelope(body).unwrap()).unwrap();
    assert_eq!(fee_from(result), Ok(6.5));
}

#[test]
fn test_start_can_only_be_claimed_once() {
    assert!(claim_start());
    assert!(!claim_start());
}
