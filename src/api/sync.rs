use chrono::NaiveDate;
use leptos::*;
use serde_json::Value;
use thiserror::Error;

use super::client::{ApiClient, ApiError};
use super::slave::fee_from;
use crate::models::{DetailRecord, Invoice, ParameterSet, ReportKind, RoomCommand, RoomReport};
use crate::store::{ParameterStore, StoreCommand, StoreContext, StoreError};

/// Failure to bring the store and the backend in line
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SyncError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("Cannot synchronize: {0} is not set")]
    Incomplete(&'static str),
    #[error("Reply from {0} ignored, the server address has changed")]
    AddressChanged(String),
}

/// Backend operations that keep the store in step with the server
#[derive(Clone, Copy)]
pub struct ServerLink {
    store: StoreContext,
}

impl ServerLink {
    pub fn new(store: StoreContext) -> Self {
        Self { store }
    }

    /// Client for the configured server address
    fn client(&self) -> Result<ApiClient, SyncError> {
        let address = self.current_address();
        if address.is_empty() {
            return Err(StoreError::NoServerAddress.into());
        }
        Ok(ApiClient::new(address))
    }

    fn current_address(&self) -> String {
        self.store
            .with_untracked(|s| s.snapshot().server_address.clone())
    }

    /// Record the outcome of a call made through `client` on the connection flag.
    /// Replies from an address that is no longer configured leave the store alone.
    fn track<T>(&self, client: &ApiClient, result: Result<T, ApiError>) -> Result<T, SyncError> {
        if client.base_url() != self.current_address() {
            log::debug!("sync: dropping stale reply from {}", client.base_url());
            return Err(SyncError::AddressChanged(client.base_url().to_string()));
        }

        match result {
            Ok(value) => {
                self.store.record_sync(true);
                Ok(value)
            }
            // The server answered, it just refused the request
            Err(ApiError::Rejected(message)) => {
                self.store.record_sync(true);
                Err(ApiError::Rejected(message).into())
            }
            Err(e) => {
                log::error!("sync: {}", e);
                self.store.record_sync(false);
                Err(e.into())
            }
        }
    }

    /// Ask the backend for room state and update the connection flag
    pub async fn check_connection(&self) -> Result<(), SyncError> {
        let client = self.client()?;
        let result = client.check_room_state().await;
        self.track(&client, result).map(|_| ())
    }

    /// Send a parameter set to the backend, then apply it to the store.
    /// The store only changes once the server has accepted the set.
    pub async fn push_parameters(&self, set: ParameterSet) -> Result<(), SyncError> {
        ParameterStore::check_parameters(set)?;
        let client = self.client()?;

        let result = client.init_param(&set).await;
        self.apply_pushed(&client, set, result)
    }

    /// Send the parameters already held by the store again
    pub async fn resend_parameters(&self) -> Result<(), SyncError> {
        let set = self
            .store
            .with_untracked(|s| s.parameter_set())
            .map_err(SyncError::Incomplete)?;
        self.push_parameters(set).await
    }

    fn apply_pushed(
        &self,
        client: &ApiClient,
        set: ParameterSet,
        result: Result<(), ApiError>,
    ) -> Result<(), SyncError> {
        self.track(client, result)?;
        self.store.dispatch(StoreCommand::ApplyParameters(set))?;
        log::info!("sync: parameters pushed to {}", client.base_url());
        Ok(())
    }

    /// Power the central unit on and mark it powered in the store
    pub async fn power_on(&self) -> Result<(), SyncError> {
        let client = self.client()?;
        let result = client.power_on().await;
        self.track(&client, result)?;
        self.store.dispatch(StoreCommand::SetPower(true))?;
        Ok(())
    }

    /// Start serving rooms
    pub async fn start_up(&self) -> Result<(), SyncError> {
        let client = self.client()?;
        let result = client.start_up().await;
        self.track(&client, result)
    }

    /// Shut the central unit down and mark it off in the store
    pub async fn shut_down(&self) -> Result<(), SyncError> {
        let client = self.client()?;
        let result = client.close().await;
        self.track(&client, result)?;
        self.store.dispatch(StoreCommand::SetPower(false))?;
        Ok(())
    }

    /// Send a request on behalf of a room
    pub async fn room(&self, room_id: &str, command: RoomCommand) -> Result<Option<Value>, SyncError> {
        let room_id = room_id_of(room_id)?;
        if let RoomCommand::ChangeTemperature(target) = command {
            self.store
                .with_untracked(|s| s.check_target_temperature(target))?;
        }
        let client = self.client()?;

        let result = client.room_request(room_id, command).await;
        let value = self.track(&client, result)?;
        log::debug!("sync: room {} {} accepted", room_id, command.name());
        Ok(value)
    }

    /// Fee accumulated by a room so far
    pub async fn room_fee(&self, room_id: &str) -> Result<f64, SyncError> {
        let result = self.room(room_id, RoomCommand::RequestFee).await?;
        Ok(fee_from(result)?)
    }

    /// Bill for a room's stay
    pub async fn invoice(&self, room_id: &str) -> Result<Invoice, SyncError> {
        let room_id = room_id_of(room_id)?;
        let client = self.client()?;
        let result = client.query_invoice(room_id).await;
        self.track(&client, result)
    }

    /// Detail records for a room's stay
    pub async fn detail_records(&self, room_id: &str) -> Result<Vec<DetailRecord>, SyncError> {
        let room_id = room_id_of(room_id)?;
        let client = self.client()?;
        let result = client.query_rdr(room_id).await;
        self.track(&client, result)
    }

    /// Usage report for a room
    pub async fn report(
        &self,
        room_id: &str,
        kind: ReportKind,
        date: NaiveDate,
    ) -> Result<RoomReport, SyncError> {
        let room_id = room_id_of(room_id)?;
        let client = self.client()?;
        let result = client.query_report(room_id, kind, date).await;
        self.track(&client, result)
    }
}

fn room_id_of(raw: &str) -> Result<&str, SyncError> {
    let room_id = raw.trim();
    if room_id.is_empty() {
        return Err(SyncError::Incomplete("room id"));
    }
    Ok(room_id)
}

/// Provide the server link to the application
pub fn provide_server_link(store: StoreContext) -> ServerLink {
    let link = ServerLink::new(store);
    provide_context(link);
    link
}

/// Hook to access the server link
pub fn use_server_link() -> ServerLink {
    use_context::<ServerLink>().expect("ServerLink must be provided by a parent component")
}

/// Re-check the connection on an interval while a server address is set
pub fn watch_connection(link: ServerLink, interval_ms: u32) {
    #[cfg(target_arch = "wasm32")]
    {
        use gloo_timers::callback::Interval;

        let interval = Interval::new(interval_ms, move || {
            if !link.current_address().is_empty() {
                wasm_bindgen_futures::spawn_local(async move {
                    // Failures are already recorded on the store
                    let _ = link.check_connection().await;
                });
            }
        });

        on_cleanup(move || drop(interval));
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (link, interval_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FanSpeed, FeeSchedule, Mode, TemperatureRange};
    use futures::executor::block_on;

    const ADDRESS: &str = "http://10.0.0.5:8000";

    fn manager_set() -> ParameterSet {
        ParameterSet {
            temperature_range: TemperatureRange { min: 18.0, max: 25.0 },
            fee_schedule: FeeSchedule { low: 1.0, medium: 2.0, high: 3.0 },
            default_temperature: 22.0,
            default_fan_speed: FanSpeed::Medium,
            mode: Mode::Cooling,
        }
    }

    /// Link whose store points at `ADDRESS` and is connected
    fn connected_link() -> (StoreContext, ServerLink) {
        let store = StoreContext::new();
        store
            .dispatch(StoreCommand::SetServerAddress(ADDRESS.into()))
            .unwrap();
        store.record_sync(true);
        assert!(store.snapshot().is_server_connected);
        (store, ServerLink::new(store))
    }

    #[test]
    fn resend_requires_complete_parameters() {
        let runtime = create_runtime();
        let link = ServerLink::new(StoreContext::new());

        let result = block_on(link.resend_parameters());
        assert_eq!(result, Err(SyncError::Incomplete("temperature range")));

        runtime.dispose();
    }

    #[test]
    fn invalid_set_is_refused_before_sending() {
        let runtime = create_runtime();
        let (store, link) = connected_link();
        let before = store.snapshot();

        let mut set = manager_set();
        set.fee_schedule = FeeSchedule { low: 3.0, medium: 2.0, high: 1.0 };
        let result = block_on(link.push_parameters(set));

        assert_eq!(result, Err(SyncError::Store(StoreError::UnorderedFees)));
        assert_eq!(store.snapshot(), before);

        runtime.dispose();
    }

    #[test]
    fn calls_require_server_address() {
        let runtime = create_runtime();
        let link = ServerLink::new(StoreContext::new());

        let result = block_on(link.check_connection());
        assert_eq!(result, Err(SyncError::Store(StoreError::NoServerAddress)));

        let result = block_on(link.push_parameters(manager_set()));
        assert_eq!(result, Err(SyncError::Store(StoreError::NoServerAddress)));

        runtime.dispose();
    }

    #[test]
    fn failed_push_leaves_store_unchanged() {
        let runtime = create_runtime();
        let (store, link) = connected_link();
        let client = link.client().unwrap();

        let result = link.apply_pushed(
            &client,
            manager_set(),
            Err(ApiError::Rejected("central unit is off".into())),
        );
        assert_eq!(
            result,
            Err(SyncError::Api(ApiError::Rejected("central unit is off".into())))
        );
        assert_eq!(store.snapshot().temperature_range, None);
        assert_eq!(store.snapshot().mode, None);

        let result = link.apply_pushed(&client, manager_set(), Err(ApiError::Network("down".into())));
        assert!(result.is_err());
        assert_eq!(store.snapshot().fee_schedule, None);

        runtime.dispose();
    }

    #[test]
    fn accepted_push_applies_set() {
        let runtime = create_runtime();
        let (store, link) = connected_link();
        let client = link.client().unwrap();

        assert_eq!(link.apply_pushed(&client, manager_set(), Ok(())), Ok(()));
        assert_eq!(store.with_untracked(|s| s.parameter_set()), Ok(manager_set()));

        runtime.dispose();
    }

    #[test]
    fn network_failure_drops_connection() {
        let runtime = create_runtime();
        let (store, link) = connected_link();
        let synced = store.last_sync.get_untracked();
        let client = link.client().unwrap();

        let result = link.track::<()>(&client, Err(ApiError::Network("connection refused".into())));

        assert_eq!(
            result,
            Err(SyncError::Api(ApiError::Network("connection refused".into())))
        );
        assert!(!store.snapshot().is_server_connected);
        assert_eq!(store.last_sync.get_untracked(), synced);

        runtime.dispose();
    }

    #[test]
    fn http_failure_drops_connection() {
        let runtime = create_runtime();
        let (store, link) = connected_link();
        let synced = store.last_sync.get_untracked();
        let client = link.client().unwrap();

        let failure = ApiError::Http { status: 502, message: "Bad Gateway".into() };
        assert!(link.track::<()>(&client, Err(failure)).is_err());

        assert!(!store.snapshot().is_server_connected);
        assert_eq!(store.last_sync.get_untracked(), synced);

        runtime.dispose();
    }

    #[test]
    fn rejection_keeps_connection() {
        let runtime = create_runtime();
        let (store, link) = connected_link();
        store.last_sync.set(None);
        let client = link.client().unwrap();

        let result = link.track::<()>(&client, Err(ApiError::Rejected("room not checked in".into())));

        assert_eq!(
            result,
            Err(SyncError::Api(ApiError::Rejected("room not checked in".into())))
        );
        assert!(store.snapshot().is_server_connected);
        assert!(store.last_sync.get_untracked().is_some());

        runtime.dispose();
    }

    #[test]
    fn reply_from_previous_address_is_ignored() {
        let runtime = create_runtime();
        let store = StoreContext::new();
        let link = ServerLink::new(store);

        store
            .dispatch(StoreCommand::SetServerAddress("http://10.0.0.1:8000".into()))
            .unwrap();
        let old_client = link.client().unwrap();
        store
            .dispatch(StoreCommand::SetServerAddress("http://10.0.0.2:8000".into()))
            .unwrap();

        let result = link.track(&old_client, Ok(()));

        assert_eq!(
            result,
            Err(SyncError::AddressChanged("http://10.0.0.1:8000".into()))
        );
        assert!(!store.snapshot().is_server_connected);
        assert_eq!(store.last_sync.get_untracked(), None);

        // A stale failure must not drop a connection made through the new address
        store.record_sync(true);
        assert!(link
            .track::<()>(&old_client, Err(ApiError::Network("timeout".into())))
            .is_err());
        assert!(store.snapshot().is_server_connected);

        runtime.dispose();
    }

    #[test]
    fn stale_push_is_not_applied() {
        let runtime = create_runtime();
        let (store, link) = connected_link();
        let old_client = link.client().unwrap();
        store
            .dispatch(StoreCommand::SetServerAddress("http://10.0.0.9:8000".into()))
            .unwrap();

        let result = link.apply_pushed(&old_client, manager_set(), Ok(()));

        assert_eq!(result, Err(SyncError::AddressChanged(ADDRESS.into())));
        assert_eq!(store.snapshot().temperature_range, None);

        runtime.dispose();
    }

    #[test]
    fn room_requests_are_checked_before_sending() {
        let runtime = create_runtime();
        let (store, link) = connected_link();
        store
            .dispatch(StoreCommand::ApplyParameters(manager_set()))
            .unwrap();

        let result = block_on(link.room("  ", RoomCommand::CheckIn));
        assert_eq!(result, Err(SyncError::Incomplete("room id")));

        let result = block_on(link.room("309c", RoomCommand::ChangeTemperature(30.0)));
        assert_eq!(
            result,
            Err(SyncError::Store(StoreError::OutsideRange { value: 30.0, min: 18.0, max: 25.0 }))
        );

        let result = block_on(link.invoice(""));
        assert_eq!(result, Err(SyncError::Incomplete("room id")));

        runtime.dispose();
    }
}
