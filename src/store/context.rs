use chrono::{DateTime, Utc};
use leptos::*;

use crate::models::OperatingParameters;

use super::command::{StoreCommand, StoreError};
use super::parameter_store::ParameterStore;

/// Store handle shared with every view through context
#[derive(Clone, Copy)]
pub struct StoreContext {
    store: RwSignal<ParameterStore>,
    /// Time of the last successful exchange with the backend
    pub last_sync: RwSignal<Option<DateTime<Utc>>>,
}

impl StoreContext {
    pub fn new() -> Self {
        Self {
            store: create_rw_signal(ParameterStore::new()),
            last_sync: create_rw_signal(None),
        }
    }

    /// Tracked copy of the current parameters
    pub fn snapshot(&self) -> OperatingParameters {
        self.store.with(|s| s.snapshot().clone())
    }

    /// Read parameters without cloning; tracked when called inside a reactive scope
    pub fn with<R>(&self, f: impl FnOnce(&OperatingParameters) -> R) -> R {
        self.store.with(|s| f(s.snapshot()))
    }

    /// Read parameters without subscribing
    pub fn with_untracked<R>(&self, f: impl FnOnce(&ParameterStore) -> R) -> R {
        self.store.with_untracked(f)
    }

    /// Apply a command; subscribers are only notified when it is accepted
    pub fn dispatch(&self, command: StoreCommand) -> Result<(), StoreError> {
        let name = command.name();
        let mut next = self.store.get_untracked();

        match next.dispatch(command) {
            Ok(()) => {
                log::debug!("store: {} applied", name);
                self.store.set(next);
                Ok(())
            }
            Err(e) => {
                log::warn!("store: {} rejected: {}", name, e);
                Err(e)
            }
        }
    }

    /// Record the outcome of a backend exchange
    pub fn record_sync(&self, connected: bool) {
        // Dropping the connection is always valid; connecting needs an address
        if self.dispatch(StoreCommand::SetServerConnected(connected)).is_ok() && connected {
            self.last_sync.set(Some(Utc::now()));
        }
    }
}

impl Default for StoreContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide the store to the application.
/// Call this once at the root of the app.
pub fn provide_store_context() -> StoreContext {
    let store = StoreContext::new();
    provide_context(store);
    store
}

/// Hook to access the store
pub fn use_store() -> StoreContext {
    use_context::<StoreContext>().expect("StoreContext must be provided by a parent component")
}
