mod command;
mod context;
mod parameter_store;

pub use command::{StoreCommand, StoreError};
pub use context::{provide_store_context, use_store, StoreContext};
pub use parameter_store::ParameterStore;
