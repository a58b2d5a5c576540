pub mod client;
pub mod controller;
pub mod logger;
pub mod slave;
pub mod sync;

pub use client::{ApiClient, ApiError};
pub use sync::{provide_server_link, use_server_link, watch_connection, ServerLink, SyncError};
