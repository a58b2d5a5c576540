use serde_json::Value;

use super::client::{ApiClient, ApiError};
use crate::models::ParameterSet;

const CHECK_ROOM_STATE: &str = "/controller/check_room_state";
const INIT_PARAM: &str = "/controller/init_param";
const POWER_ON: &str = "/controller/power_on";
const START_UP: &str = "/controller/start_up";
const CLOSE: &str = "/controller/close";

impl ApiClient {
    /// Get the state of every room; also serves as the connection check
    pub async fn check_room_state(&self) -> Result<Option<Value>, ApiError> {
        self.get(CHECK_ROOM_STATE, &[]).await
    }

    /// Push the manager's parameter set to the central unit
    pub async fn init_param(&self, set: &ParameterSet) -> Result<(), ApiError> {
        self.get::<Value>(INIT_PARAM, &init_param_query(set))
            .await
            .map(|_| ())
    }

    /// Power on the central unit
    pub async fn power_on(&self) -> Result<(), ApiError> {
        self.get::<Value>(POWER_ON, &[]).await.map(|_| ())
    }

    /// Start serving rooms after parameters are set
    pub async fn start_up(&self) -> Result<(), ApiError> {
        self.get::<Value>(START_UP, &[]).await.map(|_| ())
    }

    /// Shut the central unit down
    pub async fn close(&self) -> Result<(), ApiError> {
        self.get::<Value>(CLOSE, &[]).await.map(|_| ())
    }
}

/// Query parameters for the init_param endpoint
pub fn init_param_query(set: &ParameterSet) -> Vec<(&'static str, String)> {
    vec![
        ("highest_temper", set.temperature_range.max.to_string()),
        ("lowest_temper", set.temperature_range.min.to_string()),
        ("low_speed_fee", set.fee_schedule.low.to_string()),
        ("middle_speed_fee", set.fee_schedule.medium.to_string()),
        ("high_speed_fee", set.fee_schedule.high.to_string()),
        ("default_temper", set.default_temperature.to_string()),
        ("default_speed", set.default_fan_speed.as_i32().to_string()),
        ("mode", set.mode.as_i32().to_string()),
    ]
}
