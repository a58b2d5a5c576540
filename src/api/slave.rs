use serde_json::Value;

use super::client::{ApiClient, ApiError};
use crate::models::RoomCommand;

const SLAVE: &str = "/slave";

impl ApiClient {
    /// Send one room request; returns the backend's result, if any
    pub async fn room_request(
        &self,
        room_id: &str,
        command: RoomCommand,
    ) -> Result<Option<Value>, ApiError> {
        let path = format!("{}/{}", SLAVE, command.name());
        self.get(&path, &room_query(room_id, command)).await
    }
}

/// Query parameters for a room request
pub fn room_query(room_id: &str, command: RoomCommand) -> Vec<(&'static str, String)> {
    let mut query = vec![("room_id", room_id.to_string())];
    match command {
        RoomCommand::PowerOn { current_temperature } => {
            query.push(("current_temper", current_temperature.to_string()))
        }
        RoomCommand::ChangeTemperature(target) => query.push(("target_temper", target.to_string())),
        RoomCommand::ChangeSpeed(speed) => query.push(("speed", speed.as_i32().to_string())),
        RoomCommand::CheckIn
        | RoomCommand::PowerOff
        | RoomCommand::RequestFee
        | RoomCommand::CheckOut => {}
    }
    query
}

/// Read the accumulated fee from a `request_fee` result.
/// Accepts a bare number or an object carrying a `fee` field.
pub fn fee_from(result: Option<Value>) -> Result<f64, ApiError> {
    let value = match &result {
        Some(Value::Object(fields)) => fields.get("fee"),
        other => other.as_ref(),
    };
    value
        .and_then(|v| match v {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
        .ok_or_else(|| ApiError::Deserialization(format!("no fee in {:?}", result)))
}
