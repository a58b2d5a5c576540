use thiserror::Error;

use crate::models::{FanSpeed, Mode, ParameterSet};

/// Update requests accepted by the parameter store
#[derive(Debug, Clone, PartialEq)]
pub enum StoreCommand {
    SetServerAddress(String),
    SetServerConnected(bool),
    SetCurrentTemperature(f64),
    SetTemperatureRange { min: f64, max: f64 },
    SetFeeSchedule { low: f64, medium: f64, high: f64 },
    SetDefaultTemperature(f64),
    SetDefaultFanSpeed(FanSpeed),
    SetMode(Mode),
    SetPower(bool),
    ApplyParameters(ParameterSet),
    Reset,
}

impl StoreCommand {
    /// Short name used in log lines
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetServerAddress(_) => "set_server_address",
            Self::SetServerConnected(_) => "set_server_connected",
            Self::SetCurrentTemperature(_) => "set_current_temperature",
            Self::SetTemperatureRange { .. } => "set_temperature_range",
            Self::SetFeeSchedule { .. } => "set_fee_schedule",
            Self::SetDefaultTemperature(_) => "set_default_temperature",
            Self::SetDefaultFanSpeed(_) => "set_default_fan_speed",
            Self::SetMode(_) => "set_mode",
            Self::SetPower(_) => "set_power",
            Self::ApplyParameters(_) => "apply_parameters",
            Self::Reset => "reset",
        }
    }
}

/// Reasons a command is rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
    #[error("Lowest temperature {min} is above highest temperature {max}")]
    InvertedRange { min: f64, max: f64 },
    #[error("Fees must be ordered low <= medium <= high")]
    UnorderedFees,
    #[error("Fees must not be negative")]
    NegativeFee,
    #[error("Temperature {value} is outside the range {min}..={max}")]
    OutsideRange { value: f64, min: f64, max: f64 },
    #[error("Invalid server address: {0:?}")]
    InvalidServerAddress(String),
    #[error("No server address configured")]
    NoServerAddress,
}
