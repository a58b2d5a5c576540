use crate::models::{FeeSchedule, OperatingParameters, ParameterSet, TemperatureRange};

use super::command::{StoreCommand, StoreError};

/// Owner of the operating parameters.
///
/// Every change goes through [`ParameterStore::dispatch`]. A command is fully
/// validated before any field is written, so a rejected command leaves the
/// snapshot untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterStore {
    params: OperatingParameters,
}

impl ParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot
    pub fn snapshot(&self) -> &OperatingParameters {
        &self.params
    }

    /// Validate and apply a command
    pub fn dispatch(&mut self, command: StoreCommand) -> Result<(), StoreError> {
        match command {
            StoreCommand::SetServerAddress(address) => {
                let address = normalize_address(&address)?;
                if address != self.params.server_address {
                    self.params.server_address = address;
                    self.params.is_server_connected = false;
                }
            }
            StoreCommand::SetServerConnected(connected) => {
                if connected && self.params.server_address.is_empty() {
                    return Err(StoreError::NoServerAddress);
                }
                self.params.is_server_connected = connected;
            }
            StoreCommand::SetCurrentTemperature(value) => {
                finite("current temperature", value)?;
                self.params.current_temperature = Some(value);
            }
            StoreCommand::SetTemperatureRange { min, max } => {
                let range = validate_range(min, max)?;
                if let Some(default) = self.params.default_temperature {
                    check_within(default, &range)?;
                }
                self.params.temperature_range = Some(range);
            }
            StoreCommand::SetFeeSchedule { low, medium, high } => {
                self.params.fee_schedule = Some(validate_fees(low, medium, high)?);
            }
            StoreCommand::SetDefaultTemperature(value) => {
                finite("default temperature", value)?;
                if let Some(range) = &self.params.temperature_range {
                    check_within(value, range)?;
                }
                self.params.default_temperature = Some(value);
            }
            StoreCommand::SetDefaultFanSpeed(speed) => {
                self.params.default_fan_speed = Some(speed);
            }
            StoreCommand::SetMode(mode) => {
                self.params.mode = Some(mode);
            }
            StoreCommand::SetPower(on) => {
                self.params.power_state = on;
            }
            StoreCommand::ApplyParameters(set) => {
                let set = validate_set(set)?;
                self.params.temperature_range = Some(set.temperature_range);
                self.params.fee_schedule = Some(set.fee_schedule);
                self.params.default_temperature = Some(set.default_temperature);
                self.params.default_fan_speed = Some(set.default_fan_speed);
                self.params.mode = Some(set.mode);
            }
            StoreCommand::Reset => {
                self.params = OperatingParameters::default();
            }
        }

        Ok(())
    }

    /// Collect the manager's parameter set, if every part of it is configured
    pub fn parameter_set(&self) -> Result<ParameterSet, &'static str> {
        let p = &self.params;
        Ok(ParameterSet {
            temperature_range: p.temperature_range.ok_or("temperature range")?,
            fee_schedule: p.fee_schedule.ok_or("fee schedule")?,
            default_temperature: p.default_temperature.ok_or("default temperature")?,
            default_fan_speed: p.default_fan_speed.ok_or("default fan speed")?,
            mode: p.mode.ok_or("mode")?,
        })
    }

    /// Validate a parameter set without applying it
    pub fn check_parameters(set: ParameterSet) -> Result<(), StoreError> {
        validate_set(set).map(|_| ())
    }

    /// Validate a room's target temperature against the configured range
    pub fn check_target_temperature(&self, value: f64) -> Result<(), StoreError> {
        finite("target temperature", value)?;
        match &self.params.temperature_range {
            Some(range) => check_within(value, range),
            None => Ok(()),
        }
    }
}

fn finite(field: &'static str, value: f64) -> Result<f64, StoreError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(StoreError::NonFinite { field })
    }
}

fn validate_range(min: f64, max: f64) -> Result<TemperatureRange, StoreError> {
    finite("lowest temperature", min)?;
    finite("highest temperature", max)?;
    if min > max {
        return Err(StoreError::InvertedRange { min, max });
    }
    Ok(TemperatureRange { min, max })
}

fn validate_fees(low: f64, medium: f64, high: f64) -> Result<FeeSchedule, StoreError> {
    finite("low speed fee", low)?;
    finite("medium speed fee", medium)?;
    finite("high speed fee", high)?;
    if low < 0.0 {
        return Err(StoreError::NegativeFee);
    }
    if low > medium || medium > high {
        return Err(StoreError::UnorderedFees);
    }
    Ok(FeeSchedule { low, medium, high })
}

fn check_within(value: f64, range: &TemperatureRange) -> Result<(), StoreError> {
    if range.contains(value) {
        Ok(())
    } else {
        Err(StoreError::OutsideRange {
            value,
            min: range.min,
            max: range.max,
        })
    }
}

fn validate_set(set: ParameterSet) -> Result<ParameterSet, StoreError> {
    let range = validate_range(set.temperature_range.min, set.temperature_range.max)?;
    let fees = validate_fees(set.fee_schedule.low, set.fee_schedule.medium, set.fee_schedule.high)?;
    finite("default temperature", set.default_temperature)?;
    check_within(set.default_temperature, &range)?;

    Ok(ParameterSet {
        temperature_range: range,
        fee_schedule: fees,
        ..set
    })
}

/// Trim, check the scheme and drop trailing slashes
fn normalize_address(raw: &str) -> Result<String, StoreError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let host = trimmed
        .strip_prefix("http://")
        .or_else(|| trimmed.strip_prefix("https://"));

    match host {
        Some(host) if !host.is_empty() && !host.contains(char::is_whitespace) => {
            Ok(trimmed.to_string())
        }
        _ => Err(StoreError::InvalidServerAddress(raw.to_string())),
    }
}
