use serde::{Deserialize, Serialize};

/// Admissible target temperature bounds in degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureRange {
    pub min: f64,
    pub max: f64,
}

impl TemperatureRange {
    /// Check whether a temperature lies within the bounds (inclusive)
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Fee per unit of time for each fan speed tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeeSchedule {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl FeeSchedule {
    /// Fee charged for the given fan speed
    pub fn rate_for(&self, speed: FanSpeed) -> f64 {
        match speed {
            FanSpeed::Low => self.low,
            FanSpeed::Medium => self.medium,
            FanSpeed::High => self.high,
        }
    }
}

/// Fan speed tiers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FanSpeed {
    Low = 0,
    #[default]
    Medium = 1,
    High = 2,
}

impl FanSpeed {
    pub const ALL: [FanSpeed; 3] = [FanSpeed::Low, FanSpeed::Medium, FanSpeed::High];

    /// Get speed from its wire value
    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::Low),
            1 => Some(Self::Medium),
            2 => Some(Self::High),
            _ => None,
        }
    }

    /// Wire value sent to the backend
    pub fn as_i32(&self) -> i32 {
        *self as i32
    }

    /// Get display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Operating mode of the central unit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Cooling = 0,
    Heating = 1,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Cooling, Mode::Heating];

    /// Get mode from its wire value
    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::Cooling),
            1 => Some(Self::Heating),
            _ => None,
        }
    }

    /// Wire value sent to the backend
    pub fn as_i32(&self) -> i32 {
        *self as i32
    }

    /// Get display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cooling => "Cooling",
            Self::Heating => "Heating",
        }
    }
}

/// Current operating parameters shared by every view.
///
/// Numeric fields stay `None` until a view or the backend supplies them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OperatingParameters {
    pub is_server_connected: bool,
    pub server_address: String,
    pub current_temperature: Option<f64>,
    pub temperature_range: Option<TemperatureRange>,
    pub fee_schedule: Option<FeeSchedule>,
    pub default_temperature: Option<f64>,
    pub default_fan_speed: Option<FanSpeed>,
    pub mode: Option<Mode>,
    pub power_state: bool,
}

/// Full configuration entered by the manager, applied in one step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    pub temperature_range: TemperatureRange,
    pub fee_schedule: FeeSchedule,
    pub default_temperature: f64,
    pub default_fan_speed: FanSpeed,
    pub mode: Mode,
}
