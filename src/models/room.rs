use super::parameters::FanSpeed;

/// Requests a room's unit can make to the central unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoomCommand {
    CheckIn,
    /// Power on, reporting the temperature currently measured in the room
    PowerOn { current_temperature: f64 },
    PowerOff,
    ChangeTemperature(f64),
    ChangeSpeed(FanSpeed),
    RequestFee,
    CheckOut,
}

impl RoomCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::CheckIn => "check_in",
            Self::PowerOn { .. } => "request_on",
            Self::PowerOff => "request_off",
            Self::ChangeTemperature(_) => "change_temper",
            Self::ChangeSpeed(_) => "change_speed",
            Self::RequestFee => "request_fee",
            Self::CheckOut => "check_out",
        }
    }
}
