pub mod billing;
pub mod envelope;
pub mod parameters;
pub mod room;

pub use billing::{DetailRecord, Invoice, ReportKind, RoomReport};
pub use envelope::Envelope;
pub use parameters::{
    FanSpeed, FeeSchedule, Mode, OperatingParameters, ParameterSet, TemperatureRange,
};
pub use room::RoomCommand;
