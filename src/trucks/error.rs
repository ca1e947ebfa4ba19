use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TruckError {
    #[error("Invalid licence plate: '{0}'")]
    InvalidLicensePlate(String),

    #[error("{field} {value} is outside the allowed range [{min}, {max})")]
    OutOfRange {
        field: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },

    #[error("Unknown transmission: '{0}'")]
    UnknownTransmission(String),
}
