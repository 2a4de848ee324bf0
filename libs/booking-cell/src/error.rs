use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("Dịch vụ không hợp lệ")]
    InvalidService,

    #[error("{field}: {constraint}")]
    Validation {
        field: &'static str,
        constraint: String,
    },
}
