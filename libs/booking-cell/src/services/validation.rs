use regex::Regex;

use crate::error::BookingError;
use crate::models::BookingRequest;

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 100;
pub const PHONE_MIN_CHARS: usize = 10;
pub const PHONE_MAX_CHARS: usize = 20;
const EMAIL_MAX_BYTES: usize = 254;

/// Field constraints for an incoming booking request. The checks are
/// independent; the first failing field is the one reported.
pub fn validate_booking_request(request: &BookingRequest) -> Result<(), BookingError> {
    validate_patient_name(&request.patient_name)?;
    validate_email(&request.email)?;
    validate_phone(&request.phone)?;
    Ok(())
}

pub fn validate_patient_name(name: &str) -> Result<(), BookingError> {
    let len = name.chars().count();
    if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&len) {
        return Err(BookingError::Validation {
            field: "patient_name",
            constraint: format!(
                "length must be between {} and {} characters",
                NAME_MIN_CHARS, NAME_MAX_CHARS
            ),
        });
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), BookingError> {
    let email_regex = Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap();

    if email.len() > EMAIL_MAX_BYTES || !email_regex.is_match(email) {
        return Err(BookingError::Validation {
            field: "email",
            constraint: "must be a valid email address".to_string(),
        });
    }
    Ok(())
}

/// Length bounds only; any character set is accepted.
pub fn validate_phone(phone: &str) -> Result<(), BookingError> {
    let len = phone.chars().count();
    if !(PHONE_MIN_CHARS..=PHONE_MAX_CHARS).contains(&len) {
        return Err(BookingError::Validation {
            field: "phone",
            constraint: format!(
                "length must be between {} and {} characters",
                PHONE_MIN_CHARS, PHONE_MAX_CHARS
            ),
        });
    }
    Ok(())
}
