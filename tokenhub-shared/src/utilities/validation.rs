use once_cell::sync::Lazy;
use regex::Regex;
use crate::models::errors::ValidationError;
use crate::services::notification_services::Notifier;

static ETHEREUM_ADDRESS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^0x[a-fA-F0-9]{40}$").unwrap());
static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// `0x` followed by exactly 40 hex characters. No checksum verification.
pub fn is_valid_ethereum_address(address: &str) -> bool {
    ETHEREUM_ADDRESS.is_match(address)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

pub fn check_ethereum_address(address: &str, field_name: &str) -> Result<(), ValidationError> {
    if address.trim().is_empty() {
        return Err(ValidationError::MissingField(field_name.to_string()));
    }
    if !is_valid_ethereum_address(address) {
        return Err(ValidationError::InvalidAddress(field_name.to_string()));
    }
    Ok(())
}

pub fn check_email(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Err(ValidationError::MissingEmail);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

pub fn check_not_blank(value: &str, field_name: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field_name.to_string()));
    }
    Ok(())
}

/// Validates the address and raises an error notice when it is missing or malformed.
pub fn validate_ethereum_address_with_notice(address: &str, field_name: &str, notifier: &dyn Notifier) -> bool {
    match check_ethereum_address(address, field_name) {
        Ok(()) => true,
        Err(err) => {
            notifier.error(&err.to_string());
            false
        }
    }
}

pub fn validate_email_with_notice(email: &str, notifier: &dyn Notifier) -> bool {
    match check_email(email) {
        Ok(()) => true,
        Err(err) => {
            notifier.error(&err.to_string());
            false
        }
    }
}

/// Validation on leaving a field: only non-empty input is checked.
pub fn validate_address_on_blur(address: &str, field_name: &str, notifier: &dyn Notifier) {
    if !address.trim().is_empty() {
        validate_ethereum_address_with_notice(address, field_name, notifier);
    }
}
