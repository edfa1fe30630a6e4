use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

use crate::shared::errors::AppError;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_REGEX: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();

pub struct Validator;

impl Validator {
    pub fn validate_trip_title(title: &str) -> Result<(), AppError> {
        if title.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Trip title cannot be empty".to_string(),
            ));
        }
        if title.chars().count() > 120 {
            return Err(AppError::ValidationError(
                "Trip title too long (max 120 characters)".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_date_range(start: NaiveDate, end: NaiveDate) -> Result<(), AppError> {
        if end < start {
            return Err(AppError::ValidationError(format!(
                "Trip ends ({}) before it starts ({})",
                end, start
            )));
        }
        Ok(())
    }

    pub fn validate_email(email: &str) -> Result<(), AppError> {
        let regex = EMAIL_REGEX
            .get_or_init(|| Regex::new(EMAIL_PATTERN))
            .as_ref()
            .map_err(|e| AppError::InternalError(format!("Invalid email pattern: {}", e)))?;

        if !regex.is_match(email) {
            return Err(AppError::ValidationError(format!(
                "'{}' is not a valid email address",
                email
            )));
        }
        Ok(())
    }

    pub fn validate_travelers(travelers: u32) -> Result<(), AppError> {
        if !(1..=9).contains(&travelers) {
            return Err(AppError::ValidationError(
                "Travelers must be between 1 and 9".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_user_id(uid: &str) -> Result<(), AppError> {
        if uid.trim().is_empty() {
            return Err(AppError::Unauthorized(
                "Missing authenticated user id".to_string(),
            ));
        }
        Ok(())
    }
}
