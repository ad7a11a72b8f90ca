use crate::utils::error::{ResolverError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_weekday_key(field_name: &str, key: &str) -> Result<()> {
    match key {
        "0" | "1" | "2" | "3" | "4" | "5" | "6" => Ok(()),
        _ => Err(ResolverError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: key.to_string(),
            reason: "Weekday keys must be \"0\" (Sunday) through \"6\" (Saturday)".to_string(),
        }),
    }
}

pub fn validate_country_code(field_name: &str, code: &str) -> Result<()> {
    if code.len() == 2 && code.chars().all(|c| c.is_ascii_uppercase()) {
        return Ok(());
    }

    Err(ResolverError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: code.to_string(),
        reason: "Country codes must be two uppercase ASCII letters".to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ResolverError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
