use crate::domain::model::ResponsibleId;
use crate::utils::error::{ResolverError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Static rule table consulted during resolution. Loaded once by the caller,
/// shared read-only across resolve calls, never mutated.
///
/// Field names on the wire are camelCase, matching the mapping document the
/// CRM team maintains; missing sub-tables deserialize as empty maps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MappingConfig {
    #[serde(rename = "default")]
    pub default_id: Option<ResponsibleId>,
    pub by_weekday: HashMap<String, ResponsibleId>,
    pub by_tag: HashMap<String, ResponsibleId>,
    pub by_country_code: HashMap<String, ResponsibleId>,
    pub by_source: HashMap<String, ResponsibleId>,
}

impl MappingConfig {
    /// Load a mapping document, dispatching on the file extension
    /// (`.json` or `.toml`).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(ResolverError::IoError)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&content),
            Some("toml") => Self::from_toml_str(&content),
            other => Err(ResolverError::InvalidConfigValueError {
                field: "mapping_file".to_string(),
                value: path.display().to_string(),
                reason: format!(
                    "Unsupported mapping format: {}. Expected .json or .toml",
                    other.unwrap_or("none")
                ),
            }),
        }
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        serde_json::from_str(&processed_content).map_err(ResolverError::SerializationError)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ResolverError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Substitute environment variables (e.g. ${CRM_DEFAULT_USER}) before
    /// parsing. Unset variables are left verbatim.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Structural validation: weekday keys stay within "0"-"6", rule keys
    /// and identifiers are non-empty, country codes are two ASCII letters.
    pub fn validate_config(&self) -> Result<()> {
        for (key, id) in &self.by_weekday {
            validation::validate_weekday_key("byWeekday", key)?;
            validation::validate_non_empty_string("byWeekday", id.as_str())?;
        }

        for (key, id) in &self.by_tag {
            validation::validate_non_empty_string("byTag", key)?;
            validation::validate_non_empty_string("byTag", id.as_str())?;
        }

        for (key, id) in &self.by_country_code {
            validation::validate_country_code("byCountryCode", key)?;
            validation::validate_non_empty_string("byCountryCode", id.as_str())?;
        }

        for (key, id) in &self.by_source {
            validation::validate_non_empty_string("bySource", key)?;
            validation::validate_non_empty_string("bySource", id.as_str())?;
        }

        if let Some(id) = &self.default_id {
            validation::validate_non_empty_string("default", id.as_str())?;
        }

        Ok(())
    }
}

impl Validate for MappingConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
