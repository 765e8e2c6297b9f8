//! Board layout configuration.
//!
//! # Responsibility
//! - Name the templates, host container and element ids views mount against.
//! - Parse partial JSON overrides on top of the standard markup defaults.
//!
//! # Invariants
//! - Every configured id is a plain element id (`[A-Za-z][A-Za-z0-9_-]*`).

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static ELEMENT_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*$").expect("valid element id regex"));

/// Template and element ids used to assemble the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardLayout {
    pub host_id: String,
    pub input_template_id: String,
    pub list_template_id: String,
    pub form_element_id: String,
    pub title_input_id: String,
    pub description_input_id: String,
    pub people_input_id: String,
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self {
            host_id: "app".to_string(),
            input_template_id: "project-input".to_string(),
            list_template_id: "project-list".to_string(),
            form_element_id: "user-input".to_string(),
            title_input_id: "title".to_string(),
            description_input_id: "description".to_string(),
            people_input_id: "people".to_string(),
        }
    }
}

impl BoardLayout {
    /// Parses a JSON object; missing keys keep their defaults.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let layout: Self =
            serde_json::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))?;
        layout.validate()?;
        Ok(layout)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("host_id", &self.host_id),
            ("input_template_id", &self.input_template_id),
            ("list_template_id", &self.list_template_id),
            ("form_element_id", &self.form_element_id),
            ("title_input_id", &self.title_input_id),
            ("description_input_id", &self.description_input_id),
            ("people_input_id", &self.people_input_id),
        ];
        for (field, value) in fields {
            if !ELEMENT_ID_RE.is_match(value) {
                return Err(ConfigError::InvalidId {
                    field,
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Layout configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Parse(String),
    InvalidId { field: &'static str, value: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(message) => write!(f, "invalid layout json: {message}"),
            Self::InvalidId { field, value } => {
                write!(f, "layout field `{field}` is not a valid element id: `{value}`")
            }
        }
    }
}

impl Error for ConfigError {}
