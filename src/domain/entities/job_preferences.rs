use serde::{Deserialize, Serialize};
use url::Url;
use validator::{Validate, ValidationError};

use crate::utils::list_field;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobPreferences {
    pub functional_area: String,
    pub preferred_locations: Vec<String>,
    pub notice_period: String,
    pub salary: String,
    pub resume_link: String,
    pub portfolio_link: String,
}

/// Job-preferences modal state. Preferred locations are edited as one
/// comma-separated string; blank items are dropped on save.
#[derive(Debug, Clone, Default, Validate)]
pub struct JobPreferencesForm {
    pub functional_area: String,
    pub preferred_locations: String,
    pub notice_period: String,
    pub salary: String,

    #[validate(custom(function = "validate_optional_url", message = "Must be a well-formed URL"))]
    pub resume_link: String,

    #[validate(custom(function = "validate_optional_url", message = "Must be a well-formed URL"))]
    pub portfolio_link: String,
}

fn validate_optional_url(link: &str) -> Result<(), ValidationError> {
    if link.trim().is_empty() {
        return Ok(());
    }
    Url::parse(link)
        .map(|_| ())
        .map_err(|_| ValidationError::new("invalid_url"))
}

impl JobPreferencesForm {
    pub fn from_record(record: &JobPreferences) -> Self {
        JobPreferencesForm {
            functional_area: record.functional_area.clone(),
            preferred_locations: list_field::join_list(&record.preferred_locations),
            notice_period: record.notice_period.clone(),
            salary: record.salary.clone(),
            resume_link: record.resume_link.clone(),
            portfolio_link: record.portfolio_link.clone(),
        }
    }

    pub fn to_record(&self) -> JobPreferences {
        JobPreferences {
            functional_area: self.functional_area.clone(),
            preferred_locations: list_field::split_list(&self.preferred_locations),
            notice_period: self.notice_period.clone(),
            salary: self.salary.clone(),
            resume_link: self.resume_link.trim().to_string(),
            portfolio_link: self.portfolio_link.trim().to_string(),
        }
    }
}
