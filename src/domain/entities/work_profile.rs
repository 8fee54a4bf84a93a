use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkProfile {
    pub headline: String,
    pub current_title: String,
    pub current_company: String,
    pub industry: String,
    pub experience_years: String,
    pub open_to_work: bool,
}

/// Work-profile modal state. Every field is optional.
#[derive(Debug, Clone, Default, Validate)]
pub struct WorkProfileForm {
    #[validate(length(max = 220, message = "Headline must be at most 220 characters"))]
    pub headline: String,

    pub current_title: String,
    pub current_company: String,
    pub industry: String,
    pub experience_years: String,
    pub open_to_work: bool,
}

impl WorkProfileForm {
    pub fn from_record(record: &WorkProfile) -> Self {
        WorkProfileForm {
            headline: record.headline.clone(),
            current_title: record.current_title.clone(),
            current_company: record.current_company.clone(),
            industry: record.industry.clone(),
            experience_years: record.experience_years.clone(),
            open_to_work: record.open_to_work,
        }
    }

    pub fn to_record(&self) -> WorkProfile {
        WorkProfile {
            headline: self.headline.clone(),
            current_title: self.current_title.clone(),
            current_company: self.current_company.clone(),
            industry: self.industry.clone(),
            experience_years: self.experience_years.clone(),
            open_to_work: self.open_to_work,
        }
    }
}
