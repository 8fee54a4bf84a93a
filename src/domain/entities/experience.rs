use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::PRESENT;
use crate::utils::month_year::{self, validate_month};
use crate::utils::{list_field, location::LOCATION_INDEX};

// ───── Storage Record ───────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub employment_type: String,
    pub location: String,
    pub location_type: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub skills: Vec<String>,
}

// ───── Form State ───────────────────────────────────────────────────

/// One row of the experience editor. The stored location string is split
/// into the country/state/city cascade, dates into month/year parts, and
/// skills are edited as a single comma-separated string.
#[derive(Debug, Clone, Default, Validate)]
pub struct ExperienceForm {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Company is required"))]
    pub company: String,

    pub employment_type: String,
    pub country: String,
    pub state: String,
    pub city: String,
    pub location_type: String,

    #[validate(
        length(min = 1, message = "Start month is required"),
        custom(function = "validate_month", message = "Unknown month")
    )]
    pub start_month: String,

    #[validate(length(min = 1, message = "Start year is required"))]
    pub start_year: String,

    // Required unless the role is ongoing; that rule lives in the section.
    #[validate(custom(function = "validate_month", message = "Unknown month"))]
    pub end_month: String,
    pub end_year: String,

    /// Ongoing role. Serialized as the `Present` end-date sentinel.
    pub current: bool,

    pub description: String,
    pub skills: String,
}

impl ExperienceForm {
    pub fn from_record(record: &Experience) -> Self {
        let (country, state, city) = LOCATION_INDEX.split(&record.location);
        let (start_month, start_year) = month_year::split(&record.start_date);

        let current = month_year::is_present(&record.end_date);
        let (end_month, end_year) = if current {
            (String::new(), String::new())
        } else {
            month_year::split(&record.end_date)
        };

        ExperienceForm {
            title: record.title.clone(),
            company: record.company.clone(),
            employment_type: record.employment_type.clone(),
            country,
            state,
            city,
            location_type: record.location_type.clone(),
            start_month,
            start_year,
            end_month,
            end_year,
            current,
            description: record.description.clone(),
            skills: list_field::join_list(&record.skills),
        }
    }

    pub fn to_record(&self) -> Experience {
        let end_date = if self.current {
            PRESENT.to_string()
        } else {
            month_year::compose(&self.end_month, &self.end_year)
        };

        Experience {
            title: self.title.clone(),
            company: self.company.clone(),
            employment_type: self.employment_type.clone(),
            location: LOCATION_INDEX.compose(&self.country, &self.state, &self.city),
            location_type: self.location_type.clone(),
            start_date: month_year::compose(&self.start_month, &self.start_year),
            end_date,
            description: self.description.clone(),
            skills: list_field::split_list(&self.skills),
        }
    }
}
