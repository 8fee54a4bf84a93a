use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::CAMPUS_INSTITUTION;
use crate::utils::month_year::{self, validate_month};

// ───── Storage Record ───────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub degree: String,
    pub field_of_study: String,
    pub institution: String,
    pub campus: String,
    pub start_date: String,
    pub end_date: String,
    pub grade: String,
    pub activities: String,
    pub description: String,
}

// ───── Form State ───────────────────────────────────────────────────

/// One row of the education editor, with the stored date strings split
/// into selectable month/year parts. Mandatory rows carry a fixed degree
/// level and cannot be removed.
#[derive(Debug, Clone, Default, Validate)]
pub struct EducationForm {
    #[validate(length(min = 1, message = "Degree is required"))]
    pub degree: String,

    pub field_of_study: String,

    #[validate(length(min = 1, message = "Institution is required"))]
    pub institution: String,

    pub campus: String,

    #[validate(
        length(min = 1, message = "Start month is required"),
        custom(function = "validate_month", message = "Unknown month")
    )]
    pub start_month: String,

    #[validate(length(min = 1, message = "Start year is required"))]
    pub start_year: String,

    #[validate(
        length(min = 1, message = "End month is required"),
        custom(function = "validate_month", message = "Unknown month")
    )]
    pub end_month: String,

    #[validate(length(min = 1, message = "End year is required"))]
    pub end_year: String,

    pub grade: String,

    #[validate(length(max = 500, message = "Activities must be at most 500 characters"))]
    pub activities: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: String,

    pub mandatory: bool,
}

impl EducationForm {
    pub fn from_record(record: &Education) -> Self {
        let (start_month, start_year) = month_year::split(&record.start_date);
        let (end_month, end_year) = month_year::split(&record.end_date);

        EducationForm {
            degree: record.degree.clone(),
            field_of_study: record.field_of_study.clone(),
            institution: record.institution.clone(),
            campus: record.campus.clone(),
            start_month,
            start_year,
            end_month,
            end_year,
            grade: record.grade.clone(),
            activities: record.activities.clone(),
            description: record.description.clone(),
            mandatory: false,
        }
    }

    /// A blank row pre-seeded with one of the fixed degree levels.
    pub fn seeded(degree: &str) -> Self {
        EducationForm {
            degree: degree.to_string(),
            mandatory: true,
            ..Default::default()
        }
    }

    pub fn to_record(&self) -> Education {
        // The campus selection only exists for one institution.
        let campus = if self.institution == CAMPUS_INSTITUTION {
            self.campus.clone()
        } else {
            String::new()
        };

        Education {
            degree: self.degree.clone(),
            field_of_study: self.field_of_study.clone(),
            institution: self.institution.clone(),
            campus,
            start_date: month_year::compose(&self.start_month, &self.start_year),
            end_date: month_year::compose(&self.end_month, &self.end_year),
            grade: self.grade.clone(),
            activities: self.activities.clone(),
            description: self.description.clone(),
        }
    }
}
