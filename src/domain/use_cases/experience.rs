use validator::Validate;

use crate::constants::{EMPLOYMENT_TYPES, LOCATION_TYPES};
use crate::entities::experience::ExperienceForm;
use crate::entities::profile::{Profile, ProfileUpdate};
use crate::errors::{EditorError, FieldError};
use crate::use_cases::session::{entry_path, FormEntry, FormSection};

pub struct ExperienceSection;

impl FormSection for ExperienceSection {
    type Entry = ExperienceForm;

    const LABEL: &'static str = "experience";

    fn load(profile: &Profile) -> Vec<ExperienceForm> {
        let forms: Vec<_> = profile
            .experience
            .iter()
            .map(ExperienceForm::from_record)
            .collect();

        if forms.is_empty() {
            vec![ExperienceForm::default()]
        } else {
            forms
        }
    }

    fn validate(entries: &[ExperienceForm]) -> Vec<FieldError> {
        let mut errors = Vec::new();
        for (index, entry) in entries.iter().enumerate() {
            let path = entry_path(Self::LABEL, false, index);

            if let Err(e) = entry.validate() {
                errors.extend(FieldError::scoped(&path, e));
            }

            if !entry.employment_type.is_empty()
                && !EMPLOYMENT_TYPES.contains(&entry.employment_type.as_str())
            {
                errors.push(FieldError::new(
                    format!("{}.employment_type", path),
                    "Unknown employment type",
                ));
            }
            if !entry.location_type.is_empty()
                && !LOCATION_TYPES.contains(&entry.location_type.as_str())
            {
                errors.push(FieldError::new(
                    format!("{}.location_type", path),
                    "Unknown location type",
                ));
            }

            // End date parts are only optional while the role is ongoing.
            if !entry.current {
                if entry.end_month.is_empty() {
                    errors.push(FieldError::new(
                        format!("{}.end_month", path),
                        "End month is required",
                    ));
                }
                if entry.end_year.is_empty() {
                    errors.push(FieldError::new(
                        format!("{}.end_year", path),
                        "End year is required",
                    ));
                }
            }
        }
        errors
    }

    fn build_update(entries: &[ExperienceForm]) -> ProfileUpdate {
        ProfileUpdate {
            experience: Some(entries.iter().map(ExperienceForm::to_record).collect()),
            ..Default::default()
        }
    }
}

impl FormEntry for ExperienceForm {
    fn set(&mut self, field: &str, value: &str) -> Result<(), EditorError> {
        match field {
            "title" => self.title = value.to_string(),
            "company" => self.company = value.to_string(),
            "employment_type" => self.employment_type = value.to_string(),
            "country" => {
                // Changing the country resets the dependent selections.
                self.country = value.to_string();
                self.state.clear();
                self.city.clear();
            }
            "state" => {
                self.state = value.to_string();
                self.city.clear();
            }
            "city" => self.city = value.to_string(),
            "location_type" => self.location_type = value.to_string(),
            "start_month" => self.start_month = value.to_string(),
            "start_year" => self.start_year = value.to_string(),
            "end_month" => self.end_month = value.to_string(),
            "end_year" => self.end_year = value.to_string(),
            "current" => self.current = value.eq_ignore_ascii_case("true"),
            "description" => self.description = value.to_string(),
            "skills" => self.skills = value.to_string(),
            _ => return Err(EditorError::UnknownField(field.to_string())),
        }
        Ok(())
    }
}
