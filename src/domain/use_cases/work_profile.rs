use validator::Validate;

use crate::entities::profile::{Profile, ProfileUpdate};
use crate::entities::work_profile::WorkProfileForm;
use crate::errors::{EditorError, FieldError};
use crate::use_cases::session::{entry_path, FormEntry, FormSection};

pub struct WorkProfileSection;

impl FormSection for WorkProfileSection {
    type Entry = WorkProfileForm;

    const LABEL: &'static str = "work_profile";
    const SINGLETON: bool = true;

    fn load(profile: &Profile) -> Vec<WorkProfileForm> {
        vec![WorkProfileForm::from_record(&profile.work_profile)]
    }

    fn validate(entries: &[WorkProfileForm]) -> Vec<FieldError> {
        let mut errors = Vec::new();
        for entry in entries {
            if let Err(e) = entry.validate() {
                errors.extend(FieldError::scoped(&entry_path(Self::LABEL, true, 0), e));
            }
        }
        errors
    }

    fn build_update(entries: &[WorkProfileForm]) -> ProfileUpdate {
        ProfileUpdate {
            work_profile: entries.first().map(WorkProfileForm::to_record),
            ..Default::default()
        }
    }
}

impl FormEntry for WorkProfileForm {
    fn set(&mut self, field: &str, value: &str) -> Result<(), EditorError> {
        match field {
            "headline" => self.headline = value.to_string(),
            "current_title" => self.current_title = value.to_string(),
            "current_company" => self.current_company = value.to_string(),
            "industry" => self.industry = value.to_string(),
            "experience_years" => self.experience_years = value.to_string(),
            "open_to_work" => self.open_to_work = value.eq_ignore_ascii_case("true"),
            _ => return Err(EditorError::UnknownField(field.to_string())),
        }
        Ok(())
    }
}
