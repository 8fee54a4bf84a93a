use validator::Validate;

use crate::entities::job_preferences::JobPreferencesForm;
use crate::entities::profile::{Profile, ProfileUpdate};
use crate::errors::{EditorError, FieldError};
use crate::use_cases::session::{entry_path, FormEntry, FormSection};

pub struct JobPreferencesSection;

impl FormSection for JobPreferencesSection {
    type Entry = JobPreferencesForm;

    const LABEL: &'static str = "job_preferences";
    const SINGLETON: bool = true;

    fn load(profile: &Profile) -> Vec<JobPreferencesForm> {
        vec![JobPreferencesForm::from_record(&profile.job_preferences)]
    }

    fn validate(entries: &[JobPreferencesForm]) -> Vec<FieldError> {
        let mut errors = Vec::new();
        for entry in entries {
            if let Err(e) = entry.validate() {
                errors.extend(FieldError::scoped(&entry_path(Self::LABEL, true, 0), e));
            }
        }
        errors
    }

    fn build_update(entries: &[JobPreferencesForm]) -> ProfileUpdate {
        ProfileUpdate {
            job_preferences: entries.first().map(JobPreferencesForm::to_record),
            ..Default::default()
        }
    }
}

impl FormEntry for JobPreferencesForm {
    fn set(&mut self, field: &str, value: &str) -> Result<(), EditorError> {
        match field {
            "functional_area" => self.functional_area = value.to_string(),
            "preferred_locations" => self.preferred_locations = value.to_string(),
            "notice_period" => self.notice_period = value.to_string(),
            "salary" => self.salary = value.to_string(),
            "resume_link" => self.resume_link = value.to_string(),
            "portfolio_link" => self.portfolio_link = value.to_string(),
            _ => return Err(EditorError::UnknownField(field.to_string())),
        }
        Ok(())
    }
}
