use validator::Validate;

use crate::constants::{CAMPUSES, CAMPUS_INSTITUTION, MANDATORY_DEGREES};
use crate::entities::education::{Education, EducationForm};
use crate::entities::profile::{Profile, ProfileUpdate};
use crate::errors::{EditorError, FieldError};
use crate::use_cases::session::{entry_path, FormEntry, FormSection};

pub struct EducationSection;

impl FormSection for EducationSection {
    type Entry = EducationForm;

    const LABEL: &'static str = "education";

    fn load(profile: &Profile) -> Vec<EducationForm> {
        merge_with_mandatory(&profile.education)
    }

    fn validate(entries: &[EducationForm]) -> Vec<FieldError> {
        let mut errors = Vec::new();
        for (index, entry) in entries.iter().enumerate() {
            let path = entry_path(Self::LABEL, false, index);

            if let Err(e) = entry.validate() {
                errors.extend(FieldError::scoped(&path, e));
            }

            if entry.institution == CAMPUS_INSTITUTION
                && !entry.campus.is_empty()
                && !CAMPUSES.contains(&entry.campus.as_str())
            {
                errors.push(FieldError::new(format!("{}.campus", path), "Unknown campus"));
            }
        }
        errors
    }

    fn build_update(entries: &[EducationForm]) -> ProfileUpdate {
        ProfileUpdate {
            education: Some(entries.iter().map(EducationForm::to_record).collect()),
            ..Default::default()
        }
    }

    fn removable(entry: &EducationForm) -> bool {
        !entry.mandatory
    }
}

/// Builds the edited list: the four fixed degree levels first, each
/// pre-populated from an existing record matched by exact degree name, then
/// every remaining record appended as an optional row.
fn merge_with_mandatory(records: &[Education]) -> Vec<EducationForm> {
    let mut used = vec![false; records.len()];
    let mut forms = Vec::with_capacity(records.len().max(MANDATORY_DEGREES.len()));

    for degree in MANDATORY_DEGREES {
        let matched = records
            .iter()
            .enumerate()
            .find(|(i, r)| !used[*i] && r.degree == degree);

        match matched {
            Some((i, record)) => {
                used[i] = true;
                let mut form = EducationForm::from_record(record);
                form.mandatory = true;
                forms.push(form);
            }
            None => forms.push(EducationForm::seeded(degree)),
        }
    }

    for (i, record) in records.iter().enumerate() {
        if !used[i] {
            forms.push(EducationForm::from_record(record));
        }
    }

    forms
}

impl FormEntry for EducationForm {
    fn set(&mut self, field: &str, value: &str) -> Result<(), EditorError> {
        match field {
            // The degree of a mandatory row is the row's identity.
            "degree" if self.mandatory => {
                return Err(EditorError::ImmutableField(field.to_string()))
            }
            "degree" => self.degree = value.to_string(),
            "field_of_study" => self.field_of_study = value.to_string(),
            "institution" => self.institution = value.to_string(),
            "campus" => self.campus = value.to_string(),
            "start_month" => self.start_month = value.to_string(),
            "start_year" => self.start_year = value.to_string(),
            "end_month" => self.end_month = value.to_string(),
            "end_year" => self.end_year = value.to_string(),
            "grade" => self.grade = value.to_string(),
            "activities" => self.activities = value.to_string(),
            "description" => self.description = value.to_string(),
            _ => return Err(EditorError::UnknownField(field.to_string())),
        }
        Ok(())
    }
}
