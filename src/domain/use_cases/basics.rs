//! The two small single-field modals: bio and the top-level skill list.

use validator::Validate;

use crate::entities::profile::{Profile, ProfileUpdate};
use crate::errors::{EditorError, FieldError};
use crate::use_cases::session::{entry_path, FormEntry, FormSection};
use crate::utils::list_field;

#[derive(Debug, Clone, Default, Validate)]
pub struct BioForm {
    #[validate(length(max = 2000, message = "Bio must be at most 2000 characters"))]
    pub bio: String,
}

pub struct BioSection;

impl FormSection for BioSection {
    type Entry = BioForm;

    const LABEL: &'static str = "bio";
    const SINGLETON: bool = true;

    fn load(profile: &Profile) -> Vec<BioForm> {
        vec![BioForm { bio: profile.bio.clone() }]
    }

    fn validate(entries: &[BioForm]) -> Vec<FieldError> {
        let mut errors = Vec::new();
        for entry in entries {
            if let Err(e) = entry.validate() {
                errors.extend(FieldError::scoped(&entry_path(Self::LABEL, true, 0), e));
            }
        }
        errors
    }

    fn build_update(entries: &[BioForm]) -> ProfileUpdate {
        ProfileUpdate {
            bio: entries.first().map(|e| e.bio.clone()),
            ..Default::default()
        }
    }
}

impl FormEntry for BioForm {
    fn set(&mut self, field: &str, value: &str) -> Result<(), EditorError> {
        match field {
            "bio" => self.bio = value.to_string(),
            _ => return Err(EditorError::UnknownField(field.to_string())),
        }
        Ok(())
    }
}

/// Skills are edited as one comma-separated string; blanks are dropped on
/// save.
#[derive(Debug, Clone, Default)]
pub struct SkillsForm {
    pub skills: String,
}

pub struct SkillsSection;

impl FormSection for SkillsSection {
    type Entry = SkillsForm;

    const LABEL: &'static str = "skills";
    const SINGLETON: bool = true;

    fn load(profile: &Profile) -> Vec<SkillsForm> {
        vec![SkillsForm {
            skills: list_field::join_list(&profile.skills),
        }]
    }

    fn validate(_entries: &[SkillsForm]) -> Vec<FieldError> {
        Vec::new()
    }

    fn build_update(entries: &[SkillsForm]) -> ProfileUpdate {
        ProfileUpdate {
            skills: entries.first().map(|e| list_field::split_list(&e.skills)),
            ..Default::default()
        }
    }
}

impl FormEntry for SkillsForm {
    fn set(&mut self, field: &str, value: &str) -> Result<(), EditorError> {
        match field {
            "skills" => self.skills = value.to_string(),
            _ => return Err(EditorError::UnknownField(field.to_string())),
        }
        Ok(())
    }
}
