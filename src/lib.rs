use std::sync::Arc;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;

pub use domain::{entities, use_cases};
pub use interfaces::{api, notifications};
pub use infrastructure::{http, utils};

use api::ProfileApi;
use entities::profile::Profile;
use errors::EditorError;
use http::HttpProfileApi;
use notifications::{Notifier, TracingNotifier};
use use_cases::basics::{BioSection, SkillsSection};
use use_cases::education::EducationSection;
use use_cases::experience::ExperienceSection;
use use_cases::preferences::JobPreferencesSection;
use use_cases::session::{FormSection, SectionEditor};
use use_cases::work_profile::WorkProfileSection;

/// Holds the canonical profile record and the collaborators every section
/// editor needs. Modals are opened from here and their successful saves
/// merge the server's canonical record back in.
pub struct ProfileWorkspace<A: ProfileApi, N: Notifier> {
    profile: Profile,
    api: Arc<A>,
    notifier: Arc<N>,
}

pub type AppWorkspace = ProfileWorkspace<HttpProfileApi, TracingNotifier>;

impl AppWorkspace {
    pub fn new(config: &settings::EditorConfig, profile: Profile) -> Result<Self, EditorError> {
        let api = HttpProfileApi::new(config).map_err(EditorError::Api)?;
        Ok(ProfileWorkspace::with_parts(
            profile,
            Arc::new(api),
            Arc::new(TracingNotifier),
        ))
    }
}

impl<A: ProfileApi, N: Notifier> ProfileWorkspace<A, N> {
    pub fn with_parts(profile: Profile, api: Arc<A>, notifier: Arc<N>) -> Self {
        ProfileWorkspace {
            profile,
            api,
            notifier,
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn open_bio(&self) -> SectionEditor<BioSection, A, N> {
        self.open()
    }

    pub fn open_skills(&self) -> SectionEditor<SkillsSection, A, N> {
        self.open()
    }

    pub fn open_education(&self) -> SectionEditor<EducationSection, A, N> {
        self.open()
    }

    pub fn open_experience(&self) -> SectionEditor<ExperienceSection, A, N> {
        self.open()
    }

    pub fn open_work_profile(&self) -> SectionEditor<WorkProfileSection, A, N> {
        self.open()
    }

    pub fn open_job_preferences(&self) -> SectionEditor<JobPreferencesSection, A, N> {
        self.open()
    }

    fn open<S: FormSection>(&self) -> SectionEditor<S, A, N> {
        SectionEditor::open(&self.profile, self.api.clone(), self.notifier.clone())
    }

    /// Saves an open editor and replaces the in-memory profile with the
    /// canonical record the server returned.
    pub async fn save<S: FormSection>(
        &mut self,
        editor: &mut SectionEditor<S, A, N>,
    ) -> Result<(), EditorError> {
        let canonical = editor.save().await?;
        self.profile = canonical;
        Ok(())
    }
}
