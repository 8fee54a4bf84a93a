#![allow(dead_code)]

use std::sync::{Arc, Once};

use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;
use uuid::Uuid;

use profile_editor::api::ProfileApi;
use profile_editor::entities::education::Education;
use profile_editor::entities::experience::Experience;
use profile_editor::entities::job_preferences::JobPreferences;
use profile_editor::entities::profile::{Profile, ProfileUpdate};
use profile_editor::entities::work_profile::WorkProfile;
use profile_editor::errors::ApiClientError;
use profile_editor::notifications::BufferedNotifier;
use profile_editor::ProfileWorkspace;

mock! {
    pub Api {}

    #[async_trait]
    impl ProfileApi for Api {
        async fn update_profile(&self, update: &ProfileUpdate) -> Result<Profile, ApiClientError>;
    }
}

pub type TestWorkspace = ProfileWorkspace<MockApi, BufferedNotifier>;

static TRACING: Once = Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .init();
    });
}

/// Workspace wired to a mock API and a buffered notifier the tests can
/// drain. Expectations must be set on the mock before calling this.
pub fn workspace_with(api: MockApi, profile: Profile) -> (TestWorkspace, Arc<BufferedNotifier>) {
    init_tracing();
    let notifier = Arc::new(BufferedNotifier::new());
    let workspace = ProfileWorkspace::with_parts(profile, Arc::new(api), notifier.clone());
    (workspace, notifier)
}

pub fn sample_profile() -> Profile {
    Profile {
        id: Uuid::new_v4(),
        bio: "Backend engineer who likes boring technology.".to_string(),
        education: vec![
            education_record("Graduation", "Graphic Era Hill University", "August 2018", "June 2022"),
            education_record("Diploma", "NIIT", "January 2017", "December 2017"),
        ],
        experience: vec![experience_record("Software Engineer", "Acme Corp")],
        work_profile: WorkProfile {
            headline: "Software Engineer at Acme Corp".to_string(),
            current_title: "Software Engineer".to_string(),
            current_company: "Acme Corp".to_string(),
            industry: "Software".to_string(),
            experience_years: "3".to_string(),
            open_to_work: false,
        },
        job_preferences: JobPreferences {
            functional_area: "Backend".to_string(),
            preferred_locations: vec!["Delhi".to_string(), "Mumbai".to_string()],
            notice_period: "30 days".to_string(),
            salary: "12 LPA".to_string(),
            resume_link: "https://example.com/r.pdf".to_string(),
            portfolio_link: String::new(),
        },
        skills: vec!["Rust".to_string(), "PostgreSQL".to_string()],
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// The profile with every section empty, as a fresh account would have.
pub fn blank_profile() -> Profile {
    Profile {
        id: Uuid::new_v4(),
        bio: String::new(),
        education: Vec::new(),
        experience: Vec::new(),
        work_profile: WorkProfile::default(),
        job_preferences: JobPreferences::default(),
        skills: Vec::new(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn education_record(degree: &str, institution: &str, start: &str, end: &str) -> Education {
    Education {
        degree: degree.to_string(),
        field_of_study: "Computer Science".to_string(),
        institution: institution.to_string(),
        campus: String::new(),
        start_date: start.to_string(),
        end_date: end.to_string(),
        grade: "8.2 CGPA".to_string(),
        activities: String::new(),
        description: String::new(),
    }
}

pub fn experience_record(title: &str, company: &str) -> Experience {
    Experience {
        title: title.to_string(),
        company: company.to_string(),
        employment_type: "Full-time".to_string(),
        location: "Mumbai, Maharashtra, India".to_string(),
        location_type: "Hybrid".to_string(),
        start_date: "March 2022".to_string(),
        end_date: "Present".to_string(),
        description: "Owns the billing service.".to_string(),
        skills: vec!["Rust".to_string(), "Tokio".to_string()],
    }
}

/// A canonical response the mock API can hand back, distinguishable from
/// the profile the workspace started with.
pub fn canonical_response() -> Profile {
    let mut profile = sample_profile();
    profile.bio = "canonical".to_string();
    profile
}
