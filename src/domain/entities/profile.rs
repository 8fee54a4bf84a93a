use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::education::Education;
use super::experience::Experience;
use super::job_preferences::JobPreferences;
use super::work_profile::WorkProfile;

// ───── Canonical Server Record ──────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: Uuid,

    #[serde(default)]
    pub bio: String,

    #[serde(default)]
    pub education: Vec<Education>,

    #[serde(default)]
    pub experience: Vec<Experience>,

    #[serde(default)]
    pub work_profile: WorkProfile,

    #[serde(default)]
    pub job_preferences: JobPreferences,

    #[serde(default)]
    pub skills: Vec<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ───── Update Request Body ──────────────────────────────────────────

/// Subset PUT body. Only the section being saved is present; the server
/// replaces that section wholesale and returns the full updated record.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<Vec<Education>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<Vec<Experience>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_profile: Option<WorkProfile>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_preferences: Option<JobPreferences>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
}
