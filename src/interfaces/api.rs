use async_trait::async_trait;

use crate::entities::profile::{Profile, ProfileUpdate};
use crate::errors::ApiClientError;

/// Outbound seam to the profile service. One idempotent update call: the
/// body carries only the section being saved, the response is the complete
/// canonical record.
#[async_trait]
pub trait ProfileApi: Send + Sync {
    /// Submits a subset update and returns the full updated profile.
    async fn update_profile(&self, update: &ProfileUpdate) -> Result<Profile, ApiClientError>;
}
