use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Internal user record. Rows are provisioned by the identity provider's
/// onboarding flow; this service only reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub external_auth_id: String,
    pub email: String,
    /// Unset until the user finishes onboarding.
    pub industry: Option<String>,
    pub created_at: DateTime<Utc>,
}
