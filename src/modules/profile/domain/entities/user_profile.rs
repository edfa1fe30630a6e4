use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Application-side profile for an identity-provider user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(rename = "id")]
    pub uid: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default)]
    pub loyalty_points: u64,
    #[serde(default)]
    pub shared_trip_ids: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn new(uid: impl Into<String>, email: &str, display_name: Option<String>) -> Self {
        Self {
            uid: uid.into(),
            email: normalize_email(email),
            display_name: display_name
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
            loyalty_points: 0,
            shared_trip_ids: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn has_shared_trip(&self, trip_id: &str) -> bool {
        self.shared_trip_ids.iter().any(|id| id == trip_id)
    }
}

/// Emails are compared trimmed and lower-cased
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
