//! Meeting record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Resource, SortValue};

/// A scheduled meeting as managed from the meetings dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub host_name: String,
    #[serde(default)]
    pub scheduled_at: Option<DateTime<Utc>>,
    /// Lifecycle status (`scheduled`, `completed`, `cancelled`).
    #[serde(default)]
    pub status: Option<String>,
    /// Registration count denormalized by the backend.
    #[serde(default)]
    pub registration_count: u32,
}

impl Resource for Meeting {
    const KIND: &'static str = "meetings";

    fn id(&self) -> &str {
        &self.id
    }

    fn status_or_default(&self) -> &str {
        self.status.as_deref().unwrap_or("scheduled")
    }

    fn search_haystack(&self) -> Vec<&str> {
        vec![&self.title, &self.host_name]
    }

    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "title" => Some(SortValue::Text(self.title.clone())),
            "hostName" => Some(SortValue::Text(self.host_name.clone())),
            "scheduledAt" => self.scheduled_at.map(SortValue::Instant),
            "registrationCount" => Some(SortValue::Number(f64::from(self.registration_count))),
            _ => None,
        }
    }
}

/// A registration row for one meeting, read-only.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MeetingRegistration {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub registered_at: Option<DateTime<Utc>>,
}
