//! Platform user record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Resource, SortValue};

/// A registered platform user as listed on the admin users screen.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend document id.
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub mobile_number: String,
    #[serde(default)]
    pub referral_code: String,
    /// Platform role (`user`, `instructor`, `admin`).
    #[serde(default)]
    pub role: String,
    /// Account status (`active`, `suspended`).
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Resource for User {
    const KIND: &'static str = "users";

    fn id(&self) -> &str {
        &self.id
    }

    fn status_or_default(&self) -> &str {
        self.status.as_deref().unwrap_or("active")
    }

    fn search_haystack(&self) -> Vec<&str> {
        vec![
            &self.name,
            &self.email,
            &self.mobile_number,
            &self.referral_code,
        ]
    }

    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "name" => Some(SortValue::Text(self.name.clone())),
            "email" => Some(SortValue::Text(self.email.clone())),
            "status" => Some(SortValue::Text(self.status_or_default().to_string())),
            "createdAt" => self.created_at.map(SortValue::Instant),
            _ => None,
        }
    }
}
