//! Payment request record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Resource, SortValue};

/// A payment verification request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub amount: f64,
    /// Verification status (`pending`, `approved`, `rejected`).
    #[serde(default)]
    pub status: Option<String>,
    /// Note the operator attached when verifying.
    #[serde(default)]
    pub admin_note: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Resource for Payment {
    const KIND: &'static str = "payments";

    fn id(&self) -> &str {
        &self.id
    }

    fn status_or_default(&self) -> &str {
        self.status.as_deref().unwrap_or("pending")
    }

    fn search_haystack(&self) -> Vec<&str> {
        vec![&self.user_name, &self.email]
    }

    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "userName" => Some(SortValue::Text(self.user_name.clone())),
            "amount" => Some(SortValue::Number(self.amount)),
            "createdAt" => self.created_at.map(SortValue::Instant),
            _ => None,
        }
    }
}
