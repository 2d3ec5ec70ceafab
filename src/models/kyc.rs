//! KYC submission record.
//!
//! The backend historically exposed KYC state under two divergent shapes;
//! the single `kycStatus` field is canonical here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Resource, SortValue};

/// A user's KYC submission as reviewed on the admin KYC panel.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KycSubmission {
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
    /// Review status (`pending`, `approved`, `rejected`).
    #[serde(default)]
    pub kyc_status: Option<String>,
    /// Reason recorded when the submission was rejected.
    #[serde(default)]
    pub rejection_reason: Option<String>,
    /// URL of the uploaded identity document.
    #[serde(default)]
    pub document_url: Option<String>,
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
}

impl Resource for KycSubmission {
    const KIND: &'static str = "kyc";

    fn id(&self) -> &str {
        &self.id
    }

    fn status_or_default(&self) -> &str {
        self.kyc_status.as_deref().unwrap_or("pending")
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
            "kycStatus" => Some(SortValue::Text(self.status_or_default().to_string())),
            "submittedAt" => self.submitted_at.map(SortValue::Instant),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_status_defaults_to_pending() {
        let submission = KycSubmission {
            id: "k1".to_string(),
            ..Default::default()
        };
        assert_eq!(submission.status_or_default(), "pending");
    }
}
