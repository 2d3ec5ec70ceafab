//! Wallet withdrawal record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Resource, SortValue};

/// Denormalized user info the backend embeds in each withdrawal.
///
/// Read-only nested data; no relational integrity is enforced client-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WithdrawalUser {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// A wallet withdrawal request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Withdrawal {
    #[serde(rename = "_id")]
    pub id: String,
    /// Requesting user, populated by the backend.
    #[serde(default)]
    pub user: WithdrawalUser,
    #[serde(default)]
    pub amount: f64,
    /// Payout status (`Pending`, `Paid`, `Rejected`).
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub requested_at: Option<DateTime<Utc>>,
}

impl Resource for Withdrawal {
    const KIND: &'static str = "withdrawals";

    fn id(&self) -> &str {
        &self.id
    }

    fn status_or_default(&self) -> &str {
        self.status.as_deref().unwrap_or("Pending")
    }

    fn search_haystack(&self) -> Vec<&str> {
        vec![&self.user.name, &self.user.email]
    }

    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "amount" => Some(SortValue::Number(self.amount)),
            "requestedAt" => self.requested_at.map(SortValue::Instant),
            "userName" => Some(SortValue::Text(self.user.name.clone())),
            _ => None,
        }
    }
}
