//! Typed record schemas for every admin resource.
//!
//! The backend sends loosely shaped JSON; each resource gets one canonical
//! schema here, validated at the gateway boundary by serde decoding.
//! Records are plain values: they are copied into and out of stores, never
//! shared by reference across views.
//!
//! The [`Resource`] trait is the seam the generic store, query engine and
//! controller are written against.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cmp::Ordering;

mod blog;
mod course;
mod kyc;
mod meeting;
mod payment;
mod user;
mod withdrawal;

pub use blog::BlogPost;
pub use course::Course;
pub use kyc::KycSubmission;
pub use meeting::{Meeting, MeetingRegistration};
pub use payment::Payment;
pub use user::User;
pub use withdrawal::{Withdrawal, WithdrawalUser};

// ============================================================================
// SortValue
// ============================================================================

/// A comparable projection of one record field.
///
/// String fields compare case-insensitively; date-like fields compare by
/// parsed instant. Mismatched variants compare equal, which keeps the
/// surrounding stable sort a no-op instead of producing surprises.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    /// Case-insensitive text.
    Text(String),
    /// Numeric field (amounts, prices, counts).
    Number(f64),
    /// Parsed timestamp.
    Instant(DateTime<Utc>),
}

impl SortValue {
    /// Compare two sort values.
    pub fn compare(&self, other: &SortValue) -> Ordering {
        match (self, other) {
            (SortValue::Text(a), SortValue::Text(b)) => {
                a.to_lowercase().cmp(&b.to_lowercase())
            }
            (SortValue::Number(a), SortValue::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (SortValue::Instant(a), SortValue::Instant(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

// ============================================================================
// Resource
// ============================================================================

/// Behavior every admin resource record exposes to the generic pipeline.
///
/// Implementations decide their own status fallback (used when the backend
/// omits the field), their fixed set of searchable fields, and which sort
/// keys they answer to.
pub trait Resource:
    Clone + std::fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Resource kind, used for logging and route lookup.
    const KIND: &'static str;

    /// Unique identifier within a collection.
    fn id(&self) -> &str;

    /// Record status, falling back to the resource default when the
    /// backend omitted the field.
    fn status_or_default(&self) -> &str;

    /// Values of the fixed searchable fields, absent fields as `""`.
    fn search_haystack(&self) -> Vec<&str>;

    /// Comparable value for a sort key, `None` for unknown keys.
    fn sort_value(&self, key: &str) -> Option<SortValue>;
}
