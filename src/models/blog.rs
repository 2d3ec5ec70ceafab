//! Blog post record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Resource, SortValue};

/// A blog post as managed from the admin blog dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    /// Publication status (`published`, `draft`).
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Resource for BlogPost {
    const KIND: &'static str = "blogs";

    fn id(&self) -> &str {
        &self.id
    }

    fn status_or_default(&self) -> &str {
        self.status.as_deref().unwrap_or("draft")
    }

    fn search_haystack(&self) -> Vec<&str> {
        vec![&self.title, &self.author]
    }

    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "title" => Some(SortValue::Text(self.title.clone())),
            "author" => Some(SortValue::Text(self.author.clone())),
            "createdAt" => self.created_at.map(SortValue::Instant),
            _ => None,
        }
    }
}
