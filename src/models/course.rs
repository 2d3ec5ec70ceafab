//! Course record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Resource, SortValue};

/// A course as listed on the admin courses screen.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    /// Difficulty level (`beginner`, `intermediate`, `advanced`).
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub pricing: f64,
    #[serde(default)]
    pub instructor_name: String,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Course {
    /// Publication status as a filterable string.
    pub fn publication_status(&self) -> &'static str {
        if self.is_published {
            "published"
        } else {
            "draft"
        }
    }
}

impl Resource for Course {
    const KIND: &'static str = "courses";

    fn id(&self) -> &str {
        &self.id
    }

    fn status_or_default(&self) -> &str {
        self.publication_status()
    }

    fn search_haystack(&self) -> Vec<&str> {
        vec![
            &self.title,
            &self.subtitle,
            &self.instructor_name,
            &self.level,
        ]
    }

    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "title" => Some(SortValue::Text(self.title.clone())),
            "pricing" => Some(SortValue::Number(self.pricing)),
            "instructorName" => Some(SortValue::Text(self.instructor_name.clone())),
            "createdAt" => self.created_at.map(SortValue::Instant),
            _ => None,
        }
    }
}
