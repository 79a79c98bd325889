use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::portfolio::ALL_CATEGORY;

/// Category assigned to a freshly created project when no real category
/// exists yet.
pub(crate) const FALLBACK_CATEGORY: &str = "General";

/// A single gallery entry. Position within the containing list is
/// significant and persisted as array order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub link: String,
    #[serde(rename = "createdAt")]
    pub created_at: i64,
    #[serde(rename = "isFeatured", skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    #[serde(rename = "featuredAt", skip_serializing_if = "Option::is_none")]
    pub featured_at: Option<i64>,
}

impl Project {
    /// A new entry seeded with defaults: generated id, placeholder image,
    /// the first non-reserved category, current timestamp, not featured.
    pub fn with_defaults(categories: &[String], now_millis: i64) -> Self {
        let id = Uuid::new_v4().simple().to_string();
        let category = categories
            .iter()
            .find(|c| c.as_str() != ALL_CATEGORY)
            .cloned()
            .unwrap_or_else(|| FALLBACK_CATEGORY.to_string());

        Self {
            image_url: format!("https://picsum.photos/seed/{}/600/800", id),
            id,
            title: "Untitled Project".to_string(),
            description: String::new(),
            category,
            link: String::new(),
            created_at: now_millis,
            is_featured: Some(false),
            featured_at: None,
        }
    }

    pub fn featured(&self) -> bool {
        self.is_featured.unwrap_or(false)
    }

    /// Flip the hero-selection flag. Turning it on stamps `featured_at`,
    /// which orders the hero strip; turning it off clears the stamp.
    pub fn toggle_featured(&mut self, now_millis: i64) {
        if self.featured() {
            self.is_featured = Some(false);
            self.featured_at = None;
        } else {
            self.is_featured = Some(true);
            self.featured_at = Some(now_millis);
        }
    }
}
