//! Recipe domain types.
//!
//! Field names on the wire follow the persisted browser format
//! (`prepTime`, `cookTime`, `image`, `dateAdded`), not the Rust names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::{RecipeId, UserId};
use crate::timestamp::to_rfc3339_ms_opt;

/// Category used when a submitted recipe leaves the category blank.
pub const DEFAULT_CATEGORY: &str = "other";

/// Image shown for recipes submitted without an upload.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://images.unsplash.com/photo-1556909114-f6e7ad7d3136?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80";

/// How hard a recipe is to prepare. Serialized as `"Easy"`, `"Medium"`, `"Hard"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

/// Per-serving nutrition facts. Macros are free text such as `"22g"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: u32,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
}

impl Default for Nutrition {
    fn default() -> Self {
        Self {
            calories: 0,
            protein: "0g".to_owned(),
            carbs: "0g".to_owned(),
            fat: "0g".to_owned(),
        }
    }
}

fn default_servings() -> u32 {
    1
}

/// A dish with its ingredients, steps and metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(rename = "prepTime", default)]
    pub prep_time_minutes: u32,
    #[serde(rename = "cookTime", default)]
    pub cook_time_minutes: u32,
    #[serde(default = "default_servings")]
    pub servings: u32,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    #[serde(default)]
    pub notes: String,
    #[serde(rename = "image", default)]
    pub image_ref: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub nutrition: Nutrition,
    /// Set only on user-added recipes.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "to_rfc3339_ms_opt"
    )]
    pub date_added: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<UserId>,
}

impl Recipe {
    /// Prep plus cook time, saturating at `u32::MAX`.
    pub fn total_time_minutes(&self) -> u32 {
        self.prep_time_minutes.saturating_add(self.cook_time_minutes)
    }

    /// Case-insensitive substring match against title, description,
    /// category or any ingredient. `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.category.to_lowercase().contains(needle)
            || self
                .ingredients
                .iter()
                .any(|i| i.to_lowercase().contains(needle))
    }
}
