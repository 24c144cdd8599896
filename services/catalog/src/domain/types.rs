use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use recipebook_domain::id::{RecipeId, UserId};
use recipebook_domain::recipe::{Difficulty, Nutrition, Recipe};
use recipebook_domain::timestamp::{now_ms, to_rfc3339_ms};
use recipebook_domain::user::UserRole;

/// Account record as held in the user directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    /// Stored lowercase.
    pub email: String,
    /// Stored lowercase.
    pub username: String,
    /// Sealed by the directory's credential policy.
    pub password: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub date_created: DateTime<Utc>,
    pub is_active: bool,
}

/// Input for account creation; normalisation happens in the directory.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub username: String,
    pub password: String,
}

/// The signed-in account for this profile, persisted across reloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub started_at: DateTime<Utc>,
}

impl Session {
    pub fn start(user: &User) -> Self {
        Self {
            user_id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            started_at: now_ms(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Where a catalog record comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RecipeOrigin {
    BuiltIn,
    UserAdded,
}

/// A recipe as seen through the catalog, tagged with its origin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogEntry {
    #[serde(flatten)]
    pub recipe: Recipe,
    pub origin: RecipeOrigin,
}

impl CatalogEntry {
    pub fn built_in(recipe: Recipe) -> Self {
        Self {
            recipe,
            origin: RecipeOrigin::BuiltIn,
        }
    }

    pub fn user_added(recipe: Recipe) -> Self {
        Self {
            recipe,
            origin: RecipeOrigin::UserAdded,
        }
    }

    /// Only user-added records can be deleted.
    pub fn is_mutable(&self) -> bool {
        self.origin == RecipeOrigin::UserAdded
    }
}

/// A recipe assembled from user input, before the repository commits it.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecipe {
    pub title: String,
    pub description: String,
    pub category: String,
    pub prep_time_minutes: u32,
    pub cook_time_minutes: u32,
    pub servings: u32,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub notes: String,
    pub image_ref: String,
    pub difficulty: Difficulty,
    pub nutrition: Nutrition,
    pub author_id: Option<UserId>,
}

impl NewRecipe {
    pub fn commit(self, id: RecipeId, date_added: DateTime<Utc>) -> Recipe {
        Recipe {
            id,
            title: self.title,
            description: self.description,
            category: self.category,
            prep_time_minutes: self.prep_time_minutes,
            cook_time_minutes: self.cook_time_minutes,
            servings: self.servings,
            ingredients: self.ingredients,
            instructions: self.instructions,
            notes: self.notes,
            image_ref: self.image_ref,
            difficulty: self.difficulty,
            nutrition: self.nutrition,
            date_added: Some(date_added),
            author_id: self.author_id,
        }
    }
}

/// Counters shown on the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_users: usize,
    pub active_users: usize,
    pub admin_users: usize,
    pub total_recipes: usize,
    pub active_sessions: usize,
}

/// Snapshot of the user directory for inspection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryDump {
    pub users: IndexMap<UserId, User>,
    pub current_user: Option<Session>,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub timestamp: DateTime<Utc>,
}
