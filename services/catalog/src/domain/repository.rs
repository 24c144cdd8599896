//! Storage-facing contracts. All operations are synchronous: the catalog
//! runs on one logical thread and every call completes before returning.

use recipebook_domain::id::{RecipeId, UserId};
use recipebook_domain::recipe::Recipe;

use crate::domain::types::{CatalogEntry, NewRecipe, NewUser, Session, User};
use crate::error::CatalogError;

/// How passwords are stored and compared.
pub trait CredentialPolicy: Send + Sync {
    /// Turn a plaintext password into its stored form.
    fn seal(&self, plaintext: &str) -> String;
    fn verify(&self, stored: &str, candidate: &str) -> bool;
}

/// Stores and compares passwords as given. Not secure.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaintextCredentials;

impl CredentialPolicy for PlaintextCredentials {
    fn seal(&self, plaintext: &str) -> String {
        plaintext.to_owned()
    }

    fn verify(&self, stored: &str, candidate: &str) -> bool {
        stored == candidate
    }
}

/// The user directory.
pub trait UserRepository: Send + Sync {
    /// Ensure the administrator account exists. Returns `true` if it was created.
    fn bootstrap(&self) -> Result<bool, CatalogError>;
    /// Fails with `DuplicateIdentity` if the email or username is taken.
    fn create(&self, user: NewUser) -> Result<User, CatalogError>;
    /// Match email or username (case-insensitive) and password; inactive accounts never match.
    fn authenticate(&self, identifier: &str, password: &str) -> Result<Option<User>, CatalogError>;
    fn find_by_id(&self, id: &UserId) -> Result<Option<User>, CatalogError>;
    fn email_taken(&self, email: &str) -> Result<bool, CatalogError>;
    fn username_taken(&self, username: &str) -> Result<bool, CatalogError>;
    /// All users in insertion order.
    fn list(&self) -> Result<Vec<User>, CatalogError>;
    /// Returns `false` if the id is absent.
    fn set_active(&self, id: &UserId, active: bool) -> Result<bool, CatalogError>;
    /// Returns `false` if the id is absent or the administrator.
    fn delete(&self, id: &UserId) -> Result<bool, CatalogError>;
    /// Drop the whole directory.
    fn clear(&self) -> Result<(), CatalogError>;
}

/// The persisted current session.
pub trait SessionRepository: Send + Sync {
    fn current(&self) -> Result<Option<Session>, CatalogError>;
    fn start(&self, session: &Session) -> Result<(), CatalogError>;
    fn end(&self) -> Result<(), CatalogError>;
}

/// Built-in recipes merged with user-added ones.
pub trait RecipeRepository: Send + Sync {
    /// Built-ins first, then user recipes in insertion order.
    fn list(&self) -> Result<Vec<CatalogEntry>, CatalogError>;
    /// User tier first, then the built-in tier.
    fn get(&self, id: &RecipeId) -> Result<Option<CatalogEntry>, CatalogError>;
    /// Assign an id and `dateAdded`, then persist.
    fn add(&self, recipe: NewRecipe) -> Result<Recipe, CatalogError>;
    /// Returns `false` for built-in or unknown ids.
    fn delete(&self, id: &RecipeId) -> Result<bool, CatalogError>;
    fn search(&self, query: &str) -> Result<Vec<CatalogEntry>, CatalogError>;
    fn by_author(&self, author: &UserId) -> Result<Vec<Recipe>, CatalogError>;
}

/// The profile-wide favorite set.
pub trait FavoriteRepository: Send + Sync {
    fn list(&self) -> Result<Vec<RecipeId>, CatalogError>;
    fn is_favorite(&self, id: &RecipeId) -> Result<bool, CatalogError>;
    /// Flip membership. Returns whether `id` is a favorite afterwards.
    fn toggle(&self, id: &RecipeId) -> Result<bool, CatalogError>;
}

/// Recipe handed from the catalog view to the detail view.
pub trait SelectionRepository: Send + Sync {
    fn select(&self, id: &RecipeId) -> Result<(), CatalogError>;
    fn selected(&self) -> Result<Option<RecipeId>, CatalogError>;
}
