//! Repositories backed by a [`KeyValueStore`]. Each persisted unit is read
//! in full and rewritten in full on every mutation.

use indexmap::IndexMap;
use tracing::debug;

use recipebook_domain::id::{RecipeId, UserId};
use recipebook_domain::recipe::Recipe;
use recipebook_domain::timestamp::now_ms;
use recipebook_domain::user::UserRole;

use crate::domain::repository::{
    CredentialPolicy, FavoriteRepository, PlaintextCredentials, RecipeRepository,
    SelectionRepository, SessionRepository, UserRepository,
};
use crate::domain::types::{CatalogEntry, NewRecipe, NewUser, Session, User};
use crate::error::{CatalogError, IdentityField};
use crate::infra::builtin::{builtin_recipes, find_builtin};
use crate::infra::kv::{KeyValueStore, keys};

type Directory = IndexMap<UserId, User>;
type UserRecipes = IndexMap<RecipeId, Recipe>;

pub const ADMIN_NAME: &str = "Administrator";
pub const ADMIN_EMAIL: &str = "admin@recipebook.com";
pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin123";

// ── Users ────────────────────────────────────────────────────────────────────

pub struct KvUserRepository<S, C = PlaintextCredentials> {
    pub store: S,
    pub credentials: C,
}

impl<S: KeyValueStore> KvUserRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            credentials: PlaintextCredentials,
        }
    }
}

impl<S: KeyValueStore, C: CredentialPolicy> KvUserRepository<S, C> {
    fn load(&self) -> Result<Directory, CatalogError> {
        Ok(self.store.load(keys::USERS_DIRECTORY)?.unwrap_or_default())
    }

    fn save(&self, directory: &Directory) -> Result<(), CatalogError> {
        self.store.save(keys::USERS_DIRECTORY, directory)?;
        debug!(users = directory.len(), "user directory saved");
        Ok(())
    }
}

impl<S: KeyValueStore, C: CredentialPolicy> UserRepository for KvUserRepository<S, C> {
    fn bootstrap(&self) -> Result<bool, CatalogError> {
        let mut directory = self.load()?;
        if directory.contains_key(&UserId::admin()) {
            return Ok(false);
        }
        let admin = User {
            id: UserId::admin(),
            name: ADMIN_NAME.to_owned(),
            email: ADMIN_EMAIL.to_owned(),
            username: ADMIN_USERNAME.to_owned(),
            password: self.credentials.seal(ADMIN_PASSWORD),
            role: UserRole::Admin,
            date_created: now_ms(),
            is_active: true,
        };
        // admin always leads the directory
        directory.shift_insert(0, admin.id.clone(), admin);
        self.save(&directory)?;
        Ok(true)
    }

    fn create(&self, user: NewUser) -> Result<User, CatalogError> {
        let mut directory = self.load()?;
        let email = user.email.trim().to_lowercase();
        let username = user.username.trim().to_lowercase();
        if directory.values().any(|u| u.email == email) {
            return Err(CatalogError::DuplicateIdentity(IdentityField::Email));
        }
        if directory.values().any(|u| u.username == username) {
            return Err(CatalogError::DuplicateIdentity(IdentityField::Username));
        }
        let created = User {
            id: UserId::generate(),
            name: user.name.trim().to_owned(),
            email,
            username,
            password: self.credentials.seal(&user.password),
            role: UserRole::User,
            date_created: now_ms(),
            is_active: true,
        };
        directory.insert(created.id.clone(), created.clone());
        self.save(&directory)?;
        Ok(created)
    }

    fn authenticate(&self, identifier: &str, password: &str) -> Result<Option<User>, CatalogError> {
        let identifier = identifier.trim().to_lowercase();
        Ok(self.load()?.into_values().find(|u| {
            (u.email == identifier || u.username == identifier)
                && self.credentials.verify(&u.password, password)
                && u.is_active
        }))
    }

    fn find_by_id(&self, id: &UserId) -> Result<Option<User>, CatalogError> {
        Ok(self.load()?.shift_remove(id))
    }

    fn email_taken(&self, email: &str) -> Result<bool, CatalogError> {
        let email = email.trim().to_lowercase();
        Ok(self.load()?.values().any(|u| u.email == email))
    }

    fn username_taken(&self, username: &str) -> Result<bool, CatalogError> {
        let username = username.trim().to_lowercase();
        Ok(self.load()?.values().any(|u| u.username == username))
    }

    fn list(&self) -> Result<Vec<User>, CatalogError> {
        Ok(self.load()?.into_values().collect())
    }

    fn set_active(&self, id: &UserId, active: bool) -> Result<bool, CatalogError> {
        let mut directory = self.load()?;
        let Some(user) = directory.get_mut(id) else {
            return Ok(false);
        };
        user.is_active = active;
        self.save(&directory)?;
        Ok(true)
    }

    fn delete(&self, id: &UserId) -> Result<bool, CatalogError> {
        if id.is_admin() {
            return Ok(false);
        }
        let mut directory = self.load()?;
        if directory.shift_remove(id).is_none() {
            return Ok(false);
        }
        self.save(&directory)?;
        Ok(true)
    }

    fn clear(&self) -> Result<(), CatalogError> {
        self.store.remove(keys::USERS_DIRECTORY)?;
        debug!("user directory cleared");
        Ok(())
    }
}

// ── Session ──────────────────────────────────────────────────────────────────

pub struct KvSessionRepository<S> {
    pub store: S,
}

impl<S: KeyValueStore> SessionRepository for KvSessionRepository<S> {
    fn current(&self) -> Result<Option<Session>, CatalogError> {
        Ok(self.store.load(keys::CURRENT_SESSION)?)
    }

    fn start(&self, session: &Session) -> Result<(), CatalogError> {
        self.store.save(keys::CURRENT_SESSION, session)?;
        debug!(user_id = %session.user_id, "session stored");
        Ok(())
    }

    fn end(&self) -> Result<(), CatalogError> {
        self.store.remove(keys::CURRENT_SESSION)?;
        Ok(())
    }
}

// ── Recipes ──────────────────────────────────────────────────────────────────

pub struct KvRecipeRepository<S> {
    pub store: S,
}

impl<S: KeyValueStore> KvRecipeRepository<S> {
    fn load(&self) -> Result<UserRecipes, CatalogError> {
        Ok(self.store.load(keys::USER_RECIPES)?.unwrap_or_default())
    }

    fn save(&self, recipes: &UserRecipes) -> Result<(), CatalogError> {
        self.store.save(keys::USER_RECIPES, recipes)?;
        debug!(recipes = recipes.len(), "user recipes saved");
        Ok(())
    }
}

impl<S: KeyValueStore> RecipeRepository for KvRecipeRepository<S> {
    fn list(&self) -> Result<Vec<CatalogEntry>, CatalogError> {
        let mut user = self.load()?;
        let mut entries: Vec<CatalogEntry> = builtin_recipes()
            .iter()
            .map(|b| match user.shift_remove(&b.id) {
                Some(shadow) => CatalogEntry::user_added(shadow),
                None => CatalogEntry::built_in(b.clone()),
            })
            .collect();
        entries.extend(user.into_values().map(CatalogEntry::user_added));
        Ok(entries)
    }

    fn get(&self, id: &RecipeId) -> Result<Option<CatalogEntry>, CatalogError> {
        if let Some(recipe) = self.load()?.shift_remove(id) {
            return Ok(Some(CatalogEntry::user_added(recipe)));
        }
        Ok(find_builtin(id).cloned().map(CatalogEntry::built_in))
    }

    fn add(&self, recipe: NewRecipe) -> Result<Recipe, CatalogError> {
        let mut recipes = self.load()?;
        let committed = recipe.commit(RecipeId::generate(), now_ms());
        recipes.insert(committed.id.clone(), committed.clone());
        self.save(&recipes)?;
        Ok(committed)
    }

    fn delete(&self, id: &RecipeId) -> Result<bool, CatalogError> {
        let mut recipes = self.load()?;
        if recipes.shift_remove(id).is_none() {
            return Ok(false);
        }
        self.save(&recipes)?;
        Ok(true)
    }

    fn search(&self, query: &str) -> Result<Vec<CatalogEntry>, CatalogError> {
        let needle = query.trim().to_lowercase();
        let entries = self.list()?;
        if needle.is_empty() {
            return Ok(entries);
        }
        Ok(entries
            .into_iter()
            .filter(|e| e.recipe.matches(&needle))
            .collect())
    }

    fn by_author(&self, author: &UserId) -> Result<Vec<Recipe>, CatalogError> {
        Ok(self
            .load()?
            .into_values()
            .filter(|r| r.author_id.as_ref() == Some(author))
            .collect())
    }
}

// ── Favorites ────────────────────────────────────────────────────────────────

pub struct KvFavoriteRepository<S> {
    pub store: S,
}

impl<S: KeyValueStore> KvFavoriteRepository<S> {
    fn load(&self) -> Result<Vec<RecipeId>, CatalogError> {
        Ok(self.store.load(keys::FAVORITE_RECIPE_IDS)?.unwrap_or_default())
    }
}

impl<S: KeyValueStore> FavoriteRepository for KvFavoriteRepository<S> {
    fn list(&self) -> Result<Vec<RecipeId>, CatalogError> {
        self.load()
    }

    fn is_favorite(&self, id: &RecipeId) -> Result<bool, CatalogError> {
        Ok(self.load()?.contains(id))
    }

    fn toggle(&self, id: &RecipeId) -> Result<bool, CatalogError> {
        let mut favorites = self.load()?;
        let now_favorite = match favorites.iter().position(|f| f == id) {
            Some(index) => {
                favorites.remove(index);
                false
            }
            None => {
                favorites.push(id.clone());
                true
            }
        };
        self.store.save(keys::FAVORITE_RECIPE_IDS, &favorites)?;
        debug!(recipe_id = %id, favorite = now_favorite, "favorites saved");
        Ok(now_favorite)
    }
}

// ── Selection ────────────────────────────────────────────────────────────────

pub struct KvSelectionRepository<S> {
    pub store: S,
}

impl<S: KeyValueStore> SelectionRepository for KvSelectionRepository<S> {
    fn select(&self, id: &RecipeId) -> Result<(), CatalogError> {
        self.store.save(keys::SELECTED_RECIPE_ID, id)?;
        Ok(())
    }

    fn selected(&self) -> Result<Option<RecipeId>, CatalogError> {
        Ok(self.store.load(keys::SELECTED_RECIPE_ID)?)
    }
}
