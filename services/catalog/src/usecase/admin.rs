//! Administrator panel operations. Every operation requires a session whose
//! role is admin.

use chrono::Utc;
use indexmap::IndexMap;
use tracing::{info, warn};

use recipebook_domain::id::{RecipeId, UserId};

use crate::domain::repository::{RecipeRepository, SessionRepository, UserRepository};
use crate::domain::types::{CatalogEntry, DirectoryDump, Statistics, User};
use crate::error::CatalogError;
use crate::usecase::recipe::delete_recipe;
use crate::usecase::user::require_admin;

// ── ListUsers ────────────────────────────────────────────────────────────────

pub struct ListUsersUseCase<U: UserRepository, S: SessionRepository> {
    pub users: U,
    pub sessions: S,
}

impl<U: UserRepository, S: SessionRepository> ListUsersUseCase<U, S> {
    pub fn execute(&self) -> Result<Vec<User>, CatalogError> {
        require_admin(&self.sessions)?;
        self.users.list()
    }
}

// ── SetUserActive ────────────────────────────────────────────────────────────

pub struct SetUserActiveUseCase<U: UserRepository, S: SessionRepository> {
    pub users: U,
    pub sessions: S,
}

impl<U: UserRepository, S: SessionRepository> SetUserActiveUseCase<U, S> {
    pub fn execute(&self, id: &UserId, active: bool) -> Result<(), CatalogError> {
        require_admin(&self.sessions)?;
        if id.is_admin() {
            warn!("administrator account cannot be deactivated");
            return Err(CatalogError::Forbidden);
        }
        if !self.users.set_active(id, active)? {
            return Err(CatalogError::UserNotFound);
        }
        info!(user_id = %id, active, "user status changed");
        Ok(())
    }
}

// ── DeleteUser ───────────────────────────────────────────────────────────────

pub struct DeleteUserUseCase<U: UserRepository, S: SessionRepository> {
    pub users: U,
    pub sessions: S,
}

impl<U: UserRepository, S: SessionRepository> DeleteUserUseCase<U, S> {
    pub fn execute(&self, id: &UserId) -> Result<(), CatalogError> {
        require_admin(&self.sessions)?;
        if id.is_admin() {
            warn!("administrator account cannot be deleted");
            return Err(CatalogError::Forbidden);
        }
        if !self.users.delete(id)? {
            return Err(CatalogError::UserNotFound);
        }
        info!(user_id = %id, "user deleted");
        Ok(())
    }
}

// ── ListCatalog ──────────────────────────────────────────────────────────────

pub struct ListCatalogUseCase<R: RecipeRepository, S: SessionRepository> {
    pub recipes: R,
    pub sessions: S,
}

impl<R: RecipeRepository, S: SessionRepository> ListCatalogUseCase<R, S> {
    /// Entries carry their origin so the panel offers delete only where allowed.
    pub fn execute(&self) -> Result<Vec<CatalogEntry>, CatalogError> {
        require_admin(&self.sessions)?;
        self.recipes.list()
    }
}

// ── AdminDeleteRecipe ────────────────────────────────────────────────────────

pub struct AdminDeleteRecipeUseCase<R: RecipeRepository, S: SessionRepository> {
    pub recipes: R,
    pub sessions: S,
}

impl<R: RecipeRepository, S: SessionRepository> AdminDeleteRecipeUseCase<R, S> {
    /// Returns `false` for built-in recipes, which stay.
    pub fn execute(&self, id: &RecipeId) -> Result<bool, CatalogError> {
        require_admin(&self.sessions)?;
        delete_recipe(&self.recipes, id)
    }
}

// ── Statistics ───────────────────────────────────────────────────────────────

pub struct StatisticsUseCase<U: UserRepository, R: RecipeRepository, S: SessionRepository> {
    pub users: U,
    pub recipes: R,
    pub sessions: S,
}

impl<U, R, S> StatisticsUseCase<U, R, S>
where
    U: UserRepository,
    R: RecipeRepository,
    S: SessionRepository,
{
    pub fn execute(&self) -> Result<Statistics, CatalogError> {
        require_admin(&self.sessions)?;
        let users = self.users.list()?;
        Ok(Statistics {
            total_users: users.len(),
            active_users: users.iter().filter(|u| u.is_active).count(),
            admin_users: users.iter().filter(|u| u.role.is_admin()).count(),
            total_recipes: self.recipes.list()?.len(),
            // one profile holds at most one session; the caller's is it
            active_sessions: 1,
        })
    }
}

// ── DumpDirectory ────────────────────────────────────────────────────────────

pub struct DumpDirectoryUseCase<U: UserRepository, S: SessionRepository> {
    pub users: U,
    pub sessions: S,
}

impl<U: UserRepository, S: SessionRepository> DumpDirectoryUseCase<U, S> {
    pub fn execute(&self) -> Result<DirectoryDump, CatalogError> {
        let session = require_admin(&self.sessions)?;
        let users: IndexMap<UserId, User> = self
            .users
            .list()?
            .into_iter()
            .map(|u| (u.id.clone(), u))
            .collect();
        Ok(DirectoryDump {
            users,
            current_user: Some(session),
            timestamp: Utc::now(),
        })
    }
}

// ── ClearDirectory ───────────────────────────────────────────────────────────

pub struct ClearDirectoryUseCase<U: UserRepository, S: SessionRepository> {
    pub users: U,
    pub sessions: S,
}

impl<U: UserRepository, S: SessionRepository> ClearDirectoryUseCase<U, S> {
    /// Drop every account and the session. The next bootstrap recreates the admin.
    pub fn execute(&self) -> Result<(), CatalogError> {
        let session = require_admin(&self.sessions)?;
        self.users.clear()?;
        self.sessions.end()?;
        warn!(cleared_by = %session.user_id, "user directory cleared");
        Ok(())
    }
}
