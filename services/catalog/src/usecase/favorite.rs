use tracing::info;

use recipebook_domain::id::RecipeId;

use crate::domain::repository::{FavoriteRepository, RecipeRepository};
use crate::domain::types::CatalogEntry;
use crate::error::CatalogError;

// ── ToggleFavorite ───────────────────────────────────────────────────────────

pub struct ToggleFavoriteUseCase<F: FavoriteRepository> {
    pub favorites: F,
}

impl<F: FavoriteRepository> ToggleFavoriteUseCase<F> {
    /// Returns whether the recipe is a favorite afterwards.
    pub fn execute(&self, id: &RecipeId) -> Result<bool, CatalogError> {
        let favorite = self.favorites.toggle(id)?;
        info!(recipe_id = %id, favorite, "favorite toggled");
        Ok(favorite)
    }
}

// ── IsFavorite ───────────────────────────────────────────────────────────────

pub struct IsFavoriteUseCase<F: FavoriteRepository> {
    pub favorites: F,
}

impl<F: FavoriteRepository> IsFavoriteUseCase<F> {
    pub fn execute(&self, id: &RecipeId) -> Result<bool, CatalogError> {
        self.favorites.is_favorite(id)
    }
}

// ── ListFavorites ────────────────────────────────────────────────────────────

pub struct ListFavoritesUseCase<F: FavoriteRepository, R: RecipeRepository> {
    pub favorites: F,
    pub recipes: R,
}

impl<F: FavoriteRepository, R: RecipeRepository> ListFavoritesUseCase<F, R> {
    /// Favorites in the order they were added. Ids whose recipe is gone are skipped.
    pub fn execute(&self) -> Result<Vec<CatalogEntry>, CatalogError> {
        let mut entries = Vec::new();
        for id in self.favorites.list()? {
            if let Some(entry) = self.recipes.get(&id)? {
                entries.push(entry);
            }
        }
        Ok(entries)
    }
}
