use tracing::{info, warn};

use recipebook_domain::export::{export_file_name, format_recipe_for_export};
use recipebook_domain::id::RecipeId;
use recipebook_domain::recipe::Recipe;
use recipebook_domain::serving::ServingAdjuster;

use crate::domain::form::RecipeForm;
use crate::domain::repository::{
    FavoriteRepository, RecipeRepository, SelectionRepository, SessionRepository,
};
use crate::domain::types::CatalogEntry;
use crate::error::CatalogError;
use crate::usecase::user::require_session;

// ── ListRecipes ──────────────────────────────────────────────────────────────

pub struct ListRecipesUseCase<R: RecipeRepository> {
    pub recipes: R,
}

impl<R: RecipeRepository> ListRecipesUseCase<R> {
    pub fn execute(&self) -> Result<Vec<CatalogEntry>, CatalogError> {
        self.recipes.list()
    }
}

// ── SearchRecipes ────────────────────────────────────────────────────────────

pub struct SearchRecipesUseCase<R: RecipeRepository> {
    pub recipes: R,
}

impl<R: RecipeRepository> SearchRecipesUseCase<R> {
    /// A blank query lists everything; no match is an empty list.
    pub fn execute(&self, query: &str) -> Result<Vec<CatalogEntry>, CatalogError> {
        self.recipes.search(query)
    }
}

// ── RecipeDetail ─────────────────────────────────────────────────────────────

/// What the detail view renders for one recipe.
#[derive(Debug, Clone)]
pub struct RecipeDetail {
    pub entry: CatalogEntry,
    pub is_favorite: bool,
    pub servings: ServingAdjuster,
}

impl RecipeDetail {
    pub fn recipe(&self) -> &Recipe {
        &self.entry.recipe
    }
}

pub struct GetRecipeUseCase<R: RecipeRepository, F: FavoriteRepository> {
    pub recipes: R,
    pub favorites: F,
}

impl<R: RecipeRepository, F: FavoriteRepository> GetRecipeUseCase<R, F> {
    pub fn execute(&self, id: &RecipeId) -> Result<RecipeDetail, CatalogError> {
        load_detail(&self.recipes, &self.favorites, id)
    }
}

fn load_detail<R: RecipeRepository, F: FavoriteRepository>(
    recipes: &R,
    favorites: &F,
    id: &RecipeId,
) -> Result<RecipeDetail, CatalogError> {
    let entry = recipes.get(id)?.ok_or(CatalogError::RecipeNotFound)?;
    let servings = ServingAdjuster::new(entry.recipe.servings, &entry.recipe.ingredients);
    Ok(RecipeDetail {
        is_favorite: favorites.is_favorite(id)?,
        entry,
        servings,
    })
}

// ── SelectRecipe / OpenSelectedRecipe ────────────────────────────────────────

pub struct SelectRecipeUseCase<Sel: SelectionRepository> {
    pub selection: Sel,
}

impl<Sel: SelectionRepository> SelectRecipeUseCase<Sel> {
    pub fn execute(&self, id: &RecipeId) -> Result<(), CatalogError> {
        self.selection.select(id)
    }
}

pub struct OpenSelectedRecipeUseCase<R, F, Sel>
where
    R: RecipeRepository,
    F: FavoriteRepository,
    Sel: SelectionRepository,
{
    pub recipes: R,
    pub favorites: F,
    pub selection: Sel,
}

impl<R, F, Sel> OpenSelectedRecipeUseCase<R, F, Sel>
where
    R: RecipeRepository,
    F: FavoriteRepository,
    Sel: SelectionRepository,
{
    /// Both failure modes redirect the view back to the catalog.
    pub fn execute(&self) -> Result<RecipeDetail, CatalogError> {
        let id = self
            .selection
            .selected()?
            .ok_or(CatalogError::NoRecipeSelected)?;
        load_detail(&self.recipes, &self.favorites, &id)
    }
}

// ── AddRecipe ────────────────────────────────────────────────────────────────

pub struct AddRecipeUseCase<R: RecipeRepository, S: SessionRepository> {
    pub recipes: R,
    pub sessions: S,
}

impl<R: RecipeRepository, S: SessionRepository> AddRecipeUseCase<R, S> {
    /// Validate the form and commit the recipe, crediting the signed-in user.
    pub fn execute(&self, form: &RecipeForm) -> Result<Recipe, CatalogError> {
        let author = self.sessions.current()?.map(|s| s.user_id);
        let draft = form.collect(author)?;
        let recipe = self.recipes.add(draft)?;
        info!(recipe_id = %recipe.id, title = %recipe.title, "recipe added");
        Ok(recipe)
    }
}

// ── DeleteRecipe ─────────────────────────────────────────────────────────────

pub struct DeleteRecipeUseCase<R: RecipeRepository> {
    pub recipes: R,
}

impl<R: RecipeRepository> DeleteRecipeUseCase<R> {
    /// Returns `false` when `id` is built in, which is left untouched.
    pub fn execute(&self, id: &RecipeId) -> Result<bool, CatalogError> {
        delete_recipe(&self.recipes, id)
    }
}

pub(crate) fn delete_recipe<R: RecipeRepository>(
    recipes: &R,
    id: &RecipeId,
) -> Result<bool, CatalogError> {
    let entry = recipes.get(id)?.ok_or(CatalogError::RecipeNotFound)?;
    if !entry.is_mutable() {
        warn!(recipe_id = %id, "built-in recipe cannot be deleted");
        return Ok(false);
    }
    let deleted = recipes.delete(id)?;
    if deleted {
        info!(recipe_id = %id, "recipe deleted");
    }
    Ok(deleted)
}

// ── MyRecipes ────────────────────────────────────────────────────────────────

pub struct MyRecipesUseCase<R: RecipeRepository, S: SessionRepository> {
    pub recipes: R,
    pub sessions: S,
}

impl<R: RecipeRepository, S: SessionRepository> MyRecipesUseCase<R, S> {
    pub fn execute(&self) -> Result<Vec<Recipe>, CatalogError> {
        let session = require_session(&self.sessions)?;
        self.recipes.by_author(&session.user_id)
    }
}

// ── ExportRecipe ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedRecipe {
    pub file_name: String,
    pub contents: String,
}

pub struct ExportRecipeUseCase<R: RecipeRepository> {
    pub recipes: R,
}

impl<R: RecipeRepository> ExportRecipeUseCase<R> {
    pub fn execute(&self, id: &RecipeId) -> Result<ExportedRecipe, CatalogError> {
        let entry = self.recipes.get(id)?.ok_or(CatalogError::RecipeNotFound)?;
        Ok(ExportedRecipe {
            file_name: export_file_name(&entry.recipe.title),
            contents: format_recipe_for_export(&entry.recipe),
        })
    }
}
