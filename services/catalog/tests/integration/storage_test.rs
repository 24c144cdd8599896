use recipebook_catalog::domain::repository::{FavoriteRepository, RecipeRepository, SessionRepository};
use recipebook_catalog::error::CatalogError;
use recipebook_catalog::infra::file::FileStore;
use recipebook_catalog::infra::kv::{KeyValueStore, StorageError, keys};
use recipebook_catalog::infra::memory::MemoryStore;
use recipebook_catalog::state::Catalog;
use recipebook_catalog::usecase::recipe::AddRecipeUseCase;
use recipebook_catalog::usecase::user::BootstrapUseCase;
use recipebook_domain::id::RecipeId;

use crate::helpers::{pancake_form, sign_up};

#[test]
fn should_survive_reload_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("profile.json");

    let first = Catalog::new(FileStore::open(&path));
    BootstrapUseCase {
        users: first.users(),
    }
    .execute()
    .unwrap();
    let added = AddRecipeUseCase {
        recipes: first.recipes(),
        sessions: first.sessions(),
    }
    .execute(&pancake_form())
    .unwrap();
    first.favorites().toggle(&added.id).unwrap();

    let reloaded = Catalog::new(FileStore::open(&path));
    assert!(
        !BootstrapUseCase {
            users: reloaded.users(),
        }
        .execute()
        .unwrap()
    );
    assert_eq!(reloaded.recipes().get(&added.id).unwrap().unwrap().recipe, added);
    assert!(reloaded.favorites().is_favorite(&added.id).unwrap());
}

#[test]
fn should_persist_user_recipes_in_browser_shape() {
    let profile = Catalog::new(MemoryStore::new());
    let added = AddRecipeUseCase {
        recipes: profile.recipes(),
        sessions: profile.sessions(),
    }
    .execute(&pancake_form())
    .unwrap();
    let stored = profile.store().get(keys::USER_RECIPES).unwrap().unwrap();
    let record = &stored[added.id.as_str()];
    assert_eq!(record["title"], "Fluffy Pancakes");
    assert_eq!(record["prepTime"], 10);
    assert_eq!(record["difficulty"], "Medium");
    assert_eq!(record["nutrition"]["protein"], "0g");
    assert!(record["dateAdded"].as_str().unwrap().ends_with('Z'));
}

#[test]
fn should_surface_quota_failure_and_leave_store_untouched() {
    let profile = Catalog::new(MemoryStore::with_quota(64));
    let result = AddRecipeUseCase {
        recipes: profile.recipes(),
        sessions: profile.sessions(),
    }
    .execute(&pancake_form());
    let Err(err) = result else {
        panic!("expected quota failure");
    };
    assert!(matches!(
        err,
        CatalogError::Storage(StorageError::QuotaExceeded { .. })
    ));
    assert_eq!(err.kind(), "STORAGE");
    assert_eq!(profile.recipes().list().unwrap().len(), 4);
}

#[test]
fn should_report_corrupt_favorites_as_storage_error() {
    let profile = Catalog::new(MemoryStore::new());
    profile.store().set_item(keys::FAVORITE_RECIPE_IDS, "not json").unwrap();
    let result = profile.favorites().toggle(&RecipeId::from("caesar-salad"));
    assert!(matches!(result, Err(CatalogError::Storage(StorageError::Json(_)))));
}

#[test]
fn should_keep_session_across_catalog_handles() {
    let store = MemoryStore::new();
    let profile = Catalog::new(store.clone());
    BootstrapUseCase {
        users: profile.users(),
    }
    .execute()
    .unwrap();
    let session = sign_up(&profile, "Alice");
    let other = Catalog::new(store);
    assert_eq!(other.sessions().current().unwrap(), Some(session));
}
