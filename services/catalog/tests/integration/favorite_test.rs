use recipebook_catalog::domain::repository::FavoriteRepository;
use recipebook_catalog::usecase::favorite::{
    IsFavoriteUseCase, ListFavoritesUseCase, ToggleFavoriteUseCase,
};
use recipebook_catalog::usecase::recipe::{AddRecipeUseCase, DeleteRecipeUseCase, GetRecipeUseCase};
use recipebook_domain::id::RecipeId;

use crate::helpers::{pancake_form, profile};

#[test]
fn toggling_twice_restores_the_favorite_set() {
    let profile = profile();
    let toggle = ToggleFavoriteUseCase {
        favorites: profile.favorites(),
    };
    let is_favorite = IsFavoriteUseCase {
        favorites: profile.favorites(),
    };
    toggle.execute(&RecipeId::from("caesar-salad")).unwrap();
    let before = profile.favorites().list().unwrap();

    let id = RecipeId::from("chocolate-cake");
    let was = is_favorite.execute(&id).unwrap();
    assert_eq!(toggle.execute(&id).unwrap(), !was);
    assert_eq!(is_favorite.execute(&id).unwrap(), !was);
    assert_eq!(toggle.execute(&id).unwrap(), was);
    assert_eq!(profile.favorites().list().unwrap(), before);
}

#[test]
fn should_show_favorite_flag_on_detail() {
    let profile = profile();
    let id = RecipeId::from("chicken-tikka");
    ToggleFavoriteUseCase {
        favorites: profile.favorites(),
    }
    .execute(&id)
    .unwrap();
    let detail = GetRecipeUseCase {
        recipes: profile.recipes(),
        favorites: profile.favorites(),
    }
    .execute(&id)
    .unwrap();
    assert!(detail.is_favorite);
}

#[test]
fn should_drop_deleted_recipes_from_favorite_listing() {
    let profile = profile();
    let added = AddRecipeUseCase {
        recipes: profile.recipes(),
        sessions: profile.sessions(),
    }
    .execute(&pancake_form())
    .unwrap();
    let toggle = ToggleFavoriteUseCase {
        favorites: profile.favorites(),
    };
    toggle.execute(&added.id).unwrap();
    toggle.execute(&RecipeId::from("spaghetti-carbonara")).unwrap();

    DeleteRecipeUseCase {
        recipes: profile.recipes(),
    }
    .execute(&added.id)
    .unwrap();

    let listed = ListFavoritesUseCase {
        favorites: profile.favorites(),
        recipes: profile.recipes(),
    }
    .execute()
    .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].recipe.id.as_str(), "spaghetti-carbonara");
    // the stale id stays in the stored set
    assert_eq!(profile.favorites().list().unwrap().len(), 2);
}
