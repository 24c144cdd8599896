use recipebook_catalog::domain::form::{LineItems, RecipeForm};
use recipebook_catalog::domain::repository::RecipeRepository;
use recipebook_catalog::error::CatalogError;
use recipebook_catalog::usecase::recipe::{
    AddRecipeUseCase, DeleteRecipeUseCase, ExportRecipeUseCase, GetRecipeUseCase,
    ListRecipesUseCase, MyRecipesUseCase, OpenSelectedRecipeUseCase, SearchRecipesUseCase,
    SelectRecipeUseCase,
};
use recipebook_domain::id::RecipeId;

use crate::helpers::{pancake_form, profile, sign_up};

#[test]
fn should_list_four_builtins_on_fresh_profile() {
    let profile = profile();
    let entries = ListRecipesUseCase {
        recipes: profile.recipes(),
    }
    .execute()
    .unwrap();
    assert_eq!(entries.len(), 4);
    assert!(entries.iter().all(|e| !e.is_mutable()));
}

#[test]
fn should_find_carbonara_and_nothing_else() {
    let profile = profile();
    let search = SearchRecipesUseCase {
        recipes: profile.recipes(),
    };
    let hits = search.execute("carbonara").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].recipe.title, "Spaghetti Carbonara");
    assert!(search.execute("nonexistent-term-xyz").unwrap().is_empty());
}

#[test]
fn should_search_by_category_and_user_ingredients() {
    let profile = profile();
    AddRecipeUseCase {
        recipes: profile.recipes(),
        sessions: profile.sessions(),
    }
    .execute(&pancake_form())
    .unwrap();
    let search = SearchRecipesUseCase {
        recipes: profile.recipes(),
    };
    let dessert = search.execute("DESSERT").unwrap();
    assert_eq!(dessert.len(), 1);
    assert_eq!(dessert[0].recipe.id.as_str(), "chocolate-cake");
    let flour = search.execute("flour").unwrap();
    let titles: Vec<_> = flour.iter().map(|e| e.recipe.title.as_str()).collect();
    assert_eq!(titles, ["Decadent Chocolate Cake", "Fluffy Pancakes"]);
}

#[test]
fn should_add_recipe_from_form_and_read_it_back() {
    let profile = profile();
    let alice = sign_up(&profile, "Alice");
    let added = AddRecipeUseCase {
        recipes: profile.recipes(),
        sessions: profile.sessions(),
    }
    .execute(&pancake_form())
    .unwrap();
    assert_eq!(added.author_id.as_ref(), Some(&alice.user_id));

    let detail = GetRecipeUseCase {
        recipes: profile.recipes(),
        favorites: profile.favorites(),
    }
    .execute(&added.id)
    .unwrap();
    assert!(detail.entry.is_mutable());
    assert_eq!(detail.recipe(), &added);
    assert!(!detail.is_favorite);

    let mine = MyRecipesUseCase {
        recipes: profile.recipes(),
        sessions: profile.sessions(),
    }
    .execute()
    .unwrap();
    assert_eq!(mine, vec![added]);
}

#[test]
fn should_report_ingredient_error_alongside_other_errors() {
    let profile = profile();
    let form = RecipeForm {
        title: String::new(),
        servings: "0".into(),
        ingredients: LineItems::from_lines(["", " "]),
        ..pancake_form()
    };
    let result = AddRecipeUseCase {
        recipes: profile.recipes(),
        sessions: profile.sessions(),
    }
    .execute(&form);
    let Err(CatalogError::Validation(errors)) = result else {
        panic!("expected validation errors");
    };
    assert_eq!(errors.get("ingredients"), Some("At least one ingredient is required"));
    assert_eq!(errors.get("title"), Some("This field is required"));
    assert_eq!(errors.get("servings"), Some("Please enter a positive number"));
    assert_eq!(profile.recipes().list().unwrap().len(), 4);
}

#[test]
fn should_scale_detail_from_original_lines() {
    let profile = profile();
    let mut detail = GetRecipeUseCase {
        recipes: profile.recipes(),
        favorites: profile.favorites(),
    }
    .execute(&RecipeId::from("chocolate-cake"))
    .unwrap();
    detail.servings.set_target(4);
    let halved = detail.servings.scaled();
    assert_eq!(halved[0], "1 cups all-purpose flour");
    assert_eq!(halved[2], "0.38 cup cocoa powder");
    detail.servings.set_target(8);
    let restored = detail.servings.scaled();
    assert_eq!(restored[0], "2 cups all-purpose flour");
    assert_eq!(restored[2], "0.75 cup cocoa powder");
    assert_eq!(detail.servings.originals()[2], "3/4 cup cocoa powder");
}

#[test]
fn should_delete_only_user_recipes() {
    let profile = profile();
    let added = AddRecipeUseCase {
        recipes: profile.recipes(),
        sessions: profile.sessions(),
    }
    .execute(&pancake_form())
    .unwrap();
    let delete = DeleteRecipeUseCase {
        recipes: profile.recipes(),
    };
    assert!(!delete.execute(&RecipeId::from("spaghetti-carbonara")).unwrap());
    assert!(delete.execute(&added.id).unwrap());
    assert!(matches!(delete.execute(&added.id), Err(CatalogError::RecipeNotFound)));
    assert_eq!(profile.recipes().list().unwrap().len(), 4);
}

#[test]
fn should_open_selected_recipe() {
    let profile = profile();
    let open = OpenSelectedRecipeUseCase {
        recipes: profile.recipes(),
        favorites: profile.favorites(),
        selection: profile.selection(),
    };
    let err = open.execute().unwrap_err();
    assert!(matches!(err, CatalogError::NoRecipeSelected));
    assert!(err.redirects_to_catalog());

    SelectRecipeUseCase {
        selection: profile.selection(),
    }
    .execute(&RecipeId::from("chicken-tikka"))
    .unwrap();
    assert_eq!(open.execute().unwrap().recipe().title, "Chicken Tikka Masala");

    SelectRecipeUseCase {
        selection: profile.selection(),
    }
    .execute(&RecipeId::from("recipe-0-gone"))
    .unwrap();
    assert!(open.execute().unwrap_err().redirects_to_catalog());
}

#[test]
fn should_export_builtin_recipe() {
    let profile = profile();
    let exported = ExportRecipeUseCase {
        recipes: profile.recipes(),
    }
    .execute(&RecipeId::from("caesar-salad"))
    .unwrap();
    assert_eq!(exported.file_name, "Classic_Caesar_Salad_recipe.txt");
    let heading = format!("Classic Caesar Salad\n{}\n\n", "=".repeat(20));
    assert!(exported.contents.starts_with(&heading));
    assert!(exported.contents.contains("\nINGREDIENTS:\n1. 2 large romaine lettuce heads\n"));
    assert!(exported.contents.ends_with("\n---\nRecipe from My Recipe Book\n"));
}
