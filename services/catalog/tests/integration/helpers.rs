use recipebook_catalog::domain::form::{LineItems, RecipeForm};
use recipebook_catalog::domain::types::Session;
use recipebook_catalog::infra::memory::MemoryStore;
use recipebook_catalog::infra::store::{ADMIN_EMAIL, ADMIN_PASSWORD};
use recipebook_catalog::state::Catalog;
use recipebook_catalog::usecase::user::{
    BootstrapUseCase, LoginInput, LoginUseCase, SignUpInput, SignUpUseCase,
};

/// A fresh profile with the administrator bootstrapped.
pub fn profile() -> Catalog<MemoryStore> {
    let profile = Catalog::new(MemoryStore::new());
    BootstrapUseCase {
        users: profile.users(),
    }
    .execute()
    .unwrap();
    profile
}

pub fn signup_input(name: &str, email: &str, username: &str) -> SignUpInput {
    SignUpInput {
        name: name.into(),
        email: email.into(),
        username: username.into(),
        password: "secret1".into(),
        confirm_password: "secret1".into(),
    }
}

pub fn sign_up(profile: &Catalog<MemoryStore>, name: &str) -> Session {
    let handle = name.to_lowercase();
    SignUpUseCase {
        users: profile.users(),
        sessions: profile.sessions(),
    }
    .execute(signup_input(name, &format!("{handle}@example.com"), &handle))
    .unwrap()
}

pub fn login(profile: &Catalog<MemoryStore>, identifier: &str, password: &str) -> Session {
    LoginUseCase {
        users: profile.users(),
        sessions: profile.sessions(),
    }
    .execute(LoginInput {
        identifier: identifier.into(),
        password: password.into(),
    })
    .unwrap()
}

pub fn login_admin(profile: &Catalog<MemoryStore>) -> Session {
    login(profile, ADMIN_EMAIL, ADMIN_PASSWORD)
}

pub fn pancake_form() -> RecipeForm {
    RecipeForm {
        title: "Fluffy Pancakes".into(),
        description: "Weekend breakfast".into(),
        category: "breakfast".into(),
        prep_time: "10".into(),
        cook_time: "15".into(),
        servings: "4".into(),
        notes: "Rest the batter.".into(),
        ingredients: LineItems::from_lines(["2 cups flour", "1/2 tsp salt", "2 eggs"]),
        steps: LineItems::from_lines(["Whisk", "Fry"]),
        image: None,
    }
}
