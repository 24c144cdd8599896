use recipebook_catalog::domain::repository::{SessionRepository, UserRepository};
use recipebook_catalog::error::CatalogError;
use recipebook_catalog::usecase::admin::{
    AdminDeleteRecipeUseCase, ClearDirectoryUseCase, DeleteUserUseCase, DumpDirectoryUseCase,
    ListCatalogUseCase, ListUsersUseCase, SetUserActiveUseCase, StatisticsUseCase,
};
use recipebook_catalog::usecase::recipe::AddRecipeUseCase;
use recipebook_catalog::usecase::user::{BootstrapUseCase, LogoutUseCase};
use recipebook_domain::id::{RecipeId, UserId};

use crate::helpers::{login_admin, pancake_form, profile, sign_up};

#[test]
fn should_require_admin_session() {
    let profile = profile();
    let list = ListUsersUseCase {
        users: profile.users(),
        sessions: profile.sessions(),
    };
    assert!(matches!(list.execute(), Err(CatalogError::NotLoggedIn)));
    sign_up(&profile, "Alice");
    assert!(matches!(list.execute(), Err(CatalogError::Forbidden)));
    login_admin(&profile);
    assert_eq!(list.execute().unwrap().len(), 2);
}

#[test]
fn should_protect_admin_account() {
    let profile = profile();
    login_admin(&profile);
    let delete = DeleteUserUseCase {
        users: profile.users(),
        sessions: profile.sessions(),
    };
    assert!(matches!(delete.execute(&UserId::admin()), Err(CatalogError::Forbidden)));
    let deactivate = SetUserActiveUseCase {
        users: profile.users(),
        sessions: profile.sessions(),
    };
    assert!(matches!(
        deactivate.execute(&UserId::admin(), false),
        Err(CatalogError::Forbidden)
    ));
    assert!(profile.users().find_by_id(&UserId::admin()).unwrap().unwrap().is_active);
}

#[test]
fn should_delete_exactly_the_named_user() {
    let profile = profile();
    let alice = sign_up(&profile, "Alice");
    let bob = sign_up(&profile, "Bob");
    login_admin(&profile);

    let delete = DeleteUserUseCase {
        users: profile.users(),
        sessions: profile.sessions(),
    };
    delete.execute(&alice.user_id).unwrap();
    let ids: Vec<UserId> = profile.users().list().unwrap().into_iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![UserId::admin(), bob.user_id]);
    assert!(matches!(delete.execute(&alice.user_id), Err(CatalogError::UserNotFound)));
}

#[test]
fn should_toggle_user_status() {
    let profile = profile();
    let alice = sign_up(&profile, "Alice");
    login_admin(&profile);
    let set_active = SetUserActiveUseCase {
        users: profile.users(),
        sessions: profile.sessions(),
    };
    set_active.execute(&alice.user_id, false).unwrap();
    assert_eq!(profile.users().authenticate("alice", "secret1").unwrap(), None);
    set_active.execute(&alice.user_id, true).unwrap();
    assert!(profile.users().authenticate("alice", "secret1").unwrap().is_some());
    assert!(matches!(
        set_active.execute(&UserId::from("user_0_nobody"), true),
        Err(CatalogError::UserNotFound)
    ));
}

#[test]
fn should_count_users_recipes_and_session() {
    let profile = profile();
    let alice = sign_up(&profile, "Alice");
    AddRecipeUseCase {
        recipes: profile.recipes(),
        sessions: profile.sessions(),
    }
    .execute(&pancake_form())
    .unwrap();
    sign_up(&profile, "Bob");
    profile.users().set_active(&alice.user_id, false).unwrap();
    login_admin(&profile);

    let stats = StatisticsUseCase {
        users: profile.users(),
        recipes: profile.recipes(),
        sessions: profile.sessions(),
    }
    .execute()
    .unwrap();
    assert_eq!(stats.total_users, 3);
    assert_eq!(stats.active_users, 2);
    assert_eq!(stats.admin_users, 1);
    assert_eq!(stats.total_recipes, 5);
    assert_eq!(stats.active_sessions, 1);
    let json = serde_json::to_value(stats).unwrap();
    assert_eq!(json["totalRecipes"], 5);
}

#[test]
fn should_list_catalog_and_delete_user_recipe() {
    let profile = profile();
    let added = AddRecipeUseCase {
        recipes: profile.recipes(),
        sessions: profile.sessions(),
    }
    .execute(&pancake_form())
    .unwrap();
    login_admin(&profile);

    let entries = ListCatalogUseCase {
        recipes: profile.recipes(),
        sessions: profile.sessions(),
    }
    .execute()
    .unwrap();
    let mutable: Vec<_> = entries.iter().filter(|e| e.is_mutable()).collect();
    assert_eq!(mutable.len(), 1);
    assert_eq!(mutable[0].recipe.id, added.id);

    let delete = AdminDeleteRecipeUseCase {
        recipes: profile.recipes(),
        sessions: profile.sessions(),
    };
    assert!(!delete.execute(&RecipeId::from("chocolate-cake")).unwrap());
    assert!(delete.execute(&added.id).unwrap());
}

#[test]
fn should_dump_directory_with_session() {
    let profile = profile();
    sign_up(&profile, "Alice");
    login_admin(&profile);
    let dump = DumpDirectoryUseCase {
        users: profile.users(),
        sessions: profile.sessions(),
    }
    .execute()
    .unwrap();
    let json = serde_json::to_value(&dump).unwrap();
    assert_eq!(json["users"]["admin"]["username"], "admin");
    assert_eq!(json["users"].as_object().unwrap().len(), 2);
    assert_eq!(json["currentUser"]["userId"], "admin");
    assert!(json["timestamp"].as_str().unwrap().ends_with('Z'));
}

#[test]
fn should_clear_directory_and_rebootstrap_admin() {
    let profile = profile();
    sign_up(&profile, "Alice");
    login_admin(&profile);
    ClearDirectoryUseCase {
        users: profile.users(),
        sessions: profile.sessions(),
    }
    .execute()
    .unwrap();
    assert!(profile.users().list().unwrap().is_empty());
    assert!(profile.sessions().current().unwrap().is_none());

    assert!(
        BootstrapUseCase {
            users: profile.users(),
        }
        .execute()
        .unwrap()
    );
    assert_eq!(profile.users().list().unwrap().len(), 1);
    assert!(
        !LogoutUseCase {
            sessions: profile.sessions(),
        }
        .execute()
        .unwrap()
    );
}
