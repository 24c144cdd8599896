use recipebook_catalog::domain::repository::{SessionRepository, UserRepository};
use recipebook_catalog::domain::types::NewUser;
use recipebook_catalog::error::CatalogError;
use recipebook_catalog::infra::memory::MemoryStore;
use recipebook_catalog::infra::store::KvUserRepository;
use recipebook_catalog::state::Catalog;
use recipebook_catalog::usecase::user::{
    BootstrapUseCase, CurrentSessionUseCase, LoginInput, LoginUseCase, LogoutUseCase,
    SignUpUseCase,
};
use recipebook_domain::id::UserId;

use crate::helpers::{login, login_admin, profile, sign_up, signup_input};

#[test]
fn should_bootstrap_admin_idempotently() {
    let profile = Catalog::new(MemoryStore::new());
    let bootstrap = BootstrapUseCase {
        users: profile.users(),
    };
    assert!(bootstrap.execute().unwrap());
    assert!(!bootstrap.execute().unwrap());
    let admin = profile.users().find_by_id(&UserId::admin()).unwrap().unwrap();
    assert_eq!(admin.username, "admin");
    assert!(admin.is_active);
}

#[test]
fn should_authenticate_created_user_with_same_credentials() {
    let repo = KvUserRepository::new(MemoryStore::new());
    let created = repo
        .create(NewUser {
            name: "Dana".into(),
            email: "Dana@Example.com".into(),
            username: "dana".into(),
            password: "hunter22".into(),
        })
        .unwrap();
    assert_eq!(repo.authenticate("dana@example.com", "hunter22").unwrap(), Some(created.clone()));
    assert_eq!(repo.authenticate("DANA", "hunter22").unwrap(), Some(created.clone()));

    repo.set_active(&created.id, false).unwrap();
    assert_eq!(repo.authenticate("dana", "hunter22").unwrap(), None);
}

#[test]
fn should_sign_up_and_persist_session() {
    let profile = profile();
    let session = sign_up(&profile, "Alice");
    let current = CurrentSessionUseCase {
        sessions: profile.sessions(),
    }
    .execute()
    .unwrap();
    assert_eq!(current, Some(session));
}

#[test]
fn should_reject_signup_with_taken_email_and_username() {
    let profile = profile();
    sign_up(&profile, "Alice");
    let result = SignUpUseCase {
        users: profile.users(),
        sessions: profile.sessions(),
    }
    .execute(signup_input("Alice Two", "ALICE@example.com", "Alice"));
    let Err(CatalogError::Validation(errors)) = result else {
        panic!("expected validation errors");
    };
    assert_eq!(errors.get("email"), Some("Email already exists"));
    assert_eq!(errors.get("username"), Some("Username already exists"));
    assert_eq!(profile.users().list().unwrap().len(), 2);
}

#[test]
fn should_reject_admin_identity_on_signup() {
    let profile = profile();
    let result = SignUpUseCase {
        users: profile.users(),
        sessions: profile.sessions(),
    }
    .execute(signup_input("Impostor", "admin@recipebook.com", "admin"));
    assert!(matches!(result, Err(CatalogError::Validation(_))));
}

#[test]
fn should_login_by_username_after_logout() {
    let profile = profile();
    let alice = sign_up(&profile, "Alice");
    assert!(
        LogoutUseCase {
            sessions: profile.sessions(),
        }
        .execute()
        .unwrap()
    );
    assert!(profile.sessions().current().unwrap().is_none());

    let again = login(&profile, "ALICE", "secret1");
    assert_eq!(again.user_id, alice.user_id);
}

#[test]
fn should_refuse_login_for_deactivated_user() {
    let profile = profile();
    let alice = sign_up(&profile, "Alice");
    profile.users().set_active(&alice.user_id, false).unwrap();
    let result = LoginUseCase {
        users: profile.users(),
        sessions: profile.sessions(),
    }
    .execute(LoginInput {
        identifier: "alice".into(),
        password: "secret1".into(),
    });
    assert!(matches!(result, Err(CatalogError::InvalidCredentials)));
}

#[test]
fn should_log_in_as_bootstrapped_admin() {
    let profile = profile();
    let session = login_admin(&profile);
    assert!(session.is_admin());
    assert_eq!(session.name, "Administrator");
}
