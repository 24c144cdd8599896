use tracing::{info, warn};

use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::types::{NewUser, Session};
use crate::error::{CatalogError, IdentityField, ValidationErrors};

/// `local@domain.tld` with no whitespace and exactly one `@`.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// The signed-in session, or `NotLoggedIn`.
pub fn require_session<S: SessionRepository>(sessions: &S) -> Result<Session, CatalogError> {
    sessions.current()?.ok_or(CatalogError::NotLoggedIn)
}

/// The signed-in session if it belongs to an administrator.
pub fn require_admin<S: SessionRepository>(sessions: &S) -> Result<Session, CatalogError> {
    let session = require_session(sessions)?;
    if !session.is_admin() {
        warn!(user_id = %session.user_id, "admin operation refused");
        return Err(CatalogError::Forbidden);
    }
    Ok(session)
}

// ── Bootstrap ────────────────────────────────────────────────────────────────

pub struct BootstrapUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> BootstrapUseCase<U> {
    /// Returns `true` when the administrator account had to be created.
    pub fn execute(&self) -> Result<bool, CatalogError> {
        let created = self.users.bootstrap()?;
        if created {
            info!("administrator account created");
        }
        Ok(created)
    }
}

// ── SignUp ───────────────────────────────────────────────────────────────────

pub struct SignUpInput {
    pub name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

pub struct SignUpUseCase<U: UserRepository, S: SessionRepository> {
    pub users: U,
    pub sessions: S,
}

impl<U: UserRepository, S: SessionRepository> SignUpUseCase<U, S> {
    pub fn execute(&self, input: SignUpInput) -> Result<Session, CatalogError> {
        let name = input.name.trim();
        let email = input.email.trim();
        let username = input.username.trim();

        let mut errors = ValidationErrors::new();
        if name.chars().count() < 2 {
            errors.push("name", "Name must be at least 2 characters long");
        }
        if !is_valid_email(email) {
            errors.push("email", "Please enter a valid email address");
        }
        if username.chars().count() < 3 {
            errors.push("username", "Username must be at least 3 characters long");
        }
        if input.password.chars().count() < 6 {
            errors.push("password", "Password must be at least 6 characters long");
        }
        if input.password != input.confirm_password {
            errors.push("confirmPassword", "Passwords do not match");
        }
        for field in [IdentityField::Email, IdentityField::Username] {
            let taken = match field {
                IdentityField::Email => !email.is_empty() && self.users.email_taken(email)?,
                IdentityField::Username => {
                    !username.is_empty() && self.users.username_taken(username)?
                }
            };
            if taken {
                errors.push(field.field(), field.message());
            }
        }
        errors.into_result(())?;

        let user = self.users.create(NewUser {
            name: name.to_owned(),
            email: email.to_owned(),
            username: username.to_owned(),
            password: input.password,
        })?;
        let session = Session::start(&user);
        self.sessions.start(&session)?;
        info!(user_id = %user.id, "account created");
        Ok(session)
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    /// Email or username.
    pub identifier: String,
    pub password: String,
}

pub struct LoginUseCase<U: UserRepository, S: SessionRepository> {
    pub users: U,
    pub sessions: S,
}

impl<U: UserRepository, S: SessionRepository> LoginUseCase<U, S> {
    pub fn execute(&self, input: LoginInput) -> Result<Session, CatalogError> {
        let identifier = input.identifier.trim();
        let mut errors = ValidationErrors::new();
        if identifier.is_empty() {
            errors.push("identifier", "Email or username is required");
        }
        if input.password.is_empty() {
            errors.push("password", "Password is required");
        }
        errors.into_result(())?;

        let user = self
            .users
            .authenticate(identifier, &input.password)?
            .ok_or(CatalogError::InvalidCredentials)?;
        let session = Session::start(&user);
        self.sessions.start(&session)?;
        info!(user_id = %user.id, "logged in");
        Ok(session)
    }
}

// ── Logout ───────────────────────────────────────────────────────────────────

pub struct LogoutUseCase<S: SessionRepository> {
    pub sessions: S,
}

impl<S: SessionRepository> LogoutUseCase<S> {
    /// Returns `false` if nobody was signed in.
    pub fn execute(&self) -> Result<bool, CatalogError> {
        let Some(session) = self.sessions.current()? else {
            return Ok(false);
        };
        self.sessions.end()?;
        info!(user_id = %session.user_id, "logged out");
        Ok(true)
    }
}

// ── CurrentSession ───────────────────────────────────────────────────────────

pub struct CurrentSessionUseCase<S: SessionRepository> {
    pub sessions: S,
}

impl<S: SessionRepository> CurrentSessionUseCase<S> {
    pub fn execute(&self) -> Result<Option<Session>, CatalogError> {
        self.sessions.current()
    }
}
