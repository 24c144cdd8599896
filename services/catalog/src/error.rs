use std::fmt;

use crate::infra::kv::StorageError;

/// Which unique identity collided on account creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityField {
    Email,
    Username,
}

impl IdentityField {
    pub fn field(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Username => "username",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Email => "Email already exists",
            Self::Username => "Username already exists",
        }
    }
}

/// A message attached to one input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Every field error found in one pass. Validators push and keep going.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// First message recorded for `field`.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn has(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// `Ok(value)` when nothing was recorded.
    pub fn into_result<T>(self, value: T) -> Result<T, CatalogError> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(CatalogError::Validation(self))
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", e.field, e.message)?;
        }
        Ok(())
    }
}

/// Catalog domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),
    #[error("{} already exists", .0.field())]
    DuplicateIdentity(IdentityField),
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("not logged in")]
    NotLoggedIn,
    #[error("forbidden")]
    Forbidden,
    #[error("user not found")]
    UserNotFound,
    #[error("recipe not found")]
    RecipeNotFound,
    #[error("no recipe selected")]
    NoRecipeSelected,
    #[error("storage failure: {0}")]
    Storage(#[from] StorageError),
}

impl CatalogError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION",
            Self::DuplicateIdentity(_) => "DUPLICATE_IDENTITY",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::NotLoggedIn => "NOT_LOGGED_IN",
            Self::Forbidden => "FORBIDDEN",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::RecipeNotFound => "RECIPE_NOT_FOUND",
            Self::NoRecipeSelected => "NO_RECIPE_SELECTED",
            Self::Storage(_) => "STORAGE",
        }
    }

    /// Text shown to the person using the app.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(errors) => errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("\n"),
            Self::DuplicateIdentity(field) => field.message().to_owned(),
            Self::InvalidCredentials => "Invalid email/username or password".to_owned(),
            Self::NotLoggedIn => "Please log in to continue".to_owned(),
            Self::Forbidden => "Access denied. Admin privileges required.".to_owned(),
            Self::UserNotFound => "User not found".to_owned(),
            Self::RecipeNotFound => "Recipe not found".to_owned(),
            Self::NoRecipeSelected => "No recipe selected".to_owned(),
            Self::Storage(e) => {
                tracing::error!(error = %e, kind = "STORAGE", "storage failure");
                "There was an error saving your data. Please try again.".to_owned()
            }
        }
    }

    /// The detail view cannot render and should fall back to the catalog.
    pub fn redirects_to_catalog(&self) -> bool {
        matches!(self, Self::RecipeNotFound | Self::NoRecipeSelected)
    }
}
