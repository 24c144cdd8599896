//! Newtype wrappers for domain identifiers.
//!
//! Generated ids are a millisecond timestamp plus a nine character base-36
//! suffix. Uniqueness is probabilistic; a collision is not detected.

use std::fmt;

use chrono::Utc;
use rand::RngExt;
use serde::{Deserialize, Serialize};

/// Id of the built-in administrator account.
pub const ADMIN_USER_ID: &str = "admin";

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 9;

fn random_suffix() -> String {
    let mut rng = rand::rng();
    (0..SUFFIX_LEN)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect()
}

fn time_random_id(prefix: &str, sep: char) -> String {
    let millis = Utc::now().timestamp_millis();
    format!("{prefix}{sep}{millis}{sep}{}", random_suffix())
}

/// Identifies a user account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    /// `user_<millis>_<suffix>`
    pub fn generate() -> Self {
        Self(time_random_id("user", '_'))
    }

    pub fn admin() -> Self {
        Self(ADMIN_USER_ID.to_owned())
    }

    pub fn is_admin(&self) -> bool {
        self.0 == ADMIN_USER_ID
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Identifies a recipe, built-in or user-added.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(pub String);

impl RecipeId {
    /// `recipe-<millis>-<suffix>`
    pub fn generate() -> Self {
        Self(time_random_id("recipe", '-'))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for RecipeId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for RecipeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
