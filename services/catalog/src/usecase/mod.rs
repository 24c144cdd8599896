pub mod admin;
pub mod favorite;
pub mod recipe;
pub mod user;
