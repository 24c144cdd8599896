//! Domain types and pure functions for the recipe book.
//!
//! This crate does no I/O. Import it from `domain/` and `usecase/` layers and
//! from front ends that only need to render.

pub mod export;
pub mod format;
pub mod id;
pub mod recipe;
pub mod scale;
pub mod serving;
pub mod timestamp;
pub mod user;
