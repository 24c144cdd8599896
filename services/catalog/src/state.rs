use std::path::PathBuf;
use std::sync::Arc;

use crate::infra::kv::KeyValueStore;
use crate::infra::store::{
    KvFavoriteRepository, KvRecipeRepository, KvSelectionRepository, KvSessionRepository,
    KvUserRepository,
};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub site_root: Arc<PathBuf>,
}

impl AppState {
    pub fn new(site_root: impl Into<PathBuf>) -> Self {
        Self {
            site_root: Arc::new(site_root.into()),
        }
    }
}

/// One browser profile: a single store that every repository is built over.
/// Construct once per process and hand repositories out from it.
#[derive(Clone)]
pub struct Catalog<S> {
    store: S,
}

impl<S: KeyValueStore + Clone> Catalog<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn users(&self) -> KvUserRepository<S> {
        KvUserRepository::new(self.store.clone())
    }

    pub fn sessions(&self) -> KvSessionRepository<S> {
        KvSessionRepository {
            store: self.store.clone(),
        }
    }

    pub fn recipes(&self) -> KvRecipeRepository<S> {
        KvRecipeRepository {
            store: self.store.clone(),
        }
    }

    pub fn favorites(&self) -> KvFavoriteRepository<S> {
        KvFavoriteRepository {
            store: self.store.clone(),
        }
    }

    pub fn selection(&self) -> KvSelectionRepository<S> {
        KvSelectionRepository {
            store: self.store.clone(),
        }
    }
}
