//! App backend contract and registry.
//!
//! Each desktop app ships a backend implementing [`AppBackend`]: a single
//! entry point invoked once per request with an explicit [`Invocation`]. The
//! host resolves the backend by slug through [`AppRegistry`] and serialises
//! the tagged result into the response envelope.

pub mod profile;
pub mod rom_library;

use std::collections::HashMap;
use std::sync::Arc;

use tracing::warn;

use crate::domain::{BackendError, Invocation, Reply};

/// Per-app backend handler.
pub trait AppBackend: Send + Sync {
    /// Stable identifier the host dispatches on.
    fn slug(&self) -> &'static str;

    /// Handle one invocation.
    fn handle(&self, invocation: &Invocation) -> Result<Reply, BackendError>;
}

/// Slug-keyed registry of app backends, assembled once at startup.
#[derive(Clone, Default)]
pub struct AppRegistry {
    backends: HashMap<&'static str, Arc<dyn AppBackend>>,
}

impl AppRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a backend under its slug. A duplicate slug replaces the
    /// earlier registration.
    pub fn register(&mut self, backend: Arc<dyn AppBackend>) {
        let slug = backend.slug();
        if self.backends.insert(slug, backend).is_some() {
            warn!(app = slug, "replaced previously registered app backend");
        }
    }

    /// Registered slugs, sorted for stable logging.
    pub fn slugs(&self) -> Vec<&'static str> {
        let mut slugs: Vec<_> = self.backends.keys().copied().collect();
        slugs.sort_unstable();
        slugs
    }

    /// Route one invocation to the backend registered under `slug`.
    pub fn dispatch(&self, slug: &str, invocation: &Invocation) -> Result<Reply, BackendError> {
        match self.backends.get(slug) {
            Some(backend) => backend.handle(invocation),
            None => Err(BackendError::UnknownApp),
        }
    }
}
