//! Shared application state injected into HTTP handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::PgLinkRepository;

/// Application state shared across all request handlers.
///
/// Cheap to clone; every field is an `Arc`. The pool is the only shared
/// mutable resource in the process, and it is owned here rather than by a
/// global.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<PgPool>,
    pub link_service: Arc<LinkService<PgLinkRepository>>,
}

impl AppState {
    /// Wires the repository and service stack on top of a connection pool.
    pub fn new(db: Arc<PgPool>) -> Self {
        let link_repository = Arc::new(PgLinkRepository::new(db.clone()));
        let link_service = Arc::new(LinkService::new(link_repository));

        Self { db, link_service }
    }
}
