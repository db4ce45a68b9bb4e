//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing short links.
///
/// Every operation is a single-round-trip store call; the trait has no
/// notion of retries or transactions beyond what one statement gives.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new short link with zeroed counters.
    ///
    /// The `links` primary key enforces code uniqueness; a concurrent
    /// insert of the same code loses with [`AppError::Conflict`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Lists all links ordered by creation time, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_all(&self) -> Result<Vec<Link>, AppError>;

    /// Deletes a link by its short code.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if no link
    /// matched the code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, code: &str) -> Result<bool, AppError>;

    /// Atomically counts a click and returns the link's target URL.
    ///
    /// Increments `clicks` by exactly 1 and sets `last_clicked` to the
    /// store's clock in a single UPDATE expression, so concurrent clicks on
    /// the same code never lose increments. Returns `Ok(None)` without any
    /// mutation if the code is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn record_click(&self, code: &str) -> Result<Option<String>, AppError>;
}
