//! Link creation, retrieval, deletion, and redirect resolution.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, validate_custom_code};
use crate::utils::url_validator::validate_target_url;
use serde_json::json;

/// Service for managing shortened links.
///
/// Orchestrates validation, code generation, and uniqueness checks over a
/// [`LinkRepository`]. Holds no mutable state of its own; all shared state
/// lives in the store.
pub struct LinkService<R: LinkRepository> {
    repository: Arc<R>,
}

impl<R: LinkRepository> LinkService<R> {
    /// Creates a new link service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a short link.
    ///
    /// # Arguments
    ///
    /// - `target_url` - The destination URL (validated, stored verbatim)
    /// - `custom_code` - Optional caller-supplied short code
    ///
    /// # Code Resolution
    ///
    /// - A custom code is validated and used exactly as supplied; if it is
    ///   already taken the call fails with [`AppError::Conflict`].
    /// - Otherwise a random 6-character code is generated, retrying a
    ///   bounded number of times on collision.
    ///
    /// The store's primary key remains the backstop for the check-then-insert
    /// race: a concurrent insert of the same code surfaces as
    /// [`AppError::Conflict`] from [`LinkRepository::insert`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL or custom code is
    /// malformed, [`AppError::Conflict`] if the code is taken.
    pub async fn create_link(
        &self,
        target_url: String,
        custom_code: Option<String>,
    ) -> Result<Link, AppError> {
        validate_target_url(&target_url).map_err(|e| {
            AppError::bad_request(
                "Invalid target URL",
                json!({ "field": "targetUrl", "reason": e.to_string() }),
            )
        })?;

        let code = match custom_code {
            Some(custom) => {
                validate_custom_code(&custom)?;

                if self.repository.find_by_code(&custom).await?.is_some() {
                    return Err(AppError::conflict(
                        "Short code already exists",
                        json!({ "code": custom }),
                    ));
                }

                custom
            }
            None => self.generate_unique_code().await?,
        };

        self.repository.insert(NewLink { code, target_url }).await
    }

    /// Retrieves a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn get_link(&self, code: &str) -> Result<Link, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Link not found", json!({ "code": code })))
    }

    /// Lists all links, oldest first.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.repository.list_all().await
    }

    /// Deletes a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn delete_link(&self, code: &str) -> Result<(), AppError> {
        if !self.repository.delete(code).await? {
            return Err(AppError::not_found(
                "Link not found",
                json!({ "code": code }),
            ));
        }

        Ok(())
    }

    /// Resolves a click: counts it and returns the redirect destination.
    ///
    /// The increment and the `last_clicked` stamp happen in one atomic
    /// store operation; an unknown code mutates nothing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn resolve_click(&self, code: &str) -> Result<String, AppError> {
        self.repository
            .record_click(code)
            .await?
            .ok_or_else(|| AppError::not_found("Link not found", json!({ "code": code })))
    }

    /// Generates a short code not currently present in the store.
    ///
    /// Attempts up to 10 times before failing.
    async fn generate_unique_code(&self) -> Result<String, AppError> {
        const MAX_ATTEMPTS: usize = 10;

        for _ in 0..MAX_ATTEMPTS {
            let code = generate_code();

            if self.repository.find_by_code(&code).await?.is_none() {
                return Ok(code);
            }
        }

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions" }),
        ))
    }
}
