//! Identity resolver — maps the request's session token to an internal `User`.
//!
//! The external identity provider owns sessions and user creation. This module
//! only asks it "whose session is this?" and then reads the `users` row.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::models::user::User;
use crate::store::ResumeStore;

pub mod extractor;

pub use extractor::CurrentUser;

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// Verifies a session token with the external identity provider.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Returns the provider's user id for an active session, `None` otherwise.
    async fn verify_session(&self, token: &str) -> Result<Option<String>, IdentityError>;
}

/// RFC 7662 token introspection response. Only the fields we read.
#[derive(Debug, Deserialize)]
struct IntrospectionResponse {
    active: bool,
    sub: Option<String>,
}

/// `IdentityProvider` that calls an OAuth 2.0 token introspection endpoint.
#[derive(Clone)]
pub struct IntrospectionProvider {
    client: Client,
    url: String,
    api_key: String,
}

impl IntrospectionProvider {
    pub fn new(url: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            url,
            api_key,
        }
    }
}

#[async_trait]
impl IdentityProvider for IntrospectionProvider {
    async fn verify_session(&self, token: &str) -> Result<Option<String>, IdentityError> {
        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .form(&[("token", token)])
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Ok(None);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(IdentityError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: IntrospectionResponse = response.json().await?;
        Ok(active_subject(body))
    }
}

fn active_subject(body: IntrospectionResponse) -> Option<String> {
    if !body.active {
        return None;
    }
    body.sub.filter(|s| !s.is_empty())
}

/// Resolves the signed-in user for a request.
///
/// `None` means "not signed in": no token, an inactive session, or a session
/// whose user has not been provisioned in `users` yet.
pub async fn resolve_user(
    provider: &dyn IdentityProvider,
    store: &dyn ResumeStore,
    token: Option<&str>,
) -> Result<Option<User>, crate::errors::AppError> {
    let Some(token) = token else {
        return Ok(None);
    };

    let Some(external_id) = provider.verify_session(token).await? else {
        debug!("Session token is not active");
        return Ok(None);
    };

    let user = store.find_user_by_external_id(&external_id).await?;
    if user.is_none() {
        debug!(external_id = %external_id, "No internal user for authenticated session");
    }
    Ok(user)
}
