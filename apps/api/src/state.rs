use std::sync::Arc;

use crate::identity::IdentityProvider;
use crate::llm_client::TextGenerator;
use crate::revalidate::Revalidator;
use crate::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once in `main`; nothing here is a process global.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ResumeStore>,
    pub identity: Arc<dyn IdentityProvider>,
    /// Content-improvement provider. Default: `GeminiClient`.
    pub llm: Arc<dyn TextGenerator>,
    pub revalidator: Revalidator,
}
