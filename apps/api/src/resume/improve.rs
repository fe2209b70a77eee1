//! Content-improvement proxy.
//!
//! Fail-open policy: any provider failure is logged and the caller gets its
//! own text back. The UI never sees an error from this path.

use tracing::{debug, error};

use crate::llm_client::TextGenerator;
use crate::models::user::User;
use crate::resume::prompts::build_improve_prompt;

/// Rewrites `current` for the given resume section. Single attempt, no retry.
pub async fn improve_content(
    generator: &dyn TextGenerator,
    user: &User,
    current: &str,
    section_type: &str,
) -> String {
    let prompt = build_improve_prompt(current, section_type, user.industry.as_deref());

    match generator.generate(&prompt).await {
        Ok(text) => {
            debug!(user_id = %user.id, section_type, "Content improved");
            text.trim().to_string()
        }
        Err(e) => {
            error!(user_id = %user.id, section_type, "Error improving content: {e}");
            current.to_string()
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::llm_client::{LlmError, TextGenerator};

    /// Generator that replies with a canned response and records prompts.
    pub struct ScriptedGenerator {
        reply: Option<String>,
        pub prompts: Mutex<Vec<String>>,
    }

    impl ScriptedGenerator {
        pub fn replying(text: &str) -> Self {
            Self {
                reply: Some(text.to_string()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn failing() -> Self {
            Self {
                reply: None,
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn call_count(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reply.clone().ok_or(LlmError::Api {
                status: 500,
                message: "internal".to_string(),
            })
        }
    }
}
