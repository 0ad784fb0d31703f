use anyhow::Result;
use async_trait::async_trait;

use linkdrop_core::{CompletionProvider, CompletionRequest};

/// A mock completion provider that returns canned responses.
pub struct MockProvider {
    response: Result<String, String>,
}

impl MockProvider {
    pub fn returning(response: impl Into<String>) -> Self {
        Self {
            response: Ok(response.into()),
        }
    }

    pub fn failing(error: impl Into<String>) -> Self {
        Self {
            response: Err(error.into()),
        }
    }
}

#[async_trait]
impl CompletionProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn complete(&self, _request: &CompletionRequest) -> Result<String> {
        match &self.response {
            Ok(text) => Ok(text.clone()),
            Err(message) => anyhow::bail!("{message}"),
        }
    }
}
