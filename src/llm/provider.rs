use async_trait::async_trait;
use crate::error::Result;

/// A language-understanding backend: prompt text in, raw completion text out.
/// One call per invocation, with no retry, caching or batching behind it.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String>;
    fn name(&self) -> &str;
}
