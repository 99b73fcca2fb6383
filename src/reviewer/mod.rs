pub mod gemini;
pub mod mock;

use anyhow::Result;
use async_trait::async_trait;

/// Token usage reported by the provider for a single review.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    /// Total tokens (input + output).
    pub fn total(&self) -> u64 {
        self.input_tokens + self.output_tokens
    }
}

/// The provider's answer: review text plus optional token usage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub text: String,
    pub usage: Option<TokenUsage>,
}

impl Review {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            usage: None,
        }
    }
}

/// The borrowed reviewer. A hosted model in production, a script in tests.
#[async_trait]
pub trait Reviewer: Send + Sync {
    /// Model identifier requests are sent to.
    fn model(&self) -> &str;

    /// Send one prompt and await the full text answer.
    async fn review(&self, prompt: &str) -> Result<Review>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_total() {
        let usage = TokenUsage {
            input_tokens: 11,
            output_tokens: 7,
        };
        assert_eq!(usage.total(), 18);
        assert_eq!(TokenUsage::default().total(), 0);
    }

    #[test]
    fn review_text_has_no_usage() {
        let review = Review::text("fine");
        assert_eq!(review.text, "fine");
        assert!(review.usage.is_none());
    }
}
