use anyhow::Result;
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{Review, Reviewer};

/// A scripted reviewer for tests. Returns pre-defined outcomes in order
/// and remembers every prompt it was given.
pub struct MockReviewer {
    outcomes: Vec<Result<String, String>>,
    index: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl MockReviewer {
    pub fn new(outcomes: Vec<Result<String, String>>) -> Self {
        Self {
            outcomes,
            index: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Always-succeeding single reply.
    pub fn replying(text: &str) -> Self {
        Self::new(vec![Ok(text.to_string())])
    }

    /// Always-failing single reply.
    pub fn failing(message: &str) -> Self {
        Self::new(vec![Err(message.to_string())])
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|prompts| prompts.clone())
            .unwrap_or_default()
    }

    /// Number of times `review` was called.
    pub fn calls(&self) -> usize {
        self.index.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Reviewer for MockReviewer {
    fn model(&self) -> &str {
        "mock"
    }

    async fn review(&self, prompt: &str) -> Result<Review> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        let i = self.index.fetch_add(1, Ordering::SeqCst);
        let outcome = self.outcomes.get(i).ok_or_else(|| {
            anyhow::anyhow!("MockReviewer: no more outcomes (called {} times)", i + 1)
        })?;
        match outcome {
            Ok(text) => Ok(Review::text(text.clone())),
            Err(message) => Err(anyhow::anyhow!("{message}")),
        }
    }
}
