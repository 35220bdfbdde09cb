//! Fit retrieved documents into the model's context window.

use anyhow::{Error, Result};
use tiktoken_rs::CoreBPE;

/// Tokens held back from the budget for the instruction and message
/// framing.
pub const RESERVED_TOKENS: usize = 200;

pub struct TokenCounter {
    bpe: CoreBPE,
}

impl TokenCounter {
    /// Counter using the `cl100k_base` encoding
    pub fn new() -> Result<Self, Error> {
        let bpe = tiktoken_rs::cl100k_base()?;
        Ok(Self { bpe })
    }

    pub fn count(&self, text: &str) -> usize {
        self.bpe.encode_with_special_tokens(text).len()
    }

    /// Tokens left for context once the query and reserve are paid for
    pub fn context_budget(&self, query: &str, max_tokens: usize) -> usize {
        max_tokens
            .saturating_sub(self.count(query))
            .saturating_sub(RESERVED_TOKENS)
    }

    /// Return `context` unchanged when it fits in `budget` tokens,
    /// otherwise keep whole words from the start while the running
    /// token count stays within the budget. Whitespace in the kept
    /// part collapses to single spaces.
    pub fn truncate(&self, context: &str, budget: usize) -> String {
        if self.count(context) <= budget {
            return context.to_string();
        }

        let mut used = 0;
        let mut kept = Vec::new();
        for word in context.split_whitespace() {
            used += self.count(word);
            if used > budget {
                break;
            }
            kept.push(word);
        }

        tracing::debug!(
            "Truncated context to {} of {} words",
            kept.len(),
            context.split_whitespace().count()
        );

        kept.join(" ")
    }
}
