//! Restyle Engine
//!
//! The single boundary callers consume: a free-text style prompt in, a
//! stylesheet string out.
//!
//! ```text
//! prompt → classify() → TagSet → resolve() → ResolvedStyle → emit() → CSS
//! ```
//!
//! The engine is total over every string input, including empty and
//! gibberish prompts (the default template is the fallback), so
//! [`StyleEngine::generate`] cannot fail. Empty-prompt rejection is a
//! caller-side concern; frontends use [`validate_prompt`] for it.
//!
//! The [`StyleEngine`] trait is the seam for a future model-backed
//! generator: variants are selected through [`EngineConfig`], never by
//! inheritance, and every variant must keep the same total contract.

use restyle_classifier::{classify, TagSet};
use restyle_emitter::emit;
use restyle_resolver::{resolve, Registry, ResolvedStyle};

/// Canned prompts the UI offers for quick selection.
pub const SUGGESTIONS: &[&str] = &[
    "Make it appear with Bauhaus aesthetics",
    "Update the site to feel modern, friendly, and tech-forward",
    "I want it to look glassy and reflective",
    "Give everything a retro-gaming flair",
    "I want it as a hunter green theme",
    "Make it feel like Christmas",
];

/// Caller-side prompt validation error. The engine itself accepts any
/// string; this is the `InvalidInput` category frontends report before
/// invoking generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PromptError {
    #[error("prompt is empty; enter a style description or pick a suggestion")]
    Empty,
}

/// Reject prompts that are empty after trimming. Returns the prompt
/// unchanged (not trimmed) when valid.
pub fn validate_prompt(prompt: &str) -> Result<&str, PromptError> {
    if prompt.trim().is_empty() {
        Err(PromptError::Empty)
    } else {
        Ok(prompt)
    }
}

/// A prompt-to-stylesheet generator.
///
/// Total, synchronous, and reentrant: implementations hold no per-request
/// state and are safe to call concurrently. Object-safe so frontends can
/// hold `Box<dyn StyleEngine>` selected from configuration.
pub trait StyleEngine: Send + Sync {
    /// Generate a stylesheet for a prompt. Never fails, never returns an
    /// empty string.
    fn generate(&self, prompt: &str) -> String;
}

/// Which engine variant a frontend should construct.
///
/// `StaticTemplate` is the only implemented variant; a model-backed
/// engine would slot in here as a second variant behind the same trait.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EngineKind {
    #[default]
    StaticTemplate,
}

/// Engine selection configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineConfig {
    pub kind: EngineKind,
}

/// Construct the engine a configuration asks for.
pub fn build_engine(config: EngineConfig) -> Box<dyn StyleEngine> {
    match config.kind {
        EngineKind::StaticTemplate => Box::new(StaticTemplateEngine::new()),
    }
}

/// The deterministic template-based engine.
///
/// Owns an immutable [`Registry`]; each call runs the pure pipeline with
/// no shared mutable state, so one instance serves any number of
/// concurrent callers.
#[derive(Debug, Clone)]
pub struct StaticTemplateEngine {
    registry: Registry,
}

impl StaticTemplateEngine {
    pub fn new() -> Self {
        Self {
            registry: Registry::builtin(),
        }
    }

    /// Classified tags for a prompt, exposed for frontend debugging aids.
    pub fn classify(&self, prompt: &str) -> TagSet {
        classify(prompt)
    }

    /// The resolved style descriptor for a prompt, before emission.
    pub fn resolve(&self, prompt: &str) -> ResolvedStyle {
        resolve(&self.registry, &classify(prompt))
    }
}

impl Default for StaticTemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleEngine for StaticTemplateEngine {
    fn generate(&self, prompt: &str) -> String {
        emit(&self.resolve(prompt))
    }
}
