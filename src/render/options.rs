//! Formatting options and configuration.

use crate::normalize::PunctuationOptions;

/// Options for the normalize → parse → render pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Punctuation passes applied before parsing
    pub punctuation: PunctuationOptions,

    /// Run punctuation normalization at all
    pub normalize: bool,

    /// Collect render statistics
    pub collect_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the punctuation options.
    pub fn with_punctuation(mut self, punctuation: PunctuationOptions) -> Self {
        self.punctuation = punctuation;
        self
    }

    /// Enable or disable punctuation normalization.
    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Enable statistics collection during rendering.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            punctuation: PunctuationOptions::standard(),
            normalize: true,
            collect_stats: false,
        }
    }
}
