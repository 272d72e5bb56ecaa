// ABOUTME: Configuration options for the sift cleaner including OutputFormat, CleanOptions, and CleanerBuilder.
// ABOUTME: CleanerBuilder provides a fluent API for constructing Cleaner instances with custom settings.

use std::fmt;

use crate::cleaner::Cleaner;

/// Smallest chunk target a caller should pass in, in estimated tokens.
pub const MIN_TARGET_TOKENS: usize = 400;

/// Largest chunk target a caller should pass in, in estimated tokens.
pub const MAX_TARGET_TOKENS: usize = 2000;

/// Chunk target used when none is configured.
pub const DEFAULT_TARGET_TOKENS: usize = 1000;

/// Clamp a requested chunk target into `[MIN_TARGET_TOKENS, MAX_TARGET_TOKENS]`.
///
/// The pipeline itself uses whatever target it is given; clamping is the
/// caller's job and this helper is provided for that side of the boundary.
pub fn clamp_target_tokens(requested: usize) -> usize {
    requested.clamp(MIN_TARGET_TOKENS, MAX_TARGET_TOKENS)
}

/// The output format for cleaned content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Markdown,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutputFormat::Text => "text",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Json => "json",
        };
        write!(f, "{}", s)
    }
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => OutputFormat::Markdown,
            "json" => OutputFormat::Json,
            _ => OutputFormat::Text,
        }
    }
}

/// Configuration options for a [`Cleaner`].
#[derive(Debug, Clone)]
pub struct CleanOptions {
    pub format: OutputFormat,
    pub target_tokens: usize,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            target_tokens: DEFAULT_TARGET_TOKENS,
        }
    }
}

/// Builder for constructing Cleaner instances with custom configuration.
#[derive(Debug, Clone)]
pub struct CleanerBuilder {
    opts: CleanOptions,
}

impl CleanerBuilder {
    /// Create a new CleanerBuilder with default options.
    pub fn new() -> Self {
        Self {
            opts: CleanOptions::default(),
        }
    }

    /// Set the output format.
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.opts.format = format;
        self
    }

    /// Set the chunk target in estimated tokens.
    pub fn target_tokens(mut self, target_tokens: usize) -> Self {
        self.opts.target_tokens = target_tokens;
        self
    }

    /// Build the Cleaner with the configured options.
    pub fn build(self) -> Cleaner {
        Cleaner::new(self.opts)
    }
}

impl Default for CleanerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
