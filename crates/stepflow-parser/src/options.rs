//! Codec options

/// Default maximum definition nesting depth
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Codec options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecOptions {
    /// Maximum number of nested definitions. The top-level definition has
    /// depth 1 and every level of `steps` adds one.
    pub max_depth: usize,
}

impl CodecOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
