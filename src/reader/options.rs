// src/reader/options.rs

/// What to do when a parsed header lacks schema fields
///
/// Some acquisition modes (math channels, for example) legitimately omit
/// fields, so the default only logs a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MissingFieldPolicy {
    /// Say nothing
    Ignore,
    /// Emit a `tracing` warning listing the missing fields
    #[default]
    Warn,
    /// Fail with [`IsfError::MissingFields`](crate::IsfError::MissingFields)
    Error,
}

/// Run-time options for [`parse_with_options`](crate::parse_with_options)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Return the parsed header alongside the samples
    pub include_header: bool,
    pub missing_fields: MissingFieldPolicy,
    /// How many nested ENV blocks may be followed before giving up
    ///
    /// At 0 any `PT_FMT ENV` header fails with
    /// [`NestingTooDeep`](crate::IsfError::NestingTooDeep).
    pub max_env_depth: usize,
}

impl ParseOptions {
    pub const DEFAULT_MAX_ENV_DEPTH: usize = 1;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header(mut self, include_header: bool) -> Self {
        self.include_header = include_header;
        self
    }

    pub fn with_missing_fields(mut self, policy: MissingFieldPolicy) -> Self {
        self.missing_fields = policy;
        self
    }

    pub fn with_max_env_depth(mut self, max_env_depth: usize) -> Self {
        self.max_env_depth = max_env_depth;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            include_header: false,
            missing_fields: MissingFieldPolicy::default(),
            max_env_depth: Self::DEFAULT_MAX_ENV_DEPTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ParseOptions::default();
        assert!(!options.include_header);
        assert_eq!(options.missing_fields, MissingFieldPolicy::Warn);
        assert_eq!(options.max_env_depth, 1);
    }

    #[test]
    fn test_builder() {
        let options = ParseOptions::new()
            .with_header(true)
            .with_missing_fields(MissingFieldPolicy::Error)
            .with_max_env_depth(3);
        assert!(options.include_header);
        assert_eq!(options.missing_fields, MissingFieldPolicy::Error);
        assert_eq!(options.max_env_depth, 3);
    }
}
