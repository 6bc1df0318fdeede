/// What a `PropertyStore` does when a property is read back as the wrong type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MismatchPolicy {
    /// Panic immediately. The default when built with debug assertions.
    Abort,
    /// Treat the property as absent and log a warning. The default for release builds.
    Fallback,
}

impl MismatchPolicy {
    /// The policy matching the current build profile
    pub const fn for_build() -> Self {
        if cfg!(debug_assertions) {
            MismatchPolicy::Abort
        } else {
            MismatchPolicy::Fallback
        }
    }
}

impl Default for MismatchPolicy {
    fn default() -> Self {
        Self::for_build()
    }
}

/// Settings for a `PropertyStore`
///
/// ```
/// use sovran_props::{MismatchPolicy, PropertyStore, StoreConfig};
///
/// let config = StoreConfig::default().with_mismatch_policy(MismatchPolicy::Fallback);
/// let store = PropertyStore::with_config(config);
/// assert_eq!(store.config().mismatch_policy(), MismatchPolicy::Fallback);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreConfig {
    mismatch: MismatchPolicy,
}

impl StoreConfig {
    /// Fail fast on type mismatches, regardless of build profile
    pub const fn diagnostic() -> Self {
        Self {
            mismatch: MismatchPolicy::Abort,
        }
    }

    /// Degrade type mismatches to "absent", regardless of build profile
    pub const fn lenient() -> Self {
        Self {
            mismatch: MismatchPolicy::Fallback,
        }
    }

    pub fn with_mismatch_policy(mut self, policy: MismatchPolicy) -> Self {
        self.mismatch = policy;
        self
    }

    pub fn mismatch_policy(&self) -> MismatchPolicy {
        self.mismatch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_follows_build_profile() {
        let expected = if cfg!(debug_assertions) {
            MismatchPolicy::Abort
        } else {
            MismatchPolicy::Fallback
        };
        assert_eq!(StoreConfig::default().mismatch_policy(), expected);
    }

    #[test]
    fn test_overrides() {
        assert_eq!(StoreConfig::diagnostic().mismatch_policy(), MismatchPolicy::Abort);
        assert_eq!(StoreConfig::lenient().mismatch_policy(), MismatchPolicy::Fallback);
        let config = StoreConfig::diagnostic().with_mismatch_policy(MismatchPolicy::Fallback);
        assert_eq!(config, StoreConfig::lenient());
    }
}
