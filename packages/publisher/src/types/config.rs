//! Configuration for the submission pipeline.

/// How a store rejection (mutation answered with nothing, no error raised)
/// affects navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Report the failure but still yield the navigation directive. This is
    /// the behavior the shipped form always had, so it is the default.
    #[default]
    Lenient,

    /// Report the failure and suppress navigation, like a hard failure.
    Strict,
}

/// Configuration for [`Publisher`](crate::Publisher).
#[derive(Debug, Clone, Default)]
pub struct PublishConfig {
    /// Policy applied when the store refuses a mutation without an error.
    pub failure_policy: FailurePolicy,
}

impl PublishConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the failure policy.
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Treat store rejections as hard failures.
    pub fn strict(mut self) -> Self {
        self.failure_policy = FailurePolicy::Strict;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_lenient() {
        assert_eq!(PublishConfig::new().failure_policy, FailurePolicy::Lenient);
        assert_eq!(
            PublishConfig::new().strict().failure_policy,
            FailurePolicy::Strict
        );
    }
}
