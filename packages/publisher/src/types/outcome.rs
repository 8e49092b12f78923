//! Submission outcomes, failures, and navigation directives.

/// The attempted action, used verbatim in user-visible messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitAction {
    Create,
    Update,
}

impl std::fmt::Display for SubmitAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Create => f.write_str("Create"),
            Self::Update => f.write_str("Update"),
        }
    }
}

/// Where the caller should navigate after a submission resolves.
///
/// The pipeline only yields the directive; executing it is the navigation
/// sink's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Detail view of a post.
    ToDetail(String),

    /// Home feed.
    ToHome,

    /// Previous view (used by form cancellation, not by submissions).
    Back,
}

/// Classification of a reported submission failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Media upload failed; the document mutation was never attempted.
    UploadFailed,

    /// The store refused the mutation without raising an error.
    StoreRejected,

    /// A collaborator raised an error during the sequence.
    Unexpected,

    /// Another submission already holds the in-flight token.
    AlreadyInFlight,
}

/// A user-visible failure notice.
#[derive(Debug, Clone)]
pub struct SubmissionFailure {
    pub action: SubmitAction,
    pub kind: FailureKind,

    /// Short notice text, e.g. `"Update post failed. Please try again."`.
    pub message: String,

    /// Underlying error text, present for hard failures.
    pub detail: Option<String>,
}

impl SubmissionFailure {
    /// The store returned nothing without raising an error.
    pub fn rejected(action: SubmitAction) -> Self {
        Self {
            action,
            kind: FailureKind::StoreRejected,
            message: format!("{action} post failed. Please try again."),
            detail: None,
        }
    }

    /// The media upload failed before any mutation was dispatched.
    pub fn upload(action: SubmitAction, err: &dyn std::error::Error) -> Self {
        Self {
            action,
            kind: FailureKind::UploadFailed,
            message: format!("{action} post failed."),
            detail: Some(err.to_string()),
        }
    }

    /// A collaborator raised an error mid-sequence.
    pub fn unexpected(action: SubmitAction, err: &dyn std::error::Error) -> Self {
        Self {
            action,
            kind: FailureKind::Unexpected,
            message: format!("{action} post failed."),
            detail: Some(err.to_string()),
        }
    }

    /// A submission for this form is already in flight.
    pub fn already_in_flight(action: SubmitAction) -> Self {
        Self {
            action,
            kind: FailureKind::AlreadyInFlight,
            message: "A submission is already in progress.".to_string(),
            detail: None,
        }
    }
}

impl std::fmt::Display for SubmissionFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.detail {
            Some(detail) => write!(f, "{} {}", self.message, detail),
            None => f.write_str(&self.message),
        }
    }
}

/// Terminal state of one submission attempt.
#[derive(Debug)]
pub enum SubmissionOutcome {
    /// The mutation returned a document.
    Committed {
        post: crate::types::post::PostRecord,
        navigation: Navigation,
    },

    /// The store refused the write, the failure was reported, and the
    /// lenient policy still yields the navigation directive.
    SoftFailed {
        failure: SubmissionFailure,
        navigation: Navigation,
    },

    /// Hard failure: reported, navigation suppressed.
    Failed { failure: SubmissionFailure },
}

impl SubmissionOutcome {
    /// The navigation directive, absent for hard failures.
    pub fn navigation(&self) -> Option<&Navigation> {
        match self {
            Self::Committed { navigation, .. } | Self::SoftFailed { navigation, .. } => {
                Some(navigation)
            }
            Self::Failed { .. } => None,
        }
    }

    /// The reported failure, if any.
    pub fn failure(&self) -> Option<&SubmissionFailure> {
        match self {
            Self::Committed { .. } => None,
            Self::SoftFailed { failure, .. } | Self::Failed { failure } => Some(failure),
        }
    }

    /// The committed record, if the mutation succeeded.
    pub fn post(&self) -> Option<&crate::types::post::PostRecord> {
        match self {
            Self::Committed { post, .. } => Some(post),
            _ => None,
        }
    }

    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_message_wording() {
        let failure = SubmissionFailure::rejected(SubmitAction::Update);
        assert_eq!(failure.message, "Update post failed. Please try again.");
        assert_eq!(failure.kind, FailureKind::StoreRejected);
        assert!(failure.detail.is_none());
    }

    #[test]
    fn test_hard_failure_carries_detail() {
        let io = std::io::Error::other("connection reset");
        let failure = SubmissionFailure::unexpected(SubmitAction::Create, &io);
        assert_eq!(failure.message, "Create post failed.");
        assert_eq!(failure.detail.as_deref(), Some("connection reset"));
        assert_eq!(failure.to_string(), "Create post failed. connection reset");
    }

    #[test]
    fn test_failed_outcome_suppresses_navigation() {
        let outcome = SubmissionOutcome::Failed {
            failure: SubmissionFailure::rejected(SubmitAction::Create),
        };
        assert!(outcome.navigation().is_none());
        assert!(!outcome.is_committed());
    }
}
