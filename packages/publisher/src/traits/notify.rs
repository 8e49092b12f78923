//! User-visible failure notification channel.

use crate::types::outcome::SubmissionFailure;

/// Sink for transient failure notices (the toast channel), passed to the
/// pipeline as an explicit capability.
pub trait Notifier: Send + Sync {
    fn notify(&self, failure: &SubmissionFailure);
}

/// Default notifier that records failures on the log instead of a UI.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, failure: &SubmissionFailure) {
        tracing::warn!(
            action = %failure.action,
            kind = ?failure.kind,
            "{failure}"
        );
    }
}
