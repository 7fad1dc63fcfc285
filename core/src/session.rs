use crate::{FormError, FormSnapshot, Outcome, Submission};

/// Identifies one accepted submission. Later submissions get larger tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Analyzing { token: RequestToken },
    Resolved { outcome: Outcome },
}

/// Tracks the submit flow: Idle -> Analyzing -> Resolved, with stale
/// completions discarded by token.
#[derive(Debug, Clone)]
pub struct SubmissionSession {
    phase: Phase,
    next_token: u64,
}

impl SubmissionSession {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            next_token: 1,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn pending(&self) -> Option<RequestToken> {
        match self.phase {
            Phase::Analyzing { token } => Some(token),
            _ => None,
        }
    }

    /// Validates the snapshot and, on success, starts a new request.
    ///
    /// A rejected snapshot leaves a pending request untouched; otherwise the
    /// session falls back to idle.
    pub fn submit(
        &mut self,
        snapshot: &FormSnapshot,
    ) -> Result<(RequestToken, Submission), FormError> {
        let submission = match snapshot.validate() {
            Ok(submission) => submission,
            Err(err) => {
                if self.pending().is_none() {
                    self.phase = Phase::Idle;
                }
                return Err(err);
            }
        };
        let token = RequestToken(self.next_token);
        self.next_token = self.next_token.saturating_add(1);
        self.phase = Phase::Analyzing { token };
        Ok((token, submission))
    }

    /// Applies a completion. Returns false when `token` is not the pending
    /// request, in which case nothing changes.
    pub fn resolve(&mut self, token: RequestToken, outcome: Outcome) -> bool {
        if self.pending() != Some(token) {
            return false;
        }
        self.phase = Phase::Resolved { outcome };
        true
    }
}

impl Default for SubmissionSession {
    fn default() -> Self {
        Self::new()
    }
}
