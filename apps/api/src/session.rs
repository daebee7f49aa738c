//! Analysis session state machine.
//!
//! One `AnalysisSession` is created per analyze request and threaded through
//! the pipeline by mutable reference. Transitions are explicit; an illegal
//! trigger is a typed error rather than a silently ignored flag flip.

use serde::Serialize;
use thiserror::Error;

/// Lifecycle of one analysis request, from intake to terminal state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SessionState {
    Idle,
    AwaitingInput,
    Validating,
    Analyzing,
    Complete,
    Failed,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("illegal session transition: {from:?} -> {to:?}")]
pub struct TransitionError {
    pub from: SessionState,
    pub to: SessionState,
}

#[derive(Debug)]
pub struct AnalysisSession {
    state: SessionState,
    failure_reason: Option<String>,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
            failure_reason: None,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn failure_reason(&self) -> Option<&str> {
        self.failure_reason.as_deref()
    }

    /// Idle -> AwaitingInput: the request body has been received.
    pub fn receive_input(&mut self) -> Result<(), TransitionError> {
        self.transition(SessionState::Idle, SessionState::AwaitingInput)
    }

    /// AwaitingInput -> Validating: gate checks (résumé present, link probe) start.
    pub fn begin_validation(&mut self) -> Result<(), TransitionError> {
        self.transition(SessionState::AwaitingInput, SessionState::Validating)
    }

    /// Validating -> Analyzing: gates passed, collectors and LLM calls start.
    pub fn begin_analysis(&mut self) -> Result<(), TransitionError> {
        self.transition(SessionState::Validating, SessionState::Analyzing)
    }

    /// Analyzing -> Complete.
    pub fn complete(&mut self) -> Result<(), TransitionError> {
        self.transition(SessionState::Analyzing, SessionState::Complete)
    }

    /// Any non-terminal state -> Failed, recording the reason.
    pub fn fail(&mut self, reason: impl Into<String>) -> Result<(), TransitionError> {
        match self.state {
            SessionState::Complete | SessionState::Failed => Err(TransitionError {
                from: self.state.clone(),
                to: SessionState::Failed,
            }),
            _ => {
                self.state = SessionState::Failed;
                self.failure_reason = Some(reason.into());
                Ok(())
            }
        }
    }

    fn transition(
        &mut self,
        expected: SessionState,
        next: SessionState,
    ) -> Result<(), TransitionError> {
        if self.state != expected {
            return Err(TransitionError {
                from: self.state.clone(),
                to: next,
            });
        }
        self.state = next;
        Ok(())
    }
}

impl Default for AnalysisSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path_reaches_complete() {
        let mut session = AnalysisSession::new();
        session.receive_input().unwrap();
        session.begin_validation().unwrap();
        session.begin_analysis().unwrap();
        session.complete().unwrap();
        assert_eq!(*session.state(), SessionState::Complete);
        assert!(session.failure_reason().is_none());
    }

    #[test]
    fn test_cannot_analyze_before_validation() {
        let mut session = AnalysisSession::new();
        session.receive_input().unwrap();
        let err = session.begin_analysis().unwrap_err();
        assert_eq!(err.from, SessionState::AwaitingInput);
        assert_eq!(err.to, SessionState::Analyzing);
    }

    #[test]
    fn test_fail_from_validating_records_reason() {
        let mut session = AnalysisSession::new();
        session.receive_input().unwrap();
        session.begin_validation().unwrap();
        session.fail("Server Error 404").unwrap();
        assert_eq!(*session.state(), SessionState::Failed);
        assert_eq!(session.failure_reason(), Some("Server Error 404"));
    }

    #[test]
    fn test_fail_from_analyzing() {
        let mut session = AnalysisSession::new();
        session.receive_input().unwrap();
        session.begin_validation().unwrap();
        session.begin_analysis().unwrap();
        session.fail("generation failed").unwrap();
        assert_eq!(*session.state(), SessionState::Failed);
    }

    #[test]
    fn test_terminal_states_reject_fail() {
        let mut session = AnalysisSession::new();
        session.receive_input().unwrap();
        session.begin_validation().unwrap();
        session.begin_analysis().unwrap();
        session.complete().unwrap();
        assert!(session.fail("too late").is_err());
    }

    #[test]
    fn test_complete_requires_analyzing() {
        let mut session = AnalysisSession::new();
        assert!(session.complete().is_err());
        assert_eq!(*session.state(), SessionState::Idle);
    }
}
