//! Session controller: one upload attempt at a time

use crate::error::CvRaterError;
use crate::model::AnalysisResult;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Idle,
    Loading,
    Success(AnalysisResult),
    Failure(String),
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState::Idle
    }
}

/// Sequences capture, request, and display. A submit is accepted from `Idle`
/// or `Failure` only; every outcome clears the loading flag; `reset` returns
/// to `Idle` and discards the held result.
#[derive(Debug, Default)]
pub struct Controller {
    state: SessionState,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Begin an upload attempt. Returns false while one is already in
    /// flight or after a result has been rendered. Starting from `Failure`
    /// clears the prior error.
    pub fn submit(&mut self) -> bool {
        match self.state {
            SessionState::Idle | SessionState::Failure(_) => {
                self.state = SessionState::Loading;
                true
            }
            _ => false,
        }
    }

    pub fn resolve(&mut self, result: AnalysisResult) {
        self.state = SessionState::Success(result);
    }

    pub fn reject(&mut self, error: &CvRaterError) {
        self.state = SessionState::Failure(error.user_message());
    }

    /// Discard any result or error. A no-op from `Idle`.
    pub fn reset(&mut self) {
        self.state = SessionState::Idle;
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match &self.state {
            SessionState::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error_banner(&self) -> Option<&str> {
        match &self.state {
            SessionState::Failure(message) => Some(message),
            _ => None,
        }
    }
}
