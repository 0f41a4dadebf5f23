//! Match State Machine
//!
//! A match is either running or stopped; every transition goes through the
//! table in [`MatchFsm::next_state`].

/// Match states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    Stopped,
    Running,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchAction {
    /// Begin a fresh match (also valid while running: restart)
    Start,
    /// Halt without touching the score
    Stop,
    /// A side reached the winning score
    Win,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: MatchState,
    pub to_state: MatchState,
    pub action: MatchAction,
}

/// Match Finite State Machine
#[derive(Debug, Clone)]
pub struct MatchFsm {
    state: MatchState,
}

impl MatchFsm {
    pub fn new() -> Self {
        Self {
            state: MatchState::Stopped,
        }
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == MatchState::Running
    }

    pub fn can_transition(&self, action: MatchAction) -> bool {
        self.next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: MatchAction) -> TransitionResult {
        let from_state = self.state;
        match self.next_state(action) {
            Some(next_state) => {
                self.state = next_state;
                TransitionResult {
                    success: true,
                    from_state,
                    to_state: next_state,
                    action,
                }
            }
            None => TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            },
        }
    }

    fn next_state(&self, action: MatchAction) -> Option<MatchState> {
        match (self.state, action) {
            (_, MatchAction::Start) => Some(MatchState::Running),
            (MatchState::Running, MatchAction::Stop) => Some(MatchState::Stopped),
            (MatchState::Running, MatchAction::Win) => Some(MatchState::Stopped),
            // Invalid transition
            (MatchState::Stopped, MatchAction::Stop | MatchAction::Win) => None,
        }
    }
}

impl Default for MatchFsm {
    fn default() -> Self {
        Self::new()
    }
}
