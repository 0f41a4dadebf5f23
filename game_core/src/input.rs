//! Keyboard input state for the human paddle

/// Logical movement actions a host can report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    MoveUp,
    MoveDown,
}

impl InputAction {
    /// Map a DOM-style key name to an action
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" | "w" | "W" => Some(InputAction::MoveUp),
            "ArrowDown" | "s" | "S" => Some(InputAction::MoveDown),
            _ => None,
        }
    }
}

/// Snapshot of which movement keys are held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, action: InputAction) {
        self.set(action, true);
    }

    pub fn release(&mut self, action: InputAction) {
        self.set(action, false);
    }

    /// Handle key down event; returns false for unmapped keys
    pub fn key_down(&mut self, key: &str) -> bool {
        match InputAction::from_key(key) {
            Some(action) => {
                self.press(action);
                true
            }
            None => false,
        }
    }

    /// Handle key up event; returns false for unmapped keys
    pub fn key_up(&mut self, key: &str) -> bool {
        match InputAction::from_key(key) {
            Some(action) => {
                self.release(action);
                true
            }
            None => false,
        }
    }

    fn set(&mut self, action: InputAction, held: bool) {
        match action {
            InputAction::MoveUp => self.up = held,
            InputAction::MoveDown => self.down = held,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(InputAction::from_key("w"), Some(InputAction::MoveUp));
        assert_eq!(InputAction::from_key("ArrowUp"), Some(InputAction::MoveUp));
        assert_eq!(InputAction::from_key("S"), Some(InputAction::MoveDown));
        assert_eq!(InputAction::from_key("ArrowDown"), Some(InputAction::MoveDown));
        assert_eq!(InputAction::from_key("x"), None);
    }

    #[test]
    fn test_key_down_up() {
        let mut input = InputState::new();
        assert!(input.key_down("w"));
        assert!(input.up && !input.down);
        assert!(input.key_down("s"));
        assert!(input.up && input.down);
        assert!(input.key_up("w"));
        assert!(!input.up && input.down);
        assert!(!input.key_up("Escape"));
        assert!(input.down, "unmapped keys leave state alone");
    }
}
