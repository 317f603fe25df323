use serde::{Deserialize, Serialize};

/// Closed action vocabulary shared by the bundled agents
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // Footwork
    MoveForward,
    MoveBack,
    MoveLeft,
    MoveRight,
    Hold,

    // Shots
    Clear,
    Drop,
    Smash,
    Drive,
    NetShot,
    Lift,
}

impl Action {
    /// Every action, footwork first
    pub fn all() -> Vec<Action> {
        vec![
            Action::MoveForward,
            Action::MoveBack,
            Action::MoveLeft,
            Action::MoveRight,
            Action::Hold,
            Action::Clear,
            Action::Drop,
            Action::Smash,
            Action::Drive,
            Action::NetShot,
            Action::Lift,
        ]
    }

    /// Whether this action strikes the shuttle
    pub fn is_shot(&self) -> bool {
        matches!(
            self,
            Action::Clear
                | Action::Drop
                | Action::Smash
                | Action::Drive
                | Action::NetShot
                | Action::Lift
        )
    }
}
