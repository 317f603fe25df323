// Agent trait for match decision policies

use super::AgentError;
use crate::game::{Action, GameState};

/// Trait for decision-making strategies
///
/// An agent reads a match snapshot and returns one action from the shared
/// vocabulary. The snapshot is borrowed immutably, so a strategy can never
/// change the caller's state. Implementations must tolerate unknown values in
/// any field: either decide anyway or report
/// [`AgentError::MissingObservation`].
///
/// Agents may carry internal state (an RNG, cached targets), which is why
/// `select_action` takes `&mut self`. Implementations must be `Send` so an
/// agent can be handed to another thread.
pub trait Agent: Send {
    /// Decide what the controlled player does for this snapshot
    ///
    /// # Returns
    /// * `Ok(Action)` - The chosen action
    /// * `Err(AgentError::NotImplemented)` - No strategy was supplied (default)
    /// * `Err(_)` - Strategy-specific "no decision possible" outcome
    fn select_action(&mut self, _state: &GameState) -> Result<Action, AgentError> {
        Err(AgentError::NotImplemented {
            agent: self.name().to_string(),
        })
    }

    /// Reset internal state (called when a new rally starts)
    fn reset(&mut self) {}

    /// Agent name for logging/display
    fn name(&self) -> &str;
}

/// Placeholder agent with no strategy behind it
///
/// Every call to `select_action` fails with `NotImplemented`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BaseAgent;

impl BaseAgent {
    pub fn new() -> Self {
        Self
    }
}

impl Agent for BaseAgent {
    fn name(&self) -> &str {
        "Base"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{CourtDepth, CourtLane, CourtSide, Score, ShuttleHeight, ShuttleZone};

    #[test]
    fn test_base_agent_on_unknown_state() {
        let mut agent = BaseAgent::new();
        let state = GameState::new();

        assert_eq!(
            agent.select_action(&state),
            Err(AgentError::NotImplemented {
                agent: "Base".to_string()
            })
        );
    }

    #[test]
    fn test_base_agent_on_populated_state() {
        let mut agent = BaseAgent::new();
        let mut state = GameState::new();
        state.player_pos = Some((3.0, 4.0).into());
        state.opponent_pos = Some((3.0, 10.0).into());
        state.shuttle_zone = Some(ShuttleZone::new(
            CourtSide::Own,
            CourtDepth::Rear,
            CourtLane::Right,
        ));
        state.shuttle_height = Some(ShuttleHeight::High);
        state.stamina = Some(100.0);
        state.power = Some(100.0);
        state.score = Some(Score::new(20, 20));

        // Repeated calls keep failing the same way
        for _ in 0..3 {
            assert!(matches!(
                agent.select_action(&state),
                Err(AgentError::NotImplemented { .. })
            ));
        }
    }

    #[test]
    fn test_not_implemented_message_names_agent() {
        let err = BaseAgent.select_action(&GameState::new()).unwrap_err();
        assert_eq!(err.to_string(), "agent 'Base' does not implement select_action");
    }

    #[test]
    fn test_agent_can_move_to_another_thread() {
        let mut agent: Box<dyn Agent> = Box::new(BaseAgent::new());
        let handle = std::thread::spawn(move || agent.select_action(&GameState::new()));
        assert!(handle.join().unwrap().is_err());
    }
}
