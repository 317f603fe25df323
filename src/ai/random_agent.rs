// Random agent - baseline opponent for comparisons

use super::{Agent, AgentError};
use crate::game::{Action, GameState};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

/// Picks uniformly from the full action vocabulary, ignoring the state
///
/// Never fails: an all-unknown snapshot is as good as any other.
pub struct RandomAgent {
    name: String,
    actions: Vec<Action>,
    rng: StdRng,
}

impl RandomAgent {
    /// Create a RandomAgent seeded from OS entropy
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create a reproducible RandomAgent
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            name: "Random".to_string(),
            actions: Action::all(),
            rng,
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, _state: &GameState) -> Result<Action, AgentError> {
        // Vocabulary is never empty, Hold is unreachable in practice
        let action = self
            .actions
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(Action::Hold);
        debug!(agent = %self.name, ?action, "selected action");
        Ok(action)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
