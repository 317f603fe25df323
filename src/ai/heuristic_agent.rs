// Scripted agent that picks shots from the shuttle's zone and height

use super::{Agent, AgentError};
use crate::config::AgentConfig;
use crate::game::{Action, CourtDepth, CourtPosition, CourtSide, GameState, ShuttleHeight};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use tracing::{debug, warn};

/// Configuration for a heuristic agent's behavior
#[derive(Debug, Clone)]
pub struct HeuristicAgentConfig {
    pub name: String,
    pub low_stamina_threshold: f32,  // Below this the agent only plays safe shots
    pub smash_power_threshold: f32,  // Minimum power to attempt a smash
    pub recovery_radius: f32,        // Dead zone around base to avoid jittery footwork
    pub opponent_deep_line: f32,     // Opponent beyond this y counts as deep
    pub base_position: CourtPosition, // Where the player recovers between shots
    pub judgement_error_stddev: f32, // Noise on perceived stamina/power (0.0 = exact)
    pub seed: Option<u64>,
}

/// Rule-based agent
///
/// Needs to know where the shuttle is; every other field is optional and the
/// rules fall back to conservative choices when it is unknown.
pub struct HeuristicAgent {
    config: HeuristicAgentConfig,
    judgement_error: Option<Normal<f32>>,
    rng: StdRng,
}

impl HeuristicAgent {
    /// Create a new HeuristicAgent with the given configuration
    pub fn new(config: HeuristicAgentConfig) -> Self {
        let judgement_error = Self::judgement_error(&config);
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            config,
            judgement_error,
            rng,
        }
    }

    /// Create an Easy agent (misjudges its own stamina and power)
    pub fn easy() -> Self {
        Self::new(Self::easy_config())
    }

    /// Create a Hard agent (exact perception)
    pub fn hard() -> Self {
        Self::new(Self::hard_config())
    }

    /// Build from a preset, overriding thresholds with the loaded config
    pub fn from_config(preset: HeuristicAgentConfig, config: &AgentConfig) -> Self {
        let mut agent_config = preset;
        agent_config.low_stamina_threshold = config.low_stamina_threshold;
        agent_config.smash_power_threshold = config.smash_power_threshold;
        agent_config.recovery_radius = config.recovery_radius;
        agent_config.opponent_deep_line = config.opponent_deep_line;
        if let Some(stddev) = config.judgement_error_stddev {
            agent_config.judgement_error_stddev = stddev;
        }
        agent_config.seed = config.seed;
        Self::new(agent_config)
    }

    pub fn easy_config() -> HeuristicAgentConfig {
        HeuristicAgentConfig {
            name: "Easy".to_string(),
            judgement_error_stddev: 15.0, // ±15 points (1σ)
            ..Self::hard_config()
        }
    }

    pub fn hard_config() -> HeuristicAgentConfig {
        let defaults = AgentConfig::default();
        HeuristicAgentConfig {
            name: "Hard".to_string(),
            low_stamina_threshold: defaults.low_stamina_threshold,
            smash_power_threshold: defaults.smash_power_threshold,
            recovery_radius: defaults.recovery_radius,
            opponent_deep_line: defaults.opponent_deep_line,
            base_position: CourtPosition::new(3.05, 3.0),
            judgement_error_stddev: 0.0,
            seed: None,
        }
    }

    /// Noise distribution for the configured stddev; 0.0 means exact perception
    fn judgement_error(config: &HeuristicAgentConfig) -> Option<Normal<f32>> {
        let stddev = config.judgement_error_stddev;
        if stddev == 0.0 {
            return None;
        }
        if !stddev.is_finite() {
            warn!(agent = %config.name, stddev, "judgement_error_stddev is not finite, using exact perception");
            return None;
        }
        match Normal::new(0.0, stddev) {
            Ok(normal) => Some(normal),
            // Negative stddev
            Err(e) => {
                warn!(agent = %config.name, stddev, error = %e, "invalid judgement_error_stddev, using exact perception");
                None
            }
        }
    }

    pub fn config(&self) -> &HeuristicAgentConfig {
        &self.config
    }

    /// Apply judgement error to an observed stat
    fn perceive(&mut self, value: Option<f32>) -> Option<f32> {
        let value = value?;
        match self.judgement_error {
            Some(normal) => Some(value + normal.sample(&mut self.rng)),
            None => Some(value),
        }
    }

    /// Footwork back toward base while the shuttle is on the other side
    fn recover(&self, player_pos: Option<CourtPosition>) -> Action {
        let Some(pos) = player_pos else {
            return Action::Hold;
        };

        let base = self.config.base_position;
        if pos.distance_to(&base) <= self.config.recovery_radius {
            return Action::Hold;
        }

        // Step along whichever axis is further off
        let dx = base.x - pos.x;
        let dy = base.y - pos.y;
        if dy.abs() >= dx.abs() {
            if dy > 0.0 {
                Action::MoveForward
            } else {
                Action::MoveBack
            }
        } else if dx > 0.0 {
            Action::MoveRight
        } else {
            Action::MoveLeft
        }
    }

    fn opponent_is_deep(&self, state: &GameState) -> bool {
        state
            .opponent_pos
            .is_some_and(|pos| pos.y > self.config.opponent_deep_line)
    }

    fn choose_shot(&mut self, state: &GameState, depth: CourtDepth) -> Action {
        let stamina = self.perceive(state.stamina);
        let power = self.perceive(state.power);

        if stamina.is_some_and(|s| s < self.config.low_stamina_threshold) {
            // Tired: buy time
            return match state.shuttle_height {
                Some(ShuttleHeight::High) | None => Action::Clear,
                Some(_) => Action::Lift,
            };
        }

        let can_smash = power.is_some_and(|p| p >= self.config.smash_power_threshold);

        match (state.shuttle_height, depth) {
            (Some(ShuttleHeight::High), _) if can_smash => Action::Smash,
            (Some(ShuttleHeight::High), CourtDepth::Rear) => Action::Clear,
            (Some(ShuttleHeight::High), _) => Action::Drop,
            (Some(ShuttleHeight::NetLevel), CourtDepth::Front) => Action::NetShot,
            (Some(ShuttleHeight::NetLevel), _) => Action::Drive,
            (Some(ShuttleHeight::Low), CourtDepth::Front) if self.opponent_is_deep(state) => {
                Action::NetShot
            }
            (Some(ShuttleHeight::Low), _) => Action::Lift,
            (None, _) => Action::Drive,
        }
    }
}

impl Agent for HeuristicAgent {
    fn select_action(&mut self, state: &GameState) -> Result<Action, AgentError> {
        let zone = state
            .shuttle_zone
            .ok_or_else(|| AgentError::MissingObservation {
                agent: self.config.name.clone(),
                field: "shuttle_zone",
            })?;

        let action = match zone.side {
            CourtSide::Opponent => self.recover(state.player_pos),
            CourtSide::Own => self.choose_shot(state, zone.depth),
        };

        debug!(agent = %self.config.name, ?zone, ?action, "selected action");
        Ok(action)
    }

    fn name(&self) -> &str {
        &self.config.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{CourtLane, ShuttleZone};

    fn own(depth: CourtDepth) -> Option<ShuttleZone> {
        Some(ShuttleZone::new(CourtSide::Own, depth, CourtLane::Center))
    }

    fn opponent_side() -> Option<ShuttleZone> {
        Some(ShuttleZone::new(
            CourtSide::Opponent,
            CourtDepth::Mid,
            CourtLane::Center,
        ))
    }

    fn rested(depth: CourtDepth, height: ShuttleHeight) -> GameState {
        let mut state = GameState::new();
        state.shuttle_zone = own(depth);
        state.shuttle_height = Some(height);
        state.stamina = Some(90.0);
        state
    }

    #[test]
    fn test_unknown_zone_is_missing_observation() {
        let mut agent = HeuristicAgent::hard();
        let result = agent.select_action(&GameState::new());

        assert_eq!(
            result,
            Err(AgentError::MissingObservation {
                agent: "Hard".to_string(),
                field: "shuttle_zone",
            })
        );
    }

    #[test]
    fn test_zone_only_state_still_decides() {
        let mut agent = HeuristicAgent::hard();
        let mut state = GameState::new();
        state.shuttle_zone = own(CourtDepth::Mid);

        assert_eq!(agent.select_action(&state), Ok(Action::Drive));

        state.shuttle_zone = opponent_side();
        assert_eq!(agent.select_action(&state), Ok(Action::Hold));
    }

    #[test]
    fn test_high_shuttle_with_power_is_smashed() {
        let mut agent = HeuristicAgent::hard();
        let mut state = rested(CourtDepth::Rear, ShuttleHeight::High);
        state.power = Some(80.0);

        assert_eq!(agent.select_action(&state), Ok(Action::Smash));
    }

    #[test]
    fn test_high_shuttle_without_power() {
        let mut agent = HeuristicAgent::hard();

        let mut state = rested(CourtDepth::Rear, ShuttleHeight::High);
        state.power = Some(10.0);
        assert_eq!(agent.select_action(&state), Ok(Action::Clear));

        // Unknown power never justifies a smash
        let state = rested(CourtDepth::Mid, ShuttleHeight::High);
        assert_eq!(agent.select_action(&state), Ok(Action::Drop));
    }

    #[test]
    fn test_net_level_shuttle() {
        let mut agent = HeuristicAgent::hard();

        let state = rested(CourtDepth::Front, ShuttleHeight::NetLevel);
        assert_eq!(agent.select_action(&state), Ok(Action::NetShot));

        let state = rested(CourtDepth::Rear, ShuttleHeight::NetLevel);
        assert_eq!(agent.select_action(&state), Ok(Action::Drive));
    }

    #[test]
    fn test_low_front_shuttle_depends_on_opponent() {
        let mut agent = HeuristicAgent::hard();
        let mut state = rested(CourtDepth::Front, ShuttleHeight::Low);

        // Opponent position unknown
        assert_eq!(agent.select_action(&state), Ok(Action::Lift));

        state.opponent_pos = Some(CourtPosition::new(3.0, 12.5));
        assert_eq!(agent.select_action(&state), Ok(Action::NetShot));

        state.opponent_pos = Some(CourtPosition::new(3.0, 8.0));
        assert_eq!(agent.select_action(&state), Ok(Action::Lift));
    }

    #[test]
    fn test_low_stamina_plays_safe() {
        let mut agent = HeuristicAgent::hard();

        let mut state = rested(CourtDepth::Mid, ShuttleHeight::High);
        state.stamina = Some(5.0);
        state.power = Some(100.0);
        assert_eq!(agent.select_action(&state), Ok(Action::Clear));

        state.shuttle_height = Some(ShuttleHeight::Low);
        assert_eq!(agent.select_action(&state), Ok(Action::Lift));

        state.shuttle_height = None;
        assert_eq!(agent.select_action(&state), Ok(Action::Clear));
    }

    #[test]
    fn test_zero_stamina_is_not_unknown() {
        let mut agent = HeuristicAgent::hard();
        let mut state = rested(CourtDepth::Front, ShuttleHeight::NetLevel);

        state.stamina = None;
        assert_eq!(agent.select_action(&state), Ok(Action::NetShot));

        state.stamina = Some(0.0);
        assert_eq!(agent.select_action(&state), Ok(Action::Lift));
    }

    #[test]
    fn test_recovery_footwork() {
        let mut agent = HeuristicAgent::hard();
        let mut state = GameState::new();
        state.shuttle_zone = opponent_side();

        // At base
        state.player_pos = Some(CourtPosition::new(3.05, 3.0));
        assert_eq!(agent.select_action(&state), Ok(Action::Hold));

        // Pushed to the back of the court
        state.player_pos = Some(CourtPosition::new(3.0, 0.5));
        assert_eq!(agent.select_action(&state), Ok(Action::MoveForward));

        // Up at the net
        state.player_pos = Some(CourtPosition::new(3.0, 6.0));
        assert_eq!(agent.select_action(&state), Ok(Action::MoveBack));

        // Out wide on either side
        state.player_pos = Some(CourtPosition::new(0.2, 3.0));
        assert_eq!(agent.select_action(&state), Ok(Action::MoveRight));
        state.player_pos = Some(CourtPosition::new(5.9, 3.0));
        assert_eq!(agent.select_action(&state), Ok(Action::MoveLeft));
    }

    #[test]
    fn test_does_not_mutate_snapshot() {
        let mut agent = HeuristicAgent::easy();
        let mut state = rested(CourtDepth::Rear, ShuttleHeight::High);
        state.power = Some(61.0);
        let before = state.clone();

        let _ = agent.select_action(&state);
        assert_eq!(state, before);
    }

    #[test]
    fn test_noisy_agent_misjudges_borderline_power() {
        let config = AgentConfig {
            seed: Some(7),
            ..AgentConfig::default()
        };
        let mut easy = HeuristicAgent::from_config(HeuristicAgent::easy_config(), &config);
        let mut hard = HeuristicAgent::from_config(HeuristicAgent::hard_config(), &config);

        // Power sits exactly on the smash threshold
        let mut state = rested(CourtDepth::Mid, ShuttleHeight::High);
        state.power = Some(60.0);

        let mut smashes = 0;
        let mut drops = 0;
        for _ in 0..200 {
            match easy.select_action(&state).unwrap() {
                Action::Smash => smashes += 1,
                Action::Drop => drops += 1,
                _ => {}
            }
            assert_eq!(hard.select_action(&state), Ok(Action::Smash));
        }

        assert!(smashes > 0, "noise never pushed power above the threshold");
        assert!(drops > 0, "noise never pushed power below the threshold");
    }

    #[test]
    fn test_invalid_stddev_falls_back_to_exact_perception() {
        let mut state = rested(CourtDepth::Mid, ShuttleHeight::High);
        state.power = Some(60.0);

        for stddev in [f32::INFINITY, f32::NAN, -5.0] {
            let config = AgentConfig {
                seed: Some(11),
                judgement_error_stddev: Some(stddev),
                ..AgentConfig::default()
            };
            let mut agent = HeuristicAgent::from_config(HeuristicAgent::easy_config(), &config);
            for _ in 0..50 {
                assert_eq!(agent.select_action(&state), Ok(Action::Smash));
            }
        }
    }

    #[test]
    fn test_from_config_overrides_thresholds() {
        let config = AgentConfig {
            smash_power_threshold: 95.0,
            judgement_error_stddev: Some(0.0),
            ..AgentConfig::default()
        };
        let mut agent = HeuristicAgent::from_config(HeuristicAgent::easy_config(), &config);
        assert_eq!(agent.name(), "Easy");
        assert_eq!(agent.config().judgement_error_stddev, 0.0);

        let mut state = rested(CourtDepth::Rear, ShuttleHeight::High);
        state.power = Some(90.0);
        assert_eq!(agent.select_action(&state), Ok(Action::Clear));
    }
}
