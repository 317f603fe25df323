// Match snapshot observed by agents
// Every field is optional: None means "not yet observed", never zero

use serde::{Deserialize, Serialize};

// Court frame in metres, seen from the controlled player
pub const COURT_WIDTH: f32 = 6.1;
pub const COURT_LENGTH: f32 = 13.4;
pub const NET_Y: f32 = COURT_LENGTH / 2.0;

/// A point on the court, in metres
///
/// `x` runs left to right across the court as the controlled player faces the
/// net. `y` runs from the controlled player's baseline (0.0) through the net
/// (`NET_Y`) to the opponent's baseline (`COURT_LENGTH`). Both players'
/// positions use this same frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CourtPosition {
    pub x: f32,
    pub y: f32,
}

impl CourtPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &CourtPosition) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(f32, f32)> for CourtPosition {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourtSide {
    Own,
    Opponent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourtDepth {
    Front,
    Mid,
    Rear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourtLane {
    Left,
    Center,
    Right,
}

/// Discretized court region holding the shuttle (2 sides x 3 depths x 3 lanes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShuttleZone {
    pub side: CourtSide,
    pub depth: CourtDepth,
    pub lane: CourtLane,
}

impl ShuttleZone {
    pub fn new(side: CourtSide, depth: CourtDepth, lane: CourtLane) -> Self {
        Self { side, depth, lane }
    }
}

/// Vertical category of the shuttle relative to the net tape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShuttleHeight {
    Low,
    NetLevel,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    pub player: u8,
    pub opponent: u8,
}

impl Score {
    pub fn new(player: u8, opponent: u8) -> Self {
        Self { player, opponent }
    }
}

/// One instantaneous snapshot of a two-player match
///
/// Constructed once per observation tick with every field unknown, then filled
/// in field by field by whatever produces observations. No cross-field
/// consistency is checked here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    // Positions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_pos: Option<CourtPosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opponent_pos: Option<CourtPosition>,

    // Shuttle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shuttle_zone: Option<ShuttleZone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shuttle_height: Option<ShuttleHeight>,

    // Player stats, nominally 0-100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stamina: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<Score>,
}

impl GameState {
    /// Create a snapshot with every field unknown
    pub fn new() -> Self {
        Self::default()
    }
}
