pub mod action;
pub mod state;

pub use action::Action;
pub use state::{
    CourtDepth, CourtLane, CourtPosition, CourtSide, GameState, Score, ShuttleHeight, ShuttleZone,
    COURT_LENGTH, COURT_WIDTH, NET_Y,
};
