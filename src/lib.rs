//! Decision agents for a two-player badminton-style match.
//!
//! [`game::GameState`] is the snapshot an agent reads; [`ai::Agent`] is the
//! decision capability. Concrete strategies live in [`ai`] and are built from
//! [`config::AgentConfig`] through [`ai::create_agent`].

pub mod ai;
pub mod config;
pub mod game;
pub mod logging;
