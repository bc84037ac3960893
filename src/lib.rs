//! # Grid Rivals
//!
//! Core logic for two two-player grid games — a column-drop connect-four
//! game and a resource-collecting maze game — sharing one adversarial
//! search engine. Rendering and input handling live elsewhere; this crate
//! only computes moves and mutates boards.
//!
//! ## Modules
//!
//! - [`game`] — Board abstraction, the connect-four and maze boards, maze
//!   generation
//! - [`ai`] — Agent trait, minimax/alpha-beta search, heuristics, greedy
//!   and random agents
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
