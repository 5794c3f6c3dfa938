//! Toroidal grid Snake for the terminal.
//!
//! The snake lives on a wrapping grid: leaving one edge re-enters from the
//! opposite one. The crate splits into:
//! - Core game logic with no I/O dependencies (game module)
//! - Key-event to command mapping (input module)
//! - TUI rendering of the game snapshot (render module)
//! - In-memory session statistics (metrics module)
//! - The interactive terminal mode wiring it all together (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
