//! Tick-based world simulation for Zauberwerk.
//!
//! Drives a [`zw_core::World`] through discrete time: a clock with a
//! callback registry gives autonomous people a notion of "each tick", and
//! the [`Simulation`] orchestrator resolves their actions (movement,
//! taking and dropping things, combat, teaching, death) while emitting
//! announcements through an external sink. All randomness flows through a
//! single seeded RNG, so whole runs are deterministic per seed.

/// Person operations: movement, possession, combat, teaching, death.
pub mod actions;
/// Announcements, their log, and the announcer seam.
pub mod announce;
/// Autonomous per-tick routines for NPC variants.
pub mod behavior;
/// The clock and its callback registry.
pub mod clock;
/// Configuration for simulation runs.
pub mod config;
/// Error types for the simulation crate.
pub mod error;
/// Top-level simulation orchestrator.
pub mod simulation;
/// The spell vault: canonical templates, cloning, and casting.
pub mod spellbook;

/// Re-exports of [`announce::Announcement`], [`announce::AnnouncementLog`],
/// [`announce::Announcer`], and [`announce::Scope`].
pub use announce::{Announcement, AnnouncementLog, Announcer, Scope};
/// Re-exports of [`clock::Callback`], [`clock::Clock`], and [`clock::Routine`].
pub use clock::{Callback, Clock, Routine};
/// Re-export of [`config::SimConfig`].
pub use config::SimConfig;
/// Re-exports of [`error::SimError`] and [`error::SimResult`].
pub use error::{SimError, SimResult};
/// Re-export of [`simulation::Simulation`].
pub use simulation::Simulation;
