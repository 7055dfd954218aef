//! Core types for Zauberwerk: entities, containers, places, and the world
//! graph that owns them.
//!
//! This crate defines the structural substrate of the simulation: who exists,
//! what kind of thing they are, and which container currently holds them. It
//! knows nothing about time, randomness, or behavior; you can construct a
//! [`World`] programmatically or deserialize one from JSON.

/// Entity types, identifiers, and the capability tag.
pub mod entity;
/// Error types used throughout the crate.
pub mod error;
/// People: stats, birthplaces, and behavioral variants.
pub mod person;
/// Directions and the exits that connect places.
pub mod place;
/// Spell data: incantations and tagged effects.
pub mod spell;
/// The central world model that owns entities, containment, and exits.
pub mod world;

/// Re-export of core entity types.
pub use entity::{Entity, EntityId, EntityKind};
/// Re-export of error types.
pub use error::{WorldError, WorldResult};
/// Re-export of person types.
pub use person::{Habits, Person, PersonKind};
/// Re-export of place types.
pub use place::{Direction, Exit};
/// Re-export of spell types.
pub use spell::{Spell, SpellEffect};
/// Re-export of the world model.
pub use world::World;
