//! Spell data: incantations and tagged effects.
//!
//! A spell's effect is a plain value applied by the simulation engine, not
//! a closure; this keeps spells comparable, serializable, and clonable from
//! their vault templates.

use serde::{Deserialize, Serialize};

/// What casting a spell does to its target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpellEffect {
    /// Restore health, clamped at the target's maximum.
    Heal {
        /// Health points restored.
        points: i32,
    },
    /// Pure mischief: the target visibly suffers the indignity described
    /// by `taunt`, with no mechanical consequence.
    Jinx {
        /// Predicate appended to the target's name in the announcement.
        taunt: String,
    },
}

/// The payload of a spell entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spell {
    /// The words spoken when the spell is cast. Flavor only.
    pub incantation: String,
    /// The effect applied to the target.
    pub effect: SpellEffect,
}

impl Spell {
    /// Create a spell with the given incantation and effect.
    pub fn new(incantation: impl Into<String>, effect: SpellEffect) -> Self {
        Self {
            incantation: incantation.into(),
            effect,
        }
    }
}
