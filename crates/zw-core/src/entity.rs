use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::person::Person;
use crate::spell::Spell;

/// Unique identifier for every entity in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    /// Generate a new random entity ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// What an entity is and what it can do.
///
/// Each kind carries its full capability bundle as payload: a person is
/// always a mobile container with stats, a spell always has an effect.
/// There is no optional component mixing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// A location. Containers for everything else; never contained
    /// themselves. Exits between places are registered on the
    /// [`World`](crate::world::World).
    Place,
    /// An inanimate object. `portable: false` means it is fixed to the
    /// container it was created in and can never be relocated.
    Thing {
        /// Whether this thing may ever change container.
        portable: bool,
    },
    /// A person: mobile, and itself a container for carried things.
    Person(Person),
    /// A spell: a portable thing carrying an incantation and an effect.
    Spell(Spell),
}

/// Core entity struct. Every world object is an Entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    /// Unique identifier for this entity.
    pub id: EntityId,
    /// Display name. Names are labels, not enforced unique.
    pub name: String,
    /// The kind (capability bundle) of this entity.
    pub kind: EntityKind,
    /// The container currently holding this entity. `None` only for places.
    pub location: Option<EntityId>,
    /// Wall-clock timestamp when the entity was created.
    pub created_at: DateTime<Utc>,
}

impl Entity {
    /// Create a new entity with a random ID. Placement is the
    /// [`World`](crate::world::World)'s job; its constructors set
    /// `location` and container membership in one step, which is why this
    /// is not public API.
    pub(crate) fn new(kind: EntityKind, name: impl Into<String>) -> Self {
        Self {
            id: EntityId::new(),
            name: name.into(),
            kind,
            location: None,
            created_at: Utc::now(),
        }
    }

    /// Returns `true` if this entity is a place.
    pub fn is_place(&self) -> bool {
        matches!(self.kind, EntityKind::Place)
    }

    /// Returns `true` if this entity is a person.
    pub fn is_person(&self) -> bool {
        matches!(self.kind, EntityKind::Person(_))
    }

    /// Returns `true` if this entity is a spell.
    pub fn is_spell(&self) -> bool {
        matches!(self.kind, EntityKind::Spell(_))
    }

    /// Returns `true` if this entity can hold other entities.
    pub fn is_container(&self) -> bool {
        matches!(self.kind, EntityKind::Place | EntityKind::Person(_))
    }

    /// Returns `true` if this entity's container may legally change.
    pub fn can_relocate(&self) -> bool {
        match self.kind {
            EntityKind::Place => false,
            EntityKind::Thing { portable } => portable,
            EntityKind::Person(_) | EntityKind::Spell(_) => true,
        }
    }

    /// Returns `true` if this entity is the sort of object a person could
    /// pick up: a portable thing or a spell, never a person or place.
    pub fn is_item(&self) -> bool {
        matches!(
            self.kind,
            EntityKind::Thing { portable: true } | EntityKind::Spell(_)
        )
    }

    /// The person payload, if this entity is a person.
    pub fn as_person(&self) -> Option<&Person> {
        match &self.kind {
            EntityKind::Person(p) => Some(p),
            _ => None,
        }
    }

    /// Mutable access to the person payload, if this entity is a person.
    pub fn as_person_mut(&mut self) -> Option<&mut Person> {
        match &mut self.kind {
            EntityKind::Person(p) => Some(p),
            _ => None,
        }
    }

    /// The spell payload, if this entity is a spell.
    pub fn as_spell(&self) -> Option<&Spell> {
        match &self.kind {
            EntityKind::Spell(s) => Some(s),
            _ => None,
        }
    }
}
