use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityId, EntityKind};
use crate::error::{WorldError, WorldResult};
use crate::person::{Person, PersonKind};
use crate::place::{Direction, Exit};
use crate::spell::Spell;

/// The central world model: the ownership graph.
///
/// Owns all entities plus two indexes: container contents and per-place
/// exits. The structural invariant is that every non-place entity appears
/// in the contents of exactly one container, the one named by its own
/// `location` field, and [`World::move_entity`] is the only operation
/// that touches both sides of that relation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Display name of this world.
    pub name: String,
    entities: HashMap<EntityId, Entity>,
    contents: HashMap<EntityId, Vec<EntityId>>,
    exits: HashMap<EntityId, Vec<Exit>>,
}

impl World {
    /// Create an empty world.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entities: HashMap::new(),
            contents: HashMap::new(),
            exits: HashMap::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Construction: creation and placement are one atomic step
    // -----------------------------------------------------------------------

    /// Add a place. Places have no container.
    pub fn add_place(&mut self, name: impl Into<String>) -> EntityId {
        let entity = Entity::new(EntityKind::Place, name);
        let id = entity.id;
        self.entities.insert(id, entity);
        self.contents.insert(id, Vec::new());
        self.exits.insert(id, Vec::new());
        id
    }

    /// Add an inanimate thing inside `container`.
    pub fn add_thing(
        &mut self,
        name: impl Into<String>,
        container: EntityId,
        portable: bool,
    ) -> WorldResult<EntityId> {
        self.insert_contained(Entity::new(EntityKind::Thing { portable }, name), container)
    }

    /// Add a person at `place`. The place becomes the person's permanent
    /// birthplace.
    pub fn add_person(
        &mut self,
        name: impl Into<String>,
        place: EntityId,
        kind: PersonKind,
    ) -> WorldResult<EntityId> {
        if !self.entity(place)?.is_place() {
            return Err(WorldError::NotAPlace(place));
        }
        self.insert_contained(
            Entity::new(EntityKind::Person(Person::new(place, kind)), name),
            place,
        )
    }

    /// Add a spell inside `container`.
    pub fn add_spell(
        &mut self,
        name: impl Into<String>,
        container: EntityId,
        spell: Spell,
    ) -> WorldResult<EntityId> {
        self.insert_contained(Entity::new(EntityKind::Spell(spell), name), container)
    }

    fn insert_contained(&mut self, mut entity: Entity, container: EntityId) -> WorldResult<EntityId> {
        if !self.entity(container)?.is_container() {
            return Err(WorldError::NotAContainer(container));
        }
        let id = entity.id;
        entity.location = Some(container);
        self.entities.insert(id, entity);
        self.contents.entry(container).or_default().push(id);
        self.contents.entry(id).or_default();
        Ok(id)
    }

    // -----------------------------------------------------------------------
    // Containment
    // -----------------------------------------------------------------------

    /// Relocate `entity` into `to`, removing it from its current container
    /// and updating its location pointer as one step. This is the only
    /// legal way to change an entity's container.
    pub fn move_entity(&mut self, entity: EntityId, to: EntityId) -> WorldResult<()> {
        if !self.entity(entity)?.can_relocate() {
            return Err(WorldError::NotPortable(entity));
        }
        if !self.entity(to)?.is_container() {
            return Err(WorldError::NotAContainer(to));
        }
        let from = self.location_of(entity)?;

        if let Some(held) = self.contents.get_mut(&from) {
            held.retain(|id| *id != entity);
        }
        self.contents.entry(to).or_default().push(entity);
        if let Some(e) = self.entities.get_mut(&entity) {
            e.location = Some(to);
        }
        Ok(())
    }

    /// The IDs currently held by `container`, in insertion order.
    pub fn contents(&self, container: EntityId) -> &[EntityId] {
        self.contents.get(&container).map_or(&[], Vec::as_slice)
    }

    /// Returns `true` if `container` currently holds `entity`.
    pub fn contains(&self, container: EntityId, entity: EntityId) -> bool {
        self.contents(container).contains(&entity)
    }

    /// The container currently holding `entity`. Hard error for places.
    pub fn location_of(&self, entity: EntityId) -> WorldResult<EntityId> {
        self.entity(entity)?
            .location
            .ok_or(WorldError::NotContained(entity))
    }

    /// All persons currently at `place`.
    pub fn occupants(&self, place: EntityId) -> Vec<EntityId> {
        self.contents(place)
            .iter()
            .copied()
            .filter(|id| self.entities.get(id).is_some_and(Entity::is_person))
            .collect()
    }

    // -----------------------------------------------------------------------
    // Exits
    // -----------------------------------------------------------------------

    /// Register a one-way exit from `from` toward `to`. If `from` already
    /// has an exit in that direction, this is a no-op.
    pub fn connect(&mut self, from: EntityId, direction: Direction, to: EntityId) -> WorldResult<()> {
        if !self.entity(from)?.is_place() {
            return Err(WorldError::NotAPlace(from));
        }
        if !self.entity(to)?.is_place() {
            return Err(WorldError::NotAPlace(to));
        }
        let exits = self.exits.entry(from).or_default();
        if exits.iter().any(|e| e.direction == direction) {
            return Ok(());
        }
        exits.push(Exit {
            direction,
            from,
            to,
        });
        Ok(())
    }

    /// Register a symmetric pair of exits: `a` toward `b`, and `b` back
    /// toward `a` through the opposite direction.
    pub fn connect_both(
        &mut self,
        a: EntityId,
        direction: Direction,
        b: EntityId,
    ) -> WorldResult<()> {
        self.connect(a, direction, b)?;
        self.connect(b, direction.opposite(), a)
    }

    /// The unique exit from `place` in `direction`, if one exists.
    /// Lookup is a linear scan over the place's exit set.
    pub fn exit_toward(&self, place: EntityId, direction: Direction) -> Option<&Exit> {
        self.exits_from(place)
            .iter()
            .find(|e| e.direction == direction)
    }

    /// All exits leading out of `place`.
    pub fn exits_from(&self, place: EntityId) -> &[Exit] {
        self.exits.get(&place).map_or(&[], Vec::as_slice)
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Get a reference to an entity by ID.
    pub fn get_entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    /// Get a mutable reference to an entity by ID.
    pub fn get_entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(&id)
    }

    /// Get an entity by ID, hard-erroring if absent.
    pub fn entity(&self, id: EntityId) -> WorldResult<&Entity> {
        self.entities.get(&id).ok_or(WorldError::EntityNotFound(id))
    }

    /// Get a mutable entity by ID, hard-erroring if absent.
    pub fn entity_mut(&mut self, id: EntityId) -> WorldResult<&mut Entity> {
        self.entities
            .get_mut(&id)
            .ok_or(WorldError::EntityNotFound(id))
    }

    /// Find the first entity with the given name (case-insensitive).
    /// Names are not unique; first match wins.
    pub fn find_by_name(&self, name: &str) -> Option<&Entity> {
        let lower = name.to_lowercase();
        self.entities
            .values()
            .find(|e| e.name.to_lowercase() == lower)
    }

    /// The display name of an entity, or its short ID if unknown.
    pub fn entity_name(&self, id: EntityId) -> String {
        self.entities
            .get(&id)
            .map_or_else(|| id.to_string(), |e| e.name.clone())
    }

    /// All entities, in no particular order.
    pub fn all_entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    /// All place IDs, in no particular order.
    pub fn places(&self) -> Vec<EntityId> {
        self.entities
            .values()
            .filter(|e| e.is_place())
            .map(|e| e.id)
            .collect()
    }

    /// Total number of entities.
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }
}
