//! Autonomous per-tick routines for NPC variants.
//!
//! All probability gates draw from the simulation's single seeded RNG:
//! a parameter `n` means "with chance 1/n this tick".

use rand::Rng;
use zw_core::{Entity, EntityId, EntityKind, PersonKind};

use crate::clock::{Callback, Routine};
use crate::error::SimResult;
use crate::simulation::Simulation;

impl Simulation {
    /// Dispatch one activated callback to its routine.
    pub(crate) fn run_routine(&mut self, callback: Callback) -> SimResult<()> {
        match callback.routine {
            Routine::MoveAndTake => self.move_and_take(callback.owner),
            Routine::EatPeople => self.eat_people(callback.owner),
            Routine::IrritateStudents => self.irritate_students(callback.owner),
        }
    }

    /// Wander between `1..=activity` random exits (a step with no exit is
    /// skipped), then with chance `1/miserly` grab one random item from
    /// the floor or from a fellow occupant's pockets.
    fn move_and_take(&mut self, owner: EntityId) -> SimResult<()> {
        let Some(habits) = self.person(owner)?.kind.habits() else {
            return Ok(());
        };

        let steps = self.rng.random_range(1..=habits.activity.max(1));
        for _ in 0..steps {
            let place = self.place_of(owner)?;
            let exits = self.world.exits_from(place);
            if exits.is_empty() {
                continue;
            }
            let pick = self.rng.random_range(0..exits.len());
            let direction = exits[pick].direction;
            self.go(owner, direction)?;
        }

        if self.rng.random_range(0..habits.miserly.max(1)) == 0 {
            let place = self.place_of(owner)?;
            let candidates = self.grabbable(owner, place);
            if !candidates.is_empty() {
                let pick = candidates[self.rng.random_range(0..candidates.len())];
                self.take(owner, pick)?;
            }
        }
        Ok(())
    }

    /// Items worth grabbing at `place`: everything loose on the floor,
    /// plus portable things peeked in other occupants' inventories.
    /// Carried spells cannot be stolen, so they are not candidates.
    fn grabbable(&self, owner: EntityId, place: EntityId) -> Vec<EntityId> {
        let mut found: Vec<EntityId> = self
            .world
            .contents(place)
            .iter()
            .copied()
            .filter(|id| self.world.get_entity(*id).is_some_and(Entity::is_item))
            .collect();
        for person in self.world.occupants(place) {
            if person == owner {
                continue;
            }
            found.extend(self.world.contents(person).iter().copied().filter(|id| {
                self.world
                    .get_entity(*id)
                    .is_some_and(|e| matches!(e.kind, EntityKind::Thing { portable: true }))
            }));
        }
        found
    }

    /// With chance `1/hunger`, bite a random co-located person for
    /// `1..=3` damage; with nobody around, grumble instead.
    fn eat_people(&mut self, owner: EntityId) -> SimResult<()> {
        let PersonKind::Troll { hunger, .. } = self.person(owner)?.kind else {
            return Ok(());
        };
        if self.rng.random_range(0..hunger.max(1)) != 0 {
            return Ok(());
        }

        let place = self.place_of(owner)?;
        let name = self.world.entity_name(owner);
        let victims: Vec<EntityId> = self
            .world
            .occupants(place)
            .into_iter()
            .filter(|id| *id != owner)
            .collect();
        if victims.is_empty() {
            self.announce_room(place, format!("{name} gnashes its teeth at the empty room."));
            return Ok(());
        }

        let victim = victims[self.rng.random_range(0..victims.len())];
        let victim_name = self.world.entity_name(victim);
        let hits = self.rng.random_range(1..=3);
        self.announce_room(place, format!("{name} takes a bite out of {victim_name}!"));
        self.suffer(victim, hits, owner)?;
        Ok(())
    }

    /// With chance `1/irritability`, march every non-professor co-located
    /// person back to their birthplace; with nobody to scold, grumble.
    fn irritate_students(&mut self, owner: EntityId) -> SimResult<()> {
        let PersonKind::HallMonitor { irritability, .. } = self.person(owner)?.kind else {
            return Ok(());
        };
        if self.rng.random_range(0..irritability.max(1)) != 0 {
            return Ok(());
        }

        let place = self.place_of(owner)?;
        let name = self.world.entity_name(owner);
        let loiterers: Vec<EntityId> = self
            .world
            .occupants(place)
            .into_iter()
            .filter(|id| *id != owner)
            .filter(|id| {
                self.world
                    .get_entity(*id)
                    .and_then(Entity::as_person)
                    .is_some_and(|p| !p.kind.is_professor())
            })
            .collect();
        if loiterers.is_empty() {
            self.announce_room(place, format!("{name} taps a foot, finding nobody to scold."));
            return Ok(());
        }

        self.announce_room(
            place,
            format!("{name} bellows: \"Back where you belong, all of you!\""),
        );
        for loiterer in loiterers {
            let home = self.person(loiterer)?.birthplace;
            if home == self.place_of(loiterer)? {
                continue;
            }
            self.relocate(loiterer, home)?;
        }
        Ok(())
    }
}
