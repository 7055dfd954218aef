//! Person operations: movement, possession, combat, teaching, death.
//!
//! Every operation either fully applies its effect or fully rejects it.
//! Rejections are gameplay outcomes, not errors: the operation announces a
//! refusal and returns `Ok(false)`. Hard `Err` values are reserved for
//! lookups that should never fail at this boundary.

use zw_core::{Direction, EntityId, Person, PersonKind};

use crate::clock::Routine;
use crate::error::{SimError, SimResult};
use crate::simulation::Simulation;

impl Simulation {
    // -----------------------------------------------------------------------
    // Lookup helpers
    // -----------------------------------------------------------------------

    /// The person payload of `id`, or a hard error.
    pub fn person(&self, id: EntityId) -> SimResult<&Person> {
        self.world
            .entity(id)?
            .as_person()
            .ok_or(SimError::NotAPerson(id))
    }

    /// Mutable person payload of `id`, or a hard error.
    pub fn person_mut(&mut self, id: EntityId) -> SimResult<&mut Person> {
        self.world
            .entity_mut(id)?
            .as_person_mut()
            .ok_or(SimError::NotAPerson(id))
    }

    /// The place a person currently stands in.
    pub(crate) fn place_of(&self, person: EntityId) -> SimResult<EntityId> {
        Ok(self.world.location_of(person)?)
    }

    fn knows_spell(&self, person: EntityId, spell_name: &str) -> bool {
        self.world.contents(person).iter().any(|id| {
            self.world
                .get_entity(*id)
                .is_some_and(|e| e.is_spell() && e.name == spell_name)
        })
    }

    // -----------------------------------------------------------------------
    // Possession
    // -----------------------------------------------------------------------

    /// Try to take a thing: from the floor, or out of another person's
    /// hands. People cannot be taken, fixed things will not budge, and a
    /// spell in someone's possession refuses to be stolen.
    pub fn take(&mut self, actor: EntityId, thing: EntityId) -> SimResult<bool> {
        self.person(actor)?;
        let place = self.place_of(actor)?;
        let actor_name = self.world.entity_name(actor);
        let (thing_name, is_item, is_person, is_spell) = {
            let e = self.world.entity(thing)?;
            (e.name.clone(), e.is_item(), e.is_person(), e.is_spell())
        };

        if self.world.contains(actor, thing) {
            self.announce_room(
                place,
                format!("{actor_name} is already carrying the {thing_name}."),
            );
            return Ok(false);
        }
        if is_person {
            self.announce_room(
                place,
                format!("{thing_name} glares at {actor_name} and will not be picked up."),
            );
            return Ok(false);
        }
        if !is_item {
            self.announce_room(place, format!("The {thing_name} will not budge."));
            return Ok(false);
        }

        let holder = self.world.location_of(thing)?;
        let holder_is_person = self.world.entity(holder)?.is_person();
        if is_spell && holder_is_person {
            self.announce_room(
                place,
                format!("The {thing_name} clings to its keeper and slips from {actor_name}'s grasp."),
            );
            return Ok(false);
        }

        if holder_is_person {
            self.force_lose(holder, thing, actor)?;
        } else {
            self.world.move_entity(thing, actor)?;
        }
        self.announce_room(place, format!("{actor_name} takes the {thing_name}."));
        Ok(true)
    }

    /// Relocate a carried thing to an arbitrary container, with the
    /// holder's visible displeasure. Spells refuse to be parted from
    /// their keeper.
    pub fn lose(&mut self, holder: EntityId, thing: EntityId, to: EntityId) -> SimResult<bool> {
        self.person(holder)?;
        if !self.world.contains(holder, thing) {
            return Err(SimError::NotCarried {
                person: holder,
                thing,
            });
        }
        if self.world.entity(thing)?.is_spell() {
            let place = self.place_of(holder)?;
            let holder_name = self.world.entity_name(holder);
            let thing_name = self.world.entity_name(thing);
            self.announce_room(
                place,
                format!("The {thing_name} refuses to leave {holder_name}."),
            );
            return Ok(false);
        }
        self.force_lose(holder, thing, to)?;
        Ok(true)
    }

    /// Put a carried thing down at the holder's current location.
    /// Spells refuse.
    pub fn drop_item(&mut self, holder: EntityId, thing: EntityId) -> SimResult<bool> {
        self.person(holder)?;
        if !self.world.contains(holder, thing) {
            return Err(SimError::NotCarried {
                person: holder,
                thing,
            });
        }
        let place = self.place_of(holder)?;
        let holder_name = self.world.entity_name(holder);
        let thing_name = self.world.entity_name(thing);
        if self.world.entity(thing)?.is_spell() {
            self.announce_room(place, format!("The {thing_name} will not be put down."));
            return Ok(false);
        }
        self.world.move_entity(thing, place)?;
        self.announce_room(place, format!("{holder_name} drops the {thing_name}."));
        Ok(true)
    }

    /// Unconditional removal from a holder's possession. Used by `take`,
    /// by voluntary `lose`, and by death, which strips even spells.
    fn force_lose(&mut self, holder: EntityId, thing: EntityId, to: EntityId) -> SimResult<()> {
        let place = self.place_of(holder)?;
        let holder_name = self.world.entity_name(holder);
        let thing_name = self.world.entity_name(thing);
        self.announce_room(
            place,
            format!("{holder_name} wails: \"I have lost my {thing_name}!\""),
        );
        self.world.move_entity(thing, to)?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Movement
    // -----------------------------------------------------------------------

    /// Walk through the exit in `direction`, if one exists. A successful
    /// move by the avatar additionally advances the clock by one tick.
    pub fn go(&mut self, actor: EntityId, direction: Direction) -> SimResult<bool> {
        let kind = self.person(actor)?.kind;
        let from = self.place_of(actor)?;
        let destination = self.world.exit_toward(from, direction).map(|exit| exit.to);
        let Some(to) = destination else {
            let actor_name = self.world.entity_name(actor);
            self.announce_room(
                from,
                format!("{actor_name} cannot go {direction} from here."),
            );
            return Ok(false);
        };

        self.leave_room(actor, from, Some(direction));
        self.world.move_entity(actor, to)?;
        self.enter_room(actor, to);

        if kind.is_avatar() {
            self.tick()?;
        }
        Ok(true)
    }

    /// Departure hook: announces to the room being left.
    fn leave_room(&mut self, person: EntityId, room: EntityId, direction: Option<Direction>) {
        let name = self.world.entity_name(person);
        let text = match direction {
            Some(d) => format!("{name} heads {d}."),
            None => format!("{name} is marched out of the room."),
        };
        self.announce_room(room, text);
    }

    /// Arrival hook: announces to the room being entered. Also fires at
    /// heaven when someone dies.
    fn enter_room(&mut self, person: EntityId, room: EntityId) {
        let name = self.world.entity_name(person);
        let room_name = self.world.entity_name(room);
        self.announce_room(room, format!("{name} arrives at {room_name}."));
    }

    /// Forced relocation outside the exit graph: hall monitors and death
    /// use this instead of `go`. Fires both room hooks.
    pub(crate) fn relocate(&mut self, person: EntityId, to: EntityId) -> SimResult<()> {
        let from = self.place_of(person)?;
        self.leave_room(person, from, None);
        self.world.move_entity(person, to)?;
        self.enter_room(person, to);
        Ok(())
    }

    /// Speak to the room.
    pub fn say(&mut self, actor: EntityId, text: &str) -> SimResult<()> {
        self.person(actor)?;
        let place = self.place_of(actor)?;
        let name = self.world.entity_name(actor);
        self.announce_room(place, format!("{name} says: \"{text}\""));
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Combat and mortality
    // -----------------------------------------------------------------------

    /// Take `hits` damage from `source`. Professors are unconditionally
    /// immune. Reaching zero health triggers death.
    pub fn suffer(&mut self, target: EntityId, hits: i32, source: EntityId) -> SimResult<bool> {
        let kind = self.person(target)?.kind;
        let place = self.place_of(target)?;
        let target_name = self.world.entity_name(target);
        let source_name = self.world.entity_name(source);

        if kind.is_professor() {
            self.announce_room(
                place,
                format!("{target_name} waves away the blow from {source_name} without looking up."),
            );
            return Ok(false);
        }

        let health = {
            let person = self.person_mut(target)?;
            person.health -= hits;
            person.health
        };
        self.announce_room(
            place,
            format!("Ouch! {target_name} takes {hits} hits from {source_name}."),
        );
        if health <= 0 {
            self.die(target, &source_name)?;
        }
        Ok(true)
    }

    /// Restore health, clamped at the target's maximum.
    pub fn heal(&mut self, target: EntityId, points: i32) -> SimResult<bool> {
        {
            let person = self.person_mut(target)?;
            person.health = (person.health + points).min(person.max_health);
        }
        let place = self.place_of(target)?;
        let name = self.world.entity_name(target);
        self.announce_room(place, format!("{name} looks healthier."));
        Ok(true)
    }

    /// Death: everything carried is left behind (spells included, via a
    /// forced loss), the world hears of it, and the body is relocated to
    /// heaven. The person's callbacks are deregistered first (the
    /// variant's own routine, then the shared movement routine) so a dead
    /// person can never be reactivated on a later tick.
    pub fn die(&mut self, target: EntityId, cause: &str) -> SimResult<()> {
        let kind = self.person(target)?.kind;
        let place = self.place_of(target)?;
        let name = self.world.entity_name(target);

        match kind {
            PersonKind::Troll { .. } => self.clock.remove_callback(target, Routine::EatPeople)?,
            PersonKind::HallMonitor { .. } => {
                self.clock.remove_callback(target, Routine::IrritateStudents)?;
            }
            _ => {}
        }
        if kind.habits().is_some() {
            self.clock.remove_callback(target, Routine::MoveAndTake)?;
        }

        for thing in self.world.contents(target).to_vec() {
            self.force_lose(target, thing, place)?;
        }

        self.announce_world(format!(
            "An earth-rending wail rings out: {name} has been slain by {cause}."
        ));
        let heaven = self.heaven;
        self.relocate(target, heaven)?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Teaching
    // -----------------------------------------------------------------------

    /// Teach a spell: clones it from the professor's own inventory into
    /// the target's. Refuses if the spell is not in hand or the target is
    /// no person.
    pub fn teach_spell(
        &mut self,
        professor: EntityId,
        spell: EntityId,
        target: EntityId,
    ) -> SimResult<bool> {
        self.person(professor)?;
        let place = self.place_of(professor)?;
        let prof_name = self.world.entity_name(professor);
        let spell_name = self.world.entity_name(spell);

        if !self.world.contains(professor, spell) || !self.world.entity(spell)?.is_spell() {
            self.announce_room(
                place,
                format!("{prof_name} pats their pockets: \"I have no {spell_name} to teach.\""),
            );
            return Ok(false);
        }
        if !self.world.entity(target)?.is_person() {
            self.announce_room(place, format!("{prof_name} will not lecture at furniture."));
            return Ok(false);
        }

        let target_name = self.world.entity_name(target);
        self.clone_spell(spell, target)?;
        self.announce_room(
            place,
            format!("{prof_name} teaches {spell_name} to {target_name}."),
        );
        Ok(true)
    }

    /// Ask a professor for a spell. Refuses if the student already knows
    /// it, the teacher is no professor, or the thing is no spell; on
    /// success the student announces the acquisition.
    pub fn learn_spell(
        &mut self,
        student: EntityId,
        spell: EntityId,
        professor: EntityId,
    ) -> SimResult<bool> {
        self.person(student)?;
        let place = self.place_of(student)?;
        let student_name = self.world.entity_name(student);
        let spell_name = self.world.entity_name(spell);

        if !self.world.entity(spell)?.is_spell() {
            self.announce_room(
                place,
                format!("The {spell_name} is not something one can learn."),
            );
            return Ok(false);
        }
        let is_professor = self
            .world
            .entity(professor)?
            .as_person()
            .is_some_and(|p| p.kind.is_professor());
        if !is_professor {
            let prof_name = self.world.entity_name(professor);
            self.announce_room(
                place,
                format!("{prof_name} looks blank; no teaching happens."),
            );
            return Ok(false);
        }
        if self.knows_spell(student, &spell_name) {
            self.announce_room(
                place,
                format!("{student_name} already knows {spell_name}."),
            );
            return Ok(false);
        }

        let taught = self.teach_spell(professor, spell, student)?;
        if taught {
            self.announce_room(
                place,
                format!("{student_name} commits {spell_name} to memory."),
            );
        }
        Ok(taught)
    }

    // -----------------------------------------------------------------------
    // Observation
    // -----------------------------------------------------------------------

    /// Describe the viewer's surroundings: location, carried things,
    /// items on the floor, other people present, and exit directions.
    pub fn look_around(&self, viewer: EntityId) -> SimResult<String> {
        self.person(viewer)?;
        let place = self.place_of(viewer)?;
        let mut out = format!("You are at {}.\n", self.world.entity_name(place));

        let carried: Vec<String> = self
            .world
            .contents(viewer)
            .iter()
            .map(|id| self.world.entity_name(*id))
            .collect();
        if carried.is_empty() {
            out.push_str("You are empty-handed.\n");
        } else {
            out.push_str(&format!("You are carrying: {}.\n", carried.join(", ")));
        }

        let floor: Vec<String> = self
            .world
            .contents(place)
            .iter()
            .filter(|id| self.world.get_entity(**id).is_some_and(|e| e.is_item()))
            .map(|id| self.world.entity_name(*id))
            .collect();
        if !floor.is_empty() {
            out.push_str(&format!("On the floor you see: {}.\n", floor.join(", ")));
        }

        let others: Vec<String> = self
            .world
            .occupants(place)
            .into_iter()
            .filter(|id| *id != viewer)
            .map(|id| self.world.entity_name(id))
            .collect();
        if !others.is_empty() {
            out.push_str(&format!("Also here: {}.\n", others.join(", ")));
        }

        let exits: Vec<&str> = self
            .world
            .exits_from(place)
            .iter()
            .map(|e| e.direction.name())
            .collect();
        if exits.is_empty() {
            out.push_str("There are no exits.\n");
        } else {
            out.push_str(&format!("Exits lead: {}.\n", exits.join(", ")));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use zw_core::{Habits, World};

    fn sim() -> Simulation {
        Simulation::new(World::new("Test"), SimConfig::default()).unwrap()
    }

    /// Lobby and stairwell connected up/down, as in the canonical layout.
    fn two_rooms(sim: &mut Simulation) -> (EntityId, EntityId) {
        let lobby = sim.world_mut().add_place("Lobby");
        let stairwell = sim.world_mut().add_place("Stairwell");
        sim.world_mut()
            .connect_both(lobby, Direction::Up, stairwell)
            .unwrap();
        (lobby, stairwell)
    }

    #[test]
    fn go_relocates_through_the_exit() {
        let mut sim = sim();
        let (lobby, stairwell) = two_rooms(&mut sim);
        let alyx = sim.spawn_person("Alyx", lobby).unwrap();

        let moved = sim.go(alyx, Direction::Up).unwrap();

        assert!(moved);
        assert!(sim.world().contains(stairwell, alyx));
        assert!(!sim.world().contains(lobby, alyx));
        // Departure announced to the old room, arrival to the new.
        let texts: Vec<&str> = sim
            .announcements()
            .entries()
            .iter()
            .map(|a| a.text.as_str())
            .collect();
        assert!(texts.iter().any(|t| t.contains("heads up")));
        assert!(texts.iter().any(|t| t.contains("arrives at Stairwell")));
        // A plain person's move does not advance the clock.
        assert_eq!(sim.clock().time(), 0);
    }

    #[test]
    fn avatar_go_advances_clock_by_exactly_one() {
        let mut sim = sim();
        let (lobby, _) = two_rooms(&mut sim);
        let avatar = sim.spawn_avatar("You", lobby).unwrap();

        sim.go(avatar, Direction::Up).unwrap();
        assert_eq!(sim.clock().time(), 1);

        // A refused move does not tick.
        sim.go(avatar, Direction::West).unwrap();
        assert_eq!(sim.clock().time(), 1);
    }

    #[test]
    fn go_without_exit_changes_nothing() {
        let mut sim = sim();
        let (lobby, _) = two_rooms(&mut sim);
        let alyx = sim.spawn_person("Alyx", lobby).unwrap();

        assert!(sim.world().exit_toward(lobby, Direction::North).is_none());
        let moved = sim.go(alyx, Direction::North).unwrap();

        assert!(!moved);
        assert!(sim.world().contains(lobby, alyx));
        let last = sim.announcements().entries().last().unwrap();
        assert!(last.text.contains("cannot go north"));
    }

    #[test]
    fn take_from_floor_and_refuse_double_take() {
        let mut sim = sim();
        let (lobby, _) = two_rooms(&mut sim);
        let alyx = sim.spawn_person("Alyx", lobby).unwrap();
        let coin = sim.world_mut().add_thing("Coin", lobby, true).unwrap();

        assert!(sim.take(alyx, coin).unwrap());
        assert!(sim.world().contains(alyx, coin));

        assert!(!sim.take(alyx, coin).unwrap());
        assert!(sim.world().contains(alyx, coin));
    }

    #[test]
    fn take_refuses_people_and_fixed_things() {
        let mut sim = sim();
        let (lobby, _) = two_rooms(&mut sim);
        let alyx = sim.spawn_person("Alyx", lobby).unwrap();
        let bert = sim.spawn_person("Bert", lobby).unwrap();
        let statue = sim.world_mut().add_thing("Statue", lobby, false).unwrap();

        assert!(!sim.take(alyx, bert).unwrap());
        assert!(!sim.take(alyx, statue).unwrap());
        assert!(sim.world().contains(lobby, bert));
        assert!(sim.world().contains(lobby, statue));
    }

    #[test]
    fn take_from_another_person_forces_a_loss() {
        let mut sim = sim();
        let (lobby, _) = two_rooms(&mut sim);
        let alyx = sim.spawn_person("Alyx", lobby).unwrap();
        let bert = sim.spawn_person("Bert", lobby).unwrap();
        let coin = sim.world_mut().add_thing("Coin", lobby, true).unwrap();
        sim.take(bert, coin).unwrap();

        assert!(sim.take(alyx, coin).unwrap());
        assert!(sim.world().contains(alyx, coin));
        assert!(!sim.world().contains(bert, coin));
        let texts: Vec<&str> = sim
            .announcements()
            .entries()
            .iter()
            .map(|a| a.text.as_str())
            .collect();
        assert!(texts.iter().any(|t| t.contains("I have lost my Coin")));
    }

    #[test]
    fn spells_cannot_be_stolen_dropped_or_lost() {
        let mut sim = sim();
        let (lobby, _) = two_rooms(&mut sim);
        let alyx = sim.spawn_person("Alyx", lobby).unwrap();
        let bert = sim.spawn_person("Bert", lobby).unwrap();
        let template = sim.template("lesser-mending").unwrap();
        let spell = sim.clone_spell(template, bert).unwrap();

        assert!(!sim.take(alyx, spell).unwrap());
        assert!(!sim.drop_item(bert, spell).unwrap());
        assert!(!sim.lose(bert, spell, lobby).unwrap());
        assert!(sim.world().contains(bert, spell));
    }

    #[test]
    fn spells_on_the_floor_can_be_taken() {
        let mut sim = sim();
        let (lobby, _) = two_rooms(&mut sim);
        let alyx = sim.spawn_person("Alyx", lobby).unwrap();
        let template = sim.template("lesser-mending").unwrap();
        let spell = sim.clone_spell(template, lobby).unwrap();

        assert!(sim.take(alyx, spell).unwrap());
        assert!(sim.world().contains(alyx, spell));
    }

    #[test]
    fn dropping_something_not_carried_is_a_hard_error() {
        let mut sim = sim();
        let (lobby, _) = two_rooms(&mut sim);
        let alyx = sim.spawn_person("Alyx", lobby).unwrap();
        let coin = sim.world_mut().add_thing("Coin", lobby, true).unwrap();

        assert!(matches!(
            sim.drop_item(alyx, coin),
            Err(SimError::NotCarried { .. })
        ));
    }

    #[test]
    fn suffer_reduces_health_and_kills_at_zero() {
        let mut sim = sim();
        let (lobby, _) = two_rooms(&mut sim);
        let alyx = sim.spawn_person("Alyx", lobby).unwrap();
        let grob = sim
            .spawn_troll("Grob", lobby, Habits::default(), 3)
            .unwrap();

        sim.suffer(alyx, 2, grob).unwrap();
        assert_eq!(sim.person(alyx).unwrap().health, 1);
        assert!(sim.world().contains(lobby, alyx));

        sim.suffer(alyx, 2, grob).unwrap();
        assert!(sim.world().contains(sim.heaven(), alyx));
    }

    #[test]
    fn professors_are_invulnerable() {
        let mut sim = sim();
        let (lobby, _) = two_rooms(&mut sim);
        let prof = sim
            .spawn_professor("Professor Thistlewood", lobby, Habits::default())
            .unwrap();
        let grob = sim
            .spawn_troll("Grob", lobby, Habits::default(), 3)
            .unwrap();

        let hit = sim.suffer(prof, 99, grob).unwrap();
        assert!(!hit);
        assert_eq!(sim.person(prof).unwrap().health, 3);
    }

    #[test]
    fn heal_clamps_at_max_health() {
        let mut sim = sim();
        let (lobby, _) = two_rooms(&mut sim);
        let alyx = sim.spawn_person("Alyx", lobby).unwrap();
        sim.person_mut(alyx).unwrap().health = 1;

        sim.heal(alyx, 50).unwrap();
        assert_eq!(sim.person(alyx).unwrap().health, 3);
    }

    #[test]
    fn death_strews_inventory_and_relocates_to_heaven() {
        let mut sim = sim();
        let (lobby, stairwell) = two_rooms(&mut sim);
        let alyx = sim.spawn_person("Alyx", lobby).unwrap();
        let coin = sim.world_mut().add_thing("Coin", lobby, true).unwrap();
        let template = sim.template("soothing-balm").unwrap();
        let spell = sim.clone_spell(template, alyx).unwrap();
        sim.take(alyx, coin).unwrap();
        sim.go(alyx, Direction::Up).unwrap();

        sim.die(alyx, "misadventure").unwrap();

        // Inventory lands at the last location, the spell included.
        assert!(sim.world().contains(stairwell, coin));
        assert!(sim.world().contains(stairwell, spell));
        assert!(sim.world().contents(alyx).is_empty());
        assert!(sim.world().contains(sim.heaven(), alyx));

        let texts: Vec<&str> = sim
            .announcements()
            .entries()
            .iter()
            .map(|a| a.text.as_str())
            .collect();
        assert!(texts.iter().any(|t| t.contains("has been slain by")));
        assert!(
            texts
                .iter()
                .any(|t| t.contains("arrives at The Great Beyond"))
        );
    }

    #[test]
    fn teach_spell_clones_into_the_student() {
        let mut sim = sim();
        let (lobby, _) = two_rooms(&mut sim);
        let prof = sim
            .spawn_professor("Professor Thistlewood", lobby, Habits::default())
            .unwrap();
        let lena = sim.spawn_person("Lena", lobby).unwrap();
        let spell = sim.world().contents(prof)[0];

        let taught = sim.learn_spell(lena, spell, prof).unwrap();
        assert!(taught);

        let learned: Vec<EntityId> = sim.world().contents(lena).to_vec();
        assert_eq!(learned.len(), 1);
        let copy = learned[0];
        // Matching name and incantation, distinct identity; the professor
        // keeps the original.
        assert_ne!(copy, spell);
        assert_eq!(
            sim.world().entity_name(copy),
            sim.world().entity_name(spell)
        );
        assert_eq!(
            sim.world().get_entity(copy).unwrap().as_spell(),
            sim.world().get_entity(spell).unwrap().as_spell()
        );
        assert!(sim.world().contains(prof, spell));
    }

    #[test]
    fn learn_spell_refuses_known_spells_and_non_professors() {
        let mut sim = sim();
        let (lobby, _) = two_rooms(&mut sim);
        let prof = sim
            .spawn_professor("Professor Thistlewood", lobby, Habits::default())
            .unwrap();
        let lena = sim.spawn_person("Lena", lobby).unwrap();
        let bert = sim.spawn_person("Bert", lobby).unwrap();
        let spell = sim.world().contents(prof)[0];

        assert!(!sim.learn_spell(lena, spell, bert).unwrap());
        assert!(sim.learn_spell(lena, spell, prof).unwrap());
        // Second acquisition of the same spell is refused.
        assert!(!sim.learn_spell(lena, spell, prof).unwrap());
        assert_eq!(sim.world().contents(lena).len(), 1);
    }

    #[test]
    fn teach_spell_requires_possession() {
        let mut sim = sim();
        let (lobby, _) = two_rooms(&mut sim);
        let prof = sim
            .spawn_professor("Professor Thistlewood", lobby, Habits::default())
            .unwrap();
        let lena = sim.spawn_person("Lena", lobby).unwrap();
        // A template still in the vault is not in the professor's hands.
        let template = sim.template("sneeze-hex").unwrap();

        assert!(!sim.teach_spell(prof, template, lena).unwrap());
        assert!(sim.world().contents(lena).is_empty());
    }

    #[test]
    fn look_around_reports_the_surroundings() {
        let mut sim = sim();
        let (lobby, _) = two_rooms(&mut sim);
        let avatar = sim.spawn_avatar("You", lobby).unwrap();
        let coin = sim.world_mut().add_thing("Coin", lobby, true).unwrap();
        sim.world_mut().add_thing("Rock", lobby, true).unwrap();
        sim.spawn_person("Lena", lobby).unwrap();
        sim.take(avatar, coin).unwrap();

        let report = sim.look_around(avatar).unwrap();
        assert!(report.contains("You are at Lobby."));
        assert!(report.contains("You are carrying: Coin."));
        assert!(report.contains("On the floor you see: Rock."));
        assert!(report.contains("Also here: Lena."));
        assert!(report.contains("Exits lead: up."));
    }

    #[test]
    fn say_is_heard_in_the_room_only() {
        let mut sim = sim();
        let (lobby, stairwell) = two_rooms(&mut sim);
        let alyx = sim.spawn_person("Alyx", lobby).unwrap();

        sim.say(alyx, "is anyone there?").unwrap();

        let here = sim.announcements().visible_from(lobby);
        let there = sim.announcements().visible_from(stairwell);
        assert!(here.iter().any(|a| a.text.contains("is anyone there?")));
        assert!(!there.iter().any(|a| a.text.contains("is anyone there?")));
    }

    #[test]
    fn operations_on_unknown_entities_are_hard_errors() {
        let mut sim = sim();
        let (lobby, _) = two_rooms(&mut sim);
        let alyx = sim.spawn_person("Alyx", lobby).unwrap();
        let ghost = EntityId::new();

        assert!(sim.take(alyx, ghost).is_err());
        assert!(sim.go(ghost, Direction::Up).is_err());
        assert!(sim.suffer(ghost, 1, alyx).is_err());
    }
}
