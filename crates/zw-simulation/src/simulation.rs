use std::fmt;

use rand::SeedableRng;
use rand::rngs::StdRng;
use zw_core::{EntityId, Habits, PersonKind, World};

use crate::announce::{Announcement, AnnouncementLog, Announcer, NullAnnouncer, Scope};
use crate::clock::{Clock, Routine};
use crate::config::SimConfig;
use crate::error::SimResult;
use crate::spellbook;

/// The top-level simulation orchestrator.
///
/// Owns the world, clock, RNG, announcement log, and announcer sink, plus
/// the two engine-created places: heaven (where the dead go) and the spell
/// vault (where the canonical templates live). Drives the tick loop and
/// resolves every person operation.
pub struct Simulation {
    pub(crate) world: World,
    pub(crate) clock: Clock,
    pub(crate) rng: StdRng,
    pub(crate) log: AnnouncementLog,
    pub(crate) announcer: Box<dyn Announcer>,
    pub(crate) heaven: EntityId,
    pub(crate) vault: EntityId,
}

impl fmt::Debug for Simulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simulation")
            .field("time", &self.clock.time())
            .field("entities", &self.world.entity_count())
            .field("announcements", &self.log.len())
            .finish()
    }
}

impl Simulation {
    /// Create a simulation around a world.
    ///
    /// Adds the two engine places, an exit-less heaven and the exit-less
    /// spell vault stocked once with the canonical templates, and seeds
    /// the RNG from the configuration.
    pub fn new(mut world: World, config: SimConfig) -> SimResult<Self> {
        let heaven = world.add_place("The Great Beyond");
        let vault = world.add_place("The Spell Vault");
        spellbook::stock_vault(&mut world, vault)?;
        Ok(Self {
            world,
            clock: Clock::new(),
            rng: StdRng::seed_from_u64(config.seed),
            log: AnnouncementLog::new(config.max_announcements),
            announcer: Box::new(NullAnnouncer),
            heaven,
            vault,
        })
    }

    /// Replace the announcer sink.
    pub fn with_announcer(mut self, announcer: Box<dyn Announcer>) -> Self {
        self.announcer = announcer;
        self
    }

    // -----------------------------------------------------------------------
    // Ticking
    // -----------------------------------------------------------------------

    /// Advance the simulation by one tick.
    ///
    /// Takes a fixed snapshot of the live callbacks in oldest-registered
    /// order, activates each one unless it was removed earlier in this same
    /// tick, then advances the clock. A routine error aborts the remainder
    /// of the snapshot and leaves the time unadvanced.
    pub fn tick(&mut self) -> SimResult<()> {
        let snapshot = self.clock.begin_tick();
        for callback in snapshot {
            if self.clock.was_removed(&callback) {
                continue;
            }
            self.run_routine(callback)?;
        }
        self.clock.advance();
        Ok(())
    }

    /// Advance the simulation by `ticks` ticks.
    pub fn run_for(&mut self, ticks: u64) -> SimResult<()> {
        for _ in 0..ticks {
            self.tick()?;
        }
        Ok(())
    }

    /// Zero the clock, clear all callbacks, and empty the announcement
    /// log. Used when a new session begins over the same world.
    pub fn reset(&mut self) {
        self.clock.reset();
        self.log.clear();
    }

    // -----------------------------------------------------------------------
    // Population
    // -----------------------------------------------------------------------

    /// Spawn an ordinary person with no autonomous behavior.
    pub fn spawn_person(
        &mut self,
        name: impl Into<String>,
        place: EntityId,
    ) -> SimResult<EntityId> {
        self.spawn(name, place, PersonKind::Basic)
    }

    /// Spawn the player-controlled person.
    pub fn spawn_avatar(
        &mut self,
        name: impl Into<String>,
        place: EntityId,
    ) -> SimResult<EntityId> {
        self.spawn(name, place, PersonKind::Avatar)
    }

    /// Spawn an autonomous wanderer.
    pub fn spawn_npc(
        &mut self,
        name: impl Into<String>,
        place: EntityId,
        habits: Habits,
    ) -> SimResult<EntityId> {
        self.spawn(name, place, PersonKind::Npc(habits))
    }

    /// Spawn a troll.
    pub fn spawn_troll(
        &mut self,
        name: impl Into<String>,
        place: EntityId,
        habits: Habits,
        hunger: u32,
    ) -> SimResult<EntityId> {
        self.spawn(name, place, PersonKind::Troll { habits, hunger })
    }

    /// Spawn a hall monitor.
    pub fn spawn_monitor(
        &mut self,
        name: impl Into<String>,
        place: EntityId,
        habits: Habits,
        irritability: u32,
    ) -> SimResult<EntityId> {
        self.spawn(name, place, PersonKind::HallMonitor {
            habits,
            irritability,
        })
    }

    /// Spawn a professor, pre-seeded with a cloned copy of each canonical
    /// healing spell.
    pub fn spawn_professor(
        &mut self,
        name: impl Into<String>,
        place: EntityId,
        habits: Habits,
    ) -> SimResult<EntityId> {
        let id = self.spawn(name, place, PersonKind::Professor { habits })?;
        for template_name in spellbook::HEALING_TEMPLATES {
            let template = self.template(template_name)?;
            self.clone_spell(template, id)?;
        }
        Ok(id)
    }

    fn spawn(
        &mut self,
        name: impl Into<String>,
        place: EntityId,
        kind: PersonKind,
    ) -> SimResult<EntityId> {
        let id = self.world.add_person(name, place, kind)?;
        if kind.habits().is_some() {
            self.clock.add_callback(id, Routine::MoveAndTake);
        }
        match kind {
            PersonKind::Troll { .. } => self.clock.add_callback(id, Routine::EatPeople),
            PersonKind::HallMonitor { .. } => {
                self.clock.add_callback(id, Routine::IrritateStudents);
            }
            _ => {}
        }
        Ok(id)
    }

    // -----------------------------------------------------------------------
    // Announcements
    // -----------------------------------------------------------------------

    /// Emit an announcement observable only at `place`.
    pub(crate) fn announce_room(&mut self, place: EntityId, text: impl Into<String>) {
        self.emit(Scope::Room(place), text);
    }

    /// Emit an announcement observable everywhere.
    pub(crate) fn announce_world(&mut self, text: impl Into<String>) {
        self.emit(Scope::World, text);
    }

    fn emit(&mut self, scope: Scope, text: impl Into<String>) {
        let announcement = Announcement::new(self.clock.time(), scope, text);
        self.announcer.deliver(&announcement);
        self.log.push(announcement);
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// The world being simulated.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable access to the world, for topology building.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// The clock.
    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    /// The announcement log.
    pub fn announcements(&self) -> &AnnouncementLog {
        &self.log
    }

    /// The terminal place the dead are relocated to.
    pub fn heaven(&self) -> EntityId {
        self.heaven
    }

    /// The unreachable place holding the canonical spell templates.
    pub fn vault(&self) -> EntityId {
        self.vault
    }

    /// Extract the world, consuming the simulation.
    pub fn into_world(self) -> World {
        self.world
    }
}
