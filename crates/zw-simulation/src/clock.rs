use std::fmt;

use zw_core::EntityId;

use crate::error::{SimError, SimResult};

/// The named per-tick routine a callback runs.
///
/// Callbacks are command values dispatched through the simulation, not
/// closures; this keeps registration, equality, and removal plain value
/// comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Routine {
    /// Random wandering plus the occasional item grab.
    MoveAndTake,
    /// Troll feeding: bite a random co-located person.
    EatPeople,
    /// Hall-monitor duty: march loiterers back to their birthplaces.
    IrritateStudents,
}

impl fmt::Display for Routine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MoveAndTake => write!(f, "move-and-take"),
            Self::EatPeople => write!(f, "eat-people"),
            Self::IrritateStudents => write!(f, "irritate-students"),
        }
    }
}

/// A registered (owner, routine) binding, activated once per tick.
///
/// Two callbacks are equal iff both owner and routine match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Callback {
    /// The entity this callback acts for.
    pub owner: EntityId,
    /// The routine to run on activation.
    pub routine: Routine,
}

/// Tracks simulation time and the live callback set.
///
/// Time only moves through [`Clock::advance`], called by the simulation at
/// the end of each tick. Callbacks are stored newest-registered-first; the
/// per-tick snapshot reverses that so activation order is oldest-first.
#[derive(Debug, Default)]
pub struct Clock {
    time: u64,
    callbacks: Vec<Callback>,
    removed_this_tick: Vec<Callback>,
}

impl Clock {
    /// Create a clock at time zero with no callbacks.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current time. Never advances on its own.
    pub fn time(&self) -> u64 {
        self.time
    }

    /// The registered callbacks, newest-registered-first.
    pub fn callbacks(&self) -> &[Callback] {
        &self.callbacks
    }

    /// Register a callback. Registering a duplicate (same owner and
    /// routine) is a no-op.
    pub fn add_callback(&mut self, owner: EntityId, routine: Routine) {
        let callback = Callback { owner, routine };
        if self.callbacks.contains(&callback) {
            return;
        }
        self.callbacks.insert(0, callback);
    }

    /// Remove the callback with the given owner and routine.
    ///
    /// Safe to call from inside an active tick, including from the
    /// callback's own routine: the removal is recorded in the current
    /// tick's marker set immediately, so a not-yet-activated snapshot
    /// entry will be skipped.
    pub fn remove_callback(&mut self, owner: EntityId, routine: Routine) -> SimResult<()> {
        let callback = Callback { owner, routine };
        let position = self
            .callbacks
            .iter()
            .position(|c| *c == callback)
            .ok_or(SimError::CallbackNotFound { owner, routine })?;
        self.callbacks.remove(position);
        self.removed_this_tick.push(callback);
        Ok(())
    }

    /// Begin a tick: clear the removed-this-tick markers and return a
    /// snapshot of the live callbacks in oldest-registered-first order.
    /// The snapshot is fixed before any activation runs.
    pub fn begin_tick(&mut self) -> Vec<Callback> {
        self.removed_this_tick.clear();
        self.callbacks.iter().rev().copied().collect()
    }

    /// Returns `true` if the callback was removed since the current tick
    /// began.
    pub fn was_removed(&self, callback: &Callback) -> bool {
        self.removed_this_tick.contains(callback)
    }

    /// Advance time by one. The sole mutator of the current time.
    pub fn advance(&mut self) {
        self.time += 1;
    }

    /// Zero the time and clear all callbacks. Used when a new simulation
    /// session begins.
    pub fn reset(&mut self) {
        self.time = 0;
        self.callbacks.clear();
        self.removed_this_tick.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_starts_at_zero() {
        let clock = Clock::new();
        assert_eq!(clock.time(), 0);
        assert!(clock.callbacks().is_empty());
    }

    #[test]
    fn advance_is_the_only_time_mutator() {
        let mut clock = Clock::new();
        clock.add_callback(EntityId::new(), Routine::MoveAndTake);
        clock.begin_tick();
        assert_eq!(clock.time(), 0);
        clock.advance();
        assert_eq!(clock.time(), 1);
    }

    #[test]
    fn duplicate_registration_is_a_no_op() {
        let mut clock = Clock::new();
        let owner = EntityId::new();
        clock.add_callback(owner, Routine::MoveAndTake);
        clock.add_callback(owner, Routine::MoveAndTake);
        assert_eq!(clock.callbacks().len(), 1);

        // Same owner, different routine is a distinct callback.
        clock.add_callback(owner, Routine::EatPeople);
        assert_eq!(clock.callbacks().len(), 2);
    }

    #[test]
    fn storage_is_newest_first_and_snapshot_oldest_first() {
        let mut clock = Clock::new();
        let first = EntityId::new();
        let second = EntityId::new();
        clock.add_callback(first, Routine::MoveAndTake);
        clock.add_callback(second, Routine::MoveAndTake);

        assert_eq!(clock.callbacks()[0].owner, second);
        let snapshot = clock.begin_tick();
        assert_eq!(snapshot[0].owner, first);
        assert_eq!(snapshot[1].owner, second);
    }

    #[test]
    fn removing_an_unknown_callback_is_a_hard_error() {
        let mut clock = Clock::new();
        let result = clock.remove_callback(EntityId::new(), Routine::EatPeople);
        assert!(matches!(result, Err(SimError::CallbackNotFound { .. })));
    }

    #[test]
    fn removal_during_tick_marks_pending_entries() {
        let mut clock = Clock::new();
        let early = EntityId::new();
        let late = EntityId::new();
        clock.add_callback(early, Routine::MoveAndTake);
        clock.add_callback(late, Routine::MoveAndTake);

        let snapshot = clock.begin_tick();
        let mut activated = Vec::new();
        for callback in &snapshot {
            if clock.was_removed(callback) {
                continue;
            }
            activated.push(callback.owner);
            if callback.owner == early {
                // The early callback's side effect removes the later one.
                clock.remove_callback(late, Routine::MoveAndTake).unwrap();
            }
        }

        assert_eq!(activated, vec![early]);
        assert_eq!(clock.callbacks().len(), 1);
    }

    #[test]
    fn self_removal_during_tick_is_safe() {
        let mut clock = Clock::new();
        let owner = EntityId::new();
        clock.add_callback(owner, Routine::EatPeople);

        let snapshot = clock.begin_tick();
        for callback in &snapshot {
            if clock.was_removed(callback) {
                continue;
            }
            clock
                .remove_callback(callback.owner, callback.routine)
                .unwrap();
        }
        assert!(clock.callbacks().is_empty());
    }

    #[test]
    fn markers_reset_each_tick() {
        let mut clock = Clock::new();
        let owner = EntityId::new();
        clock.add_callback(owner, Routine::MoveAndTake);
        clock.begin_tick();
        clock.remove_callback(owner, Routine::MoveAndTake).unwrap();
        let callback = Callback {
            owner,
            routine: Routine::MoveAndTake,
        };
        assert!(clock.was_removed(&callback));

        clock.begin_tick();
        assert!(!clock.was_removed(&callback));
    }

    #[test]
    fn reset_zeroes_time_and_clears_callbacks() {
        let mut clock = Clock::new();
        clock.add_callback(EntityId::new(), Routine::MoveAndTake);
        clock.advance();
        clock.advance();

        clock.reset();
        assert_eq!(clock.time(), 0);
        assert!(clock.callbacks().is_empty());
    }
}
