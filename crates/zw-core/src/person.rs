//! People: stats, birthplaces, and behavioral variants.

use serde::{Deserialize, Serialize};

use crate::entity::EntityId;

/// Default maximum health for a newly created person.
pub const DEFAULT_MAX_HEALTH: i32 = 3;

/// Default strength for a newly created person. Not consumed by combat yet.
pub const DEFAULT_STRENGTH: i32 = 1;

/// How restless and how grabby an autonomous person is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habits {
    /// Upper bound on random movement steps per tick (drawn from `1..=activity`).
    pub activity: u32,
    /// Denominator of the pickup probability: each tick the person grabs a
    /// random item with chance `1/miserly`.
    pub miserly: u32,
}

impl Habits {
    /// Create habits with the given activity and miserliness.
    pub fn new(activity: u32, miserly: u32) -> Self {
        Self { activity, miserly }
    }
}

impl Default for Habits {
    fn default() -> Self {
        Self {
            activity: 2,
            miserly: 3,
        }
    }
}

/// Behavioral variant of a person. Dispatch happens in the simulation's
/// tick routines and in `suffer`; the data model stays flat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonKind {
    /// An ordinary person with no autonomous behavior.
    Basic,
    /// The player-controlled person. Like `Basic`, but a successful move
    /// also advances the clock by one tick.
    Avatar,
    /// An autonomous wanderer that moves and picks things up on its own.
    Npc(Habits),
    /// A wanderer that also bites co-located people.
    Troll {
        /// Wandering habits.
        habits: Habits,
        /// Denominator of the bite probability per tick.
        hunger: u32,
    },
    /// A wanderer that sends loiterers back to their birthplaces.
    HallMonitor {
        /// Wandering habits.
        habits: Habits,
        /// Denominator of the scolding probability per tick.
        irritability: u32,
    },
    /// A wandering spell-teacher. Immune to damage; carries healing spells.
    Professor {
        /// Wandering habits.
        habits: Habits,
    },
}

impl PersonKind {
    /// The wandering habits, if this kind moves autonomously.
    pub fn habits(&self) -> Option<Habits> {
        match *self {
            Self::Basic | Self::Avatar => None,
            Self::Npc(habits)
            | Self::Troll { habits, .. }
            | Self::HallMonitor { habits, .. }
            | Self::Professor { habits } => Some(habits),
        }
    }

    /// Returns `true` for the professor variant.
    pub fn is_professor(&self) -> bool {
        matches!(self, Self::Professor { .. })
    }

    /// Returns `true` for the player-controlled variant.
    pub fn is_avatar(&self) -> bool {
        matches!(self, Self::Avatar)
    }
}

/// A person's stats and standing state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    /// Current health. Death triggers at zero or below.
    pub health: i32,
    /// Upper bound that healing clamps to.
    pub max_health: i32,
    /// Raw strength. Stored for parity; combat does not consume it yet.
    pub strength: i32,
    /// The place this person was created at. Permanent; used as the home
    /// destination for forced relocation.
    pub birthplace: EntityId,
    /// Behavioral variant.
    pub kind: PersonKind,
}

impl Person {
    /// Create a person with default stats, born at `birthplace`.
    pub fn new(birthplace: EntityId, kind: PersonKind) -> Self {
        Self {
            health: DEFAULT_MAX_HEALTH,
            max_health: DEFAULT_MAX_HEALTH,
            strength: DEFAULT_STRENGTH,
            birthplace,
            kind,
        }
    }

    /// Returns `true` while health is above zero.
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_person_has_default_stats() {
        let home = EntityId::new();
        let person = Person::new(home, PersonKind::Basic);
        assert_eq!(person.health, 3);
        assert_eq!(person.max_health, 3);
        assert_eq!(person.strength, 1);
        assert_eq!(person.birthplace, home);
        assert!(person.is_alive());
    }

    #[test]
    fn habits_only_on_autonomous_kinds() {
        assert!(PersonKind::Basic.habits().is_none());
        assert!(PersonKind::Avatar.habits().is_none());

        let habits = Habits::new(3, 5);
        assert_eq!(PersonKind::Npc(habits).habits(), Some(habits));
        assert_eq!(
            PersonKind::Troll { habits, hunger: 2 }.habits(),
            Some(habits)
        );
        assert_eq!(
            PersonKind::HallMonitor {
                habits,
                irritability: 4
            }
            .habits(),
            Some(habits)
        );
        assert_eq!(PersonKind::Professor { habits }.habits(), Some(habits));
    }

    #[test]
    fn professor_predicate() {
        assert!(
            PersonKind::Professor {
                habits: Habits::default()
            }
            .is_professor()
        );
        assert!(!PersonKind::Basic.is_professor());
    }

    #[test]
    fn zero_health_is_dead() {
        let mut person = Person::new(EntityId::new(), PersonKind::Basic);
        person.health = 0;
        assert!(!person.is_alive());
    }
}
