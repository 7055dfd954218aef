//! The spell vault: canonical templates, cloning, and casting.
//!
//! Every spell in the world is a clone of a template stocked once, at
//! construction, into the vault, an exit-less place no person can reach.
//! Templates are never moved or consumed.

use zw_core::{EntityId, Spell, SpellEffect, World, WorldResult};

use crate::error::{SimError, SimResult};
use crate::simulation::Simulation;

/// Names of the healing templates every professor is seeded with.
pub const HEALING_TEMPLATES: [&str; 3] = ["lesser-mending", "soothing-balm", "breath-of-dawn"];

/// Stock the vault with the canonical spell templates.
pub(crate) fn stock_vault(world: &mut World, vault: EntityId) -> WorldResult<()> {
    let canon = [
        (
            "lesser-mending",
            "heile heile segen",
            SpellEffect::Heal { points: 1 },
        ),
        (
            "soothing-balm",
            "unguentum lenis",
            SpellEffect::Heal { points: 2 },
        ),
        (
            "breath-of-dawn",
            "aurora spirat",
            SpellEffect::Heal { points: 3 },
        ),
        (
            "sneeze-hex",
            "kribbel krabbel",
            SpellEffect::Jinx {
                taunt: "sneezes uncontrollably".to_string(),
            },
        ),
    ];
    for (name, incantation, effect) in canon {
        world.add_spell(name, vault, Spell::new(incantation, effect))?;
    }
    Ok(())
}

impl Simulation {
    /// Find a vault template by name.
    pub fn template(&self, name: &str) -> SimResult<EntityId> {
        self.world
            .contents(self.vault)
            .iter()
            .copied()
            .find(|id| self.world.get_entity(*id).is_some_and(|e| e.name == name))
            .ok_or_else(|| SimError::UnknownTemplate(name.to_string()))
    }

    /// Clone a spell into `destination`: same name, incantation, and
    /// effect; fresh identity and container.
    pub fn clone_spell(
        &mut self,
        template: EntityId,
        destination: EntityId,
    ) -> SimResult<EntityId> {
        let (name, spell) = {
            let entity = self.world.entity(template)?;
            let spell = entity.as_spell().ok_or(SimError::NotASpell(template))?;
            (entity.name.clone(), spell.clone())
        };
        Ok(self.world.add_spell(name, destination, spell)?)
    }

    /// Cast a held spell at a target, applying its stored effect.
    pub fn cast(
        &mut self,
        caster: EntityId,
        spell: EntityId,
        target: EntityId,
    ) -> SimResult<bool> {
        self.person(caster)?;
        let place = self.place_of(caster)?;
        let caster_name = self.world.entity_name(caster);
        let spell_name = self.world.entity_name(spell);

        if !self.world.contains(caster, spell) {
            self.announce_room(
                place,
                format!("{caster_name} gestures grandly, but does not know {spell_name}."),
            );
            return Ok(false);
        }
        let payload = self
            .world
            .entity(spell)?
            .as_spell()
            .ok_or(SimError::NotASpell(spell))?
            .clone();

        self.announce_room(
            place,
            format!("{caster_name} intones: \"{}!\"", payload.incantation),
        );
        match payload.effect {
            SpellEffect::Heal { points } => {
                self.heal(target, points)?;
            }
            SpellEffect::Jinx { taunt } => {
                let target_name = self.world.entity_name(target);
                self.announce_room(place, format!("{target_name} {taunt}."));
            }
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use zw_core::PersonKind;

    fn sim() -> Simulation {
        Simulation::new(World::new("Test"), SimConfig::default()).unwrap()
    }

    #[test]
    fn vault_holds_all_canonical_templates() {
        let sim = sim();
        for name in HEALING_TEMPLATES {
            assert!(sim.template(name).is_ok());
        }
        assert!(sim.template("sneeze-hex").is_ok());
        assert!(matches!(
            sim.template("summon-homework"),
            Err(SimError::UnknownTemplate(_))
        ));
    }

    #[test]
    fn clone_preserves_payload_with_fresh_identity() {
        let mut sim = sim();
        let lobby = sim.world_mut().add_place("Lobby");
        let template = sim.template("soothing-balm").unwrap();

        let copy = sim.clone_spell(template, lobby).unwrap();

        assert_ne!(copy, template);
        assert!(sim.world().contains(lobby, copy));
        // The template never leaves the vault.
        assert!(sim.world().contains(sim.vault(), template));
        assert_eq!(
            sim.world().get_entity(copy).unwrap().as_spell(),
            sim.world().get_entity(template).unwrap().as_spell()
        );
    }

    #[test]
    fn cloning_a_non_spell_is_a_hard_error() {
        let mut sim = sim();
        let lobby = sim.world_mut().add_place("Lobby");
        let coin = sim.world_mut().add_thing("Coin", lobby, true).unwrap();
        assert!(matches!(
            sim.clone_spell(coin, lobby),
            Err(SimError::NotASpell(_))
        ));
    }

    #[test]
    fn casting_a_healing_spell_heals_with_clamp() {
        let mut sim = sim();
        let lobby = sim.world_mut().add_place("Lobby");
        let caster = sim
            .world_mut()
            .add_person("Alyx", lobby, PersonKind::Basic)
            .unwrap();
        let patient = sim
            .world_mut()
            .add_person("Bert", lobby, PersonKind::Basic)
            .unwrap();
        sim.person_mut(patient).unwrap().health = 1;
        let template = sim.template("breath-of-dawn").unwrap();
        let spell = sim.clone_spell(template, caster).unwrap();

        assert!(sim.cast(caster, spell, patient).unwrap());

        // 1 + 3 clamps to max_health 3.
        assert_eq!(sim.person(patient).unwrap().health, 3);
        let texts: Vec<&str> = sim
            .announcements()
            .entries()
            .iter()
            .map(|a| a.text.as_str())
            .collect();
        assert!(texts.iter().any(|t| t.contains("aurora spirat")));
        assert!(texts.iter().any(|t| t.contains("looks healthier")));
    }

    #[test]
    fn casting_an_unheld_spell_is_refused() {
        let mut sim = sim();
        let lobby = sim.world_mut().add_place("Lobby");
        let caster = sim
            .world_mut()
            .add_person("Alyx", lobby, PersonKind::Basic)
            .unwrap();
        let template = sim.template("lesser-mending").unwrap();

        assert!(!sim.cast(caster, template, caster).unwrap());
        // The template stayed put.
        assert!(sim.world().contains(sim.vault(), template));
    }

    #[test]
    fn jinx_spells_only_embarrass() {
        let mut sim = sim();
        let lobby = sim.world_mut().add_place("Lobby");
        let caster = sim
            .world_mut()
            .add_person("Alyx", lobby, PersonKind::Basic)
            .unwrap();
        let victim = sim
            .world_mut()
            .add_person("Bert", lobby, PersonKind::Basic)
            .unwrap();
        let template = sim.template("sneeze-hex").unwrap();
        let spell = sim.clone_spell(template, caster).unwrap();

        assert!(sim.cast(caster, spell, victim).unwrap());

        assert_eq!(sim.person(victim).unwrap().health, 3);
        let last = sim.announcements().entries().last().unwrap();
        assert!(last.text.contains("Bert sneezes uncontrollably"));
    }
}
