use zw_core::{EntityId, WorldError};

use crate::clock::Routine;

/// Alias for `Result<T, SimError>`.
pub type SimResult<T> = Result<T, SimError>;

/// Hard failures of the simulation layer.
///
/// Gameplay refusals (no exit, spell protection, wrong actor) are not
/// errors: operations announce them and return `Ok(false)`. These
/// variants mark contract breaches a driver should surface, not retry.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// The underlying world rejected a structural operation.
    #[error(transparent)]
    World(#[from] WorldError),

    /// Tried to remove a callback that was never registered.
    #[error("no callback \"{routine}\" registered for {owner}")]
    CallbackNotFound {
        /// The entity the callback would belong to.
        owner: EntityId,
        /// The routine that was looked up.
        routine: Routine,
    },

    /// The entity exists but is not a person.
    #[error("entity is not a person: {0}")]
    NotAPerson(EntityId),

    /// The entity exists but is not a spell.
    #[error("entity is not a spell: {0}")]
    NotASpell(EntityId),

    /// The person does not hold the named thing.
    #[error("{person} is not carrying {thing}")]
    NotCarried {
        /// The supposed holder.
        person: EntityId,
        /// The thing that was not found in their possession.
        thing: EntityId,
    },

    /// No spell template with this name exists in the vault.
    #[error("no spell template named \"{0}\" in the vault")]
    UnknownTemplate(String),
}
