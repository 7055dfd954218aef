use crate::entity::EntityId;

/// Alias for `Result<T, WorldError>`.
pub type WorldResult<T> = Result<T, WorldError>;

/// Errors that can occur when manipulating a world.
///
/// These are contract breaches, not gameplay refusals: the simulation layer
/// checks preconditions first and announces a refusal instead of ever
/// surfacing one of these to a player.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// The requested entity ID does not exist in the world.
    #[error("entity not found: {0}")]
    EntityNotFound(EntityId),

    /// The entity cannot hold other entities.
    #[error("entity is not a container: {0}")]
    NotAContainer(EntityId),

    /// The entity is not a place.
    #[error("entity is not a place: {0}")]
    NotAPlace(EntityId),

    /// The entity's container may never change (a place, or a fixed thing).
    #[error("entity cannot be relocated: {0}")]
    NotPortable(EntityId),

    /// The entity has no container (places are never contained).
    #[error("entity has no container: {0}")]
    NotContained(EntityId),
}
