//! The default world: a small academy of magic.
//!
//! This module is the topology collaborator the simulation core consumes:
//! it authors the places, their connecting exits, the initial objects, and
//! the resident population. The core itself never defines a map.

use zw_core::{Direction, EntityId, Habits, World};
use zw_simulation::{SimConfig, SimResult, Simulation};

/// Handles into the freshly built campus a driver cares about.
pub struct Campus {
    /// Where newly arriving avatars start.
    pub entry: EntityId,
}

/// Build the academy world, wrap it in a simulation, and move the
/// residents in.
pub fn build(config: SimConfig) -> SimResult<(Simulation, Campus)> {
    let mut world = World::new("The Academy of Zauberwerk");

    // Ground floor.
    let lobby = world.add_place("Grand Lobby");
    let refectory = world.add_place("Refectory");
    let library = world.add_place("Library");
    let staircase = world.add_place("Marble Staircase");
    world.connect_both(lobby, Direction::West, refectory)?;
    world.connect_both(lobby, Direction::East, library)?;
    world.connect_both(lobby, Direction::Up, staircase)?;

    // Upper floor.
    let upper_hall = world.add_place("Upper Hall");
    let dormitory = world.add_place("Dormitory");
    let tower = world.add_place("Astronomy Tower");
    world.connect_both(staircase, Direction::Up, upper_hall)?;
    world.connect_both(upper_hall, Direction::North, dormitory)?;
    world.connect_both(upper_hall, Direction::Up, tower)?;

    // Below stairs.
    let cellar_stair = world.add_place("Cellar Stair");
    let potions_cellar = world.add_place("Potions Cellar");
    let warren = world.add_place("Troll Warren");
    world.connect_both(lobby, Direction::Down, cellar_stair)?;
    world.connect_both(cellar_stair, Direction::Down, potions_cellar)?;
    world.connect_both(potions_cellar, Direction::North, warren)?;

    // Furnishings and loose valuables.
    world.add_thing("notice board", lobby, false)?;
    world.add_thing("welcome pamphlet", lobby, true)?;
    world.add_thing("ancient globe", library, false)?;
    world.add_thing("dusty tome", library, true)?;
    world.add_thing("pumpkin pasty", refectory, true)?;
    world.add_thing("brass lantern", cellar_stair, true)?;
    world.add_thing("silver key", potions_cellar, true)?;
    world.add_thing("lost scarf", dormitory, true)?;

    let mut sim = Simulation::new(world, config)?;

    // Residents. Professors drift; the monitor patrols; the troll lurks.
    sim.spawn_professor("Professor Thistlewood", library, Habits::new(1, 10))?;
    sim.spawn_monitor("Hilda the Monitor", upper_hall, Habits::new(2, 10), 2)?;
    sim.spawn_troll("Grob", warren, Habits::new(1, 4), 3)?;
    sim.spawn_npc("Pip", dormitory, Habits::new(2, 3))?;
    sim.spawn_npc("Greta", refectory, Habits::new(2, 3))?;

    Ok((sim, Campus { entry: lobby }))
}
