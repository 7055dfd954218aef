use std::io::{self, BufRead, Write};

use colored::Colorize;
use zw_core::{Direction, EntityId, World};
use zw_simulation::{SimConfig, SimResult, Simulation};

use crate::campus;

/// Interactive avatar session: a token-dispatch loop over the person
/// operations. Commands are plain words, not natural language.
pub fn run(seed: u64, name: &str, omniscient: bool) -> Result<(), String> {
    let config = SimConfig::default()
        .with_seed(seed)
        .with_max_announcements(2000);
    let (mut sim, campus) =
        campus::build(config).map_err(|e| format!("world setup failed: {e}"))?;
    let avatar = sim
        .spawn_avatar(name, campus.entry)
        .map_err(|e| format!("cannot spawn avatar: {e}"))?;

    println!();
    println!(
        "  {} — you are {}. Type \"help\" for commands.",
        sim.world().name.bold(),
        name.bold()
    );
    println!();
    println!(
        "{}",
        sim.look_around(avatar)
            .map_err(|e| format!("look failed: {e}"))?
    );

    let mut seen = sim.announcements().len();
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .map_err(|e| e.to_string())?;
        if read == 0 {
            break;
        }

        let words: Vec<&str> = line.split_whitespace().collect();
        let outcome = dispatch(&mut sim, avatar, &words);
        match outcome {
            Ok(Response::Quit) => break,
            Ok(Response::Text(text)) => println!("{text}"),
            Ok(Response::Silent) => {}
            Err(e) => return Err(format!("engine failure: {e}")),
        }

        flush_announcements(&sim, avatar, omniscient, &mut seen);

        let person = sim.person(avatar).map_err(|e| e.to_string())?;
        if !person.is_alive() {
            println!("{}", "You have died. The session ends here.".red().bold());
            break;
        }
    }
    Ok(())
}

enum Response {
    Text(String),
    Silent,
    Quit,
}

fn dispatch(sim: &mut Simulation, avatar: EntityId, words: &[&str]) -> SimResult<Response> {
    match words {
        [] => Ok(Response::Silent),
        ["quit"] | ["q"] => Ok(Response::Quit),
        ["help"] => Ok(Response::Text(HELP.to_string())),
        ["look"] | ["l"] => sim.look_around(avatar).map(Response::Text),
        ["inventory"] | ["i"] => {
            let carried: Vec<String> = sim
                .world()
                .contents(avatar)
                .iter()
                .map(|id| sim.world().entity_name(*id))
                .collect();
            Ok(Response::Text(if carried.is_empty() {
                "You are carrying nothing.".to_string()
            } else {
                format!("You are carrying: {}.", carried.join(", "))
            }))
        }
        ["wait"] => {
            sim.tick()?;
            Ok(Response::Text("Time passes.".to_string()))
        }
        ["go", word] => match Direction::parse(word) {
            Some(direction) => {
                sim.go(avatar, direction)?;
                Ok(Response::Silent)
            }
            None => Ok(Response::Text(format!("\"{word}\" is not a direction."))),
        },
        [word] if Direction::parse(word).is_some() => {
            // Bare direction shorthand.
            if let Some(direction) = Direction::parse(word) {
                sim.go(avatar, direction)?;
            }
            Ok(Response::Silent)
        }
        ["say", rest @ ..] if !rest.is_empty() => {
            sim.say(avatar, &rest.join(" "))?;
            Ok(Response::Silent)
        }
        ["take", rest @ ..] if !rest.is_empty() => {
            let wanted = rest.join(" ");
            let place = sim.world().location_of(avatar)?;
            let here = sim.world().contents(place).to_vec();
            match find_named(sim.world(), &here, &wanted) {
                Some(thing) => {
                    sim.take(avatar, thing)?;
                    Ok(Response::Silent)
                }
                None => Ok(Response::Text(format!("There is no {wanted} here."))),
            }
        }
        ["drop", rest @ ..] if !rest.is_empty() => {
            let wanted = rest.join(" ");
            let held = sim.world().contents(avatar).to_vec();
            match find_named(sim.world(), &held, &wanted) {
                Some(thing) => {
                    sim.drop_item(avatar, thing)?;
                    Ok(Response::Silent)
                }
                None => Ok(Response::Text(format!("You have no {wanted}."))),
            }
        }
        ["learn", rest @ ..] if !rest.is_empty() => {
            let wanted = rest.join(" ");
            let place = sim.world().location_of(avatar)?;
            // Find a co-located professor carrying the named spell.
            let professors: Vec<EntityId> = sim
                .world()
                .occupants(place)
                .into_iter()
                .filter(|id| {
                    sim.world()
                        .get_entity(*id)
                        .and_then(zw_core::Entity::as_person)
                        .is_some_and(|p| p.kind.is_professor())
                })
                .collect();
            for professor in &professors {
                let pockets = sim.world().contents(*professor).to_vec();
                if let Some(spell) = find_named(sim.world(), &pockets, &wanted) {
                    sim.learn_spell(avatar, spell, *professor)?;
                    return Ok(Response::Silent);
                }
            }
            Ok(Response::Text(if professors.is_empty() {
                "There is no professor here to ask.".to_string()
            } else {
                format!("No professor here knows {wanted}.")
            }))
        }
        ["cast", spell_name, target_name] => {
            let held = sim.world().contents(avatar).to_vec();
            let Some(spell) = find_named(sim.world(), &held, spell_name) else {
                return Ok(Response::Text(format!("You do not know {spell_name}.")));
            };
            let place = sim.world().location_of(avatar)?;
            let here = sim.world().occupants(place);
            let target = if *target_name == "me" {
                Some(avatar)
            } else {
                find_named(sim.world(), &here, target_name)
            };
            match target {
                Some(target) => {
                    sim.cast(avatar, spell, target)?;
                    Ok(Response::Silent)
                }
                None => Ok(Response::Text(format!("{target_name} is not here."))),
            }
        }
        _ => Ok(Response::Text(
            "Unknown command; try \"help\".".to_string(),
        )),
    }
}

/// Case-insensitive name lookup within a candidate set.
fn find_named(world: &World, ids: &[EntityId], name: &str) -> Option<EntityId> {
    let lower = name.to_lowercase();
    ids.iter()
        .copied()
        .find(|id| world.entity_name(*id).to_lowercase() == lower)
}

/// Print announcements the player could observe since the last flush.
fn flush_announcements(sim: &Simulation, avatar: EntityId, omniscient: bool, seen: &mut usize) {
    let here = sim.world().location_of(avatar).ok();
    for announcement in &sim.announcements().entries()[*seen..] {
        let visible =
            omniscient || here.is_some_and(|place| announcement.visible_from(place));
        if visible {
            println!("  {}", announcement.text);
        }
    }
    *seen = sim.announcements().len();
}

const HELP: &str = "\
Commands:
  look (l)              describe your surroundings
  go <direction>        walk through an exit (or just: north, up, ...)
  take <thing>          pick something up
  drop <thing>          put something down
  say <words>           speak to the room
  learn <spell>         ask a co-located professor to teach a spell
  cast <spell> <whom>   cast a spell you know (\"me\" targets yourself)
  inventory (i)         list what you carry
  wait                  let one tick pass
  quit (q)              end the session";
