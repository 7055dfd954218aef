use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use zw_core::PersonKind;
use zw_simulation::{Scope, SimConfig};

use crate::campus;
use crate::console::ConsoleAnnouncer;

/// Run the campus headless for `ticks` ticks and print a report.
pub fn run(ticks: u64, seed: u64, verbose: bool) -> Result<(), String> {
    let config = SimConfig::default()
        .with_seed(seed)
        .with_max_announcements(2000);
    let (mut sim, _campus) =
        campus::build(config).map_err(|e| format!("world setup failed: {e}"))?;
    if verbose {
        sim = sim.with_announcer(Box::new(ConsoleAnnouncer));
        println!();
    }

    sim.run_for(ticks)
        .map_err(|e| format!("simulation error: {e}"))?;

    // Header
    println!();
    println!(
        "  {} '{}' {}",
        "Simulation".bold(),
        sim.world().name,
        format!("({ticks} ticks, seed={seed})").dimmed()
    );
    println!(
        "  {} entities, {} announcements logged",
        sim.world().entity_count(),
        sim.announcements().len()
    );
    println!();

    // World-scoped announcements are the notable ones (deaths).
    let notable: Vec<_> = sim
        .announcements()
        .entries()
        .iter()
        .filter(|a| matches!(a.scope, Scope::World))
        .collect();
    if !notable.is_empty() {
        println!("  {}", "Notable Events".bold().underline());
        for announcement in notable {
            println!(
                "  {}  {}",
                format!("[tick {:>3}]", announcement.tick).dimmed(),
                announcement.text
            );
        }
        println!();
    }

    // Resident status table, sorted by name for stable output.
    let mut rows: Vec<[String; 5]> = sim
        .world()
        .all_entities()
        .filter_map(|e| {
            let person = e.as_person()?;
            let kind = match person.kind {
                PersonKind::Basic => "person",
                PersonKind::Avatar => "avatar",
                PersonKind::Npc(_) => "wanderer",
                PersonKind::Troll { .. } => "troll",
                PersonKind::HallMonitor { .. } => "hall monitor",
                PersonKind::Professor { .. } => "professor",
            };
            let location = e
                .location
                .map_or_else(|| "nowhere".to_string(), |l| sim.world().entity_name(l));
            Some([
                e.name.clone(),
                kind.to_string(),
                format!("{}/{}", person.health, person.max_health),
                location,
                sim.world().contents(e.id).len().to_string(),
            ])
        })
        .collect();
    rows.sort();

    println!("  {}", "Residents".bold().underline());
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(["Name", "Kind", "Health", "Location", "Carrying"]);
    for row in rows {
        table.add_row(row);
    }
    println!("{table}");
    Ok(())
}
