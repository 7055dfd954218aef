use std::fs;
use std::path::Path;

use zw_simulation::SimConfig;

use crate::campus;

/// Build the campus and dump the world as pretty JSON, to stdout or a file.
pub fn run(output: Option<&Path>) -> Result<(), String> {
    let (sim, _campus) = campus::build(SimConfig::default())
        .map_err(|e| format!("world setup failed: {e}"))?;
    let json =
        serde_json::to_string_pretty(sim.world()).map_err(|e| format!("serialization: {e}"))?;

    match output {
        Some(path) => {
            fs::write(path, json).map_err(|e| format!("cannot write {}: {e}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
