//! CLI subcommand implementations.

/// Dump the freshly built campus world as JSON.
pub mod export;
/// Interactive avatar session.
pub mod play;
/// Headless simulation run with a summary report.
pub mod simulate;
