//! Live console delivery for announcements.

use colored::Colorize;
use zw_simulation::{Announcement, Announcer, Scope};

/// Prints every announcement as it happens, tagged with its tick.
/// World-scoped announcements (deaths) are highlighted.
#[derive(Debug, Default)]
pub struct ConsoleAnnouncer;

impl Announcer for ConsoleAnnouncer {
    fn deliver(&mut self, announcement: &Announcement) {
        let tick = format!("[tick {:>3}]", announcement.tick).dimmed();
        match announcement.scope {
            Scope::World => println!("  {tick} {}", announcement.text.red().bold()),
            Scope::Room(_) => println!("  {tick} {}", announcement.text),
        }
    }
}
