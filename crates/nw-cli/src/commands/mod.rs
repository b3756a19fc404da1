pub mod offline;
pub mod play;
pub mod roll;
pub mod settings;

use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use nw_core::{DirStore, Settings, SettingsStore};

/// Open the settings store kept in `dir`.
fn open_store(dir: &Path) -> SettingsStore<DirStore> {
    SettingsStore::new(DirStore::new(dir))
}

/// Print the die count and a table of face names.
fn print_settings(settings: &Settings) {
    println!("  Active dice: {}", settings.active_die_count());

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Face", "Name"]);
    for (i, name) in settings.face_names().iter().enumerate() {
        table.add_row(vec![(i + 1).to_string(), name.clone()]);
    }
    println!("{table}");
}
