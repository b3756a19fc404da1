use std::path::Path;

use colored::Colorize;

use nw_core::KeyValueStore;
use nw_session::SettingsForm;

pub fn show(dir: &Path) -> Result<(), String> {
    let settings = super::open_store(dir).load();
    super::print_settings(&settings);
    Ok(())
}

pub fn set(dir: &Path, count: Option<usize>, names: &[String]) -> Result<(), String> {
    let mut store = super::open_store(dir);
    let mut form = SettingsForm::from_settings(&store.load());

    if let Some(count) = count {
        form.set_num_dice(count).map_err(|e| e.to_string())?;
    }
    for arg in names {
        let (position, text) = parse_name_arg(arg)?;
        form.set_name(position, text).map_err(|e| e.to_string())?;
    }

    let settings = form.submit();
    store.save(&settings).map_err(|e| e.to_string())?;

    println!("  {} settings", "Saved".bold());
    super::print_settings(&settings);
    Ok(())
}

pub fn reset(dir: &Path) -> Result<(), String> {
    let mut store = super::open_store(dir);
    let key = store.key().to_string();
    store
        .backend_mut()
        .remove(&key)
        .map_err(|e| e.to_string())?;
    println!("  Settings reset to defaults.");
    Ok(())
}

/// Parse `POS=TEXT` into a 0-based position and the text.
fn parse_name_arg(arg: &str) -> Result<(usize, &str), String> {
    let (position, text) = arg
        .split_once('=')
        .ok_or_else(|| format!("invalid name '{arg}', expected POS=TEXT"))?;
    let index = position
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|p| p.checked_sub(1))
        .ok_or_else(|| format!("invalid face position '{position}' (choose 1-6)"))?;
    Ok((index, text))
}
